use std::collections::BTreeMap;

use super::classify::{GenderKind, Variant};
use super::error::{Error, Result};
use super::EMOJI_PRESENTATION;

/// A single entry in the emoji catalog.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Emoji {
    /// The base codepoints of the neutral definition.
    pub codepoints: Vec<u32>,
    /// The name of the neutral definition.
    pub name: String,
    /// The group identifier.
    pub group: usize,
    /// The subgroup identifier.
    pub subgroup: usize,
    /// Whether skin tone variants of this emoji exist.
    pub skin_tones: bool,
    /// How the gendered variants of this emoji are spelled, if any exist.
    pub gender: GenderKind,
    /// The CLDR short names for this emoji.
    pub cldr: Vec<String>,
}

/// Return the canonical key of the given base codepoints.
pub fn key(codepoints: &[u32]) -> String {
    codepoints
        .iter()
        .map(|cp| format!("{:04X}", cp))
        .collect::<Vec<String>>()
        .join(" ")
}

/// The catalog of canonical emoji, in the order of their neutral
/// definitions.
///
/// Neutral rows create entries. Every other row is a variant that must
/// resolve to an entry created before it, and only ever sets flags on it.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    emojis: Vec<Emoji>,
    by_key: BTreeMap<String, usize>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Catalog {
        Catalog::default()
    }

    /// Add a classified row to this catalog.
    ///
    /// `group` and `subgroup` are only used when the row defines a new entry.
    pub fn ingest(
        &mut self,
        variant: Variant,
        name: &str,
        group: usize,
        subgroup: usize,
    ) -> Result<()> {
        match variant.gender {
            GenderKind::ImplicitRole => {
                let target = match variant.role_target {
                    Some(ref target) => target.clone(),
                    None => {
                        return Err(Error::malformed(format!(
                            "role variant '{}' has no neutral target",
                            name
                        )))
                    }
                };
                let i = self.resolve(name, &[target])?;
                self.set_gender(i, GenderKind::ImplicitRole, name);
            }
            GenderKind::ExplicitSign => {
                let mut candidates = vec![variant.base.clone()];
                candidates.extend(without_presentation(&variant.base));
                let i = self.resolve(name, &candidates)?;
                self.set_gender(i, GenderKind::ExplicitSign, name);
            }
            GenderKind::None if variant.skin_tone => {
                let mut candidates = vec![variant.base.clone()];
                match without_presentation(&variant.base) {
                    Some(stripped) => candidates.push(stripped),
                    None => {
                        let mut with = variant.base.clone();
                        with.push(EMOJI_PRESENTATION);
                        candidates.push(with);
                    }
                }
                let i = self.resolve(name, &candidates)?;
                if !self.emojis[i].skin_tones {
                    log::debug!(
                        "'{}' has skin tones (from '{}')",
                        self.emojis[i].name,
                        name
                    );
                }
                self.emojis[i].skin_tones = true;
            }
            GenderKind::None => {
                let key = key(&variant.base);
                if let Some(&i) = self.by_key.get(&key) {
                    return Err(Error::malformed(format!(
                        "duplicate definition of [{}]: '{}' and '{}'",
                        key, self.emojis[i].name, name
                    )));
                }
                self.by_key.insert(key, self.emojis.len());
                self.emojis.push(Emoji {
                    codepoints: variant.base,
                    name: name.to_string(),
                    group,
                    subgroup,
                    skin_tones: false,
                    gender: GenderKind::None,
                    cldr: vec![],
                });
            }
        }
        Ok(())
    }

    /// Return the index of the entry for the first candidate base that is in
    /// this catalog.
    ///
    /// The upstream data is not consistent about trailing presentation
    /// selectors in variants, so callers pass every spelling worth trying.
    fn resolve(&self, name: &str, candidates: &[Vec<u32>]) -> Result<usize> {
        for base in candidates {
            if let Some(&i) = self.by_key.get(&key(base)) {
                return Ok(i);
            }
        }
        let last = candidates.last().map(|base| key(base)).unwrap_or_default();
        Err(Error::unresolved(last, name))
    }

    fn set_gender(&mut self, i: usize, gender: GenderKind, name: &str) {
        let emoji = &mut self.emojis[i];
        if emoji.gender == gender {
            return;
        }
        if emoji.gender != GenderKind::None {
            log::warn!(
                "'{}' is already {:?}, ignoring {:?} from '{}'",
                emoji.name,
                emoji.gender,
                gender,
                name
            );
            return;
        }
        log::debug!("'{}' is {:?} (from '{}')", emoji.name, gender, name);
        emoji.gender = gender;
    }

    /// Return the entry with the given base codepoints.
    pub fn get(&self, codepoints: &[u32]) -> Option<&Emoji> {
        self.by_key.get(&key(codepoints)).map(|&i| &self.emojis[i])
    }

    /// Return all entries in definition order.
    pub fn emojis(&self) -> &[Emoji] {
        &self.emojis
    }

    /// Return the number of entries.
    pub fn len(&self) -> usize {
        self.emojis.len()
    }

    /// Returns true if and only if this catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.emojis.is_empty()
    }

    /// Consume this catalog, returning its entries in definition order.
    pub fn into_emojis(self) -> Vec<Emoji> {
        self.emojis
    }
}

/// Return the given base without its trailing presentation selector, if it
/// has one.
fn without_presentation(base: &[u32]) -> Option<Vec<u32>> {
    match base.split_last() {
        Some((&EMOJI_PRESENTATION, rest)) => Some(rest.to_vec()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::emoji::classify::{classify, GenderKind};
    use crate::emoji::error::ErrorKind;
    use crate::emoji::roles::RoleTable;

    use super::{key, Catalog};

    fn ingest(cat: &mut Catalog, name: &str, cps: &[u32]) {
        try_ingest(cat, name, cps).unwrap();
    }

    fn try_ingest(
        cat: &mut Catalog,
        name: &str,
        cps: &[u32],
    ) -> crate::emoji::error::Result<()> {
        let mut v = match classify(name, cps) {
            Some(v) => v,
            None => return Ok(()),
        };
        RoleTable::upstream().apply(&mut v);
        cat.ingest(v, name, 0, 0)
    }

    #[test]
    fn canonical_key() {
        assert_eq!(key(&[0x1F9D1, 0x2695, 0xFE0F]), "1F9D1 2695 FE0F");
        assert_eq!(key(&[0x23]), "0023");
    }

    #[test]
    fn role_merges_into_person() {
        let mut cat = Catalog::new();
        ingest(&mut cat, "person", &[0x1F9D1]);
        ingest(&mut cat, "health worker", &[0x1F9D1, 0x200D, 0x2695, 0xFE0F]);
        ingest(&mut cat, "man health worker", &[0x1F468, 0x200D, 0x2695, 0xFE0F]);

        assert_eq!(cat.len(), 2);
        let e = cat.get(&[0x1F9D1, 0x2695, 0xFE0F]).unwrap();
        assert_eq!(e.name, "health worker");
        assert_eq!(e.gender, GenderKind::ImplicitRole);
        assert!(cat.get(&[0x1F468, 0x2695, 0xFE0F]).is_none());
    }

    #[test]
    fn role_requires_neutral() {
        let mut cat = Catalog::new();
        ingest(&mut cat, "person", &[0x1F9D1]);
        let err = try_ingest(
            &mut cat,
            "woman pilot",
            &[0x1F469, 0x200D, 0x2708, 0xFE0F],
        )
        .unwrap_err();
        match *err.kind() {
            ErrorKind::UnresolvedVariant { ref key, ref name } => {
                assert_eq!(key, "1F9D1 2708 FE0F");
                assert_eq!(name, "woman pilot");
            }
            ref kind => panic!("unexpected error: {:?}", kind),
        }
        assert_eq!(cat.len(), 1);
    }

    #[test]
    fn skin_tone_sets_flag() {
        let mut cat = Catalog::new();
        ingest(&mut cat, "raised hand", &[0x270B]);
        ingest(&mut cat, "raised hand: light skin tone", &[0x270B, 0x1F3FB]);
        ingest(&mut cat, "raised hand: dark skin tone", &[0x270B, 0x1F3FF]);

        assert_eq!(cat.len(), 1);
        assert!(cat.emojis()[0].skin_tones);
        assert_eq!(cat.emojis()[0].gender, GenderKind::None);
    }

    #[test]
    fn skin_tone_strips_presentation() {
        // "index pointing up" is 261D FE0F, but its toned variants omit the
        // selector. The other way around shouldn't matter either.
        let mut cat = Catalog::new();
        ingest(&mut cat, "index pointing up", &[0x261D, 0xFE0F]);
        ingest(&mut cat, "index pointing up: light skin tone", &[0x261D, 0x1F3FB]);
        assert!(cat.emojis()[0].skin_tones);

        let mut cat = Catalog::new();
        ingest(&mut cat, "person bouncing ball", &[0x26F9]);
        ingest(
            &mut cat,
            "person bouncing ball: light skin tone",
            &[0x26F9, 0x1F3FB, 0xFE0F],
        );
        assert!(cat.emojis()[0].skin_tones);
    }

    #[test]
    fn skin_tone_appends_presentation() {
        let mut cat = Catalog::new();
        ingest(&mut cat, "person lifting weights", &[0x1F3CB, 0xFE0F]);
        ingest(
            &mut cat,
            "person lifting weights: dark skin tone",
            &[0x1F3CB, 0x1F3FF],
        );
        assert!(cat.emojis()[0].skin_tones);
    }

    #[test]
    fn skin_tone_unresolved() {
        let mut cat = Catalog::new();
        ingest(&mut cat, "thumbs up", &[0x1F44D]);
        let err = try_ingest(
            &mut cat,
            "raised hand: light skin tone",
            &[0x270B, 0x1F3FB],
        )
        .unwrap_err();
        assert!(matches!(*err.kind(), ErrorKind::UnresolvedVariant { .. }));
        assert_eq!(cat.len(), 1);
        assert!(!cat.emojis()[0].skin_tones);
    }

    #[test]
    fn gender_sign() {
        let mut cat = Catalog::new();
        ingest(&mut cat, "person shrugging", &[0x1F937]);
        ingest(&mut cat, "man shrugging", &[0x1F937, 0x200D, 0x2642, 0xFE0F]);
        ingest(
            &mut cat,
            "woman shrugging: medium skin tone",
            &[0x1F937, 0x1F3FD, 0x200D, 0x2640, 0xFE0F],
        );
        assert_eq!(cat.len(), 1);
        assert_eq!(cat.emojis()[0].gender, GenderKind::ExplicitSign);
        // The sign takes precedence over the skin tone.
        assert!(!cat.emojis()[0].skin_tones);
    }

    #[test]
    fn gender_sign_unresolved() {
        let mut cat = Catalog::new();
        let err = try_ingest(
            &mut cat,
            "man shrugging",
            &[0x1F937, 0x200D, 0x2642, 0xFE0F],
        )
        .unwrap_err();
        assert!(matches!(*err.kind(), ErrorKind::UnresolvedVariant { .. }));
        assert!(cat.is_empty());
    }

    #[test]
    fn gender_kind_never_switches() {
        let mut cat = Catalog::new();
        ingest(&mut cat, "health worker", &[0x1F9D1, 0x200D, 0x2695, 0xFE0F]);
        ingest(&mut cat, "man health worker", &[0x1F468, 0x200D, 0x2695, 0xFE0F]);
        // A made up sign variant of the same entry.
        ingest(
            &mut cat,
            "health worker with sign",
            &[0x1F9D1, 0x200D, 0x2695, 0xFE0F, 0x200D, 0x2640],
        );
        assert_eq!(cat.emojis()[0].gender, GenderKind::ImplicitRole);
    }

    #[test]
    fn duplicate_neutral() {
        let mut cat = Catalog::new();
        ingest(&mut cat, "grinning face", &[0x1F600]);
        let err = try_ingest(&mut cat, "grinning face", &[0x1F600])
            .unwrap_err();
        assert!(matches!(*err.kind(), ErrorKind::MalformedInput(_)));
    }

    #[test]
    fn dropped_combination() {
        let mut cat = Catalog::new();
        ingest(
            &mut cat,
            "people holding hands: light skin tone, dark skin tone",
            &[0x1F9D1, 0x1F3FB, 0x200D, 0x1F91D, 0x200D, 0x1F9D1, 0x1F3FF],
        );
        assert!(cat.is_empty());
    }

    #[test]
    fn definition_order() {
        let mut cat = Catalog::new();
        ingest(&mut cat, "raised hand", &[0x270B]);
        ingest(&mut cat, "victory hand", &[0x270C, 0xFE0F]);
        ingest(&mut cat, "raised hand: light skin tone", &[0x270B, 0x1F3FB]);
        ingest(&mut cat, "crossed fingers", &[0x1F91E]);
        let names: Vec<&str> =
            cat.emojis().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["raised hand", "victory hand", "crossed fingers"]);
    }
}
