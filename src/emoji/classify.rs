use super::{is_skin_tone, FEMALE_SIGN, MALE_SIGN, ZWJ};

/// How the gendered variants of an emoji are spelled.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GenderKind {
    /// The emoji has no gendered variants.
    None,
    /// Gendered variants append a female or male sign to the neutral
    /// sequence:
    ///
    /// ```text
    /// 1F937                 # 🤷 person shrugging
    /// 1F937 200D 2642 FE0F  # 🤷‍♂️ man shrugging
    /// ```
    ExplicitSign,
    /// Gendered variants replace a leading "person" with "man" or "woman":
    ///
    /// ```text
    /// 1F9D1 200D 2695 FE0F  # 🧑‍⚕️ health worker
    /// 1F468 200D 2695 FE0F  # 👨‍⚕️ man health worker
    /// ```
    ImplicitRole,
}

impl GenderKind {
    /// The numeric value of this kind in emitted tables.
    pub fn as_u8(self) -> u8 {
        match self {
            GenderKind::None => 0,
            GenderKind::ExplicitSign => 1,
            GenderKind::ImplicitRole => 2,
        }
    }
}

impl Default for GenderKind {
    fn default() -> GenderKind {
        GenderKind::None
    }
}

/// A data row reduced to its base codepoints, plus what kind of variant of
/// that base the row describes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Variant {
    /// The codepoints with joiners, skin tone modifiers and non-leading
    /// gender signs removed.
    pub base: Vec<u32>,
    /// Whether the row carried a skin tone modifier.
    pub skin_tone: bool,
    /// Whether (and how) the row is a gendered variant.
    pub gender: GenderKind,
    /// The base of the neutral entry this row is a role variant of. Only set
    /// by the role table, and only when `gender` is `ImplicitRole`.
    pub role_target: Option<Vec<u32>>,
}

impl Variant {
    /// Returns true if this row defines a new entry instead of varying an
    /// existing one.
    pub fn is_neutral(&self) -> bool {
        !self.skin_tone && self.gender == GenderKind::None
    }
}

/// Classify the codepoints of a single data row.
///
/// This returns `None` when the row is a skin tone combination of several
/// people that is deliberately not represented, e.g., two people holding
/// hands with different skin tones. Such rows do not vary any single entry.
pub fn classify(name: &str, codepoints: &[u32]) -> Option<Variant> {
    let mut variant = Variant {
        base: Vec::with_capacity(codepoints.len()),
        skin_tone: false,
        gender: GenderKind::None,
        role_target: None,
    };
    for (i, &cp) in codepoints.iter().enumerate() {
        match cp {
            cp if is_skin_tone(cp) => variant.skin_tone = true,
            ZWJ => {}
            // A leading sign is the "female sign" or "male sign" emoji
            // itself, not a variant of something else.
            FEMALE_SIGN | MALE_SIGN if i > 0 => {
                variant.gender = GenderKind::ExplicitSign;
            }
            cp => variant.base.push(cp),
        }
    }
    if variant.skin_tone && is_multi_party(name) {
        return None;
    }
    Some(variant)
}

/// Returns true for names of emoji whose skin tone variants tone each person
/// independently.
fn is_multi_party(name: &str) -> bool {
    name.contains("holding hands")
        || name.contains("handshake")
        || name.contains("kiss:")
        || name.contains("couple with heart")
}

#[cfg(test)]
mod tests {
    use super::{classify, GenderKind};

    #[test]
    fn neutral() {
        let v = classify("grinning face", &[0x1F600]).unwrap();
        assert_eq!(v.base, vec![0x1F600]);
        assert!(v.is_neutral());
    }

    #[test]
    fn joiners_dropped() {
        let v = classify("health worker", &[0x1F9D1, 0x200D, 0x2695, 0xFE0F])
            .unwrap();
        assert_eq!(v.base, vec![0x1F9D1, 0x2695, 0xFE0F]);
        assert!(v.is_neutral());
    }

    #[test]
    fn skin_tone() {
        let v =
            classify("raised hand: light skin tone", &[0x270B, 0x1F3FB])
                .unwrap();
        assert_eq!(v.base, vec![0x270B]);
        assert!(v.skin_tone);
        assert_eq!(v.gender, GenderKind::None);
    }

    #[test]
    fn gender_sign() {
        let v = classify("man shrugging", &[0x1F937, 0x200D, 0x2642, 0xFE0F])
            .unwrap();
        assert_eq!(v.base, vec![0x1F937, 0xFE0F]);
        assert_eq!(v.gender, GenderKind::ExplicitSign);
        assert!(!v.skin_tone);
    }

    #[test]
    fn leading_gender_sign_kept() {
        let v = classify("female sign", &[0x2640, 0xFE0F]).unwrap();
        assert_eq!(v.base, vec![0x2640, 0xFE0F]);
        assert!(v.is_neutral());
    }

    #[test]
    fn toned_gender_sign() {
        let cps = [0x1F937, 0x1F3FD, 0x200D, 0x2640, 0xFE0F];
        let v = classify("woman shrugging: medium skin tone", &cps).unwrap();
        assert_eq!(v.base, vec![0x1F937, 0xFE0F]);
        assert!(v.skin_tone);
        assert_eq!(v.gender, GenderKind::ExplicitSign);
    }

    #[test]
    fn multi_party_tones_dropped() {
        let cps = [0x1F9D1, 0x1F3FB, 0x200D, 0x1F91D, 0x200D, 0x1F9D1, 0x1F3FF];
        let name = "people holding hands: light skin tone, dark skin tone";
        assert_eq!(classify(name, &cps), None);

        let cps = [0x1FAF1, 0x1F3FB, 0x200D, 0x1FAF2, 0x1F3FF];
        let name = "handshake: light skin tone, dark skin tone";
        assert_eq!(classify(name, &cps), None);

        let cps = [
            0x1F9D1, 0x1F3FB, 0x200D, 0x2764, 0xFE0F, 0x200D, 0x1F48B,
            0x200D, 0x1F9D1, 0x1F3FF,
        ];
        let name = "kiss: person, person, light skin tone, dark skin tone";
        assert_eq!(classify(name, &cps), None);

        let cps = [0x1F491, 0x1F3FC];
        assert_eq!(classify("couple with heart: medium-light skin tone", &cps), None);
    }

    #[test]
    fn multi_party_without_tones_kept() {
        let cps = [0x1F9D1, 0x200D, 0x1F91D, 0x200D, 0x1F9D1];
        let v = classify("people holding hands", &cps).unwrap();
        assert_eq!(v.base, vec![0x1F9D1, 0x1F91D, 0x1F9D1]);
        assert!(v.is_neutral());
    }
}
