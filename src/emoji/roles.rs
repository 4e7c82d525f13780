use super::classify::{GenderKind, Variant};
use super::ADULT;

/// Gendered role emoji whose neutral counterpart starts with "person"
/// (U+1F9D1) instead of "man" (U+1F468) or "woman" (U+1F469).
///
/// Each entry is a prefix of base codepoints, i.e., with joiners and skin
/// tones already removed. The upstream data defines every role three times
/// and only the neutral definition is cataloged. Rows not covered here are
/// treated as entries in their own right, so this list must track the
/// upstream set exactly.
const GENDERED_ROLES: &[&[u32]] = &[
    &[0x1F468, 0x2695, 0xFE0F],
    &[0x1F468, 0x1F393],
    &[0x1F468, 0x1F3EB],
    &[0x1F468, 0x2696, 0xFE0F],
    &[0x1F468, 0x1F33E],
    &[0x1F468, 0x1F373],
    &[0x1F468, 0x1F527],
    &[0x1F468, 0x1F3ED],
    &[0x1F468, 0x1F4BC],
    &[0x1F468, 0x1F52C],
    &[0x1F468, 0x1F4BB],
    &[0x1F468, 0x1F3A4],
    &[0x1F468, 0x1F3A8],
    &[0x1F468, 0x2708, 0xFE0F],
    &[0x1F468, 0x1F680],
    &[0x1F468, 0x1F692],
    &[0x1F468, 0x1F9AF],
    &[0x1F468, 0x1F9BC],
    &[0x1F468, 0x1F9BD],
    &[0x1F469, 0x2695, 0xFE0F],
    &[0x1F469, 0x1F393],
    &[0x1F469, 0x1F3EB],
    &[0x1F469, 0x2696, 0xFE0F],
    &[0x1F469, 0x1F33E],
    &[0x1F469, 0x1F373],
    &[0x1F469, 0x1F527],
    &[0x1F469, 0x1F3ED],
    &[0x1F469, 0x1F4BC],
    &[0x1F469, 0x1F52C],
    &[0x1F469, 0x1F4BB],
    &[0x1F469, 0x1F3A4],
    &[0x1F469, 0x1F3A8],
    &[0x1F469, 0x2708, 0xFE0F],
    &[0x1F469, 0x1F680],
    &[0x1F469, 0x1F692],
    &[0x1F469, 0x1F9AF],
    &[0x1F469, 0x1F9BC],
    &[0x1F469, 0x1F9BD],
];

/// A table of gendered role prefixes.
///
/// A row whose base starts with one of these prefixes is a role variant of
/// the entry with the same base, except that its first codepoint is "person".
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleTable {
    prefixes: Vec<Vec<u32>>,
}

impl RoleTable {
    /// Create a table from the given prefixes.
    pub fn new(prefixes: Vec<Vec<u32>>) -> RoleTable {
        RoleTable { prefixes }
    }

    /// The roles defined by the current emoji-test.txt.
    pub fn upstream() -> RoleTable {
        RoleTable::new(GENDERED_ROLES.iter().map(|p| p.to_vec()).collect())
    }

    /// Return the base of the neutral entry that the given base is a role
    /// variant of, if any.
    pub fn merge_target(&self, base: &[u32]) -> Option<Vec<u32>> {
        if !self.prefixes.iter().any(|p| base.starts_with(p)) {
            return None;
        }
        let mut target = Vec::with_capacity(base.len());
        target.push(ADULT);
        target.extend_from_slice(&base[1..]);
        Some(target)
    }

    /// Mark the given variant as a role variant if it matches this table.
    ///
    /// Variants that already spell their gender with a sign are left alone.
    pub fn apply(&self, variant: &mut Variant) {
        if variant.gender != GenderKind::None {
            return;
        }
        if let Some(target) = self.merge_target(&variant.base) {
            variant.gender = GenderKind::ImplicitRole;
            variant.role_target = Some(target);
        }
    }

    /// Return the number of prefixes in this table.
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }
}

impl Default for RoleTable {
    fn default() -> RoleTable {
        RoleTable::upstream()
    }
}

#[cfg(test)]
mod tests {
    use crate::emoji::classify::{classify, GenderKind};

    use super::RoleTable;

    #[test]
    fn role_prefix() {
        let roles = RoleTable::upstream();
        assert_eq!(
            roles.merge_target(&[0x1F468, 0x2695, 0xFE0F]),
            Some(vec![0x1F9D1, 0x2695, 0xFE0F])
        );
        assert_eq!(
            roles.merge_target(&[0x1F469, 0x1F680]),
            Some(vec![0x1F9D1, 0x1F680])
        );
    }

    #[test]
    fn not_a_role() {
        let roles = RoleTable::upstream();
        // "man" itself.
        assert_eq!(roles.merge_target(&[0x1F468]), None);
        // "man: red hair" is cataloged on its own.
        assert_eq!(roles.merge_target(&[0x1F468, 0x1F9B0]), None);
        // "family: man, woman, boy".
        assert_eq!(roles.merge_target(&[0x1F468, 0x1F469, 0x1F466]), None);
    }

    #[test]
    fn apply_sets_role() {
        let roles = RoleTable::upstream();
        let cps = [0x1F469, 0x1F3FF, 0x200D, 0x2695, 0xFE0F];
        let mut v = classify("woman health worker: dark skin tone", &cps)
            .unwrap();
        roles.apply(&mut v);
        assert_eq!(v.gender, GenderKind::ImplicitRole);
        assert_eq!(v.role_target, Some(vec![0x1F9D1, 0x2695, 0xFE0F]));
    }

    #[test]
    fn apply_keeps_sign() {
        let roles = RoleTable::new(vec![vec![0x1F937]]);
        let cps = [0x1F937, 0x200D, 0x2642, 0xFE0F];
        let mut v = classify("man shrugging", &cps).unwrap();
        roles.apply(&mut v);
        assert_eq!(v.gender, GenderKind::ExplicitSign);
        assert_eq!(v.role_target, None);
    }
}
