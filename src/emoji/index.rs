use std::collections::BTreeMap;

/// A subgroup, and the group that owns it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Subgroup {
    /// The subgroup name, e.g., `face-smiling`.
    pub name: String,
    /// The identifier of the group this subgroup was first seen in.
    pub group: usize,
}

/// Assigns identifiers to group and subgroup names in the order they are
/// first seen.
///
/// Identifiers are indices into `groups` and `subgroups`, so they are stable
/// for a given input. Subgroup identifiers are global, not per group.
#[derive(Clone, Debug, Default)]
pub struct GroupIndex {
    groups: Vec<String>,
    group_ids: BTreeMap<String, usize>,
    subgroups: Vec<Subgroup>,
    subgroup_ids: BTreeMap<String, usize>,
}

impl GroupIndex {
    /// Create an empty index.
    pub fn new() -> GroupIndex {
        GroupIndex::default()
    }

    /// Return the identifier for the given group name, assigning the next
    /// one if it hasn't been seen before.
    pub fn intern_group(&mut self, name: &str) -> usize {
        if let Some(&id) = self.group_ids.get(name) {
            return id;
        }
        let id = self.groups.len();
        self.groups.push(name.to_string());
        self.group_ids.insert(name.to_string(), id);
        id
    }

    /// Return the identifier for the given subgroup name, assigning the next
    /// one if it hasn't been seen before.
    ///
    /// A new subgroup is owned by `group`. A subgroup seen again is never
    /// moved to another group.
    pub fn intern_subgroup(&mut self, group: &str, name: &str) -> usize {
        if let Some(&id) = self.subgroup_ids.get(name) {
            let owner = self.subgroups[id].group;
            if self.groups[owner] != group {
                log::warn!(
                    "subgroup '{}' seen in group '{}', keeping it in '{}'",
                    name,
                    group,
                    self.groups[owner],
                );
            }
            return id;
        }
        let group = self.intern_group(group);
        let id = self.subgroups.len();
        self.subgroups.push(Subgroup { name: name.to_string(), group });
        self.subgroup_ids.insert(name.to_string(), id);
        id
    }

    /// All group names, indexed by identifier.
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// All subgroups, indexed by identifier.
    pub fn subgroups(&self) -> &[Subgroup] {
        &self.subgroups
    }

    /// Consume this index, returning its groups and subgroups.
    pub fn into_parts(self) -> (Vec<String>, Vec<Subgroup>) {
        (self.groups, self.subgroups)
    }
}

#[cfg(test)]
mod tests {
    use super::{GroupIndex, Subgroup};

    #[test]
    fn first_seen_order() {
        let mut idx = GroupIndex::new();
        assert_eq!(idx.intern_group("Smileys & Emotion"), 0);
        assert_eq!(idx.intern_group("People & Body"), 1);
        assert_eq!(idx.intern_group("Smileys & Emotion"), 0);
        assert_eq!(idx.groups(), &["Smileys & Emotion", "People & Body"]);
    }

    #[test]
    fn subgroups_are_global() {
        let mut idx = GroupIndex::new();
        assert_eq!(idx.intern_subgroup("Smileys & Emotion", "face-smiling"), 0);
        assert_eq!(idx.intern_subgroup("Smileys & Emotion", "face-affection"), 1);
        assert_eq!(idx.intern_subgroup("People & Body", "hand-fingers-open"), 2);
        assert_eq!(idx.intern_subgroup("Smileys & Emotion", "face-smiling"), 0);
        assert_eq!(
            idx.subgroups()[2],
            Subgroup { name: "hand-fingers-open".to_string(), group: 1 }
        );
    }

    #[test]
    fn subgroup_keeps_first_owner() {
        let mut idx = GroupIndex::new();
        idx.intern_group("Symbols");
        idx.intern_group("Flags");
        assert_eq!(idx.intern_subgroup("Symbols", "other"), 0);
        assert_eq!(idx.intern_subgroup("Flags", "other"), 0);
        assert_eq!(idx.subgroups()[0].group, 0);
        assert_eq!(idx.subgroups().len(), 1);
    }
}
