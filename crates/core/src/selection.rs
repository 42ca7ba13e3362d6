//! Active tag selection and the filter predicate

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::{FileRecord, Tag, TestBlock, TestRecord};

/// The set of tags currently toggled on in the filter bar.
///
/// Empty means unfiltered: every test passes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSelection {
    active: BTreeSet<Tag>,
}

impl TagSelection {
    /// Creates an empty (unfiltered) selection
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: BTreeSet::new(),
        }
    }

    /// Flips a tag on or off. Returns whether it is now active.
    pub fn toggle(&mut self, tag: &Tag) -> bool {
        if self.active.remove(tag) {
            false
        } else {
            self.active.insert(tag.clone());
            true
        }
    }

    /// Whether a tag is active
    #[must_use]
    pub fn is_active(&self, tag: &Tag) -> bool {
        self.active.contains(tag)
    }

    /// True when no filter is active
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Number of active tags
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Active tags
    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.active.iter()
    }

    /// Check if a test block carries every active tag.
    ///
    /// With an empty selection everything matches. Otherwise an untagged
    /// block never matches.
    #[must_use]
    pub fn matches(&self, block: &TestBlock) -> bool {
        if self.active.is_empty() {
            return true;
        }
        let tags = block.tags();
        !tags.is_empty() && self.active.iter().all(|tag| tags.contains(tag))
    }

    /// Tests of one file that pass the filter, in file order
    #[must_use]
    pub fn filter_tests<'a>(&self, file: &'a FileRecord) -> Vec<&'a TestRecord> {
        file.tests
            .iter()
            .filter(|test| self.matches(&test.block))
            .collect()
    }
}

impl FromIterator<Tag> for TagSelection {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self {
            active: iter.into_iter().collect(),
        }
    }
}

impl Extend<Tag> for TagSelection {
    fn extend<I: IntoIterator<Item = Tag>>(&mut self, iter: I) {
        self.active.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_default_is_empty() {
        let selection = TagSelection::default();
        assert!(selection.is_empty());
        assert_eq!(selection.len(), 0);
    }

    #[test]
    fn test_toggle_on_then_off() {
        let mut selection = TagSelection::new();
        let tag = Tag::new("team", "core");

        assert!(selection.toggle(&tag));
        assert!(selection.is_active(&tag));
        assert!(!selection.toggle(&tag));
        assert!(!selection.is_active(&tag));
        assert_eq!(selection, TagSelection::new());
    }

    #[test]
    fn test_matches_requires_superset() {
        let selection: TagSelection = [Tag::new("team", "core"), Tag::new("module", "login")]
            .into_iter()
            .collect();

        let both = TestBlock::default()
            .with_tag(Tag::new("team", "core"))
            .with_tag(Tag::new("module", "login"))
            .with_tag(Tag::new("info", "smoke"));
        let one = TestBlock::default().with_tag(Tag::new("team", "core"));

        assert!(selection.matches(&both));
        assert!(!selection.matches(&one));
    }

    #[test]
    fn test_untagged_block_only_matches_empty_selection() {
        let block = TestBlock::default().with_given("a user");
        assert!(TagSelection::new().matches(&block));

        let selection: TagSelection = std::iter::once(Tag::new("team", "core")).collect();
        assert!(!selection.matches(&block));
    }

    #[test]
    fn test_filter_tests_keeps_file_order() {
        let file = FileRecord::new("a.json")
            .with_test(
                TestRecord::new("t1")
                    .with_block(TestBlock::default().with_tag(Tag::new("team", "core"))),
            )
            .with_test(TestRecord::new("t2"))
            .with_test(
                TestRecord::new("t3")
                    .with_block(TestBlock::default().with_tag(Tag::new("team", "core"))),
            );
        let selection: TagSelection = std::iter::once(Tag::new("team", "core")).collect();

        let methods: Vec<&str> = selection
            .filter_tests(&file)
            .iter()
            .map(|t| t.method.as_str())
            .collect();
        assert_eq!(methods, vec!["t1", "t3"]);
    }
}
