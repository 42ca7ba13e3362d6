//! Tag ordering and the tag universe
//!
//! Keys listed in the priority order sort first, in list order. Keys not
//! in the list follow, ordered lexicographically by key. Values are
//! collated with the ICU root locale at tertiary strength, the same order
//! a browser `localeCompare` gives: accents and case only break ties,
//! lowercase sorts ahead of uppercase.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use icu_collator::{Collator, CollatorOptions, Strength};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::model::{FileRecord, Tag};

/// Default key priority: team, then module, then info
pub const DEFAULT_PRIORITY: [&str; 3] = ["team", "module", "info"];

/// Key priority used to order tags for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagOrder {
    priority: Vec<String>,
}

impl Default for TagOrder {
    fn default() -> Self {
        Self::new(DEFAULT_PRIORITY)
    }
}

impl TagOrder {
    /// Creates an order from a priority list of keys
    pub fn new<I, S>(priority: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            priority: priority.into_iter().map(Into::into).collect(),
        }
    }

    /// Priority keys in order
    #[must_use]
    pub fn priority(&self) -> &[String] {
        &self.priority
    }

    /// Position of a key in the priority list, `None` for unknown keys
    #[must_use]
    pub fn rank(&self, key: &str) -> Option<usize> {
        self.priority.iter().position(|k| k == key)
    }

    /// Compares two keys: known keys by rank, unknown keys after, by name
    #[must_use]
    pub fn compare_keys(&self, a: &str, b: &str) -> Ordering {
        match (self.rank(a), self.rank(b)) {
            (Some(ra), Some(rb)) => ra.cmp(&rb),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.cmp(b),
        }
    }

    /// Full display order for filter buttons: key, then value
    #[must_use]
    pub fn compare(&self, a: &Tag, b: &Tag) -> Ordering {
        self.compare_keys(&a.key, &b.key)
            .then_with(|| compare_values(&a.value, &b.value))
    }

    /// Sorts a test's own tags by key only; equal keys keep their order
    pub fn sort_by_key(&self, tags: &mut [Tag]) {
        tags.sort_by(|a, b| self.compare_keys(&a.key, &b.key));
    }

    /// Returns a test's tags sorted by key only
    #[must_use]
    pub fn sorted_by_key(&self, tags: &[Tag]) -> Vec<Tag> {
        let mut sorted = tags.to_vec();
        self.sort_by_key(&mut sorted);
        sorted
    }
}

thread_local! {
    static COLLATOR: Option<Collator> = root_collator();
}

fn root_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    Collator::try_new(&Default::default(), options)
        .map_err(|e| tracing::warn!(error = %e, "root collator unavailable, comparing case-folded"))
        .ok()
}

/// Locale-aware value comparison.
///
/// Code points break any tie the collator leaves, so distinct values never
/// compare equal.
#[must_use]
pub fn compare_values(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| b.cmp(a)),
        })
        .then_with(|| a.cmp(b))
}

/// Distinct tags across every test in every file, in display order
#[must_use]
pub fn tag_universe(files: &[FileRecord], order: &TagOrder) -> Vec<Tag> {
    files
        .iter()
        .flat_map(|file| file.tests.iter())
        .flat_map(|test| test.block.tags().iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .sorted_by(|a, b| order.compare(a, b))
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;
    use crate::model::{TestBlock, TestRecord};

    fn tagged(method: &str, tags: &[(&str, &str)]) -> TestRecord {
        let block = tags
            .iter()
            .fold(TestBlock::default(), |block, (k, v)| block.with_tag(Tag::new(*k, *v)));
        TestRecord::new(method).with_block(block)
    }

    #[test]
    fn test_priority_keys_sort_in_list_order() {
        let order = TagOrder::default();
        let mut keys = vec!["module", "team", "z", "info"];
        keys.sort_by(|a, b| order.compare_keys(a, b));
        assert_eq!(keys, vec!["team", "module", "info", "z"]);
    }

    #[test]
    fn test_unknown_keys_sort_lexicographically_after_known() {
        let order = TagOrder::default();
        let mut keys = vec!["zeta", "alpha", "info", "beta", "team"];
        keys.sort_by(|a, b| order.compare_keys(a, b));
        assert_eq!(keys, vec!["team", "info", "alpha", "beta", "zeta"]);
    }

    #[test]
    fn test_value_comparison_is_case_insensitive_first() {
        assert_eq!(compare_values("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_values("Banana", "apple"), Ordering::Greater);
        assert_eq!(compare_values("a", "A"), Ordering::Less);
        assert_eq!(compare_values("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_accented_values_sort_with_their_base_letter() {
        assert_eq!(compare_values("éclair", "zebra"), Ordering::Less);
        assert_eq!(compare_values("eclair", "éclair"), Ordering::Less);
        assert_eq!(compare_values("Ärger", "apfel"), Ordering::Greater);
    }

    #[test]
    fn test_punctuation_sorts_before_digits_and_letters() {
        assert_eq!(compare_values("_a", "1a"), Ordering::Less);
        assert_eq!(compare_values("1a", "a1"), Ordering::Less);

        let mut values = vec!["zebra", "éclair", "Apple", "1a", "apple", "_a"];
        values.sort_by(|a, b| compare_values(a, b));
        assert_eq!(values, vec!["_a", "1a", "apple", "Apple", "éclair", "zebra"]);
    }

    #[test]
    fn test_universe_dedups_by_pair() {
        let files = vec![
            FileRecord::new("a.json")
                .with_test(tagged("t1", &[("team", "core")]))
                .with_test(tagged("t2", &[("team", "core"), ("module", "login")])),
            FileRecord::new("b.json").with_test(tagged("t3", &[("team", "core")])),
        ];

        let universe = tag_universe(&files, &TagOrder::default());
        assert_eq!(
            universe,
            vec![Tag::new("team", "core"), Tag::new("module", "login")]
        );
    }

    #[test]
    fn test_universe_orders_by_key_then_value() {
        let files = vec![FileRecord::new("a.json").with_test(tagged(
            "t1",
            &[
                ("info", "smoke"),
                ("team", "infra"),
                ("custom", "x"),
                ("team", "core"),
                ("module", "Settings"),
                ("module", "auth"),
            ],
        ))];

        let labels: Vec<String> = tag_universe(&files, &TagOrder::default())
            .iter()
            .map(Tag::label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "#team:core",
                "#team:infra",
                "#module:auth",
                "#module:Settings",
                "#info:smoke",
                "#custom:x",
            ]
        );
    }

    #[test]
    fn test_universe_ignores_untagged_tests() {
        let files = vec![FileRecord::new("a.json").with_test(TestRecord::new("t1"))];
        assert!(tag_universe(&files, &TagOrder::default()).is_empty());
        assert!(tag_universe(&[], &TagOrder::default()).is_empty());
    }

    #[test]
    fn test_sort_by_key_is_stable_within_key() {
        let order = TagOrder::default();
        let tags = vec![
            Tag::new("info", "b"),
            Tag::new("team", "core"),
            Tag::new("info", "a"),
            Tag::new("module", "m"),
        ];
        let sorted = order.sorted_by_key(&tags);
        assert_eq!(
            sorted,
            vec![
                Tag::new("team", "core"),
                Tag::new("module", "m"),
                Tag::new("info", "b"),
                Tag::new("info", "a"),
            ]
        );
    }

    #[test]
    fn test_custom_priority() {
        let order = TagOrder::new(["owner"]);
        assert_eq!(order.rank("owner"), Some(0));
        assert_eq!(order.rank("team"), None);
        assert_eq!(order.compare_keys("owner", "team"), Ordering::Less);
    }
}
