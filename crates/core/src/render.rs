//! Render model for the test explorer
//!
//! Rendering is a pure function of the loaded catalogue and the current
//! [`TagSelection`]. Both the browser view and the static HTML export draw
//! from the structures built here, so the two stay identical.

use serde::Serialize;

use crate::model::{FileRecord, Tag, TestRecord};
use crate::selection::TagSelection;
use crate::tags::{TagOrder, tag_universe};

/// Shown for a GIVEN/WHEN/THEN field with no steps
pub const PLACEHOLDER: &str = "N/A";

/// A filter-bar toggle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagButton {
    pub tag: Tag,
    pub active: bool,
}

impl TagButton {
    /// Button label, `#key:value`
    #[must_use]
    pub fn label(&self) -> String {
        self.tag.label()
    }
}

/// One rendered test
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCard {
    pub method: String,
    pub tags: Vec<Tag>,
    pub given: String,
    pub when: String,
    pub then: String,
}

impl TestCard {
    /// Builds a card, sorting the test's tags by key priority
    #[must_use]
    pub fn from_record(test: &TestRecord, order: &TagOrder) -> Self {
        Self {
            method: test.method.clone(),
            tags: order.sorted_by_key(test.block.tags()),
            given: format_steps(test.block.given.as_deref()),
            when: format_steps(test.block.when.as_deref()),
            then: format_steps(test.block.then.as_deref()),
        }
    }

    /// Labeled step fields in display order
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("Given", self.given.as_str()),
            ("When", self.when.as_str()),
            ("Then", self.then.as_str()),
        ]
    }
}

/// One rendered file with at least one passing test
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSection {
    pub filename: String,
    pub cards: Vec<TestCard>,
}

/// Joins steps with `", "`, or [`PLACEHOLDER`] when absent or empty
#[must_use]
pub fn format_steps(steps: Option<&[String]>) -> String {
    match steps {
        Some(steps) if !steps.is_empty() => steps.join(", "),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Sections for every file with passing tests; empty files are omitted
#[must_use]
pub fn render_sections(
    files: &[FileRecord],
    selection: &TagSelection,
    order: &TagOrder,
) -> Vec<FileSection> {
    files
        .iter()
        .filter_map(|file| {
            let cards: Vec<TestCard> = selection
                .filter_tests(file)
                .into_iter()
                .map(|test| TestCard::from_record(test, order))
                .collect();
            (!cards.is_empty()).then(|| FileSection {
                filename: file.filename.clone(),
                cards,
            })
        })
        .collect()
}

/// A loaded catalogue plus its tag universe.
///
/// Data is immutable once loaded; callers hold the selection separately
/// and pass it in for each render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explorer {
    files: Vec<FileRecord>,
    order: TagOrder,
    universe: Vec<Tag>,
}

impl Explorer {
    /// Extracts the tag universe once at load
    #[must_use]
    pub fn new(files: Vec<FileRecord>, order: TagOrder) -> Self {
        let universe = tag_universe(&files, &order);
        Self {
            files,
            order,
            universe,
        }
    }

    /// Loaded files
    #[must_use]
    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    /// Distinct tags in display order
    #[must_use]
    pub fn universe(&self) -> &[Tag] {
        &self.universe
    }

    /// Key priority in use
    #[must_use]
    pub const fn order(&self) -> &TagOrder {
        &self.order
    }

    /// Filter-bar buttons with their active state
    #[must_use]
    pub fn buttons(&self, selection: &TagSelection) -> Vec<TagButton> {
        self.universe
            .iter()
            .map(|tag| TagButton {
                tag: tag.clone(),
                active: selection.is_active(tag),
            })
            .collect()
    }

    /// File sections for the given selection
    #[must_use]
    pub fn sections(&self, selection: &TagSelection) -> Vec<FileSection> {
        render_sections(&self.files, selection, &self.order)
    }

    /// Number of tests visible under the selection
    #[must_use]
    pub fn visible_count(&self, selection: &TagSelection) -> usize {
        self.files
            .iter()
            .map(|file| selection.filter_tests(file).len())
            .sum()
    }
}
