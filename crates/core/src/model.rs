//! Test catalogue data model
//!
//! The catalogue is a three-level hierarchy: a [`FileRecord`] per source
//! file, a [`TestRecord`] per test method, and a [`TestBlock`] holding the
//! documented tags and GIVEN/WHEN/THEN steps.
//!
//! Optional sequences serialize as `null` when absent, matching the JSON
//! documents the generator has always written.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A `key:value` label attached to a test.
///
/// Identity is the `(key, value)` pair; ordering here is plain field order
/// and only used for set membership. Display order lives in [`crate::tags`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    /// Creates a tag from a key and a value
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Parses `key:value`, with or without a leading `#`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTag`] if the input has no `:` separator, an
    /// empty key, or an empty value.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let body = trimmed.strip_prefix('#').unwrap_or(trimmed);
        match body.split_once(':') {
            Some((key, value)) if !key.is_empty() && !value.is_empty() => {
                Ok(Self::new(key, value))
            }
            _ => Err(Error::invalid_tag(input)),
        }
    }

    /// Button/badge label, e.g. `#team:core`
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}:{}", self.key, self.value)
    }
}

/// Documentation parsed from the comment block above a test method
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestBlock {
    #[serde(default)]
    pub given: Option<Vec<String>>,
    #[serde(default)]
    pub when: Option<Vec<String>>,
    #[serde(default)]
    pub then: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Option<Vec<Tag>>,
}

impl TestBlock {
    /// Builder pattern: append a tag
    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(tag);
        self
    }

    /// Builder pattern: append a GIVEN step
    #[must_use]
    pub fn with_given(mut self, step: impl Into<String>) -> Self {
        self.given.get_or_insert_with(Vec::new).push(step.into());
        self
    }

    /// Builder pattern: append a WHEN step
    #[must_use]
    pub fn with_when(mut self, step: impl Into<String>) -> Self {
        self.when.get_or_insert_with(Vec::new).push(step.into());
        self
    }

    /// Builder pattern: append a THEN step
    #[must_use]
    pub fn with_then(mut self, step: impl Into<String>) -> Self {
        self.then.get_or_insert_with(Vec::new).push(step.into());
        self
    }

    /// Tags as a slice; absent tags are empty
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// True when nothing was documented at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [&self.given, &self.when, &self.then]
            .iter()
            .all(|steps| steps.as_ref().is_none_or(Vec::is_empty))
            && self.tags().is_empty()
    }
}

/// A single test method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRecord {
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub block: TestBlock,
}

impl TestRecord {
    /// Creates an undocumented test record
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            line: None,
            block: TestBlock::default(),
        }
    }

    /// Builder pattern: set the source line
    #[must_use]
    pub const fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Builder pattern: set the documentation block
    #[must_use]
    pub fn with_block(mut self, block: TestBlock) -> Self {
        self.block = block;
        self
    }
}

/// All tests found in one source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filepath: Option<String>,
    pub tests: Vec<TestRecord>,
}

impl FileRecord {
    /// Creates an empty file record
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            filepath: None,
            tests: Vec::new(),
        }
    }

    /// Builder pattern: set the path the file was read from
    #[must_use]
    pub fn with_filepath(mut self, filepath: impl Into<String>) -> Self {
        self.filepath = Some(filepath.into());
        self
    }

    /// Builder pattern: append a test
    #[must_use]
    pub fn with_test(mut self, test: TestRecord) -> Self {
        self.tests.push(test);
        self
    }
}

/// Parses a catalogue document: a JSON array of [`FileRecord`].
///
/// Records missing `filename`, `tests`, `method` or `block` fail the whole
/// document; nothing is partially loaded.
///
/// # Errors
///
/// Returns [`Error::JsonParseFailed`] on malformed JSON or a record that
/// does not match the model.
pub fn parse_catalogue(json: &str) -> Result<Vec<FileRecord>> {
    serde_json::from_str(json).map_err(|e| Error::json_parse_failed(e.to_string()))
}

/// Serializes a catalogue with two-space indentation.
///
/// # Errors
///
/// Returns [`Error::JsonParseFailed`] if serialization fails.
pub fn to_catalogue_json(files: &[FileRecord]) -> Result<String> {
    serde_json::to_string_pretty(files).map_err(|e| Error::json_parse_failed(e.to_string()))
}
