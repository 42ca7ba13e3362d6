//! Swift UI-test comment-block parser
//!
//! A documented test looks like this:
//!
//! ```text
//! /*
//!  #team:core #module:login #smoke
//!  GIVEN
//!  - a registered user
//!  WHEN
//!  - they sign in
//!  THEN
//!  - the home screen is shown
//!  */
//! func testSignIn() {
//! ```
//!
//! A `func test` with no comment block since the last closing brace is an
//! orphan. Scanning is line based; every line is trimmed first. A block
//! may also sit on a single line: `/* #team:core */`.

use crate::model::{FileRecord, Tag, TestBlock, TestRecord};

/// Key given to bare `#value` tags
pub const DEFAULT_TAG_KEY: &str = "info";

/// Documented and orphan tests from one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSource {
    pub documented: FileRecord,
    pub orphans: FileRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Given,
    When,
    Then,
}

/// Parses one `#...` token. `#value` becomes `info:value`, `#key:value`
/// keeps its key, anything with more separators or an empty part is
/// dropped.
#[must_use]
pub fn parse_tag_token(token: &str) -> Option<Tag> {
    let body = token.strip_prefix('#').unwrap_or(token);
    let mut parts = body.split(':');
    let (key, value) = match (parts.next(), parts.next(), parts.next()) {
        (Some(value), None, None) => (DEFAULT_TAG_KEY, value),
        (Some(key), Some(value), None) => (key, value),
        _ => return None,
    };
    (!key.is_empty() && !value.is_empty()).then(|| Tag::new(key, value))
}

/// Parses the lines of one `/* ... */` block, delimiters included
pub fn parse_comment_block<S: AsRef<str>>(lines: &[S]) -> TestBlock {
    let mut block = TestBlock::default();
    let mut section = None;

    for raw in lines.iter().map(|l| l.as_ref().trim()) {
        let line = raw.strip_prefix("/*").unwrap_or(raw);
        let line = line.strip_suffix("*/").unwrap_or(line).trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with("GIVEN") {
            section = Some(Section::Given);
        } else if line.starts_with("WHEN") {
            section = Some(Section::When);
        } else if line.starts_with("THEN") {
            section = Some(Section::Then);
        } else if line.starts_with('#') {
            for token in line.split(' ').filter(|token| !token.is_empty()) {
                match parse_tag_token(token) {
                    Some(tag) => block = block.with_tag(tag),
                    None => tracing::warn!(token, "ignoring malformed tag"),
                }
            }
        } else if let Some(step) = line.strip_prefix('-') {
            let step = step.trim();
            block = match section {
                Some(Section::Given) => block.with_given(step),
                Some(Section::When) => block.with_when(step),
                Some(Section::Then) => block.with_then(step),
                None => block,
            };
        }
    }

    block
}

/// Method signature from a `func test...` line, without the opening brace
fn method_name(line: &str) -> String {
    line.strip_suffix('{').unwrap_or(line).trim().to_string()
}

/// Scans a Swift source file for documented and orphan tests.
///
/// `filename` and `filepath` are copied into both resulting records.
#[must_use]
pub fn parse_swift_source(filename: &str, filepath: &str, source: &str) -> ParsedSource {
    let mut documented = FileRecord::new(filename).with_filepath(filepath);
    let mut orphans = FileRecord::new(filename).with_filepath(filepath);

    let mut comment: Vec<&str> = Vec::new();
    let mut pending: Option<TestBlock> = None;

    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim();
        let line_number = index + 1;

        if line.starts_with("/*") {
            if line.len() > 2 && line.ends_with("*/") {
                pending = Some(parse_comment_block(&[line]));
                comment.clear();
            } else {
                comment = vec![line];
            }
        } else if !comment.is_empty() {
            comment.push(line);
            if line.ends_with("*/") {
                pending = Some(parse_comment_block(&comment));
                comment.clear();
            }
        } else if line.starts_with('}') {
            pending = None;
        } else if line.starts_with("func test") {
            let test = TestRecord::new(method_name(line)).with_line(line_number);
            match pending.take() {
                Some(block) => documented.tests.push(test.with_block(block)),
                None => orphans.tests.push(test),
            }
        }
    }

    tracing::debug!(
        file = filename,
        documented = documented.tests.len(),
        orphans = orphans.tests.len(),
        "parsed swift source"
    );

    ParsedSource {
        documented,
        orphans,
    }
}
