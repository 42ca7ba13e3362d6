//! Source tree discovery for the generator.
//!
//! Walks a directory for test sources (by default every `.swift` file whose
//! path contains `UITests`) and parses each with the core comment-block
//! parser.

use std::path::{Path, PathBuf};

use testgen_core::parser::parse_swift_source;
use testgen_core::{Error, FileRecord, GeneratorConfig, Result};
use tracing::{debug, info};

/// Documented and orphan catalogues for a whole tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub documented: Vec<FileRecord>,
    pub orphans: Vec<FileRecord>,
    pub files_scanned: usize,
}

/// Candidate source files under `root`, in path order
///
/// # Errors
///
/// Returns error if `root` is not a directory or a path cannot be read
/// while walking.
pub fn discover_sources(root: &Path, config: &GeneratorConfig) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(Error::directory_not_found(root));
    }

    let extension = config.extension.trim_start_matches('.');
    let pattern = format!(
        "{}/**/*.{}",
        glob::Pattern::escape(&root.to_string_lossy()),
        extension
    );

    let entries = glob::glob(&pattern).map_err(|e| Error::invalid_config(e.to_string()))?;

    let mut sources = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::file_read_failed(e.path(), e.error().to_string()))?;
        if path.is_file() && path.to_string_lossy().contains(&config.source_marker) {
            sources.push(path);
        } else {
            debug!(path = %path.display(), "skipping non-test source");
        }
    }

    sources.sort();
    Ok(sources)
}

/// Parses one source file into its documented and orphan records
///
/// # Errors
///
/// Returns error if the file cannot be read.
pub fn scan_file(path: &Path) -> Result<(FileRecord, FileRecord)> {
    let bytes = std::fs::read(path).map_err(|e| Error::file_read_failed(path, e.to_string()))?;
    let source = String::from_utf8_lossy(&bytes);
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let parsed = parse_swift_source(&filename, &path.to_string_lossy(), &source);
    Ok((parsed.documented, parsed.orphans))
}

/// Scans every test source under `root`.
///
/// Files contribute to a catalogue only when they have at least one test
/// of that kind.
///
/// # Errors
///
/// Returns error if the root is missing or any source cannot be read.
pub fn scan_tree(root: &Path, config: &GeneratorConfig) -> Result<ScanReport> {
    let sources = discover_sources(root, config)?;
    info!(root = %root.display(), files = sources.len(), "scanning test sources");

    sources
        .iter()
        .try_fold(ScanReport::default(), |mut report, path| {
            let (documented, orphans) = scan_file(path)?;
            if !documented.tests.is_empty() {
                report.documented.push(documented);
            }
            if !orphans.tests.is_empty() {
                report.orphans.push(orphans);
            }
            report.files_scanned += 1;
            Ok(report)
        })
}
