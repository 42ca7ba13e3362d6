//! CLI command handlers.
//!
//! All commands follow functional patterns:
//! - Zero unwraps, zero panics
//! - Result<T, Error> for all operations
//! - Pure functions where possible

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use testgen_core::html::render_page;
use testgen_core::{
    Config, Explorer, FileRecord, Tag, TagSelection, parse_catalogue, to_catalogue_json,
};
use tracing::info;

use crate::cli::{Commands, OutputFormat};
use crate::scan::scan_tree;

/// Execute a CLI command.
///
/// This is the main command dispatcher that routes to the appropriate handler.
/// Output goes to `out` so handlers stay testable.
///
/// # Errors
///
/// Returns error if the selected command fails.
pub fn execute_command(command: Commands, config: &Config, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Generate { path, out_dir } => cmd_generate(&path, out_dir, config, out),
        Commands::Render { data, tags, out: target } => {
            cmd_render(data, &tags, target.as_deref(), config, out)
        }
        Commands::Tags { data, format } => cmd_tags(data, format, config, out),
    }
}

/// Scan sources and write both catalogues.
fn cmd_generate(
    path: &Path,
    out_dir: Option<PathBuf>,
    config: &Config,
    out: &mut impl Write,
) -> Result<()> {
    let report = scan_tree(path, &config.generator).with_context(|| {
        format!(
            "Failed to scan {}. Make sure the directory exists and contains Swift test files",
            path.display()
        )
    })?;

    let resolve = |file: &Path| match &out_dir {
        Some(dir) => dir.join(file),
        None => file.to_path_buf(),
    };

    let tests_path = resolve(config.generator.tests_output.as_path());
    write_catalogue(&tests_path, &report.documented)?;
    writeln!(
        out,
        "Test data JSON file generated successfully: {} ({} files)",
        tests_path.display(),
        report.documented.len()
    )?;

    let orphans_path = resolve(config.generator.orphans_output.as_path());
    write_catalogue(&orphans_path, &report.orphans)?;
    writeln!(
        out,
        "Orphan test data JSON file generated successfully: {} ({} files)",
        orphans_path.display(),
        report.orphans.len()
    )?;

    info!(
        scanned = report.files_scanned,
        documented = report.documented.len(),
        orphans = report.orphans.len(),
        "generation complete"
    );
    Ok(())
}

/// Render the explorer for a selection as static HTML.
fn cmd_render(
    data: Option<PathBuf>,
    tags: &[String],
    target: Option<&Path>,
    config: &Config,
    out: &mut impl Write,
) -> Result<()> {
    let explorer = load_explorer(data, config)?;
    let selection = parse_selection(tags)?;

    let visible = explorer.visible_count(&selection);
    info!(active = selection.len(), visible, "rendering explorer");

    let page = render_page(&explorer, &selection, &config.view);
    match target {
        Some(path) => {
            std::fs::write(path, page)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            writeln!(out, "Rendered {visible} tests to {}", path.display())?;
        }
        None => out.write_all(page.as_bytes())?,
    }
    Ok(())
}

/// Print the tag universe in display order.
fn cmd_tags(
    data: Option<PathBuf>,
    format: OutputFormat,
    config: &Config,
    out: &mut impl Write,
) -> Result<()> {
    let explorer = load_explorer(data, config)?;
    match format {
        OutputFormat::Text => {
            for tag in explorer.universe() {
                writeln!(out, "{tag}")?;
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(explorer.universe())
                .context("Failed to serialize tags")?;
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}

/// Parse `key:value` arguments into a selection.
///
/// # Errors
///
/// Returns error on the first argument without a `key:value` shape.
pub fn parse_selection(tags: &[String]) -> Result<TagSelection> {
    tags.iter()
        .map(|raw| Tag::parse(raw).with_context(|| "Tag filters look like team:core".to_string()))
        .collect()
}

fn load_explorer(data: Option<PathBuf>, config: &Config) -> Result<Explorer> {
    let path = data.unwrap_or_else(|| PathBuf::from(&config.view.data_path));
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read catalogue {}", path.display()))?;
    let files = parse_catalogue(&json)
        .with_context(|| format!("Failed to parse catalogue {}", path.display()))?;
    Ok(Explorer::new(files, config.view.tag_priority.clone()))
}

fn write_catalogue(path: &Path, files: &[FileRecord]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let json = to_catalogue_json(files)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}
