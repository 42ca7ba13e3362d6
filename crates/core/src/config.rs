//! Configuration loading and management
//!
//! # Hierarchy
//!
//! Configuration is loaded in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Global config: `<config dir>/testgen/config.toml` (skipped with a
//!    warning when unreadable or malformed)
//! 3. Project config: `.testgen.toml`
//! 4. Environment variables: `TESTGEN_*`
//! 5. CLI flags (command-specific)
//!
//! # Example Config
//!
//! ```toml
//! [view]
//! data_path = "tests.json"
//! tag_priority = ["team", "module", "info"]
//!
//! [generator]
//! source_marker = "UITests"
//! extension = "swift"
//! ```

use std::path::{Path, PathBuf};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::result::ResultExt;
use crate::tags::TagOrder;
use crate::{Error, Result};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".testgen.toml";

// ═══════════════════════════════════════════════════════════════════════════
// CONFIGURATION STRUCTURES
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub view: ViewConfig,
    pub generator: GeneratorConfig,
}

/// Explorer view settings, shared by the browser view and the HTML export
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ViewConfig {
    pub title: String,
    pub data_path: String,
    pub list_element_id: String,
    pub filter_element_id: String,
    pub tag_priority: TagOrder,
}

/// Swift test scanning settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub source_marker: String,
    pub extension: String,
    pub tests_output: PathBuf,
    pub orphans_output: PathBuf,
}

// ═══════════════════════════════════════════════════════════════════════════
// DEFAULT IMPLEMENTATIONS
// ═══════════════════════════════════════════════════════════════════════════

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            title: "Test Explorer".to_string(),
            data_path: "sample.json".to_string(),
            list_element_id: "test-list".to_string(),
            filter_element_id: "tag-filter".to_string(),
            tag_priority: TagOrder::default(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_marker: "UITests".to_string(),
            extension: "swift".to_string(),
            tests_output: PathBuf::from("tests.json"),
            orphans_output: PathBuf::from("orphan.json"),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// LOADING
// ═══════════════════════════════════════════════════════════════════════════

/// Load configuration from all sources with the documented precedence.
///
/// `explicit` replaces the project config path when given; it must exist.
///
/// # Errors
///
/// Returns error if:
/// - A config file cannot be read or is malformed TOML
/// - An explicit config path does not exist
/// - Config values fail validation
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    // 1. Start with built-in defaults
    let mut table = default_table()?;

    // 2. Global config if exists
    if let Some(global) = global_config_path()
        .filter(|p| p.exists())
        .and_then(|p| load_global_file(&p))
    {
        merge_tables(&mut table, global);
    }

    // 3. Project config (or the explicit one)
    match explicit {
        Some(path) => merge_tables(&mut table, load_toml_file(path)?),
        None => {
            let project_path = PathBuf::from(PROJECT_CONFIG_FILE);
            if project_path.exists() {
                merge_tables(&mut table, load_toml_file(&project_path)?);
            }
        }
    }

    let mut config = table_into_config(table)?;

    // 4. Environment variable overrides
    config.apply_env(|name| std::env::var(name).ok());

    // 5. Validate
    config.validate()?;

    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

/// Parses a TOML document on top of the defaults.
///
/// # Errors
///
/// Returns [`Error::TomlParseFailed`] on malformed TOML or mistyped values.
pub fn parse_config(content: &str) -> Result<Config> {
    toml::from_str(content).map_err(|e| Error::toml_parse_failed(e.to_string()))
}

impl Config {
    /// Applies `TESTGEN_*` overrides read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("TESTGEN_DATA_PATH") {
            self.view.data_path = value;
        }
        if let Some(value) = lookup("TESTGEN_TITLE") {
            self.view.title = value;
        }
        if let Some(value) = lookup("TESTGEN_TAG_PRIORITY") {
            self.view.tag_priority = TagOrder::new(
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|key| !key.is_empty()),
            );
        }
        if let Some(value) = lookup("TESTGEN_SOURCE_MARKER") {
            self.generator.source_marker = value;
        }
        if let Some(value) = lookup("TESTGEN_TESTS_OUTPUT") {
            self.generator.tests_output = PathBuf::from(value);
        }
        if let Some(value) = lookup("TESTGEN_ORPHANS_OUTPUT") {
            self.generator.orphans_output = PathBuf::from(value);
        }
    }

    /// Checks values that would otherwise fail later in confusing ways.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for empty element ids, an empty
    /// extension, or duplicate priority keys.
    pub fn validate(&self) -> Result<()> {
        if self.view.list_element_id.is_empty() || self.view.filter_element_id.is_empty() {
            return Err(Error::invalid_config("element ids must not be empty"));
        }
        if self.view.list_element_id == self.view.filter_element_id {
            return Err(Error::invalid_config(
                "list and filter containers must be different elements",
            ));
        }
        if self.generator.extension.trim_start_matches('.').is_empty() {
            return Err(Error::invalid_config("generator extension must not be empty"));
        }
        if !self.view.tag_priority.priority().iter().all_unique() {
            return Err(Error::invalid_config("tag_priority contains duplicate keys"));
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// HELPER FUNCTIONS
// ═══════════════════════════════════════════════════════════════════════════

/// Get path to global config file
fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "testgen")
        .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
}

/// Built-in defaults as a raw table
fn default_table() -> Result<toml::Table> {
    toml::to_string(&Config::default())
        .map_err(|e| Error::toml_parse_failed(e.to_string()))?
        .parse::<toml::Table>()
        .map_err(|e| Error::toml_parse_failed(e.to_string()))
}

/// Deserializes a merged table
fn table_into_config(table: toml::Table) -> Result<Config> {
    toml::Value::Table(table)
        .try_into()
        .map_err(|e| Error::toml_parse_failed(e.to_string()))
}

/// Load a TOML file as a raw table
///
/// # Errors
///
/// Returns error if the file cannot be read or is malformed
fn load_toml_file(path: &Path) -> Result<toml::Table> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::file_read_failed(path, e.to_string()))?;

    content
        .parse::<toml::Table>()
        .map_err(|e| Error::toml_parse_failed(format!("{}: {e}", path.display())))
}

/// Global config is shared across projects, so a broken one is skipped
fn load_global_file(path: &Path) -> Option<toml::Table> {
    load_toml_file(path).into_option_logged()
}

/// Deep-merges `overlay` into `base`; nested tables merge, values replace
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(nested)) => {
                merge_tables(existing, nested);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
