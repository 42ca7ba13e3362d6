//! CLI command definitions using clap.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// testgen - UI test documentation extractor and explorer
#[derive(Parser, Debug)]
#[command(name = "testgen")]
#[command(version)]
#[command(about = "Extract GIVEN/WHEN/THEN test documentation and explore it by tag")]
#[command(
    long_about = "testgen scans Swift UI-test sources for documented test methods, writes them as a JSON catalogue, and renders the catalogue as a tag-filterable test explorer."
)]
pub struct Cli {
    /// Config file (defaults to .testgen.toml in the working directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a source tree and write tests.json and orphan.json
    Generate {
        /// Directory path to parse Swift files
        #[arg(short, long)]
        path: PathBuf,

        /// Directory the JSON files are written to
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Render a catalogue as a static HTML test explorer
    Render {
        /// Catalogue JSON file
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Active tag filter as key:value (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Output HTML file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List the distinct tags of a catalogue in display order
    Tags {
        /// Catalogue JSON file
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for listing commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `#key:value` per line
    Text,
    /// JSON array of `{key, value}`
    Json,
}
