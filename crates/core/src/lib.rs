//! Core types and pure logic for testgen.
//!
//! ## Module Structure
//! - `model`: file/test/block records and the JSON catalogue format
//! - `tags`: tag ordering and the tag universe
//! - `selection`: active tag selection and the filter predicate
//! - `render`: render model shared by the browser view and HTML export
//! - `html`: static HTML export
//! - `parser`: Swift UI-test comment-block parser
//! - `config`: layered configuration
//! - `error` / `result`: error type and Result alias
//!
//! Nothing here touches the DOM, so the same crate backs both the CLI and
//! the wasm frontend.

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod html;
pub mod model;
pub mod parser;
pub mod render;
pub mod result;
pub mod selection;
pub mod tags;

pub use config::{Config, GeneratorConfig, ViewConfig, load_config};
pub use error::Error;
pub use model::{FileRecord, Tag, TestBlock, TestRecord, parse_catalogue, to_catalogue_json};
pub use render::{Explorer, FileSection, PLACEHOLDER, TagButton, TestCard};
pub use result::{Result, ResultExt};
pub use selection::TagSelection;
pub use tags::TagOrder;
