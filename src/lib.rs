#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # testgen
//!
//! Extracts GIVEN/WHEN/THEN documentation from Swift UI tests and renders it
//! as a tag-filterable test explorer.
//!
//! This library exposes the CLI pieces and re-exports the core crate.

pub use testgen_core;

pub mod cli;
pub mod commands;
pub mod scan;
