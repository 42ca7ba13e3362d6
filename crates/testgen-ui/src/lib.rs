//! Leptos 0.7 CSR test explorer
//!
//! Renders a testgen catalogue as a list of test cards grouped by file,
//! with a bar of `#key:value` toggles that narrows the list to tests
//! carrying every active tag.
//!
//! ## Architecture
//! - Pure CSR (Client-Side Rendering) with Leptos 0.7
//! - WASM compilation target (wasm32-unknown-unknown)
//! - Filtering and rendering decisions live in `testgen-core`; this crate
//!   only turns them into DOM
//!
//! ## Module Structure
//! - `app`: startup, fetch and mounting
//! - `components`: filter bar and test list
//! - `state`: catalogue loading
//! - `error`: error types and handling

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod error;
pub mod state;

#[cfg(test)]
mod tests;
