//! Behavioral tests for the explorer view
//!
//! BDD-style tests using given-when-then naming. DOM-free: they exercise
//! loading and the render model the components draw from.

pub mod load_behaviors;
pub mod selection_behaviors;
