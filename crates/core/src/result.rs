//! Result type definition and extension traits for testgen operations.

use crate::error::Error;

/// The standard Result type for testgen operations.
///
/// All fallible operations in testgen return this type.
/// Use the `?` operator, `match`, or combinator methods to handle results.
pub type Result<T> = std::result::Result<T, Error>;

/// Combinators for results whose failure is tolerated.
pub trait ResultExt<T> {
    /// Convert a Result to an Option, logging the error as a warning.
    fn into_option_logged(self) -> Option<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn into_option_logged(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Skipping after failure: {}", e);
                None
            }
        }
    }
}
