//! Error types for the test explorer view
//!
//! Every failure is logged to the browser console and swallowed; the page
//! stays empty rather than showing a partial explorer.

use thiserror::Error;

/// Loading the catalogue failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response
    #[error("network error fetching '{url}': {reason}")]
    Network { url: String, reason: String },
    /// The server answered with a non-success status
    #[error("'{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },
    /// The body is not a valid catalogue
    #[error("invalid catalogue JSON from '{url}': {reason}")]
    Decode { url: String, reason: String },
}

/// Errors that stop the explorer from starting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExplorerError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// A required container element is missing from the page
    #[error("container element #{id} not found")]
    ContainerNotFound { id: String },
}

/// Result type alias for explorer operations
pub type Result<T> = std::result::Result<T, ExplorerError>;
