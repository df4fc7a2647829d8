//! Error types for the persistence layer.

use thiserror::Error;

/// Errors a [`BookStore`](super::BookStore) may report.
///
/// The controller never inspects these; they travel up unchanged inside
/// [`ControllerError::Store`](crate::controller::ControllerError::Store).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The store rejected the identifier (e.g. not a valid object id).
    #[error("Invalid id: {0}")]
    InvalidId(String),

    /// Any other failure reported by the backend driver.
    #[error("Store backend error: {0}")]
    Backend(String),
}

