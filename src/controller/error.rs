//! Error types for the book controller.

use crate::store::StoreError;
use thiserror::Error;

/// Failures the controller hands back to the routing layer.
///
/// A missing book on update is *not* an error: it is answered with a
/// regular 404 [`Response`](super::Response).
#[derive(Debug, Error)]
pub enum ControllerError {
    /// The store failed. Passed through untouched.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The request carries no value for a required path parameter.
    #[error("Missing path parameter: {0}")]
    MissingParam(&'static str),

    /// An entity returned by the store could not be turned into JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
