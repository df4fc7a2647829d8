//! # Persistence Capabilities
//!
//! The controller talks to the document store only through [`BookStore`].
//! Any storage technology may back it; the crate ships no engine of its own,
//! only the [`mock`] test double.
//!
//! ## Implementing a Store
//!
//! ```rust
//! use async_trait::async_trait;
//! use book_resource::model::{Book, Document};
//! use book_resource::store::{BookStore, StoreError, UpdateOptions};
//!
//! struct EmptyStore;
//!
//! #[async_trait]
//! impl BookStore for EmptyStore {
//!     async fn fetch_all(&self) -> Result<Vec<Book>, StoreError> { Ok(vec![]) }
//!     async fn fetch_by_id(&self, _: &str) -> Result<Option<Book>, StoreError> { Ok(None) }
//!     async fn insert(&self, _: Document) -> Result<Book, StoreError> {
//!         Err(StoreError::Unavailable("read only".into()))
//!     }
//!     async fn update_by_id(&self, _: &str, _: Document, _: UpdateOptions) -> Result<Option<Book>, StoreError> {
//!         Ok(None)
//!     }
//!     async fn remove_by_id(&self, _: &str) -> Result<Option<Book>, StoreError> { Ok(None) }
//! }
//! ```

pub mod error;
pub mod mock;

pub use error::*;

use crate::model::{Book, Document};
use async_trait::async_trait;
use std::sync::Arc;

/// Options accepted by [`BookStore::update_by_id`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOptions {
    /// Return the document as it is *after* the update instead of before.
    pub return_updated: bool,
}

impl UpdateOptions {
    pub fn returning_updated() -> Self {
        Self {
            return_updated: true,
        }
    }
}

/// The five persistence capabilities the controller relies on.
///
/// Identifier generation and uniqueness belong to the implementor.
/// `Ok(None)` means "no document matched"; `Err` is reserved for failures of
/// the store itself.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Fetch every stored book.
    async fn fetch_all(&self) -> Result<Vec<Book>, StoreError>;

    /// Fetch one book by identifier.
    async fn fetch_by_id(&self, id: &str) -> Result<Option<Book>, StoreError>;

    /// Persist a new book and return it with its assigned identifier.
    async fn insert(&self, payload: Document) -> Result<Book, StoreError>;

    /// Replace the fields of the matching book with `payload`.
    async fn update_by_id(
        &self,
        id: &str,
        payload: Document,
        options: UpdateOptions,
    ) -> Result<Option<Book>, StoreError>;

    /// Remove the matching book and return it.
    async fn remove_by_id(&self, id: &str) -> Result<Option<Book>, StoreError>;
}

#[async_trait]
impl<S: BookStore + ?Sized> BookStore for Arc<S> {
    async fn fetch_all(&self) -> Result<Vec<Book>, StoreError> {
        (**self).fetch_all().await
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<Book>, StoreError> {
        (**self).fetch_by_id(id).await
    }

    async fn insert(&self, payload: Document) -> Result<Book, StoreError> {
        (**self).insert(payload).await
    }

    async fn update_by_id(
        &self,
        id: &str,
        payload: Document,
        options: UpdateOptions,
    ) -> Result<Option<Book>, StoreError> {
        (**self).update_by_id(id, payload, options).await
    }

    async fn remove_by_id(&self, id: &str) -> Result<Option<Book>, StoreError> {
        (**self).remove_by_id(id).await
    }
}
