//! # Book Controller
//!
//! Request handlers for the book resource. Each operation makes exactly one
//! call to the injected [`BookStore`] and turns the outcome into a
//! [`Response`].
//!
//! | Operation | Store call | Success | Nothing matched |
//! |-----------|------------|---------|-----------------|
//! | [`list`](BookController::list) | `fetch_all` | 200 + array | 200 + `[]` |
//! | [`get_by_id`](BookController::get_by_id) | `fetch_by_id` | 200 + book | 200 + `null` |
//! | [`create`](BookController::create) | `insert` | 201 + book | n/a |
//! | [`update`](BookController::update) | `update_by_id` | 200 + updated book | 404 + `{"error": ..}` |
//! | [`delete`](BookController::delete) | `remove_by_id` | 200 + removed book | 200 + `null` |
//!
//! Only `update` answers a miss with 404. `get_by_id` and `delete` answer 200
//! with a `null` body.
//!
//! Store failures are never caught here; they come back as
//! [`ControllerError::Store`] for the web framework's default error path.

pub mod error;
pub mod request;
pub mod response;

pub use error::*;
pub use request::*;
pub use response::*;

use crate::store::{BookStore, UpdateOptions};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Handles the five CRUD operations for books.
///
/// Holds nothing but its store, so it can be cloned into as many request
/// tasks as needed (wrap the store in an `Arc` to share one connection).
#[derive(Debug, Clone)]
pub struct BookController<S> {
    store: S,
}

impl<S: BookStore> BookController<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// `GET /libros`
    #[instrument(skip_all)]
    pub async fn list(&self, _req: &Request) -> Result<Response, ControllerError> {
        let books = self.store.fetch_all().await.inspect_err(log_store_error)?;
        info!(count = books.len(), "Listed");
        respond(OK, &books)
    }

    /// `GET /libros/:id`
    #[instrument(skip_all, fields(id = req.param(ID_PARAM)))]
    pub async fn get_by_id(&self, req: &Request) -> Result<Response, ControllerError> {
        let id = path_id(req)?;
        debug!(%id, "Get");
        let book = self.store.fetch_by_id(id).await.inspect_err(log_store_error)?;
        info!(%id, found = book.is_some(), "Fetched");
        respond(OK, &book)
    }

    /// `POST /libros`
    #[instrument(skip_all)]
    pub async fn create(&self, req: &Request) -> Result<Response, ControllerError> {
        let payload = req.body.clone().unwrap_or_default();
        debug!(?payload, "Create");
        let book = self.store.insert(payload).await.inspect_err(log_store_error)?;
        info!(id = book.id(), "Created");
        respond(CREATED, &book)
    }

    /// `PUT /libros/:id`
    #[instrument(skip_all, fields(id = req.param(ID_PARAM)))]
    pub async fn update(&self, req: &Request) -> Result<Response, ControllerError> {
        let id = path_id(req)?;
        let payload = req.body.clone().unwrap_or_default();
        debug!(%id, ?payload, "Update");
        let updated = self
            .store
            .update_by_id(id, payload, UpdateOptions::returning_updated())
            .await
            .inspect_err(log_store_error)?;

        match updated {
            Some(book) => {
                info!(%id, "Updated");
                respond(OK, &book)
            }
            None => {
                warn!(%id, "Not found");
                Ok(Response::error(NOT_FOUND, BOOK_NOT_FOUND))
            }
        }
    }

    /// `DELETE /libros/:id`
    #[instrument(skip_all, fields(id = req.param(ID_PARAM)))]
    pub async fn delete(&self, req: &Request) -> Result<Response, ControllerError> {
        let id = path_id(req)?;
        debug!(%id, "Delete");
        let removed = self.store.remove_by_id(id).await.inspect_err(log_store_error)?;
        info!(%id, found = removed.is_some(), "Deleted");
        respond(OK, &removed)
    }
}

fn path_id(req: &Request) -> Result<&str, ControllerError> {
    req.param(ID_PARAM).ok_or_else(|| {
        warn!(param = ID_PARAM, "Missing path parameter");
        ControllerError::MissingParam(ID_PARAM)
    })
}

fn respond<T: Serialize>(status: u16, body: &T) -> Result<Response, ControllerError> {
    Ok(Response::status(status).json(serde_json::to_value(body)?))
}

fn log_store_error(e: &crate::store::StoreError) {
    warn!(error = %e, "Store call failed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mock::MockBookStore;
    use crate::store::StoreError;
    use serde_json::json;

    #[tokio::test]
    async fn test_missing_id_skips_store() {
        let store = MockBookStore::new();
        let controller = BookController::new(store.clone());

        for result in [
            controller.get_by_id(&Request::new()).await,
            controller.update(&Request::new()).await,
            controller.delete(&Request::new()).await,
        ] {
            assert!(matches!(result, Err(ControllerError::MissingParam("id"))));
        }
        store.verify();
    }

    #[tokio::test]
    async fn test_create_without_body_forwards_empty_document() {
        let store = MockBookStore::new();
        store
            .expect_insert(Default::default())
            .return_ok(crate::model::Book::default().with_id("abc"));

        let controller = BookController::new(store.clone());
        let response = controller.create(&Request::new()).await.unwrap();

        assert_eq!(response, Response::status(CREATED).json(json!({ "id": "abc" })));
        store.verify();
    }

    #[tokio::test]
    async fn test_store_error_is_not_translated() {
        let store = MockBookStore::new();
        store
            .expect_update_by_id("1", Default::default(), UpdateOptions::returning_updated())
            .return_err(StoreError::Unavailable("connection reset".into()));

        let controller = BookController::new(store.clone());
        let err = controller
            .update(&Request::new().with_id("1"))
            .await
            .unwrap_err();

        assert!(matches!(err, ControllerError::Store(StoreError::Unavailable(_))));
        assert_eq!(err.to_string(), "Store unavailable: connection reset");
        store.verify();
    }
}
