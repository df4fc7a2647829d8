//! # Book Resource
//!
//! > **CRUD request handling for a "book" document collection.**
//!
//! This crate turns the five classic resource operations (list, get, create,
//! update, delete) into plain async functions from a [`Request`](controller::Request)
//! to a [`Response`](controller::Response). The web framework does the
//! routing; the document store does the storing. What sits in between is here.
//!
//! ## 🏗️ Design
//!
//! ### One Store Call per Request
//! Every operation calls the [`BookStore`](store::BookStore) exactly once and
//! maps the outcome to a status code. There are no retries, no validation and
//! no state beyond the injected store.
//!
//! ### Open Payloads
//! Books are schema-less documents. [`Book`](model::Book) wraps the raw
//! document and only offers read accessors (`id()`, `title()`, `author()`),
//! so every field, `null`s and odd types included, is written back unchanged.
//!
//! ### Injected Persistence
//! [`BookController`](controller::BookController) is generic over its store, so
//! tests swap in [`MockBookStore`](store::mock::MockBookStore) while production
//! plugs in a real driver.
//!
//! ## 🗺️ Module Tour
//!
//! - [`controller`]: the request handlers, request/response descriptors and errors.
//! - [`model`]: the [`Book`](model::Book) entity and [`Document`](model::Document) payload.
//! - [`store`]: the persistence trait, its errors and the mock.
//! - [`telemetry`]: tracing subscriber setup.
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use book_resource::controller::{BookController, Request};
//! use book_resource::model::Book;
//! use book_resource::store::mock::MockBookStore;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let store = MockBookStore::new();
//! store.expect_fetch_all().return_ok(vec![Book::new("Rayuela", "Julio Cortazar").with_id("1")]);
//!
//! let controller = BookController::new(store.clone());
//! let response = controller.list(&Request::new()).await.unwrap();
//!
//! assert_eq!(response.status, 200);
//! assert_eq!(response.body[0]["title"], "Rayuela");
//! store.verify();
//! # }
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! RUST_LOG=debug cargo test
//! ```

pub mod controller;
pub mod model;
pub mod store;
pub mod telemetry;
