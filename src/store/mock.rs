//! # Mock Store
//!
//! An in-memory [`BookStore`] double for testing the controller without a
//! database.
//!
//! Queue expectations in the order the calls will happen, hand the mock to a
//! [`BookController`](crate::controller::BookController), then call
//! [`MockBookStore::verify`].
//!
//! A call that does not match the next expectation (wrong operation or wrong
//! arguments) panics, which fails the test at the point of the bad call.
//!
//! # Example
//! ```
//! use book_resource::model::Book;
//! use book_resource::store::mock::MockBookStore;
//! use book_resource::store::BookStore;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mock = MockBookStore::new();
//! mock.expect_fetch_by_id("1").return_ok(Some(Book::new("Rayuela", "Julio Cortazar").with_id("1")));
//!
//! let found = mock.fetch_by_id("1").await.unwrap();
//! assert_eq!(found.unwrap().title(), Some("Rayuela"));
//! mock.verify();
//! # }
//! ```

use crate::model::{Book, Document};
use crate::store::{BookStore, StoreError, UpdateOptions};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};

type Queue = Arc<Mutex<VecDeque<Expectation>>>;

/// An expected call together with the response to hand back.
enum Expectation {
    FetchAll {
        response: Result<Vec<Book>, StoreError>,
    },
    FetchById {
        id: String,
        response: Result<Option<Book>, StoreError>,
    },
    Insert {
        payload: Document,
        response: Result<Book, StoreError>,
    },
    UpdateById {
        id: String,
        payload: Document,
        options: UpdateOptions,
        response: Result<Option<Book>, StoreError>,
    },
    RemoveById {
        id: String,
        response: Result<Option<Book>, StoreError>,
    },
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::FetchAll { .. } => write!(f, "fetch_all()"),
            Expectation::FetchById { id, .. } => write!(f, "fetch_by_id({id:?})"),
            Expectation::Insert { payload, .. } => write!(f, "insert({payload:?})"),
            Expectation::UpdateById { id, payload, options, .. } => {
                write!(f, "update_by_id({id:?}, {payload:?}, {options:?})")
            }
            Expectation::RemoveById { id, .. } => write!(f, "remove_by_id({id:?})"),
        }
    }
}

/// A [`BookStore`] driven by a queue of expectations.
///
/// Clones share the same queue, so a test can keep one handle for
/// [`verify`](Self::verify) while the controller owns another.
#[derive(Clone, Default)]
pub struct MockBookStore {
    expectations: Queue,
}

impl MockBookStore {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `fetch_all` call.
    pub fn expect_fetch_all(&self) -> ExpectationBuilder<Vec<Book>> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::FetchAll {
            response,
        })
    }

    /// Expects a `fetch_by_id` call with exactly this id.
    pub fn expect_fetch_by_id(&self, id: impl Into<String>) -> ExpectationBuilder<Option<Book>> {
        let id = id.into();
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::FetchById {
            id,
            response,
        })
    }

    /// Expects an `insert` call with exactly this payload.
    pub fn expect_insert(&self, payload: Document) -> ExpectationBuilder<Book> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Insert {
            payload,
            response,
        })
    }

    /// Expects an `update_by_id` call with exactly these arguments.
    pub fn expect_update_by_id(
        &self,
        id: impl Into<String>,
        payload: Document,
        options: UpdateOptions,
    ) -> ExpectationBuilder<Option<Book>> {
        let id = id.into();
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::UpdateById {
            id,
            payload,
            options,
            response,
        })
    }

    /// Expects a `remove_by_id` call with exactly this id.
    pub fn expect_remove_by_id(&self, id: impl Into<String>) -> ExpectationBuilder<Option<Book>> {
        let id = id.into();
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::RemoveById {
            id,
            response,
        })
    }

    /// Number of expectations not yet consumed.
    pub fn remaining(&self) -> usize {
        self.expectations.lock().unwrap().len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            let pending: Vec<String> = exps.iter().map(ToString::to_string).collect();
            panic!(
                "Not all expectations were met. {} remaining: {}",
                exps.len(),
                pending.join(", ")
            );
        }
    }

    fn next(&self, call: &str) -> Expectation {
        // Lock is released before the caller inspects the expectation.
        let next = self.expectations.lock().unwrap().pop_front();
        match next {
            Some(expectation) => expectation,
            None => panic!("Unexpected call to {call}: no expectations left"),
        }
    }
}

/// Finishes an expectation by choosing what the mock returns.
pub struct ExpectationBuilder<R> {
    expectations: Queue,
    build: Box<dyn FnOnce(Result<R, StoreError>) -> Expectation + Send>,
}

impl<R> ExpectationBuilder<R> {
    fn new(
        expectations: &Queue,
        build: impl FnOnce(Result<R, StoreError>) -> Expectation + Send + 'static,
    ) -> Self {
        Self {
            expectations: expectations.clone(),
            build: Box::new(build),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, StoreError>) {
        let expectation = (self.build)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

#[async_trait]
impl BookStore for MockBookStore {
    async fn fetch_all(&self) -> Result<Vec<Book>, StoreError> {
        match self.next("fetch_all") {
            Expectation::FetchAll { response } => response,
            other => panic!("Unexpected call to fetch_all(), expected {other}"),
        }
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<Book>, StoreError> {
        match self.next("fetch_by_id") {
            Expectation::FetchById { id: expected, response } => {
                assert_eq!(id, expected, "fetch_by_id called with unexpected id");
                response
            }
            other => panic!("Unexpected call to fetch_by_id({id:?}), expected {other}"),
        }
    }

    async fn insert(&self, payload: Document) -> Result<Book, StoreError> {
        match self.next("insert") {
            Expectation::Insert { payload: expected, response } => {
                assert_eq!(payload, expected, "insert called with unexpected payload");
                response
            }
            other => panic!("Unexpected call to insert({payload:?}), expected {other}"),
        }
    }

    async fn update_by_id(
        &self,
        id: &str,
        payload: Document,
        options: UpdateOptions,
    ) -> Result<Option<Book>, StoreError> {
        match self.next("update_by_id") {
            Expectation::UpdateById {
                id: expected_id,
                payload: expected_payload,
                options: expected_options,
                response,
            } => {
                assert_eq!(id, expected_id, "update_by_id called with unexpected id");
                assert_eq!(payload, expected_payload, "update_by_id called with unexpected payload");
                assert_eq!(options, expected_options, "update_by_id called with unexpected options");
                response
            }
            other => panic!("Unexpected call to update_by_id({id:?}, ..), expected {other}"),
        }
    }

    async fn remove_by_id(&self, id: &str) -> Result<Option<Book>, StoreError> {
        match self.next("remove_by_id") {
            Expectation::RemoveById { id: expected, response } => {
                assert_eq!(id, expected, "remove_by_id called with unexpected id");
                response
            }
            other => panic!("Unexpected call to remove_by_id({id:?}), expected {other}"),
        }
    }
}
