//! Pure data structures exchanged between the controller and the [`BookStore`](crate::store::BookStore).

pub mod book;

pub use book::*;
