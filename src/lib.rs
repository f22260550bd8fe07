//! book_catalog: an in-memory book catalog with composable queries.
//!
//! The catalog lives behind the [`BookRepository`] trait; the bundled
//! [`InMemoryBookRepository`] keeps records in insertion order and issues
//! identifiers that are never reused. Read-only queries (title search,
//! price filtering, sorting, paging, and the combined advanced query) are
//! pure functions in [`query`] run over a snapshot of the collection.
//!
//! With the `http` feature (on by default) the [`http`] module serves the
//! catalog through axum.

mod book;
pub mod config;
mod error;
pub mod query;
mod repository;
pub mod seed;

#[cfg(feature = "http")]
pub mod http;

pub use book::{Book, BookId, BookPatch, NewBook};
pub use config::Config;
pub use error::CatalogError;
pub use repository::{BookRepository, DeleteOutcome, InMemoryBookRepository};
