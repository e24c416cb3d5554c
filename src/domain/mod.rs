//! Domain layer: book records, genres, the seed catalog, and derived views.
//!
//! Nothing in here knows about Zellij, rendering or the record store.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`book`]: Book record, identifiers and cover URLs
//! - [`category`]: The six genre labels
//! - [`seed`]: The catalog the store starts with
//! - [`selectors`]: Pure filters and lookups over a snapshot

pub mod book;
pub mod category;
pub mod error;
pub mod seed;
pub mod selectors;

pub use book::{Book, BookId, NewBook};
pub use category::Category;
pub use error::{BookstacksError, Result};
pub use seed::seed_books;
pub use selectors::Lookup;
