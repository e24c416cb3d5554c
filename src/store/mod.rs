//! Observable record store.
//!
//! - [`container`]: generic [`Store`] with snapshots and observers
//! - [`reducer`]: the [`Reducer`] contract and [`Transition`] verdicts
//! - [`catalog`]: the book catalog reducer and its actions

pub mod catalog;
pub mod container;
pub mod reducer;

pub use catalog::{add_book, catalog_store, CatalogAction, CatalogReducer, CatalogStore, IdAllocator};
pub use container::{Store, Subscription, SubscriptionId};
pub use reducer::{Reducer, Transition};
