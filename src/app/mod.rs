//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the domain and store
//! layers.
//!
//! ```text
//! Key → Event → handle_event → AppState mutation / store dispatch → Actions
//!                                       │
//!                        store observer ┘ (refresh flag → re-render)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`form`]: Creation form buffers and validation
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Input mode state machine types
//! - [`route`]: Navigation paths
//! - [`state`]: Central application state and view model computation

pub mod actions;
pub mod form;
pub mod handler;
pub mod modes;
pub mod route;
pub mod state;

pub use actions::Action;
pub use form::{BookForm, FormErrors, FormField};
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchFocus};
pub use route::Route;
pub use state::AppState;
