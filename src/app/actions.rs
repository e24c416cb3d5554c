//! Side effects requested from the plugin runtime.
//!
//! The event handler never calls the host directly; it returns a list of
//! [`Action`]s that `main.rs` executes after each event.

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user presses `q` in normal mode.
    CloseFocus,

    /// Retitles the plugin pane after a route change.
    RenamePane {
        /// New pane title, e.g. `Bookstacks: /books/Fantasy`.
        title: String,
    },
}
