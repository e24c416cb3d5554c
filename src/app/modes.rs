//! Input mode state types.
//!
//! The plugin interprets keys in one of three modes:
//! - **Normal**: navigation and route shortcuts
//! - **Search**: editing the shelf query or moving through its results
//! - **Form**: typing into the "Add Book" form
//!
//! # Example
//!
//! ```rust
//! use bookstacks::app::modes::{InputMode, SearchFocus};
//!
//! let mode = InputMode::Search(SearchFocus::Typing);
//! assert!(mode.captures_text());
//! ```

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Keys edit the query.
    Typing,

    /// Keys move through the filtered shelf; `/` returns to typing.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and which footer hints are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// j/k move, Enter opens, h/b/a switch routes, / searches, q closes.
    #[default]
    Normal,

    /// Query editing on the shelves.
    Search(SearchFocus),

    /// Text entry in the creation form. Active whenever the route is `/add`.
    Form,
}

impl InputMode {
    /// Whether printable keys are text input rather than shortcuts.
    #[must_use]
    pub const fn captures_text(self) -> bool {
        matches!(self, Self::Search(SearchFocus::Typing) | Self::Form)
    }
}
