//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They hold
//! display-ready strings and flags only; no lookups happen at render time.
//!
//! # Example
//!
//! ```rust
//! use bookstacks::ui::viewmodel::{EmptyState, FooterInfo, HeaderInfo};
//!
//! let header = HeaderInfo {
//!     title: "The Shelves".to_string(),
//!     subtitle: "Browsing 18 books".to_string(),
//! };
//! let empty = EmptyState {
//!     message: "Empty Shelf!".to_string(),
//!     subtitle: "We couldn't find any books matching that.".to_string(),
//! };
//! let footer = FooterInfo {
//!     keybindings: "q: quit".to_string(),
//!     credit: "© 2026 Sushh Online Library System".to_string(),
//! };
//! assert!(!empty.message.is_empty() && !header.title.is_empty() && !footer.credit.is_empty());
//! ```

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    /// Brand and route tabs along the top edge.
    pub nav: NavInfo,

    /// Page title and subtitle.
    pub header: HeaderInfo,

    /// Route-specific content.
    pub body: Body,

    /// Keybinding hints and the credit line.
    pub footer: FooterInfo,
}

/// Top navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavInfo {
    pub brand: String,
    pub tabs: Vec<NavTab>,
}

/// One route shortcut in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTab {
    pub label: &'static str,
    /// Key that jumps to this route in normal mode.
    pub key: char,
    pub is_active: bool,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub subtitle: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,

    /// "© {year} Sushh Online Library System".
    pub credit: String,
}

/// Route-specific page content.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Home(HomeView),
    Shelf(ShelfView),
    Detail(DetailView),
    /// A detail route whose id matches no book.
    MissingBook(EmptyState),
    Form(FormView),
    NotFound(NotFoundView),
}

/// Landing page: hero text, genre grid and readers' favourites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub hero: String,
    pub genres: Vec<GenreTile>,
    pub favourites: Vec<DisplayItem>,
}

/// One genre in the home grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreTile {
    pub label: &'static str,
    pub count: usize,
    pub is_selected: bool,
}

/// The shelves, filtered by category and query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfView {
    /// Present while search mode is active.
    pub search_bar: Option<SearchBarInfo>,

    /// Rows inside the visible window.
    pub items: Vec<DisplayItem>,

    /// Index of the selected row within `items`.
    pub selected_index: usize,

    /// Shown instead of the table when nothing matches.
    pub empty_state: Option<EmptyState>,
}

/// Display information for a single book row or card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub title: String,
    pub author: String,
    pub category: &'static str,
    /// One `★` per whole rating point.
    pub stars: String,
    pub is_selected: bool,

    /// Query matches in `title`, as `(start, end)` character indices.
    pub title_highlights: Vec<(usize, usize)>,

    /// Query matches in `author`, as `(start, end)` character indices.
    pub author_highlights: Vec<(usize, usize)>,
}

/// Full record view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub category: &'static str,
    /// Rating as "4.8/5.0".
    pub rating: String,
    pub stars: String,
    pub title: String,
    pub author: String,
    pub synopsis: String,
    pub cover: String,
}

/// The creation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub fields: Vec<FormFieldView>,
    pub submit_label: &'static str,
}

/// One labelled input with its inline error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldView {
    pub label: &'static str,
    pub value: String,
    pub placeholder: &'static str,
    pub error: Option<&'static str>,
    pub is_focused: bool,
}

/// Unmatched route page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundView {
    pub code: &'static str,
    pub headline: &'static str,
    pub path: String,
    pub hint: &'static str,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    /// Whether keystrokes currently edit the query.
    pub is_typing: bool,
}
