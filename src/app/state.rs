//! Application state management and view model computation.
//!
//! [`AppState`] owns the catalog store and every piece of transient UI state:
//! the current route, search query, list cursor, input mode and the creation
//! form. The catalog itself lives only in the store; every read goes through
//! a fresh snapshot so views never drift from the records.
//!
//! # Store wiring
//!
//! `AppState` subscribes to the store when it is built. The observer only
//! raises a refresh flag; the event handler consumes the flag to decide
//! whether the plugin must re-render.
//!
//! # Example
//!
//! ```rust
//! use bookstacks::app::{AppState, Route};
//! use bookstacks::store::catalog_store;
//! use bookstacks::ui::Theme;
//!
//! let state = AppState::new(catalog_store(), Theme::default(), Route::parse("/books"));
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.header.title, "The Shelves");
//! ```

use super::form::{BookForm, FormErrors, FormField};
use super::modes::{InputMode, SearchFocus};
use super::route::Route;
use crate::domain::selectors::{self, Lookup};
use crate::domain::{Book, Category, Result};
use crate::store::{add_book, CatalogStore, IdAllocator, Subscription};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Body, DetailView, DisplayItem, EmptyState, FooterInfo, FormFieldView, FormView, GenreTile,
    HeaderInfo, HomeView, NavInfo, NavTab, NotFoundView, SearchBarInfo, ShelfView, UIViewModel,
};
use chrono::Datelike;
use std::cell::Cell;
use std::rc::Rc;

/// Rows taken by nav, header, borders, footer and the table header row.
const SHELF_CHROME_ROWS: usize = 9;

/// Extra rows taken by the search box.
const SEARCH_BAR_ROWS: usize = 3;

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// The catalog. Shared with the store observer, read through snapshots.
    pub store: CatalogStore,

    /// Where the user currently is.
    pub route: Route,

    /// Determines active keybindings and footer text.
    pub input_mode: InputMode,

    /// Shelf query. Cleared on every route change.
    pub search_query: String,

    /// Cursor into the current route's selectable entries.
    ///
    /// On the home page genres come first, then favourites. On the shelves
    /// it indexes the filtered list.
    pub selected_index: usize,

    /// Text typed into the creation form.
    pub form: BookForm,

    /// Inline errors from the last submit.
    pub form_errors: FormErrors,

    /// Form field receiving keystrokes.
    pub focused_field: FormField,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Year printed in the footer credit.
    pub credit_year: i32,

    ids: IdAllocator,
    refresh: Rc<Cell<bool>>,
    subscription: Option<Subscription>,
}

impl AppState {
    /// Creates the application state around an existing store.
    ///
    /// # Parameters
    ///
    /// * `store` - Catalog store; `AppState` subscribes to it immediately
    /// * `theme` - Color scheme for UI rendering
    /// * `start_route` - Route shown first
    #[must_use]
    pub fn new(store: CatalogStore, theme: Theme, start_route: Route) -> Self {
        let refresh = Rc::new(Cell::new(false));
        let flag = Rc::clone(&refresh);
        let subscription = store.subscribe(move || flag.set(true));

        let ids = IdAllocator::after(&store.snapshot());

        let mut state = Self {
            store,
            route: Route::Home,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            selected_index: 0,
            form: BookForm::default(),
            form_errors: FormErrors::default(),
            focused_field: FormField::Title,
            theme,
            credit_year: chrono::Utc::now().year(),
            ids,
            refresh,
            subscription: Some(subscription),
        };
        state.navigate(start_route);
        state
    }

    /// Current catalog snapshot.
    #[must_use]
    pub fn catalog(&self) -> Rc<Vec<Book>> {
        self.store.snapshot()
    }

    /// Returns `true` once after each store change, then resets.
    pub fn take_refresh(&self) -> bool {
        self.refresh.replace(false)
    }

    /// Title for the plugin pane.
    #[must_use]
    pub fn pane_title(&self) -> String {
        format!("Bookstacks: {}", self.route.path())
    }

    /// Switches to `route` and resets the state tied to the previous page.
    ///
    /// Returns `false` if already there.
    pub fn navigate(&mut self, route: Route) -> bool {
        if route == self.route {
            return false;
        }

        tracing::debug!(from = %self.route, to = %route, "navigating");

        self.search_query.clear();
        self.selected_index = 0;
        self.input_mode = Self::mode_for(&route);

        if route == Route::Add {
            self.form = BookForm::default();
            self.form_errors = FormErrors::default();
            self.focused_field = FormField::Title;
        }

        self.route = route;
        true
    }

    fn mode_for(route: &Route) -> InputMode {
        if *route == Route::Add {
            InputMode::Form
        } else {
            InputMode::Normal
        }
    }

    /// Number of entries the cursor can land on for the current route.
    #[must_use]
    pub fn selectable_count(&self) -> usize {
        let books = self.catalog();
        match &self.route {
            Route::Home => Category::ALL.len() + selectors::highlights(&books).len(),
            Route::Browse { category } => selectors::filter_books(&books, category.as_deref(), &self.search_query).len(),
            Route::Detail { .. } | Route::Add | Route::NotFound { .. } => 0,
        }
    }

    /// Moves the cursor down one entry, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let count = self.selectable_count();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
    }

    /// Moves the cursor up one entry, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let count = self.selectable_count();
        if count == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = count - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Keeps the cursor inside the current entry list.
    pub fn clamp_selection(&mut self) {
        let count = self.selectable_count();
        self.selected_index = if count == 0 { 0 } else { self.selected_index.min(count - 1) };
    }

    /// Route opened by `Enter` on the current cursor position.
    #[must_use]
    pub fn selected_target(&self) -> Option<Route> {
        let books = self.catalog();
        match &self.route {
            Route::Home => {
                if let Some(category) = Category::ALL.get(self.selected_index) {
                    return Some(Route::Browse {
                        category: Some(category.label().to_string()),
                    });
                }
                selectors::highlights(&books)
                    .get(self.selected_index - Category::ALL.len())
                    .map(|book| Route::Detail { id: book.id.to_string() })
            }
            Route::Browse { category } => selectors::filter_books(&books, category.as_deref(), &self.search_query)
                .get(self.selected_index)
                .map(|book| Route::Detail { id: book.id.to_string() }),
            Route::Detail { .. } | Route::Add | Route::NotFound { .. } => None,
        }
    }

    /// Shelf route for the genre after (or before) the current one.
    ///
    /// From the unfiltered shelves, or a label that names no genre, cycling
    /// starts at the first (or last) genre.
    #[must_use]
    pub fn adjacent_shelf(&self, forward: bool) -> Option<Route> {
        let Route::Browse { category } = &self.route else {
            return None;
        };
        let current = category.as_deref().and_then(|label| label.parse::<Category>().ok());
        let next = match (current, forward) {
            (Some(c), true) => c.next(),
            (Some(c), false) => c.previous(),
            (None, true) => Category::ALL[0],
            (None, false) => Category::ALL[Category::ALL.len() - 1],
        };
        Some(Route::Browse {
            category: Some(next.label().to_string()),
        })
    }

    /// Replaces a field's text and clears its error.
    pub fn edit_field(&mut self, field: FormField, edit: impl FnOnce(&mut String)) {
        edit(self.form.value_mut(field));
        if self.form_errors.clear(field) {
            tracing::debug!(field = ?field, "field error cleared by edit");
        }
    }

    /// Validates the form and, when valid, adds the book to the catalog.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if a book was added (form reset, route changed to the
    /// shelves), `Ok(false)` if validation failed and errors are now shown.
    ///
    /// # Errors
    ///
    /// Returns [`BookstacksError::Store`](crate::BookstacksError::Store) if the
    /// store refused the record.
    pub fn submit_form(&mut self) -> Result<bool> {
        let _span = tracing::debug_span!("submit_form").entered();

        match self.form.validate() {
            Err(errors) => {
                tracing::debug!(error_count = errors.len(), "form rejected");
                if let Some(first) = errors.fields().next() {
                    self.focused_field = first;
                }
                self.form_errors = errors;
                Ok(false)
            }
            Ok(new_book) => {
                let id = add_book(&self.store, &mut self.ids, new_book)?;
                tracing::debug!(book_id = %id, "form accepted");
                self.form = BookForm::default();
                self.form_errors = FormErrors::default();
                self.focused_field = FormField::Title;
                self.navigate(Route::Browse { category: None });
                Ok(true)
            }
        }
    }

    /// Detaches from the store. Called when the plugin stops.
    pub fn shutdown(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            let _ = subscription.unsubscribe();
        }
        self.store.shutdown();
    }

    /// Computes a renderable UI view model from current state and terminal
    /// dimensions.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells (unused by layout math,
    ///   kept for parity with the renderer)
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Calculate available rows after subtracting UI chrome
    /// 2. Center window around the selected index
    /// 3. Adjust window if near the end to maximize visible items
    /// 4. Compute relative selection index within the visible window
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UIViewModel {
        let _span = tracing::debug_span!("compute_viewmodel", route = %self.route).entered();

        let books = self.catalog();
        let (header, body) = match &self.route {
            Route::Home => self.home_page(&books),
            Route::Browse { category } => self.shelf_page(&books, category.as_deref(), rows),
            Route::Detail { id } => Self::detail_page(&books, id),
            Route::Add => self.form_page(),
            Route::NotFound { path } => Self::not_found_page(path),
        };

        UIViewModel {
            nav: self.compute_nav(),
            header,
            body,
            footer: self.compute_footer(),
        }
    }

    fn home_page(&self, books: &[Book]) -> (HeaderInfo, Body) {
        let genres = selectors::category_counts(books)
            .into_iter()
            .enumerate()
            .map(|(idx, (category, count))| GenreTile {
                label: category.label(),
                count,
                is_selected: idx == self.selected_index,
            })
            .collect();

        let favourites = selectors::highlights(books)
            .into_iter()
            .enumerate()
            .map(|(idx, book)| Self::display_item(book, Category::ALL.len() + idx == self.selected_index, ""))
            .collect();

        let header = HeaderInfo {
            title: "Find your next favorite story.".to_string(),
            subtitle: "Open 24/7 for Bookworms".to_string(),
        };
        let hero = format!(
            "Welcome to my personal library project. Explore {} curated titles, read descriptions, or help grow the collection.",
            books.len()
        );

        (header, Body::Home(HomeView { hero, genres, favourites }))
    }

    fn shelf_page(&self, books: &[Book], category: Option<&str>, rows: usize) -> (HeaderInfo, Body) {
        let filtered = selectors::filter_books(books, category, &self.search_query);

        let title = category.map_or_else(|| "The Shelves".to_string(), |label| format!("{label} Collection"));
        let noun = if filtered.len() == 1 { "book" } else { "books" };
        let header = HeaderInfo {
            title,
            subtitle: format!("Browsing {} {noun}", filtered.len()),
        };

        let search_bar = match self.input_mode {
            InputMode::Search(focus) => Some(SearchBarInfo {
                query: self.search_query.clone(),
                is_typing: focus == SearchFocus::Typing,
            }),
            InputMode::Normal | InputMode::Form => None,
        };

        if filtered.is_empty() {
            let subtitle = if category.is_some() {
                "We couldn't find any books matching that. Press Esc to clear filters."
            } else {
                "We couldn't find any books matching that."
            };
            let empty_state = Some(EmptyState {
                message: "Empty Shelf!".to_string(),
                subtitle: subtitle.to_string(),
            });
            return (
                header,
                Body::Shelf(ShelfView {
                    search_bar,
                    items: vec![],
                    selected_index: 0,
                    empty_state,
                }),
            );
        }

        let chrome = if search_bar.is_some() {
            SHELF_CHROME_ROWS + SEARCH_BAR_ROWS
        } else {
            SHELF_CHROME_ROWS
        };
        let available_rows = rows.saturating_sub(chrome).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(filtered.len());
        if visible_end - visible_start < available_rows && filtered.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let query = if search_bar.is_some() { self.search_query.as_str() } else { "" };
        let items = filtered[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative, book)| Self::display_item(book, visible_start + relative == self.selected_index, query))
            .collect();

        (
            header,
            Body::Shelf(ShelfView {
                search_bar,
                items,
                selected_index: self.selected_index.saturating_sub(visible_start),
                empty_state: None,
            }),
        )
    }

    fn detail_page(books: &[Book], raw_id: &str) -> (HeaderInfo, Body) {
        match selectors::find_by_route_id(books, raw_id) {
            Lookup::Found(book) => (
                HeaderInfo {
                    title: book.title.clone(),
                    subtitle: format!("by {}", book.author),
                },
                Body::Detail(DetailView {
                    category: book.category.label(),
                    rating: format!("{}/5.0", book.rating),
                    stars: "★".repeat(book.star_count()),
                    title: book.title.clone(),
                    author: format!("by {}", book.author),
                    synopsis: book.description.clone(),
                    cover: book.cover.clone(),
                }),
            ),
            Lookup::Missing => (
                HeaderInfo {
                    title: "Book not found".to_string(),
                    subtitle: String::new(),
                },
                Body::MissingBook(EmptyState {
                    message: "Book not found".to_string(),
                    subtitle: "Press Esc to go back to the shelves.".to_string(),
                }),
            ),
        }
    }

    fn form_page(&self) -> (HeaderInfo, Body) {
        let fields = FormField::ALL
            .into_iter()
            .map(|field| FormFieldView {
                label: field.label(),
                value: self.form.value(field).to_string(),
                placeholder: field.placeholder(),
                error: self.form_errors.get(field),
                is_focused: field == self.focused_field,
            })
            .collect();

        (
            HeaderInfo {
                title: "Contribute a Book".to_string(),
                subtitle: "Help grow our community library by adding a new title.".to_string(),
            },
            Body::Form(FormView {
                fields,
                submit_label: "Add to Collection",
            }),
        )
    }

    fn not_found_page(path: &str) -> (HeaderInfo, Body) {
        (
            HeaderInfo {
                title: "404".to_string(),
                subtitle: "Lost in the stacks?".to_string(),
            },
            Body::NotFound(NotFoundView {
                code: "404",
                headline: "Lost in the stacks?",
                path: path.to_string(),
                hint: "It might have been moved or never written. Press h to get back to safety.",
            }),
        )
    }

    fn display_item(book: &Book, is_selected: bool, query: &str) -> DisplayItem {
        DisplayItem {
            title: book.title.clone(),
            author: book.author.clone(),
            category: book.category.label(),
            stars: "★".repeat(book.star_count()),
            is_selected,
            title_highlights: match_ranges(&book.title, query),
            author_highlights: match_ranges(&book.author, query),
        }
    }

    fn compute_nav(&self) -> NavInfo {
        let active = self.route.section();
        let tabs = [("Home", 'h'), ("Browse", 'b'), ("Add Book", 'a')]
            .into_iter()
            .map(|(label, key)| NavTab {
                label,
                key,
                is_active: label == active,
            })
            .collect();

        NavInfo {
            brand: "Sushh.lib".to_string(),
            tabs,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, &self.route) {
            (InputMode::Search(SearchFocus::Typing), _) => {
                "ESC: clear search  Enter: results  Ctrl+n/p: navigate  Type to filter"
            }
            (InputMode::Search(SearchFocus::Navigating), _) => {
                "ESC: clear search  /: edit query  j/k: navigate  Enter: view"
            }
            (InputMode::Form, _) => "Tab/Shift+Tab: field  [ ]: genre  Enter: add to collection  ESC: leave",
            (InputMode::Normal, Route::Home) => "j/k: navigate  Enter: open  b: browse  a: add book  q: quit",
            (InputMode::Normal, Route::Browse { .. }) => {
                "j/k: navigate  Enter: view  /: search  [ ]: genre  ESC: back  q: quit"
            }
            (InputMode::Normal, Route::Detail { .. }) => "ESC: back  h: home  b: browse  a: add book  q: quit",
            (InputMode::Normal, Route::Add | Route::NotFound { .. }) => "h: back to safety  b: browse  q: quit",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
            credit: format!("© {} Sushh Online Library System", self.credit_year),
        }
    }
}

/// Character ranges where `query` occurs in `text`, ignoring case.
///
/// Returns `(start, end)` pairs in character indices, end exclusive. Matches
/// do not overlap. An empty query yields no ranges.
fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return vec![];
    }

    let haystack: Vec<char> = text.chars().flat_map(char::to_lowercase).collect();
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();

    // Lowercasing that changes length breaks the index mapping.
    if haystack.len() != text.chars().count() || needle.is_empty() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut start = 0;
    while start + needle.len() <= haystack.len() {
        if haystack[start..start + needle.len()] == needle[..] {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::match_ranges;

    #[test]
    fn match_ranges_ignores_case() {
        assert_eq!(match_ranges("Dune", "dUN"), vec![(0, 3)]);
    }

    #[test]
    fn match_ranges_finds_every_occurrence() {
        assert_eq!(match_ranges("The Name of the Wind", "the"), vec![(0, 3), (12, 15)]);
    }

    #[test]
    fn match_ranges_uses_char_indices() {
        assert_eq!(match_ranges("Café Noir", "noir"), vec![(5, 9)]);
    }

    #[test]
    fn empty_query_highlights_nothing() {
        assert!(match_ranges("Dune", "").is_empty());
    }
}
