//! Composable UI component renderers.
//!
//! Each component writes one part of the frame into a shared `String` and
//! returns the next free row, so a page is a chain of calls.
//!
//! # Components
//!
//! - [`nav`]: Brand and route tabs
//! - [`header`]: Page title and subtitle
//! - [`footer`]: Keybinding hints and credit line
//! - [`search`]: Search input box
//! - [`table`]: Shelf listing (TITLE, AUTHOR, GENRE, RATING)
//! - [`empty`]: Empty shelf and missing book messages
//! - [`home`], [`detail`], [`form`], [`not_found`]: Route bodies
//!
//! # Layout
//!
//! ```text
//! [Nav]
//! [Border]
//! [Header - 2 lines]
//! [Border]
//! [Body]
//! [Border]
//! [Footer - 2 lines]
//! ```

mod detail;
mod empty;
mod footer;
mod form;
mod header;
mod home;
mod nav;
mod not_found;
mod search;
mod table;

pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, ShelfView, UIViewModel};

use detail::render_detail;
use footer::render_footer;
use form::render_form;
use header::render_header;
use home::render_home;
use nav::render_nav;
use not_found::render_not_found;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders a complete page: shared chrome around the route body.
///
/// # Line Accounting
///
/// Nav, header, three borders and the two-line footer take eight rows. The
/// shelf adds a table header row, and three more while searching. Bodies stop
/// before the bottom border.
pub fn render_page(out: &mut String, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 1;

    current_row = render_nav(out, current_row, &vm.nav, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);
    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);

    let footer_start = rows.saturating_sub(1).max(current_row + 1);
    let border_row = footer_start - 1;

    match &vm.body {
        Body::Home(home) => {
            render_home(out, current_row, border_row, home, theme, cols);
        }
        Body::Shelf(shelf) => {
            render_shelf(out, current_row, shelf, theme, cols);
        }
        Body::Detail(detail) => {
            render_detail(out, current_row + 1, border_row, detail, theme, cols);
        }
        Body::MissingBook(empty) => {
            render_empty_state(out, current_row, empty, theme, cols);
        }
        Body::Form(form) => {
            render_form(out, current_row + 1, border_row, form, theme, cols);
        }
        Body::NotFound(page) => {
            render_not_found(out, current_row, border_row, page, theme, cols);
        }
    }

    render_border(out, border_row, &theme.colors.border, cols);
    render_footer(out, footer_start, &vm.footer, theme, cols);
}

/// Search bar (if active), then the table or the empty state.
fn render_shelf(out: &mut String, row: usize, shelf: &ShelfView, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    if let Some(search) = &shelf.search_bar {
        current_row = render_search_bar(out, current_row, search, theme, cols);
    }

    if let Some(empty) = &shelf.empty_state {
        return render_empty_state(out, current_row, empty, theme, cols);
    }

    current_row = render_table_headers(out, current_row, theme, cols);
    render_table_rows(out, current_row, &shelf.items, theme, cols)
}
