//! Table component renderer.
//!
//! Renders the shelf as a four-column table (TITLE, AUTHOR, GENRE, RATING)
//! with selection and search match highlighting. Column widths follow the
//! terminal width: genre and rating are fixed, title and author share the rest.

use crate::ui::helpers::{position_cursor, render_highlighted_text, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const GENRE_WIDTH: usize = 14;
const RATING_WIDTH: usize = 7;

/// Column widths for a given terminal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    title: usize,
    author: usize,
}

impl Columns {
    fn for_width(cols: usize) -> Self {
        let flexible = cols.saturating_sub(GENRE_WIDTH + RATING_WIDTH + 1);
        let title = flexible * 55 / 100;
        Self {
            title,
            author: flexible - title,
        }
    }
}

/// Renders the table column headers at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_table_headers(out: &mut String, row: usize, theme: &Theme, cols: usize) -> usize {
    let columns = Columns::for_width(cols);

    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&format!(
        " {:<tw$}{:<aw$}{:<gw$}{:<rw$}",
        "TITLE",
        "AUTHOR",
        "GENRE",
        "RATING",
        tw = columns.title,
        aw = columns.author,
        gw = GENRE_WIDTH,
        rw = RATING_WIDTH,
    ));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of items)
pub fn render_table_rows(out: &mut String, row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let columns = Columns::for_width(cols);
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(out, current_row, item, columns, theme, cols);
    }
    current_row
}

/// Renders one book row.
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`)
/// 2. Search match highlights (unless selected)
/// 3. Normal text color
///
/// The row is padded to the full terminal width so the selection background
/// spans the line.
fn render_table_row(out: &mut String, row: usize, item: &DisplayItem, columns: Columns, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);

    let base = if item.is_selected {
        format!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg))
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    out.push_str(&base);
    out.push(' ');

    let mut used = 1;
    used += write_cell(out, &item.title, &item.title_highlights, columns.title, theme, item.is_selected);
    used += write_cell(out, &item.author, &item.author_highlights, columns.author, theme, item.is_selected);
    used += write_cell(out, item.category, &[], GENRE_WIDTH, theme, item.is_selected);

    if !item.is_selected {
        out.push_str(&Theme::fg(&theme.colors.star_fg));
    }
    out.push_str(&item.stars);
    used += text_width(&item.stars);
    out.push_str(&base);

    out.push_str(&" ".repeat(cols.saturating_sub(used)));
    out.push_str(Theme::reset());
    row + 1
}

/// Writes one cell padded to `width`, leaving a one-space gutter.
///
/// Highlights are dropped when the text has to be cut.
fn write_cell(out: &mut String, text: &str, ranges: &[(usize, usize)], width: usize, theme: &Theme, is_selected: bool) -> usize {
    let room = width.saturating_sub(1);
    let shown = truncate(text, room);
    if shown == text {
        render_highlighted_text(out, text, ranges, theme, is_selected);
    } else {
        out.push_str(&shown);
    }
    out.push_str(&" ".repeat(width.saturating_sub(text_width(&shown))));
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str) -> DisplayItem {
        DisplayItem {
            title: title.to_string(),
            author: "Frank Herbert".to_string(),
            category: "Sci-Fi",
            stars: "★★★★".to_string(),
            is_selected: false,
            title_highlights: vec![],
            author_highlights: vec![],
        }
    }

    #[test]
    fn columns_share_the_flexible_width() {
        let columns = Columns::for_width(100);
        assert_eq!(columns.title + columns.author, 100 - GENRE_WIDTH - RATING_WIDTH - 1);
    }

    #[test]
    fn long_titles_are_cut() {
        let theme = Theme::default();
        let mut out = String::new();
        render_table_rows(&mut out, 1, &[item(&"x".repeat(200))], &theme, 60);
        assert!(out.contains('…'));
        assert!(out.contains("Frank"));
    }

    #[test]
    fn one_line_per_item() {
        let theme = Theme::default();
        let mut out = String::new();
        let next = render_table_rows(&mut out, 7, &[item("Dune"), item("Hyperion")], &theme, 80);
        assert_eq!(next, 9);
        assert!(out.contains("\u{1b}[8;1H"));
    }
}
