//! Search bar component renderer.

use crate::ui::helpers::{position_cursor, write_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search input box at the specified row.
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────────────────────┐ [margin]
/// [margin] │ Search titles or authors: dune▏  │ [margin]
/// [margin] └──────────────────────────────────┘ [margin]
/// ```
///
/// The caret is drawn only while the query is being edited.
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_search_bar(out: &mut String, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = Theme::fg(&theme.colors.search_bar_border);

    position_cursor(out, row, 1);
    out.push_str(&margin);
    out.push_str(&border);
    out.push_str(&format!("┌{}┐", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    let caret = if search.is_typing { "▏" } else { "" };
    let text = format!(" Search titles or authors: {}{caret}", search.query);

    position_cursor(out, row + 1, 1);
    out.push_str(&margin);
    out.push_str(&border);
    out.push('│');
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    write_padded(out, &text, inner_width);
    out.push_str(&border);
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    out.push_str(&margin);
    out.push_str(&border);
    out.push_str(&format!("└{}┘", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    row + 3
}
