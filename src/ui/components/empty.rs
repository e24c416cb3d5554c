//! Empty state component renderer.

use crate::ui::helpers::{position_cursor, write_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message, one blank line below `row`.
///
/// Used for the empty shelf and for detail pages whose book does not exist.
///
/// # Returns
///
/// The next available row position
pub fn render_empty_state(out: &mut String, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row + 1, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    write_centered(out, &empty.message, cols);
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    write_centered(out, &empty.subtitle, cols);
    out.push_str(Theme::reset());

    row + 3
}
