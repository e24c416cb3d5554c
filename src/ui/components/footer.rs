//! Footer: keybinding hints and the credit line.

use crate::ui::helpers::{position_cursor, write_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the two footer lines starting at `row`.
///
/// Both lines are centered and dimmed. Text wider than the terminal is
/// truncated.
///
/// # Returns
///
/// The next available row position (row + 2)
pub fn render_footer(out: &mut String, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    write_centered(out, &footer.keybindings, cols);
    out.push_str(Theme::reset());

    position_cursor(out, row + 1, 1);
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    write_centered(out, &footer.credit, cols);
    out.push_str(Theme::reset());

    row + 2
}
