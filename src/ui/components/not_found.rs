//! Page shown for paths no route matches.

use crate::ui::helpers::{position_cursor, wrap, write_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NotFoundView;

/// Renders the 404 page centered in the space between `row` and `bottom`.
///
/// # Returns
///
/// The next available row position
pub fn render_not_found(out: &mut String, row: usize, bottom: usize, page: &NotFoundView, theme: &Theme, cols: usize) -> usize {
    let mut lines: Vec<(String, String)> = vec![
        (format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent_fg)), page.code.to_string()),
        (format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg)), page.headline.to_string()),
        (Theme::fg(&theme.colors.text_dim), page.path.clone()),
        (String::new(), String::new()),
    ];
    let style = Theme::fg(&theme.colors.text_normal);
    lines.extend(wrap(page.hint, cols.saturating_sub(8).max(1)).into_iter().map(|line| (style.clone(), line)));

    let space = bottom.saturating_sub(row);
    let mut current_row = row + space.saturating_sub(lines.len()) / 2;
    for (style, text) in lines {
        if current_row >= bottom {
            break;
        }
        position_cursor(out, current_row, 1);
        out.push_str(&style);
        write_centered(out, &text, cols);
        out.push_str(Theme::reset());
        current_row += 1;
    }
    current_row
}
