//! Book detail page.

use crate::ui::helpers::{position_cursor, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;

const LEFT_MARGIN: usize = 3;

/// Renders the full record of one book between `row` and `bottom`.
///
/// # Layout
///
/// ```text
///    Sci-Fi  ★★★★ 4.5/5.0
///
///    Dune
///    by Frank Herbert
///
///    Synopsis
///    Set on the desert planet Arrakis, ...
///
///    Cover: https://covers.openlibrary.org/b/id/...
/// ```
///
/// # Returns
///
/// The next available row position
pub fn render_detail(out: &mut String, row: usize, bottom: usize, detail: &DetailView, theme: &Theme, cols: usize) -> usize {
    let width = cols.saturating_sub(LEFT_MARGIN * 2).max(1);
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "{}{}{}  {}{}{} {}",
        Theme::fg(&theme.colors.accent_fg),
        detail.category,
        Theme::reset(),
        Theme::fg(&theme.colors.star_fg),
        detail.stars,
        Theme::reset(),
        detail.rating
    ));
    lines.push(String::new());
    lines.push(format!("{}{}{}", Theme::bold(), detail.title, Theme::reset()));
    lines.push(format!("{}{}{}", Theme::italic(), detail.author, Theme::reset()));
    lines.push(String::new());
    lines.push(format!("{}{}Synopsis{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), Theme::reset()));
    lines.extend(wrap(&detail.synopsis, width));
    lines.push(String::new());
    lines.push(format!("{}Cover: {}{}", Theme::fg(&theme.colors.text_dim), detail.cover, Theme::reset()));

    let mut current_row = row;
    for line in lines {
        if current_row >= bottom {
            break;
        }
        position_cursor(out, current_row, LEFT_MARGIN + 1);
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        out.push_str(&line);
        out.push_str(Theme::reset());
        current_row += 1;
    }
    current_row
}
