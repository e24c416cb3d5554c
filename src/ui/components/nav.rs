//! Navigation bar: brand on the left, route tabs on the right.

use crate::ui::helpers::{position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NavInfo;

/// Renders the navigation bar.
///
/// # Layout
///
/// ```text
///  Sushh.lib                      [h] Home  [b] Browse  [a] Add Book
/// ```
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_nav(out: &mut String, row: usize, nav: &NavInfo, theme: &Theme, cols: usize) -> usize {
    let tabs: Vec<String> = nav.tabs.iter().map(|tab| format!(" [{}] {} ", tab.key, tab.label)).collect();
    let tabs_width: usize = tabs.iter().map(|t| text_width(t)).sum();
    let brand = format!(" {}", nav.brand);
    let gap = cols.saturating_sub(text_width(&brand) + tabs_width);

    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.brand_fg));
    out.push_str(&brand);
    out.push_str(Theme::reset());
    out.push_str(&" ".repeat(gap));

    for (tab, text) in nav.tabs.iter().zip(&tabs) {
        if tab.is_active {
            out.push_str(Theme::bold());
            out.push_str(&Theme::fg(&theme.colors.tab_active_fg));
            out.push_str(&Theme::bg(&theme.colors.tab_active_bg));
        } else {
            out.push_str(&Theme::fg(&theme.colors.text_dim));
        }
        out.push_str(text);
        out.push_str(Theme::reset());
    }

    row + 1
}
