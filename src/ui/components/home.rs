//! Landing page: hero text, genre grid and readers' favourites.

use crate::ui::helpers::{position_cursor, text_width, truncate, wrap, write_centered, write_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, GenreTile, HomeView};

/// Width of one genre tile, including its gutter.
const TILE_WIDTH: usize = 20;

/// Renders the home body between `row` and `bottom` (exclusive).
///
/// # Layout
///
/// ```text
///        Welcome to my personal library project. Explore 18 ...
///
///  Browse by Genre
///  [ Fantasy (4)    ] [ Sci-Fi (3)     ] [ Mystery (3)    ]
///  [ Romance (2)    ] [ Thriller (3)   ] [ Non-Fiction (3)]
///
///  Readers' Favourites
///  ★★★★  Dune                     Frank Herbert
/// ```
///
/// Sections that do not fit above `bottom` are cut off.
///
/// # Returns
///
/// The next available row position
pub fn render_home(out: &mut String, row: usize, bottom: usize, home: &HomeView, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;

    out.push_str(&Theme::fg(&theme.colors.text_normal));
    for line in wrap(&home.hero, cols.saturating_sub(8).max(1)) {
        if current_row >= bottom {
            return current_row;
        }
        position_cursor(out, current_row, 1);
        write_centered(out, &line, cols);
        current_row += 1;
    }
    out.push_str(Theme::reset());
    current_row += 1;

    current_row = render_heading(out, current_row, bottom, "Browse by Genre", theme);
    let per_row = (cols.saturating_sub(1) / TILE_WIDTH).max(1);
    for chunk in home.genres.chunks(per_row) {
        if current_row >= bottom {
            return current_row;
        }
        position_cursor(out, current_row, 1);
        out.push(' ');
        for tile in chunk {
            render_tile(out, tile, theme);
        }
        current_row += 1;
    }
    current_row += 1;

    current_row = render_heading(out, current_row, bottom, "Readers' Favourites", theme);
    for item in &home.favourites {
        if current_row >= bottom {
            return current_row;
        }
        render_favourite(out, current_row, item, theme, cols);
        current_row += 1;
    }

    current_row
}

fn render_heading(out: &mut String, row: usize, bottom: usize, text: &str, theme: &Theme) -> usize {
    if row >= bottom {
        return row;
    }
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.accent_fg));
    out.push(' ');
    out.push_str(text);
    out.push_str(Theme::reset());
    row + 1
}

fn render_tile(out: &mut String, tile: &GenreTile, theme: &Theme) {
    if tile.is_selected {
        out.push_str(&Theme::fg(&theme.colors.selection_fg));
        out.push_str(&Theme::bg(&theme.colors.selection_bg));
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    }
    out.push_str("[ ");
    write_padded(out, &format!("{} ({})", tile.label, tile.count), TILE_WIDTH - 5);
    out.push(']');
    out.push_str(Theme::reset());
    out.push(' ');
}

fn render_favourite(out: &mut String, row: usize, item: &DisplayItem, theme: &Theme, cols: usize) {
    position_cursor(out, row, 1);
    let base = if item.is_selected {
        format!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg))
    } else {
        Theme::fg(&theme.colors.star_fg)
    };
    out.push_str(&base);
    out.push(' ');
    write_padded(out, &item.stars, 6);

    if !item.is_selected {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    }
    let title_width = cols.saturating_sub(7) / 2;
    write_padded(out, &item.title, title_width);
    let rest = cols.saturating_sub(7 + title_width);
    let author = truncate(&item.author, rest);
    out.push_str(&author);
    out.push_str(&" ".repeat(rest.saturating_sub(text_width(&author))));
    out.push_str(Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> HomeView {
        HomeView {
            hero: "Welcome to my personal library project.".to_string(),
            genres: vec![
                GenreTile { label: "Fantasy", count: 4, is_selected: true },
                GenreTile { label: "Sci-Fi", count: 3, is_selected: false },
            ],
            favourites: vec![DisplayItem {
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                category: "Sci-Fi",
                stars: "★★★★".to_string(),
                is_selected: false,
                title_highlights: vec![],
                author_highlights: vec![],
            }],
        }
    }

    #[test]
    fn renders_every_section() {
        let mut out = String::new();
        render_home(&mut out, 1, 40, &home(), &Theme::default(), 80);
        assert!(out.contains("Browse by Genre"));
        assert!(out.contains("Fantasy (4)"));
        assert!(out.contains("Readers' Favourites"));
        assert!(out.contains("Frank Herbert"));
    }

    #[test]
    fn stops_at_the_bottom_row() {
        let mut out = String::new();
        let next = render_home(&mut out, 1, 3, &home(), &Theme::default(), 80);
        assert!(next <= 3);
        assert!(!out.contains("Readers' Favourites"));
    }
}
