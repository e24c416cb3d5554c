//! Shared rendering utilities.
//!
//! Components write ANSI output into a frame `String` instead of printing, so
//! a whole frame can be built, inspected and emitted at once. All width math
//! is in characters, not bytes.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row` and `col`.
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Number of terminal cells `text` occupies, counting one per character.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `max` characters, ending in `…` when cut.
///
/// ```rust
/// use bookstacks::ui::helpers::truncate;
///
/// assert_eq!(truncate("To Kill a Mockingbird", 10), "To Kill a…");
/// assert_eq!(truncate("Dune", 10), "Dune");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text_width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

/// Writes `text` padded with spaces to exactly `width` cells, truncating if
/// it is longer.
pub fn write_padded(out: &mut String, text: &str, width: usize) {
    let shown = truncate(text, width);
    let used = text_width(&shown);
    out.push_str(&shown);
    out.push_str(&" ".repeat(width.saturating_sub(used)));
}

/// Writes `text` centered within `cols` cells and fills the rest of the line.
pub fn write_centered(out: &mut String, text: &str, cols: usize) {
    let shown = truncate(text, cols);
    let len = text_width(&shown);
    let padding = cols.saturating_sub(len) / 2;
    out.push_str(&" ".repeat(padding));
    out.push_str(&shown);
    out.push_str(&" ".repeat(cols.saturating_sub(padding + len)));
}

/// Greedy word wrap to lines of at most `width` characters.
///
/// Words longer than `width` are truncated.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let word = truncate(word, width);
        let needed = if line.is_empty() {
            text_width(&word)
        } else {
            text_width(&line) + 1 + text_width(&word)
        };

        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&word);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Writes `text` with match highlights over the given character ranges.
///
/// `ranges` are `(start, end)` character indices, end exclusive, sorted and
/// non-overlapping. Selected rows skip highlighting so the selection colors
/// stay intact. After each highlight the row's base colors are restored.
pub fn render_highlighted_text(out: &mut String, text: &str, ranges: &[(usize, usize)], theme: &Theme, is_selected: bool) {
    if ranges.is_empty() || is_selected {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current || start >= end {
            continue;
        }

        out.extend(&chars[current..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(&theme.colors.text_normal));

        current = end;
    }

    out.extend(&chars[current..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        assert_eq!(wrap("read descriptions, or help", 12), vec!["read", "description…", "or help"]);
        assert_eq!(wrap("a b c", 3), vec!["a b", "c"]);
    }

    #[test]
    fn highlight_keeps_all_characters() {
        let theme = Theme::default();
        let mut out = String::new();
        render_highlighted_text(&mut out, "Dune", &[(0, 2)], &theme, false);
        assert!(out.starts_with(&Theme::fg(&theme.colors.match_highlight_fg)));
        assert!(out.ends_with("ne"));
        assert!(out.contains("Du"));
    }

    #[test]
    fn centered_text_fills_the_line() {
        let mut out = String::new();
        write_centered(&mut out, "404", 9);
        assert_eq!(out, "   404   ");
    }
}
