//! Creation form: labelled inputs, inline errors and the submit button.

use crate::ui::helpers::{position_cursor, write_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FormFieldView, FormView};

const LEFT_MARGIN: usize = 3;
const LABEL_WIDTH: usize = 14;

/// Renders the form between `row` and `bottom`.
///
/// Each field takes two rows: the input and its error line, which stays
/// blank while the field is valid.
///
/// ```text
///    Title         ▸ The Left Hand of Darkness
///                    Title is required
/// ```
///
/// # Returns
///
/// The next available row position
pub fn render_form(out: &mut String, row: usize, bottom: usize, form: &FormView, theme: &Theme, cols: usize) -> usize {
    let input_width = cols.saturating_sub(LEFT_MARGIN + LABEL_WIDTH + 4);
    let mut current_row = row;

    for field in &form.fields {
        if current_row >= bottom {
            return current_row;
        }
        render_field(out, current_row, field, input_width, theme);
        current_row += 1;

        if let Some(error) = field.error {
            if current_row < bottom {
                position_cursor(out, current_row, LEFT_MARGIN + LABEL_WIDTH + 3);
                out.push_str(&Theme::fg(&theme.colors.error_fg));
                out.push_str(error);
                out.push_str(Theme::reset());
            }
        }
        current_row += 1;
    }

    if current_row < bottom {
        position_cursor(out, current_row, LEFT_MARGIN + 1);
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&theme.colors.tab_active_fg));
        out.push_str(&Theme::bg(&theme.colors.tab_active_bg));
        out.push_str(&format!(" {} ", form.submit_label));
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str("  (Enter)");
        out.push_str(Theme::reset());
        current_row += 1;
    }

    current_row
}

fn render_field(out: &mut String, row: usize, field: &FormFieldView, input_width: usize, theme: &Theme) {
    position_cursor(out, row, LEFT_MARGIN + 1);

    if field.is_focused {
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&theme.colors.brand_fg));
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    }
    write_padded(out, field.label, LABEL_WIDTH);
    out.push_str(if field.is_focused { "▸ " } else { "  " });
    out.push_str(Theme::reset());

    if field.value.is_empty() {
        out.push_str(Theme::dim());
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        write_padded(out, field.placeholder, input_width);
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        let caret = if field.is_focused { "▏" } else { "" };
        write_padded(out, &format!("{}{caret}", field.value), input_width);
    }
    out.push_str(Theme::reset());
}
