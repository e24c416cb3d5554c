//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! The result is one ANSI frame as a `String`; the plugin prints it.
//!
//! # Example
//!
//! ```rust
//! use bookstacks::app::{AppState, Route};
//! use bookstacks::store::catalog_store;
//! use bookstacks::ui::{render, Theme};
//!
//! let state = AppState::new(catalog_store(), Theme::default(), Route::Home);
//! let frame = render(&state, 30, 100);
//! assert!(frame.contains("Sushh.lib"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI into a frame.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
///
/// # Output
///
/// ANSI-styled text with absolute cursor positioning. Does not clear the
/// screen.
#[must_use]
pub fn render(state: &AppState, rows: usize, cols: usize) -> String {
    let _span = tracing::trace_span!("render", rows, cols).entered();
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols)
}

/// Renders a pre-computed view model.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut out = String::new();
    components::render_page(&mut out, vm, theme, rows, cols);
    out
}
