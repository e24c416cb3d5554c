//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point through which keyboard input
//! reaches the application. It mutates [`AppState`] and returns whether the
//! plugin should re-render together with the side effects to run.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `Select`, `Back`, `Navigate`,
//!   `GoHome`, `GoBrowse`, `GoAdd`, `NextCategory`, `PreviousCategory`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`
//! - **Input**: `Char`, `Backspace`
//! - **Form**: `NextField`, `PreviousField`, `Submit`
//! - **Lifecycle**: `CloseFocus`
//!
//! A store change always forces a re-render, whichever event caused it.
//!
//! # Example
//!
//! ```rust
//! use bookstacks::app::{handle_event, AppState, Event, Route};
//! use bookstacks::store::catalog_store;
//! use bookstacks::ui::Theme;
//!
//! let mut state = AppState::new(catalog_store(), Theme::default(), Route::Home);
//! let (render, actions) = handle_event(&mut state, &Event::GoBrowse)?;
//! assert!(render);
//! assert_eq!(actions.len(), 1); // pane rename
//! # Ok::<(), bookstacks::BookstacksError>(())
//! ```

use super::actions::Action;
use super::form::FormField;
use super::modes::{InputMode, SearchFocus};
use super::route::Route;
use super::state::AppState;
use crate::domain::error::Result;

/// Events produced from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down (or to the next form field).
    KeyDown,
    /// Moves the cursor up (or to the previous form field).
    KeyUp,
    /// Opens the entry under the cursor.
    Select,
    /// Leaves the current page for its parent, or leaves search.
    Back,
    /// Jumps to an explicit route.
    Navigate(Route),
    GoHome,
    GoBrowse,
    GoAdd,
    /// Next genre shelf, or next genre in the form's category field.
    NextCategory,
    /// Previous genre shelf, or previous genre in the form's category field.
    PreviousCategory,
    /// Enters search mode with an empty query.
    SearchMode,
    /// Returns from result navigation to query editing.
    FocusSearchBar,
    /// Moves from query editing to result navigation.
    FocusResults,
    /// Leaves search mode and clears the query.
    ExitSearch,
    /// Types a character into the query or the focused form field.
    Char(char),
    /// Deletes the last character of the query or the focused form field.
    Backspace,
    NextField,
    PreviousField,
    /// Validates the form and adds the book.
    Submit,
    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// `(should_render, actions)`. `should_render` is also `true` whenever the
/// catalog changed while handling the event.
///
/// # Errors
///
/// Returns [`BookstacksError::Store`](crate::BookstacksError::Store) if a
/// valid form submission was refused by the store.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, route = %state.route).entered();

    let (render, actions) = dispatch_event(state, event)?;
    let catalog_changed = state.take_refresh();
    if catalog_changed {
        tracing::debug!("catalog changed, forcing render");
    }

    Ok((render || catalog_changed, actions))
}

#[allow(clippy::too_many_lines)]
fn dispatch_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    match event {
        Event::KeyDown => {
            if state.input_mode == InputMode::Form {
                state.focused_field = state.focused_field.next();
            } else {
                state.move_selection_down();
            }
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if state.input_mode == InputMode::Form {
                state.focused_field = state.focused_field.previous();
            } else {
                state.move_selection_up();
            }
            Ok((true, vec![]))
        }
        Event::Select => {
            if state.input_mode == InputMode::Form {
                return submit(state);
            }

            let Some(target) = state.selected_target() else {
                tracing::debug!("nothing selected");
                if matches!(state.input_mode, InputMode::Search(_)) {
                    exit_search(state);
                    return Ok((true, vec![]));
                }
                return Ok((false, vec![]));
            };

            tracing::debug!(target = %target, "entry selected");
            Ok(go(state, target))
        }
        Event::Back => {
            if matches!(state.input_mode, InputMode::Search(_)) {
                exit_search(state);
                return Ok((true, vec![]));
            }
            let parent = state.route.parent();
            Ok(go(state, parent))
        }
        Event::Navigate(route) => Ok(go(state, route.clone())),
        Event::GoHome => Ok(go(state, Route::Home)),
        Event::GoBrowse => Ok(go(state, Route::Browse { category: None })),
        Event::GoAdd => Ok(go(state, Route::Add)),
        Event::NextCategory | Event::PreviousCategory => {
            let forward = *event == Event::NextCategory;

            if state.input_mode == InputMode::Form {
                if state.focused_field != FormField::Category {
                    return Ok((false, vec![]));
                }
                state.edit_field(FormField::Category, |_| {});
                state.form.cycle_category(forward);
                return Ok((true, vec![]));
            }

            match state.adjacent_shelf(forward) {
                Some(shelf) => {
                    let query = std::mem::take(&mut state.search_query);
                    let mode = state.input_mode;
                    let result = go(state, shelf);
                    state.search_query = query;
                    state.input_mode = mode;
                    state.clamp_selection();
                    Ok(result)
                }
                None => Ok((false, vec![])),
            }
        }
        Event::SearchMode => {
            if !matches!(state.route, Route::Browse { .. }) {
                return Ok((false, vec![]));
            }
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.search_query.clear();
            state.clamp_selection();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
            } else {
                state.input_mode = InputMode::Search(SearchFocus::Navigating);
            }
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            exit_search(state);
            Ok((true, vec![]))
        }
        Event::Char(c) => match state.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                state.search_query.push(*c);
                tracing::trace!(query = %state.search_query, char = %c, "search query updated");
                state.selected_index = 0;
                Ok((true, vec![]))
            }
            InputMode::Form => {
                let field = state.focused_field;
                if field == FormField::Category && matches!(c, '[' | ']') {
                    state.edit_field(field, |_| {});
                    state.form.cycle_category(*c == ']');
                } else {
                    state.edit_field(field, |value| value.push(*c));
                }
                Ok((true, vec![]))
            }
            InputMode::Normal | InputMode::Search(SearchFocus::Navigating) => Ok((false, vec![])),
        },
        Event::Backspace => match state.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                state.search_query.pop();
                state.clamp_selection();
                Ok((true, vec![]))
            }
            InputMode::Form => {
                let field = state.focused_field;
                state.edit_field(field, |value| {
                    value.pop();
                });
                Ok((true, vec![]))
            }
            InputMode::Normal | InputMode::Search(SearchFocus::Navigating) => Ok((false, vec![])),
        },
        Event::NextField => {
            if state.input_mode != InputMode::Form {
                return Ok((false, vec![]));
            }
            state.focused_field = state.focused_field.next();
            Ok((true, vec![]))
        }
        Event::PreviousField => {
            if state.input_mode != InputMode::Form {
                return Ok((false, vec![]));
            }
            state.focused_field = state.focused_field.previous();
            Ok((true, vec![]))
        }
        Event::Submit => {
            if state.input_mode != InputMode::Form {
                return Ok((false, vec![]));
            }
            submit(state)
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

/// Navigates and emits the pane rename that goes with a route change.
fn go(state: &mut AppState, route: Route) -> (bool, Vec<Action>) {
    if state.navigate(route) {
        (true, vec![Action::RenamePane { title: state.pane_title() }])
    } else {
        (false, vec![])
    }
}

fn exit_search(state: &mut AppState) {
    tracing::debug!(query = %state.search_query, "exiting search mode");
    state.input_mode = InputMode::Normal;
    state.search_query.clear();
    state.clamp_selection();
}

fn submit(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    if state.submit_form()? {
        Ok((true, vec![Action::RenamePane { title: state.pane_title() }]))
    } else {
        Ok((true, vec![]))
    }
}
