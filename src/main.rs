//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the Bookstacks library and the Zellij
//! plugin system: it turns key presses into library events, runs the
//! resulting actions through the Zellij API and prints rendered frames.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key` and `PermissionRequestResult` events
//! 3. **Update**: Map keys to events, delegate to `handle_event`
//! 4. **Render**: Print the frame built by the library
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//!
//! In normal mode:
//! - `j`/`Down`, `k`/`Up`: Move
//! - `Enter`: Open the selection
//! - `Esc`: Back to the parent page
//! - `h`, `b`, `a`: Home, shelves, add a book
//! - `[`/`]`: Previous / next genre shelf
//! - `/`: Search (on the shelves)
//! - `q`: Close plugin
//!
//! In search mode:
//! - Characters edit the query
//! - `Enter`: Jump to the results
//! - `/`: Return to the query
//! - `Esc`: Clear search
//!
//! In the add form:
//! - `Tab`/`Down`, `Shift+Tab`/`Up`: Move between fields
//! - `Left`/`Right` or `[`/`]` on Genre: Cycle the genre
//! - `Enter`: Add to collection
//! - `Esc`: Leave the form

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use std::collections::BTreeMap;
#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
use bookstacks::{handle_event, Action, Config, Event, InputMode, SearchFocus};

#[cfg(target_family = "wasm")]
register_plugin!(State);

/// Native builds have no plugin host; the library carries all behavior.
#[cfg(not(target_family = "wasm"))]
fn main() {}

/// Plugin state wrapper.
#[cfg(target_family = "wasm")]
struct State {
    /// Core application state from library layer.
    app: bookstacks::AppState,
}

#[cfg(target_family = "wasm")]
impl Default for State {
    fn default() -> Self {
        Self {
            app: bookstacks::initialize(&Config::default()),
        }
    }
}

#[cfg(target_family = "wasm")]
impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// Requests `ChangeApplicationState` to rename and hide the plugin pane.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        if let Err(e) = bookstacks::observability::init_tracing(&config) {
            eprintln!("bookstacks: tracing disabled: {e}");
        }

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(start_route = %config.start_route, "plugin loading started");
        self.app.shutdown();
        self.app = bookstacks::initialize(&config);

        request_permission(&[PermissionType::ChangeApplicationState]);
        subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events.
    ///
    /// # Returns
    ///
    /// - `true` if the plugin UI should re-render
    /// - `false` if the event was ignored or changed nothing visible
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => {
                let span = tracing::debug_span!("plugin_update_event", event_type = "Key", bare_key = ?key.bare_key);
                let _guard = span.entered();
                match self.map_key_event(key) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                Self::handle_permission_result(&status);
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled successfully");
                for action in actions {
                    Self::execute_action(&action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                true
            }
        }
    }

    /// Prints the frame built by the library's rendering layer.
    fn render(&mut self, rows: usize, cols: usize) {
        print!("{}", bookstacks::ui::render(&self.app, rows, cols));
    }
}

#[cfg(target_family = "wasm")]
impl State {
    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);
        if ctrl && key.bare_key == BareKey::Char('n') {
            return Some(Event::KeyDown);
        }
        if ctrl && key.bare_key == BareKey::Char('p') {
            return Some(Event::KeyUp);
        }

        match self.app.input_mode {
            InputMode::Form => Self::map_form_key(key),
            InputMode::Search(focus) => Self::map_search_key(key, focus),
            InputMode::Normal => Self::map_normal_key(key),
        }
    }

    fn map_normal_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Enter => Event::Select,
            BareKey::Esc => Event::Back,
            BareKey::Char('h') => Event::GoHome,
            BareKey::Char('b') => Event::GoBrowse,
            BareKey::Char('a') => Event::GoAdd,
            BareKey::Char(']') | BareKey::Right => Event::NextCategory,
            BareKey::Char('[') | BareKey::Left => Event::PreviousCategory,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_search_key(key: &KeyWithModifier, focus: SearchFocus) -> Option<Event> {
        Some(match (key.bare_key, focus) {
            (BareKey::Esc, _) => Event::ExitSearch,
            (BareKey::Down, _) => Event::KeyDown,
            (BareKey::Up, _) => Event::KeyUp,
            (BareKey::Enter, SearchFocus::Typing) => Event::FocusResults,
            (BareKey::Enter, SearchFocus::Navigating) => Event::Select,
            (BareKey::Backspace, SearchFocus::Typing) => Event::Backspace,
            (BareKey::Char(c), SearchFocus::Typing) => Event::Char(c),
            (BareKey::Char('/'), SearchFocus::Navigating) => Event::FocusSearchBar,
            (BareKey::Char('j'), SearchFocus::Navigating) => Event::KeyDown,
            (BareKey::Char('k'), SearchFocus::Navigating) => Event::KeyUp,
            _ => return None,
        })
    }

    fn map_form_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PreviousField,
            BareKey::Tab | BareKey::Down => Event::NextField,
            BareKey::Up => Event::PreviousField,
            BareKey::Right => Event::NextCategory,
            BareKey::Left => Event::PreviousCategory,
            BareKey::Enter => Event::Submit,
            BareKey::Esc => Event::Back,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Handles permission request results.
    fn handle_permission_result(status: &PermissionStatus) {
        match status {
            PermissionStatus::Granted => tracing::debug!("permissions granted"),
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - pane title and hiding unavailable");
            }
        }
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::RenamePane { title } => {
                let ids = get_plugin_ids();
                rename_plugin_pane(ids.plugin_id, title);
            }
        }
    }
}
