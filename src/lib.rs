//! Bookstacks: a Zellij plugin for browsing a small book catalog.
//!
//! Bookstacks keeps an in-memory catalog of books and lets readers:
//! - Browse the shelves, optionally narrowed to one genre
//! - Search titles and authors with a live, case-insensitive filter
//! - Open a detail page for any book
//! - Add new books through a validated form

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Routes, modes
//! │  - Event handling                                   │  ← Form validation
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌──────────────────────┐
//! │ UI Layer      │   │ Store (store/)       │
//! │ (ui/)         │   │ - Reducer contract   │
//! │ - Rendering   │   │ - Snapshots          │
//! │ - Theming     │   │ - Observers          │
//! └───────────────┘   └──────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/)                                   │
//! │  - Books, genres, seed catalog, selectors, errors   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to a rotating OTLP file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Routes, input modes, form and event handling
//! - [`domain`]: Books, genres, the seed catalog and selectors
//! - [`store`]: Reducer-driven record store with observers
//! - [`infrastructure`]: Sandbox paths
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/bookstacks.wasm" {
//!         theme "parchment"
//!         start_route "/books/Fantasy"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use bookstacks::{handle_event, initialize, Config, Event, Route};
//!
//! let mut state = initialize(&Config::default());
//! assert_eq!(state.route, Route::Home);
//!
//! handle_event(&mut state, &Event::GoBrowse)?;
//! assert_eq!(state.route.path(), "/books");
//! # Ok::<(), bookstacks::BookstacksError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod store;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, Route, SearchFocus};
pub use domain::{Book, BookId, BookstacksError, Category, Result};
pub use ui::Theme;

use std::collections::BTreeMap;
use tracing_subscriber::EnvFilter;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/bookstacks.wasm" {
///     theme "emerald"
///     theme_file "~/themes/ink.toml"
///     start_route "/books"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Built-in theme name: `emerald` (default) or `parchment`.
    ///
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. `~` expands to the host home.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Page shown when the plugin opens. Default: `/`
    pub start_route: Route,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `theme`, `theme_file`: taken as-is when non-blank
    /// - `trace_level`: kept only if it is a valid filter directive
    /// - `start_route`: parsed as a path; unknown paths open the 404 page
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use bookstacks::{Config, Route};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "parchment".to_string());
    /// map.insert("start_route".to_string(), "/books/Fantasy".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("parchment"));
    /// assert_eq!(config.start_route, Route::Browse { category: Some("Fantasy".to_string()) });
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let start_route = value("start_route").map_or_else(Route::default, |path| {
            let route = Route::parse(&path);
            tracing::debug!(path = %path, route = ?route, "parsed start route");
            route
        });

        Self {
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level").filter(|level| match parse_trace_level(level) {
                Ok(()) => true,
                Err(e) => {
                    tracing::debug!(error = %e, "ignoring trace_level");
                    false
                }
            }),
            start_route,
        }
    }

    /// Resolves the configured theme.
    ///
    /// A theme file wins over a theme name. Anything that fails to load falls
    /// back to the default theme.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Checks that `raw` is a filter directive such as `debug` or
/// `bookstacks=trace,warn`.
///
/// # Errors
///
/// Returns [`BookstacksError::Config`] describing the rejected directive.
///
/// # Example
///
/// ```rust
/// use bookstacks::parse_trace_level;
///
/// assert!(parse_trace_level("debug").is_ok());
/// assert!(parse_trace_level("bookstacks=loud").is_err());
/// ```
pub fn parse_trace_level(raw: &str) -> Result<()> {
    EnvFilter::try_new(raw)
        .map(|_| ())
        .map_err(|e| BookstacksError::Config(format!("invalid trace_level {raw:?}: {e}")))
}

/// Initializes the plugin with configuration.
///
/// Builds the catalog store from the seed books, resolves the theme and opens
/// the configured start route.
///
/// # Example
///
/// ```rust
/// use bookstacks::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.catalog().len(), 18);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing bookstacks plugin");

    let theme = config.load_theme();
    tracing::debug!(theme = %theme.name, start_route = %config.start_route, "configuration resolved");

    AppState::new(store::catalog_store(), theme, config.start_route.clone())
}
