//! User interface rendering layer with component-based architecture.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI frame
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, wrapping, padding)
//! - [`theme`]: Color schemes and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel};
pub use theme::{Theme, DEFAULT_THEME};
pub use viewmodel::{Body, DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel};
