//! Infrastructure layer for filesystem interactions.
//!
//! Inside the Zellij plugin sandbox the host filesystem is mounted under
//! `/host`; everything that turns user-supplied paths into sandbox paths lives
//! here.

pub mod paths;

pub use paths::{data_dir, expand_tilde, trace_file};
