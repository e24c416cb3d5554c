//! Path utilities for the Zellij sandbox.

use std::path::PathBuf;

/// Name of the OTLP trace file inside [`data_dir`].
pub const TRACE_FILE_NAME: &str = "bookstacks-otlp.json";

/// Returns the directory Bookstacks writes traces to.
///
/// `/host` is the host directory Zellij exposes to plugins, usually the
/// user's home, so this resolves to `~/.local/share/zellij/bookstacks`.
///
/// # Examples
///
/// ```
/// use bookstacks::infrastructure::data_dir;
///
/// assert_eq!(data_dir().to_str(), Some("/host/.local/share/zellij/bookstacks"));
/// ```
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("bookstacks")
}

/// Path of the OTLP trace file.
#[must_use]
pub fn trace_file() -> PathBuf {
    data_dir().join(TRACE_FILE_NAME)
}

/// Expands tilde paths to use the `/host` prefix for the Zellij sandbox.
///
/// # Examples
///
/// ```
/// use bookstacks::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/ink.toml"), "/host/themes/ink.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}
