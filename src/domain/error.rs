//! Error types for the Bookstacks plugin.
//!
//! [`BookstacksError`] covers the infrastructure failures the plugin can run
//! into (theme files, trace output, configuration). Expected user-facing
//! outcomes such as form validation failures or a lookup miss are not errors
//! and have their own types ([`FormErrors`](crate::app::form::FormErrors),
//! [`Lookup`](crate::domain::selectors::Lookup)).

use thiserror::Error;

/// The main error type for Bookstacks operations.
///
/// # Examples
///
/// ```
/// use bookstacks::BookstacksError;
///
/// let err = bookstacks::parse_trace_level("bookstacks=loud").unwrap_err();
/// assert!(matches!(err, BookstacksError::Config(_)));
/// assert!(err.to_string().starts_with("Configuration error"));
/// ```
#[derive(Debug, Error)]
pub enum BookstacksError {
    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps `std::io::Error` via `#[from]`, mostly from the trace writer.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The record store refused an operation.
    ///
    /// Raised when a new record would reuse an identifier that is already in
    /// the current snapshot.
    #[error("Store error: {0}")]
    Store(String),
}

/// A specialized `Result` type for Bookstacks operations.
pub type Result<T> = std::result::Result<T, BookstacksError>;
