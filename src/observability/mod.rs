//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK tracer → FileSpanExporter → JSON lines
//! ```
//!
//! - Output: `~/.local/share/zellij/bookstacks/bookstacks-otlp.json`
//! - One OTLP/JSON document per line
//! - Rotation at 5 MB, keeping a single `.1` backup
//! - Level from the `trace_level` plugin option, default `info`
//!
//! # Modules
//!
//! - [`rotation`]: size-rotated line file
//! - `otlp`: span encoding (internal)
//! - `exporter`: `SpanExporter` implementation (internal)

mod exporter;
mod init;
mod otlp;
pub mod rotation;

pub use init::{init_tracing, DEFAULT_TRACE_LEVEL};
