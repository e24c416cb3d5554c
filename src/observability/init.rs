//! Tracing subscriber setup.

use super::exporter;
use crate::domain::Result;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when the configuration names none.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global tracing subscriber.
///
/// Spans pass an [`EnvFilter`] built from `config.trace_level` (default
/// `info`) and are exported through OpenTelemetry into
/// `~/.local/share/zellij/bookstacks/bookstacks-otlp.json`.
///
/// Calling this more than once keeps the first subscriber.
///
/// # Errors
///
/// Returns [`BookstacksError::Io`](crate::BookstacksError::Io) if the data
/// directory cannot be created. Nothing is installed in that case.
///
/// # Example
///
/// ```rust
/// use bookstacks::observability::init_tracing;
/// use bookstacks::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// if init_tracing(&config).is_err() {
///     // the plugin keeps running without traces
/// }
/// ```
pub fn init_tracing(config: &Config) -> Result<()> {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);

    std::fs::create_dir_all(paths::data_dir())?;

    let resource = Resource::new(vec![KeyValue::new("service.name", "Bookstacks")]);
    let provider = exporter::create_tracer_provider(paths::trace_file(), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer("Bookstacks"));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
    Ok(())
}
