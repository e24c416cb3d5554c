//! File-backed OpenTelemetry span exporter.

use super::otlp::ExportRequest;
use super::rotation::RotatingFile;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

/// Writes each exported batch as one OTLP/JSON line.
#[derive(Debug)]
struct FileSpanExporter {
    file: RotatingFile,
    resource: Resource,
    is_shutdown: bool,
}

impl FileSpanExporter {
    fn export_batch(&mut self, batch: &[SpanData]) -> ExportResult {
        if self.is_shutdown {
            return Err(TraceError::from("exporter is shut down"));
        }

        let request = ExportRequest::from_batch(&self.resource, batch);
        let line = serde_json::to_string(&request).map_err(|e| TraceError::from(e.to_string()))?;
        self.file
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.export_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

/// Builds a tracer provider whose spans end up in `file_path`.
///
/// Spans are exported one at a time as they close; the plugin runs on a
/// single thread and has no runtime for a batch processor.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter {
        file: RotatingFile::new(file_path),
        resource: resource.clone(),
        is_shutdown: false,
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
