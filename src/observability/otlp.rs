//! OTLP/JSON encoding of finished spans.
//!
//! Each exported batch becomes one `ExportTraceServiceRequest` document with a
//! single resource and a single `Bookstacks` scope. Ids are lowercase hex,
//! timestamps are decimal nanosecond strings and 64-bit integers are strings,
//! as the OTLP JSON mapping requires.

use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// Instrumentation scope name written into every batch.
pub const SCOPE_NAME: &str = "Bookstacks";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    resource_spans: Vec<ResourceSpans>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResourceSpans {
    resource: ResourceJson,
    scope_spans: Vec<ScopeSpans>,
}

#[derive(Debug, Serialize)]
struct ResourceJson {
    attributes: Vec<Attribute>,
}

#[derive(Debug, Serialize)]
struct ScopeSpans {
    scope: Scope,
    spans: Vec<SpanJson>,
}

#[derive(Debug, Serialize)]
struct Scope {
    name: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpanJson {
    trace_id: String,
    span_id: String,
    parent_span_id: String,
    name: String,
    kind: u8,
    start_time_unix_nano: String,
    end_time_unix_nano: String,
    attributes: Vec<Attribute>,
    events: Vec<EventJson>,
    links: Vec<LinkJson>,
    status: StatusJson,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EventJson {
    time_unix_nano: String,
    name: String,
    attributes: Vec<Attribute>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LinkJson {
    trace_id: String,
    span_id: String,
    attributes: Vec<Attribute>,
}

#[derive(Debug, Serialize)]
struct StatusJson {
    code: u8,
    message: String,
}

#[derive(Debug, Serialize)]
struct Attribute {
    key: String,
    value: AnyValue,
}

/// OTLP `AnyValue`; serializes as e.g. `{"stringValue": "..."}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
enum AnyValue {
    BoolValue(bool),
    IntValue(String),
    DoubleValue(f64),
    StringValue(String),
}

impl ExportRequest {
    /// Encodes a batch of spans under the given resource.
    #[must_use]
    pub fn from_batch(resource: &Resource, batch: &[SpanData]) -> Self {
        let attributes = resource
            .iter()
            .map(|(key, value)| Attribute {
                key: key.to_string(),
                value: any_value(value),
            })
            .collect();

        Self {
            resource_spans: vec![ResourceSpans {
                resource: ResourceJson { attributes },
                scope_spans: vec![ScopeSpans {
                    scope: Scope { name: SCOPE_NAME },
                    spans: batch.iter().map(span_json).collect(),
                }],
            }],
        }
    }
}

fn span_json(span: &SpanData) -> SpanJson {
    let parent_span_id = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };

    let (code, message) = match &span.status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    };

    SpanJson {
        trace_id: format!("{:032x}", span.span_context.trace_id()),
        span_id: format!("{:016x}", span.span_context.span_id()),
        parent_span_id,
        name: span.name.to_string(),
        kind: kind_code(&span.span_kind),
        start_time_unix_nano: unix_nanos(span.start_time),
        end_time_unix_nano: unix_nanos(span.end_time),
        attributes: attributes(&span.attributes),
        events: span.events.iter().map(event_json).collect(),
        links: span.links.iter().map(link_json).collect(),
        status: StatusJson { code, message },
    }
}

fn event_json(event: &Event) -> EventJson {
    EventJson {
        time_unix_nano: unix_nanos(event.timestamp),
        name: event.name.to_string(),
        attributes: attributes(&event.attributes),
    }
}

fn link_json(link: &Link) -> LinkJson {
    LinkJson {
        trace_id: format!("{:032x}", link.span_context.trace_id()),
        span_id: format!("{:016x}", link.span_context.span_id()),
        attributes: attributes(&link.attributes),
    }
}

fn attributes(pairs: &[KeyValue]) -> Vec<Attribute> {
    pairs
        .iter()
        .map(|kv| Attribute {
            key: kv.key.to_string(),
            value: any_value(&kv.value),
        })
        .collect()
}

fn any_value(value: &Value) -> AnyValue {
    match value {
        Value::Bool(b) => AnyValue::BoolValue(*b),
        Value::I64(i) => AnyValue::IntValue(i.to_string()),
        Value::F64(f) => AnyValue::DoubleValue(*f),
        Value::String(s) => AnyValue::StringValue(s.to_string()),
        // Arrays are flattened to their debug form.
        Value::Array(_) => AnyValue::StringValue(format!("{value:?}")),
    }
}

const fn kind_code(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_value_uses_otlp_keys() {
        let json = serde_json::to_value(any_value(&Value::I64(7))).unwrap();
        assert_eq!(json, serde_json::json!({ "intValue": "7" }));

        let json = serde_json::to_value(any_value(&Value::from("x"))).unwrap();
        assert_eq!(json, serde_json::json!({ "stringValue": "x" }));
    }

    #[test]
    fn empty_batch_still_names_the_scope() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "Bookstacks")]);
        let json = serde_json::to_value(ExportRequest::from_batch(&resource, &[])).unwrap();

        assert_eq!(json["resourceSpans"][0]["scopeSpans"][0]["scope"]["name"], "Bookstacks");
        assert!(json["resourceSpans"][0]["scopeSpans"][0]["spans"].as_array().unwrap().is_empty());
    }
}
