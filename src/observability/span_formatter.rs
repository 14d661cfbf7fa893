//! One-line JSON span records.
//!
//! Every finished span becomes a single JSON object on its own line, which
//! keeps the trace file greppable and easy to feed to `jq`:
//!
//! ```json
//! {"service":"Tripboard","trace":"…","span":"…","parent":"…","name":"render_list","start_ns":1700000000000000000,"duration_us":412,"status":"ok","fields":{"points":4},"events":[]}
//! ```

use opentelemetry::trace::{SpanId, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{Map, Value as JsonValue};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub struct SpanFormatter {
    service: String,
}

impl SpanFormatter {
    /// Takes the service name from the resource, or `unknown_service`.
    pub fn new(resource: &Resource) -> Self {
        let service = resource
            .iter()
            .find(|(key, _)| key.as_str() == "service.name")
            .map_or_else(|| "unknown_service".to_string(), |(_, value)| value.as_str().into_owned());
        Self { service }
    }

    /// One record per span, in batch order.
    pub fn format_batch(&self, batch: &[SpanData]) -> Vec<JsonValue> {
        batch.iter().map(|span| self.format_span(span)).collect()
    }

    fn format_span(&self, span: &SpanData) -> JsonValue {
        let parent = if span.parent_span_id == SpanId::INVALID {
            JsonValue::Null
        } else {
            JsonValue::String(format!("{:016x}", span.parent_span_id))
        };

        let duration = span
            .end_time
            .duration_since(span.start_time)
            .unwrap_or(Duration::ZERO);

        let events: Vec<JsonValue> = span
            .events
            .iter()
            .map(|event| {
                serde_json::json!({
                    "name": event.name,
                    "at_ns": unix_nanos(event.timestamp),
                    "fields": fields(&event.attributes),
                })
            })
            .collect();

        serde_json::json!({
            "service": self.service,
            "trace": format!("{:032x}", span.span_context.trace_id()),
            "span": format!("{:016x}", span.span_context.span_id()),
            "parent": parent,
            "name": span.name,
            "start_ns": unix_nanos(span.start_time),
            "duration_us": u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
            "status": status_text(&span.status),
            "fields": fields(&span.attributes),
            "events": events,
        })
    }
}

fn unix_nanos(time: SystemTime) -> u64 {
    let nanos = time.duration_since(UNIX_EPOCH).unwrap_or(Duration::ZERO).as_nanos();
    u64::try_from(nanos).unwrap_or(u64::MAX)
}

fn status_text(status: &Status) -> String {
    match status {
        Status::Unset => "unset".to_string(),
        Status::Ok => "ok".to_string(),
        Status::Error { description } => format!("error: {description}"),
    }
}

fn fields(attributes: &[KeyValue]) -> JsonValue {
    let map: Map<String, JsonValue> = attributes
        .iter()
        .map(|kv| (kv.key.to_string(), json_value(&kv.value)))
        .collect();
    JsonValue::Object(map)
}

/// Native JSON for scalar attributes; arrays fall back to their display text.
fn json_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::I64(i) => JsonValue::from(*i),
        Value::F64(f) => serde_json::Number::from_f64(*f).map_or(JsonValue::Null, JsonValue::Number),
        Value::String(s) => JsonValue::String(s.to_string()),
        Value::Array(_) => JsonValue::String(value.to_string()),
    }
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter").field("service", &self.service).finish()
    }
}
