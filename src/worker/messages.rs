//! Worker thread message types.
//!
//! Requests travel from the plugin thread to the worker as JSON; responses come
//! back the same way. Every request carries an optional [`TraceContext`] so
//! worker spans join the trace of the plugin span that sent them.

use crate::domain::{Point, PointId};
use crate::storage::TripData;
use serde::{Deserialize, Serialize};

/// Trace and parent span ids of the sending span, hex encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    pub trace_id: String,
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the OpenTelemetry context of the current tracing span.
    ///
    /// Returns `None` when no valid span context is active, e.g. when tracing
    /// has not been initialized.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();
        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Generates `WorkerMessage` constructors that attach the current trace context.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_trip(LoadTrip { path: String }),
    save_point(SavePoint { path: String, point: Point }),
}

/// Requests from the plugin thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Read the trip file at `path`.
    LoadTrip {
        path: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Persist a replaced point into the trip file at `path`.
    SavePoint {
        path: String,
        point: Point,
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadTrip { trace_context, .. } | Self::SavePoint { trace_context, .. } => {
                trace_context.as_ref()
            }
        }
    }

    /// Variant name for span fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::LoadTrip { .. } => "load_trip",
            Self::SavePoint { .. } => "save_point",
        }
    }
}

/// Responses from the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The trip file was read.
    TripLoaded { trip: TripData },

    /// A `SavePoint` request completed. `stored` is `false` when the file
    /// holds no point with that id.
    PointSaved { id: PointId, stored: bool },

    /// A request failed.
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_leave_trace_context_empty_without_tracing() {
        let message = WorkerMessage::load_trip("/tmp/trip.json".to_string());
        assert_eq!(message.trace_context(), None);
        assert_eq!(message.kind(), "load_trip");
    }

    #[test]
    fn missing_trace_context_is_not_serialized() {
        let message = WorkerMessage::load_trip("/tmp/trip.json".to_string());
        let json = serde_json::to_string(&message).unwrap();
        assert_eq!(json, r#"{"LoadTrip":{"path":"/tmp/trip.json"}}"#);

        let parsed: WorkerMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, message);
    }
}
