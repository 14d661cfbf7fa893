//! Worker-side message processing.
//!
//! [`TripWorker`] opens the trip file lazily on the first request and keeps it
//! open for later requests against the same path. A request for another path
//! reopens storage there.

use crate::domain::error::{Result, TripboardError};
use crate::domain::Point;
use crate::storage::{JsonStorage, TripStorage};
use crate::worker::{WorkerMessage, WorkerResponse};
use std::path::PathBuf;

/// Storage state of the worker thread.
#[derive(Default)]
pub struct TripWorker {
    storage: Option<(PathBuf, Box<dyn TripStorage>)>,
}

impl TripWorker {
    /// Returns the storage for `path`, opening it when needed.
    fn storage_for(&mut self, path: &str) -> Result<&mut Box<dyn TripStorage>> {
        let path = PathBuf::from(path);
        let reopen = self
            .storage
            .as_ref()
            .map_or(true, |(open_path, _)| *open_path != path);

        if reopen {
            tracing::debug!(path = ?path, "opening trip storage");
            let storage: Box<dyn TripStorage> = Box::new(JsonStorage::new(path.clone())?);
            self.storage = Some((path, storage));
        }

        self.storage
            .as_mut()
            .map(|(_, storage)| storage)
            .ok_or_else(|| TripboardError::Worker("storage not initialized".to_string()))
    }

    /// Turns a storage result into a response, logging either outcome.
    fn handle_storage_result<T, F>(operation: &str, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "storage operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(operation = operation, error = %e, "storage operation failed");
                WorkerResponse::Error {
                    message: format!("{operation}: {e}"),
                }
            }
        }
    }

    fn handle_load_trip(&mut self, path: &str) -> WorkerResponse {
        Self::handle_storage_result(
            "load trip",
            self.storage_for(path).and_then(|storage| storage.load_trip()),
            |trip| {
                tracing::info!(points = trip.points.len(), "trip loaded");
                WorkerResponse::TripLoaded { trip }
            },
        )
    }

    fn handle_save_point(&mut self, path: &str, point: &Point) -> WorkerResponse {
        Self::handle_storage_result(
            "save point",
            self.storage_for(path).and_then(|storage| storage.replace_point(point)),
            |stored| WorkerResponse::PointSaved {
                id: point.id.clone(),
                stored,
            },
        )
    }

    /// Links worker spans to the plugin span recorded in `message`.
    ///
    /// The returned guard must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(opentelemetry::Context::current().with_remote_span_context(span_context).attach())
    }

    /// Processes one request.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _span = tracing::debug_span!("worker_handle_message", message_type = message.kind()).entered();

        match message {
            WorkerMessage::LoadTrip { path, .. } => self.handle_load_trip(&path),
            WorkerMessage::SavePoint { path, point, .. } => self.handle_save_point(&path, &point),
        }
    }

    /// Processes a JSON request and returns the JSON response.
    ///
    /// Returns `None` when the payload is not a valid request or the response
    /// cannot be serialized; both are logged.
    pub fn handle_payload(&mut self, payload: &str) -> Option<String> {
        let message: WorkerMessage = match serde_json::from_str(payload) {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker message");
                return None;
            }
        };

        let response = self.handle_message(message);
        serde_json::to_string(&response)
            .map_err(|e| tracing::warn!(error = %e, "failed to serialize worker response"))
            .ok()
    }
}
