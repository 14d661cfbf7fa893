//! Background worker for trip file I/O.
//!
//! Storage runs on the Zellij worker thread so the plugin thread never blocks
//! on the filesystem.
//!
//! - `messages`: Request/response protocol with trace context propagation
//! - `handler`: Message processing against the storage backend

pub mod handler;
pub mod messages;

pub use handler::TripWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
