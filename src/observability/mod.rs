//! OpenTelemetry tracing exported to local JSON-lines files.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → JsonLinesExporter → RotatingFile
//! ```
//!
//! Trace files live in `~/.local/share/zellij/tripboard/`, one for the plugin
//! and one for the storage worker. Each rotates at 10 MB and keeps three
//! backups. The level comes from the `trace_level` plugin option (default
//! `info`); the worker reads `RUST_LOG`.
//!
//! Spans emitted by the worker carry the plugin's trace id, so a save can be
//! followed across both files.

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use file_writer::RotatingFile;
pub use init::{init_tracing, init_worker_tracing, DEFAULT_TRACE_LEVEL};
