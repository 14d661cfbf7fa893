//! Side effects requested by the event handler.
//!
//! The handler never talks to Zellij itself; it returns actions and the plugin
//! shim in `main.rs` executes them in order.

use crate::worker::WorkerMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hide the plugin pane.
    CloseFocus,

    /// Send a request to the storage worker.
    PostToWorker(WorkerMessage),
}
