//! Application layer: state, events, actions, and the presenters.
//!
//! ```text
//! Zellij event ─▶ Event ─▶ handle_event ─▶ ListPresenter / PointPresenter ─▶ Surface
//!                                 │
//!                                 └──▶ Action ─▶ main.rs (worker IPC, hide pane)
//!                  ▲
//!                  └──────────── WorkerResponse ◀── storage worker
//! ```
//!
//! - [`state`]: [`AppState`], owner of the surface and the list presenter
//! - [`handler`]: event processing
//! - [`actions`]: side effects for the plugin shim
//! - [`list_presenter`]: filter/sort derivation and list rendering
//! - [`point_presenter`]: one row's display/edit lifecycle
//! - [`modes`]: display/edit mode of a row

pub mod actions;
pub mod handler;
pub mod list_presenter;
pub mod modes;
pub mod point_presenter;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use list_presenter::ListPresenter;
pub use modes::Mode;
pub use point_presenter::{ItemInput, ItemSignal, PointPresenter};
pub use state::AppState;
