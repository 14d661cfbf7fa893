//! Terminal user interface.
//!
//! Two halves meet here. The retained half is the [`surface`] element tree
//! with the [`component`] abstraction and the concrete [`views`] mounted by
//! the presenters. The painting half turns the surface into a frame
//! ([`viewmodel`]) and prints it with ANSI colors ([`renderer`],
//! [`components`], [`theme`]).
//!
//! ```text
//! presenters ─▶ Surface ─▶ AppState::compute_viewmodel ─▶ UIViewModel ─▶ render ─▶ ANSI
//! ```

pub mod component;
pub mod components;
pub mod helpers;
pub mod renderer;
pub mod surface;
pub mod theme;
pub mod viewmodel;
pub mod views;

pub use component::{Component, Line, Span, Tone, View};
pub use renderer::render;
pub use surface::{NodeId, RenderPosition, Surface};
pub use theme::Theme;
pub use viewmodel::{BodyLine, FooterInfo, HeaderInfo, LoadingState, UIViewModel};
