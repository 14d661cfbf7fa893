//! Frame view model.
//!
//! Computed from [`AppState`](crate::app::AppState) once per Zellij render
//! call and consumed by the renderer. It holds the window of surface lines
//! that fits the pane, already marked for selection, plus the chrome around
//! them.

use crate::ui::component::Line;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Surface lines inside the visible window, top to bottom.
    pub body: Vec<BodyLine>,

    pub footer: FooterInfo,

    /// Shown instead of the body before the trip has loaded.
    pub loading: Option<LoadingState>,
}

/// One painted body row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyLine {
    pub line: Line,

    /// The row belongs to the selected point's element.
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,

    /// Trip file and visible/total point counts.
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Key hints for the current mode.
    pub keybindings: String,

    /// Last storage or worker error, shown in place of the hints.
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingState {
    pub message: String,
    pub subtitle: String,
}
