//! Display/edit mode of an item controller.
//!
//! Each [`PointPresenter`](crate::app::PointPresenter) is in exactly one mode.
//! The list presenter keeps at most one controller in [`Mode::Editing`] by
//! resetting every other controller when one reports a mode change.

/// Whether a row shows its collapsed view or its editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Collapsed row.
    #[default]
    Default,

    /// Expanded editor with a draft copy of the point.
    Editing,
}

impl Mode {
    #[must_use]
    pub const fn is_editing(self) -> bool {
        matches!(self, Self::Editing)
    }
}
