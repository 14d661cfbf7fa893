//! The list element that item rows are mounted into.

use crate::ui::component::{Line, View};

/// Renders nothing itself; rows are its children.
#[derive(Debug, Default)]
pub struct PointListView;

impl View for PointListView {
    type Signal = ();

    fn template(&self) -> Vec<Line> {
        Vec::new()
    }
}
