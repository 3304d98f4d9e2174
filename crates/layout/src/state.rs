//! The running layout accumulator.
//!
//! One [`LayoutState`] exists per render. Builders take it by value and
//! return the extended value, so two builder invocations can never alias
//! the same accumulator, and a state can never leak across renders.

use vitae_types::{PlacementId, pages_spanned};

use crate::LayoutWarning;
use crate::placement::{Placement, PlacementProps};

/// Which buffer a placement landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Left,
    Right,
    /// Full-width buffer for pages the left column does not reach.
    Block,
}

/// Cumulative heights, page counts and the three placement buffers.
#[derive(Debug, Clone)]
pub struct LayoutState {
    /// Cumulative vertical offset consumed by the sidebar, in logical units.
    pub left_height: f32,
    /// Cumulative vertical offset consumed by the main column.
    pub right_height: f32,
    /// Pages spanned so far by the sidebar.
    pub pages_left: usize,
    /// Pages spanned so far by the main column.
    pub pages_right: usize,
    pub left: Vec<Placement>,
    pub right: Vec<Placement>,
    pub block: Vec<Placement>,
    /// The right buffer as it stood immediately before the main column
    /// first crossed onto page 2. `None` until that crossing happens.
    pub page_one_right: Option<Vec<Placement>>,
    /// Non-fatal diagnostics collected during layout.
    pub warnings: Vec<LayoutWarning>,
}

impl LayoutState {
    pub fn new() -> Self {
        Self {
            left_height: 0.0,
            right_height: 0.0,
            pages_left: 1,
            pages_right: 1,
            left: Vec::new(),
            right: Vec::new(),
            block: Vec::new(),
            page_one_right: None,
            warnings: Vec::new(),
        }
    }

    /// Append to the sidebar. Left-column builders never page-break; the
    /// placement goes exactly `margin` below the current column bottom.
    pub fn push_left(
        &mut self,
        id: impl Into<PlacementId>,
        margin: f32,
        height: f32,
        props: PlacementProps,
    ) {
        let top = self.left_height + margin;
        self.left_height = top + height;
        self.pages_left = pages_spanned(self.left_height).max(self.pages_left);
        self.left.push(Placement::new(id, top, height, props));
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty() && self.block.is_empty()
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}
