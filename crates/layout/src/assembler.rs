//! Partitions the final layout state into renderable pages.

use serde::Serialize;
use vitae_types::page_of;

use crate::placement::Placement;
use crate::scale::Scale;
use crate::state::LayoutState;

/// One renderable page: sidebar, main column and full-width placements
/// whose top edge falls on it. Geometry is already scaled.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// 1-based page number.
    pub number: usize,
    pub left: Vec<Placement>,
    pub right: Vec<Placement>,
    pub block: Vec<Placement>,
}

fn take_page(buffer: &[Placement], number: usize, scale: Scale) -> Vec<Placement> {
    buffer
        .iter()
        .filter(|p| page_of(p.top) == number)
        .map(|p| p.scaled(scale))
        .collect()
}

/// Produce the ordered page sequence for a finished layout state.
///
/// Page 1's main-column content comes from the frozen snapshot when one
/// exists; later pages read the live right buffer. An empty document
/// still yields exactly one page with three empty lists.
pub fn assemble(state: &LayoutState, scale: Scale) -> Vec<Page> {
    let count = state.pages_left.max(state.pages_right).max(1);

    (1..=count)
        .map(|number| {
            let right_src: &[Placement] = if number == 1 {
                state.page_one_right.as_deref().unwrap_or(&state.right)
            } else {
                &state.right
            };
            Page {
                number,
                left: take_page(&state.left, number, scale),
                right: take_page(right_src, number, scale),
                block: take_page(&state.block, number, scale),
            }
        })
        .collect()
}
