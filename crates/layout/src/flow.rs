//! Main-column flow and overflow reconciliation.
//!
//! Every main-column append runs a two-phase protocol: first the
//! destination page and buffer are computed by pure lookahead, then the
//! placement is pushed exactly once. Nothing is ever popped back out of
//! a buffer, which is what keeps the page-1 snapshot stable.
//!
//! A placement is never split across a page boundary. If its bottom edge
//! would pass the boundary, the whole placement restarts at the top of
//! the next page, offset by the configured page margin. An entry taller
//! than a full page cannot be resolved this way; it is placed unsplit,
//! renders past the boundary, and is reported as an
//! [`LayoutWarning::OversizedEntry`].

use log::{debug, warn};
use vitae_types::{EPSILON, PAGE_HEIGHT, PlacementId, page_bottom, page_top};

use crate::LayoutWarning;
use crate::config::LayoutOptions;
use crate::placement::{Placement, PlacementProps};
use crate::state::{Column, LayoutState};

/// Advance the main-column cursor for a placement of `height` after
/// `margin`, breaking onto a new page when the bottom edge would cross
/// the current page boundary. Returns the resolved top edge.
///
/// An exact fit (bottom edge on the boundary) does not break.
fn advance(state: &mut LayoutState, id: &PlacementId, margin: f32, height: f32, opts: &LayoutOptions) -> f32 {
    let mut top = state.right_height + margin;

    if top + height > page_bottom(state.pages_right) + EPSILON {
        state.pages_right += 1;
        // Page 1 must be reasoned about independently of later, possibly
        // sidebar-less pages: freeze the right buffer the instant the
        // main column first reaches page 2.
        if state.pages_right == 2 && state.page_one_right.is_none() {
            state.page_one_right = Some(state.right.clone());
        }
        top = page_top(state.pages_right) + opts.margin_page;
        debug!(
            "main column break: {} starts page {} at y={:.1}",
            id, state.pages_right, top
        );
    }

    state.right_height = top + height;

    if height > PAGE_HEIGHT + EPSILON {
        warn!(
            "entry {} is {:.1} units tall, exceeding one page ({PAGE_HEIGHT})",
            id, height
        );
        state.warnings.push(LayoutWarning::OversizedEntry {
            id: id.clone(),
            height,
        });
    }

    top
}

/// Append to the main column. The placement always lands in the right
/// buffer, but page counting and the page-1 snapshot still apply.
pub fn append_right(
    state: &mut LayoutState,
    id: impl Into<PlacementId>,
    margin: f32,
    height: f32,
    props: PlacementProps,
    opts: &LayoutOptions,
) {
    let id = id.into();
    let top = advance(state, &id, margin, height, opts);
    state.right.push(Placement { id, top, height, props });
}

/// Append to the main column, re-routing to the full-width block buffer
/// once the main column has reached a page the sidebar does not occupy.
/// Returns the buffer the placement landed in.
pub fn append_reconciled(
    state: &mut LayoutState,
    id: impl Into<PlacementId>,
    margin: f32,
    height: f32,
    props: PlacementProps,
    opts: &LayoutOptions,
) -> Column {
    let id = id.into();
    let top = advance(state, &id, margin, height, opts);

    let destination = if state.pages_right <= state.pages_left {
        Column::Right
    } else {
        Column::Block
    };

    let placement = Placement { id, top, height, props };
    match destination {
        Column::Block => {
            debug!(
                "page {} has no sidebar, routing {} to block buffer",
                state.pages_right, placement.id
            );
            state.block.push(placement);
        }
        _ => state.right.push(placement),
    }
    destination
}

/// Close a reconciled section with a trailing vertical-rule placement in
/// whichever buffer the last entry landed in. The divider spans the
/// occupied fragment of the current page; it overlays existing content
/// and does not advance the column.
pub fn close_section(
    state: &mut LayoutState,
    destination: Column,
    id: impl Into<PlacementId>,
) {
    let top = page_top(state.pages_right);
    let height = PAGE_HEIGHT - (page_bottom(state.pages_right) - state.right_height);
    let divider = Placement::new(id, top, height, PlacementProps::ColumnDivider);
    match destination {
        Column::Block => state.block.push(divider),
        _ => state.right.push(divider),
    }
}
