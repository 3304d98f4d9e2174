//! Post-layout invariant pass.
//!
//! Runs read-only over the finished state and turns anything a renderer
//! would silently clip or overlap into structured warnings for the
//! caller. Never panics, never mutates.

use vitae_types::{EPSILON, PAGE_HEIGHT, page_bottom, page_of};

use crate::LayoutWarning;
use crate::kind::PlacementKind;
use crate::placement::Placement;
use crate::state::LayoutState;

fn straddles(buffer: &[Placement], warnings: &mut Vec<LayoutWarning>) {
    for p in buffer {
        if p.kind() == PlacementKind::ColumnDivider {
            continue;
        }
        // Oversized entries are already reported during flow; only flag
        // placements that could have fit on one page.
        if p.height > PAGE_HEIGHT + EPSILON {
            continue;
        }
        let page = page_of(p.top);
        if p.bottom() > page_bottom(page) + EPSILON {
            warnings.push(LayoutWarning::BoundaryStraddle {
                id: p.id.clone(),
                page,
            });
        }
    }
}

/// Check the finished state against the layout invariants and return the
/// violations as warnings.
pub fn verify(state: &LayoutState) -> Vec<LayoutWarning> {
    let mut warnings = Vec::new();

    straddles(&state.left, &mut warnings);
    straddles(&state.right, &mut warnings);
    straddles(&state.block, &mut warnings);

    // The two-phase flow never rewrites already-pushed placements, so
    // the page-1 snapshot must still be a prefix of the right buffer.
    if let Some(snapshot) = &state.page_one_right {
        let is_prefix = snapshot.len() <= state.right.len()
            && snapshot.iter().zip(&state.right).all(|(a, b)| a == b);
        if !is_prefix {
            warnings.push(LayoutWarning::SnapshotDivergence);
        }
    }

    warnings
}
