use serde::Serialize;
use thiserror::Error;
use vitae_types::PlacementId;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Measurement failed for {kind} placement: {reason}")]
    Measure {
        kind: &'static str,
        reason: String,
    },
    #[error("Generic layout error: {0}")]
    Generic(String),
}

impl LayoutError {
    pub fn measure(kind: PlacementKind, reason: impl Into<String>) -> Self {
        LayoutError::Measure {
            kind: kind.as_str(),
            reason: reason.into(),
        }
    }
}

/// Non-fatal diagnostics surfaced alongside the assembled pages.
///
/// Layout never fails for a structurally valid document; conditions the
/// engine cannot resolve (an entry taller than a page, a sidebar that
/// spills past page 1) are reported here instead of being silently
/// mis-rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum LayoutWarning {
    /// A single entry exceeds one full page; it was started on a fresh
    /// page and will render past the boundary unsplit.
    OversizedEntry { id: PlacementId, height: f32 },
    /// A placement crosses a page boundary without being oversized.
    BoundaryStraddle { id: PlacementId, page: usize },
    /// The page-1 snapshot is no longer a prefix of the right buffer.
    SnapshotDivergence,
}

pub mod assembler;
pub mod builders;
pub mod config;
pub mod flow;
pub mod kind;
pub mod measure;
pub mod placement;
pub mod scale;
pub mod state;
pub mod verify;

pub use self::assembler::{Page, assemble};
pub use self::config::LayoutOptions;
pub use self::kind::PlacementKind;
pub use self::measure::{Measure, StandardMeasure};
pub use self::placement::{Placement, PlacementProps};
pub use self::scale::Scale;
pub use self::state::{Column, LayoutState};

#[cfg(test)]
mod assembler_test;
#[cfg(test)]
mod test_utils;
