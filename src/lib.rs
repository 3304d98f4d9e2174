//! vitae — two-column resume layout engine.
//!
//! Feeds a [`ResumeDocument`] through the per-section builders in the
//! order its variant profile dictates, reconciles the two columns' page
//! spans, and returns render-ready pages. Rendering itself (fonts,
//! markup, PDF/HTML emission) is a downstream concern; the engine only
//! needs a [`Measure`] implementation from that layer.

pub mod pipeline;

pub use pipeline::{RenderedResume, render, render_with_defaults};

pub use vitae_layout::{
    LayoutError, LayoutOptions, LayoutWarning, Measure, Page, Placement, PlacementKind,
    PlacementProps, Scale, StandardMeasure,
};
pub use vitae_types::{ResumeDocument, ResumeVariant};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Document parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a resume document from its JSON representation.
pub fn document_from_json(json: &str) -> Result<ResumeDocument, PipelineError> {
    Ok(serde_json::from_str(json)?)
}
