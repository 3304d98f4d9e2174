//! Main-column projects.

use vitae_types::{ProjectEntry, Section};

use crate::LayoutError;
use crate::config::LayoutOptions;
use crate::measure::Measure;
use crate::placement::PlacementProps;
use crate::state::LayoutState;

pub fn build(
    state: LayoutState,
    section: &Section<ProjectEntry>,
    opts: &LayoutOptions,
    measure: &dyn Measure,
) -> Result<LayoutState, LayoutError> {
    super::right_section(state, section, opts, measure, "project", |entry| {
        PlacementProps::Project {
            name: entry.name.clone(),
            summary: entry.summary.clone(),
            tech: entry.tech.clone(),
        }
    })
}
