//! Main-column work experience.

use vitae_types::{ExperienceEntry, Section};

use crate::LayoutError;
use crate::config::LayoutOptions;
use crate::measure::Measure;
use crate::placement::PlacementProps;
use crate::state::LayoutState;

pub fn build(
    state: LayoutState,
    section: &Section<ExperienceEntry>,
    opts: &LayoutOptions,
    measure: &dyn Measure,
) -> Result<LayoutState, LayoutError> {
    super::right_section(state, section, opts, measure, "experience", |entry| {
        PlacementProps::Experience {
            role: entry.role.clone(),
            company: entry.company.clone(),
            period: entry.period.clone(),
            description: entry.description.clone(),
        }
    })
}
