//! Main-column education history.

use vitae_types::{EducationEntry, Section};

use crate::LayoutError;
use crate::config::LayoutOptions;
use crate::measure::Measure;
use crate::placement::PlacementProps;
use crate::state::LayoutState;

pub fn build(
    state: LayoutState,
    section: &Section<EducationEntry>,
    opts: &LayoutOptions,
    measure: &dyn Measure,
) -> Result<LayoutState, LayoutError> {
    super::right_section(state, section, opts, measure, "education", |entry| {
        PlacementProps::Education {
            degree: entry.degree.clone(),
            institution: entry.institution.clone(),
            period: entry.period.clone(),
        }
    })
}
