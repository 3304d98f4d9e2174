//! Sidebar skill bars.

use vitae_types::{Section, SkillEntry};

use crate::LayoutError;
use crate::config::LayoutOptions;
use crate::measure::Measure;
use crate::placement::PlacementProps;
use crate::state::LayoutState;

pub fn build(
    state: LayoutState,
    section: &Section<SkillEntry>,
    opts: &LayoutOptions,
    measure: &dyn Measure,
) -> Result<LayoutState, LayoutError> {
    super::left_section(state, section, opts, measure, "skill", |entry| {
        PlacementProps::SkillBar {
            name: entry.name.clone(),
            level: entry.level,
        }
    })
}
