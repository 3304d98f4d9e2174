//! Main-column achievements.

use vitae_types::{AchievementEntry, Section};

use crate::LayoutError;
use crate::config::LayoutOptions;
use crate::measure::Measure;
use crate::placement::PlacementProps;
use crate::state::LayoutState;

pub fn build(
    state: LayoutState,
    section: &Section<AchievementEntry>,
    opts: &LayoutOptions,
    measure: &dyn Measure,
) -> Result<LayoutState, LayoutError> {
    super::right_section(state, section, opts, measure, "achievement", |entry| {
        PlacementProps::Achievement {
            title: entry.title.clone(),
            detail: entry.detail.clone(),
        }
    })
}
