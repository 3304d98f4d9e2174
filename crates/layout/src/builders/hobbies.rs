//! Sidebar hobby lines.

use vitae_types::Section;

use crate::LayoutError;
use crate::config::LayoutOptions;
use crate::measure::Measure;
use crate::placement::PlacementProps;
use crate::state::LayoutState;

pub fn build(
    state: LayoutState,
    section: &Section<String>,
    opts: &LayoutOptions,
    measure: &dyn Measure,
) -> Result<LayoutState, LayoutError> {
    super::left_section(state, section, opts, measure, "hobby", |text| {
        PlacementProps::HobbyLine { text: text.clone() }
    })
}
