//! Sidebar contact lines.

use vitae_types::{ContactEntry, Section};

use crate::LayoutError;
use crate::config::LayoutOptions;
use crate::measure::Measure;
use crate::placement::PlacementProps;
use crate::state::LayoutState;

pub fn build(
    state: LayoutState,
    section: &Section<ContactEntry>,
    opts: &LayoutOptions,
    measure: &dyn Measure,
) -> Result<LayoutState, LayoutError> {
    super::left_section(state, section, opts, measure, "contact", |entry| {
        PlacementProps::ContactLine {
            channel: entry.channel.clone(),
            value: entry.value.clone(),
        }
    })
}
