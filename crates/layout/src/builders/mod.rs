//! Section builders.
//!
//! One builder per content category. Each takes the accumulator by
//! value, appends a heading (only when the section has entries) followed
//! by one placement per entry in input order, and returns the extended
//! accumulator. Heights always come from the [`Measure`] collaborator.
//!
//! Sidebar builders append blindly; they never page-break. Main-column
//! builders run the page-boundary check on every append, and the
//! area-of-interest builder additionally reconciles against the sidebar's
//! page span, re-routing to the full-width block buffer.

pub mod achievements;
pub mod contact;
pub mod education;
pub mod experience;
pub mod hobbies;
pub mod identity;
pub mod interests;
pub mod projects;
pub mod skills;
pub mod summary;

use vitae_types::Section;

use crate::config::LayoutOptions;
use crate::flow;
use crate::measure::Measure;
use crate::placement::PlacementProps;
use crate::state::LayoutState;
use crate::LayoutError;

fn heading_id(prefix: &str) -> String {
    format!("{prefix}-heading")
}

fn entry_id(prefix: &str, index: usize) -> String {
    format!("{prefix}-{index}")
}

/// Walk a sidebar section: heading, then entries, all in the left buffer.
fn left_section<T>(
    mut state: LayoutState,
    section: &Section<T>,
    opts: &LayoutOptions,
    measure: &dyn Measure,
    prefix: &str,
    mut props_for: impl FnMut(&T) -> PlacementProps,
) -> Result<LayoutState, LayoutError> {
    if section.is_empty() {
        return Ok(state);
    }

    let heading = PlacementProps::SectionHeading {
        title: section.title.clone(),
    };
    let h = measure.height(&heading)?;
    state.push_left(heading_id(prefix), opts.margin_section, h, heading);

    for (i, entry) in section.entries.iter().enumerate() {
        let props = props_for(entry);
        let h = measure.height(&props)?;
        state.push_left(entry_id(prefix, i), opts.margin_bullet, h, props);
    }
    Ok(state)
}

/// Walk a main-column section: heading, then entries, every append going
/// through the page-boundary check but always landing in the right buffer.
fn right_section<T>(
    mut state: LayoutState,
    section: &Section<T>,
    opts: &LayoutOptions,
    measure: &dyn Measure,
    prefix: &str,
    mut props_for: impl FnMut(&T) -> PlacementProps,
) -> Result<LayoutState, LayoutError> {
    if section.is_empty() {
        return Ok(state);
    }

    let heading = PlacementProps::SectionHeading {
        title: section.title.clone(),
    };
    let h = measure.height(&heading)?;
    flow::append_right(&mut state, heading_id(prefix), opts.margin_section, h, heading, opts);

    for (i, entry) in section.entries.iter().enumerate() {
        let props = props_for(entry);
        let h = measure.height(&props)?;
        flow::append_right(&mut state, entry_id(prefix, i), opts.margin_bullet, h, props, opts);
    }
    Ok(state)
}
