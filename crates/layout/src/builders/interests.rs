//! Main-column area of interest.
//!
//! The only builder that reconciles the two columns' page spans: once
//! the main column reaches a page the sidebar does not occupy, its
//! placements land in the full-width block buffer instead of the right
//! buffer. The heading/logo pair and every entry make the destination
//! decision independently, and the section closes with a trailing
//! divider in whichever buffer received the last entry.

use vitae_types::{InterestEntry, Section};

use crate::LayoutError;
use crate::config::LayoutOptions;
use crate::flow;
use crate::measure::Measure;
use crate::placement::PlacementProps;
use crate::state::LayoutState;

pub fn build(
    mut state: LayoutState,
    section: &Section<InterestEntry>,
    opts: &LayoutOptions,
    measure: &dyn Measure,
) -> Result<LayoutState, LayoutError> {
    if section.is_empty() {
        return Ok(state);
    }

    let heading = PlacementProps::SectionHeading {
        title: section.title.clone(),
    };
    let h = measure.height(&heading)?;
    let mut last = flow::append_reconciled(
        &mut state,
        "interest-heading",
        opts.margin_section,
        h,
        heading,
        opts,
    );

    for (i, entry) in section.entries.iter().enumerate() {
        let logo = PlacementProps::InterestLogo {
            topic: entry.topic.clone(),
        };
        let h = measure.height(&logo)?;
        last = flow::append_reconciled(
            &mut state,
            format!("interest-logo-{i}"),
            opts.margin_bullet,
            h,
            logo,
            opts,
        );

        let body = PlacementProps::InterestBody {
            topic: entry.topic.clone(),
            detail: entry.detail.clone(),
        };
        let h = measure.height(&body)?;
        last = flow::append_reconciled(
            &mut state,
            format!("interest-{i}"),
            opts.margin_bullet,
            h,
            body,
            opts,
        );
    }

    flow::close_section(&mut state, last, "interest-divider");
    Ok(state)
}
