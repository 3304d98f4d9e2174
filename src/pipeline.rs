//! The render pipeline: variant profiles and the one-call entry point.
//!
//! A profile is the ordered list of sections a resume variant builds.
//! Sidebar sections always come first so the sidebar's page span is
//! final before any main-column reconciliation runs; the area of
//! interest is always last because it is the section that may spill
//! onto full-width block pages.

use log::debug;
use serde::Serialize;
use vitae_layout::builders;
use vitae_layout::{
    LayoutOptions, LayoutState, LayoutWarning, Measure, Page, Scale, StandardMeasure, assemble,
    verify,
};
use vitae_types::{ResumeDocument, ResumeVariant};

use crate::PipelineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionSlot {
    Identity,
    Contact,
    Summary,
    Skills,
    Hobbies,
    WorkExperience,
    Projects,
    Education,
    Achievements,
    AreaOfInterest,
}

fn profile(variant: ResumeVariant) -> &'static [SectionSlot] {
    use SectionSlot::*;
    match variant {
        // Fresh graduates lead with education and projects; no work
        // experience or achievements.
        ResumeVariant::Fresher => &[
            Identity,
            Contact,
            Summary,
            Skills,
            Hobbies,
            Education,
            Projects,
            AreaOfInterest,
        ],
        ResumeVariant::Pro => &[
            Identity,
            Contact,
            Summary,
            Skills,
            WorkExperience,
            Projects,
            Education,
            AreaOfInterest,
        ],
        ResumeVariant::Expert => &[
            Identity,
            Contact,
            Summary,
            Skills,
            Hobbies,
            WorkExperience,
            Projects,
            Achievements,
            Education,
            AreaOfInterest,
        ],
    }
}

/// Pages plus the diagnostics collected while producing them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedResume {
    pub pages: Vec<Page>,
    pub warnings: Vec<LayoutWarning>,
}

/// Lay out a document for the given variant.
///
/// Allocates a fresh accumulator, folds the profiled sections over it,
/// runs the post-layout invariant pass and assembles the pages. The
/// accumulator never outlives the call.
pub fn render(
    document: &ResumeDocument,
    variant: ResumeVariant,
    opts: &LayoutOptions,
    measure: &dyn Measure,
) -> Result<RenderedResume, PipelineError> {
    let mut state = LayoutState::new();

    for slot in profile(variant) {
        state = match slot {
            SectionSlot::Identity => match &document.identity {
                Some(identity) => builders::identity::build(state, identity, opts, measure)?,
                None => state,
            },
            SectionSlot::Contact => match &document.contact {
                Some(section) => builders::contact::build(state, section, opts, measure)?,
                None => state,
            },
            SectionSlot::Summary => match &document.summary {
                Some(section) => builders::summary::build(state, section, opts, measure)?,
                None => state,
            },
            SectionSlot::Skills => match &document.skills {
                Some(section) => builders::skills::build(state, section, opts, measure)?,
                None => state,
            },
            SectionSlot::Hobbies => match &document.hobbies {
                Some(section) => builders::hobbies::build(state, section, opts, measure)?,
                None => state,
            },
            SectionSlot::WorkExperience => match &document.work_experience {
                Some(section) => builders::experience::build(state, section, opts, measure)?,
                None => state,
            },
            SectionSlot::Projects => match &document.projects {
                Some(section) => builders::projects::build(state, section, opts, measure)?,
                None => state,
            },
            SectionSlot::Education => match &document.education {
                Some(section) => builders::education::build(state, section, opts, measure)?,
                None => state,
            },
            SectionSlot::Achievements => match &document.achievements {
                Some(section) => builders::achievements::build(state, section, opts, measure)?,
                None => state,
            },
            SectionSlot::AreaOfInterest => match &document.area_of_interest {
                Some(section) => builders::interests::build(state, section, opts, measure)?,
                None => state,
            },
        };
    }

    let mut warnings = state.warnings.clone();
    warnings.extend(verify::verify(&state));

    let pages = assemble(&state, Scale::new(opts.scale));
    debug!(
        "rendered {:?} resume: {} pages, {} warnings",
        variant,
        pages.len(),
        warnings.len()
    );

    Ok(RenderedResume { pages, warnings })
}

/// [`render`] with [`StandardMeasure`] and default spacing.
pub fn render_with_defaults(
    document: &ResumeDocument,
    variant: ResumeVariant,
) -> Result<RenderedResume, PipelineError> {
    render(document, variant, &LayoutOptions::default(), &StandardMeasure)
}
