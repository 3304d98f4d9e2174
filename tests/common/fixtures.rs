use vitae::{LayoutError, Measure, PlacementProps};
use vitae_types::{
    ContactEntry, ExperienceEntry, IdentityInfo, InterestEntry, ResumeDocument, Section,
    SkillEntry,
};

/// Measure giving every placement the same height; keeps boundary
/// arithmetic in tests exact.
pub struct Uniform(pub f32);

impl Measure for Uniform {
    fn height(&self, _props: &PlacementProps) -> Result<f32, LayoutError> {
        Ok(self.0)
    }
}

pub fn identity() -> IdentityInfo {
    IdentityInfo {
        name: "Ada Lovelace".into(),
        designation: "Analytical Engine Programmer".into(),
        photo: Some("photo://ada".into()),
    }
}

pub fn contact_section() -> Section<ContactEntry> {
    Section::new(
        "Contact",
        vec![ContactEntry {
            channel: "email".into(),
            value: "ada@example.org".into(),
        }],
    )
}

pub fn skills_section(count: usize) -> Section<SkillEntry> {
    Section::new(
        "Skills",
        (0..count)
            .map(|i| SkillEntry {
                name: format!("Skill {i}"),
                level: 60 + (i as u8 % 40),
            })
            .collect(),
    )
}

pub fn experience_section(count: usize) -> Section<ExperienceEntry> {
    Section::new(
        "Work Experience",
        (0..count)
            .map(|i| ExperienceEntry {
                role: format!("Role {i}"),
                company: "Analytical Engines Ltd".into(),
                period: format!("18{i:02}"),
                description: vec!["Built things".into(), "Shipped things".into()],
            })
            .collect(),
    )
}

pub fn interests_section(count: usize) -> Section<InterestEntry> {
    Section::new(
        "Area of Interest",
        (0..count)
            .map(|i| InterestEntry {
                topic: format!("Topic {i}"),
                detail: "A paragraph about the topic.".into(),
            })
            .collect(),
    )
}

/// Sidebar-only document that comfortably fits one page.
pub fn small_document() -> ResumeDocument {
    ResumeDocument {
        identity: Some(identity()),
        contact: Some(contact_section()),
        skills: Some(skills_section(3)),
        ..Default::default()
    }
}

pub fn document_with_experience(entries: usize) -> ResumeDocument {
    ResumeDocument {
        identity: Some(identity()),
        contact: Some(contact_section()),
        skills: Some(skills_section(3)),
        work_experience: Some(experience_section(entries)),
        ..Default::default()
    }
}
