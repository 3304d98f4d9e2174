//! The in-memory resume document model.
//!
//! This is the input to the layout engine: a fixed set of optional
//! sections, each with a display title and ordered entries. Parsing,
//! HTML handling and persistence live upstream; this crate only defines
//! the shapes.

use serde::{Deserialize, Serialize};

/// Which resume variant is being rendered.
///
/// The variant selects which sections are built and in what order; it
/// never changes the pagination algorithm itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResumeVariant {
    Fresher,
    Pro,
    Expert,
}

/// A titled, ordered group of entries. Entry order is preserved through
/// layout; there is no independent sort key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section<T> {
    pub title: String,
    pub entries: Vec<T>,
}

impl<T> Section<T> {
    pub fn new(title: impl Into<String>, entries: Vec<T>) -> Self {
        Self {
            title: title.into(),
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Name, designation and photo shown at the top of the sidebar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityInfo {
    pub name: String,
    pub designation: String,
    /// Resource URI of the photo, if any.
    pub photo: Option<String>,
}

/// One contact line (email, phone, website, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactEntry {
    pub channel: String,
    pub value: String,
}

/// A named skill with a 0..=100 proficiency level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillEntry {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub period: String,
    /// Free-form description; may contain markup consumed by the renderer.
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub name: String,
    pub summary: String,
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementEntry {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestEntry {
    pub topic: String,
    pub detail: String,
}

/// A complete resume document. Every section is optional; a missing or
/// empty section is simply skipped by its builder.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub identity: Option<IdentityInfo>,
    pub contact: Option<Section<ContactEntry>>,
    pub summary: Option<Section<String>>,
    pub skills: Option<Section<SkillEntry>>,
    pub work_experience: Option<Section<ExperienceEntry>>,
    pub projects: Option<Section<ProjectEntry>>,
    pub education: Option<Section<EducationEntry>>,
    pub hobbies: Option<Section<String>>,
    pub achievements: Option<Section<AchievementEntry>>,
    pub area_of_interest: Option<Section<InterestEntry>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_emptiness() {
        let s: Section<String> = Section::new("Hobbies", vec![]);
        assert!(s.is_empty());
        let s = Section::new("Hobbies", vec!["Chess".to_string()]);
        assert!(!s.is_empty());
    }
}
