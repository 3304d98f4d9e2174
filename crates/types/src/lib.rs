pub mod document;
pub mod geometry;
pub mod ids;

pub use document::{
    AchievementEntry, ContactEntry, EducationEntry, ExperienceEntry, IdentityInfo, InterestEntry,
    ProjectEntry, ResumeDocument, ResumeVariant, Section, SkillEntry,
};
pub use geometry::{EPSILON, PAGE_HEIGHT, page_bottom, page_of, page_top, pages_spanned};
pub use ids::PlacementId;
