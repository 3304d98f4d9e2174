use serde::Serialize;

/// The closed set of renderable content units the engine can position.
///
/// This enum replaces renderer references as runtime data: the layout
/// engine only ever records *which kind* of unit sits where, and the
/// rendering layer owns the kind-to-renderer registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PlacementKind {
    Photo,
    NameBlock,
    Designation,
    ContactLine,
    SectionHeading,
    SummaryBody,
    SkillBar,
    HobbyLine,
    Experience,
    Project,
    Education,
    Achievement,
    InterestLogo,
    InterestBody,
    ColumnDivider,
}

impl PlacementKind {
    /// String representation, primarily for diagnostics and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlacementKind::Photo => "Photo",
            PlacementKind::NameBlock => "NameBlock",
            PlacementKind::Designation => "Designation",
            PlacementKind::ContactLine => "ContactLine",
            PlacementKind::SectionHeading => "SectionHeading",
            PlacementKind::SummaryBody => "SummaryBody",
            PlacementKind::SkillBar => "SkillBar",
            PlacementKind::HobbyLine => "HobbyLine",
            PlacementKind::Experience => "Experience",
            PlacementKind::Project => "Project",
            PlacementKind::Education => "Education",
            PlacementKind::Achievement => "Achievement",
            PlacementKind::InterestLogo => "InterestLogo",
            PlacementKind::InterestBody => "InterestBody",
            PlacementKind::ColumnDivider => "ColumnDivider",
        }
    }
}

impl std::fmt::Display for PlacementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
