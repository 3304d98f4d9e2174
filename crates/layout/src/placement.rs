//! Positioned content units.
//!
//! A [`Placement`] is one immutable record per unit: its identity, its
//! vertical extent in logical units, and the kind-specific payload the
//! renderer needs. The kind is derived from the payload variant, so kind
//! and props can never drift apart.

use serde::Serialize;
use vitae_types::PlacementId;

use crate::kind::PlacementKind;
use crate::scale::Scale;

/// Kind-specific render payload, one variant per [`PlacementKind`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum PlacementProps {
    Photo {
        uri: Option<String>,
    },
    NameBlock {
        name: String,
    },
    Designation {
        text: String,
    },
    ContactLine {
        channel: String,
        value: String,
    },
    SectionHeading {
        title: String,
    },
    SummaryBody {
        text: String,
    },
    SkillBar {
        name: String,
        level: u8,
    },
    HobbyLine {
        text: String,
    },
    Experience {
        role: String,
        company: String,
        period: String,
        description: Vec<String>,
    },
    Project {
        name: String,
        summary: String,
        tech: Vec<String>,
    },
    Education {
        degree: String,
        institution: String,
        period: String,
    },
    Achievement {
        title: String,
        detail: String,
    },
    InterestLogo {
        topic: String,
    },
    InterestBody {
        topic: String,
        detail: String,
    },
    ColumnDivider,
}

impl PlacementProps {
    pub fn kind(&self) -> PlacementKind {
        match self {
            PlacementProps::Photo { .. } => PlacementKind::Photo,
            PlacementProps::NameBlock { .. } => PlacementKind::NameBlock,
            PlacementProps::Designation { .. } => PlacementKind::Designation,
            PlacementProps::ContactLine { .. } => PlacementKind::ContactLine,
            PlacementProps::SectionHeading { .. } => PlacementKind::SectionHeading,
            PlacementProps::SummaryBody { .. } => PlacementKind::SummaryBody,
            PlacementProps::SkillBar { .. } => PlacementKind::SkillBar,
            PlacementProps::HobbyLine { .. } => PlacementKind::HobbyLine,
            PlacementProps::Experience { .. } => PlacementKind::Experience,
            PlacementProps::Project { .. } => PlacementKind::Project,
            PlacementProps::Education { .. } => PlacementKind::Education,
            PlacementProps::Achievement { .. } => PlacementKind::Achievement,
            PlacementProps::InterestLogo { .. } => PlacementKind::InterestLogo,
            PlacementProps::InterestBody { .. } => PlacementKind::InterestBody,
            PlacementProps::ColumnDivider => PlacementKind::ColumnDivider,
        }
    }
}

/// One positioned content unit in a column buffer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub id: PlacementId,
    /// Top edge in logical units, measured from the top of page 1.
    pub top: f32,
    /// Vertical extent in logical units.
    pub height: f32,
    /// Flattened so the serialized form exposes `kind` alongside the
    /// payload fields.
    #[serde(flatten)]
    pub props: PlacementProps,
}

impl Placement {
    pub fn new(id: impl Into<PlacementId>, top: f32, height: f32, props: PlacementProps) -> Self {
        Self {
            id: id.into(),
            top,
            height,
            props,
        }
    }

    pub fn kind(&self) -> PlacementKind {
        self.props.kind()
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// The same placement with its geometry multiplied by the scaling
    /// factor. Payload, id and kind are untouched.
    pub fn scaled(&self, scale: Scale) -> Self {
        Self {
            id: self.id.clone(),
            top: scale.apply(self.top),
            height: scale.apply(self.height),
            props: self.props.clone(),
        }
    }
}
