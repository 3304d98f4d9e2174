use serde::{Deserialize, Serialize};

/// Spacing and scaling configuration for one layout run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutOptions {
    /// Vertical space inserted before a section heading.
    pub margin_section: f32,
    /// Vertical space inserted before each entry within a section.
    pub margin_bullet: f32,
    /// Offset applied after a forced page break, so content does not
    /// start flush with the physical page edge.
    pub margin_page: f32,
    /// Global multiplier from logical units to render-ready dimensions.
    pub scale: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            margin_section: 6.0,
            margin_bullet: 3.0,
            margin_page: 10.0,
            // Logical units are mm-like; 3.7795 maps them to CSS pixels
            // at 96 dpi.
            scale: 3.7795,
        }
    }
}
