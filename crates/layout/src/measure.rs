//! Height measurement of renderable units.
//!
//! Builders never guess heights: they hand the prospective payload to a
//! [`Measure`] implementation and use whatever comes back. The real
//! renderer can plug in glyph-accurate measurement; [`StandardMeasure`]
//! provides the stock logical heights.

use crate::LayoutError;
use crate::placement::PlacementProps;

/// Maps a placement payload to its height in logical units.
///
/// A failing measurement aborts the whole render; a partially built
/// layout state is not independently renderable.
pub trait Measure {
    fn height(&self, props: &PlacementProps) -> Result<f32, LayoutError>;
}

/// Stock per-kind logical heights with content-sensitive adjustments.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMeasure;

/// Rough line count for free-form text at sidebar/body width.
fn text_lines(text: &str, chars_per_line: usize) -> f32 {
    let chars = text.chars().count();
    (chars.max(1)).div_ceil(chars_per_line) as f32
}

impl Measure for StandardMeasure {
    fn height(&self, props: &PlacementProps) -> Result<f32, LayoutError> {
        let height = match props {
            PlacementProps::Photo { .. } => 45.0,
            PlacementProps::NameBlock { .. } => 14.0,
            PlacementProps::Designation { .. } => 8.0,
            PlacementProps::ContactLine { .. } => 7.0,
            PlacementProps::SectionHeading { .. } => 11.0,
            PlacementProps::SummaryBody { text } => 6.0 * text_lines(text, 50),
            PlacementProps::SkillBar { level, .. } => {
                if *level > 100 {
                    return Err(LayoutError::measure(
                        props.kind(),
                        format!("skill level {level} is outside 0..=100"),
                    ));
                }
                9.0
            }
            PlacementProps::HobbyLine { .. } => 7.0,
            PlacementProps::Experience { description, .. } => {
                16.0 + 6.0 * description.len() as f32
            }
            PlacementProps::Project { summary, tech, .. } => {
                let tech_row = if tech.is_empty() { 0.0 } else { 6.0 };
                14.0 + 6.0 * text_lines(summary, 80) + tech_row
            }
            PlacementProps::Education { .. } => 15.0,
            PlacementProps::Achievement { .. } => 12.0,
            PlacementProps::InterestLogo { .. } => 14.0,
            PlacementProps::InterestBody { detail, .. } => 8.0 + 6.0 * text_lines(detail, 80),
            // Divider geometry is derived from the page fragment, not
            // measured.
            PlacementProps::ColumnDivider => 0.0,
        };
        Ok(height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_level_out_of_range_fails() {
        let props = PlacementProps::SkillBar {
            name: "Rust".into(),
            level: 140,
        };
        let err = StandardMeasure.height(&props).unwrap_err();
        assert!(matches!(err, LayoutError::Measure { .. }));
    }

    #[test]
    fn experience_grows_with_description() {
        let short = PlacementProps::Experience {
            role: "Engineer".into(),
            company: "Acme".into(),
            period: "2020".into(),
            description: vec!["Did things".into()],
        };
        let long = PlacementProps::Experience {
            role: "Engineer".into(),
            company: "Acme".into(),
            period: "2020".into(),
            description: vec!["a".into(); 4],
        };
        let h_short = StandardMeasure.height(&short).unwrap();
        let h_long = StandardMeasure.height(&long).unwrap();
        assert!(h_long > h_short);
    }
}
