use vitae_types::Section;

use crate::LayoutError;
use crate::config::LayoutOptions;
use crate::measure::Measure;
use crate::placement::PlacementProps;

/// Measure that gives every unit the same height, for precise control
/// over where boundaries fall in tests.
pub struct FixedMeasure(pub f32);

impl Measure for FixedMeasure {
    fn height(&self, _props: &PlacementProps) -> Result<f32, LayoutError> {
        Ok(self.0)
    }
}

/// Options with all margins zeroed and scale 1, so test arithmetic is
/// just the raw entry heights.
pub fn plain_options() -> LayoutOptions {
    LayoutOptions {
        margin_section: 0.0,
        margin_bullet: 0.0,
        margin_page: 0.0,
        scale: 1.0,
    }
}

pub fn body(text: &str) -> PlacementProps {
    PlacementProps::SummaryBody {
        text: text.to_string(),
    }
}

pub fn string_section(title: &str, count: usize) -> Section<String> {
    Section::new(title, (0..count).map(|i| format!("entry {i}")).collect())
}
