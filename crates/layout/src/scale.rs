//! The uniform scaling factor.
//!
//! Every consumer of logical geometry goes through [`Scale`] so that
//! re-rendering a document at a different factor rescales all placements
//! proportionally, with no relative drift between units sized in
//! different modules.

use serde::{Deserialize, Serialize};

/// Multiplier from logical units to render-ready dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale(f32);

impl Scale {
    pub fn new(factor: f32) -> Self {
        Self(factor)
    }

    pub fn factor(&self) -> f32 {
        self.0
    }

    /// Scale a logical value to a bare number.
    pub fn apply(&self, logical: f32) -> f32 {
        self.0 * logical
    }

    /// Scale and format with a `mm` suffix for CSS-like renderers.
    pub fn mm(&self, logical: f32) -> String {
        format!("{:.2}mm", self.apply(logical))
    }

    /// Scale and format with a `px` suffix for raster renderers.
    pub fn px(&self, logical: f32) -> String {
        format!("{:.2}px", self.apply(logical))
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_is_a_plain_multiply() {
        let s = Scale::new(2.5);
        assert_eq!(s.apply(10.0), 25.0);
        assert_eq!(s.apply(0.0), 0.0);
    }

    #[test]
    fn formatted_units_carry_suffix() {
        let s = Scale::new(2.0);
        assert_eq!(s.mm(10.0), "20.00mm");
        assert_eq!(s.px(1.5), "3.00px");
    }
}
