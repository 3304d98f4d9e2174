//! Logical page geometry.
//!
//! All layout arithmetic happens in logical ("mm-like") units; the scaling
//! factor is applied once, at page assembly. One page is exactly
//! [`PAGE_HEIGHT`] logical units tall.

/// Height of one page in logical units (A4 height in millimetres).
pub const PAGE_HEIGHT: f32 = 297.0;

/// Tolerance for boundary comparisons; an entry whose bottom edge lands
/// exactly on a page boundary must not trigger a break.
pub const EPSILON: f32 = 0.01;

/// The 1-based page a vertical offset falls on.
pub fn page_of(y: f32) -> usize {
    (y / PAGE_HEIGHT).floor() as usize + 1
}

/// Top edge of the 1-based page `n`.
pub fn page_top(n: usize) -> f32 {
    PAGE_HEIGHT * (n.saturating_sub(1)) as f32
}

/// Bottom edge of the 1-based page `n`.
pub fn page_bottom(n: usize) -> f32 {
    PAGE_HEIGHT * n as f32
}

/// Number of pages a column of the given cumulative height spans.
///
/// An empty column still spans one page, and a column ending exactly on a
/// boundary does not spill onto the next page.
pub fn pages_spanned(height: f32) -> usize {
    if height <= EPSILON {
        return 1;
    }
    ((height - EPSILON) / PAGE_HEIGHT).ceil() as usize
}
