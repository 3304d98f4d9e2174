pub mod fixtures;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Options with scale 1 so assertions can reason in logical units.
pub fn logical_options() -> vitae::LayoutOptions {
    vitae::LayoutOptions {
        scale: 1.0,
        ..Default::default()
    }
}
