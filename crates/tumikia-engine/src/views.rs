//! View state handed to the presentation layer

use tumikia_core::age::AgeRange;

// Re-exported so the presentation layer has one import surface
pub use tumikia_core::rules::SectionVisibility;
pub use tumikia_core::wizard::StepView;

/// The derived age display next to the date-of-birth field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeSummary {
    pub years: i32,
    pub range: AgeRange,
    pub child: bool,
}
