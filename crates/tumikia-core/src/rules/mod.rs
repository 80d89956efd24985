pub mod invariants;
pub mod step_rules;
pub mod validation;

pub use step_rules::{missing_fields, required_fields, section_visibility, SectionVisibility};
pub use validation::validate_store;
