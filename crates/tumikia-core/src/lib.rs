//! Tumikia Core - in-memory OVC registration kernel
//!
//! This crate provides the foundational data structures and operations for
//! the Tumikia registration system, including:
//! - Location hierarchy, caregiver and OVC registration models
//! - An owned in-memory store with monotonic id counters
//! - The age classifier and age-range bucketing
//! - The cascading county/constituency/ward selector
//! - The three-step registration wizard as an explicit state machine
//! - Per-step presence validation and conditional section visibility
//! - Store-wide referential integrity checks
//! - Read-side queries (filtered listings, dashboard and report aggregates)
//! - Rendered view fragments (option lists, Markdown tables and details)
//!
//! All state is volatile and scoped to one in-process session; the only
//! mutations are append-only caregiver and registration creation.

pub mod age;
pub mod apply;
pub mod commands;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod notify;
pub mod ops;
pub mod queries;
pub mod render;
pub mod rules;
pub mod selector;
pub mod wizard;

// Re-export commonly used types
pub use apply::apply;
pub use commands::Command;
pub use errors::{RegError, RegErrorKind, RegistryError, Result};
pub use model::{Caregiver, NewCaregiver, Registration, RegistrationDraft};
pub use notify::{Notification, NotificationSink, Severity, VecSink};
pub use ops::Store;
pub use selector::LocationSelector;
pub use wizard::{Transition, WizardEvent, WizardStep};
