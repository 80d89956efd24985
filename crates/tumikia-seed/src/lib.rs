//! Seed pipeline for the Tumikia registry
//!
//! Parses the versioned YAML seed format, validates referential integrity,
//! and builds a ready-to-use in-memory `Store` with id counters derived
//! from the seeded maxima. Ships an embedded sample dataset covering all
//! 47 counties with the Mombasa hierarchy fleshed out.

pub mod errors;
pub mod format_v0;
pub mod importer;
pub mod parser;

pub use errors::{Result, SeedError};
pub use format_v0::SeedV0;
pub use importer::{import_seed, sample};
pub use parser::parse_seed_str;
