//! Canonical logging facility
//!
//! A thin layer over `tracing`: one initialization point with a profile
//! switch, plus structured operation macros writing the canonical schema
//! fields from `tumikia_core_types::schema`.

pub mod init;
pub mod macros;

pub use init::{init, Profile};
