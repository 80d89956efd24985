//! Core types shared across Tumikia facilities
//!
//! This crate provides foundational types used by the registry core,
//! the seed pipeline and the session engine:
//!
//! - **Entity ids**: integer newtypes for every seeded and appended record
//! - **Correlation types**: RequestId, RequestContext
//! - **Sensitive data**: Sensitive<T> marker for automatic redaction
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod ids;
pub mod schema;
pub mod sensitive;

pub use correlation::{RequestContext, RequestId};
pub use ids::{
    CaregiverId, CboId, ChvId, ConstituencyId, CountyId, FacilityId, OvcId, SchoolId, WardId,
};
pub use sensitive::Sensitive;
