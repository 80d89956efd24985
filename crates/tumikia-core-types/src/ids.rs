//! Typed entity identifiers
//!
//! Every record in the registry is keyed by a small integer. Wrapping the
//! integers in per-entity newtypes keeps a `WardId` from being handed to a
//! lookup that expects a `CountyId`. Seeded ids come from the seed file;
//! caregiver and OVC ids are allocated by the store's monotonic counters.

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// Get the raw integer value
            pub fn get(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of a County (top of the location hierarchy)
    CountyId
);
entity_id!(
    /// Identifier of a Constituency within a County
    ConstituencyId
);
entity_id!(
    /// Identifier of a Ward within a Constituency
    WardId
);
entity_id!(
    /// Identifier of a ward-scoped Community-Based Organization
    CboId
);
entity_id!(
    /// Identifier of a ward-scoped school
    SchoolId
);
entity_id!(
    /// Identifier of a ward-scoped health facility
    FacilityId
);
entity_id!(
    /// Identifier of a community health volunteer
    ChvId
);
entity_id!(
    /// Identifier of a caregiver (allocated by the store counter)
    CaregiverId
);
entity_id!(
    /// Identifier of an OVC registration (allocated by the store counter)
    OvcId
);
