use serde::{Deserialize, Serialize};
use tumikia_core_types::{ConstituencyId, CountyId, WardId};

/// County - the top level of the location hierarchy
///
/// Counties are seeded once at startup and immutable thereafter. Every
/// constituency belongs to exactly one county.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct County {
    pub id: CountyId,
    pub name: String,
}

impl County {
    pub fn new(id: CountyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Constituency - the middle level, scoped to a county
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constituency {
    pub id: ConstituencyId,
    pub name: String,
    pub county_id: CountyId,
}

impl Constituency {
    pub fn new(id: ConstituencyId, name: impl Into<String>, county_id: CountyId) -> Self {
        Self {
            id,
            name: name.into(),
            county_id,
        }
    }
}

/// Ward - the leaf of the location hierarchy
///
/// Wards anchor everything else: CBOs, schools, facilities, CHV users,
/// caregivers and registrations are all ward-scoped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ward {
    pub id: WardId,
    pub name: String,
    pub constituency_id: ConstituencyId,
}

impl Ward {
    pub fn new(id: WardId, name: impl Into<String>, constituency_id: ConstituencyId) -> Self {
        Self {
            id,
            name: name.into(),
            constituency_id,
        }
    }
}
