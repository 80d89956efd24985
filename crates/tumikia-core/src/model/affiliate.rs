//! Ward-scoped affiliated entities: CBOs, schools, health facilities and
//! community health volunteers. All are seeded once and read-only.

use serde::{Deserialize, Serialize};
use tumikia_core_types::{CboId, ChvId, FacilityId, SchoolId, WardId};

/// Community-Based Organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cbo {
    pub id: CboId,
    pub name: String,
    pub ward_id: WardId,
}

impl Cbo {
    pub fn new(id: CboId, name: impl Into<String>, ward_id: WardId) -> Self {
        Self {
            id,
            name: name.into(),
            ward_id,
        }
    }
}

/// School
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    pub id: SchoolId,
    pub name: String,
    pub ward_id: WardId,
}

impl School {
    pub fn new(id: SchoolId, name: impl Into<String>, ward_id: WardId) -> Self {
        Self {
            id,
            name: name.into(),
            ward_id,
        }
    }
}

/// Health facility, with its Master Facility List code where known
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    pub id: FacilityId,
    pub name: String,
    pub mfl_code: Option<String>,
    pub ward_id: WardId,
}

impl Facility {
    pub fn new(id: FacilityId, name: impl Into<String>, ward_id: WardId) -> Self {
        Self {
            id,
            name: name.into(),
            mfl_code: None,
            ward_id,
        }
    }
}

/// Community health volunteer, attached to a ward and a CBO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChvUser {
    pub id: ChvId,
    pub names: String,
    pub ward_id: WardId,
    pub cbo_id: CboId,
}

impl ChvUser {
    pub fn new(id: ChvId, names: impl Into<String>, ward_id: WardId, cbo_id: CboId) -> Self {
        Self {
            id,
            names: names.into(),
            ward_id,
            cbo_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facility_mfl_code_optional() {
        let mut facility = Facility::new(FacilityId(1), "Port Reitz Sub-County Hospital", WardId(1));
        assert!(facility.mfl_code.is_none());
        facility.mfl_code = Some("12345".to_string());
        assert_eq!(facility.mfl_code.as_deref(), Some("12345"));
    }
}
