use serde::{Deserialize, Serialize};
use tumikia_core_types::{CaregiverId, Sensitive, WardId};

use super::registration::{Gender, HivStatus, Relationship};

/// Primary or secondary caregiver designation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaregiverType {
    Primary,
    Secondary,
}

impl CaregiverType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaregiverType::Primary => "Primary",
            CaregiverType::Secondary => "Secondary",
        }
    }
}

impl std::fmt::Display for CaregiverType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caregiver - the adult responsible for one or more registrants
///
/// Caregivers are either seeded or appended through the wizard / the
/// add-caregiver path; never updated or deleted. Registrations back-reference
/// caregivers by id without owning them.
///
/// Debug output redacts the phone number and national id; use the detail
/// renderer when the operator has asked to see them.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caregiver {
    pub id: CaregiverId,
    pub names: String,
    pub gender: Option<Gender>,
    pub national_id: Option<String>,
    pub phone: Option<String>,
    pub hiv_status: HivStatus,
    pub relation: Option<Relationship>,
    pub caregiver_type: Option<CaregiverType>,
    pub ward_id: WardId,
}

impl std::fmt::Debug for Caregiver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Caregiver")
            .field("id", &self.id)
            .field("names", &self.names)
            .field("gender", &self.gender)
            .field("national_id", &self.national_id.as_ref().map(Sensitive::new))
            .field("phone", &self.phone.as_ref().map(Sensitive::new))
            .field("hiv_status", &self.hiv_status)
            .field("relation", &self.relation)
            .field("caregiver_type", &self.caregiver_type)
            .field("ward_id", &self.ward_id)
            .finish()
    }
}

/// Fields of a caregiver about to be created (no id yet)
///
/// Used by both creation paths: the wizard's inline new-caregiver section
/// and the standalone add-caregiver action.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCaregiver {
    pub names: String,
    pub gender: Option<Gender>,
    pub national_id: Option<String>,
    pub phone: String,
    pub hiv_status: HivStatus,
    pub relation: Option<Relationship>,
    pub caregiver_type: Option<CaregiverType>,
    pub ward_id: WardId,
}

impl NewCaregiver {
    /// Minimal constructor: the two fields both creation paths require
    pub fn new(names: impl Into<String>, phone: impl Into<String>, ward_id: WardId) -> Self {
        Self {
            names: names.into(),
            gender: None,
            national_id: None,
            phone: phone.into(),
            hiv_status: HivStatus::Unknown,
            relation: None,
            caregiver_type: None,
            ward_id,
        }
    }

    /// Assign the allocated id, producing the stored record
    pub fn into_caregiver(self, id: CaregiverId) -> Caregiver {
        Caregiver {
            id,
            names: self.names,
            gender: self.gender,
            national_id: self.national_id,
            phone: Some(self.phone),
            hiv_status: self.hiv_status,
            relation: self.relation,
            caregiver_type: self.caregiver_type,
            ward_id: self.ward_id,
        }
    }
}

impl std::fmt::Debug for NewCaregiver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewCaregiver")
            .field("names", &self.names)
            .field("gender", &self.gender)
            .field("national_id", &self.national_id.as_ref().map(Sensitive::new))
            .field("phone", &Sensitive::new(&self.phone))
            .field("hiv_status", &self.hiv_status)
            .field("relation", &self.relation)
            .field("caregiver_type", &self.caregiver_type)
            .field("ward_id", &self.ward_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_contact_data() {
        let caregiver = Caregiver {
            id: CaregiverId(1),
            names: "Mary Wanjiku".to_string(),
            gender: Some(Gender::Female),
            national_id: Some("12345678".to_string()),
            phone: Some("0712345678".to_string()),
            hiv_status: HivStatus::Negative,
            relation: Some(Relationship::Mother),
            caregiver_type: None,
            ward_id: WardId(1),
        };

        let debug_str = format!("{:?}", caregiver);
        assert!(debug_str.contains("Mary Wanjiku"));
        assert!(debug_str.contains("***REDACTED***"));
        assert!(!debug_str.contains("0712345678"));
        assert!(!debug_str.contains("12345678"));
    }

    #[test]
    fn test_into_caregiver_carries_fields() {
        let new = NewCaregiver::new("Sarah Akinyi", "0723456789", WardId(4));
        let caregiver = new.into_caregiver(CaregiverId(3));

        assert_eq!(caregiver.id, CaregiverId(3));
        assert_eq!(caregiver.names, "Sarah Akinyi");
        assert_eq!(caregiver.phone.as_deref(), Some("0723456789"));
        assert_eq!(caregiver.hiv_status, HivStatus::Unknown);
    }
}
