//! Seed format, schema version 0
//!
//! The on-disk field names follow the upstream Tumikia data structure
//! (`county_id` / `county_name` and so on); the importer maps them onto the
//! registry's models. Enumerated fields decode directly into the domain
//! enums, so an unknown HIV status or school level fails at parse time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use tumikia_core::model::{
    ArtStatus, CaregiverType, Gender, HivStatus, Relationship, SchoolLevel,
};

/// A complete seed document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedV0 {
    pub schema_version: u32,
    #[serde(default)]
    pub counties: Vec<SeedCounty>,
    #[serde(default)]
    pub constituencies: Vec<SeedConstituency>,
    #[serde(default)]
    pub wards: Vec<SeedWard>,
    #[serde(default)]
    pub cbos: Vec<SeedCbo>,
    #[serde(default)]
    pub schools: Vec<SeedSchool>,
    #[serde(default)]
    pub facilities: Vec<SeedFacility>,
    #[serde(default)]
    pub chv_users: Vec<SeedChv>,
    #[serde(default)]
    pub caregivers: Vec<SeedCaregiver>,
    #[serde(default)]
    pub registrations: Vec<SeedRegistration>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedCounty {
    pub county_id: u32,
    pub county_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConstituency {
    pub constituency_id: u32,
    pub constituency_name: String,
    pub county_id: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedWard {
    pub ward_id: u32,
    pub ward_name: String,
    pub constituency_id: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedCbo {
    pub cbo_id: u32,
    pub cbo_name: String,
    pub ward_id: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedSchool {
    pub school_id: u32,
    pub school_name: String,
    pub ward_id: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedFacility {
    pub facility_id: u32,
    pub facility_name: String,
    #[serde(default)]
    pub facility_mfl_code: Option<String>,
    pub ward_id: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedChv {
    pub chv_id: u32,
    pub chv_names: String,
    pub ward_id: u32,
    pub cbo_id: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedCaregiver {
    pub caregiver_id: u32,
    pub caregiver_names: String,
    #[serde(default)]
    pub caregiver_gender: Option<Gender>,
    #[serde(default)]
    pub caregiver_national_id: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub caregiver_hiv_status: HivStatus,
    #[serde(default)]
    pub caregiver_relation: Option<Relationship>,
    #[serde(default)]
    pub caregiver_type: Option<CaregiverType>,
    pub ward_id: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedRegistration {
    pub ovc_id: u32,
    pub ovc_names: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub ovc_hiv_status: HivStatus,
    #[serde(default)]
    pub art_status: Option<ArtStatus>,
    #[serde(default)]
    pub facility_id: Option<u32>,
    pub ward_id: u32,
    #[serde(default)]
    pub caregiver_id: Option<u32>,
    #[serde(default)]
    pub school_id: Option<u32>,
    #[serde(default)]
    pub cbo_id: Option<u32>,
    #[serde(default)]
    pub school_level: Option<SchoolLevel>,
    #[serde(default)]
    pub caregiver_relation: Option<Relationship>,
    pub registration_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_document_decodes() {
        let yaml = "schema_version: 0\n";
        let seed: SeedV0 = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(seed.schema_version, 0);
        assert!(seed.counties.is_empty());
        assert!(seed.registrations.is_empty());
    }

    #[test]
    fn test_enum_fields_decode_display_strings() {
        let yaml = r#"
schema_version: 0
caregivers:
  - caregiver_id: 2
    caregiver_names: "Sarah Akinyi"
    phone: "0723456789"
    caregiver_hiv_status: "Positive"
    caregiver_relation: "Grandmother"
    ward_id: 4
"#;
        let seed: SeedV0 = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(seed.caregivers[0].caregiver_hiv_status, HivStatus::Positive);
        assert_eq!(
            seed.caregivers[0].caregiver_relation,
            Some(Relationship::Grandmother)
        );
    }

    #[test]
    fn test_unknown_enum_value_fails() {
        let yaml = r#"
schema_version: 0
caregivers:
  - caregiver_id: 1
    caregiver_names: "Mary Wanjiku"
    caregiver_hiv_status: "Maybe"
    ward_id: 1
"#;
        assert!(serde_yaml::from_str::<SeedV0>(yaml).is_err());
    }
}
