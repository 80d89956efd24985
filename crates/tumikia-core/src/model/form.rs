//! Typed form data for the registration wizard
//!
//! The draft replaces field-by-name lookups with a record of named, typed
//! fields assembled once and validated against the declared per-step
//! required sets in `rules::step_rules`. Free-text fields stay `String`
//! until submit, when blanks are coerced to absent.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tumikia_core_types::{CaregiverId, CboId, FacilityId, SchoolId};

use super::caregiver::CaregiverType;
use super::registration::{
    ArtStatus, Gender, HivStatus, Parental, Relationship, SchoolLevel, Suppression,
};
use crate::errors::{RegistryError, Result};
use crate::selector::LocationSelector;

/// Identity of a single form field, used in validation reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldId {
    County,
    Constituency,
    Ward,
    Cbo,
    FullName,
    Gender,
    DateOfBirth,
    BirthCertificate,
    BirthCertificateNumber,
    Disability,
    NcpwdNumber,
    HivStatus,
    ArtStatus,
    Facility,
    DateOfLinkage,
    CccNumber,
    ViralLoad,
    Suppression,
    FatherAlive,
    MotherAlive,
    AttendsSchool,
    SchoolLevel,
    School,
    ClassGrade,
    Immunization,
    Eligibility,
    CaregiverSelect,
    CaregiverNames,
    CaregiverGender,
    CaregiverNationalId,
    CaregiverPhone,
    CaregiverHivStatus,
    CaregiverType,
    Relationship,
    OtherRelationship,
}

impl FieldId {
    /// Human-readable label, used in validation notices
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::County => "County",
            FieldId::Constituency => "Constituency",
            FieldId::Ward => "Ward",
            FieldId::Cbo => "CBO",
            FieldId::FullName => "Full Name",
            FieldId::Gender => "Gender",
            FieldId::DateOfBirth => "Date of Birth",
            FieldId::BirthCertificate => "Has Birth Certificate",
            FieldId::BirthCertificateNumber => "Birth Certificate Number",
            FieldId::Disability => "Disability",
            FieldId::NcpwdNumber => "NCPWD Number",
            FieldId::HivStatus => "HIV Status",
            FieldId::ArtStatus => "ART Status",
            FieldId::Facility => "Health Facility",
            FieldId::DateOfLinkage => "Date of Linkage",
            FieldId::CccNumber => "CCC Number",
            FieldId::ViralLoad => "Viral Load",
            FieldId::Suppression => "Suppression Status",
            FieldId::FatherAlive => "Father Alive?",
            FieldId::MotherAlive => "Mother Alive?",
            FieldId::AttendsSchool => "Attends School",
            FieldId::SchoolLevel => "School Level",
            FieldId::School => "School",
            FieldId::ClassGrade => "Class/Grade",
            FieldId::Immunization => "Immunization Status",
            FieldId::Eligibility => "Eligibility Notes",
            FieldId::CaregiverSelect => "Caregiver",
            FieldId::CaregiverNames => "Caregiver Full Name",
            FieldId::CaregiverGender => "Caregiver Gender",
            FieldId::CaregiverNationalId => "Caregiver National ID",
            FieldId::CaregiverPhone => "Caregiver Phone Number",
            FieldId::CaregiverHivStatus => "Caregiver HIV Status",
            FieldId::CaregiverType => "Caregiver Type",
            FieldId::Relationship => "Relationship to OVC",
            FieldId::OtherRelationship => "Relationship (Specify)",
        }
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The in-progress registration, one draft per wizard session
///
/// Discarded (reset to default) after a successful submit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegistrationDraft {
    // Step 1: location & basic information
    pub location: LocationSelector,
    pub cbo: Option<CboId>,
    pub names: String,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
    pub has_birth_certificate: bool,
    pub birth_certificate_number: String,
    pub disability: String,
    pub ncpwd_number: String,

    // Step 2: health & education
    pub hiv_status: HivStatus,
    pub art_status: Option<ArtStatus>,
    pub facility: Option<FacilityId>,
    pub date_of_linkage: Option<NaiveDate>,
    pub ccc_number: String,
    pub viral_load: String,
    pub suppression: Option<Suppression>,
    pub father_alive: Option<Parental>,
    pub mother_alive: Option<Parental>,
    pub attends_school: bool,
    pub school_level: Option<SchoolLevel>,
    pub school: Option<SchoolId>,
    pub class_grade: String,
    pub immunization: String,
    pub eligibility: String,

    // Step 3: caregiver
    pub existing_caregiver: Option<CaregiverId>,
    pub caregiver_names: String,
    pub caregiver_gender: Option<Gender>,
    pub caregiver_national_id: String,
    pub caregiver_phone: String,
    pub caregiver_hiv_status: HivStatus,
    pub caregiver_type: Option<CaregiverType>,
    pub relationship: Option<Relationship>,
    pub other_relationship: String,
}

impl RegistrationDraft {
    /// Create a blank draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a free-text change to its field
    ///
    /// # Errors
    /// Returns `FieldNotText` for fields that are selections, dates or
    /// toggles rather than free text.
    pub fn apply_text(&mut self, field: FieldId, value: String) -> Result<()> {
        match field {
            FieldId::FullName => self.names = value,
            FieldId::BirthCertificateNumber => self.birth_certificate_number = value,
            FieldId::Disability => self.disability = value,
            FieldId::NcpwdNumber => self.ncpwd_number = value,
            FieldId::CccNumber => self.ccc_number = value,
            FieldId::ViralLoad => self.viral_load = value,
            FieldId::ClassGrade => self.class_grade = value,
            FieldId::Immunization => self.immunization = value,
            FieldId::Eligibility => self.eligibility = value,
            FieldId::CaregiverNames => self.caregiver_names = value,
            FieldId::CaregiverNationalId => self.caregiver_national_id = value,
            FieldId::CaregiverPhone => self.caregiver_phone = value,
            FieldId::OtherRelationship => self.other_relationship = value,
            other => return Err(RegistryError::FieldNotText { field: other }),
        }
        Ok(())
    }

    /// Completed-years age against a reference date, if a birth date is set
    pub fn age(&self, today: NaiveDate) -> Option<i32> {
        self.date_of_birth
            .map(|dob| crate::age::age_in_years(dob, today))
    }

    /// Whether the draft describes a child registration (0-17 years)
    pub fn is_child(&self, today: NaiveDate) -> bool {
        self.age(today).is_some_and(crate::age::is_child)
    }

    /// Whether this submission would create a new caregiver: no existing
    /// caregiver is selected and at least one new-caregiver detail was
    /// entered.
    pub fn entering_new_caregiver(&self) -> bool {
        self.existing_caregiver.is_none()
            && (!self.caregiver_names.trim().is_empty()
                || !self.caregiver_phone.trim().is_empty()
                || !self.caregiver_national_id.trim().is_empty()
                || self.caregiver_gender.is_some()
                || self.caregiver_type.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_text_routes_to_field() {
        let mut draft = RegistrationDraft::new();
        draft
            .apply_text(FieldId::FullName, "John Kamau".to_string())
            .unwrap();
        assert_eq!(draft.names, "John Kamau");
    }

    #[test]
    fn test_apply_text_rejects_non_text_field() {
        let mut draft = RegistrationDraft::new();
        let err = draft
            .apply_text(FieldId::Gender, "Male".to_string())
            .unwrap_err();
        assert_eq!(err, RegistryError::FieldNotText { field: FieldId::Gender });
    }

    #[test]
    fn test_entering_new_caregiver() {
        let mut draft = RegistrationDraft::new();
        assert!(!draft.entering_new_caregiver());

        draft.caregiver_names = "Mary Wanjiku".to_string();
        assert!(draft.entering_new_caregiver());

        // An existing selection always wins
        draft.existing_caregiver = Some(CaregiverId(1));
        assert!(!draft.entering_new_caregiver());
    }

    #[test]
    fn test_child_flag_follows_date_of_birth() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let mut draft = RegistrationDraft::new();
        assert!(!draft.is_child(today));

        draft.date_of_birth = NaiveDate::from_ymd_opt(2015, 5, 10);
        assert!(draft.is_child(today));

        draft.date_of_birth = NaiveDate::from_ymd_opt(1990, 5, 10);
        assert!(!draft.is_child(today));
    }
}
