use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tumikia_core_types::{CaregiverId, CboId, FacilityId, OvcId, SchoolId, WardId};

use crate::age::AgeRange;

/// Gender of a registrant or caregiver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HIV status of a registrant or caregiver
///
/// `Exposed` is the HEI (HIV-exposed infant) status and applies to
/// registrants only; the remaining values are shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HivStatus {
    Unknown,
    Positive,
    Negative,
    Exposed,
    #[serde(rename = "Declined to Disclose")]
    DeclinedToDisclose,
}

impl HivStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HivStatus::Unknown => "Unknown",
            HivStatus::Positive => "Positive",
            HivStatus::Negative => "Negative",
            HivStatus::Exposed => "Exposed",
            HivStatus::DeclinedToDisclose => "Declined to Disclose",
        }
    }
}

impl std::fmt::Display for HivStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for HivStatus {
    fn default() -> Self {
        HivStatus::Unknown
    }
}

/// ART treatment status, captured only for HIV-positive registrants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArtStatus {
    #[serde(rename = "On ART")]
    OnArt,
    #[serde(rename = "Not on ART")]
    NotOnArt,
    Defaulted,
}

impl ArtStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtStatus::OnArt => "On ART",
            ArtStatus::NotOnArt => "Not on ART",
            ArtStatus::Defaulted => "Defaulted",
        }
    }
}

impl std::fmt::Display for ArtStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Viral suppression status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suppression {
    Suppressed,
    #[serde(rename = "Not Suppressed")]
    NotSuppressed,
    Unknown,
}

impl Suppression {
    pub fn as_str(&self) -> &'static str {
        match self {
            Suppression::Suppressed => "Suppressed",
            Suppression::NotSuppressed => "Not Suppressed",
            Suppression::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Suppression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// School level of a registrant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchoolLevel {
    #[serde(rename = "Not Applicable")]
    NotApplicable,
    #[serde(rename = "Pre-Primary")]
    PrePrimary,
    #[serde(rename = "Lower Primary")]
    LowerPrimary,
    #[serde(rename = "Upper Primary")]
    UpperPrimary,
    #[serde(rename = "Junior Secondary")]
    JuniorSecondary,
    #[serde(rename = "Senior Secondary")]
    SeniorSecondary,
    Tertiary,
    #[serde(rename = "Not in School")]
    NotInSchool,
}

impl SchoolLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchoolLevel::NotApplicable => "Not Applicable",
            SchoolLevel::PrePrimary => "Pre-Primary",
            SchoolLevel::LowerPrimary => "Lower Primary",
            SchoolLevel::UpperPrimary => "Upper Primary",
            SchoolLevel::JuniorSecondary => "Junior Secondary",
            SchoolLevel::SeniorSecondary => "Senior Secondary",
            SchoolLevel::Tertiary => "Tertiary",
            SchoolLevel::NotInSchool => "Not in School",
        }
    }

    /// Whether this level counts as "in school" for reporting
    pub fn in_school(&self) -> bool {
        !matches!(self, SchoolLevel::NotApplicable | SchoolLevel::NotInSchool)
    }
}

impl std::fmt::Display for SchoolLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relationship of a caregiver to the registrant
///
/// `Other` is paired with a free-text `other_relationship` override on the
/// record carrying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relationship {
    Mother,
    Father,
    Grandmother,
    Grandfather,
    Aunt,
    Uncle,
    Sibling,
    Guardian,
    #[serde(rename = "Foster Parent")]
    FosterParent,
    Other,
}

impl Relationship {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::Mother => "Mother",
            Relationship::Father => "Father",
            Relationship::Grandmother => "Grandmother",
            Relationship::Grandfather => "Grandfather",
            Relationship::Aunt => "Aunt",
            Relationship::Uncle => "Uncle",
            Relationship::Sibling => "Sibling",
            Relationship::Guardian => "Guardian",
            Relationship::FosterParent => "Foster Parent",
            Relationship::Other => "Other",
        }
    }
}

impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a parent is alive; absence of the whole field means unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Parental {
    Yes,
    No,
}

impl Parental {
    pub fn as_str(&self) -> &'static str {
        match self {
            Parental::Yes => "Yes",
            Parental::No => "No",
        }
    }
}

impl std::fmt::Display for Parental {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// OVC registration record
///
/// The flat record assembled by the wizard's submit action. Optional foreign
/// keys mean "unknown / not applicable", never an error. Records are
/// append-only; ids come from the store's monotonic counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub id: OvcId,
    pub names: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,

    /// Completed years at registration time
    pub age: i32,
    pub age_range: AgeRange,

    pub birth_certificate: bool,
    pub birth_certificate_number: Option<String>,
    pub disability: Option<String>,
    pub ncpwd_number: Option<String>,

    pub hiv_status: HivStatus,
    pub art_status: Option<ArtStatus>,
    pub facility_id: Option<FacilityId>,
    pub date_of_linkage: Option<NaiveDate>,
    pub ccc_number: Option<String>,
    pub viral_load: Option<String>,
    pub suppression: Option<Suppression>,

    pub father_alive: Option<Parental>,
    pub mother_alive: Option<Parental>,

    pub school_level: Option<SchoolLevel>,
    pub school_id: Option<SchoolId>,
    pub class_grade: Option<String>,
    pub immunization: Option<String>,
    pub eligibility: Option<String>,

    pub ward_id: WardId,
    pub cbo_id: Option<CboId>,
    pub caregiver_id: Option<CaregiverId>,
    pub caregiver_relation: Option<Relationship>,
    pub other_relationship: Option<String>,

    pub registration_date: NaiveDate,
}

impl Registration {
    /// Whether the registrant was a child (0-17 completed years) at
    /// registration time
    pub fn is_child(&self) -> bool {
        crate::age::is_child(self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hiv_status_strings() {
        assert_eq!(HivStatus::Positive.as_str(), "Positive");
        assert_eq!(
            HivStatus::DeclinedToDisclose.as_str(),
            "Declined to Disclose"
        );
    }

    #[test]
    fn test_hiv_status_serde_round_trip() {
        let json = serde_json::to_string(&HivStatus::DeclinedToDisclose).unwrap();
        assert_eq!(json, "\"Declined to Disclose\"");
        let back: HivStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, HivStatus::DeclinedToDisclose);
    }

    #[test]
    fn test_school_level_in_school() {
        assert!(SchoolLevel::LowerPrimary.in_school());
        assert!(SchoolLevel::Tertiary.in_school());
        assert!(!SchoolLevel::NotInSchool.in_school());
        assert!(!SchoolLevel::NotApplicable.in_school());
    }

    #[test]
    fn test_art_status_strings() {
        assert_eq!(ArtStatus::OnArt.as_str(), "On ART");
        assert_eq!(ArtStatus::NotOnArt.as_str(), "Not on ART");
    }

    #[test]
    fn test_relationship_foster_parent_rename() {
        let json = serde_json::to_string(&Relationship::FosterParent).unwrap();
        assert_eq!(json, "\"Foster Parent\"");
    }
}
