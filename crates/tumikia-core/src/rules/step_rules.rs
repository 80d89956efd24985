//! Per-step required fields and conditional section visibility
//!
//! The required sets are declared per step; `missing_fields` checks the
//! required-and-visible fields of one step against the typed draft. Section
//! visibility reacts to sibling field values and is independent of step
//! transitions.

use chrono::NaiveDate;

use crate::model::form::{FieldId, RegistrationDraft};
use crate::model::registration::{HivStatus, Relationship};
use crate::wizard::WizardStep;

/// Fields always required on step 1
const REQUIRED_LOCATION: &[FieldId] = &[
    FieldId::County,
    FieldId::Constituency,
    FieldId::Ward,
    FieldId::FullName,
    FieldId::Gender,
    FieldId::DateOfBirth,
];

/// Fields always required on step 2
const REQUIRED_HEALTH: &[FieldId] = &[FieldId::HivStatus];

/// Fields always required on step 3
const REQUIRED_CAREGIVER: &[FieldId] = &[FieldId::Relationship];

/// The required fields of a step for the given draft
///
/// Step 3 additionally requires the new caregiver's name and phone when the
/// submission is actually creating one (no existing caregiver selected and
/// new-caregiver details entered).
pub fn required_fields(step: WizardStep, draft: &RegistrationDraft) -> Vec<FieldId> {
    match step {
        WizardStep::Location => REQUIRED_LOCATION.to_vec(),
        WizardStep::Health => REQUIRED_HEALTH.to_vec(),
        WizardStep::Caregiver => {
            let mut fields = REQUIRED_CAREGIVER.to_vec();
            if draft.entering_new_caregiver() {
                fields.push(FieldId::CaregiverNames);
                fields.push(FieldId::CaregiverPhone);
            }
            fields
        }
    }
}

/// Required fields of the step that are missing or blank in the draft
///
/// A field passes with any non-empty trimmed value. Enum-backed selects
/// with a default option (HIV status) always pass, exactly as a select
/// element that cannot be blank.
pub fn missing_fields(step: WizardStep, draft: &RegistrationDraft) -> Vec<FieldId> {
    required_fields(step, draft)
        .into_iter()
        .filter(|field| !is_present(*field, draft))
        .collect()
}

fn is_present(field: FieldId, draft: &RegistrationDraft) -> bool {
    match field {
        FieldId::County => draft.location.county().is_some(),
        FieldId::Constituency => draft.location.constituency().is_some(),
        FieldId::Ward => draft.location.ward().is_some(),
        FieldId::FullName => !draft.names.trim().is_empty(),
        FieldId::Gender => draft.gender.is_some(),
        FieldId::DateOfBirth => draft.date_of_birth.is_some(),
        // The HIV select defaults to Unknown and can never be blank
        FieldId::HivStatus => true,
        FieldId::Relationship => draft.relationship.is_some(),
        FieldId::CaregiverNames => !draft.caregiver_names.trim().is_empty(),
        FieldId::CaregiverPhone => !draft.caregiver_phone.trim().is_empty(),
        // Remaining fields are never required
        _ => true,
    }
}

/// Which conditional sub-sections are visible / enabled for a draft
///
/// Recomputed whenever a sibling field changes; step transitions do not
/// affect it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionVisibility {
    /// School sub-fields (school, class/grade) - shown while attending
    pub school_section: bool,
    /// Certificate-number input - enabled only with a birth certificate
    pub birth_certificate_number_enabled: bool,
    /// ART & treatment detail block - shown only for HIV-positive status
    pub hiv_positive_section: bool,
    /// Free-text relationship override - shown for "Other"
    pub other_relationship_field: bool,
    /// Child-specific section - shown for registrants aged 0-17
    pub child_section: bool,
    /// Adult notice on the caregiver step - shown for registrants 18+
    pub adult_notice: bool,
    /// Inline new-caregiver form - shown while no existing caregiver picked
    pub new_caregiver_form: bool,
}

/// Compute section visibility from sibling field values
pub fn section_visibility(draft: &RegistrationDraft, today: NaiveDate) -> SectionVisibility {
    let age = draft.age(today);
    SectionVisibility {
        school_section: draft.attends_school,
        birth_certificate_number_enabled: draft.has_birth_certificate,
        hiv_positive_section: draft.hiv_status == HivStatus::Positive,
        other_relationship_field: draft.relationship == Some(Relationship::Other),
        child_section: draft.is_child(today),
        adult_notice: age.is_some_and(|a| a >= 18),
        new_caregiver_form: draft.existing_caregiver.is_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tumikia_core_types::{CaregiverId, ConstituencyId, CountyId, WardId};

    use crate::model::registration::Gender;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()
    }

    fn step1_complete_draft() -> RegistrationDraft {
        let mut draft = RegistrationDraft::new();
        draft.location.select_county(Some(CountyId(1)));
        draft.location.select_constituency(Some(ConstituencyId(1)));
        draft.location.select_ward(Some(WardId(1)));
        draft.names = "John Kamau".to_string();
        draft.gender = Some(Gender::Male);
        draft.date_of_birth = NaiveDate::from_ymd_opt(2015, 5, 10);
        draft
    }

    #[test]
    fn test_blank_draft_misses_all_step1_fields() {
        let draft = RegistrationDraft::new();
        let missing = missing_fields(WizardStep::Location, &draft);
        assert_eq!(missing.len(), REQUIRED_LOCATION.len());
    }

    #[test]
    fn test_complete_step1_has_no_missing_fields() {
        let draft = step1_complete_draft();
        assert!(missing_fields(WizardStep::Location, &draft).is_empty());
    }

    #[test]
    fn test_whitespace_name_counts_as_blank() {
        let mut draft = step1_complete_draft();
        draft.names = "   ".to_string();
        let missing = missing_fields(WizardStep::Location, &draft);
        assert_eq!(missing, vec![FieldId::FullName]);
    }

    #[test]
    fn test_health_step_passes_with_default_hiv_status() {
        let draft = RegistrationDraft::new();
        assert!(missing_fields(WizardStep::Health, &draft).is_empty());
    }

    #[test]
    fn test_caregiver_step_requires_relationship() {
        let draft = RegistrationDraft::new();
        let missing = missing_fields(WizardStep::Caregiver, &draft);
        assert_eq!(missing, vec![FieldId::Relationship]);
    }

    #[test]
    fn test_new_caregiver_details_require_name_and_phone() {
        let mut draft = RegistrationDraft::new();
        draft.relationship = Some(Relationship::Mother);
        draft.caregiver_names = "Mary Wanjiku".to_string();

        let missing = missing_fields(WizardStep::Caregiver, &draft);
        assert_eq!(missing, vec![FieldId::CaregiverPhone]);

        draft.caregiver_phone = "0712345678".to_string();
        assert!(missing_fields(WizardStep::Caregiver, &draft).is_empty());
    }

    #[test]
    fn test_existing_caregiver_needs_no_new_details() {
        let mut draft = RegistrationDraft::new();
        draft.relationship = Some(Relationship::Guardian);
        draft.existing_caregiver = Some(CaregiverId(1));
        assert!(missing_fields(WizardStep::Caregiver, &draft).is_empty());
    }

    #[test]
    fn test_hiv_positive_reveals_art_section() {
        let mut draft = RegistrationDraft::new();
        assert!(!section_visibility(&draft, today()).hiv_positive_section);

        draft.hiv_status = HivStatus::Positive;
        assert!(section_visibility(&draft, today()).hiv_positive_section);

        // Any other value hides it again
        draft.hiv_status = HivStatus::Exposed;
        assert!(!section_visibility(&draft, today()).hiv_positive_section);
    }

    #[test]
    fn test_child_and_adult_sections_from_date_of_birth() {
        let mut draft = RegistrationDraft::new();
        let sections = section_visibility(&draft, today());
        assert!(!sections.child_section);
        assert!(!sections.adult_notice);

        draft.date_of_birth = NaiveDate::from_ymd_opt(2015, 5, 10);
        let sections = section_visibility(&draft, today());
        assert!(sections.child_section);
        assert!(!sections.adult_notice);

        draft.date_of_birth = NaiveDate::from_ymd_opt(1990, 5, 10);
        let sections = section_visibility(&draft, today());
        assert!(!sections.child_section);
        assert!(sections.adult_notice);
    }

    #[test]
    fn test_other_relationship_toggle() {
        let mut draft = RegistrationDraft::new();
        draft.relationship = Some(Relationship::Other);
        assert!(section_visibility(&draft, today()).other_relationship_field);

        draft.relationship = Some(Relationship::Aunt);
        assert!(!section_visibility(&draft, today()).other_relationship_field);
    }
}
