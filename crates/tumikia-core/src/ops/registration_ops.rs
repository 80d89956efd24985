use chrono::NaiveDate;
use tumikia_core_types::{CaregiverId, OvcId, WardId};

use super::store::Store;
use crate::age;
use crate::errors::{RegistryError, Result};
use crate::model::form::RegistrationDraft;
use crate::model::registration::{HivStatus, Relationship};
use crate::model::{Caregiver, Registration};
use crate::rules::step_rules;
use crate::wizard::WizardStep;

/// Result of a successful registration submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub ovc_id: OvcId,
    /// The caregiver the registration references - freshly created when the
    /// draft carried new-caregiver details
    pub caregiver_id: Option<CaregiverId>,
    /// Registrant name, echoed for the success notification
    pub names: String,
}

/// Build and append a registration from a completed draft
///
/// Re-runs the terminal-step validation and re-checks the step-1 structural
/// fields (the record cannot be built without a ward, name, gender and birth
/// date). All checks precede the first append, so a failed submit mutates
/// nothing; when the draft carries new-caregiver details, the caregiver is
/// appended before the registration so the back-reference always resolves.
///
/// Blank optional inputs are coerced to absent, never stored as empty
/// strings. Fields of hidden conditional sections (ART details without a
/// Positive status, school sub-fields while not attending) are dropped at
/// build time.
///
/// # Errors
/// * `ValidationFailed` - required fields missing (advisory; nothing mutated)
/// * `WardNotFound` - the selected ward does not resolve
pub fn submit(
    store: &mut Store,
    draft: &RegistrationDraft,
    today: NaiveDate,
) -> Result<SubmitOutcome> {
    // Terminal-step validation, exactly what the submit button re-runs
    let missing = step_rules::missing_fields(WizardStep::Caregiver, draft);
    if !missing.is_empty() {
        return Err(RegistryError::ValidationFailed {
            step: WizardStep::Caregiver,
            missing,
        });
    }

    // Structural re-check of step 1: these passed on the way here when the
    // wizard was driven normally, but the record cannot exist without them.
    let step1_missing = step_rules::missing_fields(WizardStep::Location, draft);
    if !step1_missing.is_empty() {
        return Err(RegistryError::ValidationFailed {
            step: WizardStep::Location,
            missing: step1_missing,
        });
    }

    // Step-1 validation above guarantees all three
    let (Some(ward_id), Some(dob), Some(gender)) =
        (draft.location.ward(), draft.date_of_birth, draft.gender)
    else {
        return Err(RegistryError::Internal {
            message: "step-1 fields absent after validation".to_string(),
        });
    };
    store.get_ward(ward_id)?;

    let caregiver_id = resolve_caregiver(store, draft, ward_id)?;

    let computed_age = age::age_in_years(dob, today);

    let hiv_positive = draft.hiv_status == HivStatus::Positive;
    let other_relationship = if draft.relationship == Some(Relationship::Other) {
        blank_to_none(&draft.other_relationship)
    } else {
        None
    };

    let id = store.allocate_ovc_id();
    let registration = Registration {
        id,
        names: draft.names.trim().to_string(),
        gender,
        date_of_birth: dob,
        age: computed_age,
        age_range: age::age_range(computed_age),
        birth_certificate: draft.has_birth_certificate,
        birth_certificate_number: if draft.has_birth_certificate {
            blank_to_none(&draft.birth_certificate_number)
        } else {
            None
        },
        disability: blank_to_none(&draft.disability),
        ncpwd_number: blank_to_none(&draft.ncpwd_number),
        hiv_status: draft.hiv_status,
        art_status: if hiv_positive { draft.art_status } else { None },
        facility_id: if hiv_positive { draft.facility } else { None },
        date_of_linkage: if hiv_positive {
            draft.date_of_linkage
        } else {
            None
        },
        ccc_number: if hiv_positive {
            blank_to_none(&draft.ccc_number)
        } else {
            None
        },
        viral_load: if hiv_positive {
            blank_to_none(&draft.viral_load)
        } else {
            None
        },
        suppression: if hiv_positive { draft.suppression } else { None },
        father_alive: draft.father_alive,
        mother_alive: draft.mother_alive,
        school_level: draft.school_level,
        school_id: if draft.attends_school {
            draft.school
        } else {
            None
        },
        class_grade: if draft.attends_school {
            blank_to_none(&draft.class_grade)
        } else {
            None
        },
        immunization: blank_to_none(&draft.immunization),
        eligibility: blank_to_none(&draft.eligibility),
        ward_id,
        cbo_id: draft.cbo,
        caregiver_id,
        caregiver_relation: draft.relationship,
        other_relationship,
        registration_date: today,
    };
    let names = registration.names.clone();
    store.insert_registration(registration);

    Ok(SubmitOutcome {
        ovc_id: id,
        caregiver_id,
        names,
    })
}

/// Resolve the caregiver reference for a submission
///
/// An existing selection wins; otherwise new-caregiver details allocate and
/// append a fresh caregiver; otherwise the reference is absent. Runs before
/// the registration append so the reference always points at a stored
/// record.
fn resolve_caregiver(
    store: &mut Store,
    draft: &RegistrationDraft,
    ward_id: WardId,
) -> Result<Option<CaregiverId>> {
    if let Some(existing) = draft.existing_caregiver {
        store.get_caregiver(existing)?;
        return Ok(Some(existing));
    }

    if !draft.entering_new_caregiver() {
        return Ok(None);
    }

    let id = store.allocate_caregiver_id();
    store.insert_caregiver(Caregiver {
        id,
        names: draft.caregiver_names.trim().to_string(),
        gender: draft.caregiver_gender,
        national_id: blank_to_none(&draft.caregiver_national_id),
        phone: blank_to_none(&draft.caregiver_phone),
        hiv_status: draft.caregiver_hiv_status,
        relation: draft.relationship,
        caregiver_type: draft.caregiver_type,
        ward_id,
    });
    Ok(Some(id))
}

/// Empty-after-trim strings become absent, never stored as ""
fn blank_to_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
