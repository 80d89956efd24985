//! Markdown detail fragments for single records
//!
//! Detail views show a line only when the datum is present; an absent
//! optional reference simply renders nothing, it is not an error.

use chrono::NaiveDate;
use tumikia_core_types::{CaregiverId, OvcId};

use crate::errors::Result;
use crate::ops::Store;
use crate::queries::record_queries;

/// Render one registration: basic, health, education and caregiver sections
///
/// # Errors
/// Returns `RegistrationNotFound` if the id does not resolve.
pub fn registration_detail(store: &Store, ovc_id: OvcId) -> Result<String> {
    let record = store.get_registration(ovc_id)?;

    let mut output = String::new();
    output.push_str("### Basic Information\n\n");
    output.push_str(&format!("**Name**: {}\n", record.names));
    output.push_str(&format!("**Gender**: {}\n", record.gender));
    output.push_str(&format!(
        "**Date of Birth**: {} ({} years)\n",
        format_date(record.date_of_birth),
        record.age
    ));
    output.push_str(&format!("**Age Range**: {}\n", record.age_range));
    if let Ok(ward) = store.get_ward(record.ward_id) {
        output.push_str(&format!("**Ward**: {}\n", ward.name));
    }
    if record.birth_certificate {
        let number = record
            .birth_certificate_number
            .as_deref()
            .unwrap_or("Yes");
        output.push_str(&format!("**Birth Certificate**: {}\n", number));
    }
    if let Some(disability) = &record.disability {
        output.push_str(&format!("**Disability**: {}\n", disability));
    }

    output.push_str("\n### Health Information\n\n");
    output.push_str(&format!("**HIV Status**: {}\n", record.hiv_status));
    if let Some(art_status) = record.art_status {
        output.push_str(&format!("**ART Status**: {}\n", art_status));
    }
    if let Some(facility_id) = record.facility_id {
        if let Ok(facility) = store.get_facility(facility_id) {
            output.push_str(&format!("**Health Facility**: {}\n", facility.name));
        }
    }
    if let Some(ccc_number) = &record.ccc_number {
        output.push_str(&format!("**CCC Number**: {}\n", ccc_number));
    }
    if let Some(viral_load) = &record.viral_load {
        let suppression = record
            .suppression
            .map(|s| s.as_str())
            .unwrap_or("Unknown");
        output.push_str(&format!("**Viral Load**: {} ({})\n", viral_load, suppression));
    }

    output.push_str("\n### Education\n\n");
    let school_level = record
        .school_level
        .map(|level| level.as_str())
        .unwrap_or("N/A");
    output.push_str(&format!("**School Level**: {}\n", school_level));
    if let Some(school_id) = record.school_id {
        if let Ok(school) = store.get_school(school_id) {
            output.push_str(&format!("**School**: {}\n", school.name));
        }
    }
    if let Some(class_grade) = &record.class_grade {
        output.push_str(&format!("**Class/Grade**: {}\n", class_grade));
    }

    if let Some(caregiver_id) = record.caregiver_id {
        if let Ok(caregiver) = store.get_caregiver(caregiver_id) {
            output.push_str("\n### Caregiver\n\n");
            output.push_str(&format!("**Name**: {}\n", caregiver.names));
            let phone = caregiver.phone.as_deref().unwrap_or("N/A");
            output.push_str(&format!("**Phone**: {}\n", phone));
            output.push_str(&format!("**HIV Status**: {}\n", caregiver.hiv_status));
            let relation = record
                .other_relationship
                .as_deref()
                .or(record.caregiver_relation.map(|r| r.as_str()))
                .unwrap_or("N/A");
            output.push_str(&format!("**Relationship**: {}\n", relation));
        }
    }

    output.push_str(&format!(
        "\nRegistered: {}\n",
        format_date(record.registration_date)
    ));
    Ok(output)
}

/// Render one caregiver with the OVCs under their care
///
/// # Errors
/// Returns `CaregiverNotFound` if the id does not resolve.
pub fn caregiver_detail(store: &Store, caregiver_id: CaregiverId) -> Result<String> {
    let caregiver = store.get_caregiver(caregiver_id)?;

    let mut output = String::new();
    output.push_str(&format!("**Name**: {}\n", caregiver.names));
    output.push_str(&format!(
        "**Phone**: {}\n",
        caregiver.phone.as_deref().unwrap_or("N/A")
    ));
    if let Some(gender) = caregiver.gender {
        output.push_str(&format!("**Gender**: {}\n", gender));
    }
    if let Some(national_id) = &caregiver.national_id {
        output.push_str(&format!("**National ID**: {}\n", national_id));
    }
    output.push_str(&format!("**HIV Status**: {}\n", caregiver.hiv_status));

    let ovcs = record_queries::ovcs_of_caregiver(store, caregiver_id);
    output.push_str(&format!("\n### OVCs under care ({})\n\n", ovcs.len()));
    if ovcs.is_empty() {
        output.push_str("No OVCs registered\n");
    } else {
        for ovc in ovcs {
            let relation = ovc
                .caregiver_relation
                .map(|r| r.as_str())
                .unwrap_or("N/A");
            output.push_str(&format!(
                "- {} ({} years) - {}\n",
                ovc.names, ovc.age, relation
            ));
        }
    }
    Ok(output)
}

/// Short date form used across the detail and table fragments
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tumikia_core_types::{ConstituencyId, CountyId, WardId};

    use crate::model::form::RegistrationDraft;
    use crate::model::registration::{Gender, HivStatus, Relationship};
    use crate::model::{Constituency, County, Ward};
    use crate::ops::registration_ops;

    fn seeded_store() -> Store {
        let mut store = Store::new();
        store.insert_county(County::new(CountyId(1), "Mombasa"));
        store.insert_constituency(Constituency::new(ConstituencyId(1), "Changamwe", CountyId(1)));
        store.insert_ward(Ward::new(WardId(1), "Port Reitz", ConstituencyId(1)));
        store
    }

    fn submit_one(store: &mut Store) -> registration_ops::SubmitOutcome {
        let mut draft = RegistrationDraft::new();
        draft.location.select_county(Some(CountyId(1)));
        draft.location.select_constituency(Some(ConstituencyId(1)));
        draft.location.select_ward(Some(WardId(1)));
        draft.names = "John Kamau".to_string();
        draft.gender = Some(Gender::Male);
        draft.date_of_birth = NaiveDate::from_ymd_opt(2015, 5, 10);
        draft.relationship = Some(Relationship::Mother);
        draft.caregiver_names = "Mary Wanjiku".to_string();
        draft.caregiver_phone = "0712345678".to_string();
        draft.caregiver_hiv_status = HivStatus::Negative;
        registration_ops::submit(store, &draft, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap())
            .expect("Should submit")
    }

    #[test]
    fn test_registration_detail_sections() {
        let mut store = seeded_store();
        let outcome = submit_one(&mut store);

        let detail = registration_detail(&store, outcome.ovc_id).unwrap();
        assert!(detail.contains("### Basic Information"));
        assert!(detail.contains("**Name**: John Kamau"));
        assert!(detail.contains("**Ward**: Port Reitz"));
        assert!(detail.contains("### Caregiver"));
        assert!(detail.contains("**Relationship**: Mother"));
        // No ART block lines for a non-positive status
        assert!(!detail.contains("ART Status"));
    }

    #[test]
    fn test_caregiver_detail_lists_ovcs() {
        let mut store = seeded_store();
        let outcome = submit_one(&mut store);
        let caregiver_id = outcome.caregiver_id.unwrap();

        let detail = caregiver_detail(&store, caregiver_id).unwrap();
        assert!(detail.contains("**Name**: Mary Wanjiku"));
        assert!(detail.contains("OVCs under care (1)"));
        assert!(detail.contains("John Kamau (10 years) - Mother"));
    }

    #[test]
    fn test_unknown_registration_is_error() {
        let store = Store::new();
        assert!(registration_detail(&store, OvcId(9)).is_err());
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        assert_eq!(format_date(date), "15 Jan 2026");
    }
}
