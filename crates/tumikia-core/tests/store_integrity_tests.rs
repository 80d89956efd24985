/// Store integrity tests
///
/// The invariant sweep must hold after every append path, and must catch
/// the seeded inconsistencies it exists for.
use chrono::NaiveDate;
use tumikia_core_types::{CaregiverId, ConstituencyId, CountyId, WardId};

use tumikia_core::errors::RegistryError;
use tumikia_core::model::registration::{Gender, Relationship};
use tumikia_core::model::{Caregiver, Constituency, County, NewCaregiver, RegistrationDraft, Ward};
use tumikia_core::ops::{caregiver_ops, registration_ops};
use tumikia_core::rules::validate_store;
use tumikia_core::Store;

fn seeded_store() -> Store {
    let mut store = Store::new();
    store.insert_county(County::new(CountyId(1), "Mombasa"));
    store.insert_constituency(Constituency::new(ConstituencyId(1), "Changamwe", CountyId(1)));
    store.insert_ward(Ward::new(WardId(1), "Port Reitz", ConstituencyId(1)));
    store
}

fn complete_draft() -> RegistrationDraft {
    let mut draft = RegistrationDraft::new();
    draft.location.select_county(Some(CountyId(1)));
    draft.location.select_constituency(Some(ConstituencyId(1)));
    draft.location.select_ward(Some(WardId(1)));
    draft.names = "John Kamau".to_string();
    draft.gender = Some(Gender::Male);
    draft.date_of_birth = NaiveDate::from_ymd_opt(2015, 5, 10);
    draft.relationship = Some(Relationship::Mother);
    draft
}

#[test]
fn test_store_validates_after_every_append_path() {
    let mut store = seeded_store();
    let today = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();

    caregiver_ops::add_caregiver(
        &mut store,
        NewCaregiver::new("Mary Wanjiku", "0712345678", WardId(1)),
    )
    .unwrap();
    assert!(validate_store(&store).is_ok());

    let mut draft = complete_draft();
    draft.caregiver_names = "Sarah Akinyi".to_string();
    draft.caregiver_phone = "0723456789".to_string();
    registration_ops::submit(&mut store, &draft, today).unwrap();
    assert!(validate_store(&store).is_ok());

    registration_ops::submit(&mut store, &complete_draft(), today).unwrap();
    assert!(validate_store(&store).is_ok());
}

#[test]
fn test_dangling_present_reference_is_caught() {
    let mut store = seeded_store();
    let today = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();

    let mut draft = complete_draft();
    draft.existing_caregiver = Some(CaregiverId(9));

    // The submit path refuses the dangling reference up front
    let err = registration_ops::submit(&mut store, &draft, today).unwrap_err();
    assert_eq!(err, RegistryError::CaregiverNotFound { caregiver_id: 9 });
    assert!(store.registrations().is_empty());
}

#[test]
fn test_validation_catches_hand_built_inconsistency() {
    // A caregiver pointing at a ward that was never seeded
    let mut store = seeded_store();
    store.insert_caregiver(Caregiver {
        id: CaregiverId(1),
        names: "Mary Wanjiku".to_string(),
        gender: None,
        national_id: None,
        phone: None,
        hiv_status: tumikia_core::model::HivStatus::Negative,
        relation: None,
        caregiver_type: None,
        ward_id: WardId(42),
    });

    let err = validate_store(&store).unwrap_err();
    assert_eq!(
        err,
        RegistryError::RecordWithoutWard {
            kind: "caregiver",
            id: 1,
            ward_id: 42,
        }
    );
}
