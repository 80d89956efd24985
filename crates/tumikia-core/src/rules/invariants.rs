//! Store integrity invariant checks
//!
//! Each `find_*` function sweeps the whole store and reports every offender,
//! for diagnostics. `validation::validate_store` runs them in order and
//! returns the first violation as a typed error.

use std::collections::HashSet;

use crate::ops::Store;

/// Duplicate ids within one collection, as (collection, id) pairs
pub fn find_duplicate_ids(store: &Store) -> Vec<(&'static str, u32)> {
    let mut duplicates = Vec::new();

    fn sweep(duplicates: &mut Vec<(&'static str, u32)>, collection: &'static str, ids: Vec<u32>) {
        let mut seen = HashSet::new();
        for id in ids {
            if !seen.insert(id) {
                duplicates.push((collection, id));
            }
        }
    }

    sweep(
        &mut duplicates,
        "counties",
        store.counties().iter().map(|c| c.id.get()).collect(),
    );
    sweep(
        &mut duplicates,
        "constituencies",
        store.constituencies().iter().map(|c| c.id.get()).collect(),
    );
    sweep(
        &mut duplicates,
        "wards",
        store.wards().iter().map(|w| w.id.get()).collect(),
    );
    sweep(
        &mut duplicates,
        "cbos",
        store.cbos().iter().map(|c| c.id.get()).collect(),
    );
    sweep(
        &mut duplicates,
        "schools",
        store.schools().iter().map(|s| s.id.get()).collect(),
    );
    sweep(
        &mut duplicates,
        "facilities",
        store.facilities().iter().map(|f| f.id.get()).collect(),
    );
    sweep(
        &mut duplicates,
        "chv_users",
        store.chv_users().iter().map(|c| c.id.get()).collect(),
    );
    sweep(
        &mut duplicates,
        "caregivers",
        store.caregivers().iter().map(|c| c.id.get()).collect(),
    );
    sweep(
        &mut duplicates,
        "registrations",
        store.registrations().iter().map(|r| r.id.get()).collect(),
    );

    duplicates
}

/// Constituencies whose county reference does not resolve
pub fn find_orphaned_constituencies(store: &Store) -> Vec<(u32, u32)> {
    let county_ids: HashSet<u32> = store.counties().iter().map(|c| c.id.get()).collect();
    store
        .constituencies()
        .iter()
        .filter(|c| !county_ids.contains(&c.county_id.get()))
        .map(|c| (c.id.get(), c.county_id.get()))
        .collect()
}

/// Wards whose constituency reference does not resolve
pub fn find_orphaned_wards(store: &Store) -> Vec<(u32, u32)> {
    let constituency_ids: HashSet<u32> =
        store.constituencies().iter().map(|c| c.id.get()).collect();
    store
        .wards()
        .iter()
        .filter(|w| !constituency_ids.contains(&w.constituency_id.get()))
        .map(|w| (w.id.get(), w.constituency_id.get()))
        .collect()
}

/// Ward-scoped records whose ward reference does not resolve, as
/// (kind, id, ward_id) triples
pub fn find_records_without_ward(store: &Store) -> Vec<(&'static str, u32, u32)> {
    let ward_ids: HashSet<u32> = store.wards().iter().map(|w| w.id.get()).collect();
    let mut offenders = Vec::new();

    for cbo in store.cbos() {
        if !ward_ids.contains(&cbo.ward_id.get()) {
            offenders.push(("cbo", cbo.id.get(), cbo.ward_id.get()));
        }
    }
    for school in store.schools() {
        if !ward_ids.contains(&school.ward_id.get()) {
            offenders.push(("school", school.id.get(), school.ward_id.get()));
        }
    }
    for facility in store.facilities() {
        if !ward_ids.contains(&facility.ward_id.get()) {
            offenders.push(("facility", facility.id.get(), facility.ward_id.get()));
        }
    }
    for chv in store.chv_users() {
        if !ward_ids.contains(&chv.ward_id.get()) {
            offenders.push(("chv_user", chv.id.get(), chv.ward_id.get()));
        }
    }
    for caregiver in store.caregivers() {
        if !ward_ids.contains(&caregiver.ward_id.get()) {
            offenders.push(("caregiver", caregiver.id.get(), caregiver.ward_id.get()));
        }
    }
    for registration in store.registrations() {
        if !ward_ids.contains(&registration.ward_id.get()) {
            offenders.push(("registration", registration.id.get(), registration.ward_id.get()));
        }
    }

    offenders
}

/// Registrations whose *present* optional references point nowhere, as
/// (ovc_id, field, target) triples. Absent references are fine.
pub fn find_dangling_registration_refs(store: &Store) -> Vec<(u32, &'static str, u32)> {
    let caregiver_ids: HashSet<u32> = store.caregivers().iter().map(|c| c.id.get()).collect();
    let school_ids: HashSet<u32> = store.schools().iter().map(|s| s.id.get()).collect();
    let facility_ids: HashSet<u32> = store.facilities().iter().map(|f| f.id.get()).collect();
    let cbo_ids: HashSet<u32> = store.cbos().iter().map(|c| c.id.get()).collect();

    let mut offenders = Vec::new();
    for registration in store.registrations() {
        if let Some(caregiver_id) = registration.caregiver_id {
            if !caregiver_ids.contains(&caregiver_id.get()) {
                offenders.push((registration.id.get(), "caregiver_id", caregiver_id.get()));
            }
        }
        if let Some(school_id) = registration.school_id {
            if !school_ids.contains(&school_id.get()) {
                offenders.push((registration.id.get(), "school_id", school_id.get()));
            }
        }
        if let Some(facility_id) = registration.facility_id {
            if !facility_ids.contains(&facility_id.get()) {
                offenders.push((registration.id.get(), "facility_id", facility_id.get()));
            }
        }
        if let Some(cbo_id) = registration.cbo_id {
            if !cbo_ids.contains(&cbo_id.get()) {
                offenders.push((registration.id.get(), "cbo_id", cbo_id.get()));
            }
        }
    }
    offenders
}

/// Seeded ids the counters would re-issue, as (collection, id) pairs
pub fn find_counter_collisions(store: &Store) -> Vec<(&'static str, u32)> {
    let mut collisions = Vec::new();
    let next_caregiver = store.next_caregiver_id().get();
    for caregiver in store.caregivers() {
        if caregiver.id.get() >= next_caregiver {
            collisions.push(("caregivers", caregiver.id.get()));
        }
    }
    let next_ovc = store.next_ovc_id().get();
    for registration in store.registrations() {
        if registration.id.get() >= next_ovc {
            collisions.push(("registrations", registration.id.get()));
        }
    }
    collisions
}
