//! Registration listing queries
//!
//! Read-only queries over the store with deterministic ordering: filtered
//! listings keep insertion (id) order, the recent listing orders by
//! registration date descending with id as tiebreak.

use serde::{Deserialize, Serialize};
use tumikia_core_types::CaregiverId;

use crate::model::registration::{Gender, HivStatus};
use crate::model::Registration;
use crate::ops::Store;

/// Filters for the registration listing; `None` means "all"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordFilters {
    pub gender: Option<Gender>,
    pub hiv_status: Option<HivStatus>,
}

/// Registrations matching the filters, in insertion order
pub fn filter_records<'a>(store: &'a Store, filters: &RecordFilters) -> Vec<&'a Registration> {
    store
        .registrations()
        .iter()
        .filter(|r| filters.gender.map_or(true, |g| r.gender == g))
        .filter(|r| filters.hiv_status.map_or(true, |h| r.hiv_status == h))
        .collect()
}

/// The most recent registrations, newest first
///
/// Ordered by registration date descending, then id descending so that two
/// same-day registrations list the later append first.
pub fn recent_registrations(store: &Store, limit: usize) -> Vec<&Registration> {
    let mut records: Vec<&Registration> = store.registrations().iter().collect();
    records.sort_by(|a, b| {
        b.registration_date
            .cmp(&a.registration_date)
            .then(b.id.cmp(&a.id))
    });
    records.truncate(limit);
    records
}

/// Registrations under a caregiver's care, in insertion order
pub fn ovcs_of_caregiver(store: &Store, caregiver_id: CaregiverId) -> Vec<&Registration> {
    store
        .registrations()
        .iter()
        .filter(|r| r.caregiver_id == Some(caregiver_id))
        .collect()
}

/// Number of registrations referencing a caregiver
pub fn caregiver_ovc_count(store: &Store, caregiver_id: CaregiverId) -> usize {
    ovcs_of_caregiver(store, caregiver_id).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tumikia_core_types::{OvcId, WardId};

    use crate::age::AgeRange;

    fn registration(id: u32, gender: Gender, hiv: HivStatus, date: NaiveDate) -> Registration {
        Registration {
            id: OvcId(id),
            names: format!("Registrant {}", id),
            gender,
            date_of_birth: NaiveDate::from_ymd_opt(2015, 5, 10).unwrap(),
            age: 10,
            age_range: AgeRange::EarlyAdolescent,
            birth_certificate: false,
            birth_certificate_number: None,
            disability: None,
            ncpwd_number: None,
            hiv_status: hiv,
            art_status: None,
            facility_id: None,
            date_of_linkage: None,
            ccc_number: None,
            viral_load: None,
            suppression: None,
            father_alive: None,
            mother_alive: None,
            school_level: None,
            school_id: None,
            class_grade: None,
            immunization: None,
            eligibility: None,
            ward_id: WardId(1),
            cbo_id: None,
            caregiver_id: None,
            caregiver_relation: None,
            other_relationship: None,
            registration_date: date,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_filters_compose() {
        let mut store = Store::new();
        store.insert_registration(registration(
            1,
            Gender::Male,
            HivStatus::Positive,
            date(2026, 1, 15),
        ));
        store.insert_registration(registration(
            2,
            Gender::Female,
            HivStatus::Positive,
            date(2026, 1, 20),
        ));
        store.insert_registration(registration(
            3,
            Gender::Male,
            HivStatus::Negative,
            date(2026, 2, 1),
        ));

        let all = filter_records(&store, &RecordFilters::default());
        assert_eq!(all.len(), 3);

        let males = filter_records(
            &store,
            &RecordFilters {
                gender: Some(Gender::Male),
                hiv_status: None,
            },
        );
        assert_eq!(males.len(), 2);

        let positive_males = filter_records(
            &store,
            &RecordFilters {
                gender: Some(Gender::Male),
                hiv_status: Some(HivStatus::Positive),
            },
        );
        assert_eq!(positive_males.len(), 1);
        assert_eq!(positive_males[0].id, OvcId(1));
    }

    #[test]
    fn test_recent_orders_newest_first() {
        let mut store = Store::new();
        store.insert_registration(registration(
            1,
            Gender::Male,
            HivStatus::Unknown,
            date(2026, 1, 15),
        ));
        store.insert_registration(registration(
            2,
            Gender::Male,
            HivStatus::Unknown,
            date(2026, 2, 5),
        ));
        store.insert_registration(registration(
            3,
            Gender::Male,
            HivStatus::Unknown,
            date(2026, 2, 5),
        ));

        let recent = recent_registrations(&store, 2);
        assert_eq!(recent.len(), 2);
        // Same-day tie broken by id descending
        assert_eq!(recent[0].id, OvcId(3));
        assert_eq!(recent[1].id, OvcId(2));
    }

    #[test]
    fn test_caregiver_ovc_count() {
        let mut store = Store::new();
        let mut first = registration(1, Gender::Male, HivStatus::Unknown, date(2026, 1, 15));
        first.caregiver_id = Some(CaregiverId(1));
        let mut second = registration(2, Gender::Female, HivStatus::Unknown, date(2026, 1, 20));
        second.caregiver_id = Some(CaregiverId(1));
        store.insert_registration(first);
        store.insert_registration(second);
        store.insert_registration(registration(
            3,
            Gender::Male,
            HivStatus::Unknown,
            date(2026, 2, 1),
        ));

        assert_eq!(caregiver_ovc_count(&store, CaregiverId(1)), 2);
        assert_eq!(caregiver_ovc_count(&store, CaregiverId(2)), 0);
    }
}
