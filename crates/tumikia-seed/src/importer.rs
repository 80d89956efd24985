//! Seed importer
//!
//! Maps a validated seed document onto the registry's models and builds a
//! `Store`. Inserting records with explicit ids drives both counters to
//! `max(id) + 1`, so ids stay globally unique by construction regardless of
//! what the seed contains. The finished store is re-validated with the
//! registry's own integrity sweep.

use tracing::debug;
use tumikia_core::model::{
    Caregiver, Cbo, ChvUser, Constituency, County, Facility, Registration, School, Ward,
};
use tumikia_core::rules::validate_store;
use tumikia_core::{age, Store};
use tumikia_core_types::{
    CaregiverId, CboId, ChvId, ConstituencyId, CountyId, FacilityId, OvcId, SchoolId, WardId,
};

use crate::errors::Result;
use crate::format_v0::SeedV0;
use crate::parser::parse_seed_str;

/// The embedded sample dataset (the original Tumikia demo data)
const SAMPLE_SEED: &str = include_str!("../data/sample_seed.yaml");

/// Build a store from a validated seed document
///
/// # Errors
/// Returns a registry validation error if the built store fails the
/// integrity sweep; a seed that passed the parser should never trigger one.
pub fn import_seed(seed: SeedV0) -> Result<Store> {
    let mut store = Store::new();

    for county in seed.counties {
        store.insert_county(County::new(CountyId(county.county_id), county.county_name));
    }
    for constituency in seed.constituencies {
        store.insert_constituency(Constituency::new(
            ConstituencyId(constituency.constituency_id),
            constituency.constituency_name,
            CountyId(constituency.county_id),
        ));
    }
    for ward in seed.wards {
        store.insert_ward(Ward::new(
            WardId(ward.ward_id),
            ward.ward_name,
            ConstituencyId(ward.constituency_id),
        ));
    }
    for cbo in seed.cbos {
        store.insert_cbo(Cbo::new(CboId(cbo.cbo_id), cbo.cbo_name, WardId(cbo.ward_id)));
    }
    for school in seed.schools {
        store.insert_school(School::new(
            SchoolId(school.school_id),
            school.school_name,
            WardId(school.ward_id),
        ));
    }
    for facility in seed.facilities {
        let mut record = Facility::new(
            FacilityId(facility.facility_id),
            facility.facility_name,
            WardId(facility.ward_id),
        );
        record.mfl_code = facility.facility_mfl_code;
        store.insert_facility(record);
    }
    for chv in seed.chv_users {
        store.insert_chv_user(ChvUser::new(
            ChvId(chv.chv_id),
            chv.chv_names,
            WardId(chv.ward_id),
            CboId(chv.cbo_id),
        ));
    }
    for caregiver in seed.caregivers {
        store.insert_caregiver(Caregiver {
            id: CaregiverId(caregiver.caregiver_id),
            names: caregiver.caregiver_names,
            gender: caregiver.caregiver_gender,
            national_id: caregiver.caregiver_national_id,
            phone: caregiver.phone,
            hiv_status: caregiver.caregiver_hiv_status,
            relation: caregiver.caregiver_relation,
            caregiver_type: caregiver.caregiver_type,
            ward_id: WardId(caregiver.ward_id),
        });
    }
    for registration in seed.registrations {
        // Age is computed against the recorded registration date, so a
        // re-import years later reproduces the same record.
        let computed_age =
            age::age_in_years(registration.date_of_birth, registration.registration_date);
        store.insert_registration(Registration {
            id: OvcId(registration.ovc_id),
            names: registration.ovc_names,
            gender: registration.gender,
            date_of_birth: registration.date_of_birth,
            age: computed_age,
            age_range: age::age_range(computed_age),
            birth_certificate: false,
            birth_certificate_number: None,
            disability: None,
            ncpwd_number: None,
            hiv_status: registration.ovc_hiv_status,
            art_status: registration.art_status,
            facility_id: registration.facility_id.map(FacilityId),
            date_of_linkage: None,
            ccc_number: None,
            viral_load: None,
            suppression: None,
            father_alive: None,
            mother_alive: None,
            school_level: registration.school_level,
            school_id: registration.school_id.map(SchoolId),
            class_grade: None,
            immunization: None,
            eligibility: None,
            ward_id: WardId(registration.ward_id),
            cbo_id: registration.cbo_id.map(CboId),
            caregiver_id: registration.caregiver_id.map(CaregiverId),
            caregiver_relation: registration.caregiver_relation,
            other_relationship: None,
            registration_date: registration.registration_date,
        });
    }

    validate_store(&store)?;

    debug!(
        counties = store.counties().len(),
        wards = store.wards().len(),
        caregivers = store.caregivers().len(),
        registrations = store.registrations().len(),
        "seed imported"
    );

    Ok(store)
}

/// Parse and import the embedded sample dataset
pub fn sample() -> Result<Store> {
    import_seed(parse_seed_str(SAMPLE_SEED)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_derives_counters_from_maxima() {
        let yaml = r#"
schema_version: 0
counties:
  - { county_id: 1, county_name: "Mombasa" }
constituencies:
  - { constituency_id: 1, constituency_name: "Changamwe", county_id: 1 }
wards:
  - { ward_id: 1, ward_name: "Port Reitz", constituency_id: 1 }
caregivers:
  - caregiver_id: 7
    caregiver_names: "Mary Wanjiku"
    phone: "0712345678"
    caregiver_hiv_status: "Negative"
    ward_id: 1
registrations:
  - ovc_id: 12
    ovc_names: "John Kamau"
    gender: "Male"
    date_of_birth: "2015-05-10"
    ovc_hiv_status: "Negative"
    ward_id: 1
    caregiver_id: 7
    registration_date: "2026-01-15"
"#;
        let store = import_seed(parse_seed_str(yaml).unwrap()).unwrap();
        assert_eq!(store.next_caregiver_id(), CaregiverId(8));
        assert_eq!(store.next_ovc_id(), OvcId(13));
    }

    #[test]
    fn test_imported_registration_age_is_recomputed() {
        let yaml = r#"
schema_version: 0
counties:
  - { county_id: 1, county_name: "Mombasa" }
constituencies:
  - { constituency_id: 1, constituency_name: "Changamwe", county_id: 1 }
wards:
  - { ward_id: 1, ward_name: "Port Reitz", constituency_id: 1 }
registrations:
  - ovc_id: 1
    ovc_names: "John Kamau"
    gender: "Male"
    date_of_birth: "2015-05-10"
    ovc_hiv_status: "Negative"
    ward_id: 1
    registration_date: "2026-01-15"
"#;
        let store = import_seed(parse_seed_str(yaml).unwrap()).unwrap();
        let record = &store.registrations()[0];
        // 2015-05-10 to 2026-01-15 is 10 completed years
        assert_eq!(record.age, 10);
    }
}
