//! Seed parser with validation
//!
//! Parses YAML and validates schema version, id uniqueness and referential
//! integrity before the importer ever touches a store.

use std::collections::HashSet;

use crate::errors::{seed_validation, Result};
use crate::format_v0::SeedV0;

/// Parse a seed document from a string
pub fn parse_seed_str(content: &str) -> Result<SeedV0> {
    let seed: SeedV0 = serde_yaml::from_str(content).map_err(|e| crate::errors::SeedError::Parse {
        message: e.to_string(),
    })?;

    validate_seed(&seed)?;

    Ok(seed)
}

/// Validate a parsed seed
fn validate_seed(seed: &SeedV0) -> Result<()> {
    // Validate schema version
    if seed.schema_version != 0 {
        return Err(seed_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            seed.schema_version
        )));
    }

    // Validate id uniqueness per collection
    check_unique("counties", seed.counties.iter().map(|c| c.county_id))?;
    check_unique(
        "constituencies",
        seed.constituencies.iter().map(|c| c.constituency_id),
    )?;
    check_unique("wards", seed.wards.iter().map(|w| w.ward_id))?;
    check_unique("cbos", seed.cbos.iter().map(|c| c.cbo_id))?;
    check_unique("schools", seed.schools.iter().map(|s| s.school_id))?;
    check_unique("facilities", seed.facilities.iter().map(|f| f.facility_id))?;
    check_unique("chv_users", seed.chv_users.iter().map(|c| c.chv_id))?;
    check_unique("caregivers", seed.caregivers.iter().map(|c| c.caregiver_id))?;
    check_unique("registrations", seed.registrations.iter().map(|r| r.ovc_id))?;

    // Validate referential integrity
    let county_ids: HashSet<u32> = seed.counties.iter().map(|c| c.county_id).collect();
    let constituency_ids: HashSet<u32> = seed
        .constituencies
        .iter()
        .map(|c| c.constituency_id)
        .collect();
    let ward_ids: HashSet<u32> = seed.wards.iter().map(|w| w.ward_id).collect();
    let cbo_ids: HashSet<u32> = seed.cbos.iter().map(|c| c.cbo_id).collect();
    let school_ids: HashSet<u32> = seed.schools.iter().map(|s| s.school_id).collect();
    let facility_ids: HashSet<u32> = seed.facilities.iter().map(|f| f.facility_id).collect();
    let caregiver_ids: HashSet<u32> = seed.caregivers.iter().map(|c| c.caregiver_id).collect();

    for constituency in &seed.constituencies {
        if !county_ids.contains(&constituency.county_id) {
            return Err(seed_validation(&format!(
                "Constituency {} references non-existent county: {}",
                constituency.constituency_id, constituency.county_id
            )));
        }
    }

    for ward in &seed.wards {
        if !constituency_ids.contains(&ward.constituency_id) {
            return Err(seed_validation(&format!(
                "Ward {} references non-existent constituency: {}",
                ward.ward_id, ward.constituency_id
            )));
        }
    }

    for cbo in &seed.cbos {
        if !ward_ids.contains(&cbo.ward_id) {
            return Err(seed_validation(&format!(
                "CBO {} references non-existent ward: {}",
                cbo.cbo_id, cbo.ward_id
            )));
        }
    }

    for school in &seed.schools {
        if !ward_ids.contains(&school.ward_id) {
            return Err(seed_validation(&format!(
                "School {} references non-existent ward: {}",
                school.school_id, school.ward_id
            )));
        }
    }

    for facility in &seed.facilities {
        if !ward_ids.contains(&facility.ward_id) {
            return Err(seed_validation(&format!(
                "Facility {} references non-existent ward: {}",
                facility.facility_id, facility.ward_id
            )));
        }
    }

    for chv in &seed.chv_users {
        if !ward_ids.contains(&chv.ward_id) {
            return Err(seed_validation(&format!(
                "CHV user {} references non-existent ward: {}",
                chv.chv_id, chv.ward_id
            )));
        }
        if !cbo_ids.contains(&chv.cbo_id) {
            return Err(seed_validation(&format!(
                "CHV user {} references non-existent CBO: {}",
                chv.chv_id, chv.cbo_id
            )));
        }
    }

    for caregiver in &seed.caregivers {
        if !ward_ids.contains(&caregiver.ward_id) {
            return Err(seed_validation(&format!(
                "Caregiver {} references non-existent ward: {}",
                caregiver.caregiver_id, caregiver.ward_id
            )));
        }
    }

    // Registrations: the ward is mandatory; the remaining references are
    // optional and checked only when present (absence means "unknown / not
    // applicable").
    for registration in &seed.registrations {
        if !ward_ids.contains(&registration.ward_id) {
            return Err(seed_validation(&format!(
                "Registration {} references non-existent ward: {}",
                registration.ovc_id, registration.ward_id
            )));
        }
        if let Some(caregiver_id) = registration.caregiver_id {
            if !caregiver_ids.contains(&caregiver_id) {
                return Err(seed_validation(&format!(
                    "Registration {} references non-existent caregiver: {}",
                    registration.ovc_id, caregiver_id
                )));
            }
        }
        if let Some(school_id) = registration.school_id {
            if !school_ids.contains(&school_id) {
                return Err(seed_validation(&format!(
                    "Registration {} references non-existent school: {}",
                    registration.ovc_id, school_id
                )));
            }
        }
        if let Some(facility_id) = registration.facility_id {
            if !facility_ids.contains(&facility_id) {
                return Err(seed_validation(&format!(
                    "Registration {} references non-existent facility: {}",
                    registration.ovc_id, facility_id
                )));
            }
        }
        if let Some(cbo_id) = registration.cbo_id {
            if !cbo_ids.contains(&cbo_id) {
                return Err(seed_validation(&format!(
                    "Registration {} references non-existent CBO: {}",
                    registration.ovc_id, cbo_id
                )));
            }
        }
    }

    Ok(())
}

fn check_unique(collection: &str, ids: impl Iterator<Item = u32>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(seed_validation(&format!(
                "Duplicate id {} in {}",
                id, collection
            )));
        }
    }
    Ok(())
}
