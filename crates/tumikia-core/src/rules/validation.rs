use crate::errors::{RegistryError, Result};
use crate::ops::Store;

use super::invariants;

/// Validate the whole store
///
/// Runs every invariant check and returns the first violation found:
///
/// 1. Ids are unique within each collection
/// 2. Constituency → county references resolve
/// 3. Ward → constituency references resolve
/// 4. Ward-scoped records (CBOs, schools, facilities, CHV users,
///    caregivers, registrations) reference existing wards
/// 5. Registrations' present optional references (caregiver, school,
///    facility, CBO) resolve - absence is a valid state and not checked
/// 6. The caregiver and OVC counters sit strictly above every stored id
///
/// The seed importer runs this after building a store; tests use it to
/// confirm appends keep the store consistent.
///
/// # Errors
/// Returns the first validation error encountered. For exhaustive offender
/// lists, call the individual `invariants` functions directly.
pub fn validate_store(store: &Store) -> Result<()> {
    if let Some(&(collection, id)) = invariants::find_duplicate_ids(store).first() {
        return Err(RegistryError::DuplicateId { collection, id });
    }

    if let Some(&(constituency_id, county_id)) =
        invariants::find_orphaned_constituencies(store).first()
    {
        return Err(RegistryError::ConstituencyWithoutCounty {
            constituency_id,
            county_id,
        });
    }

    if let Some(&(ward_id, constituency_id)) = invariants::find_orphaned_wards(store).first() {
        return Err(RegistryError::WardWithoutConstituency {
            ward_id,
            constituency_id,
        });
    }

    if let Some(&(kind, id, ward_id)) = invariants::find_records_without_ward(store).first() {
        return Err(RegistryError::RecordWithoutWard { kind, id, ward_id });
    }

    if let Some(&(ovc_id, field, target)) =
        invariants::find_dangling_registration_refs(store).first()
    {
        return Err(RegistryError::RegistrationDanglingReference {
            ovc_id,
            field,
            target,
        });
    }

    if let Some(&(collection, id)) = invariants::find_counter_collisions(store).first() {
        return Err(RegistryError::CounterBehindSeed { collection, id });
    }

    Ok(())
}
