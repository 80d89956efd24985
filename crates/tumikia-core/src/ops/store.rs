use serde::{Deserialize, Serialize};
use tumikia_core_types::{
    CaregiverId, CboId, ConstituencyId, CountyId, FacilityId, OvcId, SchoolId, WardId,
};

use crate::errors::{RegistryError, Result};
use crate::model::{Caregiver, Cbo, ChvUser, Constituency, County, Facility, Registration, School, Ward};

/// In-memory store for the registry
///
/// A single owned container holding the seeded location hierarchy, the
/// affiliated entities, and the two append-only collections (caregivers and
/// registrations). Not thread-safe (no Arc/RwLock) - all mutation happens
/// from the single event loop that owns it.
///
/// The caregiver and OVC id counters live here and advance only inside the
/// append operations; inserting a record with an explicit id (the seed
/// path) bumps the counter past it, so allocated ids never collide with
/// seeded ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    counties: Vec<County>,
    constituencies: Vec<Constituency>,
    wards: Vec<Ward>,
    cbos: Vec<Cbo>,
    schools: Vec<School>,
    facilities: Vec<Facility>,
    chv_users: Vec<ChvUser>,
    caregivers: Vec<Caregiver>,
    registrations: Vec<Registration>,
    next_caregiver: u32,
    next_ovc: u32,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create a new empty Store with both counters at 1
    pub fn new() -> Self {
        Self {
            counties: Vec::new(),
            constituencies: Vec::new(),
            wards: Vec::new(),
            cbos: Vec::new(),
            schools: Vec::new(),
            facilities: Vec::new(),
            chv_users: Vec::new(),
            caregivers: Vec::new(),
            registrations: Vec::new(),
            next_caregiver: 1,
            next_ovc: 1,
        }
    }

    // ===== Seeding (immutable collections) =====

    /// Insert a county; seeded once at startup
    pub fn insert_county(&mut self, county: County) {
        self.counties.push(county);
    }

    pub fn insert_constituency(&mut self, constituency: Constituency) {
        self.constituencies.push(constituency);
    }

    pub fn insert_ward(&mut self, ward: Ward) {
        self.wards.push(ward);
    }

    pub fn insert_cbo(&mut self, cbo: Cbo) {
        self.cbos.push(cbo);
    }

    pub fn insert_school(&mut self, school: School) {
        self.schools.push(school);
    }

    pub fn insert_facility(&mut self, facility: Facility) {
        self.facilities.push(facility);
    }

    pub fn insert_chv_user(&mut self, chv: ChvUser) {
        self.chv_users.push(chv);
    }

    // ===== Append-only collections =====

    /// Insert a caregiver with an already-assigned id
    ///
    /// Bumps the caregiver counter past the inserted id, keeping future
    /// allocations collision-free. Used by the seed importer and by the
    /// creation ops after allocation.
    pub fn insert_caregiver(&mut self, caregiver: Caregiver) {
        self.next_caregiver = self.next_caregiver.max(caregiver.id.get() + 1);
        self.caregivers.push(caregiver);
    }

    /// Insert a registration with an already-assigned id
    ///
    /// Bumps the OVC counter past the inserted id.
    pub fn insert_registration(&mut self, registration: Registration) {
        self.next_ovc = self.next_ovc.max(registration.id.get() + 1);
        self.registrations.push(registration);
    }

    /// Allocate the next caregiver id
    pub(crate) fn allocate_caregiver_id(&mut self) -> CaregiverId {
        let id = CaregiverId(self.next_caregiver);
        self.next_caregiver += 1;
        id
    }

    /// Allocate the next OVC id
    pub(crate) fn allocate_ovc_id(&mut self) -> OvcId {
        let id = OvcId(self.next_ovc);
        self.next_ovc += 1;
        id
    }

    /// The caregiver id the next allocation would produce (no mutation)
    pub fn next_caregiver_id(&self) -> CaregiverId {
        CaregiverId(self.next_caregiver)
    }

    /// The OVC id the next allocation would produce (no mutation)
    pub fn next_ovc_id(&self) -> OvcId {
        OvcId(self.next_ovc)
    }

    // ===== Collection access =====

    pub fn counties(&self) -> &[County] {
        &self.counties
    }

    pub fn constituencies(&self) -> &[Constituency] {
        &self.constituencies
    }

    pub fn wards(&self) -> &[Ward] {
        &self.wards
    }

    pub fn cbos(&self) -> &[Cbo] {
        &self.cbos
    }

    pub fn schools(&self) -> &[School] {
        &self.schools
    }

    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    pub fn chv_users(&self) -> &[ChvUser] {
        &self.chv_users
    }

    pub fn caregivers(&self) -> &[Caregiver] {
        &self.caregivers
    }

    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    // ===== Keyed lookup =====

    /// Get a county by id
    ///
    /// # Errors
    /// Returns `CountyNotFound` if no county has the id.
    pub fn get_county(&self, id: CountyId) -> Result<&County> {
        self.counties
            .iter()
            .find(|c| c.id == id)
            .ok_or(RegistryError::CountyNotFound { county_id: id.get() })
    }

    /// Get a constituency by id
    ///
    /// # Errors
    /// Returns `ConstituencyNotFound` if no constituency has the id.
    pub fn get_constituency(&self, id: ConstituencyId) -> Result<&Constituency> {
        self.constituencies
            .iter()
            .find(|c| c.id == id)
            .ok_or(RegistryError::ConstituencyNotFound {
                constituency_id: id.get(),
            })
    }

    /// Get a ward by id
    ///
    /// # Errors
    /// Returns `WardNotFound` if no ward has the id.
    pub fn get_ward(&self, id: WardId) -> Result<&Ward> {
        self.wards
            .iter()
            .find(|w| w.id == id)
            .ok_or(RegistryError::WardNotFound { ward_id: id.get() })
    }

    /// Get a CBO by id
    ///
    /// # Errors
    /// Returns `CboNotFound` if no CBO has the id.
    pub fn get_cbo(&self, id: CboId) -> Result<&Cbo> {
        self.cbos
            .iter()
            .find(|c| c.id == id)
            .ok_or(RegistryError::CboNotFound { cbo_id: id.get() })
    }

    /// Get a school by id
    ///
    /// # Errors
    /// Returns `SchoolNotFound` if no school has the id.
    pub fn get_school(&self, id: SchoolId) -> Result<&School> {
        self.schools
            .iter()
            .find(|s| s.id == id)
            .ok_or(RegistryError::SchoolNotFound { school_id: id.get() })
    }

    /// Get a facility by id
    ///
    /// # Errors
    /// Returns `FacilityNotFound` if no facility has the id.
    pub fn get_facility(&self, id: FacilityId) -> Result<&Facility> {
        self.facilities
            .iter()
            .find(|f| f.id == id)
            .ok_or(RegistryError::FacilityNotFound {
                facility_id: id.get(),
            })
    }

    /// Get a caregiver by id
    ///
    /// # Errors
    /// Returns `CaregiverNotFound` if no caregiver has the id.
    pub fn get_caregiver(&self, id: CaregiverId) -> Result<&Caregiver> {
        self.caregivers
            .iter()
            .find(|c| c.id == id)
            .ok_or(RegistryError::CaregiverNotFound {
                caregiver_id: id.get(),
            })
    }

    /// Get a registration by id
    ///
    /// # Errors
    /// Returns `RegistrationNotFound` if no registration has the id.
    pub fn get_registration(&self, id: OvcId) -> Result<&Registration> {
        self.registrations
            .iter()
            .find(|r| r.id == id)
            .ok_or(RegistryError::RegistrationNotFound { ovc_id: id.get() })
    }

    // ===== Hierarchy index =====
    //
    // Child lookups return an empty sequence (not an error) for an unknown
    // parent id - that is the "nothing selected yet" state.

    /// Constituencies of a county, in seed order
    pub fn constituencies_of(&self, county_id: CountyId) -> Vec<&Constituency> {
        self.constituencies
            .iter()
            .filter(|c| c.county_id == county_id)
            .collect()
    }

    /// Wards of a constituency, in seed order
    pub fn wards_of(&self, constituency_id: ConstituencyId) -> Vec<&Ward> {
        self.wards
            .iter()
            .filter(|w| w.constituency_id == constituency_id)
            .collect()
    }

    /// CBOs of a ward, in seed order
    pub fn cbos_of(&self, ward_id: WardId) -> Vec<&Cbo> {
        self.cbos.iter().filter(|c| c.ward_id == ward_id).collect()
    }

    /// Schools of a ward, in seed order
    pub fn schools_of(&self, ward_id: WardId) -> Vec<&School> {
        self.schools
            .iter()
            .filter(|s| s.ward_id == ward_id)
            .collect()
    }

    /// Facilities of a ward, in seed order
    pub fn facilities_of(&self, ward_id: WardId) -> Vec<&Facility> {
        self.facilities
            .iter()
            .filter(|f| f.ward_id == ward_id)
            .collect()
    }

    /// CHV users of a ward, in seed order
    pub fn chv_users_of(&self, ward_id: WardId) -> Vec<&ChvUser> {
        self.chv_users
            .iter()
            .filter(|c| c.ward_id == ward_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = Store::new();
        assert!(store.counties().is_empty());
        assert!(store.registrations().is_empty());
        assert_eq!(store.next_ovc_id(), OvcId(1));
        assert_eq!(store.next_caregiver_id(), CaregiverId(1));
    }

    #[test]
    fn test_get_unknown_ward_is_error() {
        let store = Store::new();
        let result = store.get_ward(WardId(9));
        assert_eq!(result, Err(RegistryError::WardNotFound { ward_id: 9 }));
    }

    #[test]
    fn test_children_of_unknown_parent_is_empty() {
        let store = Store::new();
        assert!(store.constituencies_of(CountyId(99)).is_empty());
        assert!(store.wards_of(ConstituencyId(99)).is_empty());
        assert!(store.schools_of(WardId(99)).is_empty());
    }

    #[test]
    fn test_hierarchy_filtering() {
        let mut store = Store::new();
        store.insert_county(County::new(CountyId(1), "Mombasa"));
        store.insert_county(County::new(CountyId(2), "Kwale"));
        store.insert_constituency(Constituency::new(ConstituencyId(1), "Changamwe", CountyId(1)));
        store.insert_constituency(Constituency::new(ConstituencyId(7), "Msambweni", CountyId(2)));
        store.insert_ward(Ward::new(WardId(1), "Port Reitz", ConstituencyId(1)));
        store.insert_ward(Ward::new(WardId(2), "Kipevu", ConstituencyId(1)));

        let constituencies = store.constituencies_of(CountyId(1));
        assert_eq!(constituencies.len(), 1);
        assert_eq!(constituencies[0].name, "Changamwe");

        let wards = store.wards_of(ConstituencyId(1));
        assert_eq!(wards.len(), 2);
        assert_eq!(wards[0].name, "Port Reitz");
    }

    #[test]
    fn test_explicit_id_insert_bumps_counter() {
        let mut store = Store::new();
        let caregiver = crate::model::NewCaregiver::new("Mary Wanjiku", "0712345678", WardId(1))
            .into_caregiver(CaregiverId(5));
        store.insert_caregiver(caregiver);

        assert_eq!(store.next_caregiver_id(), CaregiverId(6));
        assert_eq!(store.allocate_caregiver_id(), CaregiverId(6));
        assert_eq!(store.allocate_caregiver_id(), CaregiverId(7));
    }
}
