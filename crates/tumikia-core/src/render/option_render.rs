//! Option lists for the selection controls
//!
//! Each list leads with its placeholder entry (empty value); the remaining
//! entries carry the record id as the value and the display label. Lists
//! for dependent controls are empty below the placeholder until the parent
//! level is selected.

use serde::{Deserialize, Serialize};
use tumikia_core_types::{ConstituencyId, CountyId, WardId};

use crate::ops::Store;

/// One entry of a selection control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    /// Record id as a string; empty for the placeholder entry
    pub value: String,
    pub label: String,
}

impl OptionItem {
    fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
        }
    }

    fn entry(value: impl ToString, label: impl Into<String>) -> Self {
        Self {
            value: value.to_string(),
            label: label.into(),
        }
    }
}

/// All counties, in seed order
pub fn county_options(store: &Store) -> Vec<OptionItem> {
    let mut options = vec![OptionItem::placeholder("Select County")];
    options.extend(
        store
            .counties()
            .iter()
            .map(|c| OptionItem::entry(c.id, c.name.clone())),
    );
    options
}

/// Constituencies of the selected county; placeholder-only when none selected
pub fn constituency_options(store: &Store, county: Option<CountyId>) -> Vec<OptionItem> {
    let mut options = vec![OptionItem::placeholder("Select Constituency")];
    if let Some(county_id) = county {
        options.extend(
            store
                .constituencies_of(county_id)
                .into_iter()
                .map(|c| OptionItem::entry(c.id, c.name.clone())),
        );
    }
    options
}

/// Wards of the selected constituency; placeholder-only when none selected
pub fn ward_options(store: &Store, constituency: Option<ConstituencyId>) -> Vec<OptionItem> {
    let mut options = vec![OptionItem::placeholder("Select Ward")];
    if let Some(constituency_id) = constituency {
        options.extend(
            store
                .wards_of(constituency_id)
                .into_iter()
                .map(|w| OptionItem::entry(w.id, w.name.clone())),
        );
    }
    options
}

/// CBOs of the selected ward; all CBOs when no ward is selected yet
pub fn cbo_options(store: &Store, ward: Option<WardId>) -> Vec<OptionItem> {
    let mut options = vec![OptionItem::placeholder("Select CBO")];
    match ward {
        Some(ward_id) => options.extend(
            store
                .cbos_of(ward_id)
                .into_iter()
                .map(|c| OptionItem::entry(c.id, c.name.clone())),
        ),
        None => options.extend(
            store
                .cbos()
                .iter()
                .map(|c| OptionItem::entry(c.id, c.name.clone())),
        ),
    }
    options
}

/// All schools, in seed order
pub fn school_options(store: &Store) -> Vec<OptionItem> {
    let mut options = vec![OptionItem::placeholder("Select School")];
    options.extend(
        store
            .schools()
            .iter()
            .map(|s| OptionItem::entry(s.id, s.name.clone())),
    );
    options
}

/// All health facilities, in seed order
pub fn facility_options(store: &Store) -> Vec<OptionItem> {
    let mut options = vec![OptionItem::placeholder("Select Facility")];
    options.extend(
        store
            .facilities()
            .iter()
            .map(|f| OptionItem::entry(f.id, f.name.clone())),
    );
    options
}

/// Existing caregivers, labelled "name - phone"
pub fn caregiver_options(store: &Store) -> Vec<OptionItem> {
    let mut options = vec![OptionItem::placeholder("-- Add New Caregiver --")];
    options.extend(store.caregivers().iter().map(|c| {
        let phone = c.phone.as_deref().unwrap_or("No phone");
        OptionItem::entry(c.id, format!("{} - {}", c.names, phone))
    }));
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use tumikia_core_types::{CaregiverId, ConstituencyId, CountyId};

    use crate::model::caregiver::Caregiver;
    use crate::model::registration::HivStatus;
    use crate::model::{Constituency, County};

    #[test]
    fn test_county_options_lead_with_placeholder() {
        let mut store = Store::new();
        store.insert_county(County::new(CountyId(1), "Mombasa"));

        let options = county_options(&store);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].value, "");
        assert_eq!(options[0].label, "Select County");
        assert_eq!(options[1].value, "1");
        assert_eq!(options[1].label, "Mombasa");
    }

    #[test]
    fn test_constituency_options_empty_without_county() {
        let mut store = Store::new();
        store.insert_county(County::new(CountyId(1), "Mombasa"));
        store.insert_constituency(Constituency::new(ConstituencyId(1), "Changamwe", CountyId(1)));

        let options = constituency_options(&store, None);
        assert_eq!(options.len(), 1);

        let options = constituency_options(&store, Some(CountyId(1)));
        assert_eq!(options.len(), 2);
        assert_eq!(options[1].label, "Changamwe");
    }

    #[test]
    fn test_caregiver_label_includes_phone_fallback() {
        let mut store = Store::new();
        store.insert_caregiver(Caregiver {
            id: CaregiverId(1),
            names: "Mary Wanjiku".to_string(),
            gender: None,
            national_id: None,
            phone: None,
            hiv_status: HivStatus::Negative,
            relation: None,
            caregiver_type: None,
            ward_id: tumikia_core_types::WardId(1),
        });

        let options = caregiver_options(&store);
        assert_eq!(options[0].label, "-- Add New Caregiver --");
        assert_eq!(options[1].label, "Mary Wanjiku - No phone");
    }
}
