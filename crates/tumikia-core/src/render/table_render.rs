//! Markdown table fragments for the listing views
//!
//! The presentation layer re-pulls these whenever a record surface
//! refreshes. Unknown lookups render as "N/A" rather than failing - a
//! listing should degrade, not error.

use crate::ops::Store;
use crate::queries::record_queries::{self, RecordFilters};

/// Render the filtered registrations listing
pub fn records_table(store: &Store, filters: &RecordFilters) -> String {
    let mut output = String::new();
    output.push_str("| Name | Gender | Age | HIV Status | School Level | Ward |\n");
    output.push_str("|---|---|---|---|---|---|\n");

    let records = record_queries::filter_records(store, filters);
    if records.is_empty() {
        output.push_str("| No records found | | | | | |\n");
        return output;
    }

    for record in records {
        let ward = store
            .get_ward(record.ward_id)
            .map(|w| w.name.clone())
            .unwrap_or_else(|_| "N/A".to_string());
        let school_level = record
            .school_level
            .map(|level| level.as_str().to_string())
            .unwrap_or_else(|| "N/A".to_string());
        output.push_str(&format!(
            "| {} | {} | {} yrs | {} | {} | {} |\n",
            record.names, record.gender, record.age, record.hiv_status, school_level, ward
        ));
    }
    output
}

/// Render the caregivers listing with per-caregiver OVC counts
pub fn caregivers_table(store: &Store) -> String {
    let mut output = String::new();
    output.push_str("| Name | Phone | HIV Status | OVCs |\n");
    output.push_str("|---|---|---|---|\n");

    if store.caregivers().is_empty() {
        output.push_str("| No caregivers found | | | |\n");
        return output;
    }

    for caregiver in store.caregivers() {
        let phone = caregiver.phone.as_deref().unwrap_or("N/A");
        let count = record_queries::caregiver_ovc_count(store, caregiver.id);
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            caregiver.names, phone, caregiver.hiv_status, count
        ));
    }
    output
}

/// Render the dashboard's recent-registrations listing
pub fn recent_registrations_table(store: &Store, limit: usize) -> String {
    let mut output = String::new();
    output.push_str("| ID | Name | Age | Gender | Registered |\n");
    output.push_str("|---|---|---|---|---|\n");

    let recent = record_queries::recent_registrations(store, limit);
    if recent.is_empty() {
        output.push_str("| No registrations yet | | | | |\n");
        return output;
    }

    for record in recent {
        output.push_str(&format!(
            "| {} | {} | {} yrs | {} | {} |\n",
            record.id,
            record.names,
            record.age,
            record.gender,
            super::detail_render::format_date(record.registration_date)
        ));
    }
    output
}
