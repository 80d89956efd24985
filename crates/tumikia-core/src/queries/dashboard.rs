//! Dashboard and report aggregates
//!
//! Recomputed from the store whenever a record surface refreshes; no counts
//! are cached anywhere.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::age;
use crate::model::registration::HivStatus;
use crate::ops::Store;

/// Headline counters shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_registrations: usize,
    /// Registrants aged 0-17 as of the reference date
    pub children: usize,
    pub caregivers: usize,
    /// Registrations stamped in the reference date's calendar month
    pub registered_this_month: usize,
}

/// Compute the dashboard counters against a reference date
pub fn dashboard_summary(store: &Store, today: NaiveDate) -> DashboardSummary {
    let registrations = store.registrations();
    DashboardSummary {
        total_registrations: registrations.len(),
        children: registrations
            .iter()
            .filter(|r| age::is_child(age::age_in_years(r.date_of_birth, today)))
            .count(),
        caregivers: store.caregivers().len(),
        registered_this_month: registrations
            .iter()
            .filter(|r| {
                r.registration_date.year() == today.year()
                    && r.registration_date.month() == today.month()
            })
            .count(),
    }
}

/// Counters for the reports view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total: usize,
    pub hiv_positive: usize,
    pub hiv_negative: usize,
    pub hiv_exposed: usize,
    /// Registrants with a school level that counts as attending
    pub in_school: usize,
    pub caregivers: usize,
}

/// Compute the report counters
pub fn report_summary(store: &Store) -> ReportSummary {
    let registrations = store.registrations();
    let by_status = |status: HivStatus| {
        registrations
            .iter()
            .filter(|r| r.hiv_status == status)
            .count()
    };
    ReportSummary {
        total: registrations.len(),
        hiv_positive: by_status(HivStatus::Positive),
        hiv_negative: by_status(HivStatus::Negative),
        hiv_exposed: by_status(HivStatus::Exposed),
        in_school: registrations
            .iter()
            .filter(|r| r.school_level.is_some_and(|level| level.in_school()))
            .count(),
        caregivers: store.caregivers().len(),
    }
}
