//! Age classification
//!
//! Completed-years age computation plus the age-range buckets that drive
//! which form sections display. The cutoffs are programmatic contract, not
//! presentation: `is_child` decides whether the child-specific section shows
//! and which message the caregiver step carries.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Age bracket of a registrant
///
/// Boundaries are inclusive as labelled: 1-5 covers completed ages 1
/// through 5, 6-9 covers 6 through 9, and so on. A negative age (birth date
/// after the reference date) is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeRange {
    Unknown,
    #[serde(rename = "0-1")]
    Infant,
    #[serde(rename = "1-5")]
    EarlyChildhood,
    #[serde(rename = "6-9")]
    MiddleChildhood,
    #[serde(rename = "10-14")]
    EarlyAdolescent,
    #[serde(rename = "15-17")]
    LateAdolescent,
    #[serde(rename = "18+")]
    Adult,
}

impl AgeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeRange::Unknown => "Unknown",
            AgeRange::Infant => "0-1",
            AgeRange::EarlyChildhood => "1-5",
            AgeRange::MiddleChildhood => "6-9",
            AgeRange::EarlyAdolescent => "10-14",
            AgeRange::LateAdolescent => "15-17",
            AgeRange::Adult => "18+",
        }
    }
}

impl std::fmt::Display for AgeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Completed years between a birth date and a reference date
///
/// Calendar-year difference, minus one when the reference month/day falls
/// before the birth month/day. Negative when the birth date is in the
/// future relative to the reference.
pub fn age_in_years(date_of_birth: NaiveDate, reference: NaiveDate) -> i32 {
    let mut age = reference.year() - date_of_birth.year();
    if (reference.month(), reference.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

/// Bucket a completed-years age into its range
pub fn age_range(age: i32) -> AgeRange {
    if age < 0 {
        AgeRange::Unknown
    } else if age < 1 {
        AgeRange::Infant
    } else if age <= 5 {
        AgeRange::EarlyChildhood
    } else if age <= 9 {
        AgeRange::MiddleChildhood
    } else if age <= 14 {
        AgeRange::EarlyAdolescent
    } else if age <= 17 {
        AgeRange::LateAdolescent
    } else {
        AgeRange::Adult
    }
}

/// Whether a completed-years age counts as a child registration
pub fn is_child(age: i32) -> bool {
    (0..18).contains(&age)
}
