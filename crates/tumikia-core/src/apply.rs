//! Functional-boundary apply function
//!
//! This module provides the `apply()` function, the canonical entry point
//! for atomic state mutations in the functional-boundary style.
//!
//! ## Atomicity Contract
//!
//! The `apply()` function guarantees:
//! - **All-or-nothing**: either the entire command succeeds and returns a
//!   valid new state, or it fails with a typed error and no partial
//!   mutation was applied
//! - **No panics**: invalid input returns typed errors
//! - **Validation before mutation**: both commands run all their checks
//!   ahead of the first append
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use tumikia_core::{apply, Command, NewCaregiver, Store};
//! use tumikia_core_types::{ConstituencyId, CountyId, WardId};
//! use tumikia_core::model::{County, Constituency, Ward};
//!
//! let mut state = Store::new();
//! state.insert_county(County::new(CountyId(1), "Mombasa"));
//! state.insert_constituency(Constituency::new(ConstituencyId(1), "Changamwe", CountyId(1)));
//! state.insert_ward(Ward::new(WardId(1), "Port Reitz", ConstituencyId(1)));
//!
//! let cmd = Command::CaregiverAdd {
//!     caregiver: NewCaregiver::new("Mary Wanjiku", "0712345678", WardId(1)),
//! };
//! let today = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
//! let new_state = apply(state, cmd, today).unwrap();
//! assert_eq!(new_state.caregivers().len(), 1);
//! ```

use chrono::NaiveDate;

use crate::commands::Command;
use crate::errors::Result;
use crate::ops::{caregiver_ops, registration_ops, Store};

/// Apply a command to a store, returning a new store state
///
/// This is the functional-boundary entry point for both mutating
/// operations. It takes ownership of the current state, executes the
/// command atomically against the given reference date, and returns either
/// a new valid state or an error.
///
/// Within a `RegistrationSubmit`, caregiver creation (if any) always
/// precedes the registration append, so the new registration's caregiver
/// reference resolves to a record already in the store.
///
/// # Errors
///
/// Returns `ValidationFailed` (advisory) when required fields are missing,
/// or a lookup error when a reference does not resolve. See
/// `RegistryError` for the full taxonomy.
pub fn apply(mut state: Store, cmd: Command, today: NaiveDate) -> Result<Store> {
    match cmd {
        Command::RegistrationSubmit { draft } => {
            registration_ops::submit(&mut state, &draft, today)?;
            Ok(state)
        }

        Command::CaregiverAdd { caregiver } => {
            caregiver_ops::add_caregiver(&mut state, caregiver)?;
            Ok(state)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tumikia_core_types::{ConstituencyId, CountyId, WardId};

    use crate::model::form::RegistrationDraft;
    use crate::model::registration::{Gender, Relationship};
    use crate::model::{Constituency, County, NewCaregiver, Ward};

    fn seeded_state() -> Store {
        let mut state = Store::new();
        state.insert_county(County::new(CountyId(1), "Mombasa"));
        state.insert_constituency(Constituency::new(ConstituencyId(1), "Changamwe", CountyId(1)));
        state.insert_ward(Ward::new(WardId(1), "Port Reitz", ConstituencyId(1)));
        state
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()
    }

    #[test]
    fn test_apply_caregiver_add() {
        let state = seeded_state();
        let cmd = Command::CaregiverAdd {
            caregiver: NewCaregiver::new("Mary Wanjiku", "0712345678", WardId(1)),
        };

        let new_state = apply(state, cmd, today()).unwrap();
        assert_eq!(new_state.caregivers().len(), 1);
    }

    #[test]
    fn test_apply_registration_submit() {
        let state = seeded_state();
        let mut draft = RegistrationDraft::new();
        draft.location.select_county(Some(CountyId(1)));
        draft.location.select_constituency(Some(ConstituencyId(1)));
        draft.location.select_ward(Some(WardId(1)));
        draft.names = "John Kamau".to_string();
        draft.gender = Some(Gender::Male);
        draft.date_of_birth = NaiveDate::from_ymd_opt(2015, 5, 10);
        draft.relationship = Some(Relationship::Guardian);

        let new_state = apply(state, Command::RegistrationSubmit { draft }, today()).unwrap();
        assert_eq!(new_state.registrations().len(), 1);
    }

    #[test]
    fn test_apply_invalid_command_returns_error() {
        let state = seeded_state();
        let cmd = Command::RegistrationSubmit {
            draft: RegistrationDraft::new(),
        };

        assert!(apply(state, cmd, today()).is_err());
    }
}
