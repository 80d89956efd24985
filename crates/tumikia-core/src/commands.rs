//! Command types for the registry's mutating operations
//!
//! This module defines the command inventory processed by the `apply()`
//! function. There are exactly two mutations in the whole system, both
//! append-only.

use crate::model::form::RegistrationDraft;
use crate::model::NewCaregiver;

/// Command enum representing every mutating operation
///
/// Commands are processed by the `apply()` function, which takes ownership
/// of the current state, executes the command, and returns a new valid
/// state.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Submit a completed registration draft, creating the registration and
    /// (when the draft carries new-caregiver details) its caregiver
    RegistrationSubmit { draft: RegistrationDraft },

    /// Create a caregiver outside the wizard
    CaregiverAdd { caregiver: NewCaregiver },
}

#[cfg(test)]
mod tests {
    use super::*;
    use tumikia_core_types::WardId;

    #[test]
    fn test_command_registration_submit() {
        let cmd = Command::RegistrationSubmit {
            draft: RegistrationDraft::new(),
        };

        match cmd {
            Command::RegistrationSubmit { draft } => {
                assert!(draft.names.is_empty());
            }
            _ => panic!("Wrong command variant"),
        }
    }

    #[test]
    fn test_command_clone() {
        let cmd1 = Command::CaregiverAdd {
            caregiver: NewCaregiver::new("Mary Wanjiku", "0712345678", WardId(1)),
        };
        let cmd2 = cmd1.clone();
        assert_eq!(cmd1, cmd2);
    }
}
