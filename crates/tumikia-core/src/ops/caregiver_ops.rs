use tumikia_core_types::CaregiverId;

use super::store::Store;
use crate::errors::{RegistryError, Result};
use crate::model::form::FieldId;
use crate::model::NewCaregiver;
use crate::wizard::WizardStep;

/// Create a caregiver outside the wizard (the standalone add path)
///
/// Presence-checks the name and phone, verifies the ward reference, then
/// allocates the next caregiver id and appends the record.
///
/// # Errors
/// * `ValidationFailed` - name or phone blank (advisory; nothing mutated)
/// * `WardNotFound` - the ward reference does not resolve
pub fn add_caregiver(store: &mut Store, new: NewCaregiver) -> Result<CaregiverId> {
    let mut missing = Vec::new();
    if new.names.trim().is_empty() {
        missing.push(FieldId::CaregiverNames);
    }
    if new.phone.trim().is_empty() {
        missing.push(FieldId::CaregiverPhone);
    }
    if !missing.is_empty() {
        return Err(RegistryError::ValidationFailed {
            step: WizardStep::Caregiver,
            missing,
        });
    }

    store.get_ward(new.ward_id)?;

    let id = store.allocate_caregiver_id();
    store.insert_caregiver(new.into_caregiver(id));
    Ok(id)
}
