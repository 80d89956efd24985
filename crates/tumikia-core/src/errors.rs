use thiserror::Error;
use tumikia_core_types::RequestId;

use crate::model::form::FieldId;
use crate::wizard::WizardStep;

/// Result type alias using RegistryError
pub type Result<T> = std::result::Result<T, RegistryError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of all errors
/// in the registry. Each kind maps to a stable error code usable for
/// programmatic handling and testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegErrorKind {
    // Input / form
    ValidationFailed,
    InvalidInput,

    // Lookup
    NotFound,

    // Store integrity
    DuplicateId,
    DanglingReference,
    CounterBehindSeed,

    // Integration
    Serialization,

    // Internal
    Internal,
}

impl RegErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            RegErrorKind::ValidationFailed => "ERR_VALIDATION_FAILED",
            RegErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            RegErrorKind::NotFound => "ERR_NOT_FOUND",
            RegErrorKind::DuplicateId => "ERR_DUPLICATE_ID",
            RegErrorKind::DanglingReference => "ERR_DANGLING_REFERENCE",
            RegErrorKind::CounterBehindSeed => "ERR_COUNTER_BEHIND_SEED",
            RegErrorKind::Serialization => "ERR_SERIALIZATION",
            RegErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the kind classification plus whatever context the failing
/// operation had: the operation name, the offending entity, the wizard step
/// and the request being handled.
#[derive(Debug, Clone)]
pub struct RegError {
    kind: RegErrorKind,
    op: Option<String>,
    entity: Option<String>,
    step: Option<WizardStep>,
    request_id: Option<RequestId>,
    message: String,
}

impl RegError {
    /// Create a new error with the specified kind
    pub fn new(kind: RegErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity: None,
            step: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (e.g. "ward:4", "caregiver:12")
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Add wizard step context
    pub fn with_step(mut self, step: WizardStep) -> Self {
        self.step = Some(step);
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> RegErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity context, if any
    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    /// Get the wizard step context, if any
    pub fn step(&self) -> Option<WizardStep> {
        self.step
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for RegError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity) = &self.entity {
            write!(f, " (entity: {})", entity)?;
        }
        if let Some(step) = self.step {
            write!(f, " (step: {})", step.number())?;
        }
        Ok(())
    }
}

impl std::error::Error for RegError {}

// ========== End Error Facility ==========

/// Comprehensive error taxonomy for registry operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    // ===== Form / Wizard Errors =====
    /// A required field of the given wizard step is missing or blank.
    /// Advisory: the triggering intent is refused and nothing is mutated.
    #[error("Validation failed at step {}: {} required field(s) missing", .step.number(), .missing.len())]
    ValidationFailed {
        step: WizardStep,
        missing: Vec<FieldId>,
    },

    /// A text update was routed to a field that is not free-text
    #[error("Field '{field}' does not accept free text")]
    FieldNotText { field: FieldId },

    // ===== Lookup Errors =====
    /// County not found in store
    #[error("County not found: {county_id}")]
    CountyNotFound { county_id: u32 },

    /// Constituency not found in store
    #[error("Constituency not found: {constituency_id}")]
    ConstituencyNotFound { constituency_id: u32 },

    /// Ward not found in store
    #[error("Ward not found: {ward_id}")]
    WardNotFound { ward_id: u32 },

    /// CBO not found in store
    #[error("CBO not found: {cbo_id}")]
    CboNotFound { cbo_id: u32 },

    /// School not found in store
    #[error("School not found: {school_id}")]
    SchoolNotFound { school_id: u32 },

    /// Health facility not found in store
    #[error("Facility not found: {facility_id}")]
    FacilityNotFound { facility_id: u32 },

    /// Caregiver not found in store
    #[error("Caregiver not found: {caregiver_id}")]
    CaregiverNotFound { caregiver_id: u32 },

    /// OVC registration not found in store
    #[error("Registration not found: {ovc_id}")]
    RegistrationNotFound { ovc_id: u32 },

    // ===== Store Integrity Errors =====
    /// Two records of the same collection share an id
    #[error("Duplicate id {id} in {collection}")]
    DuplicateId { collection: &'static str, id: u32 },

    /// A constituency references a county that does not exist
    #[error("Constituency {constituency_id} references unknown county {county_id}")]
    ConstituencyWithoutCounty {
        constituency_id: u32,
        county_id: u32,
    },

    /// A ward references a constituency that does not exist
    #[error("Ward {ward_id} references unknown constituency {constituency_id}")]
    WardWithoutConstituency { ward_id: u32, constituency_id: u32 },

    /// A ward-scoped record references a ward that does not exist
    #[error("{kind} {id} references unknown ward {ward_id}")]
    RecordWithoutWard {
        kind: &'static str,
        id: u32,
        ward_id: u32,
    },

    /// A registration's present optional reference points nowhere.
    /// (An absent reference is a valid state, never this error.)
    #[error("Registration {ovc_id} has dangling {field} reference: {target}")]
    RegistrationDanglingReference {
        ovc_id: u32,
        field: &'static str,
        target: u32,
    },

    /// A store counter would re-issue an id already present in seed data
    #[error("{collection} counter would collide with seeded id {id}")]
    CounterBehindSeed { collection: &'static str, id: u32 },

    // ===== Generic Errors =====
    /// Serialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl RegistryError {
    /// Whether this error is advisory: the user corrects input and retries,
    /// nothing is escalated and no state was mutated.
    pub fn is_advisory(&self) -> bool {
        matches!(self, RegistryError::ValidationFailed { .. })
    }
}

/// Conversion from RegistryError to the canonical error facility
impl From<RegistryError> for RegError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::ValidationFailed { step, missing } => {
                let labels: Vec<&str> = missing.iter().map(|f| f.label()).collect();
                RegError::new(RegErrorKind::ValidationFailed)
                    .with_step(step)
                    .with_message(format!("Missing required fields: {}", labels.join(", ")))
            }

            RegistryError::FieldNotText { field } => RegError::new(RegErrorKind::InvalidInput)
                .with_message(format!("Field '{}' does not accept free text", field)),

            RegistryError::CountyNotFound { county_id } => RegError::new(RegErrorKind::NotFound)
                .with_entity(format!("county:{}", county_id))
                .with_message("County not found"),

            RegistryError::ConstituencyNotFound { constituency_id } => {
                RegError::new(RegErrorKind::NotFound)
                    .with_entity(format!("constituency:{}", constituency_id))
                    .with_message("Constituency not found")
            }

            RegistryError::WardNotFound { ward_id } => RegError::new(RegErrorKind::NotFound)
                .with_entity(format!("ward:{}", ward_id))
                .with_message("Ward not found"),

            RegistryError::CboNotFound { cbo_id } => RegError::new(RegErrorKind::NotFound)
                .with_entity(format!("cbo:{}", cbo_id))
                .with_message("CBO not found"),

            RegistryError::SchoolNotFound { school_id } => RegError::new(RegErrorKind::NotFound)
                .with_entity(format!("school:{}", school_id))
                .with_message("School not found"),

            RegistryError::FacilityNotFound { facility_id } => RegError::new(RegErrorKind::NotFound)
                .with_entity(format!("facility:{}", facility_id))
                .with_message("Facility not found"),

            RegistryError::CaregiverNotFound { caregiver_id } => {
                RegError::new(RegErrorKind::NotFound)
                    .with_entity(format!("caregiver:{}", caregiver_id))
                    .with_message("Caregiver not found")
            }

            RegistryError::RegistrationNotFound { ovc_id } => RegError::new(RegErrorKind::NotFound)
                .with_entity(format!("ovc:{}", ovc_id))
                .with_message("Registration not found"),

            RegistryError::DuplicateId { collection, id } => {
                RegError::new(RegErrorKind::DuplicateId)
                    .with_entity(format!("{}:{}", collection, id))
                    .with_message("Duplicate id")
            }

            RegistryError::ConstituencyWithoutCounty {
                constituency_id,
                county_id,
            } => RegError::new(RegErrorKind::DanglingReference)
                .with_entity(format!("constituency:{}", constituency_id))
                .with_message(format!("References unknown county {}", county_id)),

            RegistryError::WardWithoutConstituency {
                ward_id,
                constituency_id,
            } => RegError::new(RegErrorKind::DanglingReference)
                .with_entity(format!("ward:{}", ward_id))
                .with_message(format!("References unknown constituency {}", constituency_id)),

            RegistryError::RecordWithoutWard { kind, id, ward_id } => {
                RegError::new(RegErrorKind::DanglingReference)
                    .with_entity(format!("{}:{}", kind, id))
                    .with_message(format!("References unknown ward {}", ward_id))
            }

            RegistryError::RegistrationDanglingReference {
                ovc_id,
                field,
                target,
            } => RegError::new(RegErrorKind::DanglingReference)
                .with_entity(format!("ovc:{}", ovc_id))
                .with_message(format!("Dangling {} reference: {}", field, target)),

            RegistryError::CounterBehindSeed { collection, id } => {
                RegError::new(RegErrorKind::CounterBehindSeed)
                    .with_entity(format!("{}:{}", collection, id))
                    .with_message("Counter would re-issue a seeded id")
            }

            RegistryError::Serialization { message } => {
                RegError::new(RegErrorKind::Serialization).with_message(message)
            }

            RegistryError::Internal { message } => {
                RegError::new(RegErrorKind::Internal).with_message(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (RegErrorKind::ValidationFailed, "ERR_VALIDATION_FAILED"),
            (RegErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
            (RegErrorKind::NotFound, "ERR_NOT_FOUND"),
            (RegErrorKind::DuplicateId, "ERR_DUPLICATE_ID"),
            (RegErrorKind::DanglingReference, "ERR_DANGLING_REFERENCE"),
            (RegErrorKind::CounterBehindSeed, "ERR_COUNTER_BEHIND_SEED"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_validation_failed_is_advisory() {
        let err = RegistryError::ValidationFailed {
            step: WizardStep::Location,
            missing: vec![FieldId::County],
        };
        assert!(err.is_advisory());
        assert!(!RegistryError::WardNotFound { ward_id: 9 }.is_advisory());
    }

    #[test]
    fn test_facility_conversion_carries_step() {
        let err = RegistryError::ValidationFailed {
            step: WizardStep::Health,
            missing: vec![FieldId::HivStatus],
        };
        let reg: RegError = err.into();
        assert_eq!(reg.kind(), RegErrorKind::ValidationFailed);
        assert_eq!(reg.step(), Some(WizardStep::Health));
        assert!(reg.message().contains("HIV Status"));
    }

    #[test]
    fn test_facility_display() {
        let reg = RegError::new(RegErrorKind::NotFound)
            .with_op("get_ward")
            .with_entity("ward:4")
            .with_message("Ward not found");
        let text = reg.to_string();
        assert!(text.contains("ERR_NOT_FOUND"));
        assert!(text.contains("get_ward"));
        assert!(text.contains("ward:4"));
    }
}
