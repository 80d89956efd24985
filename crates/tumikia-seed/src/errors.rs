use thiserror::Error;

/// Result type alias using SeedError
pub type Result<T> = std::result::Result<T, SeedError>;

/// Errors from parsing or importing a seed document
#[derive(Error, Debug)]
pub enum SeedError {
    /// The document is not valid YAML for the declared format
    #[error("YAML parse error: {message}")]
    Parse { message: String },

    /// The document decoded but violates the seed contract
    #[error("Seed validation failed: {message}")]
    Validation { message: String },

    /// The built store failed the registry's own integrity sweep
    #[error(transparent)]
    Registry(#[from] tumikia_core::errors::RegistryError),
}

/// Construct a validation error with a formatted message
pub fn seed_validation(message: &str) -> SeedError {
    SeedError::Validation {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = seed_validation("Unsupported schema_version: 3. Expected 0");
        assert!(err.to_string().contains("Unsupported schema_version"));
    }
}
