use thiserror::Error;

/// Opaque message surfaced to callers when persistence fails unexpectedly.
pub const INTERNAL_ERROR_MESSAGE: &str = "Unexpected error, check server logs";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Validation: {0}")]
    Validation(String),

    #[error("{entity} with {field} {value} not found")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// Unique constraint violation; carries the datastore's constraint detail.
    #[error("{0}")]
    Duplicate(String),

    /// Raw persistence failure as reported by a repository.
    #[error("Database error: {0}")]
    Storage(String),

    /// Persistence failure after classification at the service boundary.
    #[error("{0}")]
    Internal(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, field: &'static str, value: impl Into<String>) -> Self {
        DomainError::NotFound {
            entity,
            field,
            value: value.into(),
        }
    }

    pub fn internal() -> Self {
        DomainError::Internal(INTERNAL_ERROR_MESSAGE.to_string())
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
