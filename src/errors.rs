// errors.rs
use thiserror::Error;

/// Errors returned by registry operations (store mutations, filter selections).
///
/// Every variant leaves the collection untouched; callers surface the message
/// and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A required field was empty, the contribution was negative, or a
    /// selection string named no known tier/status.
    #[error("Validation error: {0}")]
    Validation(String),

    /// No record with this id exists.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Errors raised while loading seed configuration.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed data {name}: {source}")]
    Json {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate id in seed data {name}: {id}")]
    DuplicateId { name: String, id: String },

    #[error("Invalid record in seed data {name}: {reason}")]
    Invalid { name: String, reason: String },
}

// Type aliases commonly used by store and loader functions.
pub type RegistryResult<T> = Result<T, RegistryError>;
pub type SeedResult<T> = Result<T, SeedError>;
