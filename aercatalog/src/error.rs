//! Error types for the station catalog

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building or mutating the catalog
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A station with the same slug already exists
    #[error("Duplicate station slug: {0}")]
    DuplicateSlug(String),

    /// A seed record failed validation
    #[error("Invalid station: {0}")]
    InvalidStation(String),

    /// The seed list could not be parsed
    #[error("Seed parsing failed: {0}")]
    Seed(#[from] serde_yaml::Error),
}
