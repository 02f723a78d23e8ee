use thiserror::Error;

/// Errors raised while constructing or decoding version descriptors
#[derive(Debug, Error)]
pub enum VersionError {
    #[error("The {name} cannot be empty")]
    EmptyArgument { name: &'static str },

    #[error("Malformed XML: {0}")]
    MalformedXml(String),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Errors raised while fetching a version descriptor from a remote location
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Version descriptor not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Errors surfaced by the version checker, combining both layers
#[derive(Debug, Error)]
pub enum CheckerError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Version(#[from] VersionError),
}

/// Rejects empty strings where a value is required, naming the parameter.
pub(crate) fn check_non_empty(value: &str, name: &'static str) -> Result<(), VersionError> {
    if value.is_empty() {
        return Err(VersionError::EmptyArgument { name });
    }
    Ok(())
}
