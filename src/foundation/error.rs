/// Convenience result type used across chalkline.
pub type ChalklineResult<T> = Result<T, ChalklineError>;

/// Top-level error taxonomy used by boundary APIs.
///
/// Compilation and evaluation never fail; these errors only surface when loading configuration,
/// parsing content or scene documents, and validating user-provided settings.
#[derive(thiserror::Error, Debug)]
pub enum ChalklineError {
    /// Invalid user-provided configuration or content.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChalklineError {
    /// Build a [`ChalklineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ChalklineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ChalklineError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
