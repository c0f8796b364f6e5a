/// Convenience result type used across the crate.
pub type StoryResult<T> = Result<T, StoryError>;

/// Top-level error taxonomy used by story APIs.
#[derive(thiserror::Error, Debug)]
pub enum StoryError {
    /// Scene index outside the supported set `{1, 2, 3}`.
    #[error("invalid scene: {0} (expected 1, 2 or 3)")]
    InvalidScene(u8),

    /// Geography could not be fetched or decoded.
    #[error("geography load error: {0}")]
    GeographyLoad(String),

    /// Invalid user-provided configuration or dataset.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors while turning a draw list into pixels.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoryError {
    /// Build a [`StoryError::GeographyLoad`] value.
    pub fn geography(msg: impl Into<String>) -> Self {
        Self::GeographyLoad(msg.into())
    }

    /// Build a [`StoryError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StoryError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`StoryError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
