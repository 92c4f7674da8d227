/// Convenience result type used across scrawl.
pub type ScrawlResult<T> = Result<T, ScrawlError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Rendering itself is total; errors only come from asset initialization and from parsing
/// user-facing configuration.
#[derive(thiserror::Error, Debug)]
pub enum ScrawlError {
    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// An embedded asset (glyph sprite sheet) could not be decoded.
    #[error("asset error: {0}")]
    Asset(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrawlError {
    /// Build a [`ScrawlError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrawlError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`ScrawlError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
