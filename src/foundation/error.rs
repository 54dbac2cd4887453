/// Convenience result type used across heatbrush.
pub type HeatbrushResult<T> = Result<T, HeatbrushError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum HeatbrushError {
    /// Invalid user-provided configuration, input events or documents.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while reading or colour-mapping pixel buffers.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while composing or encoding an output raster.
    #[error("export error: {0}")]
    Export(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HeatbrushError {
    /// Build a [`HeatbrushError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HeatbrushError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`HeatbrushError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Build a [`HeatbrushError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
