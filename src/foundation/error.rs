/// Crate-wide result alias.
pub type RevealResult<T> = Result<T, RevealError>;

/// Failure to obtain path outlines from a geometry provider.
///
/// The loader recovers from every variant by keeping the previously installed outlines.
#[derive(thiserror::Error, Debug)]
pub enum GeometryLoadError {
    /// The geometry source could not be read.
    #[error("geometry source unavailable: {0}")]
    Unavailable(String),

    /// The geometry source was read but could not be parsed.
    #[error("malformed geometry: {0}")]
    Malformed(String),

    /// The loader worker thread panicked before producing a result.
    #[error("geometry worker panicked")]
    WorkerPanicked,
}

impl GeometryLoadError {
    /// Build an [`GeometryLoadError::Unavailable`] error.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Build a [`GeometryLoadError::Malformed`] error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}

/// Top-level error type.
#[derive(thiserror::Error, Debug)]
pub enum RevealError {
    /// Geometry loading failed.
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryLoadError),

    /// A draw target rejected an operation.
    #[error("render error: {0}")]
    Render(String),

    /// Configuration (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RevealError {
    /// Build a [`RevealError::Render`] error.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`RevealError::Serde`] error.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
