use crate::runtime::ElementId;

/// Result alias that carries the custom [`MotionError`] type.
pub type Result<T> = std::result::Result<T, MotionError>;

/// Common error type for the core crate.
///
/// Only the strict entry points (keyword parsing, file loading, document
/// lookups) produce these. The compiler and the trigger strategies fall back
/// to defaults instead of failing.
#[derive(Debug, thiserror::Error)]
pub enum MotionError {
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Configuration or block attribute JSON that could not be decoded.
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    /// A keyword field held a value outside its domain.
    #[error("unknown {field} `{value}`")]
    InvalidKeyword { field: &'static str, value: String },
    /// A scroll range string that is not `<range-name> <percent>%`.
    #[error("invalid scroll range `{0}`")]
    InvalidRange(String),
    /// The document has no element with the requested id.
    #[error("no element with id {0}")]
    UnknownElement(ElementId),
}

impl MotionError {
    pub(crate) fn keyword(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidKeyword {
            field,
            value: value.into(),
        }
    }
}
