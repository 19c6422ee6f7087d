// Error taxonomy for the normalization pipeline.
//
// Only `MalformedStructure` is recoverable: the pipeline catches it and
// re-reads the answer line by line. Everything else ends the invocation
// and no post is produced.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The answer is not JSON, or is JSON without a `content` list.
    #[error("answer is not a structured post: {0}")]
    MalformedStructure(String),

    /// A declared block could not be read as its kind.
    #[error("content block {index} is invalid: {reason}")]
    InvalidBlock { index: usize, reason: String },

    /// A declared block carries a type outside the five known kinds.
    #[error("content block {index} has unsupported type {kind:?}")]
    UnsupportedBlock { index: usize, kind: String },

    /// A top-level field (title, tags, summary) has the wrong shape.
    #[error("field {field:?} is invalid: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// The image slotter received a sequence it cannot place.
    #[error("image placement invariant violated: {0}")]
    InvariantViolation(String),
}

impl NormalizeError {
    pub fn is_recoverable(&self) -> bool {
        matches!(self, NormalizeError::MalformedStructure(_))
    }
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
