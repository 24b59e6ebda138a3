use std::path::PathBuf;
use thiserror::Error;

/// Encoding failure: a categorical value outside its known enumeration.
/// The encoder never substitutes a default code.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("unknown label {label:?} for field {field:?}")]
    UnknownLabel { field: &'static str, label: String },
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model artifact at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("model artifact is inconsistent: {0}")]
    Malformed(String),
    #[error("feature length mismatch: got {got}, expected {expected}")]
    ShapeMismatch { got: usize, expected: usize },
    #[error("column {index} is {got:?} but the model was fit with {expected:?}")]
    SchemaMismatch {
        index: usize,
        got: String,
        expected: String,
    },
}

/// Anything that can fail a single submission. Nothing here is retried;
/// every variant surfaces to the caller.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Model(#[from] ModelError),
}
