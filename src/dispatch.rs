use serde::Serialize;

use crate::encode::{encode, CategoricalMappings, EncodedRecord};
use crate::error::PredictError;
use crate::model::Model;
use crate::record::{NumericSummary, StudentRecord};

pub const VERDICT_GOOD: &str = "Good Performance (G3 ≥ 10)";
pub const VERDICT_POOR: &str = "Poor Performance (G3 < 10)";

/// Human-readable verdict for a model label.
pub fn verdict_for(label: i32) -> &'static str {
    if label == 1 {
        VERDICT_GOOD
    } else {
        VERDICT_POOR
    }
}

/// Everything the presentation layer gets for one submission: the verdict
/// with its label, the probability pair over [poor, good], the encoded
/// record (shown back to the user), and the numeric subset for charting.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionOutcome {
    pub verdict: &'static str,
    pub label: i32,
    pub probabilities: [f32; 2],
    pub encoded: Vec<i32>,
    pub features: NumericSummary,
}

/// One stateless request/response cycle: encode, check the column schema
/// against the artifact, predict, and interpret. Callable without any HTTP
/// machinery; the server handler is a thin wrapper around this.
pub fn handle_submission(
    model: &Model,
    mappings: &CategoricalMappings,
    record: &StudentRecord,
) -> Result<SubmissionOutcome, PredictError> {
    let encoded = encode(record, mappings)?;
    model.check_schema(EncodedRecord::columns())?;

    let row = encoded.model_row();
    let label = model.predict(&row)?;
    let probabilities = model.predict_proba(&row)?;

    Ok(SubmissionOutcome {
        verdict: verdict_for(label),
        label,
        probabilities,
        encoded: encoded.values().to_vec(),
        features: NumericSummary::from_record(record),
    })
}
