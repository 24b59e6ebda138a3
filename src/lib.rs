//! Student performance prediction service.
//!
//! Collects a student record, encodes its categorical fields to the integer
//! codes the pre-trained classifier was fit with, and dispatches a single
//! prediction: a binary verdict (good performance means a final grade of 10
//! or better) plus a probability pair over [poor, good].
//!
//! Data flow: raw record → [`encode`] → encoded record → [`Model`] →
//! [`SubmissionOutcome`]. The whole cycle is exposed as
//! [`handle_submission`], independent of the HTTP layer in `main`.

pub mod config;
pub mod dispatch;
pub mod encode;
pub mod error;
pub mod model;
pub mod record;

pub use dispatch::{handle_submission, verdict_for, SubmissionOutcome, VERDICT_GOOD, VERDICT_POOR};
pub use encode::{encode, CategoricalMappings, EncodedRecord};
pub use error::{EncodeError, ModelError, PredictError};
pub use model::Model;
pub use record::{NumericSummary, StudentRecord, FEATURE_COUNT, FEATURE_ORDER};
