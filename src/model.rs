use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ModelError;

/// On-disk state of the trained binary classifier: the feature order it
/// was fit with, one coefficient per feature, the intercept, and the class
/// list. Callers never see this shape; it exists only to load `Model`.
#[derive(Deserialize)]
struct ArtifactJson {
    feature_names: Vec<String>,
    coef: Vec<f32>,
    intercept: f32,
    classes: Vec<i32>,
}

/// The loaded classifier. Constructed once at startup, then shared
/// read-only; prediction takes one encoded row at a time.
#[derive(Debug)]
pub struct Model {
    feature_names: Vec<String>,
    coef: Vec<f32>,
    intercept: f32,
}

impl Model {
    /// Loads and validates the serialized artifact. Any inconsistency is
    /// fatal here rather than at the first prediction.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let raw = fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ModelError> {
        let artifact: ArtifactJson = serde_json::from_str(raw)?;
        if artifact.coef.len() != artifact.feature_names.len() {
            return Err(ModelError::Malformed(format!(
                "{} coefficients for {} features",
                artifact.coef.len(),
                artifact.feature_names.len()
            )));
        }
        if artifact.classes != [0, 1] {
            return Err(ModelError::Malformed(format!(
                "expected classes [0, 1], artifact has {:?}",
                artifact.classes
            )));
        }
        Ok(Self {
            feature_names: artifact.feature_names,
            coef: artifact.coef,
            intercept: artifact.intercept,
        })
    }

    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    /// Authoritative input order, as recorded in the artifact.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Checks the caller's column names and order against the order the
    /// model was fit with. A reordered or renamed column would otherwise
    /// silently corrupt every prediction.
    pub fn check_schema(&self, columns: &[&str]) -> Result<(), ModelError> {
        if columns.len() != self.feature_names.len() {
            return Err(ModelError::ShapeMismatch {
                got: columns.len(),
                expected: self.feature_names.len(),
            });
        }
        for (index, (got, expected)) in columns.iter().zip(self.feature_names.iter()).enumerate() {
            if got != expected {
                return Err(ModelError::SchemaMismatch {
                    index,
                    got: got.to_string(),
                    expected: expected.clone(),
                });
            }
        }
        Ok(())
    }

    fn decision(&self, row: &[f32]) -> Result<f32, ModelError> {
        if row.len() != self.coef.len() {
            return Err(ModelError::ShapeMismatch {
                got: row.len(),
                expected: self.coef.len(),
            });
        }
        let score: f32 = self
            .coef
            .iter()
            .zip(row.iter())
            .map(|(coef, value)| coef * value)
            .sum();
        Ok(score + self.intercept)
    }

    /// Binary label for one encoded row: 1 = good performance, 0 = poor.
    pub fn predict(&self, row: &[f32]) -> Result<i32, ModelError> {
        let [_, p_good] = self.predict_proba(row)?;
        Ok(if p_good >= 0.5 { 1 } else { 0 })
    }

    /// Probability pair aligned to classes [0 (poor), 1 (good)].
    pub fn predict_proba(&self, row: &[f32]) -> Result<[f32; 2], ModelError> {
        let p_good = sigmoid(self.decision(row)?);
        Ok([1.0 - p_good, p_good])
    }
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}
