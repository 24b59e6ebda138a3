use std::collections::HashMap;

use crate::error::EncodeError;
use crate::record::{StudentRecord, FEATURE_COUNT, FEATURE_ORDER};

const BINARY_YES_NO: &[(&str, i32)] = &[("no", 0), ("yes", 1)];

const PARENT_JOB: &[(&str, i32)] = &[
    ("at_home", 0),
    ("health", 1),
    ("other", 2),
    ("services", 3),
    ("teacher", 4),
];

/// Declared enumerations, one (label, code) pair per legal value. Codes
/// match the encoding the classifier was fit with.
const TABLE_LAYOUT: &[(&str, &[(&str, i32)])] = &[
    ("school", &[("GP", 0), ("MS", 1)]),
    ("sex", &[("F", 0), ("M", 1)]),
    ("address", &[("U", 0), ("R", 1)]),
    ("famsize", &[("LE3", 0), ("GT3", 1)]),
    ("Pstatus", &[("A", 0), ("T", 1)]),
    ("schoolsup", BINARY_YES_NO),
    ("famsup", BINARY_YES_NO),
    ("paid", BINARY_YES_NO),
    ("activities", BINARY_YES_NO),
    ("nursery", BINARY_YES_NO),
    ("higher", BINARY_YES_NO),
    ("internet", BINARY_YES_NO),
    ("romantic", BINARY_YES_NO),
    ("Mjob", PARENT_JOB),
    ("Fjob", PARENT_JOB),
    (
        "reason",
        &[("course", 0), ("home", 1), ("other", 2), ("reputation", 3)],
    ),
    (
        "guardian",
        &[("father", 0), ("mother", 1), ("other", 2)],
    ),
];

/// Label → code tables for every categorical field. Built once at startup
/// and passed by reference wherever encoding happens; never mutated.
pub struct CategoricalMappings {
    tables: HashMap<&'static str, HashMap<&'static str, i32>>,
}

impl CategoricalMappings {
    pub fn new() -> Self {
        let tables = TABLE_LAYOUT
            .iter()
            .map(|(field, pairs)| (*field, pairs.iter().copied().collect()))
            .collect();
        Self { tables }
    }

    /// The declared enumerations, as (field, [(label, code)]) entries.
    pub fn layout() -> &'static [(&'static str, &'static [(&'static str, i32)])] {
        TABLE_LAYOUT
    }

    /// Integer code for a categorical label. Errors when the label is not
    /// in the field's enumeration.
    pub fn code(&self, field: &'static str, label: &str) -> Result<i32, EncodeError> {
        self.tables
            .get(field)
            .and_then(|table| table.get(label))
            .copied()
            .ok_or_else(|| EncodeError::UnknownLabel {
                field,
                label: label.to_string(),
            })
    }
}

impl Default for CategoricalMappings {
    fn default() -> Self {
        Self::new()
    }
}

/// A fully numeric observation in the model-expected column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRecord {
    values: [i32; FEATURE_COUNT],
}

impl EncodedRecord {
    /// Column names, aligned with `values()`.
    pub fn columns() -> &'static [&'static str] {
        &FEATURE_ORDER
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Value of a single column, by name.
    pub fn get(&self, column: &str) -> Option<i32> {
        FEATURE_ORDER
            .iter()
            .position(|name| *name == column)
            .map(|index| self.values[index])
    }

    /// The row as the model consumes it.
    pub fn model_row(&self) -> [f32; FEATURE_COUNT] {
        let mut row = [0.0; FEATURE_COUNT];
        for (slot, value) in row.iter_mut().zip(self.values.iter()) {
            *slot = *value as f32;
        }
        row
    }
}

/// Encodes a raw record: categorical fields become their integer codes,
/// numeric and ordinal fields pass through unchanged. Pure function of the
/// record and the mapping tables.
///
/// The initializer below is the single place that fixes column order; it
/// mirrors `FEATURE_ORDER` entry for entry.
pub fn encode(
    record: &StudentRecord,
    mappings: &CategoricalMappings,
) -> Result<EncodedRecord, EncodeError> {
    let values = [
        mappings.code("school", &record.school)?,
        mappings.code("sex", &record.sex)?,
        record.age,
        mappings.code("address", &record.address)?,
        mappings.code("famsize", &record.famsize)?,
        mappings.code("Pstatus", &record.pstatus)?,
        record.medu,
        record.fedu,
        mappings.code("Mjob", &record.mjob)?,
        mappings.code("Fjob", &record.fjob)?,
        mappings.code("reason", &record.reason)?,
        mappings.code("guardian", &record.guardian)?,
        record.traveltime,
        record.studytime,
        record.failures,
        mappings.code("schoolsup", &record.schoolsup)?,
        mappings.code("famsup", &record.famsup)?,
        mappings.code("paid", &record.paid)?,
        mappings.code("activities", &record.activities)?,
        mappings.code("nursery", &record.nursery)?,
        mappings.code("higher", &record.higher)?,
        mappings.code("internet", &record.internet)?,
        mappings.code("romantic", &record.romantic)?,
        record.famrel,
        record.freetime,
        record.goout,
        record.dalc,
        record.walc,
        record.health,
        record.absences,
    ];
    Ok(EncodedRecord { values })
}
