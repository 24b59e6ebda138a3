use serde::{Deserialize, Serialize};

/// Number of input columns the classifier was fit with.
pub const FEATURE_COUNT: usize = 30;

/// Column order the classifier was fit with. The encoder builds rows in
/// this order by construction; the model artifact carries its own copy and
/// the two are checked against each other before every inference.
pub const FEATURE_ORDER: [&str; FEATURE_COUNT] = [
    "school",
    "sex",
    "age",
    "address",
    "famsize",
    "Pstatus",
    "Medu",
    "Fedu",
    "Mjob",
    "Fjob",
    "reason",
    "guardian",
    "traveltime",
    "studytime",
    "failures",
    "schoolsup",
    "famsup",
    "paid",
    "activities",
    "nursery",
    "higher",
    "internet",
    "romantic",
    "famrel",
    "freetime",
    "goout",
    "Dalc",
    "Walc",
    "health",
    "absences",
];

/// One submitted observation, exactly as the form produces it: categorical
/// fields as labels, numeric and ordinal fields as integers. Immutable once
/// deserialized.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StudentRecord {
    pub school: String,
    pub sex: String,
    pub age: i32,
    pub address: String,
    pub famsize: String,
    #[serde(rename = "Pstatus")]
    pub pstatus: String,
    #[serde(rename = "Medu")]
    pub medu: i32,
    #[serde(rename = "Fedu")]
    pub fedu: i32,
    #[serde(rename = "Mjob")]
    pub mjob: String,
    #[serde(rename = "Fjob")]
    pub fjob: String,
    pub reason: String,
    pub guardian: String,
    pub traveltime: i32,
    pub studytime: i32,
    pub failures: i32,
    pub schoolsup: String,
    pub famsup: String,
    pub paid: String,
    pub activities: String,
    pub nursery: String,
    pub higher: String,
    pub internet: String,
    pub romantic: String,
    pub famrel: i32,
    pub freetime: i32,
    pub goout: i32,
    #[serde(rename = "Dalc")]
    pub dalc: i32,
    #[serde(rename = "Walc")]
    pub walc: i32,
    pub health: i32,
    pub absences: i32,
}

/// Numeric subset handed to the presentation layer for charting. These
/// fields pass through encoding unchanged, so the values here equal the
/// corresponding columns of the encoded record.
#[derive(Debug, Clone, Serialize)]
pub struct NumericSummary {
    pub age: i32,
    pub studytime: i32,
    pub failures: i32,
    pub famrel: i32,
    pub freetime: i32,
    pub goout: i32,
    #[serde(rename = "Dalc")]
    pub dalc: i32,
    #[serde(rename = "Walc")]
    pub walc: i32,
    pub health: i32,
    pub absences: i32,
}

impl NumericSummary {
    pub fn from_record(record: &StudentRecord) -> Self {
        Self {
            age: record.age,
            studytime: record.studytime,
            failures: record.failures,
            famrel: record.famrel,
            freetime: record.freetime,
            goout: record.goout,
            dalc: record.dalc,
            walc: record.walc,
            health: record.health,
            absences: record.absences,
        }
    }

    /// (name, value) pairs in chart order.
    pub fn pairs(&self) -> [(&'static str, i32); 10] {
        [
            ("age", self.age),
            ("studytime", self.studytime),
            ("failures", self.failures),
            ("famrel", self.famrel),
            ("freetime", self.freetime),
            ("goout", self.goout),
            ("Dalc", self.dalc),
            ("Walc", self.walc),
            ("health", self.health),
            ("absences", self.absences),
        ]
    }
}
