use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Gradebook configuration.
///
/// Example YAML:
/// ```yaml
/// student: "Ivan"
/// subjects_file: subjects.csv
/// subject_column: "Предмет"
/// entries:
///   - { subject: "Математика", grade: 4 }
///   - { subject: "Математика", test_result: 80 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Student name, validated when the record is built
    pub student: String,

    /// Inline subject list. Mutually exclusive with `subjects_file`.
    #[serde(default)]
    pub subjects: Option<Vec<String>>,

    /// CSV file with a header row. Relative paths resolve against the
    /// directory holding the config file.
    #[serde(default)]
    pub subjects_file: Option<PathBuf>,

    /// CSV column with subject names (default: "Предмет")
    #[serde(default)]
    pub subject_column: Option<String>,

    /// Grades and test results to record, in order
    #[serde(default)]
    pub entries: Vec<EntryConfig>,
}

/// One recorded value. Exactly one of `grade` and `test_result` is set.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EntryConfig {
    pub subject: String,

    #[serde(default)]
    pub grade: Option<i32>,

    #[serde(default)]
    pub test_result: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryValue {
    Grade(i32),
    TestResult(i32),
}

impl EntryConfig {
    /// The value to record, or None if the entry sets neither or both fields.
    pub fn value(&self) -> Option<EntryValue> {
        match (self.grade, self.test_result) {
            (Some(g), None) => Some(EntryValue::Grade(g)),
            (None, Some(r)) => Some(EntryValue::TestResult(r)),
            _ => None,
        }
    }
}
