use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Serialize;

use super::error::RecordError;
use super::name::StudentName;
use super::stats::mean;
use crate::subjects::SubjectSource;

pub const GRADE_MIN: i32 = 2;
pub const GRADE_MAX: i32 = 5;
pub const TEST_RESULT_MIN: i32 = 0;
pub const TEST_RESULT_MAX: i32 = 100;

/// Append-only values per subject slot.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ScoreLog(Vec<Vec<i32>>);

impl ScoreLog {
    fn with_slots(count: usize) -> Self {
        Self(vec![Vec::new(); count])
    }

    fn push(&mut self, slot: usize, value: i32) {
        self.0[slot].push(value);
    }

    fn slot(&self, slot: usize) -> &[i32] {
        &self.0[slot]
    }

    /// All values, slot order first, then append order.
    fn flatten(&self) -> impl Iterator<Item = i32> + '_ {
        self.0.iter().flatten().copied()
    }
}

/// Grades and test results of one student, keyed by a fixed set of subjects.
///
/// Writes are strict: an unknown subject or out-of-range value is rejected
/// and nothing is recorded. Reads are lenient: averages of unknown or empty
/// subjects are 0.
///
/// Duplicate names in the subject list share a single slot. The list itself
/// is kept as supplied and is what error messages enumerate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    name: StudentName,
    subjects: Vec<String>,
    slots: HashMap<String, usize>,
    order: Vec<String>,
    grades: ScoreLog,
    test_results: ScoreLog,
}

impl StudentRecord {
    /// Validate `name` and open an empty grade and test-result slot per distinct subject.
    pub fn new<S>(name: &str, subjects: S) -> Result<Self, RecordError>
    where
        S: IntoIterator,
        S::Item: Into<String>,
    {
        let name = StudentName::parse(name)?;
        let subjects: Vec<String> = subjects.into_iter().map(Into::into).collect();

        let mut slots = HashMap::new();
        let mut order = Vec::new();
        for subject in &subjects {
            if !slots.contains_key(subject) {
                slots.insert(subject.clone(), order.len());
                order.push(subject.clone());
            }
        }

        Ok(Self {
            name,
            grades: ScoreLog::with_slots(order.len()),
            test_results: ScoreLog::with_slots(order.len()),
            subjects,
            slots,
            order,
        })
    }

    /// Build a record with subjects pulled from `source`.
    ///
    /// A load failure aborts construction. A bad name comes back as a
    /// [`RecordError`] inside the `anyhow::Error`.
    pub fn from_source<S>(name: &str, source: &S) -> Result<Self>
    where
        S: SubjectSource + ?Sized,
    {
        let subjects = source
            .load_subjects()
            .context("Failed to load subject list")?;
        Ok(Self::new(name, subjects)?)
    }

    /// The validated student name.
    pub fn name(&self) -> &StudentName {
        &self.name
    }

    /// The subject list as supplied at construction.
    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    /// Append a grade (2 to 5) for a known subject.
    pub fn add_grade(&mut self, subject: &str, grade: i32) -> Result<(), RecordError> {
        let slot = self.slot_for_write(subject)?;
        if !(GRADE_MIN..=GRADE_MAX).contains(&grade) {
            return Err(RecordError::InvalidGrade(grade));
        }
        self.grades.push(slot, grade);
        Ok(())
    }

    /// Append a test result (0 to 100) for a known subject.
    pub fn add_test_result(&mut self, subject: &str, result: i32) -> Result<(), RecordError> {
        let slot = self.slot_for_write(subject)?;
        if !(TEST_RESULT_MIN..=TEST_RESULT_MAX).contains(&result) {
            return Err(RecordError::InvalidTestResult(result));
        }
        self.test_results.push(slot, result);
        Ok(())
    }

    /// Recorded grades for `subject`; empty for unknown subjects.
    pub fn grades(&self, subject: &str) -> &[i32] {
        self.slots
            .get(subject)
            .map(|&slot| self.grades.slot(slot))
            .unwrap_or_default()
    }

    /// Recorded test results for `subject`; empty for unknown subjects.
    pub fn test_results(&self, subject: &str) -> &[i32] {
        self.slots
            .get(subject)
            .map(|&slot| self.test_results.slot(slot))
            .unwrap_or_default()
    }

    /// Mean grade for `subject`; 0 if it has none or is unknown.
    pub fn subject_avg_grade(&self, subject: &str) -> f64 {
        mean(self.grades(subject).iter().copied())
    }

    /// Mean test result for `subject`; 0 if it has none or is unknown.
    pub fn subject_avg_test_result(&self, subject: &str) -> f64 {
        mean(self.test_results(subject).iter().copied())
    }

    /// Mean of every grade across all subjects; 0 if none recorded.
    pub fn overall_avg_grade(&self) -> f64 {
        mean(self.grades.flatten())
    }

    /// Mean of every test result across all subjects; 0 if none recorded.
    pub fn overall_avg_test_result(&self) -> f64 {
        mean(self.test_results.flatten())
    }

    /// Snapshot of every subject's values and averages, in subject order.
    pub fn summary(&self) -> RecordSummary {
        let subjects = self
            .order
            .iter()
            .enumerate()
            .map(|(slot, subject)| SubjectSummary {
                subject: subject.clone(),
                grades: self.grades.slot(slot).to_vec(),
                avg_grade: mean(self.grades.slot(slot).iter().copied()),
                test_results: self.test_results.slot(slot).to_vec(),
                avg_test_result: mean(self.test_results.slot(slot).iter().copied()),
            })
            .collect();

        RecordSummary {
            student: self.name.to_string(),
            subjects,
            overall_avg_grade: self.overall_avg_grade(),
            overall_avg_test_result: self.overall_avg_test_result(),
        }
    }

    fn slot_for_write(&self, subject: &str) -> Result<usize, RecordError> {
        self.slots
            .get(subject)
            .copied()
            .ok_or_else(|| RecordError::InvalidSubject {
                subject: subject.to_string(),
                allowed: self.subjects.clone(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectSummary {
    pub subject: String,
    pub grades: Vec<i32>,
    pub avg_grade: f64,
    pub test_results: Vec<i32>,
    pub avg_test_result: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordSummary {
    pub student: String,
    pub subjects: Vec<SubjectSummary>,
    pub overall_avg_grade: f64,
    pub overall_avg_test_result: f64,
}
