pub mod csv;

pub use self::csv::{CsvSubjects, DEFAULT_SUBJECT_COLUMN};

use anyhow::Result;

/// Anything that can supply the list of subjects a record accepts.
///
/// Implementations may block on I/O. Their errors are fatal to record
/// construction.
pub trait SubjectSource {
    fn load_subjects(&self) -> Result<Vec<String>>;
}

impl SubjectSource for [String] {
    fn load_subjects(&self) -> Result<Vec<String>> {
        Ok(self.to_vec())
    }
}

impl SubjectSource for Vec<String> {
    fn load_subjects(&self) -> Result<Vec<String>> {
        self.as_slice().load_subjects()
    }
}
