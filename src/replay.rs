use crate::config::{EntryConfig, EntryValue};
use crate::record::{RecordError, StudentRecord};

/// An entry the record refused, with its position in the entry list.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedEntry {
    pub index: usize,
    pub error: RecordError,
}

/// Record `entries` in order, skipping the ones the record rejects.
///
/// Entries without exactly one value are skipped silently; config
/// validation reports those before replay.
pub fn replay_entries(record: &mut StudentRecord, entries: &[EntryConfig]) -> Vec<RejectedEntry> {
    let mut rejected = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        let result = match entry.value() {
            Some(EntryValue::Grade(grade)) => record.add_grade(&entry.subject, grade),
            Some(EntryValue::TestResult(score)) => record.add_test_result(&entry.subject, score),
            None => continue,
        };

        if let Err(error) = result {
            tracing::debug!("entries[{}] rejected: {}", index, error);
            rejected.push(RejectedEntry { index, error });
        }
    }

    rejected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(subject: &str, grade: i32) -> EntryConfig {
        EntryConfig {
            subject: subject.to_string(),
            grade: Some(grade),
            test_result: None,
        }
    }

    fn test_result(subject: &str, score: i32) -> EntryConfig {
        EntryConfig {
            subject: subject.to_string(),
            grade: None,
            test_result: Some(score),
        }
    }

    #[test]
    fn test_replay_all_valid() {
        let mut record = StudentRecord::new("Ivan", ["Math"]).unwrap();
        let rejected = replay_entries(&mut record, &[grade("Math", 4), test_result("Math", 90)]);
        assert!(rejected.is_empty());
        assert_eq!(record.grades("Math"), [4]);
        assert_eq!(record.test_results("Math"), [90]);
    }

    #[test]
    fn test_replay_skips_rejected_and_continues() {
        let mut record = StudentRecord::new("Ivan", ["Math"]).unwrap();
        let entries = [
            grade("Math", 9),
            grade("Art", 4),
            test_result("Math", 101),
            grade("Math", 3),
        ];
        let rejected = replay_entries(&mut record, &entries);

        let indices: Vec<usize> = rejected.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(rejected[0].error, RecordError::InvalidGrade(9));
        assert!(matches!(rejected[1].error, RecordError::InvalidSubject { .. }));
        assert_eq!(rejected[2].error, RecordError::InvalidTestResult(101));
        assert_eq!(record.grades("Math"), [3]);
    }

    #[test]
    fn test_replay_ignores_ambiguous_entries() {
        let mut record = StudentRecord::new("Ivan", ["Math"]).unwrap();
        let entry = EntryConfig {
            subject: "Math".to_string(),
            grade: Some(4),
            test_result: Some(80),
        };
        assert!(replay_entries(&mut record, &[entry]).is_empty());
        assert!(record.grades("Math").is_empty());
    }
}
