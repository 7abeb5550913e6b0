use std::collections::HashSet;

use super::schema::Config;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
///
/// Value ranges and subject membership are left to the record itself.
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.student.trim().is_empty() {
        errors.push("student: must not be empty".to_string());
    }

    match (&config.subjects, &config.subjects_file) {
        (None, None) => {
            errors.push("subjects: set either 'subjects' or 'subjects_file'".to_string());
        }
        (Some(_), Some(_)) => {
            errors.push("subjects: 'subjects' and 'subjects_file' are mutually exclusive".to_string());
        }
        (Some(subjects), None) => {
            if subjects.is_empty() {
                errors.push("subjects: must list at least one subject".to_string());
            }
            for (i, subject) in subjects.iter().enumerate() {
                if subject.trim().is_empty() {
                    errors.push(format!("subjects[{}]: must not be blank", i));
                }
            }
        }
        (None, Some(_)) => {}
    }

    if config.subject_column.is_some() && config.subjects_file.is_none() {
        errors.push("subject_column: only applies together with 'subjects_file'".to_string());
    }

    for (i, entry) in config.entries.iter().enumerate() {
        if entry.value().is_none() {
            errors.push(format!(
                "entries[{}]: set exactly one of 'grade' or 'test_result'",
                i
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Subject names that appear more than once, in order of their second appearance.
pub fn duplicate_subjects(subjects: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    subjects
        .iter()
        .filter(|s| !seen.insert(s.as_str()) && reported.insert(s.as_str()))
        .cloned()
        .collect()
}
