use thiserror::Error;

/// Why a student name was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("name must contain only letters")]
    NotAlphabetic,

    #[error("name must start with a capital letter")]
    NotTitleCase,
}

/// Errors raised by [`StudentRecord`](super::StudentRecord) construction and mutation.
///
/// Every variant is a value-domain violation. The operation that raised it
/// left the record unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("invalid name: {0}")]
    InvalidName(#[from] NameError),

    #[error("invalid subject: {subject}. Allowed subjects: {}", .allowed.join(", "))]
    InvalidSubject {
        subject: String,
        allowed: Vec<String>,
    },

    #[error("invalid grade {0}: grade must be between 2 and 5")]
    InvalidGrade(i32),

    #[error("invalid test result {0}: result must be between 0 and 100")]
    InvalidTestResult(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_subject_lists_allowed_in_order() {
        let err = RecordError::InvalidSubject {
            subject: "История".to_string(),
            allowed: vec!["Математика".to_string(), "Наука".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "invalid subject: История. Allowed subjects: Математика, Наука"
        );
    }

    #[test]
    fn test_name_error_converts() {
        let err: RecordError = NameError::NotTitleCase.into();
        assert_eq!(err, RecordError::InvalidName(NameError::NotTitleCase));
        assert!(err.to_string().contains("capital letter"));
    }
}
