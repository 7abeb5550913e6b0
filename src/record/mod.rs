pub mod error;
pub mod name;
pub mod stats;
pub mod student;

pub use error::{NameError, RecordError};
pub use name::StudentName;
pub use stats::mean;
pub use student::{
    RecordSummary, StudentRecord, SubjectSummary, GRADE_MAX, GRADE_MIN, TEST_RESULT_MAX,
    TEST_RESULT_MIN,
};
