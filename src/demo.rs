use anyhow::Result;
use std::io::Write;

use crate::output::{format_average, format_error};
use crate::record::StudentRecord;
use crate::subjects::SubjectSource;

pub const DEMO_STUDENT: &str = "Иван Иванов";

/// Subjects used when the demo is not given a subject list.
pub fn default_subjects() -> Vec<String> {
    vec!["Математика".to_string(), "Наука".to_string()]
}

/// Walk through a scripted session: record a few grades and test results,
/// print the averages, then try a subject that is not on the list and print
/// the resulting error instead of failing.
///
/// Errors returned here are I/O failures, subject load failures and record
/// errors raised before the final step.
pub fn run_demo<W, S>(out: &mut W, subjects: &S, use_colors: bool) -> Result<()>
where
    W: Write,
    S: SubjectSource + ?Sized,
{
    let mut student = StudentRecord::from_source(DEMO_STUDENT, subjects)?;
    writeln!(out, "Student: {}", student.name())?;

    student.add_grade("Математика", 4)?;
    student.add_grade("Математика", 5)?;
    student.add_test_result("Математика", 80)?;
    student.add_test_result("Математика", 90)?;

    student.add_grade("Наука", 3)?;
    student.add_test_result("Наука", 70)?;

    let lines = [
        ("Avg grade, Математика", student.subject_avg_grade("Математика")),
        ("Avg test result, Математика", student.subject_avg_test_result("Математика")),
        ("Avg grade, Наука", student.subject_avg_grade("Наука")),
        ("Avg test result, Наука", student.subject_avg_test_result("Наука")),
        ("Overall avg grade", student.overall_avg_grade()),
        ("Overall avg test result", student.overall_avg_test_result()),
    ];
    for (label, avg) in lines {
        writeln!(out, "{}: {}", label, format_average(avg))?;
    }

    if let Err(e) = student.add_grade("История", 4) {
        writeln!(out, "{}", format_error(&e, use_colors))?;
    }

    Ok(())
}
