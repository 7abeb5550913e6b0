use std::fmt::Display;
use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::record::RecordSummary;

const HEADERS: [&str; 5] = ["Subject", "Grades", "Avg grade", "Test results", "Avg test"];

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Check if stderr is a TTY (errors are reported there)
pub fn should_use_colors_stderr() -> bool {
    std::io::stderr().is_terminal()
}

/// Format an average with two decimals ("4.50", "0.00")
pub fn format_average(avg: f64) -> String {
    format!("{:.2}", avg)
}

/// Format recorded values as a comma-separated list, "-" when there are none
pub fn format_values(values: &[i32]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Format an error the way the CLI reports caught failures
pub fn format_error(err: &dyn Display, use_colors: bool) -> String {
    if use_colors {
        format!("{} {}", "Error:".red().bold(), err)
    } else {
        format!("Error: {}", err)
    }
}

/// Pad to a width measured in chars, not bytes (subject names are often Cyrillic)
fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    format!("{}{}", s, " ".repeat(width.saturating_sub(len)))
}

/// Format a record summary as an aligned table followed by overall averages
///
/// Format:
/// ```text
/// Student: Ivan
///
/// Subject  Grades  Avg grade  Test results  Avg test
/// Math     4, 5    4.50       80, 90        85.00
///
/// Overall avg grade: 4.50
/// Overall avg test result: 85.00
/// ```
pub fn format_report(summary: &RecordSummary, use_colors: bool) -> String {
    let rows: Vec<[String; 5]> = summary
        .subjects
        .iter()
        .map(|s| {
            [
                s.subject.clone(),
                format_values(&s.grades),
                format_average(s.avg_grade),
                format_values(&s.test_results),
                format_average(s.avg_test_result),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::new();

    if use_colors {
        lines.push(format!("Student: {}", summary.student.bold()));
    } else {
        lines.push(format!("Student: {}", summary.student));
    }
    lines.push(String::new());

    if rows.is_empty() {
        lines.push("No subjects configured.".to_string());
    } else {
        let header = render_row(&HEADERS.map(String::from), &widths, false);
        if use_colors {
            lines.push(header.bold().to_string());
        } else {
            lines.push(header);
        }

        for row in &rows {
            lines.push(render_row(row, &widths, use_colors));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Overall avg grade: {}",
        format_average(summary.overall_avg_grade)
    ));
    lines.push(format!(
        "Overall avg test result: {}",
        format_average(summary.overall_avg_test_result)
    ));

    lines.join("\n")
}

fn render_row(cells: &[String; 5], widths: &[usize; 5], use_colors: bool) -> String {
    let mut padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| pad(cell, width))
        .collect();
    if use_colors {
        padded[0] = padded[0].cyan().to_string();
    }
    padded.join("  ").trim_end().to_string()
}
