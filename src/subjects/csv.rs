use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::SubjectSource;

/// Column holding subject names in the subject lists this tool reads.
pub const DEFAULT_SUBJECT_COLUMN: &str = "Предмет";

/// A CSV file with a header row; one subject per data row.
#[derive(Debug, Clone)]
pub struct CsvSubjects {
    path: PathBuf,
    column: String,
}

impl CsvSubjects {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            column: DEFAULT_SUBJECT_COLUMN.to_string(),
        }
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SubjectSource for CsvSubjects {
    fn load_subjects(&self) -> Result<Vec<String>> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read subject list at {}", self.path.display()))?;

        let subjects = parse_column(&content, &self.column)
            .with_context(|| format!("Invalid subject list in {}", self.path.display()))?;

        tracing::debug!(
            "Loaded {} subjects from {}",
            subjects.len(),
            self.path.display()
        );
        Ok(subjects)
    }
}

peg::parser! {
    /// RFC 4180 records: quoted fields may hold commas, line breaks and `""` escapes.
    grammar csv_parser() for str {
        rule bom() = "\u{feff}"

        rule eol() = "\r\n" / "\n" / "\r"

        rule quoted_char() -> char
            = "\"\"" { '"' }
            / c:[^ '"'] { c }

        rule quoted() -> String
            = "\"" s:quoted_char()* "\"" { s.into_iter().collect() }

        rule bare() -> String
            = s:$([^ ',' | '"' | '\r' | '\n']*) { s.to_string() }

        rule field() -> String
            = quoted() / bare()

        rule record() -> Vec<String>
            = field() ++ ","

        /// every record in the document, blank lines included as a single empty field
        pub rule document() -> Vec<Vec<String>>
            = bom()? rows:(record() ** eol()) eol()? { rows }
    }
}

fn is_blank(record: &[String]) -> bool {
    matches!(record, [only] if only.trim().is_empty())
}

/// Extract `column` from CSV text, in row order.
///
/// Blank lines are skipped. Rows are numbered from 1, the header included.
fn parse_column(content: &str, column: &str) -> Result<Vec<String>> {
    let records = csv_parser::document(content).context("Malformed CSV")?;
    let mut rows = records
        .into_iter()
        .enumerate()
        .filter(|(_, record)| !is_blank(record));

    let Some((_, header)) = rows.next() else {
        bail!("file is empty, expected a header row");
    };

    let Some(index) = header.iter().position(|h| h.trim() == column) else {
        bail!(
            "column '{}' not found (columns: {})",
            column,
            header.join(", ")
        );
    };

    let mut values = Vec::new();
    for (row, record) in rows {
        match record.into_iter().nth(index) {
            Some(value) => values.push(value.trim().to_string()),
            None => bail!("row {}: missing column '{}'", row + 1, column),
        }
    }

    Ok(values)
}
