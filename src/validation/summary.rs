//! Table summaries with non-fatal validity warnings

use crate::table::{Row, Table};
use serde::Serialize;
use std::fmt;

/// Issues found while summarizing. None of them stop the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationWarning {
    /// The table has no data rows
    EmptyTable,
    /// A row carries fewer values than there are columns
    SparseRow {
        row: usize,
        populated: usize,
        expected: usize,
    },
    /// A header name appears more than once
    DuplicateColumn { name: String },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::EmptyTable => write!(f, "empty table: no data rows"),
            ValidationWarning::SparseRow {
                row,
                populated,
                expected,
            } => write!(
                f,
                "row {}: {} of {} fields populated",
                row + 1,
                populated,
                expected
            ),
            ValidationWarning::DuplicateColumn { name } => {
                write!(f, "duplicate column name '{}' in header", name)
            }
        }
    }
}

/// What `summary` reports about a table
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub row_count: usize,
    pub columns: Vec<String>,
    pub preview: Vec<Row>,
    pub warnings: Vec<ValidationWarning>,
}

impl SummaryReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Summarize a table, previewing at most `preview_rows` rows
pub fn summarize(table: &Table, preview_rows: usize) -> SummaryReport {
    SummaryReport {
        row_count: table.row_count(),
        columns: table.columns().to_vec(),
        preview: table.rows().iter().take(preview_rows).cloned().collect(),
        warnings: check_table(table),
    }
}

/// Run every table check and collect the warnings
pub fn check_table(table: &Table) -> Vec<ValidationWarning> {
    let mut warnings: Vec<ValidationWarning> = table
        .duplicate_columns()
        .iter()
        .map(|name| ValidationWarning::DuplicateColumn { name: name.clone() })
        .collect();

    if table.is_empty() {
        warnings.push(ValidationWarning::EmptyTable);
    }

    let expected = table.columns().len();
    for (idx, row) in table.rows().iter().enumerate() {
        let populated = row.populated_count();
        if populated < expected {
            warnings.push(ValidationWarning::SparseRow {
                row: idx,
                populated,
                expected,
            });
        }
    }

    warnings
}
