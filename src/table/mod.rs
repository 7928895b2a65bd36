//! In-memory table shared by both conversion directions

use serde::Serialize;
use serde_json::{Map, Value};

/// One record: column name to cell value, in source order.
///
/// Rows are sparse. A column the source never mentioned for this record is
/// absent rather than `null`, and is resolved against the column set only
/// when the table is rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Row(Map<String, Value>);

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cell, replacing any earlier value for the same column
    pub fn insert(&mut self, column: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(column.into(), value)
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.0.contains_key(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of cells carrying data: present, not null, not an empty string
    pub fn populated_count(&self) -> usize {
        self.0.values().filter(|v| is_populated(v)).count()
    }
}

impl From<Map<String, Value>> for Row {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

pub(crate) fn is_populated(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Ordered rows plus the column set derived from them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
    duplicate_columns: Vec<String>,
}

impl Table {
    /// Create an empty table with a fixed header
    pub fn with_columns(columns: Vec<String>) -> Self {
        let mut table = Self::default();
        for column in columns {
            table.add_column(column);
        }
        table
    }

    /// Append a row, extending the column set with any unseen keys in
    /// first-seen order
    pub fn push_row(&mut self, row: Row) {
        for column in row.columns() {
            if !self.columns.iter().any(|c| c == column) {
                self.columns.push(column.clone());
            }
        }
        self.rows.push(row);
    }

    /// Add a header column. A repeated name keeps its first position and is
    /// recorded as a duplicate.
    pub fn add_column(&mut self, column: String) {
        if self.columns.contains(&column) {
            if !self.duplicate_columns.contains(&column) {
                self.duplicate_columns.push(column);
            }
        } else {
            self.columns.push(column);
        }
    }

    /// The column set, in first-seen order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Header names that appeared more than once in the source
    pub fn duplicate_columns(&self) -> &[String] {
        &self.duplicate_columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cells of a row laid out along the column set; absent columns are `None`
    pub fn resolve<'a>(&'a self, row: &'a Row) -> impl Iterator<Item = Option<&'a Value>> + 'a {
        self.columns.iter().map(move |c| row.get(c))
    }
}
