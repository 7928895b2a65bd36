//! Rendering tables as CSV or JSON text

pub mod report;

pub use report::{format_report, format_schema_errors, truncate_value};

use crate::conversion::ConversionConfig;
use crate::table::Table;
use serde_json::{Map, Value};

/// Renders a [`Table`] in either output format
pub struct TableFormatter {
    config: ConversionConfig,
}

impl TableFormatter {
    /// Create a new formatter with configuration
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Render as delimited text: a header line from the column set, then one
    /// line per row in column set order. Absent and null cells are empty.
    pub fn to_csv(&self, table: &Table) -> String {
        if table.columns().is_empty() {
            return String::new();
        }

        let sep = self.config.delimiter.as_str();
        let mut out = table.columns().join(sep);
        out.push('\n');

        for (idx, row) in table.rows().iter().enumerate() {
            let cells: Vec<String> = table
                .resolve(row)
                .map(|cell| cell.map(cell_text).unwrap_or_default())
                .collect();

            if cells
                .iter()
                .any(|c| c.contains(sep) || c.contains('\n') || c.contains('\r'))
            {
                tracing::warn!(
                    row = idx,
                    "value contains the delimiter or a line break and is written unescaped"
                );
            }

            out.push_str(&cells.join(sep));
            out.push('\n');
        }

        out
    }

    /// Render as a JSON array of objects keyed by the column set, in order.
    /// Absent cells become `null`; values are passed through untouched.
    pub fn to_json(&self, table: &Table) -> Result<String, serde_json::Error> {
        let records: Vec<Value> = table
            .rows()
            .iter()
            .map(|row| {
                let object: Map<String, Value> = table
                    .columns()
                    .iter()
                    .zip(table.resolve(row))
                    .map(|(column, cell)| (column.clone(), cell.cloned().unwrap_or(Value::Null)))
                    .collect();
                Value::Object(object)
            })
            .collect();

        let mut out = if self.config.pretty {
            serde_json::to_string_pretty(&records)?
        } else {
            serde_json::to_string(&records)?
        };
        out.push('\n');
        Ok(out)
    }
}

/// Text form of a single cell
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        // Nested values are outside the flat-record model; keep them readable
        other => other.to_string(),
    }
}
