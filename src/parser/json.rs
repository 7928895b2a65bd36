//! Record normalization for JSON input

use crate::error::{ConversionResult, ParseError, SchemaError, SchemaResult};
use crate::table::{Row, Table};
use serde_json::Value;

/// Parse JSON text and normalize it into a table
pub fn parse_json(content: &str) -> ConversionResult<Table> {
    let value = parse_json_value(content)?;
    Ok(normalize_records(value)?)
}

/// Parse JSON text, reporting syntax errors with their location
pub fn parse_json_value(content: &str) -> Result<Value, ParseError> {
    if content.trim().is_empty() {
        return Err(ParseError::new("Empty JSON input", None));
    }

    serde_json::from_str(content).map_err(|e| {
        let location = (e.line() > 0).then(|| (e.line(), e.column()));
        ParseError::new(format!("Invalid JSON: {}", strip_location(&e)), location)
    })
}

/// Build a table from a JSON array of objects.
///
/// The column set is the union of all keys in the order they are first
/// encountered. Each row keeps only the keys its object had.
pub fn normalize_records(value: Value) -> SchemaResult<Table> {
    let records = match value {
        Value::Array(records) => records,
        other => {
            return Err(SchemaError::new(
                format!(
                    "Expected a top-level array of objects, found {}",
                    describe(&other)
                ),
                None,
            ))
        }
    };

    let mut table = Table::default();
    for (idx, record) in records.into_iter().enumerate() {
        match record {
            Value::Object(map) => table.push_row(Row::from(map)),
            other => {
                return Err(SchemaError::new(
                    format!("Expected an object, found {}", describe(&other)),
                    Some(idx),
                ))
            }
        }
    }

    tracing::debug!(
        rows = table.row_count(),
        columns = table.columns().len(),
        "normalized JSON records"
    );
    Ok(table)
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// serde_json's message without the trailing "at line X column Y"
fn strip_location(error: &serde_json::Error) -> String {
    let message = error.to_string();
    match message.rfind(" at line ") {
        Some(pos) => message[..pos].to_string(),
        None => message,
    }
}
