//! CSV/JSON data tool
//!
//! Summarizes, validates and converts between delimited text with a header
//! line and JSON arrays of flat objects.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod table;
pub mod validation;

// Re-export commonly used types
pub use conversion::{ConversionConfig, ConversionEngine, ConversionOutcome, DelimiterType};
pub use error::{ConversionError, ParseError, SchemaError};
pub use formatter::TableFormatter;
pub use parser::{normalize_records, parse_csv, parse_json, InputFormat};
pub use table::{Row, Table};
pub use validation::{summarize, Schema, SummaryReport, ValidationWarning};

/// Convert JSON records text to CSV text with default configuration
pub fn json_to_csv(json: &str) -> Result<String, ConversionError> {
    let engine = ConversionEngine::new(ConversionConfig::default());
    Ok(engine.json_to_csv_string(json)?.content)
}

/// Convert CSV text to JSON records text with default configuration
pub fn csv_to_json(csv: &str) -> Result<String, ConversionError> {
    let engine = ConversionEngine::new(ConversionConfig::default());
    Ok(engine.csv_to_json_string(csv)?.content)
}
