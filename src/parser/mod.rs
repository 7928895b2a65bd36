//! Input parsing: delimited text and JSON records into a [`Table`]

pub mod csv;
pub mod json;

pub use self::csv::{parse_csv, parse_csv_with_options};
pub use self::json::{normalize_records, parse_json, parse_json_value};

use crate::conversion::config::ConversionConfig;
use crate::conversion::limits;
use crate::error::{ConversionError, ConversionResult};
use crate::table::Table;
use std::io;
use std::path::Path;

/// Kinds of tabular input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Read a whole input file, checking existence and size first
pub fn read_input(path: &Path, config: &ConversionConfig) -> ConversionResult<String> {
    match std::fs::metadata(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ConversionError::InputNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(ConversionError::io_read(path, e)),
        Ok(meta) if !meta.is_file() => {
            return Err(ConversionError::io_read(
                path,
                io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
            ))
        }
        Ok(_) => {}
    }
    limits::check_source_size_before_read(path, config)?;

    let content =
        std::fs::read_to_string(path).map_err(|e| ConversionError::io_read(path, e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read input");
    Ok(content)
}

/// Parse text in a known format
pub fn parse_as(
    content: &str,
    format: InputFormat,
    config: &ConversionConfig,
) -> ConversionResult<Table> {
    match format {
        InputFormat::Csv => Ok(parse_csv_with_options(
            content,
            config.delimiter,
            config.strict_headers,
        )?),
        InputFormat::Json => parse_json(content),
    }
}

/// Load a table from a file of either format.
///
/// The extension decides the format. Without a recognised extension the
/// content is tried as JSON first and falls back to delimited text only
/// when it is not JSON at all; JSON of the wrong shape is an error.
pub fn load_table(path: &Path, config: &ConversionConfig) -> ConversionResult<Table> {
    let content = read_input(path, config)?;

    match InputFormat::from_path(path) {
        Some(format) => parse_as(&content, format, config),
        None => match parse_json(&content) {
            Err(ConversionError::Parse(err)) => {
                tracing::debug!(error = %err, "input is not JSON, trying delimited text");
                parse_as(&content, InputFormat::Csv, config)
            }
            other => other,
        },
    }
}
