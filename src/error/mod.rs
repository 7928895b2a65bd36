//! Error types and handling infrastructure for CSV/JSON conversion

use std::fmt;
use std::path::PathBuf;

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("Cannot write {}: {source}", .path.display())]
    IoWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read {}: {source}", .path.display())]
    IoRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("Input too large: {size} bytes (limit: {limit} bytes)")]
    InputTooLarge { size: u64, limit: usize },

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl ConversionError {
    pub fn io_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoWrite {
            path: path.into(),
            source,
        }
    }

    pub fn io_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoRead {
            path: path.into(),
            source,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Parse(err) => format!("Parse error: {}", err),
            Self::Schema(err) => format!("Schema error: {}", err),
            Self::InputTooLarge { size, limit } => {
                format!(
                    "Input file too large: {} bytes (limit: {} bytes). Raise it with --memory-limit",
                    size, limit
                )
            }
            _ => self.to_string(),
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InputNotFound { .. } => 2,
            _ => 1,
        }
    }
}

/// Malformed input text: empty or headerless CSV, invalid JSON syntax
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
}

impl ParseError {
    pub fn new(message: impl Into<String>, location: Option<(usize, usize)>) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }

    /// Line of the offending input, 1-based
    pub fn line(&self) -> Option<usize> {
        self.location.map(|(line, _)| line)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Well-formed JSON whose shape the tool has no policy for
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaError {
    pub message: String,
    /// Zero-based index of the offending record, when known
    pub row: Option<usize>,
}

impl SchemaError {
    pub fn new(message: impl Into<String>, row: Option<usize>) -> Self {
        Self {
            message: message.into(),
            row,
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(row) = self.row {
            write!(f, " (row {})", row)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaError {}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Convenience result type for record normalization
pub type SchemaResult<T> = Result<T, SchemaError>;
