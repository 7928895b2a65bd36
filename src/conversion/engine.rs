//! Core conversion engine for CSV <-> JSON transformation

use crate::conversion::config::ConversionConfig;
use crate::conversion::ConversionResult;
use crate::error::ConversionError;
use crate::formatter::TableFormatter;
use crate::parser::{self, InputFormat};
use crate::table::Table;
use crate::validation::{summarize, Schema, SummaryReport};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Result of a conversion written to disk
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutcome {
    pub output_path: PathBuf,
    pub row_count: usize,
    pub column_count: usize,
}

/// Rendered output before it is written anywhere
#[derive(Debug, Clone)]
pub struct RenderedTable {
    pub content: String,
    pub row_count: usize,
    pub column_count: usize,
}

impl RenderedTable {
    fn new(content: String, table: &Table) -> Self {
        Self {
            content,
            row_count: table.row_count(),
            column_count: table.columns().len(),
        }
    }
}

/// Main conversion engine
pub struct ConversionEngine {
    config: ConversionConfig,
}

impl ConversionEngine {
    /// Create a new conversion engine
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Convert JSON records text to delimited text
    pub fn json_to_csv_string(&self, json: &str) -> ConversionResult<RenderedTable> {
        let table = parser::parse_json(json)?;
        let content = TableFormatter::new(self.config.clone()).to_csv(&table);
        Ok(RenderedTable::new(content, &table))
    }

    /// Convert delimited text to JSON records text
    pub fn csv_to_json_string(&self, csv: &str) -> ConversionResult<RenderedTable> {
        let table = parser::parse_as(csv, InputFormat::Csv, &self.config)?;
        let content = TableFormatter::new(self.config.clone()).to_json(&table)?;
        Ok(RenderedTable::new(content, &table))
    }

    /// Convert a JSON file to a CSV file, replacing any existing output
    pub fn json_to_csv(&self, input: &Path, output: &Path) -> ConversionResult<ConversionOutcome> {
        let start = Instant::now();
        let content = parser::read_input(input, &self.config)?;
        let rendered = self.json_to_csv_string(&content)?;
        let outcome = write_output(output, rendered)?;
        tracing::info!(
            input = %input.display(),
            output = %outcome.output_path.display(),
            rows = outcome.row_count,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "converted JSON to CSV"
        );
        Ok(outcome)
    }

    /// Convert a CSV file to a JSON file, replacing any existing output
    pub fn csv_to_json(&self, input: &Path, output: &Path) -> ConversionResult<ConversionOutcome> {
        let start = Instant::now();
        let content = parser::read_input(input, &self.config)?;
        let rendered = self.csv_to_json_string(&content)?;
        let outcome = write_output(output, rendered)?;
        tracing::info!(
            input = %input.display(),
            output = %outcome.output_path.display(),
            rows = outcome.row_count,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "converted CSV to JSON"
        );
        Ok(outcome)
    }

    /// Load a file of either format and summarize it
    pub fn summarize_file(&self, input: &Path) -> ConversionResult<SummaryReport> {
        let table = parser::load_table(input, &self.config)?;
        Ok(summarize(&table, self.config.preview_rows))
    }

    /// Check a file of either format against a schema file
    pub fn validate_file(&self, input: &Path, schema_path: &Path) -> ConversionResult<Vec<String>> {
        let table = parser::load_table(input, &self.config)?;
        let schema = load_schema(schema_path, &self.config)?;
        Ok(schema.validate(&table))
    }
}

/// Read a schema file
pub fn load_schema(path: &Path, config: &ConversionConfig) -> ConversionResult<Schema> {
    let content = parser::read_input(path, config)?;
    let value = parser::parse_json_value(&content)?;
    Ok(Schema::from_value(value)?)
}

/// Write rendered output atomically.
///
/// The content goes to a temporary file next to the destination which is
/// then renamed over it, so a failed write never leaves a partial file.
/// Missing parent directories are created. A replaced file keeps its
/// permissions; a new file gets the usual umask-filtered mode.
pub fn write_output(path: &Path, rendered: RenderedTable) -> ConversionResult<ConversionOutcome> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&parent).map_err(|e| ConversionError::io_write(path, e))?;

    let existing = std::fs::metadata(path).ok().map(|m| m.permissions());

    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // open(2) applies the umask, as for any freshly created file
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder
        .tempfile_in(&parent)
        .map_err(|e| ConversionError::io_write(path, e))?;
    if let Some(permissions) = existing {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| ConversionError::io_write(path, e))?;
    }
    tmp.write_all(rendered.content.as_bytes())
        .and_then(|_| tmp.flush())
        .map_err(|e| ConversionError::io_write(path, e))?;
    tmp.persist(path)
        .map_err(|e| ConversionError::io_write(path, e.error))?;

    tracing::debug!(path = %path.display(), bytes = rendered.content.len(), "wrote output");
    Ok(ConversionOutcome {
        output_path: path.to_path_buf(),
        row_count: rendered.row_count,
        column_count: rendered.column_count,
    })
}
