//! Delimited text parsing

use crate::conversion::config::DelimiterType;
use crate::error::{ParseError, ParseResult};
use crate::table::{Row, Table};
use serde_json::Value;

/// Parse delimited text with a header line into a table.
///
/// Fields are split on the delimiter with no quoting support. Short lines
/// are padded with `null`, long lines are truncated to the header width.
/// A header that repeats a name keeps the name once in the column set; in
/// each row the later field wins.
pub fn parse_csv(content: &str, delimiter: DelimiterType) -> ParseResult<Table> {
    parse_csv_with_options(content, delimiter, false)
}

/// Same as [`parse_csv`], failing on a repeated header name when `strict_headers` is set
pub fn parse_csv_with_options(
    content: &str,
    delimiter: DelimiterType,
    strict_headers: bool,
) -> ParseResult<Table> {
    let sep = delimiter.as_char();
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.strip_suffix('\r').unwrap_or(line)))
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| ParseError::new("Empty CSV input: no header line", None))?;

    let header: Vec<String> = header.split(sep).map(|h| h.trim().to_string()).collect();

    let mut table = Table::with_columns(header.clone());
    if strict_headers {
        // Report the first field that repeats an earlier name
        if let Some(idx) = (1..header.len()).find(|&i| header[..i].contains(&header[i])) {
            return Err(ParseError::new(
                format!("Duplicate column name '{}' in header", header[idx]),
                Some((header_line, idx + 1)),
            ));
        }
    }

    for (line_no, line) in lines {
        let fields: Vec<&str> = line.split(sep).collect();
        if fields.len() > header.len() {
            tracing::debug!(
                line = line_no,
                extra = fields.len() - header.len(),
                "dropping fields beyond header width"
            );
        }

        let mut row = Row::new();
        for (idx, column) in header.iter().enumerate() {
            let value = fields
                .get(idx)
                .map(|f| Value::String((*f).to_string()))
                .unwrap_or(Value::Null);
            row.insert(column.clone(), value);
        }
        table.push_row(row);
    }

    tracing::debug!(
        rows = table.row_count(),
        columns = table.columns().len(),
        "parsed delimited input"
    );
    Ok(table)
}
