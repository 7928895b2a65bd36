//! Table inspection: summaries, warnings and schema checks

pub mod schema;
pub mod summary;

pub use schema::{FieldType, Schema};
pub use summary::{check_table, summarize, SummaryReport, ValidationWarning};
