//! CSV <-> JSON conversion module
//!
//! This module contains the conversion engine, its configuration and the
//! input size limits.

pub mod config;
pub mod engine;
pub mod limits;

pub use config::{ConversionConfig, DelimiterType};

pub use engine::{load_schema, write_output, ConversionEngine, ConversionOutcome, RenderedTable};

use crate::error::ConversionError;

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
