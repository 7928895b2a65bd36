//! Configuration options for CSV/JSON conversion and summaries

/// Field delimiter options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DelimiterType {
    /// Comma delimiter (,)
    #[default]
    Comma,
    /// Tab delimiter (\\t)
    Tab,
    /// Pipe delimiter (|)
    Pipe,
}

impl DelimiterType {
    pub fn as_char(&self) -> char {
        match self {
            DelimiterType::Comma => ',',
            DelimiterType::Tab => '\t',
            DelimiterType::Pipe => '|',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DelimiterType::Comma => ",",
            DelimiterType::Tab => "\t",
            DelimiterType::Pipe => "|",
        }
    }
}

/// Conversion configuration options
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Field delimiter for CSV input and output
    pub delimiter: DelimiterType,
    /// Rows shown in a summary preview
    pub preview_rows: usize,
    /// Pretty-print JSON output (vs compact)
    pub pretty: bool,
    /// Reject CSV headers that repeat a column name
    pub strict_headers: bool,
    /// Maximum input size in bytes
    pub memory_limit: usize,
    /// Longest preview value before it is cut with "..."
    pub max_value_width: usize,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            delimiter: DelimiterType::Comma,
            preview_rows: 5,
            pretty: true,
            strict_headers: false,
            memory_limit: 100 * 1024 * 1024, // 100MB
            max_value_width: 80,
        }
    }
}

impl ConversionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set field delimiter
    pub fn with_delimiter(mut self, delimiter: DelimiterType) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set number of preview rows in summaries
    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }

    /// Enable or disable pretty-printing
    pub fn with_pretty(mut self, enabled: bool) -> Self {
        self.pretty = enabled;
        self
    }

    /// Fail on duplicate CSV header names instead of letting the last one win
    pub fn with_strict_headers(mut self, enabled: bool) -> Self {
        self.strict_headers = enabled;
        self
    }

    /// Set memory limit
    pub fn with_memory_limit(mut self, limit: usize) -> Self {
        self.memory_limit = limit;
        self
    }

    /// Set preview value width
    pub fn with_max_value_width(mut self, width: usize) -> Self {
        self.max_value_width = width;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.memory_limit == 0 {
            return Err("Memory limit must be greater than 0".to_string());
        }

        if self.max_value_width < 4 {
            return Err("Value width must be at least 4 characters".to_string());
        }

        Ok(())
    }
}
