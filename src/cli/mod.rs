//! Command-line interface module

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::conversion::{ConversionConfig, ConversionEngine, ConversionResult, DelimiterType};
use crate::error::ConversionError;
use crate::formatter::{format_report, format_schema_errors};

/// Schema errors listed before the output is cut short
const MAX_LISTED_ERRORS: usize = 200;

/// Exit status when schema validation finds problems
pub const EXIT_VALIDATION_FAILED: u8 = 3;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "datatool")]
#[command(about = "Summarize, validate and convert between CSV and JSON")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Field delimiter for CSV input and output
    #[arg(long, global = true, value_enum)]
    pub delimiter: Option<Delimiter>,

    /// Fail when a CSV header repeats a column name
    #[arg(long, global = true)]
    pub strict_headers: bool,

    /// Maximum input file size (e.g., 100MB, default: 100MB)
    #[arg(long, global = true)]
    pub memory_limit: Option<String>,

    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long, global = true)]
    pub quiet: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print column names, row count and a preview of a CSV or JSON file
    Summary {
        /// Input file (.csv or .json; other extensions are detected)
        input: PathBuf,
        /// Number of rows to preview
        #[arg(long)]
        preview: Option<usize>,
        /// Report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
        /// Cut preview values longer than this many characters
        #[arg(long)]
        max_value_width: Option<usize>,
    },
    /// Convert a JSON array of objects to CSV
    ConvertToCsv {
        /// Input JSON file
        input: PathBuf,
        /// Output CSV file (overwritten if present)
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Convert CSV to a JSON array of objects
    ConvertToJson {
        /// Input CSV file
        input: PathBuf,
        /// Output JSON file (overwritten if present)
        #[arg(short, long)]
        output: PathBuf,
        /// Disable pretty-printing
        #[arg(long)]
        plain: bool,
    },
    /// Check a CSV or JSON file against a field -> type schema
    Validate {
        /// Input file
        input: PathBuf,
        /// Schema file: a JSON object mapping field to "str", "int" or "float"
        #[arg(long)]
        schema: PathBuf,
    },
}

impl Commands {
    /// Subcommand name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Summary { .. } => "summary",
            Commands::ConvertToCsv { .. } => "convert-to-csv",
            Commands::ConvertToJson { .. } => "convert-to-json",
            Commands::Validate { .. } => "validate",
        }
    }
}

/// Delimiter types for CLI
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Delimiter {
    #[value(name = "comma", alias = ",")]
    Comma,
    #[value(name = "tab", alias = "\t")]
    Tab,
    #[value(name = "pipe", alias = "|")]
    Pipe,
}

impl From<Delimiter> for DelimiterType {
    fn from(delimiter: Delimiter) -> Self {
        match delimiter {
            Delimiter::Comma => DelimiterType::Comma,
            Delimiter::Tab => DelimiterType::Tab,
            Delimiter::Pipe => DelimiterType::Pipe,
        }
    }
}

/// How `summary` prints its report
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub conversion_config: ConversionConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConversionResult<Self> {
        let conversion_config = Self::create_conversion_config(&args)?;

        Ok(Self {
            args,
            conversion_config,
        })
    }

    /// Create conversion configuration from CLI arguments
    fn create_conversion_config(args: &Args) -> ConversionResult<ConversionConfig> {
        let mut config = ConversionConfig::default()
            .with_delimiter(args.delimiter.map(Into::into).unwrap_or_default())
            .with_strict_headers(args.strict_headers)
            .with_memory_limit(parse_memory_limit(&args.memory_limit)?);

        match &args.command {
            Commands::Summary {
                preview,
                max_value_width,
                ..
            } => {
                if let Some(rows) = preview {
                    config = config.with_preview_rows(*rows);
                }
                if let Some(width) = max_value_width {
                    config = config.with_max_value_width(*width);
                }
            }
            Commands::ConvertToJson { plain: true, .. } => config = config.with_pretty(false),
            _ => {}
        }

        // Validate configuration
        config.validate().map_err(ConversionError::configuration)?;

        Ok(config)
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }
}

/// Parse memory limit string (e.g., "100MB", "1GB", "500KB")
pub fn parse_memory_limit(limit: &Option<String>) -> ConversionResult<usize> {
    let Some(limit_str) = limit else {
        return Ok(100 * 1024 * 1024); // 100MB default
    };

    let limit_str = limit_str.trim().to_uppercase();
    let invalid = || ConversionError::configuration(format!("Invalid memory limit: {}", limit_str));

    let (number, multiplier) = if let Some(n) = limit_str.strip_suffix("GB") {
        (n, 1024.0 * 1024.0 * 1024.0)
    } else if let Some(n) = limit_str.strip_suffix("MB") {
        (n, 1024.0 * 1024.0)
    } else if let Some(n) = limit_str.strip_suffix("KB") {
        (n, 1024.0)
    } else if let Some(n) = limit_str.strip_suffix('B') {
        return n.trim().parse::<usize>().map_err(|_| invalid());
    } else {
        // Assume bytes
        return limit_str.parse::<usize>().map_err(|_| invalid());
    };

    let value = number.trim().parse::<f64>().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    Ok((value * multiplier) as usize)
}

/// Set up the tracing subscriber on stderr. `RUST_LOG` takes precedence
/// over the verbosity flags.
pub fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when embedded in tests
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Execute the selected subcommand
pub fn run(config: &CliConfig) -> CliResult<ExitCode> {
    let engine = ConversionEngine::new(config.conversion_config.clone());
    let quiet = config.is_quiet();

    match &config.args.command {
        Commands::Summary { input, format, .. } => {
            let report = engine.summarize_file(input)?;
            match format {
                ReportFormat::Text => {
                    print!(
                        "{}",
                        format_report(&report, config.conversion_config.max_value_width)
                    )
                }
                ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::ConvertToCsv { input, output } => {
            let outcome = engine.json_to_csv(input, output)?;
            show_written(outcome.row_count, &outcome.output_path, quiet);
            Ok(ExitCode::SUCCESS)
        }
        Commands::ConvertToJson { input, output, .. } => {
            let outcome = engine.csv_to_json(input, output)?;
            show_written(outcome.row_count, &outcome.output_path, quiet);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate { input, schema } => {
            let errors = engine.validate_file(input, schema)?;
            if errors.is_empty() {
                if !quiet {
                    print!("{}", format_schema_errors(&errors, MAX_LISTED_ERRORS));
                }
                Ok(ExitCode::SUCCESS)
            } else {
                print!("{}", format_schema_errors(&errors, MAX_LISTED_ERRORS));
                Ok(ExitCode::from(EXIT_VALIDATION_FAILED))
            }
        }
    }
}

fn show_written(rows: usize, path: &Path, quiet: bool) {
    if !quiet {
        println!("✓ Wrote {} records to {}", rows, path.display());
    }
}

/// Print the underlying conversion error and any hint for fixing it
pub fn handle_error(error: &ConversionError) {
    eprintln!("  Caused by: {}", error.user_message());

    if let ConversionError::Parse(err) = error {
        if err.message.starts_with("Duplicate column") {
            eprintln!("\nTip: Drop --strict-headers to let the last duplicate column win");
        }
    }
}

/// Command execution result
pub type CliResult<T> = Result<T, ConversionError>;
