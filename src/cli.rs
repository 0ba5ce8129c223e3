use crate::config::{CliOverrides, Config};
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "metricize")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Merge CSV, JSON, and XML person records and convert them to metric units")]
#[command(
    long_about = "Metricize scans a working directory for *.csv, *.json, and *.xml files of \
                       person records (name, height in inches, weight in pounds), merges them \
                       into one table, converts height to meters and weight to kilograms, and \
                       writes the result as CSV alongside a timestamped job log."
)]
#[command(after_help = "EXAMPLES:\n  \
    metricize\n  \
    metricize ./measurements --verbose\n  \
    metricize --output merged.csv --log-file etl.log\n  \
    metricize --config my-config.toml --output-format json\n")]
pub struct Cli {
    /// Directory to scan for source files (defaults to the current directory)
    pub directory: Option<PathBuf>,

    /// Output file name (written into the scanned directory)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Log file name (written into the scanned directory)
    #[arg(long)]
    pub log_file: Option<String>,

    /// File-name patterns to exclude from extraction
    #[arg(short, long, value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Dry run (list discovered source files without running the pipeline)
    #[arg(long, help = "Show what would be processed without actually doing it")]
    pub dry_run: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new()
            .with_directory(self.directory.clone())
            .with_target_file(self.output.clone())
            .with_log_file(self.log_file.clone())
            .with_exclude(self.exclude.clone())
    }

    pub fn should_use_colors(&self) -> bool {
        !self.quiet && console::Term::stdout().features().colors_supported()
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose > 0 && !self.quiet
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}
