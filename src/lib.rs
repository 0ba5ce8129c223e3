pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod journal;
pub mod loader;
pub mod record;
pub mod scanner;
pub mod transform;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, OutputConfig, SourceConfig};
pub use error::{EtlError, Result, UserFriendlyError};

// Core functionality re-exports
pub use extractor::Extractor;
pub use journal::{Checkpoint, JobJournal};
pub use loader::Loader;
pub use record::{Dataset, Record};
pub use scanner::{SourceFile, SourceFormat, SourceScanner};
pub use transform::Transformer;
pub use ui::{OutputFormatter, OutputMode};

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// End-of-run summary in the manner of an extraction report: what was
/// scanned, how many rows were merged, and where the results landed.
#[derive(Debug, Clone, Serialize)]
pub struct JobReport {
    pub directory: PathBuf,
    pub files_scanned: usize,
    pub files_by_format: BTreeMap<String, usize>,
    pub rows_extracted: usize,
    pub output_path: PathBuf,
    pub log_path: PathBuf,
    pub duration: Duration,
}

/// Main library interface: one value that owns the configuration and drives
/// the Extract → Transform → Load pass with journal checkpoints around each
/// phase. Strictly sequential; no stage calls back into an earlier one.
pub struct EtlJob {
    config: Config,
    output_formatter: OutputFormatter,
}

impl EtlJob {
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);

        Self {
            config,
            output_formatter,
        }
    }

    /// Create an EtlJob instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            crate::cli::OutputFormat::Human => OutputMode::Human,
            crate::cli::OutputFormat::Json => OutputMode::Json,
            crate::cli::OutputFormat::Plain => OutputMode::Plain,
        };

        Ok(Self::new(
            config,
            output_mode,
            cli_args.verbose,
            cli_args.quiet,
        ))
    }

    /// Run one full ETL pass over the configured directory.
    ///
    /// Exactly eight checkpoints are journaled per run, in fixed order. Any
    /// parse or I/O failure aborts immediately, leaving the journal at the
    /// last successful checkpoint as a post-mortem signal of where the run
    /// stopped.
    pub fn run(&self) -> Result<JobReport> {
        let start_time = Instant::now();
        let journal = JobJournal::new(self.config.log_path());

        journal.checkpoint(Checkpoint::JobStarted)?;
        self.output_formatter.start_operation("Starting ETL run");

        // Extract
        journal.checkpoint(Checkpoint::ExtractStarted)?;
        let sources = self.scan_sources()?;
        let mut dataset = Extractor::new().extract_all(&sources)?;
        journal.checkpoint(Checkpoint::ExtractEnded)?;

        self.output_formatter.info(&format!(
            "Extracted {} rows from {} source files",
            dataset.len(),
            sources.len()
        ));

        // Transform — applied exactly once per run; a second application
        // would double-convert the measurements.
        journal.checkpoint(Checkpoint::TransformStarted)?;
        Transformer::new().convert_units(&mut dataset);
        journal.checkpoint(Checkpoint::TransformEnded)?;

        self.output_formatter.print_dataset_preview(&dataset);

        // Load
        journal.checkpoint(Checkpoint::LoadStarted)?;
        let loader = Loader::new(self.config.target_path());
        loader.write(&dataset)?;
        journal.checkpoint(Checkpoint::LoadEnded)?;

        journal.checkpoint(Checkpoint::JobEnded)?;

        Ok(self.create_report(&sources, &dataset, start_time.elapsed()))
    }

    /// Discover the source files the run would process, in merge order.
    pub fn scan_sources(&self) -> Result<Vec<SourceFile>> {
        self.output_formatter.start_operation("Scanning for source files");

        let scanner = SourceScanner::new(&self.config.sources, &self.config.output.target_file);
        let sources = scanner.scan_directory(&self.config.output.directory)?;

        for source in &sources {
            self.output_formatter.debug(&format!(
                "{} ({}, {})",
                source.filename,
                source.format,
                ui::output::format_bytes(source.size)
            ));
        }

        Ok(sources)
    }

    fn create_report(
        &self,
        sources: &[SourceFile],
        dataset: &Dataset,
        duration: Duration,
    ) -> JobReport {
        let mut files_by_format = BTreeMap::new();
        for source in sources {
            *files_by_format
                .entry(source.format.extension().to_string())
                .or_insert(0) += 1;
        }

        JobReport {
            directory: self.config.output.directory.clone(),
            files_scanned: sources.len(),
            files_by_format,
            rows_extracted: dataset.len(),
            output_path: self.config.target_path(),
            log_path: self.config.log_path(),
            duration,
        }
    }

    /// Get configuration reference
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get output formatter reference
    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<std::path::Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config).map_err(EtlError::Io)?;
        Ok(())
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &EtlError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Convenience function to run one ETL pass with minimal setup
pub fn run_etl_simple(directory: Option<&std::path::Path>, verbose: bool) -> Result<JobReport> {
    let mut config = Config::default();

    if let Some(dir) = directory {
        config.output.directory = dir.to_path_buf();
    }

    let job = EtlJob::new(
        config,
        OutputMode::Plain,
        if verbose { 1 } else { 0 },
        !verbose,
    );

    job.run()
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
