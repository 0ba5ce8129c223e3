use clap::Parser;
use metricize::{Cli, EtlError, EtlJob, OutputFormatter, OutputMode, UserFriendlyError};
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Handle special commands first
    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    // Create the job from config + CLI overrides
    let job = match EtlJob::from_cli(&cli) {
        Ok(job) => job,
        Err(e) => {
            print_startup_error(&e);
            return 1;
        }
    };

    // Handle dry run mode
    if cli.dry_run {
        return handle_dry_run(&job);
    }

    // Execute the ETL pass
    match job.run() {
        Ok(report) => {
            job.output_formatter().print_job_report(&report);
            0
        }
        Err(e) => {
            job.handle_error(&e);

            // Map error types to appropriate exit codes
            match e {
                EtlError::FileFormat { .. } => 2,
                EtlError::Io(_) => 3,
                EtlError::Config { .. } => 4,
                EtlError::InvalidPath { .. } => 5,
            }
        }
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "metricize.toml".to_string());

    match EtlJob::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  metricize --config {}", config_path);
            println!("\nEdit the file to customize settings for your needs.");
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn handle_dry_run(job: &EtlJob) -> i32 {
    let formatter = job.output_formatter();

    formatter.info("DRY RUN MODE - No files will be processed");
    formatter.print_separator();

    let config = job.config();
    println!("  Directory:   {}", config.output.directory.display());
    println!("  Output file: {}", config.output.target_file);
    println!("  Log file:    {}", config.output.log_file);
    if !config.sources.exclude_patterns.is_empty() {
        println!("  Excluding:   {}", config.sources.exclude_patterns.join(", "));
    }

    formatter.print_separator();

    let sources = match job.scan_sources() {
        Ok(sources) => sources,
        Err(e) => {
            formatter.print_user_friendly_error(&e);
            return 1;
        }
    };

    if sources.is_empty() {
        formatter.warning("No source files found; a run would write an empty table");
    } else {
        formatter.info(&format!("Would extract from {} source files:", sources.len()));
        for source in &sources {
            println!("  {} ({})", source.filename, source.format);
        }
    }

    formatter.print_separator();
    formatter.success("Dry run completed successfully");
    formatter.info("Run without --dry-run to perform the ETL pass");

    0
}

fn print_startup_error(error: &EtlError) {
    // Create a basic formatter for startup errors
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}
