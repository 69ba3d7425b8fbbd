//! Sensor Log Analyzer CLI Application
//!
//! This is the command-line interface for the sensor log analyzer.
//! It uses the sensor-log-decoder library and adds:
//! - Argument and config file handling
//! - Parallel analysis of multiple log files
//! - Report generation (TXT/JSON)

use anyhow::Result;
use clap::Parser;
use sensor_log_decoder::Analyzer;
use std::path::PathBuf;

mod batch;
mod config;
mod report;

use config::{AppConfig, OutputFormat};

/// Sensor Log Analyzer - Summarize BIG sensor records in application logs
#[derive(Parser, Debug)]
#[command(name = "sensor-log-cli")]
#[command(about = "Count sensor successes and decode sensor errors from log files", long_about = None)]
#[command(version)]
struct Args {
    /// Log file(s) to analyze
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Output file for the report (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Only aggregate these sensor ids (can be repeated)
    #[arg(long, value_name = "ID")]
    sensor: Vec<String>,

    /// Maximum number of lines to read per file
    #[arg(long, value_name = "COUNT")]
    max_lines: Option<usize>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Sensor Log Analyzer CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using decoder library v{}", sensor_log_decoder::VERSION);

    let settings = resolve_settings(&args)?;

    if settings.input.files.is_empty() {
        // No input - show help
        println!("Sensor Log Analyzer - No input specified");
        println!("\nQuick Start:");
        println!("  sensor-log-cli app.log");
        println!("  sensor-log-cli app_1.log app_2.log --format json -o report.json");
        println!("\nWith a configuration file:");
        println!("  sensor-log-cli --config config.toml");
        println!("\nUse --help for more options");
        return Ok(());
    }

    let analyzer = Analyzer::with_config(settings.filtering.analyzer_config());
    let report = batch::analyze_files(&analyzer, &settings.input.files)?;

    report::emit(
        settings.output.path.as_deref(),
        settings.output.format,
        &report,
        &settings.input.files,
    )?;

    Ok(())
}

/// Merge the optional config file with command-line overrides
fn resolve_settings(args: &Args) -> Result<AppConfig> {
    let mut settings = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            let config = config::load_config(path)?;
            log::debug!("Configuration loaded successfully");
            config
        }
        None => AppConfig::default(),
    };

    if !args.files.is_empty() {
        settings.input.files = args.files.clone();
    }
    if let Some(format) = args.format {
        settings.output.format = format;
    }
    if let Some(output) = &args.output {
        settings.output.path = Some(output.clone());
    }
    if !args.sensor.is_empty() {
        settings.filtering.sensors = Some(args.sensor.clone());
    }
    if let Some(max_lines) = args.max_lines {
        settings.filtering.max_lines = Some(max_lines);
    }

    Ok(settings)
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
