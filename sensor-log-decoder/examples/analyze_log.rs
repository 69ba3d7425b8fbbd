//! Standalone sensor log analyzer
//!
//! Walks a log file line by line, printing how each BIG record was classified,
//! then prints the summary.
//!
//! Usage:
//!   analyze_log <app.log> [--sensor <id>] [--limit <lines>] [--verbose]
//!
//! Example:
//!   analyze_log app_2.log --sensor s1 --limit 500

use sensor_log_decoder::{Aggregator, AnalyzerConfig, LineOutcome};
use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <app.log> [--sensor <id>] [--limit <lines>] [--verbose]", args[0]);
        eprintln!("\nExample:");
        eprintln!("  {} app_2.log --sensor s1 --limit 500", args[0]);
        std::process::exit(1);
    }

    let log_file = PathBuf::from(&args[1]);
    let mut sensors = Vec::new();
    let mut limit: Option<usize> = None;
    let mut verbose = false;

    // Parse arguments
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--sensor" => {
                i += 1;
                if i < args.len() {
                    sensors.push(args[i].clone());
                }
            }
            "--limit" => {
                i += 1;
                if i < args.len() {
                    limit = Some(args[i].parse()?);
                }
            }
            "--verbose" | "-v" => {
                verbose = true;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let mut config = AnalyzerConfig::new();
    if !sensors.is_empty() {
        config = config.with_sensor_filter(&sensors);
    }
    if let Some(n) = limit {
        config = config.with_max_lines(n);
    }

    println!("=== Sensor Log Analyzer ===");
    println!("Log file: {:?}", log_file);
    println!();

    let reader = BufReader::new(File::open(&log_file)?);
    let mut aggregator = Aggregator::with_config(config);

    for (index, line) in reader.lines().enumerate() {
        if aggregator.line_limit_reached() {
            println!("\n... (limit of {} lines reached)", index);
            break;
        }

        let line = line?;
        match aggregator.process_line(index + 1, &line) {
            LineOutcome::Skipped => {}
            LineOutcome::Success => println!("[{:>6}] OK", index + 1),
            LineOutcome::Failure(message) => println!("[{:>6}] FAIL {}", index + 1, message),
            LineOutcome::Malformed => println!("[{:>6}] MALFORMED", index + 1),
            LineOutcome::Unrecognized => println!("[{:>6}] UNKNOWN STATE", index + 1),
            LineOutcome::Filtered => {
                if verbose {
                    println!("[{:>6}] filtered", index + 1);
                }
            }
        }
    }

    let report = aggregator.finish();

    println!("\n=== SUMMARY ===");
    println!("Lines read: {}", report.lines_read);
    println!("BIG records: {}", report.total_records);
    println!("Successful records: {}", report.success_records);
    println!("Failed records: {}", report.failure_records);
    println!("Malformed records: {}", report.malformed_lines);
    println!("Unrecognized states: {}", report.unrecognized_states);
    println!("Failing sensors: {}", report.failed_sensor_count());
    println!("Healthy sensors: {}", report.successful_sensor_count());

    Ok(())
}
