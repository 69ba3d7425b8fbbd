//! Sensor Log Decoder Library
//!
//! A small, reusable library for analyzing sensor logs that carry BIG records:
//! semicolon-delimited payloads following a `>` marker, whose two status
//! parameters pack per-subsystem error flags.
//!
//! # Architecture
//!
//! Data flows one way through three stages:
//! - [`extractor`]: raw line → field payload (only BIG records qualify)
//! - [`record_decoder`] and [`flags`]: payload → typed record, status
//!   parameters → error flags → message
//! - [`Aggregator`]: records → per-sensor tallies → [`SensorReport`]
//!
//! The library does NOT:
//! - Print reports or pick output formats
//! - Select files or scan directories
//!
//! Those live in the application layer (sensor-log-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use sensor_log_decoder::{Analyzer, AnalyzerConfig};
//! use std::path::Path;
//!
//! let config = AnalyzerConfig::new().with_sensor_filter(["s1", "s2"]);
//! let analyzer = Analyzer::with_config(config);
//!
//! let report = analyzer.analyze_file(Path::new("app_2.log")).unwrap();
//!
//! for (sensor_id, error) in &report.sensor_errors {
//!     println!("Sensor {}: {}", sensor_id.to_uppercase(), error.error_message);
//! }
//! ```

// Public modules
pub mod aggregator;
pub mod analyzer;
pub mod config;
pub mod extractor;
pub mod flags;
pub mod record_decoder;
pub mod report;
pub mod types;

// Re-export main types for convenience
pub use aggregator::{process, Aggregator, LineOutcome};
pub use analyzer::Analyzer;
pub use config::AnalyzerConfig;
pub use extractor::extract;
pub use flags::{decode_flags, describe_flags, DeviceFault};
pub use record_decoder::decode;
pub use report::{SensorError, SensorReport};
pub use types::{AnalyzerError, DecodedRecord, ErrorFlags, RecordPayload, Result, StateCode};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
