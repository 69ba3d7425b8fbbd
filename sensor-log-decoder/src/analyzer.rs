//! Main analyzer API
//!
//! The [`Analyzer`] is the entry point for analyzing sensor log files. Each
//! call builds a fresh [`Aggregator`], so one analyzer can be shared across
//! files and threads.

use crate::aggregator::Aggregator;
use crate::config::AnalyzerConfig;
use crate::report::SensorReport;
use crate::types::{AnalyzerError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Analyzer for sensor log files
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Create an analyzer with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with the given configuration
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Analyze a log file
    ///
    /// # Arguments
    /// * `path` - Path to the log file
    ///
    /// # Returns
    /// * `Result<SensorReport>` - Report for the whole file. Malformed lines
    ///   are skipped and counted; they never fail the call.
    ///
    /// # Errors
    /// Returns [`AnalyzerError::UnreadableFile`] if the file cannot be opened
    /// or a line cannot be read. No partial report is produced.
    ///
    /// # Example
    /// ```no_run
    /// use sensor_log_decoder::Analyzer;
    /// use std::path::Path;
    ///
    /// let analyzer = Analyzer::new();
    /// let report = analyzer.analyze_file(Path::new("app_2.log")).unwrap();
    /// println!("Failed sensors: {}", report.failed_sensor_count());
    /// ```
    pub fn analyze_file(&self, path: &Path) -> Result<SensorReport> {
        log::info!("Analyzing log file: {:?}", path);

        let file = File::open(path).map_err(|source| AnalyzerError::UnreadableFile {
            path: path.to_path_buf(),
            source,
        })?;

        let report = self.analyze_reader(BufReader::new(file), path)?;

        log::info!(
            "Finished {:?}: {} lines, {} BIG records, {} malformed",
            path,
            report.lines_read,
            report.total_records,
            report.malformed_lines
        );
        Ok(report)
    }

    /// Analyze any buffered reader; `path` is only used for error reporting
    pub fn analyze_reader<R: BufRead>(&self, reader: R, path: &Path) -> Result<SensorReport> {
        let mut aggregator = Aggregator::with_config(self.config.clone());
        aggregator
            .try_process_lines(reader.lines())
            .map_err(|source| AnalyzerError::UnreadableFile {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(aggregator.finish())
    }

    /// Analyze lines already in memory
    pub fn analyze_lines<I, S>(&self, lines: I) -> SensorReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut aggregator = Aggregator::with_config(self.config.clone());
        aggregator.process_lines(lines);
        aggregator.finish()
    }
}
