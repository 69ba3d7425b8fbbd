//! Aggregation pass
//!
//! The [`Aggregator`] is the only stateful piece of the library. It owns the
//! per-sensor tallies for one pass over one input and is consumed by
//! [`Aggregator::finish`], which applies error precedence and yields the
//! [`SensorReport`].

use crate::config::AnalyzerConfig;
use crate::extractor;
use crate::flags;
use crate::record_decoder;
use crate::report::{SensorError, SensorReport};
use crate::types::{DecodedRecord, RecordPayload, Result, StateCode};
use std::collections::BTreeMap;
use std::convert::Infallible;

/// What happened to a single input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Not a BIG record
    Skipped,
    /// BIG record that could not be decoded
    Malformed,
    /// Sensor excluded by the sensor filter
    Filtered,
    /// State code neither success nor failure
    Unrecognized,
    /// Success observation tallied
    Success,
    /// Failure observation tallied, with the computed message
    Failure(String),
}

/// Aggregation context for one pass
#[derive(Debug, Default)]
pub struct Aggregator {
    config: AnalyzerConfig,
    report: SensorReport,
    successes: BTreeMap<String, usize>,
    errors: BTreeMap<String, SensorError>,
}

impl Aggregator {
    /// Create an aggregator with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an aggregator with the given configuration
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Feed every line in order, honoring the configured line limit
    pub fn process_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let result = self.try_process_lines(lines.into_iter().map(Ok::<S, Infallible>));
        if let Err(never) = result {
            match never {}
        }
    }

    /// Feed lines from a fallible source, such as `BufRead::lines`
    ///
    /// Stops at the configured line limit. The first source error aborts the
    /// pass and is returned unchanged.
    pub fn try_process_lines<I, S, E>(&mut self, lines: I) -> std::result::Result<(), E>
    where
        I: IntoIterator<Item = std::result::Result<S, E>>,
        S: AsRef<str>,
    {
        for line in lines {
            if self.line_limit_reached() {
                log::debug!("Line limit reached after {} lines", self.report.lines_read);
                break;
            }
            let line = line?;
            self.process_line(self.report.lines_read + 1, line.as_ref());
        }
        Ok(())
    }

    /// True once the configured line limit has been consumed
    pub fn line_limit_reached(&self) -> bool {
        !self.config.within_line_limit(self.report.lines_read)
    }

    /// Process a single line; `line_number` is 1-based and only used for logging
    pub fn process_line(&mut self, line_number: usize, line: &str) -> LineOutcome {
        self.report.lines_read += 1;

        let Some(payload) = extractor::extract(line) else {
            log::trace!("Line {}: not a BIG record", line_number);
            return LineOutcome::Skipped;
        };

        self.report.total_records += 1;

        match self.handle_record(&payload) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("Line {}: skipping record: {}", line_number, e);
                self.report.malformed_lines += 1;
                LineOutcome::Malformed
            }
        }
    }

    /// Decode and tally one BIG record. Maps are only touched once the
    /// record has been fully decoded.
    fn handle_record(&mut self, payload: &RecordPayload) -> Result<LineOutcome> {
        let record = record_decoder::decode(payload)?;

        if !self.config.should_process_sensor(&record.sensor_id) {
            self.report.filtered_records += 1;
            return Ok(LineOutcome::Filtered);
        }

        match &record.state {
            StateCode::Ok => {
                self.record_success(&record);
                Ok(LineOutcome::Success)
            }
            StateCode::Error => {
                let error_flags = flags::decode_flags(&record.sp1, &record.sp2)?;
                let message = flags::describe_flags(&error_flags);
                log::debug!(
                    "Sensor {} (handler {}) failed: flags {} -> {}",
                    record.sensor_id,
                    record.handler_id,
                    error_flags,
                    message
                );
                self.record_failure(&record, message.clone());
                Ok(LineOutcome::Failure(message))
            }
            StateCode::Other(code) => {
                log::debug!(
                    "Sensor {}: unrecognized state code {:?} ignored",
                    record.sensor_id,
                    code
                );
                self.report.unrecognized_states += 1;
                Ok(LineOutcome::Unrecognized)
            }
        }
    }

    fn record_success(&mut self, record: &DecodedRecord) {
        log::debug!("Sensor {} (handler {}) ok", record.sensor_id, record.handler_id);
        *self.successes.entry(record.sensor_id.clone()).or_insert(0) += 1;
        self.report.success_records += 1;
    }

    fn record_failure(&mut self, record: &DecodedRecord, message: String) {
        let entry = self
            .errors
            .entry(record.sensor_id.clone())
            .or_insert_with(|| SensorError {
                error_count: 0,
                error_message: String::new(),
            });
        entry.error_count += 1;
        entry.error_message = message;
        self.report.failure_records += 1;
    }

    /// Finish the pass and build the report
    pub fn finish(self) -> SensorReport {
        let mut report = self.report;
        report.successful_sensors = self.successes;
        report.sensor_errors = self.errors;
        report.apply_error_precedence();
        report
    }
}

/// Run a complete pass over `lines` with default settings
pub fn process<I, S>(lines: I) -> SensorReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut aggregator = Aggregator::new();
    aggregator.process_lines(lines);
    aggregator.finish()
}
