//! Analyzer configuration types
//!
//! This module defines the minimal configuration needed by the analyzer library.
//! File selection and output formatting are handled by the application layer.

use serde::{Deserialize, Serialize};

/// Configuration for a single analysis pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Optional: only aggregate records from these sensor ids (case-insensitive)
    #[serde(default)]
    pub sensor_filter: Option<Vec<String>>,

    /// Optional: stop after reading this many lines
    #[serde(default)]
    pub max_lines: Option<usize>,
}

impl AnalyzerConfig {
    /// Create a new analyzer configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set sensor filter
    ///
    /// Ids are lower-cased to match decoded sensor ids.
    pub fn with_sensor_filter<I, S>(mut self, sensors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.sensor_filter = Some(
            sensors
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
        );
        self
    }

    /// Builder method: set line limit
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = Some(max_lines);
        self
    }

    /// Check if a (lower-cased) sensor id should be aggregated
    pub fn should_process_sensor(&self, sensor_id: &str) -> bool {
        match &self.sensor_filter {
            Some(sensors) => sensors.iter().any(|s| s.eq_ignore_ascii_case(sensor_id)),
            None => true,
        }
    }

    /// Check if the line with 0-based `index` is within the line limit
    pub fn within_line_limit(&self, index: usize) -> bool {
        match self.max_lines {
            Some(max) => index < max,
            None => true,
        }
    }
}
