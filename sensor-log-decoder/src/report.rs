//! Final per-run report
//!
//! A [`SensorReport`] is what an [`crate::Aggregator`] produces once the whole
//! input has been consumed. Error status takes precedence: a sensor listed in
//! `sensor_errors` never appears in `successful_sensors`.

use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Error summary for a single failing sensor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorError {
    /// Number of failed observations
    pub error_count: usize,
    /// Message built from the most recent failure's flags
    pub error_message: String,
}

/// Result of analyzing one or more sensor logs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorReport {
    /// Lines read from the input
    pub lines_read: usize,
    /// Lines recognized as BIG records (including malformed ones)
    pub total_records: usize,
    /// Records with the success state code
    pub success_records: usize,
    /// Records with the failure state code
    pub failure_records: usize,
    /// BIG records skipped because they could not be decoded
    pub malformed_lines: usize,
    /// Records with a state code that is neither success nor failure
    pub unrecognized_states: usize,
    /// Records skipped by the sensor filter
    pub filtered_records: usize,
    /// Success counts of sensors that never failed, keyed by lower-cased id
    pub successful_sensors: BTreeMap<String, usize>,
    /// Failing sensors, keyed by lower-cased id
    pub sensor_errors: BTreeMap<String, SensorError>,
}

impl SensorReport {
    /// Number of sensors that only reported successes
    pub fn successful_sensor_count(&self) -> usize {
        self.successful_sensors.len()
    }

    /// Number of sensors with at least one failure
    pub fn failed_sensor_count(&self) -> usize {
        self.sensor_errors.len()
    }

    /// True if no BIG record was seen
    pub fn is_empty(&self) -> bool {
        self.total_records == 0
    }

    /// Combine with the report of an independent run
    ///
    /// Counters and tallies add up. For sensors failing in both, `other`'s
    /// message is kept, so merge reports in input order. Error precedence is
    /// re-applied afterwards.
    pub fn merge(mut self, other: SensorReport) -> SensorReport {
        self.lines_read += other.lines_read;
        self.total_records += other.total_records;
        self.success_records += other.success_records;
        self.failure_records += other.failure_records;
        self.malformed_lines += other.malformed_lines;
        self.unrecognized_states += other.unrecognized_states;
        self.filtered_records += other.filtered_records;

        for (sensor_id, count) in other.successful_sensors {
            *self.successful_sensors.entry(sensor_id).or_insert(0) += count;
        }

        for (sensor_id, error) in other.sensor_errors {
            match self.sensor_errors.entry(sensor_id) {
                Entry::Occupied(mut existing) => {
                    let existing = existing.get_mut();
                    existing.error_count += error.error_count;
                    existing.error_message = error.error_message;
                }
                Entry::Vacant(slot) => {
                    slot.insert(error);
                }
            }
        }

        self.apply_error_precedence();
        self
    }

    /// Drop success tallies of sensors that also failed
    pub(crate) fn apply_error_precedence(&mut self) {
        let errors = &self.sensor_errors;
        self.successful_sensors
            .retain(|sensor_id, _| !errors.contains_key(sensor_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(count: usize, message: &str) -> SensorError {
        SensorError {
            error_count: count,
            error_message: message.to_string(),
        }
    }

    #[test]
    fn test_merge_adds_counters_and_tallies() {
        let mut first = SensorReport::default();
        first.total_records = 3;
        first.success_records = 3;
        first.successful_sensors.insert("s1".to_string(), 3);

        let mut second = SensorReport::default();
        second.total_records = 2;
        second.success_records = 2;
        second.successful_sensors.insert("s1".to_string(), 1);
        second.successful_sensors.insert("s2".to_string(), 1);

        let merged = first.merge(second);
        assert_eq!(merged.total_records, 5);
        assert_eq!(merged.success_records, 5);
        assert_eq!(merged.successful_sensors["s1"], 4);
        assert_eq!(merged.successful_sensors["s2"], 1);
    }

    #[test]
    fn test_merge_keeps_error_precedence() {
        let mut first = SensorReport::default();
        first.successful_sensors.insert("s1".to_string(), 5);
        first.sensor_errors.insert("s2".to_string(), error(1, "Battery device error"));

        let mut second = SensorReport::default();
        second.sensor_errors.insert("s1".to_string(), error(1, "Unknown device error"));
        second.sensor_errors.insert("s2".to_string(), error(2, "Temperature device error"));

        let merged = first.merge(second);
        assert!(merged.successful_sensors.is_empty());
        assert_eq!(merged.failed_sensor_count(), 2);
        assert_eq!(merged.sensor_errors["s2"], error(3, "Temperature device error"));
        assert_eq!(merged.sensor_errors["s1"].error_count, 1);
    }

    #[test]
    fn test_empty_report() {
        let report = SensorReport::default();
        assert!(report.is_empty());
        assert_eq!(report.successful_sensor_count(), 0);
        assert_eq!(report.failed_sensor_count(), 0);
    }
}
