//! Core types for the sensor log decoder library
//!
//! This module defines the values that flow through the pipeline:
//! raw payload fields, the decoded record with its typed state code, and the
//! decoded error-flag string. Everything here is immutable once built.

use std::fmt;
use std::path::PathBuf;

/// Result type for decoder operations
pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// Errors that can occur while analyzing a sensor log
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    /// The line qualified as a BIG record but its content could not be decoded.
    /// Recoverable: the offending line is skipped.
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// The log file could not be opened or read. Fatal for the run.
    #[error("Failed to read log file {path:?}: {source}")]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AnalyzerError {
    /// True if this error only affects a single line
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AnalyzerError::MalformedRecord(_))
    }
}

/// Field-separated content of a qualifying log line, before decoding
///
/// Fields are positionally significant; see [`crate::record_decoder`] for
/// the position-to-field mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPayload {
    fields: Vec<String>,
}

impl RecordPayload {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// All positional fields, in order
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

/// State code reported by a sensor observation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StateCode {
    /// `"02"`: observation succeeded
    Ok,
    /// `"DD"`: observation failed, status parameters carry error flags
    Error,
    /// Any other code. Not tallied.
    Other(String),
}

impl StateCode {
    /// Raw code for a successful observation
    pub const OK_CODE: &'static str = "02";
    /// Raw code for a failed observation
    pub const ERROR_CODE: &'static str = "DD";

    /// Classify a raw state code. Matching is exact (case-sensitive).
    pub fn parse(raw: &str) -> Self {
        match raw {
            Self::OK_CODE => StateCode::Ok,
            Self::ERROR_CODE => StateCode::Error,
            other => StateCode::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StateCode::Ok => Self::OK_CODE,
            StateCode::Error => Self::ERROR_CODE,
            StateCode::Other(raw) => raw,
        }
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A decoded BIG record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRecord {
    /// Handler id (position 0)
    pub handler_id: String,
    /// Sensor id, lower-cased (position 2)
    pub sensor_id: String,
    /// Status parameter 1, S_P_1 (position 6)
    pub sp1: String,
    /// Status parameter 2, S_P_2 (position 13)
    pub sp2: String,
    /// State code (position 17)
    pub state: StateCode,
}

/// Per-chunk error flag bits decoded from S_P_1/S_P_2, as a `'0'`/`'1'` string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorFlags(String);

impl ErrorFlags {
    /// Wrap an already decoded flag string
    pub fn new(bits: impl Into<String>) -> Self {
        Self(bits.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the flag at 0-based `index` is set
    pub fn is_set(&self, index: usize) -> bool {
        self.0.as_bytes().get(index) == Some(&b'1')
    }
}

impl fmt::Display for ErrorFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
