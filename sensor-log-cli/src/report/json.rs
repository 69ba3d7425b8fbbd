//! JSON report

use chrono::{SecondsFormat, Utc};
use sensor_log_decoder::SensorReport;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    files: &'a [PathBuf],
    #[serde(flatten)]
    report: &'a SensorReport,
}

/// Write the report as pretty-printed JSON
pub fn write_report<W: Write>(
    out: &mut W,
    report: &SensorReport,
    files: &[PathBuf],
) -> serde_json::Result<()> {
    let document = JsonReport {
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        files,
        report,
    };
    serde_json::to_writer_pretty(&mut *out, &document)?;
    writeln!(out).map_err(serde_json::Error::io)
}
