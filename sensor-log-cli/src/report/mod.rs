//! Report generation
//!
//! Renders a [`SensorReport`] as plain text or JSON to any writer.

pub mod json;
pub mod txt;

use crate::config::OutputFormat;
use anyhow::{Context, Result};
use sensor_log_decoder::SensorReport;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Render `report` in `format` to `writer`
pub fn render<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    report: &SensorReport,
    files: &[PathBuf],
) -> Result<()> {
    match format {
        OutputFormat::Txt => txt::write_report(writer, report, files)?,
        OutputFormat::Json => json::write_report(writer, report, files)?,
    }
    Ok(())
}

/// Render to a file if `output` is set, otherwise to stdout
pub fn emit(
    output: Option<&Path>,
    format: OutputFormat,
    report: &SensorReport,
    files: &[PathBuf],
) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create report file: {:?}", path))?;
            let mut writer = BufWriter::new(file);
            render(&mut writer, format, report, files)?;
            writer
                .flush()
                .with_context(|| format!("Failed to write report file: {:?}", path))?;
            log::info!("Report written to {:?}", path);
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            render(&mut handle, format, report, files)?;
            handle.flush()?;
        }
    }
    Ok(())
}
