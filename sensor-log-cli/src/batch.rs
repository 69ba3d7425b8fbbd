//! Multi-file processing
//!
//! Each file is analyzed by its own aggregator on the rayon pool. Reports
//! are merged in input order once every file has finished, so the result is
//! the same as a sequential run.

use anyhow::Result;
use rayon::prelude::*;
use sensor_log_decoder::{Analyzer, SensorReport};
use std::path::PathBuf;

/// Analyze all files and merge their reports
///
/// Any unreadable file aborts the whole batch.
pub fn analyze_files(analyzer: &Analyzer, files: &[PathBuf]) -> Result<SensorReport> {
    log::info!("Analyzing {} file(s)", files.len());

    let reports = files
        .par_iter()
        .map(|path| analyzer.analyze_file(path))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(reports
        .into_iter()
        .fold(SensorReport::default(), SensorReport::merge))
}
