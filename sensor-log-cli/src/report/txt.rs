//! Plain-text console report

use sensor_log_decoder::SensorReport;
use std::io::{self, Write};
use std::path::PathBuf;

/// Write the text report. Sensor ids are shown upper-cased.
pub fn write_report<W: Write>(out: &mut W, report: &SensorReport, files: &[PathBuf]) -> io::Result<()> {
    writeln!(out, "═══════════════════════════════════════════════")?;
    writeln!(out, "  Sensor Log Report")?;
    writeln!(out, "═══════════════════════════════════════════════")?;
    for file in files {
        writeln!(out, "  {}", file.display())?;
    }
    writeln!(out)?;

    writeln!(out, "All big messages: {}", report.total_records)?;
    writeln!(out, "Successful big messages: {}", report.success_records)?;
    writeln!(out, "Failed big messages: {}", report.failure_records)?;
    if report.malformed_lines > 0 {
        writeln!(out, "Malformed big messages (skipped): {}", report.malformed_lines)?;
    }
    if report.unrecognized_states > 0 {
        writeln!(out, "Unrecognized state codes (ignored): {}", report.unrecognized_states)?;
    }
    if report.filtered_records > 0 {
        writeln!(out, "Filtered out: {}", report.filtered_records)?;
    }
    writeln!(out, "Healthy sensors: {}", report.successful_sensor_count())?;
    writeln!(out, "Failing sensors: {}", report.failed_sensor_count())?;

    writeln!(out, "\nSensor errors:")?;
    if report.sensor_errors.is_empty() {
        writeln!(out, "No sensor errors found.")?;
    } else {
        for (sensor_id, error) in &report.sensor_errors {
            writeln!(
                out,
                "Sensor {}: {} ({}x)",
                sensor_id.to_uppercase(),
                error.error_message,
                error.error_count
            )?;
        }
    }

    writeln!(out, "\nSuccess messages count:")?;
    for (sensor_id, count) in &report.successful_sensors {
        writeln!(out, "{}: {}", sensor_id.to_uppercase(), count)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensor_log_decoder::process;

    fn render(report: &SensorReport) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, report, &[PathBuf::from("app_2.log")]).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_txt_report_contents() {
        let report = process([
            "x > 'H1;BIG;s1;a;b;c;0;d;e;f;g;h;i;00;j;k;l;02'",
            "x > 'H1;BIG;s1;a;b;c;0;d;e;f;g;h;i;00;j;k;l;02'",
            "x > 'H1;BIG;s2;a;b;c;08000;d;e;f;g;h;i;00;j;k;l;DD'",
        ]);
        let text = render(&report);

        assert!(text.contains("app_2.log"));
        assert!(text.contains("All big messages: 3"));
        assert!(text.contains("Successful big messages: 2"));
        assert!(text.contains("Failed big messages: 1"));
        assert!(text.contains("Sensor S2: Battery device error (1x)"));
        assert!(text.contains("S1: 2"));
        assert!(!text.contains("Malformed"));
    }

    #[test]
    fn test_txt_report_without_errors() {
        let text = render(&SensorReport::default());
        assert!(text.contains("All big messages: 0"));
        assert!(text.contains("No sensor errors found."));
    }
}
