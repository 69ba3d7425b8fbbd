//! End-to-end tests: write a log file to disk and analyze it

use sensor_log_decoder::{Analyzer, AnalyzerConfig, AnalyzerError};
use std::io::Write;
use tempfile::NamedTempFile;

const SAMPLE_LOG: &str = "\
2023-10-01 12:00:00,001 INFO  service started
2023-10-01 12:00:01,114 DEBUG > 'H01;BIG;S1;A;B;C;08000;D;E;F;G;H;I;00;J;K;L;02'
2023-10-01 12:00:01,220 DEBUG > 'H01;BIG;S1;A;B;C;08000;D;E;F;G;H;I;00;J;K;L;02'
2023-10-01 12:00:02,005 DEBUG > 'H02;BIG;s2;A;B;C;08000;D;E;F;G;H;I;00;J;K;L;DD'
2023-10-01 12:00:02,300 DEBUG > 'H02;BIG;S2;A;B;C;08080;D;E;F;G;H;I;00;J;K;L;DD'
2023-10-01 12:00:03,010 DEBUG > 'H03;BIG;S3;A;B;C;0;D;E;F;G;H;I;00;J;K;L;02'
2023-10-01 12:00:03,500 DEBUG > 'H03;BIG;S3;A;B;C;00000;D;E;F;G;H;I;08;J;K;L;DD'
2023-10-01 12:00:04,000 DEBUG > 'H04;BIG;S4;too;short'
2023-10-01 12:00:04,100 DEBUG > 'H05;SMALL;S5;A;B;C;0;D;E;F;G;H;I;00;J;K;L;02'
2023-10-01 12:00:04,200 DEBUG > 'H06;BIG;S6;A;B;C;0;D;E;F;G;H;I;00;J;K;L;5A'
2023-10-01 12:00:05,000 INFO  service stopped
";

fn write_log(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

#[test]
fn test_sample_log_report() {
    let file = write_log(SAMPLE_LOG);
    let report = Analyzer::new()
        .analyze_file(file.path())
        .expect("Should analyze sample log");

    assert_eq!(report.lines_read, 11);
    assert_eq!(report.total_records, 8);
    assert_eq!(report.success_records, 3);
    assert_eq!(report.failure_records, 3);
    assert_eq!(report.malformed_lines, 1);
    assert_eq!(report.unrecognized_states, 1);

    // S1 only succeeded
    assert_eq!(report.successful_sensors.len(), 1);
    assert_eq!(report.successful_sensors["s1"], 2);

    // S2 ids differ in case but key the same sensor; the last message wins
    let s2 = &report.sensor_errors["s2"];
    assert_eq!(s2.error_count, 2);
    assert_eq!(s2.error_message, "Battery device error, Temperature device error");

    // S3 succeeded first, then failed: only reported as an error
    assert!(!report.successful_sensors.contains_key("s3"));
    assert_eq!(report.sensor_errors["s3"].error_message, "Threshold central error");
}

#[test]
fn test_log_without_big_records() {
    let file = write_log("line one\nline > two\nline three\n");
    let report = Analyzer::new().analyze_file(file.path()).unwrap();

    assert!(report.successful_sensors.is_empty());
    assert!(report.sensor_errors.is_empty());
    assert_eq!(report.total_records, 0);
    assert_eq!(report.success_records, 0);
    assert_eq!(report.failure_records, 0);
}

#[test]
fn test_empty_file() {
    let file = write_log("");
    let report = Analyzer::new().analyze_file(file.path()).unwrap();
    assert!(report.is_empty());
    assert_eq!(report.lines_read, 0);
}

#[test]
fn test_missing_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.log");

    let err = Analyzer::new().analyze_file(&missing).unwrap_err();
    assert!(!err.is_recoverable());
    match err {
        AnalyzerError::UnreadableFile { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_sensor_filter_on_file() {
    let file = write_log(SAMPLE_LOG);
    let analyzer = Analyzer::with_config(AnalyzerConfig::new().with_sensor_filter(["S2"]));
    let report = analyzer.analyze_file(file.path()).unwrap();

    assert!(report.successful_sensors.is_empty());
    assert_eq!(report.sensor_errors.len(), 1);
    assert!(report.sensor_errors.contains_key("s2"));
    // Decoded records for S1, S3, S6 are filtered out
    assert_eq!(report.filtered_records, 5);
}

#[test]
fn test_merge_of_two_files() {
    let first = write_log(
        "x > 'H1;BIG;S1;a;b;c;0;d;e;f;g;h;i;00;j;k;l;02'\n\
         x > 'H1;BIG;S2;a;b;c;0;d;e;f;g;h;i;00;j;k;l;02'\n",
    );
    let second = write_log("x > 'H1;BIG;S2;a;b;c;08000;d;e;f;g;h;i;00;j;k;l;DD'\n");

    let analyzer = Analyzer::new();
    let merged = analyzer
        .analyze_file(first.path())
        .unwrap()
        .merge(analyzer.analyze_file(second.path()).unwrap());

    assert_eq!(merged.total_records, 3);
    assert_eq!(merged.successful_sensors.len(), 1);
    assert_eq!(merged.successful_sensors["s1"], 1);
    assert_eq!(merged.sensor_errors["s2"].error_message, "Battery device error");
}
