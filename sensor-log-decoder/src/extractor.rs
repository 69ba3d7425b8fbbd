//! Line extractor
//!
//! Recognizes BIG records in raw log lines and splits their payload into
//! positional fields. A BIG line looks like:
//!
//! ```text
//! 2023-10-01 12:00:00 [INFO] > 'H1;BIG;S1;...;02'
//! ```
//!
//! Only the segment after the first `>` (up to the next `>`, if any) is
//! considered.

use crate::types::RecordPayload;

/// Marker separating the log prefix from the record segment
pub const RECORD_MARKER: char = '>';

/// Tag identifying a BIG record inside the segment
pub const RECORD_TAG: &str = "BIG";

/// Delimiter between payload fields
pub const FIELD_DELIMITER: char = ';';

/// Quote character wrapping the payload
pub const PAYLOAD_QUOTE: char = '\'';

/// Extract the payload of a BIG record
///
/// Returns `None` for lines without the marker or without the tag after it.
/// That is the common case, not an error.
pub fn extract(line: &str) -> Option<RecordPayload> {
    let segment = line.split(RECORD_MARKER).nth(1)?.trim();

    if !segment.contains(RECORD_TAG) {
        return None;
    }

    let fields = segment
        .trim_matches(PAYLOAD_QUOTE)
        .trim()
        .split(FIELD_DELIMITER)
        .map(str::to_string)
        .collect();

    Some(RecordPayload::new(fields))
}
