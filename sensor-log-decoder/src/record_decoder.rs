//! Record decoder
//!
//! Maps the positional payload of a BIG record onto [`DecodedRecord`].
//!
//! | Position | Field        |
//! |----------|--------------|
//! | 0        | handler id   |
//! | 2        | sensor id    |
//! | 6        | S_P_1        |
//! | 13       | S_P_2        |
//! | 17       | state code   |

use crate::types::{AnalyzerError, DecodedRecord, RecordPayload, Result, StateCode};

pub const HANDLER_ID_POSITION: usize = 0;
pub const SENSOR_ID_POSITION: usize = 2;
pub const SP1_POSITION: usize = 6;
pub const SP2_POSITION: usize = 13;
pub const STATE_POSITION: usize = 17;

/// Minimum number of fields a BIG payload must carry
pub const MIN_FIELDS: usize = STATE_POSITION + 1;

/// Decode a payload into a typed record
///
/// # Errors
///
/// Returns [`AnalyzerError::MalformedRecord`] if the payload has fewer than
/// [`MIN_FIELDS`] fields.
pub fn decode(payload: &RecordPayload) -> Result<DecodedRecord> {
    let fields = payload.fields();
    if fields.len() < MIN_FIELDS {
        return Err(AnalyzerError::MalformedRecord(format!(
            "expected at least {} fields, found {}",
            MIN_FIELDS,
            fields.len()
        )));
    }

    // Every position below is < MIN_FIELDS
    Ok(DecodedRecord {
        handler_id: fields[HANDLER_ID_POSITION].clone(),
        sensor_id: fields[SENSOR_ID_POSITION].to_lowercase(),
        sp1: fields[SP1_POSITION].clone(),
        sp2: fields[SP2_POSITION].clone(),
        state: StateCode::parse(&fields[STATE_POSITION]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(handler: &str, sensor: &str, sp1: &str, sp2: &str, state: &str) -> RecordPayload {
        let mut fields = vec!["x".to_string(); MIN_FIELDS];
        fields[HANDLER_ID_POSITION] = handler.to_string();
        fields[SENSOR_ID_POSITION] = sensor.to_string();
        fields[SP1_POSITION] = sp1.to_string();
        fields[SP2_POSITION] = sp2.to_string();
        fields[STATE_POSITION] = state.to_string();
        RecordPayload::new(fields)
    }

    #[test]
    fn test_decode_fields() {
        let record = decode(&payload("H7", "SeNsOr1", "08000", "00", "DD")).unwrap();

        assert_eq!(record.handler_id, "H7");
        assert_eq!(record.sensor_id, "sensor1");
        assert_eq!(record.sp1, "08000");
        assert_eq!(record.sp2, "00");
        assert_eq!(record.state, StateCode::Error);
    }

    #[test]
    fn test_decode_extra_fields_are_ignored() {
        let mut fields = payload("H1", "S1", "0", "0", "02").fields().to_vec();
        fields.push("extra".to_string());
        let record = decode(&RecordPayload::new(fields)).unwrap();
        assert_eq!(record.state, StateCode::Ok);
    }

    #[test]
    fn test_decode_short_payload_is_malformed() {
        let short = RecordPayload::new(vec!["H1".to_string(); MIN_FIELDS - 1]);
        let err = decode(&short).unwrap_err();
        assert!(matches!(err, AnalyzerError::MalformedRecord(_)));
        assert!(err.to_string().contains("found 17"));
    }

    #[test]
    fn test_decode_unknown_state() {
        let record = decode(&payload("H1", "S1", "0", "0", "7F")).unwrap();
        assert_eq!(record.state, StateCode::Other("7F".to_string()));
    }
}
