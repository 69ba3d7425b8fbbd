//! Error flag decoding
//!
//! Failed observations carry their error bits in the two status parameters.
//! The packing rule:
//!
//! 1. Drop the last character of S_P_1 and append S_P_2.
//! 2. Read the result two decimal digits at a time.
//! 3. Render each chunk as an 8-bit MSB-first binary number and keep the bit
//!    at [`FLAG_BIT_INDEX`].
//!
//! The kept bits, in chunk order, form the [`ErrorFlags`] string. Only the
//! first three positions have a meaning.

use crate::types::{AnalyzerError, ErrorFlags, Result};

/// Width of a chunk's binary rendering
pub const CHUNK_BITS: u32 = 8;

/// Index of the flag bit within a chunk, counted from the most significant bit
pub const FLAG_BIT_INDEX: u32 = 4;

/// Number of decimal digits per chunk
pub const CHUNK_DIGITS: usize = 2;

/// Message used when no assigned flag is set
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown device error";

/// Subsystems assigned to the first flag positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceFault {
    Battery,
    Temperature,
    ThresholdCentral,
}

impl DeviceFault {
    /// All faults, in flag-position order
    pub const ALL: [DeviceFault; 3] = [
        DeviceFault::Battery,
        DeviceFault::Temperature,
        DeviceFault::ThresholdCentral,
    ];

    /// 0-based position of this fault in the flag string
    pub fn position(self) -> usize {
        match self {
            DeviceFault::Battery => 0,
            DeviceFault::Temperature => 1,
            DeviceFault::ThresholdCentral => 2,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            DeviceFault::Battery => "Battery device error",
            DeviceFault::Temperature => "Temperature device error",
            DeviceFault::ThresholdCentral => "Threshold central error",
        }
    }
}

/// Decode the error flags packed into S_P_1 and S_P_2
///
/// A trailing single-digit chunk (odd combined length) is decoded like any
/// other chunk.
///
/// # Errors
///
/// Returns [`AnalyzerError::MalformedRecord`] if a chunk is not a decimal
/// number that fits in [`CHUNK_BITS`] bits.
pub fn decode_flags(sp1: &str, sp2: &str) -> Result<ErrorFlags> {
    let mut combined = String::with_capacity(sp1.len() + sp2.len());
    let mut head = sp1.chars();
    head.next_back();
    combined.push_str(head.as_str());
    combined.push_str(sp2);

    let chars: Vec<char> = combined.chars().collect();
    let mut bits = String::with_capacity(chars.len().div_ceil(CHUNK_DIGITS));

    for chunk in chars.chunks(CHUNK_DIGITS) {
        let chunk: String = chunk.iter().collect();
        let value = parse_chunk(&chunk)?;
        bits.push(if flag_bit(value) { '1' } else { '0' });
    }

    Ok(ErrorFlags::new(bits))
}

/// Parse one chunk as an unsigned decimal byte
fn parse_chunk(chunk: &str) -> Result<u8> {
    if !chunk.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AnalyzerError::MalformedRecord(format!(
            "status chunk {:?} is not a decimal number",
            chunk
        )));
    }

    chunk.parse::<u8>().map_err(|_| {
        AnalyzerError::MalformedRecord(format!(
            "status chunk {:?} does not fit in {} bits",
            chunk, CHUNK_BITS
        ))
    })
}

/// Bit at [`FLAG_BIT_INDEX`] of the 8-bit MSB-first rendering of `value`
fn flag_bit(value: u8) -> bool {
    (value >> (CHUNK_BITS - 1 - FLAG_BIT_INDEX)) & 0x01 == 1
}

/// Faults whose flag is set, in position order
pub fn active_faults(flags: &ErrorFlags) -> Vec<DeviceFault> {
    DeviceFault::ALL
        .into_iter()
        .filter(|fault| flags.is_set(fault.position()))
        .collect()
}

/// Human-readable description of the set flags
///
/// Only the first three positions are examined. Multiple faults are joined
/// with `", "`; no fault yields [`UNKNOWN_ERROR_MESSAGE`].
pub fn describe_flags(flags: &ErrorFlags) -> String {
    let faults = active_faults(flags);
    if faults.is_empty() {
        return UNKNOWN_ERROR_MESSAGE.to_string();
    }

    faults
        .iter()
        .map(|fault| fault.message())
        .collect::<Vec<_>>()
        .join(", ")
}
