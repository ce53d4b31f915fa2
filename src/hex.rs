//! Hamming distance between two hex numbers of arbitrary precision
//!
//! Both strings are held in memory and walked in lockstep. Each digit is
//! decoded independently into a nibble, so leading zeros matter and the
//! two numbers must be written with the same number of digits.

use log::debug;

use crate::bitdiff::nibble_diff;
use crate::error::{Argument, DistanceError};
use crate::Result;

/// Decode a single ASCII hex digit (either case) into its nibble value
#[inline(always)]
pub fn decode_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'F' => Some(c - b'A' + 10),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}

/// Compute the number of differing bits between two hex numbers
///
/// Length is measured in bytes of the text. Scanning stops at the first
/// position where either digit is invalid; if both are invalid at the same
/// position the error is attributed to the first argument.
pub fn hex_distance(hex1: &str, hex2: &str) -> Result<u64> {
    let (a, b) = (hex1.as_bytes(), hex2.as_bytes());
    if a.len() != b.len() {
        return Err(DistanceError::LengthMismatch {
            first: a.len() as u64,
            second: b.len() as u64,
        });
    }

    let mut distance = 0u64;
    for (idx, (&c1, &c2)) in a.iter().zip(b).enumerate() {
        match (decode_nibble(c1), decode_nibble(c2)) {
            (Some(n1), Some(n2)) => distance += u64::from(nibble_diff(n1, n2)),
            (None, _) => return Err(invalid_character(Argument::First, hex1, idx)),
            (_, None) => return Err(invalid_character(Argument::Second, hex2, idx)),
        }
    }

    debug!("hex distance over {} digits: {}", a.len(), distance);
    Ok(distance)
}

// Every byte before `idx` decoded as an ASCII digit, so `idx` is a char boundary.
fn invalid_character(argument: Argument, text: &str, idx: usize) -> DistanceError {
    DistanceError::InvalidCharacter {
        argument,
        position: idx + 1,
        character: text[idx..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER),
    }
}
