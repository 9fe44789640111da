use crate::models::rules::{IDENTIFIER_LENGTH, PREFIX_LENGTH};
use crate::models::Identifier;
use lazy_static::lazy_static;
use regex::Regex;

pub const LENGTH_MESSAGE: &str = "Invalid NRIC format. NRIC must be exactly 9 characters.";
pub const SHAPE_MESSAGE: &str = "Invalid NRIC format. Format should be: @0000000#";

lazy_static! {
    // `\d` would also accept non-ASCII digits
    static ref IDENTIFIER_PATTERN: Regex = Regex::new(r"^[STFGM][0-9]{7}[A-Z]$").unwrap();
    static ref PREFIX_PATTERN: Regex = Regex::new(r"^[STFGM][0-9]{7}$").unwrap();
}

/// Hard format boundary in front of the checksum computation.
pub struct FormatValidator;

impl FormatValidator {
    /// Parse an uppercased candidate into an `Identifier`.
    ///
    /// On failure the error carries the message to report. No partial
    /// matching is attempted.
    pub fn parse(normalized: &str) -> Result<Identifier, &'static str> {
        if normalized.chars().count() != IDENTIFIER_LENGTH {
            return Err(LENGTH_MESSAGE);
        }

        if !IDENTIFIER_PATTERN.is_match(normalized) {
            return Err(SHAPE_MESSAGE);
        }

        // The pattern guarantees nine ASCII bytes from here on
        let bytes = normalized.as_bytes();
        Ok(Identifier {
            series_letter: char::from(bytes[0]),
            digits: Self::digits(&bytes[1..PREFIX_LENGTH]),
            check_letter: char::from(bytes[PREFIX_LENGTH]),
        })
    }

    /// Parse the series letter and digits of an identifier missing its check letter.
    pub fn parse_prefix(normalized: &str) -> Option<(char, [u8; 7])> {
        if !PREFIX_PATTERN.is_match(normalized) {
            return None;
        }

        let bytes = normalized.as_bytes();
        Some((char::from(bytes[0]), Self::digits(&bytes[1..PREFIX_LENGTH])))
    }

    fn digits(span: &[u8]) -> [u8; 7] {
        let mut digits = [0u8; 7];
        for (slot, byte) in digits.iter_mut().zip(span) {
            *slot = byte - b'0';
        }
        digits
    }
}
