use crate::models::rules::{FG_CHECK_LETTERS, M_CHECK_LETTERS, ST_CHECK_LETTERS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grouping of series letters that share a check letter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesFamily {
    ST, // Citizens and permanent residents
    FG, // Foreigners
    M,  // Foreigners, 2022 onwards
    Invalid,
}

impl SeriesFamily {
    pub fn classify(series_letter: char) -> Self {
        match series_letter.to_ascii_uppercase() {
            'S' | 'T' => SeriesFamily::ST,
            'F' | 'G' => SeriesFamily::FG,
            'M' => SeriesFamily::M,
            _ => SeriesFamily::Invalid,
        }
    }

    /// Look up the check letter for a remainder in `0..=10`.
    ///
    /// Returns `None` for the `Invalid` family or an out of range remainder.
    pub fn check_letter(&self, remainder: u32) -> Option<char> {
        let remainder = remainder as usize;
        match self {
            SeriesFamily::ST => ST_CHECK_LETTERS.get(remainder).copied(),
            SeriesFamily::FG => FG_CHECK_LETTERS.get(remainder).copied(),
            // M reads its table from the opposite end: 11 - (remainder + 1)
            SeriesFamily::M => {
                let index = (M_CHECK_LETTERS.len() - 1).checked_sub(remainder)?;
                M_CHECK_LETTERS.get(index).copied()
            }
            SeriesFamily::Invalid => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeriesFamily::ST => "S/T-series",
            SeriesFamily::FG => "F/G-series",
            SeriesFamily::M => "M-series",
            SeriesFamily::Invalid => "unknown series",
        }
    }
}

impl fmt::Display for SeriesFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A well-formed identifier: series letter, seven digits and a check letter.
///
/// Only the format check builds these, so the fields are always in range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub series_letter: char,
    pub digits: [u8; 7],
    pub check_letter: char,
}

impl Identifier {
    pub fn family(&self) -> SeriesFamily {
        SeriesFamily::classify(self.series_letter)
    }

    /// The series letter and digits without the check letter.
    pub fn prefix(&self) -> String {
        let mut prefix = String::with_capacity(8);
        prefix.push(self.series_letter);
        for digit in self.digits {
            prefix.push(char::from(b'0' + digit));
        }
        prefix
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.prefix(), self.check_letter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    Valid,
    Malformed,
    ChecksumMismatch,
}

/// Outcome of checking a single candidate string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    #[serde(rename = "valid")]
    pub is_valid: bool,
    pub message: String,
    #[serde(rename = "expected", skip_serializing_if = "Option::is_none")]
    pub expected_check_letter: Option<char>,
    #[serde(skip)]
    pub status: ValidationStatus,
}

impl ValidationResult {
    pub fn valid(family: SeriesFamily) -> Self {
        ValidationResult {
            is_valid: true,
            message: format!("Valid {} identifier.", family),
            expected_check_letter: None,
            status: ValidationStatus::Valid,
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        ValidationResult {
            is_valid: false,
            message: message.into(),
            expected_check_letter: None,
            status: ValidationStatus::Malformed,
        }
    }

    pub fn checksum_mismatch(expected: char) -> Self {
        ValidationResult {
            is_valid: false,
            message: "Invalid check letter.".to_string(),
            expected_check_letter: Some(expected),
            status: ValidationStatus::ChecksumMismatch,
        }
    }
}

/// Payload handed back to callers of `NricService`.
///
/// `barcode` is a `data:image/png;base64,` URI when the identifier is valid
/// and rendering succeeded, `null` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NricResponse {
    pub valid: bool,
    pub message: String,
    pub barcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<char>,
}

pub const MAX_MODULE_WIDTH: u32 = 10;
pub const MAX_BAR_HEIGHT: u32 = 600;
pub const MAX_QUIET_ZONE: u32 = 40;

/// Rendering settings for barcode images, in pixels and modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarcodeOptions {
    /// Width of the narrowest bar, in pixels.
    pub module_width: u32,
    /// Height of the bars, in pixels.
    pub bar_height: u32,
    /// Blank margin on each side, in modules.
    pub quiet_zone: u32,
}

impl Default for BarcodeOptions {
    fn default() -> Self {
        BarcodeOptions {
            module_width: 2,
            bar_height: 80,
            quiet_zone: 10,
        }
    }
}

impl BarcodeOptions {
    /// Clamp every setting into the range the renderer accepts.
    pub fn bounded(&self) -> Self {
        BarcodeOptions {
            module_width: self.module_width.clamp(1, MAX_MODULE_WIDTH),
            bar_height: self.bar_height.clamp(1, MAX_BAR_HEIGHT),
            quiet_zone: self.quiet_zone.min(MAX_QUIET_ZONE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_families() {
        assert_eq!(SeriesFamily::classify('S'), SeriesFamily::ST);
        assert_eq!(SeriesFamily::classify('t'), SeriesFamily::ST);
        assert_eq!(SeriesFamily::classify('F'), SeriesFamily::FG);
        assert_eq!(SeriesFamily::classify('G'), SeriesFamily::FG);
        assert_eq!(SeriesFamily::classify('M'), SeriesFamily::M);
        assert_eq!(SeriesFamily::classify('A'), SeriesFamily::Invalid);
        assert_eq!(SeriesFamily::classify('7'), SeriesFamily::Invalid);
    }

    #[test]
    fn test_m_family_reads_table_in_reverse() {
        assert_eq!(SeriesFamily::M.check_letter(10), Some('K'));
        assert_eq!(SeriesFamily::M.check_letter(0), Some('X'));
        assert_eq!(SeriesFamily::M.check_letter(8), Some('J'));
        assert_eq!(SeriesFamily::M.check_letter(11), None);
    }

    #[test]
    fn test_invalid_family_has_no_letters() {
        for remainder in 0..11 {
            assert_eq!(SeriesFamily::Invalid.check_letter(remainder), None);
        }
    }

    #[test]
    fn test_identifier_display() {
        let identifier = Identifier {
            series_letter: 'S',
            digits: [1, 2, 3, 4, 5, 6, 7],
            check_letter: 'D',
        };
        assert_eq!(identifier.prefix(), "S1234567");
        assert_eq!(identifier.to_string(), "S1234567D");
        assert_eq!(identifier.family(), SeriesFamily::ST);
    }

    #[test]
    fn test_result_json_omits_missing_expected() {
        let json = serde_json::to_value(ValidationResult::valid(SeriesFamily::ST)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"valid": true, "message": "Valid S/T-series identifier."})
        );

        let json = serde_json::to_value(ValidationResult::checksum_mismatch('G')).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"valid": false, "message": "Invalid check letter.", "expected": "G"})
        );
    }

    #[test]
    fn test_barcode_options_partial_json_uses_defaults() {
        let options: BarcodeOptions = serde_json::from_str(r#"{"bar_height": 120}"#).unwrap();
        assert_eq!(options.bar_height, 120);
        assert_eq!(options.module_width, 2);
        assert_eq!(options.quiet_zone, 10);
    }

    #[test]
    fn test_barcode_options_bounded() {
        let options = BarcodeOptions {
            module_width: 0,
            bar_height: 10_000,
            quiet_zone: 500,
        }
        .bounded();
        assert_eq!(options.module_width, 1);
        assert_eq!(options.bar_height, MAX_BAR_HEIGHT);
        assert_eq!(options.quiet_zone, MAX_QUIET_ZONE);
    }
}
