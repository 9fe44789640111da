use crate::models::rules::{series_offset, DIGIT_WEIGHTS};
use crate::models::{SeriesFamily, ValidationResult};
use crate::validation::format::{FormatValidator, SHAPE_MESSAGE};
use log::debug;

/// Verifies the trailing check letter of an NRIC/FIN.
///
/// Every input maps to a `ValidationResult`; malformed input is an ordinary
/// outcome, not an error.
pub struct ChecksumValidator;

impl ChecksumValidator {
    pub fn validate(candidate: &str) -> ValidationResult {
        // Step 1: Normalize and enforce the format
        let normalized = candidate.to_ascii_uppercase();
        let identifier = match FormatValidator::parse(&normalized) {
            Ok(identifier) => identifier,
            Err(message) => return ValidationResult::malformed(message),
        };

        // Steps 2-5: Weighted sum, series offset, remainder and table lookup
        let family = identifier.family();
        let expected = match Self::expected_check_letter(identifier.series_letter, &identifier.digits)
        {
            Some(letter) => letter,
            None => return ValidationResult::malformed(SHAPE_MESSAGE),
        };

        debug!("Family {}, expected check letter {}", family, expected);

        // Step 6: Compare against the supplied letter
        if identifier.check_letter == expected {
            ValidationResult::valid(family)
        } else {
            ValidationResult::checksum_mismatch(expected)
        }
    }

    /// Compute the check letter for an 8-character prefix (series letter and digits).
    ///
    /// Returns `None` when the prefix is not a series letter followed by
    /// exactly seven digits.
    pub fn compute_check_letter(prefix: &str) -> Option<char> {
        let normalized = prefix.to_ascii_uppercase();
        let (series_letter, digits) = FormatValidator::parse_prefix(&normalized)?;
        Self::expected_check_letter(series_letter, &digits)
    }

    /// Append the computed check letter to a prefix.
    pub fn complete(prefix: &str) -> Option<String> {
        let letter = Self::compute_check_letter(prefix)?;
        Some(format!("{}{}", prefix.to_ascii_uppercase(), letter))
    }

    pub fn expected_check_letter(series_letter: char, digits: &[u8; 7]) -> Option<char> {
        let series_letter = series_letter.to_ascii_uppercase();
        let remainder = Self::remainder(series_letter, digits);
        SeriesFamily::classify(series_letter).check_letter(remainder)
    }

    // Always in 0..=10
    fn remainder(series_letter: char, digits: &[u8; 7]) -> u32 {
        let weighted: u32 = DIGIT_WEIGHTS
            .iter()
            .zip(digits)
            .map(|(weight, digit)| weight * u32::from(*digit))
            .sum();

        (weighted + series_offset(series_letter)) % 11
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ValidationStatus;
    use crate::validation::format::LENGTH_MESSAGE;

    const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    #[test]
    fn test_known_valid_identifiers() {
        for nric in ["S1234567D", "T0000000G", "F1234567N", "G1234567X", "M1234567K", "S0000000J"] {
            let result = ChecksumValidator::validate(nric);
            assert!(result.is_valid, "{} should be valid", nric);
            assert_eq!(result.status, ValidationStatus::Valid);
            assert_eq!(result.expected_check_letter, None);
        }
    }

    #[test]
    fn test_valid_messages_name_the_family() {
        assert_eq!(
            ChecksumValidator::validate("S1234567D").message,
            "Valid S/T-series identifier."
        );
        assert_eq!(
            ChecksumValidator::validate("F1234567N").message,
            "Valid F/G-series identifier."
        );
        assert_eq!(
            ChecksumValidator::validate("M1234567K").message,
            "Valid M-series identifier."
        );
    }

    #[test]
    fn test_t_series_reports_expected_letter() {
        for letter in ALPHABET.chars().filter(|c| *c != 'G') {
            let result = ChecksumValidator::validate(&format!("T0000000{}", letter));
            assert!(!result.is_valid);
            assert_eq!(result.status, ValidationStatus::ChecksumMismatch);
            assert_eq!(result.message, "Invalid check letter.");
            assert_eq!(result.expected_check_letter, Some('G'));
        }
    }

    #[test]
    fn test_m_series_reversed_lookup() {
        // 106 + 3 = 109, remainder 10, index 0
        assert_eq!(ChecksumValidator::compute_check_letter("M1234567"), Some('K'));
        // remainder 3, index 7
        assert_eq!(ChecksumValidator::compute_check_letter("M0000000"), Some('T'));
        let result = ChecksumValidator::validate("M1234567X");
        assert_eq!(result.expected_check_letter, Some('K'));
    }

    #[test]
    fn test_unknown_series_letter() {
        let result = ChecksumValidator::validate("A1234567Z");
        assert!(!result.is_valid);
        assert_eq!(result.status, ValidationStatus::Malformed);
        assert!(result.message.starts_with("Invalid NRIC format"));
        assert_eq!(result.expected_check_letter, None);
    }

    #[test]
    fn test_wrong_length_never_computes() {
        for candidate in ["", "S", "S123456", "S1234567", "S1234567DD", "S1234567D "] {
            let result = ChecksumValidator::validate(candidate);
            assert!(!result.is_valid);
            assert_eq!(result.message, LENGTH_MESSAGE);
            assert_eq!(result.expected_check_letter, None);
        }
    }

    #[test]
    fn test_non_digit_in_digit_span() {
        for candidate in ["S12345X7D", "SA234567D", "S123456.D", "S1234567 "] {
            let result = ChecksumValidator::validate(candidate);
            assert!(!result.is_valid);
            assert_eq!(result.status, ValidationStatus::Malformed);
        }
    }

    #[test]
    fn test_case_insensitive() {
        for candidate in ["S1234567D", "T0000000A", "M1234567K", "A1234567Z", "S123456"] {
            assert_eq!(
                ChecksumValidator::validate(candidate),
                ChecksumValidator::validate(&candidate.to_lowercase())
            );
        }
        assert!(ChecksumValidator::validate("s1234567d").is_valid);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            ChecksumValidator::validate("G7654321Q"),
            ChecksumValidator::validate("G7654321Q")
        );
    }

    #[test]
    fn test_exactly_one_letter_per_prefix() {
        // Walk a spread of digit combinations for every series letter
        for series in ['S', 'T', 'F', 'G', 'M'] {
            for seed in (0..10_000_000u32).step_by(99_991) {
                let prefix = format!("{}{:07}", series, seed);
                let expected = ChecksumValidator::compute_check_letter(&prefix).unwrap();

                let mut valid_count = 0;
                for letter in ALPHABET.chars() {
                    let result = ChecksumValidator::validate(&format!("{}{}", prefix, letter));
                    if result.is_valid {
                        valid_count += 1;
                        assert_eq!(letter, expected);
                    } else {
                        assert_eq!(result.expected_check_letter, Some(expected));
                    }
                }
                assert_eq!(valid_count, 1, "prefix {}", prefix);
            }
        }
    }

    #[test]
    fn test_complete() {
        assert_eq!(ChecksumValidator::complete("s1234567"), Some("S1234567D".to_string()));
        assert_eq!(ChecksumValidator::complete("S123456"), None);
        assert_eq!(ChecksumValidator::complete("B1234567"), None);
    }
}
