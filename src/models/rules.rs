/// Series letters accepted in the first position of an identifier.
pub const SERIES_LETTERS: [char; 5] = ['S', 'T', 'F', 'G', 'M'];

/// Number of characters in a complete identifier.
pub const IDENTIFIER_LENGTH: usize = 9;

/// Number of characters in an identifier without its check letter.
pub const PREFIX_LENGTH: usize = IDENTIFIER_LENGTH - 1;

/// Weights applied left to right over the seven digits.
pub const DIGIT_WEIGHTS: [u32; 7] = [2, 7, 6, 5, 4, 3, 2];

/// Check letters for the S and T series, indexed by remainder.
pub const ST_CHECK_LETTERS: [char; 11] = ['J', 'Z', 'I', 'H', 'G', 'F', 'E', 'D', 'C', 'B', 'A'];

/// Check letters for the F and G series, indexed by remainder.
pub const FG_CHECK_LETTERS: [char; 11] = ['X', 'W', 'U', 'T', 'R', 'Q', 'P', 'N', 'M', 'L', 'K'];

/// Check letters for the M series, indexed by `10 - remainder`.
pub const M_CHECK_LETTERS: [char; 11] = ['K', 'L', 'J', 'N', 'P', 'Q', 'R', 'T', 'U', 'W', 'X'];

/// Amount added to the weighted sum before taking the remainder.
///
/// T and G identifiers were issued from 2000 onwards and carry +4, the M
/// series carries +3. Unknown letters get no offset.
pub fn series_offset(series_letter: char) -> u32 {
    match series_letter {
        'T' | 'G' => 4,
        'M' => 3,
        _ => 0,
    }
}
