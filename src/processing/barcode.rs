use crate::utils::{NricError, Result};
use barcoders::sym::code128::Code128;

// Selects code set B (printable ASCII) at the start of the data
const CODE_SET_B: char = 'Ɓ';

/// Code128 encoding delegated to `barcoders`.
pub struct Code128Encoder;

impl Code128Encoder {
    /// Encode `data` into Code128 modules, `1` for a bar and `0` for a space.
    ///
    /// Only printable ASCII is accepted, so the set selector characters
    /// `barcoders` understands can never appear inside the data.
    pub fn modules(data: &str) -> Result<Vec<u8>> {
        if data.is_empty() {
            return Err(NricError::EmptyBarcodeData);
        }

        if let Some((position, character)) = data
            .chars()
            .enumerate()
            .find(|(_, character)| !(' '..='~').contains(character))
        {
            return Err(NricError::UnsupportedCharacter {
                character,
                position,
            });
        }

        let barcode = Code128::new(format!("{}{}", CODE_SET_B, data))
            .map_err(|e| NricError::Symbology(e.to_string()))?;
        Ok(barcode.encode())
    }
}
