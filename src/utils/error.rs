use thiserror::Error;

/// Errors raised by the fallible parts of the crate.
///
/// Validation outcomes (malformed input, checksum mismatch) are never
/// errors; they are reported through `ValidationResult`.
#[derive(Debug, Error)]
pub enum NricError {
    #[error("Barcode data is empty")]
    EmptyBarcodeData,

    #[error("Character {character:?} at position {position} cannot be encoded in Code128")]
    UnsupportedCharacter { character: char, position: usize },

    #[error("Barcode symbology error: {0}")]
    Symbology(String),

    #[error("Image encoding error: {0}")]
    ImageEncoding(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NricError>;
