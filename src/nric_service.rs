use crate::models::{BarcodeOptions, NricResponse, ValidationResult};
use crate::processing::BarcodeRenderer;
use crate::validation::ChecksumValidator;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::warn;

pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Validates identifiers and attaches a barcode for the valid ones.
#[derive(Debug, Clone, Default)]
pub struct NricService {
    options: BarcodeOptions,
}

impl NricService {
    pub fn new(options: BarcodeOptions) -> Self {
        NricService { options }
    }

    pub fn options(&self) -> &BarcodeOptions {
        &self.options
    }

    // Main entry point: normalize, validate, then render when valid
    pub fn process(&self, raw: &str) -> NricResponse {
        // Step 1: Normalize the input
        let nric = raw.to_ascii_uppercase();

        // Step 2: Validate the check letter
        let result = ChecksumValidator::validate(&nric);

        // Step 3: Render a barcode only for valid identifiers
        let barcode = if result.is_valid {
            self.barcode_data_uri(&nric)
        } else {
            None
        };

        NricResponse {
            barcode,
            ..NricResponse::from(result)
        }
    }

    /// Render `nric` and wrap it as a PNG data URI.
    ///
    /// Rendering failure means "no barcode available", never an invalid
    /// identifier.
    pub fn barcode_data_uri(&self, nric: &str) -> Option<String> {
        match BarcodeRenderer::render_png(nric, &self.options) {
            Ok(png) => Some(format!("{}{}", PNG_DATA_URI_PREFIX, STANDARD.encode(png))),
            Err(err) => {
                warn!("Barcode generation failed: {}", err);
                None
            }
        }
    }
}

impl From<ValidationResult> for NricResponse {
    fn from(result: ValidationResult) -> Self {
        NricResponse {
            valid: result.is_valid,
            message: result.message,
            barcode: None,
            expected: result.expected_check_letter,
        }
    }
}

impl NricResponse {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decode the embedded PNG, if any.
    pub fn barcode_png(&self) -> Option<Vec<u8>> {
        let encoded = self.barcode.as_deref()?.strip_prefix(PNG_DATA_URI_PREFIX)?;
        STANDARD.decode(encoded).ok()
    }
}
