use crate::models::BarcodeOptions;
use crate::utils::{NricError, Result};
use std::fs;
use std::path::Path;

/// Load barcode rendering options from a JSON file.
///
/// Fields missing from the file keep their defaults.
pub fn load_barcode_options(path: &Path) -> Result<BarcodeOptions> {
    let raw = fs::read_to_string(path)?;
    parse_barcode_options(&raw)
}

pub fn parse_barcode_options(raw: &str) -> Result<BarcodeOptions> {
    let options: BarcodeOptions = serde_json::from_str(raw)
        .map_err(|e| NricError::Config(format!("Invalid barcode options: {}", e)))?;

    if options.module_width == 0 {
        return Err(NricError::Config("module_width must be at least 1".to_string()));
    }
    if options.bar_height == 0 {
        return Err(NricError::Config("bar_height must be at least 1".to_string()));
    }

    Ok(options)
}
