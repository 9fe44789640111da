pub mod models;
pub mod nric_service;
pub mod processing;
pub mod utils;
pub mod validation;

pub use models::{BarcodeOptions, NricResponse, SeriesFamily, ValidationResult, ValidationStatus};
pub use nric_service::NricService;
pub use validation::ChecksumValidator;

/// Validate a candidate NRIC/FIN string. See [`ChecksumValidator::validate`].
pub fn validate(candidate: &str) -> ValidationResult {
    ChecksumValidator::validate(candidate)
}
