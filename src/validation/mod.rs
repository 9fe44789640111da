pub mod checksum;
pub mod format;

pub use checksum::ChecksumValidator;
pub use format::FormatValidator;
