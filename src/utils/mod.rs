pub mod config;
pub mod error;
pub mod logger;

pub use error::{NricError, Result};
