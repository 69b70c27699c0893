//! Error types for the library

use thiserror::Error;

/// Errors reported by filter construction and the parameter helpers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BloomError {
    /// The requested byte count or probe count cannot back a filter
    #[error("Invalid capacity: bytes={bytes}, hashes={hashes}")]
    InvalidCapacity { bytes: usize, hashes: u32 },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, BloomError>;
