// error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegionError {
    #[error("Invalid region: end ({end}) must be at least start ({start})")]
    InvalidRegion { start: u32, end: u32 },

    #[error("Regions are not contiguous: {0}, {1}")]
    NonContiguousRegions(String, String),

    #[error("Malformed interval line {line_number}: {reason}: {line:?}")]
    MalformedIntervalLine {
        line_number: usize,
        reason: String,
        line: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("{0}")]
    StringError(String),
}

// Add a convenience implementation for &str errors
impl From<&str> for RegionError {
    fn from(error: &str) -> Self {
        RegionError::StringError(error.to_string())
    }
}
