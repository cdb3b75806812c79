use thiserror::Error;

/// Errors from the data layer: catalog lookups, file loading, profile
/// construction. Insufficient analytical data is NOT an error; the ratio
/// engine degrades to sentinel values instead.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Unknown asset '{asset_id}'. Available: {available:?}")]
    UnknownAsset {
        asset_id: String,
        available: Vec<String>,
    },

    #[error("Data file error: {0}")]
    FileError(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),
}

impl From<serde_json::Error> for DataError {
    fn from(e: serde_json::Error) -> Self {
        DataError::InvalidData(e.to_string())
    }
}
