//! Error types for the polar-temps services.

use thiserror::Error;

/// Result type alias using ChartError.
pub type ChartResult<T> = Result<T, ChartError>;

/// Primary error type for chart requests.
#[derive(Debug, Error)]
pub enum ChartError {
    // === Request validation errors ===
    #[error("Invalid year")]
    InvalidYear,

    #[error("Year must be between 1979 and 2024")]
    YearOutOfRange,

    #[error("Unknown region name")]
    UnknownRegion,

    // === Dataset errors ===
    #[error("Failed to read dataset: {0}")]
    DatasetIo(String),

    #[error("Malformed dataset: {0}")]
    MalformedDataset(String),

    #[error("No data row for year {0}")]
    YearRowMissing(i32),

    // === Rendering errors ===
    #[error("Rendering failed: {0}")]
    Render(String),
}

impl ChartError {
    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            ChartError::InvalidYear
            | ChartError::YearOutOfRange
            | ChartError::UnknownRegion => 400,

            ChartError::DatasetIo(_)
            | ChartError::MalformedDataset(_)
            | ChartError::YearRowMissing(_)
            | ChartError::Render(_) => 500,
        }
    }

    /// True for errors the client can fix by changing the request.
    pub fn is_client_error(&self) -> bool {
        self.http_status_code() < 500
    }
}

impl From<std::io::Error> for ChartError {
    fn from(err: std::io::Error) -> Self {
        ChartError::DatasetIo(err.to_string())
    }
}
