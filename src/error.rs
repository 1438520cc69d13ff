pub use masterror::{AppError, AppResult};

/// Message carried by every analysis failure
pub const ANALYSIS_FAILED: &str = "SQL analysis failed";

/// Create analysis failure error
///
/// Raised only when an extractor faults internally; malformed SQL never
/// reaches this path.
pub fn analysis_failed(detail: Option<&str>) -> AppError {
    match detail {
        Some(detail) if !detail.is_empty() => {
            AppError::internal(format!("{}: {}", ANALYSIS_FAILED, detail))
        }
        _ => AppError::internal(ANALYSIS_FAILED.to_string())
    }
}

/// Create file read error
pub fn file_read_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to read file '{}': {}", path, source))
}

/// Create config error
pub fn config_error(message: impl Into<String>) -> AppError {
    AppError::bad_request(message.into())
}

/// Create output serialization error
pub fn output_error(message: impl Into<String>) -> AppError {
    AppError::internal(format!("Failed to render output: {}", message.into()))
}
