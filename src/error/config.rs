//! Configuration errors

use super::AppError;

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> AppError {
    AppError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> AppError {
    AppError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
