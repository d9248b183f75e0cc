//! File system errors

use super::AppError;

/// Creates a resource not found error
pub fn resource_not_found(path: impl Into<String>) -> AppError {
    AppError::ResourceNotFound { path: path.into() }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> AppError {
    AppError::IoError {
        message: message.into(),
    }
}
