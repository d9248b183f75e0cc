//! Package source, archive and pattern errors

use super::AppError;

/// Creates a source unavailable error
pub fn source_unavailable(path: impl Into<String>, reason: impl Into<String>) -> AppError {
    AppError::SourceUnavailable {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an archive unreadable error
pub fn archive_unreadable(path: impl Into<String>, reason: impl Into<String>) -> AppError {
    AppError::ArchiveUnreadable {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid pattern error
pub fn pattern_invalid(pattern: impl Into<String>, reason: impl Into<String>) -> AppError {
    AppError::PatternInvalid {
        pattern: pattern.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid state error
pub fn invalid_state(message: impl Into<String>) -> AppError {
    AppError::InvalidState {
        message: message.into(),
    }
}
