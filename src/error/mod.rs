//! Error types and handling for Scheme Editor
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`search`]: Package source, archive and pattern errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors
//! - [`cli`]: Command line errors

pub mod cli;
pub mod config;
pub mod fs;
pub mod search;

pub use cli::unsupported_shell;
pub use config::{parse_failed as config_parse_failed, read_failed as config_read_failed};
pub use fs::{io_error, resource_not_found};
pub use search::{archive_unreadable, invalid_state, pattern_invalid, source_unavailable};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Scheme Editor operations
#[derive(Error, Diagnostic, Debug)]
pub enum AppError {
    // Search errors
    #[error("Package source unavailable: {path}: {reason}")]
    #[diagnostic(
        code(scheme_editor::search::source_unavailable),
        help("Check that the packages directory exists and is readable")
    )]
    SourceUnavailable { path: String, reason: String },

    #[error("Archive unreadable: {path}: {reason}")]
    #[diagnostic(
        code(scheme_editor::search::archive_unreadable),
        help("The package archive is corrupt or not a zip file; reinstall the package")
    )]
    ArchiveUnreadable { path: String, reason: String },

    #[error("Invalid search pattern '{pattern}': {reason}")]
    #[diagnostic(
        code(scheme_editor::search::pattern_invalid),
        help("Glob patterns support *, ? and [...]; regex patterns use Rust regex syntax")
    )]
    PatternInvalid { pattern: String, reason: String },

    #[error("Invalid search state: {message}")]
    #[diagnostic(code(scheme_editor::search::invalid_state))]
    InvalidState { message: String },

    // Resource errors
    #[error("Resource not found: {path}")]
    #[diagnostic(
        code(scheme_editor::fs::resource_not_found),
        help("Resource paths look like Packages/<Package>/<file>")
    )]
    ResourceNotFound { path: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(scheme_editor::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(scheme_editor::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // Command line errors
    #[error("Unsupported shell: {shell}")]
    #[diagnostic(
        code(scheme_editor::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(scheme_editor::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<zip::result::ZipError> for AppError {
    fn from(err: zip::result::ZipError) -> Self {
        AppError::ArchiveUnreadable {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for AppError {
    fn from(err: inquire::InquireError) -> Self {
        AppError::IoError {
            message: err.to_string(),
        }
    }
}

impl AppError {
    /// Whether a search can carry on after this error
    ///
    /// Recoverable errors are reported as diagnostics of a listing rather
    /// than aborting it.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::SourceUnavailable { .. } | AppError::ArchiveUnreadable { .. }
        )
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AppError>;
