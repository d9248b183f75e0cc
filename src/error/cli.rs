//! Command line errors

use super::AppError;

/// Creates an unsupported shell error
pub fn unsupported_shell(shell: impl Into<String>) -> AppError {
    AppError::UnsupportedShell {
        shell: shell.into(),
    }
}
