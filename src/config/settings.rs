//! Settings file loading
//!
//! Settings are JSON with `//` and `/* */` comments, the format the editor
//! itself uses for its `.sublime-settings` files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, config_parse_failed, config_read_failed};

/// Pattern used when neither the command line nor the settings name one
pub const DEFAULT_PATTERN: &str = "*.tmTheme";

/// File name of the settings file under the config directory
pub const SETTINGS_FILE: &str = "settings.jsonc";

/// User settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Loose packages directory
    pub packages_path: Option<PathBuf>,
    /// Installed archives directory
    pub installed_packages_path: Option<PathBuf>,
    /// Default archives directory
    pub default_packages_path: Option<PathBuf>,
    /// Search pattern
    pub pattern: Option<String>,
    /// Treat the pattern as a regular expression
    pub regex: bool,
    /// Include resources the editor would shadow
    pub find_all: bool,
}

impl Settings {
    /// Default settings file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("scheme-editor").join(SETTINGS_FILE))
    }

    /// Load settings
    ///
    /// An explicit path must exist. Without one the default location is
    /// tried, and a missing default file yields default settings.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Load settings from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| config_read_failed(path.display().to_string(), e.to_string()))?;
        let settings = Self::parse(&content, &path.display().to_string())?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Parse settings content; `origin` names the file in errors
    pub fn parse(content: &str, origin: &str) -> Result<Self> {
        let json = strip_jsonc_comments(content);
        serde_json::from_str(&json).map_err(|e| config_parse_failed(origin, e.to_string()))
    }

    /// Configured pattern, or the default
    pub fn pattern(&self) -> &str {
        self.pattern.as_deref().unwrap_or(DEFAULT_PATTERN)
    }
}

/// Strip JSONC comments from content
///
/// Line comments keep their terminating newline so error positions still
/// point at the right line.
pub fn strip_jsonc_comments(content: &str) -> String {
    let mut result = String::with_capacity(content.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut in_single_comment = false;
    let mut in_multi_comment = false;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_single_comment {
            if c == '\n' {
                in_single_comment = false;
                result.push(c);
            }
        } else if in_multi_comment {
            if c == '*' && chars.peek() == Some(&'/') {
                in_multi_comment = false;
                chars.next();
            } else if c == '\n' {
                result.push(c);
            }
        } else if in_string {
            result.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else {
            match (c, chars.peek()) {
                ('/', Some('/')) => {
                    in_single_comment = true;
                    chars.next();
                }
                ('/', Some('*')) => {
                    in_multi_comment = true;
                    chars.next();
                }
                ('"', _) => {
                    in_string = true;
                    result.push(c);
                }
                _ => result.push(c),
            }
        }
    }

    result
}
