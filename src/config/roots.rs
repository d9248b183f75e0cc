//! Package root configuration
//!
//! The host owns these paths; the search engine only reads them.

use normpath::PathExt;
use std::path::{Path, PathBuf};

use super::Settings;
use crate::domain::PackageSource;

/// Roots explicitly given on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct RootOverrides {
    pub packages: Option<PathBuf>,
    pub installed_packages: Option<PathBuf>,
    pub default_packages: Option<PathBuf>,
}

/// Locations of the three package sources
///
/// A `None` root is skipped without a diagnostic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageRoots {
    /// Loose package directories
    pub user: Option<PathBuf>,
    /// Vendor-installed archives
    pub installed: Option<PathBuf>,
    /// Archives shipped with the editor
    pub default: Option<PathBuf>,
}

impl PackageRoots {
    pub fn new(
        user: Option<PathBuf>,
        installed: Option<PathBuf>,
        default: Option<PathBuf>,
    ) -> Self {
        Self {
            user,
            installed,
            default,
        }
    }

    /// Resolve roots with precedence: overrides, settings file, platform default
    pub fn resolve(overrides: RootOverrides, settings: &Settings) -> Self {
        let data_dir = editor_data_dir();

        let user = overrides
            .packages
            .or_else(|| settings.packages_path.clone())
            .or_else(|| data_dir.as_ref().map(|d| d.join("Packages")));
        let installed = overrides
            .installed_packages
            .or_else(|| settings.installed_packages_path.clone())
            .or_else(|| data_dir.as_ref().map(|d| d.join("Installed Packages")));
        let default = overrides
            .default_packages
            .or_else(|| settings.default_packages_path.clone());

        Self {
            user: user.map(|p| normalize_root(&p)),
            installed: installed.map(|p| normalize_root(&p)),
            default: default.map(|p| normalize_root(&p)),
        }
    }

    /// Root for a source category
    pub fn get(&self, source: PackageSource) -> Option<&Path> {
        match source {
            PackageSource::User => self.user.as_deref(),
            PackageSource::Installed => self.installed.as_deref(),
            PackageSource::Default => self.default.as_deref(),
        }
    }
}

/// The editor's data directory under the user's config directory
fn editor_data_dir() -> Option<PathBuf> {
    let name = if cfg!(any(windows, target_os = "macos")) {
        "Sublime Text"
    } else {
        "sublime-text"
    };
    dirs::config_dir().map(|dir| dir.join(name))
}

/// Normalize an existing root; paths that do not exist are kept as given
fn normalize_root(path: &Path) -> PathBuf {
    path.normalize()
        .map(|norm| norm.as_path().to_path_buf())
        .unwrap_or_else(|_| path.to_path_buf())
}
