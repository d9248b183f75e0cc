//! Cross-platform path utilities for Scheme Editor
//!
//! Resource paths are always forward-slash strings so that results look the
//! same whether they came from a loose directory or a zip archive.

use std::path::Path;

/// Whether package names and resource paths compare case-insensitively
///
/// Matches the default filesystem behavior of each platform.
pub const CASE_INSENSITIVE_FS: bool = cfg!(any(windows, target_os = "macos"));

/// Convert a path to a string with forward slashes
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use scheme_editor::path_utils::to_forward_slashes;
///
/// assert_eq!(to_forward_slashes(Path::new("Foo/themes/a.tmTheme")), "Foo/themes/a.tmTheme");
/// ```
pub fn to_forward_slashes(path: &Path) -> String {
    normalize_separators(&path.to_string_lossy())
}

/// Replace backslashes with forward slashes
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Strip a leading root component and any separators that follow it
///
/// The root only matches as a whole component: `PackagesX/a` is returned
/// unchanged apart from leading separators.
///
/// # Examples
///
/// ```
/// use scheme_editor::path_utils::strip_root;
///
/// assert_eq!(strip_root("Packages/Foo/a.tmTheme", "Packages"), "Foo/a.tmTheme");
/// assert_eq!(strip_root("/Foo/a.tmTheme", "Packages"), "Foo/a.tmTheme");
/// ```
pub fn strip_root<'a>(path: &'a str, root: &str) -> &'a str {
    let rest = match path.strip_prefix(root) {
        Some(rest) if rest.is_empty() || rest.starts_with(['/', '\\']) => rest,
        _ => path,
    };
    rest.trim_start_matches(['/', '\\'])
}

/// Fold a name for comparison on the current platform
pub fn fold_case(name: &str) -> String {
    if CASE_INSENSITIVE_FS {
        name.to_lowercase()
    } else {
        name.to_string()
    }
}

/// Logical package name of an archive file, if it has the given extension
///
/// The extension comparison is case-insensitive on every platform.
pub fn archive_package_name(path: &Path, extension: &str) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    if !ext.eq_ignore_ascii_case(extension) {
        return None;
    }
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
}
