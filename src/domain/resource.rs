//! Resource domain types

use super::PackageSource;

/// Virtual root every resource path starts with
pub const VIRTUAL_ROOT: &str = "Packages";

/// One resource found in a package
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceEntry {
    /// Forward-slash path under the virtual root, e.g. `Packages/Foo/themes/dark.tmTheme`
    pub path: String,

    /// Source category that produced the entry
    pub origin: PackageSource,
}

impl ResourceEntry {
    pub fn new(path: impl Into<String>, origin: PackageSource) -> Self {
        Self {
            path: path.into(),
            origin,
        }
    }

    /// Build an entry from a package name and a path inside that package
    pub fn in_package(package: &str, inner: &str, origin: PackageSource) -> Self {
        let inner = crate::path_utils::normalize_separators(inner);
        Self::new(
            format!("{VIRTUAL_ROOT}/{package}/{}", inner.trim_start_matches('/')),
            origin,
        )
    }

    /// Path relative to the virtual root (`Foo/themes/dark.tmTheme`)
    pub fn relative_path(&self) -> &str {
        crate::path_utils::strip_root(&self.path, VIRTUAL_ROOT)
    }

    /// Name of the package the entry belongs to
    pub fn package_name(&self) -> Option<&str> {
        self.relative_path()
            .split('/')
            .next()
            .filter(|name| !name.is_empty())
    }

    /// Key under which two entries count as the same resource
    pub fn dedup_key(&self) -> String {
        crate::path_utils::fold_case(self.relative_path())
    }
}

/// A two-part display record: relative path and origin label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub label: String,
    pub origin: PackageSource,
}

impl DisplayRow {
    pub fn from_entry(entry: &ResourceEntry) -> Self {
        Self {
            label: entry.relative_path().to_string(),
            origin: entry.origin,
        }
    }

    /// `[relative_path, origin_label]`
    pub fn parts(&self) -> [&str; 2] {
        [self.label.as_str(), self.origin.label()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_package_normalizes_separators() {
        let entry = ResourceEntry::in_package("Foo", "themes\\dark.tmTheme", PackageSource::User);
        assert_eq!(entry.path, "Packages/Foo/themes/dark.tmTheme");
        assert_eq!(entry.relative_path(), "Foo/themes/dark.tmTheme");
        assert_eq!(entry.package_name(), Some("Foo"));
    }

    #[test]
    fn test_in_package_strips_leading_slash() {
        let entry = ResourceEntry::in_package("Foo", "/a.tmTheme", PackageSource::Default);
        assert_eq!(entry.path, "Packages/Foo/a.tmTheme");
    }

    #[test]
    fn test_display_row_parts() {
        let entry = ResourceEntry::new("Packages/Foo/a.tmTheme", PackageSource::Installed);
        let row = DisplayRow::from_entry(&entry);
        assert_eq!(row.parts(), ["Foo/a.tmTheme", "Installed"]);
    }

    #[test]
    fn test_dedup_key_ignores_origin() {
        let a = ResourceEntry::new("Packages/Foo/a.tmTheme", PackageSource::User);
        let b = ResourceEntry::new("Packages/Foo/a.tmTheme", PackageSource::Default);
        assert_eq!(a.dedup_key(), b.dedup_key());
    }
}
