//! Package resource index
//!
//! Builds the complete, source-tagged list of resources across the package
//! roots. Packages are discovered fresh on every call:
//!
//! 1. subdirectories of the user root are `Directory` packages (`User`);
//! 2. archives in the installed root are `Archive` packages (`Installed`);
//! 3. archives in the default root are `Archive` packages (`Default`).
//!
//! The raw listing walks every directory package and lists every archive
//! without deduplication. Problems with one root or one archive are recorded
//! as diagnostics and never stop the listing.

pub mod exclude;
pub mod precedence;

pub use exclude::ExclusionSet;
pub use precedence::{apply_precedence, shadowed_default_packages};

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::archive::{self, ARCHIVE_EXTENSION};
use crate::config::PackageRoots;
use crate::domain::{PackageDescriptor, PackageKind, PackageSource, ResourceEntry, VIRTUAL_ROOT};
use crate::error::{AppError, source_unavailable};
use crate::path_utils::{archive_package_name, to_forward_slashes};

/// Packages found under the roots
#[derive(Debug, Default)]
pub struct Discovery {
    pub packages: Vec<PackageDescriptor>,
    pub diagnostics: Vec<AppError>,
}

/// Raw resource listing
#[derive(Debug, Default)]
pub struct IndexListing {
    /// Every resource, user directories first, then installed and default archives
    pub entries: Vec<ResourceEntry>,
    /// Packages the entries were collected from
    pub packages: Vec<PackageDescriptor>,
    /// Roots and archives that could not be scanned
    pub diagnostics: Vec<AppError>,
}

impl IndexListing {
    /// Entries left after applying the override rule
    pub fn effective_entries(&self) -> Vec<ResourceEntry> {
        apply_precedence(self.entries.clone(), &self.packages)
    }
}

/// Index over a set of package roots
pub struct PackageIndex<'a> {
    roots: &'a PackageRoots,
    exclusions: ExclusionSet,
}

impl<'a> PackageIndex<'a> {
    pub fn new(roots: &'a PackageRoots) -> Self {
        Self {
            roots,
            exclusions: ExclusionSet::new(),
        }
    }

    pub fn roots(&self) -> &PackageRoots {
        self.roots
    }

    /// Discover packages in all roots, highest precedence first
    pub fn discover(&self) -> Discovery {
        let mut discovery = Discovery::default();

        for source in PackageSource::ALL {
            let Some(root) = self.roots.get(source) else {
                tracing::debug!(source = %source, "package root not configured");
                continue;
            };

            match discover_in_root(root, source) {
                Ok(mut packages) => {
                    tracing::debug!(
                        source = %source,
                        root = %root.display(),
                        packages = packages.len(),
                        "discovered packages"
                    );
                    discovery.packages.append(&mut packages);
                }
                Err(err) => {
                    tracing::warn!(source = %source, error = %err, "skipping package root");
                    discovery.diagnostics.push(err);
                }
            }
        }

        discovery
    }

    /// List every resource in every package without deduplication
    pub fn collect_raw(&self) -> IndexListing {
        let Discovery {
            packages,
            diagnostics,
        } = self.discover();

        let mut listing = IndexListing {
            entries: Vec::new(),
            packages: Vec::new(),
            diagnostics,
        };

        for package in packages {
            match package.kind {
                PackageKind::Directory => self.walk_directory(&package, &mut listing),
                PackageKind::Archive => list_archive(&package, &mut listing),
            }
            listing.packages.push(package);
        }

        listing
    }

    fn walk_directory(&self, package: &PackageDescriptor, listing: &mut IndexListing) {
        let walker = WalkDir::new(&package.location)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !self.exclusions.is_excluded(e.file_name()));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e
                        .path()
                        .unwrap_or(&package.location)
                        .display()
                        .to_string();
                    let err = source_unavailable(path, e.to_string());
                    tracing::warn!(package = %package.name, error = %err, "walk error");
                    listing.diagnostics.push(err);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let inner = entry
                .path()
                .strip_prefix(&package.location)
                .unwrap_or(entry.path());
            listing.entries.push(ResourceEntry::in_package(
                &package.name,
                &to_forward_slashes(inner),
                package.source,
            ));
        }
    }
}

fn list_archive(package: &PackageDescriptor, listing: &mut IndexListing) {
    match archive::list_entries(&package.location) {
        Ok(mut names) => {
            names.sort();
            listing.entries.extend(
                names
                    .into_iter()
                    .map(|name| ResourceEntry::new(format!("{VIRTUAL_ROOT}/{name}"), package.source)),
            );
        }
        Err(err) => {
            tracing::warn!(package = %package.name, error = %err, "skipping archive");
            listing.diagnostics.push(err);
        }
    }
}

/// Packages directly under one root, sorted by file name
fn discover_in_root(
    root: &Path,
    source: PackageSource,
) -> Result<Vec<PackageDescriptor>, AppError> {
    let display = root.display().to_string();
    if !root.exists() {
        return Err(source_unavailable(display, "directory does not exist"));
    }

    let read_dir = fs::read_dir(root).map_err(|e| source_unavailable(&display, e.to_string()))?;
    let mut paths: Vec<PathBuf> = read_dir
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .collect();
    paths.sort();

    let packages = paths
        .into_iter()
        .filter_map(|path| describe(&path, source))
        .collect();
    Ok(packages)
}

fn describe(path: &Path, source: PackageSource) -> Option<PackageDescriptor> {
    if source.is_archived() {
        if !path.is_file() {
            return None;
        }
        let name = archive_package_name(path, ARCHIVE_EXTENSION)?;
        Some(PackageDescriptor::archive(name, source, path))
    } else {
        if !path.is_dir() {
            return None;
        }
        let name = path.file_name()?.to_str()?.to_string();
        Some(PackageDescriptor::directory(name, path))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    struct Fixture {
        _temp: TempDir,
        roots: PackageRoots,
    }

    impl Fixture {
        fn new() -> Self {
            let temp = TempDir::new().expect("Failed to create temp directory");
            let roots = PackageRoots::new(
                Some(temp.path().join("Packages")),
                Some(temp.path().join("Installed Packages")),
                Some(temp.path().join("Default Packages")),
            );
            for source in PackageSource::ALL {
                fs::create_dir_all(roots.get(source).expect("root"))
                    .expect("Failed to create root");
            }
            Self { _temp: temp, roots }
        }

        fn user_file(&self, rel: &str, contents: &str) {
            let path = self.roots.user.as_ref().expect("user root").join(rel);
            fs::create_dir_all(path.parent().expect("parent")).expect("Failed to create dir");
            fs::write(path, contents).expect("Failed to write file");
        }

        fn archive(&self, source: PackageSource, name: &str, entries: &[&str]) {
            let path = self
                .roots
                .get(source)
                .expect("archive root")
                .join(format!("{name}.{ARCHIVE_EXTENSION}"));
            let file = fs::File::create(path).expect("Failed to create archive");
            let mut zip = zip::ZipWriter::new(file);
            let options = zip::write::SimpleFileOptions::default();
            for entry in entries {
                zip.start_file(*entry, options).expect("Failed to start file");
                zip.write_all(b"x").expect("Failed to write entry");
            }
            zip.finish().expect("Failed to finish archive");
        }
    }

    fn paths(entries: &[ResourceEntry]) -> Vec<(&str, PackageSource)> {
        entries.iter().map(|e| (e.path.as_str(), e.origin)).collect()
    }

    #[test]
    fn test_discover_orders_sources_by_precedence() {
        let fx = Fixture::new();
        fx.user_file("Foo/a.tmTheme", "");
        fx.archive(PackageSource::Default, "Bar", &[]);
        fx.archive(PackageSource::Installed, "Baz", &[]);

        let discovery = PackageIndex::new(&fx.roots).discover();
        let names: Vec<_> = discovery
            .packages
            .iter()
            .map(|p| (p.name.as_str(), p.source))
            .collect();
        assert_eq!(
            names,
            vec![
                ("Foo", PackageSource::User),
                ("Baz", PackageSource::Installed),
                ("Bar", PackageSource::Default),
            ]
        );
        assert!(discovery.diagnostics.is_empty());
    }

    #[test]
    fn test_discover_ignores_stray_files() {
        let fx = Fixture::new();
        fx.user_file("loose.txt", "");
        let installed = fx.roots.installed.as_ref().expect("installed root");
        fs::write(installed.join("notes.zip"), b"").expect("Failed to write file");
        fs::create_dir(installed.join("Dir.sublime-package")).expect("Failed to create dir");

        let discovery = PackageIndex::new(&fx.roots).discover();
        assert!(discovery.packages.is_empty());
    }

    #[test]
    fn test_missing_root_is_a_diagnostic() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let roots = PackageRoots::new(Some(temp.path().join("nope")), None, None);

        let discovery = PackageIndex::new(&roots).discover();
        assert!(discovery.packages.is_empty());
        assert_eq!(discovery.diagnostics.len(), 1);
        assert!(matches!(
            discovery.diagnostics[0],
            AppError::SourceUnavailable { .. }
        ));
    }

    #[test]
    fn test_collect_raw_walks_directories_in_sorted_order() {
        let fx = Fixture::new();
        fx.user_file("Foo/light.tmTheme", "");
        fx.user_file("Foo/dark.tmTheme", "");
        fx.user_file("Foo/themes/extra.tmTheme", "");

        let listing = PackageIndex::new(&fx.roots).collect_raw();
        assert_eq!(
            paths(&listing.entries),
            vec![
                ("Packages/Foo/dark.tmTheme", PackageSource::User),
                ("Packages/Foo/light.tmTheme", PackageSource::User),
                ("Packages/Foo/themes/extra.tmTheme", PackageSource::User),
            ]
        );
    }

    #[test]
    fn test_collect_raw_skips_excluded_names() {
        let fx = Fixture::new();
        fx.user_file("Foo/a.tmTheme", "");
        fx.user_file("Foo/.git/config", "");
        fx.user_file("Foo/__pycache__/plugin.cpython-38.pyc", "");
        fx.user_file("Foo/plugin.pyc", "");
        fx.user_file("Foo/.DS_Store", "");

        let listing = PackageIndex::new(&fx.roots).collect_raw();
        assert_eq!(
            paths(&listing.entries),
            vec![("Packages/Foo/a.tmTheme", PackageSource::User)]
        );
    }

    #[test]
    fn test_collect_raw_directories_before_archives() {
        let fx = Fixture::new();
        fx.archive(PackageSource::Default, "Foo", &["z.tmTheme", "a.tmTheme"]);
        fx.archive(PackageSource::Installed, "Pack", &["b.tmTheme"]);
        fx.user_file("Foo/a.tmTheme", "");

        let listing = PackageIndex::new(&fx.roots).collect_raw();
        assert_eq!(
            paths(&listing.entries),
            vec![
                ("Packages/Foo/a.tmTheme", PackageSource::User),
                ("Packages/Pack/b.tmTheme", PackageSource::Installed),
                ("Packages/Foo/a.tmTheme", PackageSource::Default),
                ("Packages/Foo/z.tmTheme", PackageSource::Default),
            ]
        );
        assert_eq!(listing.packages.len(), 3);
    }

    #[test]
    fn test_corrupt_archive_is_skipped() {
        let fx = Fixture::new();
        fx.archive(PackageSource::Default, "Good", &["a.tmTheme"]);
        let default_root = fx.roots.default.as_ref().expect("default root");
        fs::write(default_root.join("Bad.sublime-package"), b"garbage").expect("write");

        let listing = PackageIndex::new(&fx.roots).collect_raw();
        assert_eq!(
            paths(&listing.entries),
            vec![("Packages/Good/a.tmTheme", PackageSource::Default)]
        );
        assert_eq!(listing.diagnostics.len(), 1);
        assert!(matches!(
            listing.diagnostics[0],
            AppError::ArchiveUnreadable { .. }
        ));
    }

    #[test]
    fn test_empty_directory_contributes_nothing() {
        let fx = Fixture::new();
        let user = fx.roots.user.as_ref().expect("user root");
        fs::create_dir_all(user.join("Empty/nested")).expect("Failed to create dirs");

        let listing = PackageIndex::new(&fx.roots).collect_raw();
        assert!(listing.entries.is_empty());
        assert_eq!(listing.packages.len(), 1);
    }

    #[test]
    fn test_effective_entries_apply_override_rule() {
        let fx = Fixture::new();
        fx.user_file("Foo/a.tmTheme", "");
        fx.archive(PackageSource::Default, "Foo", &["a.tmTheme"]);

        let listing = PackageIndex::new(&fx.roots).collect_raw();
        assert_eq!(listing.entries.len(), 2);
        assert_eq!(
            paths(&listing.effective_entries()),
            vec![("Packages/Foo/a.tmTheme", PackageSource::User)]
        );
    }
}
