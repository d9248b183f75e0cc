//! Host resource resolution
//!
//! The search engine does not decide which copy of a resource is active; it
//! asks a [`ResourceResolver`], the editor's own lookup. [`FsResolver`] is
//! the stand-alone implementation used when no editor is around: it applies
//! the editor's override rule to the package roots on disk.

use std::fs;
use std::path::{Component, Path};

use crate::archive::{self, ARCHIVE_EXTENSION};
use crate::config::PackageRoots;
use crate::domain::{ResourceEntry, VIRTUAL_ROOT};
use crate::error::{Result, resource_not_found};
use crate::index::PackageIndex;
use crate::matcher::PathMatcher;
use crate::path_utils::strip_root;

/// The host's resource lookup
pub trait ResourceResolver {
    /// Active resources whose path matches a glob, already deduplicated
    ///
    /// Paths start with the virtual root (`Packages/...`). `"*"` lists
    /// everything.
    fn find_resources(&self, pattern: &str) -> Result<Vec<ResourceEntry>>;
}

/// Resolver over package roots on disk
#[derive(Debug, Clone)]
pub struct FsResolver {
    roots: PackageRoots,
}

impl FsResolver {
    pub fn new(roots: PackageRoots) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &PackageRoots {
        &self.roots
    }

    /// Read the active copy of a resource
    ///
    /// Looks for the loose file first, then the installed archive, then the
    /// default archive unless an installed archive of the same package exists.
    pub fn load_resource(&self, path: &str) -> Result<Vec<u8>> {
        let (package, inner) = split_resource_path(path).ok_or_else(|| resource_not_found(path))?;

        if let Some(user) = &self.roots.user {
            let file = user.join(package).join(inner);
            if file.is_file() {
                tracing::debug!(path, file = %file.display(), "loading loose resource");
                return Ok(fs::read(&file)?);
            }
        }

        let archive_name = format!("{package}.{ARCHIVE_EXTENSION}");
        let installed = self
            .roots
            .installed
            .as_ref()
            .map(|root| root.join(&archive_name))
            .filter(|p| p.is_file());
        let default = self
            .roots
            .default
            .as_ref()
            .map(|root| root.join(&archive_name))
            .filter(|p| p.is_file());

        // An installed archive replaces the default one entirely
        let candidate = installed.or(default);
        if let Some(archive_path) = candidate {
            match archive::read_entry(&archive_path, inner) {
                Ok(Some(contents)) => {
                    tracing::debug!(path, archive = %archive_path.display(), "loading archived resource");
                    return Ok(contents);
                }
                Ok(None) => {}
                Err(err) => tracing::warn!(path, error = %err, "could not read archive"),
            }
        }

        Err(resource_not_found(path))
    }
}

impl ResourceResolver for FsResolver {
    fn find_resources(&self, pattern: &str) -> Result<Vec<ResourceEntry>> {
        let matcher = PathMatcher::glob(pattern)?;
        let listing = PackageIndex::new(&self.roots).collect_raw();
        let effective = listing
            .effective_entries()
            .into_iter()
            .filter(|entry| !entry.path.ends_with('/'));
        Ok(matcher.filter(effective))
    }
}

/// Split `Packages/<package>/<inner>` into package and inner path
///
/// Paths that climb out of their package are rejected.
fn split_resource_path(path: &str) -> Option<(&str, &str)> {
    let (package, inner) = strip_root(path, VIRTUAL_ROOT).split_once('/')?;
    if package.is_empty() || inner.is_empty() {
        return None;
    }
    let escapes = Path::new(inner)
        .components()
        .any(|c| !matches!(c, Component::Normal(_)));
    if escapes {
        return None;
    }
    Some((package, inner))
}
