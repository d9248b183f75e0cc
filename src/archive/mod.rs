//! Package archive reader
//!
//! Lists the entries of a zip-format package from its central directory
//! without decompressing anything. Each archive handle is opened, read and
//! dropped inside a single call.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, archive_unreadable};
use crate::path_utils::{archive_package_name, normalize_separators};

/// File extension of archived packages
pub const ARCHIVE_EXTENSION: &str = "sublime-package";

/// Logical package name of an archive: its file name without the extension
pub fn package_name(archive_path: &Path) -> Option<String> {
    archive_package_name(archive_path, ARCHIVE_EXTENSION).or_else(|| {
        archive_path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_string)
    })
}

fn open(archive_path: &Path) -> Result<zip::ZipArchive<File>> {
    let display = archive_path.display().to_string();
    let file = File::open(archive_path).map_err(|e| archive_unreadable(&display, e.to_string()))?;
    zip::ZipArchive::new(file).map_err(|e| archive_unreadable(&display, e.to_string()))
}

/// List entry names of an archive in central-directory order
///
/// Names keep their stored form apart from separators, which are normalized
/// to `/`, and each is prefixed with the package name: `ThemePack/themes/a.tmTheme`.
/// An empty archive yields an empty list; anything that is not a readable
/// zip file is `ArchiveUnreadable`.
pub fn list_entries(archive_path: &Path) -> Result<Vec<String>> {
    let shown = archive_path.display().to_string();
    let package = package_name(archive_path)
        .ok_or_else(|| archive_unreadable(&shown, "archive has no file name"))?;

    let mut archive = open(archive_path)?;
    let mut entries = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let entry = archive
            .by_index_raw(i)
            .map_err(|e| archive_unreadable(&shown, e.to_string()))?;
        entries.push(entry_path(&package, entry.name()));
    }

    tracing::debug!(archive = %archive_path.display(), entries = entries.len(), "listed archive");
    Ok(entries)
}

/// `<package>/<name>` with separators normalized and leading ones dropped
fn entry_path(package: &str, name: &str) -> String {
    format!("{package}/{}", stored_name(name))
}

fn stored_name(name: &str) -> String {
    normalize_separators(name).trim_start_matches('/').to_string()
}

/// Read one entry's contents, addressed by its path inside the package
///
/// Returns `Ok(None)` when the archive is readable but has no such entry.
pub fn read_entry(archive_path: &Path, inner_path: &str) -> Result<Option<Vec<u8>>> {
    let display = archive_path.display().to_string();
    let wanted = stored_name(inner_path);
    let mut archive = open(archive_path)?;

    let mut index = None;
    for i in 0..archive.len() {
        let entry = archive
            .by_index_raw(i)
            .map_err(|e| archive_unreadable(&display, e.to_string()))?;
        if !entry.is_dir() && stored_name(entry.name()) == wanted {
            index = Some(i);
            break;
        }
    }

    let Some(index) = index else {
        return Ok(None);
    };

    let mut entry = archive
        .by_index(index)
        .map_err(|e| archive_unreadable(&display, e.to_string()))?;
    let mut contents = Vec::new();
    entry
        .read_to_end(&mut contents)
        .map_err(|e| archive_unreadable(&display, e.to_string()))?;
    Ok(Some(contents))
}
