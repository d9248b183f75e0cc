//! Common test utilities for Scheme Editor integration tests

#![allow(clippy::expect_used, dead_code)]

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use scheme_editor::PackageRoots;

/// User, installed and default package roots in a temp directory
pub struct TestPackages {
    pub temp: TempDir,
    pub user: PathBuf,
    pub installed: PathBuf,
    pub default: PathBuf,
}

impl TestPackages {
    /// Create the three roots, all empty
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let user = temp.path().join("Packages");
        let installed = temp.path().join("Installed Packages");
        let default = temp.path().join("Default Packages");
        for root in [&user, &installed, &default] {
            fs::create_dir_all(root).expect("Failed to create package root");
        }
        Self {
            temp,
            user,
            installed,
            default,
        }
    }

    pub fn roots(&self) -> PackageRoots {
        PackageRoots::new(
            Some(self.user.clone()),
            Some(self.installed.clone()),
            Some(self.default.clone()),
        )
    }

    /// Write a loose file under `Packages/<path>`
    pub fn write_user_file(&self, path: &str, content: &str) {
        let file_path = self.user.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write `<package>.sublime-package` into the installed root
    pub fn write_installed_archive(&self, package: &str, files: &[(&str, &str)]) -> PathBuf {
        write_archive(&self.installed, package, files)
    }

    /// Write `<package>.sublime-package` into the default root
    pub fn write_default_archive(&self, package: &str, files: &[(&str, &str)]) -> PathBuf {
        write_archive(&self.default, package, files)
    }

    /// Write bytes that are not a zip file where an archive is expected
    pub fn write_corrupt_archive(&self, package: &str) -> PathBuf {
        let path = self.default.join(format!("{package}.sublime-package"));
        fs::write(&path, b"not a zip archive").expect("Failed to write corrupt archive");
        path
    }
}

fn write_archive(root: &std::path::Path, package: &str, files: &[(&str, &str)]) -> PathBuf {
    let path = root.join(format!("{package}.sublime-package"));
    let file = fs::File::create(&path).expect("Failed to create archive");
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default();
    for (name, content) in files {
        zip.start_file(*name, options)
            .expect("Failed to start archive entry");
        zip.write_all(content.as_bytes())
            .expect("Failed to write archive entry");
    }
    zip.finish().expect("Failed to finish archive");
    path
}
