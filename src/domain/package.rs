//! Package domain types

use std::fmt;
use std::path::PathBuf;

/// Where a package was found
///
/// Variants are declared in precedence order, highest first, so the derived
/// `Ord` ranks `User < Installed < Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PackageSource {
    /// Loose, unpacked, editable packages
    User,
    /// Archives installed by a package manager
    Installed,
    /// Archives bundled with the editor
    Default,
}

impl PackageSource {
    /// All sources, highest precedence first
    pub const ALL: [PackageSource; 3] = [
        PackageSource::User,
        PackageSource::Installed,
        PackageSource::Default,
    ];

    /// Label shown next to a result
    pub fn label(self) -> &'static str {
        match self {
            PackageSource::User => "User",
            PackageSource::Installed => "Installed",
            PackageSource::Default => "Default",
        }
    }

    /// Whether packages in this source are archives rather than directories
    pub fn is_archived(self) -> bool {
        !matches!(self, PackageSource::User)
    }

    /// True when `self` wins over `other` for the same resource
    pub fn shadows(self, other: PackageSource) -> bool {
        self < other
    }
}

impl fmt::Display for PackageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Physical layout of a package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageKind {
    Directory,
    Archive,
}

/// A package discovered under one of the package roots
///
/// Descriptors are rebuilt on every search and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDescriptor {
    /// Logical package name (directory name, or archive file stem)
    pub name: String,

    pub kind: PackageKind,

    pub source: PackageSource,

    /// Absolute path of the directory or archive file
    pub location: PathBuf,
}

impl PackageDescriptor {
    pub fn directory(name: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            kind: PackageKind::Directory,
            source: PackageSource::User,
            location: location.into(),
        }
    }

    pub fn archive(
        name: impl Into<String>,
        source: PackageSource,
        location: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: PackageKind::Archive,
            source,
            location: location.into(),
        }
    }

    /// Name used when comparing packages across sources
    pub fn name_key(&self) -> String {
        crate::path_utils::fold_case(&self.name)
    }
}
