//! Files and directories skipped when walking loose packages

use std::ffi::OsStr;
use wax::{CandidatePath, Glob, Pattern};

/// Version control, OS metadata and bytecode cache names
const EXCLUDED_NAMES: &[&str] = &[
    // version control
    ".git",
    ".svn",
    ".hg",
    ".bzr",
    "_darcs",
    "CVS",
    // OS metadata
    ".DS_Store",
    "._*",
    "Thumbs.db",
    "desktop.ini",
    // bytecode caches
    "__pycache__",
    "*.py[co]",
];

/// Fixed exclusion pattern applied to each path component during a walk
///
/// An excluded directory is pruned with everything below it.
pub struct ExclusionSet {
    globs: Vec<Glob<'static>>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        let globs = EXCLUDED_NAMES
            .iter()
            .filter_map(|pattern| Glob::new(*pattern).ok())
            .collect();
        Self { globs }
    }

    /// Whether a single file or directory name is excluded
    pub fn is_excluded(&self, name: &OsStr) -> bool {
        let name = name.to_string_lossy();
        let candidate = CandidatePath::from(name.as_ref());
        self.globs
            .iter()
            .any(|glob| glob.matched(&candidate).is_some())
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::new()
    }
}
