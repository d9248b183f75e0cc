//! Pattern matching and result building
//!
//! Filters candidate resource paths against a search query and turns the
//! survivors into display rows. Candidate order is preserved; nothing here
//! sorts.

use globset::{GlobBuilder, GlobMatcher};
use regex::{Regex, RegexBuilder};

use crate::domain::{DisplayRow, ResourceEntry, SearchQuery};
use crate::error::{Result, pattern_invalid};

/// A compiled search pattern
#[derive(Debug, Clone)]
pub enum PathMatcher {
    /// Shell glob; `*` also crosses `/`
    Glob(GlobMatcher),
    /// Regular expression anchored at the start of the path
    Regex(Regex),
}

impl PathMatcher {
    /// Compile the pattern of a query
    pub fn compile(query: &SearchQuery) -> Result<Self> {
        if query.is_regex() {
            Self::regex(query.pattern())
        } else {
            Self::glob(query.pattern())
        }
    }

    /// Case-insensitive glob matched against the whole path
    pub fn glob(pattern: &str) -> Result<Self> {
        let glob = GlobBuilder::new(pattern)
            .case_insensitive(true)
            .literal_separator(false)
            .build()
            .map_err(|e| pattern_invalid(pattern, e.to_string()))?;
        Ok(PathMatcher::Glob(glob.compile_matcher()))
    }

    /// Case-insensitive regex that must match at the start of the path
    ///
    /// The match does not have to consume the whole path. The pattern is
    /// checked on its own before it is anchored, so unbalanced groups fail
    /// here instead of pairing up with the anchoring group.
    pub fn regex(pattern: &str) -> Result<Self> {
        let build = |source: &str| {
            RegexBuilder::new(source)
                .case_insensitive(true)
                .build()
                .map_err(|e| pattern_invalid(pattern, e.to_string()))
        };
        build(pattern)?;
        let regex = build(&format!("^(?:{pattern})"))?;
        Ok(PathMatcher::Regex(regex))
    }

    pub fn is_match(&self, path: &str) -> bool {
        match self {
            PathMatcher::Glob(glob) => glob.is_match(path),
            PathMatcher::Regex(regex) => regex.is_match(path),
        }
    }

    /// Keep the entries whose full path matches, in discovery order
    pub fn filter<I>(&self, entries: I) -> Vec<ResourceEntry>
    where
        I: IntoIterator<Item = ResourceEntry>,
    {
        entries
            .into_iter()
            .filter(|entry| self.is_match(&entry.path))
            .collect()
    }
}

/// Entries of one search together with their display rows
///
/// `rows[i]` always describes `entries[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    entries: Vec<ResourceEntry>,
    rows: Vec<DisplayRow>,
}

impl SearchResult {
    pub fn new(entries: Vec<ResourceEntry>) -> Self {
        let rows = build_rows(&entries);
        Self { entries, rows }
    }

    pub fn entries(&self) -> &[ResourceEntry] {
        &self.entries
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&ResourceEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build `[relative_path, origin]` rows for entries
pub fn build_rows(entries: &[ResourceEntry]) -> Vec<DisplayRow> {
    entries.iter().map(DisplayRow::from_entry).collect()
}
