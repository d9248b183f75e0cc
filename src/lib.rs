//! Scheme Editor - color scheme resource search
//!
//! Finds color scheme files across an editor's package sources, whether a
//! package is a loose directory or a zip archive, and hands the picked
//! resource to a caller-supplied handler.
//!
//! The pieces, leaf first:
//! - [`archive`]: lists zip package entries without extracting them
//! - [`index`]: enumerates resources across the user, installed and default roots
//! - [`matcher`]: glob/regex filtering and display rows
//! - [`selection`]: the search → present → resolve controller
//! - [`host`]: the host's resource lookup, with a filesystem implementation

pub mod archive;
pub mod config;
pub mod domain;
pub mod error;
pub mod host;
pub mod index;
pub mod matcher;
pub mod path_utils;
pub mod selection;

pub use config::{PackageRoots, Settings};
pub use domain::{DisplayRow, PackageDescriptor, PackageKind, PackageSource, ResourceEntry, SearchQuery};
pub use error::{AppError, Result};
pub use host::{FsResolver, ResourceResolver};
pub use index::PackageIndex;
pub use matcher::{PathMatcher, SearchResult};
pub use selection::{
    Choice, PackageSearch, Presenter, SearchHooks, SearchOutcome, SearchState, collect_matches,
};
