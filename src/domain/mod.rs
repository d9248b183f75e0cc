//! Domain models for Scheme Editor
//!
//! This module contains the plain data objects shared by the search engine:
//! package sources and descriptors, resource entries and search queries.

pub mod package;
pub mod query;
pub mod resource;

pub use package::{PackageDescriptor, PackageKind, PackageSource};
pub use query::SearchQuery;
pub use resource::{DisplayRow, ResourceEntry, VIRTUAL_ROOT};
