//! Caller hooks for a search

use crate::domain::{ResourceEntry, SearchQuery};

/// Behavior a command plugs into [`PackageSearch`](super::PackageSearch)
///
/// Exactly one of `on_resolve` and `on_cancel` runs per completed search.
pub trait SearchHooks {
    /// Adjust the query before anything is enumerated
    fn pre_process(&mut self, query: SearchQuery) -> SearchQuery {
        query
    }

    /// A row was highlighted (override-aware searches only)
    fn on_highlight(&mut self, _resource: &ResourceEntry) {}

    /// The user picked a resource
    fn on_resolve(&mut self, resource: &ResourceEntry);

    /// The user dismissed the list
    fn on_cancel(&mut self) {}
}
