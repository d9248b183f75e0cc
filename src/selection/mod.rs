//! Selection controller
//!
//! Drives one pass of enumerate, filter, present and resolve:
//!
//! ```text
//! Idle -> Searching -> Presenting -> Resolved
//!                                 \-> Cancelled
//! ```
//!
//! Override-aware searches ask the host resolver for the active resources.
//! Searches that include shadowed resources walk every package through the
//! [`PackageIndex`] instead.

pub mod hooks;
pub mod presenter;

pub use hooks::SearchHooks;
pub use presenter::{Choice, Presenter};

use crate::config::PackageRoots;
use crate::domain::{ResourceEntry, SearchQuery};
use crate::error::{AppError, Result, invalid_state};
use crate::host::ResourceResolver;
use crate::index::PackageIndex;
use crate::matcher::{PathMatcher, SearchResult};

/// Where the controller is in a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Searching,
    Presenting,
    Resolved,
    Cancelled,
}

impl SearchState {
    /// Whether a new search may start from this state
    pub fn can_start(self) -> bool {
        matches!(
            self,
            SearchState::Idle | SearchState::Resolved | SearchState::Cancelled
        )
    }
}

/// What a finished search produced
#[derive(Debug)]
pub struct SearchOutcome {
    /// `Resolved` or `Cancelled`
    pub state: SearchState,
    /// The picked resource, when resolved
    pub selected: Option<ResourceEntry>,
    /// Everything that was presented
    pub result: SearchResult,
    /// Roots and archives that could not be scanned
    pub diagnostics: Vec<AppError>,
}

/// Package resource search over a host resolver and presenter
pub struct PackageSearch<R, P> {
    roots: PackageRoots,
    resolver: R,
    presenter: P,
    state: SearchState,
}

impl<R: ResourceResolver, P: Presenter> PackageSearch<R, P> {
    pub fn new(roots: PackageRoots, resolver: R, presenter: P) -> Self {
        Self {
            roots,
            resolver,
            presenter,
            state: SearchState::Idle,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Search, present and resolve, from loose arguments
    pub fn search_with<H>(
        &mut self,
        pattern: &str,
        regex: bool,
        find_all: bool,
        hooks: &mut H,
    ) -> Result<SearchOutcome>
    where
        H: SearchHooks + ?Sized,
    {
        let query = SearchQuery::new(pattern)
            .regex(regex)
            .include_shadowed(find_all);
        self.search(query, hooks)
    }

    /// Search, present and resolve
    ///
    /// An invalid pattern fails before anything is enumerated and runs no
    /// hook besides `pre_process`. Otherwise exactly one of
    /// `on_resolve`/`on_cancel` runs, including when the presenter fails.
    pub fn search<H>(&mut self, query: SearchQuery, hooks: &mut H) -> Result<SearchOutcome>
    where
        H: SearchHooks + ?Sized,
    {
        if !self.state.can_start() {
            return Err(invalid_state(format!(
                "cannot start a search while {:?}",
                self.state
            )));
        }

        let query = hooks.pre_process(query);
        let matcher = PathMatcher::compile(&query)?;

        self.state = SearchState::Searching;
        tracing::debug!(
            pattern = query.pattern(),
            regex = query.is_regex(),
            include_shadowed = query.includes_shadowed(),
            "searching packages"
        );
        let (entries, diagnostics) = match self.enumerate(&query, &matcher) {
            Ok(found) => found,
            Err(err) => {
                self.state = SearchState::Idle;
                return Err(err);
            }
        };
        let result = SearchResult::new(entries);

        self.state = SearchState::Presenting;
        let choice = {
            let mut highlight = |index: usize| {
                if let Some(entry) = result.get(index) {
                    hooks.on_highlight(entry);
                }
            };
            let on_highlight: Option<&mut dyn FnMut(usize)> = if query.includes_shadowed() {
                None
            } else {
                Some(&mut highlight as &mut dyn FnMut(usize))
            };
            self.presenter.show_choices(result.rows(), on_highlight)
        };

        let picked = match choice {
            Ok(choice) => choice.index().and_then(|index| {
                let entry = result.get(index).cloned();
                if entry.is_none() {
                    tracing::warn!(index, results = result.len(), "picked index out of range");
                }
                entry
            }),
            Err(err) => {
                self.state = SearchState::Cancelled;
                hooks.on_cancel();
                return Err(err);
            }
        };

        match &picked {
            Some(entry) => {
                self.state = SearchState::Resolved;
                tracing::info!(path = %entry.path, origin = %entry.origin, "resource selected");
                hooks.on_resolve(entry);
            }
            None => {
                self.state = SearchState::Cancelled;
                tracing::info!("selection dismissed");
                hooks.on_cancel();
            }
        }

        Ok(SearchOutcome {
            state: self.state,
            selected: picked,
            result,
            diagnostics,
        })
    }

    /// Candidate entries for a query, already filtered
    pub fn enumerate(
        &self,
        query: &SearchQuery,
        matcher: &PathMatcher,
    ) -> Result<(Vec<ResourceEntry>, Vec<AppError>)> {
        collect_matches(&self.roots, &self.resolver, query, matcher)
    }
}

/// Entries matching a query, with the diagnostics of any raw walk
///
/// Override-aware queries go through the host resolver; a regex asks it
/// for everything and filters locally. Queries that include shadowed
/// resources walk every root with [`PackageIndex`].
pub fn collect_matches<R>(
    roots: &PackageRoots,
    resolver: &R,
    query: &SearchQuery,
    matcher: &PathMatcher,
) -> Result<(Vec<ResourceEntry>, Vec<AppError>)>
where
    R: ResourceResolver + ?Sized,
{
    if query.includes_shadowed() {
        let listing = PackageIndex::new(roots).collect_raw();
        return Ok((matcher.filter(listing.entries), listing.diagnostics));
    }

    let entries = if query.is_regex() {
        matcher.filter(resolver.find_resources("*")?)
    } else {
        resolver.find_resources(query.pattern())?
    };
    Ok((entries, Vec::new()))
}
