//! List command: print matching resources without prompting

use scheme_editor::error::Result;
use scheme_editor::matcher::build_rows;
use scheme_editor::{FsResolver, PackageRoots, PathMatcher, Settings, collect_matches};
use std::io::{self, Write};

use crate::cli::SearchArgs;
use crate::ui::Spinner;
use crate::ui::format::{diagnostic_line, list_line};

/// Run list command
pub fn run(settings: &Settings, roots: PackageRoots, args: &SearchArgs) -> Result<()> {
    let query = super::query_from(args, settings);
    let matcher = PathMatcher::compile(&query)?;
    let resolver = FsResolver::new(roots.clone());

    let spinner = Spinner::start("Scanning packages...");
    let (entries, diagnostics) = collect_matches(&roots, &resolver, &query, &matcher)?;
    spinner.finish();

    for diagnostic in &diagnostics {
        eprintln!("{}", diagnostic_line(diagnostic));
    }

    let mut out = io::stdout().lock();
    for row in build_rows(&entries) {
        writeln!(out, "{}", list_line(&row))?;
    }
    tracing::debug!(results = entries.len(), "listed resources");
    Ok(())
}
