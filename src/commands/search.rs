//! Search command: pick a resource interactively

use scheme_editor::error::Result;
use scheme_editor::{
    FsResolver, PackageRoots, PackageSearch, ResourceEntry, SearchHooks, SearchState, Settings,
};

use crate::cli::SearchArgs;
use crate::ui::format::{diagnostic_line, resolved_line};
use crate::ui::{InquirePresenter, Spinner};

/// Prints the picked resource for the caller to consume
#[derive(Default)]
struct PrintHooks {
    lines: Vec<String>,
}

impl SearchHooks for PrintHooks {
    fn on_highlight(&mut self, resource: &ResourceEntry) {
        tracing::debug!(path = %resource.path, origin = %resource.origin, "highlighted");
    }

    fn on_resolve(&mut self, resource: &ResourceEntry) {
        self.lines.push(resolved_line(resource));
    }

    fn on_cancel(&mut self) {
        self.lines.push("No selection.".to_string());
    }
}

/// Run search command
pub fn run(settings: &Settings, roots: PackageRoots, args: &SearchArgs) -> Result<()> {
    let query = super::query_from(args, settings);
    let presenter = InquirePresenter::new("Select a color scheme")
        .with_spinner(Spinner::start("Scanning packages..."));
    let resolver = FsResolver::new(roots.clone());
    let mut controller = PackageSearch::new(roots, resolver, presenter);

    let mut hooks = PrintHooks::default();
    let outcome = controller.search(query, &mut hooks);

    for line in &hooks.lines {
        println!("{line}");
    }
    let outcome = outcome?;
    for diagnostic in &outcome.diagnostics {
        eprintln!("{}", diagnostic_line(diagnostic));
    }

    tracing::debug!(
        resolved = outcome.state == SearchState::Resolved,
        results = outcome.result.len(),
        "search finished"
    );
    Ok(())
}
