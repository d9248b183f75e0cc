//! Row and diagnostic formatting

use console::Style;
use scheme_editor::{AppError, DisplayRow, ResourceEntry};

/// Spaces between the path and origin columns of a picker row
const COLUMN_GAP: usize = 2;

/// Picker labels with the origin column aligned
///
/// Labels stay free of ANSI codes so that typing in the picker filters on
/// the text the user sees.
pub fn picker_labels(rows: &[DisplayRow]) -> Vec<String> {
    let width = rows
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0);
    rows.iter()
        .map(|row| {
            let [label, origin] = row.parts();
            let pad = width - label.chars().count() + COLUMN_GAP;
            format!("{label}{}{origin}", " ".repeat(pad))
        })
        .collect()
}

/// Machine-readable listing row: `relative_path<TAB>origin`
pub fn list_line(row: &DisplayRow) -> String {
    let [label, origin] = row.parts();
    format!("{label}\t{origin}")
}

/// Machine-readable resolve line: `path<TAB>origin`
pub fn resolved_line(entry: &ResourceEntry) -> String {
    format!("{}\t{}", entry.path, entry.origin)
}

/// One-line warning for a diagnostic collected during a search
pub fn diagnostic_line(diagnostic: &AppError) -> String {
    format!(
        "{} {}",
        Style::new().yellow().bold().apply_to("warning:"),
        diagnostic
    )
}
