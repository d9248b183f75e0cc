//! Override rule between package sources
//!
//! Two steps, both keyed by platform-folded names:
//! 1. an installed archive hides the default archive of the same package;
//! 2. of the remaining copies of a path, the highest-precedence source wins.

use std::collections::{HashMap, HashSet};

use crate::domain::{PackageDescriptor, PackageSource, ResourceEntry};

/// Default archives replaced wholesale by an installed archive
pub fn shadowed_default_packages(packages: &[PackageDescriptor]) -> HashSet<String> {
    let installed: HashSet<String> = packages
        .iter()
        .filter(|p| p.source == PackageSource::Installed)
        .map(PackageDescriptor::name_key)
        .collect();

    packages
        .iter()
        .filter(|p| p.source == PackageSource::Default)
        .map(PackageDescriptor::name_key)
        .filter(|key| installed.contains(key))
        .collect()
}

/// Deduplicate entries by precedence, keeping discovery order
///
/// Loose packages overlay archives file by file and do not replace them
/// whole: a file that only the default archive of `Foo` carries stays in
/// the result next to the loose files of `Foo`. Only an installed archive
/// replaces a default archive as a whole package.
///
/// `packages` are the descriptors the entries were collected from; they are
/// needed so an installed archive with no entries still hides its default
/// counterpart.
pub fn apply_precedence(
    entries: Vec<ResourceEntry>,
    packages: &[PackageDescriptor],
) -> Vec<ResourceEntry> {
    let shadowed = shadowed_default_packages(packages);
    let is_shadowed = |entry: &ResourceEntry| {
        entry.origin == PackageSource::Default
            && entry
                .package_name()
                .is_some_and(|name| shadowed.contains(&crate::path_utils::fold_case(name)))
    };

    let mut winners: HashMap<String, PackageSource> = HashMap::new();
    for entry in entries.iter().filter(|e| !is_shadowed(e)) {
        winners
            .entry(entry.dedup_key())
            .and_modify(|best| {
                if entry.origin.shadows(*best) {
                    *best = entry.origin;
                }
            })
            .or_insert(entry.origin);
    }

    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| !is_shadowed(entry))
        .filter(|entry| {
            let key = entry.dedup_key();
            winners.get(&key) == Some(&entry.origin) && seen.insert(key)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str, origin: PackageSource) -> ResourceEntry {
        ResourceEntry::new(path, origin)
    }

    #[test]
    fn test_user_file_wins_over_archives() {
        let entries = vec![
            entry("Packages/Foo/a.tmTheme", PackageSource::User),
            entry("Packages/Foo/a.tmTheme", PackageSource::Installed),
            entry("Packages/Foo/a.tmTheme", PackageSource::Default),
        ];
        let kept = apply_precedence(entries, &[]);
        assert_eq!(kept, vec![entry("Packages/Foo/a.tmTheme", PackageSource::User)]);
    }

    #[test]
    fn test_winner_does_not_depend_on_order() {
        let entries = vec![
            entry("Packages/Foo/a.tmTheme", PackageSource::Default),
            entry("Packages/Foo/a.tmTheme", PackageSource::User),
        ];
        let kept = apply_precedence(entries, &[]);
        assert_eq!(kept, vec![entry("Packages/Foo/a.tmTheme", PackageSource::User)]);
    }

    #[test]
    fn test_archive_only_paths_survive_overlay() {
        let entries = vec![
            entry("Packages/Foo/a.tmTheme", PackageSource::User),
            entry("Packages/Foo/a.tmTheme", PackageSource::Default),
            entry("Packages/Foo/b.tmTheme", PackageSource::Default),
        ];
        let kept = apply_precedence(entries, &[]);
        assert_eq!(
            kept,
            vec![
                entry("Packages/Foo/a.tmTheme", PackageSource::User),
                entry("Packages/Foo/b.tmTheme", PackageSource::Default),
            ]
        );
    }

    #[test]
    fn test_installed_archive_hides_default_package() {
        let packages = vec![
            PackageDescriptor::archive("Theme", PackageSource::Installed, "/i/Theme.sublime-package"),
            PackageDescriptor::archive("Theme", PackageSource::Default, "/d/Theme.sublime-package"),
            PackageDescriptor::archive("Other", PackageSource::Default, "/d/Other.sublime-package"),
        ];
        let entries = vec![
            entry("Packages/Theme/new.tmTheme", PackageSource::Installed),
            entry("Packages/Theme/old.tmTheme", PackageSource::Default),
            entry("Packages/Other/x.tmTheme", PackageSource::Default),
        ];
        let kept = apply_precedence(entries, &packages);
        assert_eq!(
            kept,
            vec![
                entry("Packages/Theme/new.tmTheme", PackageSource::Installed),
                entry("Packages/Other/x.tmTheme", PackageSource::Default),
            ]
        );
    }

    #[test]
    fn test_empty_installed_archive_still_hides_default() {
        let packages = vec![
            PackageDescriptor::archive("Theme", PackageSource::Installed, "/i/Theme.sublime-package"),
            PackageDescriptor::archive("Theme", PackageSource::Default, "/d/Theme.sublime-package"),
        ];
        let entries = vec![entry("Packages/Theme/old.tmTheme", PackageSource::Default)];
        assert!(apply_precedence(entries, &packages).is_empty());
    }

    #[test]
    fn test_exact_duplicates_collapse() {
        let entries = vec![
            entry("Packages/Foo/a.tmTheme", PackageSource::User),
            entry("Packages/Foo/a.tmTheme", PackageSource::User),
        ];
        assert_eq!(apply_precedence(entries, &[]).len(), 1);
    }
}
