//! Command implementations for the Scheme Editor CLI

pub mod completions;
pub mod list;
pub mod search;
pub mod show;
pub mod version;

use scheme_editor::{SearchQuery, Settings};

use crate::cli::SearchArgs;

/// Build a query from command arguments, falling back to the settings
///
/// The pattern comes from the arguments if given, else the settings. The
/// regex and find-all flags are on when either side turns them on.
pub fn query_from(args: &SearchArgs, settings: &Settings) -> SearchQuery {
    let pattern = args.pattern.as_deref().unwrap_or_else(|| settings.pattern());
    SearchQuery::new(pattern)
        .regex(args.regex || settings.regex)
        .include_shadowed(args.all || settings.find_all)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pattern: Option<&str>, regex: bool, all: bool) -> SearchArgs {
        SearchArgs {
            pattern: pattern.map(str::to_string),
            regex,
            all,
        }
    }

    #[test]
    fn test_query_defaults_to_tmtheme() {
        let query = query_from(&args(None, false, false), &Settings::default());
        assert_eq!(query.pattern(), "*.tmTheme");
        assert!(!query.is_regex());
        assert!(!query.includes_shadowed());
    }

    #[test]
    fn test_query_prefers_argument_pattern() {
        let settings = Settings {
            pattern: Some("*.sublime-color-scheme".to_string()),
            ..Settings::default()
        };
        let query = query_from(&args(Some("*.hidden-tmTheme"), false, false), &settings);
        assert_eq!(query.pattern(), "*.hidden-tmTheme");

        let query = query_from(&args(None, false, false), &settings);
        assert_eq!(query.pattern(), "*.sublime-color-scheme");
    }

    #[test]
    fn test_query_flags_combine_with_settings() {
        let settings = Settings {
            regex: true,
            ..Settings::default()
        };
        let query = query_from(&args(Some(".*"), false, true), &settings);
        assert!(query.is_regex());
        assert!(query.includes_shadowed());
    }
}
