//! Search query type

/// What to search for and how
///
/// A query is fixed for the duration of one search; hooks that rewrite it
/// return a new value instead of mutating it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pattern: String,
    is_regex: bool,
    include_shadowed: bool,
}

impl SearchQuery {
    /// Glob query over active resources only
    pub fn new(pattern: impl AsRef<str>) -> Self {
        Self {
            pattern: pattern.as_ref().trim().to_string(),
            is_regex: false,
            include_shadowed: false,
        }
    }

    #[must_use]
    pub fn regex(mut self, is_regex: bool) -> Self {
        self.is_regex = is_regex;
        self
    }

    /// Also reveal copies the host would normally shadow
    #[must_use]
    pub fn include_shadowed(mut self, include_shadowed: bool) -> Self {
        self.include_shadowed = include_shadowed;
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_regex(&self) -> bool {
        self.is_regex
    }

    pub fn includes_shadowed(&self) -> bool {
        self.include_shadowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = SearchQuery::new("*.tmTheme");
        assert_eq!(query.pattern(), "*.tmTheme");
        assert!(!query.is_regex());
        assert!(!query.includes_shadowed());
    }

    #[test]
    fn test_pattern_is_trimmed() {
        let query = SearchQuery::new("  *.tmTheme\n");
        assert_eq!(query.pattern(), "*.tmTheme");
    }

    #[test]
    fn test_builder_flags() {
        let query = SearchQuery::new("Packages/.*")
            .regex(true)
            .include_shadowed(true);
        assert!(query.is_regex());
        assert!(query.includes_shadowed());
    }
}
