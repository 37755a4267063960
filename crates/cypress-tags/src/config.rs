//! Filter configuration resolved from the environment or a mapping.
//!
//! The two tag sets are resolved once per compilation unit and stay
//! constant for the whole traversal. Resolution goes through an injectable
//! lookup so tests can supply a configuration mapping without mutating
//! process state.

/// Environment key naming the tags a declaration must carry to survive.
pub const INCLUDE_TAGS_VAR: &str = "CYPRESS_INCLUDE_TAGS";

/// Environment key naming the tags that disqualify a declaration.
pub const EXCLUDE_TAGS_VAR: &str = "CYPRESS_EXCLUDE_TAGS";

/// The include and exclude tag sets controlling a traversal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Tags to include; empty means every tagged declaration qualifies.
    pub include_tags: Vec<String>,
    /// Tags to exclude; empty means nothing is disqualified.
    pub exclude_tags: Vec<String>,
}

impl FilterConfig {
    /// Resolve both tag sets from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve both tag sets through `lookup`, which maps a recognized key
    /// to its raw comma-delimited value. Missing keys yield empty sets.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map_or_else(Vec::new, |raw| parse_tag_list(&raw));
        Self {
            include_tags: read(INCLUDE_TAGS_VAR),
            exclude_tags: read(EXCLUDE_TAGS_VAR),
        }
    }
}

/// Split a comma-delimited tag list, trimming entries, dropping blanks, and
/// removing duplicates while preserving first-seen order.
#[must_use]
pub fn parse_tag_list(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for entry in raw.split(',') {
        let trimmed = entry.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !tags.iter().any(|existing| existing == trimmed) {
            tags.push(trimmed.to_owned());
        }
    }
    tags
}
