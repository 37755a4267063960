//! Accumulated tag context threaded through the traversal.
//!
//! The context is the union of every ancestor declaration's tags plus the
//! structural sentinels, carried explicitly down each recursive call so
//! sibling subtrees never observe each other's accumulation. Merging
//! preserves first-seen order and removes duplicates, keeping skip
//! decisions deterministic regardless of how a suite repeats its tags.

/// Sentinel recording that the context descended into a tagged container.
///
/// Structural marker, never produced by tag extraction. A filter set that
/// names it literally will match it.
pub const IN_DESCRIBE: &str = "__inDescribe";

/// Sentinel recording that the context descended into a test case.
///
/// Structural marker, never produced by tag extraction. A filter set that
/// names it literally will match it.
pub const IN_IT: &str = "__inIt";

/// Ordered, deduplicated set of tags accumulated from the root to the
/// current node, including any structural sentinels pushed on the way down.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagContext {
    entries: Vec<String>,
}

impl TagContext {
    /// The empty context used at the tree root.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Union of this context and `tags`, preserving first-seen order and
    /// dropping duplicates.
    #[must_use]
    pub fn merge(&self, tags: &[String]) -> Self {
        let mut entries = self.entries.clone();
        for tag in tags {
            if !entries.iter().any(|existing| existing == tag) {
                entries.push(tag.clone());
            }
        }
        Self { entries }
    }

    /// [`merge`](Self::merge) plus the structural sentinel for the scope
    /// being entered.
    #[must_use]
    pub fn descend(&self, tags: &[String], sentinel: &str) -> Self {
        let mut merged = self.merge(tags);
        if !merged.contains(sentinel) {
            merged.entries.push(sentinel.to_owned());
        }
        merged
    }

    /// Whether the context holds `tag`.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.entries.iter().any(|entry| entry == tag)
    }

    /// Entries in accumulation order, sentinels included.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::{IN_DESCRIBE, IN_IT, TagContext};

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn merge_preserves_order_and_drops_duplicates() {
        let ctx = TagContext::new().merge(&tags(&["fast", "slow"]));
        let merged = ctx.merge(&tags(&["fast", "web", "slow"]));
        let collected: Vec<_> = merged.iter().collect();
        assert_eq!(collected, vec!["fast", "slow", "web"]);
    }

    #[test]
    fn descend_appends_the_sentinel_once() {
        let ctx = TagContext::new().descend(&tags(&["smoke"]), IN_DESCRIBE);
        let nested = ctx.descend(&tags(&["wip"]), IN_DESCRIBE);
        let collected: Vec<_> = nested.iter().collect();
        assert_eq!(collected, vec!["smoke", IN_DESCRIBE, "wip"]);
    }

    #[test]
    fn sentinels_are_ordinary_entries_for_lookup() {
        let ctx = TagContext::new().descend(&[], IN_IT);
        assert!(ctx.contains(IN_IT));
        assert!(!ctx.contains(IN_DESCRIBE));
    }
}
