//! The skip/keep decision rule.

use crate::context::{IN_DESCRIBE, IN_IT, TagContext};

/// Decide whether the declaration carrying `context` is skipped.
///
/// A test case with no tagged container in its ancestry (`__inIt` present,
/// `__inDescribe` absent) is immune to inclusion filtering: include sets
/// scope tagged groups, they do not suppress untagged top-level tests.
/// Exclusion applies regardless of nesting.
pub(crate) fn should_skip(context: &TagContext, include: &[String], exclude: &[String]) -> bool {
    let outside_container = context.contains(IN_IT) && !context.contains(IN_DESCRIBE);
    let included = outside_container
        || include.is_empty()
        || context
            .iter()
            .any(|tag| include.iter().any(|candidate| candidate == tag));
    let excluded = !exclude.is_empty()
        && context
            .iter()
            .any(|tag| exclude.iter().any(|candidate| candidate == tag));
    !(included && !excluded)
}
