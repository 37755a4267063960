//! Tag extraction from declaration arguments.
//!
//! Extraction is best-effort classification, not validation: an argument
//! shape the transform does not recognise means "no tag argument present",
//! never an error, and unsupported array elements are silently discarded.

use crate::ast::SyntaxNode;

/// Read the tag list carried by a declaration's first argument.
///
/// Returns `None` when the first argument is not tag-bearing: the call is a
/// plain declaration with nothing to strip. A consumed tag argument may
/// still yield zero tags (an empty array, or one holding only unsupported
/// element kinds).
///
/// A string literal first argument counts as a single tag only when the
/// following argument is itself a string or template literal; in the
/// two-argument title+body form the leading literal is the title.
pub(crate) fn extract_tags(args: &[SyntaxNode]) -> Option<Vec<String>> {
    match args.first()? {
        SyntaxNode::Array(elements) => Some(elements.iter().filter_map(element_tag).collect()),
        SyntaxNode::Str(tag) => match args.get(1) {
            Some(SyntaxNode::Str(_) | SyntaxNode::Template(_)) => Some(vec![tag.clone()]),
            _ => None,
        },
        _ => None,
    }
}

/// Tag contributed by a single array element.
///
/// String literals contribute their text; member accesses contribute the
/// accessed property name, so enum-style references such as `Tag.WIP` read
/// as `WIP`. Every other element kind contributes nothing.
fn element_tag(element: &SyntaxNode) -> Option<String> {
    match element {
        SyntaxNode::Str(text) => Some(text.clone()),
        SyntaxNode::Member(member) => Some(member.property.clone()),
        _ => None,
    }
}
