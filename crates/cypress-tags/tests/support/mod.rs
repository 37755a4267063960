//! Shared tree builders for the behaviour suites.

use cypress_tags::{FilterConfig, SuiteFilter, SyntaxNode};

/// A filter over explicit include/exclude sets.
pub fn filter(include: &[&str], exclude: &[&str]) -> SuiteFilter {
    SuiteFilter::new(FilterConfig {
        include_tags: include.iter().map(ToString::to_string).collect(),
        exclude_tags: exclude.iter().map(ToString::to_string).collect(),
    })
}

/// An array-literal tag argument.
pub fn tag_array(tags: &[&str]) -> SyntaxNode {
    SyntaxNode::array(tags.iter().map(|tag| SyntaxNode::str(*tag)).collect())
}

/// A callback body holding `statements`.
pub fn body(statements: Vec<SyntaxNode>) -> SyntaxNode {
    SyntaxNode::function(statements)
}

/// `describe([tags], title, () => { statements })`.
pub fn describe(tags: &[&str], title: &str, statements: Vec<SyntaxNode>) -> SyntaxNode {
    SyntaxNode::call(
        SyntaxNode::ident("describe"),
        vec![tag_array(tags), SyntaxNode::str(title), body(statements)],
    )
}

/// `describe(title, () => { statements })` with no tag argument.
pub fn plain_describe(title: &str, statements: Vec<SyntaxNode>) -> SyntaxNode {
    SyntaxNode::call(
        SyntaxNode::ident("describe"),
        vec![SyntaxNode::str(title), body(statements)],
    )
}

/// `it([tags], title, () => {})`.
pub fn it(tags: &[&str], title: &str) -> SyntaxNode {
    SyntaxNode::call(
        SyntaxNode::ident("it"),
        vec![tag_array(tags), SyntaxNode::str(title), body(Vec::new())],
    )
}

/// `it(title, () => {})` with no tag argument.
pub fn plain_it(title: &str) -> SyntaxNode {
    SyntaxNode::call(
        SyntaxNode::ident("it"),
        vec![SyntaxNode::str(title), body(Vec::new())],
    )
}

/// `it.only([tags], title, () => {})` or `it.skip(...)`.
pub fn it_modifier(modifier: &str, tags: &[&str], title: &str) -> SyntaxNode {
    SyntaxNode::call(
        SyntaxNode::member(SyntaxNode::ident("it"), modifier),
        vec![tag_array(tags), SyntaxNode::str(title), body(Vec::new())],
    )
}
