//! Build-time tag filtering for Cypress test suites.
//!
//! Cypress declarations may carry a leading tag argument, either a single
//! string literal or an array of string literals and enum-style member
//! references. The transform walks an already-parsed syntax tree, decides
//! per declaration whether it survives the configured include/exclude tag
//! sets, strips the tag argument from the survivors so the test runner
//! never sees it, and replaces skipped declarations together with their
//! whole subtrees by an empty placeholder. Parsing source text and
//! printing the result stay with the caller; trees cross the process
//! boundary as JSON.
//!
//! # Examples
//!
//! ```
//! use cypress_tags::{FilterConfig, SuiteFilter, SyntaxNode};
//!
//! let suite = SyntaxNode::block(vec![SyntaxNode::call(
//!     SyntaxNode::ident("describe"),
//!     vec![
//!         SyntaxNode::array(vec![SyntaxNode::str("perf")]),
//!         SyntaxNode::str("checkout"),
//!         SyntaxNode::function(vec![]),
//!     ],
//! )]);
//! let filter = SuiteFilter::new(FilterConfig {
//!     include_tags: vec!["smoke".into()],
//!     exclude_tags: vec![],
//! });
//! assert_eq!(filter.apply(suite), SyntaxNode::block(vec![SyntaxNode::Empty]));
//! ```

pub mod ast;
pub mod config;
pub mod context;
mod extract;
mod filter;
pub mod walk;

pub use ast::{CallExpr, MemberExpr, SyntaxNode, TreeError};
pub use config::{EXCLUDE_TAGS_VAR, FilterConfig, INCLUDE_TAGS_VAR, parse_tag_list};
pub use context::{IN_DESCRIBE, IN_IT, TagContext};
pub use walk::SuiteFilter;
