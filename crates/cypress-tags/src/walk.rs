//! Scope walker, node rewriter, and subtree pruner.
//!
//! A depth-first, pre-order traversal classifies call nodes against the
//! recognized test vocabulary, threads the accumulated tag context from
//! parent to child, strips the tag argument from surviving declarations,
//! and substitutes the empty placeholder for skipped ones. Pruning is a
//! hard cut: a skipped declaration's descendants are never visited,
//! extracted from, or rewritten, so a pruned container's tests cannot
//! re-evaluate inclusion against the global filter on their own.

use log::{debug, trace};

use crate::ast::{CallExpr, MemberExpr, SyntaxNode};
use crate::config::FilterConfig;
use crate::context::{IN_DESCRIBE, IN_IT, TagContext};
use crate::extract::extract_tags;
use crate::filter::should_skip;

const CONTAINER_CALLEES: [&str; 2] = ["describe", "context"];
const TEST_CALLEE: &str = "it";
const MODIFIERS: [&str; 2] = ["only", "skip"];

/// Which of the recognized test-framework functions a call invokes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Declaration {
    /// `describe(...)` or `context(...)`.
    Container,
    /// `it(...)`.
    TestCase,
    /// `it.only(...)` or `it.skip(...)`.
    ModifiedTestCase,
    /// Anything else. Container modifier forms (`describe.only`,
    /// `describe.skip`) land here and pass through with their tag argument
    /// intact while their children are still walked.
    Other,
}

fn classify(call: &CallExpr) -> Declaration {
    match call.callee_name() {
        Some(name) if CONTAINER_CALLEES.contains(&name) => Declaration::Container,
        Some(TEST_CALLEE) => Declaration::TestCase,
        Some(_) => Declaration::Other,
        None => match call.callee_member() {
            Some((TEST_CALLEE, property)) if MODIFIERS.contains(&property) => {
                Declaration::ModifiedTestCase
            }
            _ => Declaration::Other,
        },
    }
}

/// The configured transform: owns the resolved filter sets and applies the
/// filter-and-rewrite traversal to whole trees.
#[derive(Clone, Debug, Default)]
pub struct SuiteFilter {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl SuiteFilter {
    /// Build a filter from a resolved configuration.
    #[must_use]
    pub fn new(config: FilterConfig) -> Self {
        Self {
            include: config.include_tags,
            exclude: config.exclude_tags,
        }
    }

    /// Build a filter from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(FilterConfig::from_env())
    }

    /// Transform a whole tree.
    ///
    /// Deterministic for a given tree and filter configuration; the output
    /// has the same shape as the input apart from stripped tag arguments
    /// and pruned declarations.
    #[must_use]
    pub fn apply(&self, root: SyntaxNode) -> SyntaxNode {
        self.visit(root, &TagContext::new())
    }

    fn visit(&self, node: SyntaxNode, context: &TagContext) -> SyntaxNode {
        match node {
            SyntaxNode::Call(call) => self.visit_call(call, context),
            SyntaxNode::Array(elements) => SyntaxNode::Array(self.visit_all(elements, context)),
            SyntaxNode::Function(body) => SyntaxNode::Function(self.visit_all(body, context)),
            SyntaxNode::Block(statements) => {
                SyntaxNode::Block(self.visit_all(statements, context))
            }
            SyntaxNode::Member(member) => {
                let MemberExpr { object, property } = member;
                SyntaxNode::Member(MemberExpr {
                    object: Box::new(self.visit(*object, context)),
                    property,
                })
            }
            leaf => leaf,
        }
    }

    fn visit_all(&self, nodes: Vec<SyntaxNode>, context: &TagContext) -> Vec<SyntaxNode> {
        nodes
            .into_iter()
            .map(|node| self.visit(node, context))
            .collect()
    }

    fn visit_call(&self, call: CallExpr, context: &TagContext) -> SyntaxNode {
        match classify(&call) {
            Declaration::Container => self.visit_container(call, context),
            Declaration::TestCase => self.visit_test_case(call, context),
            Declaration::ModifiedTestCase => self.visit_modified_test_case(call, context),
            Declaration::Other => self.visit_generic_call(call, context),
        }
    }

    /// A tagged container merges its tags into the context, decides once
    /// for the whole subtree, and recurses only when kept. An untagged
    /// container is an ordinary call, walked under the incoming context.
    fn visit_container(&self, call: CallExpr, context: &TagContext) -> SyntaxNode {
        let Some(tags) = extract_tags(&call.args) else {
            return self.visit_generic_call(call, context);
        };
        let merged = context.descend(&tags, IN_DESCRIBE);
        if self.skips(&merged) {
            return prune(&call, &merged);
        }
        trace!("stripping tag argument from {}", callee_label(&call));
        let stripped = strip_tag_argument(call);
        let args = self.visit_all(stripped.args, &merged);
        SyntaxNode::Call(CallExpr {
            callee: stripped.callee,
            args,
        })
    }

    /// A test case decides with the `__inIt` sentinel pushed and never
    /// recurses: its body holds no further declarations of interest.
    fn visit_test_case(&self, call: CallExpr, context: &TagContext) -> SyntaxNode {
        match extract_tags(&call.args) {
            Some(tags) => {
                let merged = context.descend(&tags, IN_IT);
                if self.skips(&merged) {
                    prune(&call, &merged)
                } else {
                    trace!("stripping tag argument from {}", callee_label(&call));
                    SyntaxNode::Call(strip_tag_argument(call))
                }
            }
            None => {
                let merged = context.descend(&[], IN_IT);
                if self.skips(&merged) {
                    prune(&call, &merged)
                } else {
                    SyntaxNode::Call(call)
                }
            }
        }
    }

    /// A tagged `it.only`/`it.skip` decides against the incoming context
    /// alone: the `__inIt` sentinel is not pushed first. The asymmetry with
    /// the plain `it` path is inherited behaviour, preserved on purpose
    /// (see DESIGN.md). Untagged modifier calls are ordinary calls.
    fn visit_modified_test_case(&self, call: CallExpr, context: &TagContext) -> SyntaxNode {
        let Some(tags) = extract_tags(&call.args) else {
            return self.visit_generic_call(call, context);
        };
        let merged = context.merge(&tags);
        if self.skips(&merged) {
            prune(&call, &merged)
        } else {
            trace!("stripping tag argument from {}", callee_label(&call));
            SyntaxNode::Call(strip_tag_argument(call))
        }
    }

    fn visit_generic_call(&self, call: CallExpr, context: &TagContext) -> SyntaxNode {
        let CallExpr { callee, args } = call;
        SyntaxNode::Call(CallExpr {
            callee: Box::new(self.visit(*callee, context)),
            args: self.visit_all(args, context),
        })
    }

    fn skips(&self, context: &TagContext) -> bool {
        should_skip(context, &self.include, &self.exclude)
    }
}

/// Callee rendering for decision logs.
fn callee_label(call: &CallExpr) -> String {
    match (call.callee_name(), call.callee_member()) {
        (Some(name), _) => name.to_owned(),
        (None, Some((object, property))) => format!("{object}.{property}"),
        _ => String::from("<expression>"),
    }
}

/// Substitute the empty placeholder for a skipped declaration.
fn prune(call: &CallExpr, context: &TagContext) -> SyntaxNode {
    debug!(
        "pruning {} under tag context {:?}",
        callee_label(call),
        context.iter().collect::<Vec<_>>()
    );
    SyntaxNode::Empty
}

/// Rewrite a call without its leading tag argument.
///
/// The callee and every remaining argument carry over unchanged, in order.
/// Only called after extraction consumed the first argument.
fn strip_tag_argument(mut call: CallExpr) -> CallExpr {
    if !call.args.is_empty() {
        call.args.remove(0);
    }
    call
}
