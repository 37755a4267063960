//! Syntax tree model shared by the transform and its external collaborators.
//!
//! The tree is an owned algebraic sum over the node kinds the transform
//! distinguishes. Parsing test source into this shape and rendering the
//! result back to text are the callers' concern; trees cross the process
//! boundary as JSON via [`SyntaxNode::from_json`] and
//! [`SyntaxNode::to_json`]. Constructs the transform never interprets travel
//! as [`SyntaxNode::Verbatim`] leaves and survive untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A node in the source tree.
///
/// Nodes are owned and immutable once built: the transform consumes a tree
/// and produces a replacement rather than mutating in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyntaxNode {
    /// A call expression such as `it(['smoke'], 'title', fn)`.
    Call(CallExpr),
    /// An array literal.
    Array(Vec<SyntaxNode>),
    /// A string literal.
    Str(String),
    /// A template literal.
    Template(String),
    /// A property access such as `Tag.WIP`, or the callee of `it.only(...)`.
    Member(MemberExpr),
    /// A bare identifier.
    Ident(String),
    /// A function or arrow expression; the payload is its body statements.
    Function(Vec<SyntaxNode>),
    /// A statement list: a source file root or any nested block construct.
    Block(Vec<SyntaxNode>),
    /// Any construct the transform does not interpret, preserved verbatim.
    Verbatim(String),
    /// The no-op placeholder substituted for pruned declarations.
    Empty,
}

/// A call expression: a callee plus its ordered arguments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallExpr {
    /// The called expression, typically an identifier or a member access.
    pub callee: Box<SyntaxNode>,
    /// Ordered call arguments.
    pub args: Vec<SyntaxNode>,
}

/// A property access: `object.property`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberExpr {
    /// The accessed object.
    pub object: Box<SyntaxNode>,
    /// The accessed property name.
    pub property: String,
}

/// Failure to move a tree across the JSON interchange boundary.
///
/// The transform itself never fails; decoding a malformed tree is the one
/// precondition error worth naming, and it belongs to the caller feeding
/// this library, not to the traversal.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The input was not a valid JSON encoding of a syntax tree.
    #[error("malformed syntax tree: {0}")]
    Decode(#[source] serde_json::Error),
    /// The tree could not be rendered as JSON.
    #[error("failed to encode syntax tree: {0}")]
    Encode(#[source] serde_json::Error),
}

impl CallExpr {
    /// Construct a call from a callee node and its arguments.
    #[must_use]
    pub fn new(callee: SyntaxNode, args: Vec<SyntaxNode>) -> Self {
        Self {
            callee: Box::new(callee),
            args,
        }
    }

    /// The callee's name when the callee is a bare identifier.
    #[must_use]
    pub fn callee_name(&self) -> Option<&str> {
        match self.callee.as_ref() {
            SyntaxNode::Ident(name) => Some(name),
            _ => None,
        }
    }

    /// The `(object, property)` pair when the callee is `object.property`
    /// with an identifier object, as in `it.only`.
    #[must_use]
    pub fn callee_member(&self) -> Option<(&str, &str)> {
        match self.callee.as_ref() {
            SyntaxNode::Member(member) => match member.object.as_ref() {
                SyntaxNode::Ident(object) => Some((object, &member.property)),
                _ => None,
            },
            _ => None,
        }
    }
}

impl MemberExpr {
    /// Construct a property access from an object node and a property name.
    #[must_use]
    pub fn new(object: SyntaxNode, property: impl Into<String>) -> Self {
        Self {
            object: Box::new(object),
            property: property.into(),
        }
    }
}

impl SyntaxNode {
    /// A call node.
    #[must_use]
    pub fn call(callee: Self, args: Vec<Self>) -> Self {
        Self::Call(CallExpr::new(callee, args))
    }

    /// An array literal node.
    #[must_use]
    pub fn array(elements: Vec<Self>) -> Self {
        Self::Array(elements)
    }

    /// A string literal node.
    #[must_use]
    pub fn str(text: impl Into<String>) -> Self {
        Self::Str(text.into())
    }

    /// A template literal node.
    #[must_use]
    pub fn template(text: impl Into<String>) -> Self {
        Self::Template(text.into())
    }

    /// A property access node.
    #[must_use]
    pub fn member(object: Self, property: impl Into<String>) -> Self {
        Self::Member(MemberExpr::new(object, property))
    }

    /// An identifier node.
    #[must_use]
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    /// A function expression node wrapping its body statements.
    #[must_use]
    pub fn function(body: Vec<Self>) -> Self {
        Self::Function(body)
    }

    /// A statement list node.
    #[must_use]
    pub fn block(statements: Vec<Self>) -> Self {
        Self::Block(statements)
    }

    /// Decode a tree from its JSON encoding.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Decode`] when the input is not a valid encoding.
    pub fn from_json(input: &str) -> Result<Self, TreeError> {
        serde_json::from_str(input).map_err(TreeError::Decode)
    }

    /// Encode the tree as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Encode`] when serialization fails.
    pub fn to_json(&self) -> Result<String, TreeError> {
        serde_json::to_string(self).map_err(TreeError::Encode)
    }
}
