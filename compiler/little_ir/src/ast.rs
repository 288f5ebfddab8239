//! Syntax tree produced by the reader.
//!
//! The tree is immutable once built. Every node owns its children and its
//! span. The one exception to exclusive ownership is the body of a quoted
//! form, which lives behind an `Rc` so that deferred values and closures can
//! outlive the tree they were read from.

use std::fmt;
use std::rc::Rc;

use crate::Span;

/// A terminal value written directly in source.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Nil,
    /// `:name`, evaluates to the string `name`.
    Symbol(String),
}

/// The closed set of node shapes.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Literal(Literal),
    /// A name resolved against the environment.
    Identifier(String),
    /// `(f a b ...)` - function application.
    Expression(Vec<Node>),
    /// `[a b ...]` - list literal.
    Vector(Vec<Node>),
    /// `{k1 v1 k2 v2 ...}` - map literal; the reader guarantees an even child count.
    Map(Vec<Node>),
    /// Sequence of top-level forms.
    Block(Vec<Node>),
    /// `'form` - not evaluated until explicitly executed.
    Quoted(Rc<Node>),
}

/// A syntax node tagged with the source text it was read from.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

impl Node {
    #[inline]
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Node { kind, span }
    }

    /// Children of a compound node; empty for terminals and quoted forms.
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Expression(children)
            | NodeKind::Vector(children)
            | NodeKind::Map(children)
            | NodeKind::Block(children) => children,
            NodeKind::Literal(_) | NodeKind::Identifier(_) | NodeKind::Quoted(_) => &[],
        }
    }

    /// The identifier name, if this node is an identifier.
    pub fn as_identifier(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Identifier(name) => Some(name),
            _ => None,
        }
    }

    /// Short description of the node shape, for error messages.
    pub fn describe(&self) -> &'static str {
        match &self.kind {
            NodeKind::Literal(Literal::Int(_)) => "integer",
            NodeKind::Literal(Literal::Float(_)) => "float",
            NodeKind::Literal(Literal::Str(_)) => "string",
            NodeKind::Literal(Literal::Bool(_)) => "boolean",
            NodeKind::Literal(Literal::Nil) => "nil",
            NodeKind::Literal(Literal::Symbol(_)) => "symbol",
            NodeKind::Identifier(_) => "identifier",
            NodeKind::Expression(_) => "expression",
            NodeKind::Vector(_) => "vector",
            NodeKind::Map(_) => "map",
            NodeKind::Block(_) => "block",
            NodeKind::Quoted(_) => "quoted form",
        }
    }
}

/// Drops nested forms from an explicit work list so that dropping a tree
/// never recurses once per nesting level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = take_children(&mut self.kind);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut take_children(&mut node.kind));
        }
    }
}

/// Detach the children `kind` owns, leaving it childless. A quoted body is
/// only detached when this is its last reference.
fn take_children(kind: &mut NodeKind) -> Vec<Node> {
    match kind {
        NodeKind::Expression(children)
        | NodeKind::Vector(children)
        | NodeKind::Map(children)
        | NodeKind::Block(children) => std::mem::take(children),
        NodeKind::Quoted(inner) => match Rc::get_mut(inner) {
            Some(inner) => {
                let kind = std::mem::replace(&mut inner.kind, NodeKind::Literal(Literal::Nil));
                vec![Node::new(kind, inner.span)]
            }
            None => Vec::new(),
        },
        NodeKind::Literal(_) | NodeKind::Identifier(_) => Vec::new(),
    }
}

/// Displays a string as a literal the reader would accept.
///
/// ```text
/// assert_eq!(Escaped("a\"b").to_string(), r#""a\"b""#);
/// ```
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_escaped(f, self.0)
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}

fn write_seq(f: &mut fmt::Formatter<'_>, nodes: &[Node], sep: &str) -> fmt::Result {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{node}")?;
    }
    Ok(())
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(n) => write!(f, "{n}"),
            Literal::Float(n) => write!(f, "{n:?}"),
            Literal::Str(s) => write_escaped(f, s),
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Nil => f.write_str("nil"),
            Literal::Symbol(s) => write!(f, ":{s}"),
        }
    }
}

/// Renders the node back to reader syntax.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Literal(lit) => write!(f, "{lit}"),
            NodeKind::Identifier(name) => f.write_str(name),
            NodeKind::Expression(children) => {
                f.write_str("(")?;
                write_seq(f, children, " ")?;
                f.write_str(")")
            }
            NodeKind::Vector(children) => {
                f.write_str("[")?;
                write_seq(f, children, " ")?;
                f.write_str("]")
            }
            NodeKind::Map(children) => {
                f.write_str("{")?;
                write_seq(f, children, " ")?;
                f.write_str("}")
            }
            NodeKind::Block(children) => write_seq(f, children, "\n"),
            NodeKind::Quoted(inner) => write!(f, "'{inner}"),
        }
    }
}

#[cfg(test)]
mod tests;
