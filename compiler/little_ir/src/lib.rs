//! Little IR - syntax tree and source location types.
//!
//! Shared by the reader (`little_parse`), the evaluator (`little_eval`) and the
//! diagnostic layer (`little_diagnostic`).
//!
//! # Contents
//!
//! - [`Position`] / [`Span`]: where a node came from, for error reporting only
//! - [`Node`] / [`NodeKind`] / [`Literal`]: the immutable syntax tree

mod ast;
mod position;

pub use ast::{Escaped, Literal, Node, NodeKind};
pub use position::{Position, Span};
