//! Recursive descent reader for Little.
//!
//! Turns source text into a [`little_ir::Node`] tree in a single forward pass
//! with one character of lookahead. The whole source becomes one
//! [`NodeKind::Block`](little_ir::NodeKind::Block); reading stops at the first
//! error.
//!
//! ```text
//! let block = little_parse::parse("(print \"hi\") [1 2 3]")?;
//! ```

mod cursor;
mod error;
mod parser;

pub use cursor::Cursor;
pub use error::{SyntaxError, SyntaxErrorKind};
pub use parser::{parse, Parser};
