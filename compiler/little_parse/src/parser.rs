//! The reader proper.
//!
//! Dispatch happens on the first character of each form:
//!
//! | first char        | form                          |
//! |-------------------|-------------------------------|
//! | digit             | integer or float              |
//! | `"`               | string                        |
//! | `:`               | symbol                        |
//! | `(` `[` `{`       | expression / vector / map     |
//! | `'`               | quoted form                   |
//! | identifier char   | identifier, `nil`, `true`, `false` |
//!
//! Anything else is an [`UnexpectedToken`](SyntaxErrorKind::UnexpectedToken).

use std::rc::Rc;

use little_ir::{Literal, Node, NodeKind, Span};
use little_stack::ensure_sufficient_stack;

use crate::{Cursor, SyntaxError, SyntaxErrorKind};

/// Separators between forms. Commas count as whitespace.
#[inline]
fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n' | ',')
}

#[inline]
fn is_closer(ch: char) -> bool {
    matches!(ch, ')' | ']' | '}')
}

/// Characters that end a number, symbol or identifier.
#[inline]
fn is_end_of_token(ch: char) -> bool {
    is_whitespace(ch) || matches!(ch, '(' | ')' | '[' | ']' | '{' | '}')
}

#[inline]
fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || matches!(
            ch,
            '_' | '-' | '/' | '*' | '+' | '!' | '?' | '$' | ':' | '>' | '<' | '=' | ';'
        )
}

#[derive(Copy, Clone)]
enum Delimiter {
    Paren,
    Bracket,
    Brace,
}

impl Delimiter {
    fn close(self) -> char {
        match self {
            Delimiter::Paren => ')',
            Delimiter::Bracket => ']',
            Delimiter::Brace => '}',
        }
    }

    fn expected(self) -> &'static str {
        match self {
            Delimiter::Paren => "`)`",
            Delimiter::Bracket => "`]`",
            Delimiter::Brace => "`}`",
        }
    }
}

/// Read a whole source into a [`NodeKind::Block`].
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse(source: &str) -> Result<Node, SyntaxError> {
    Parser::new(source).parse_block()
}

/// Reader state: just the cursor.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Parser {
            cursor: Cursor::new(source),
        }
    }

    /// Read forms until end of input.
    pub fn parse_block(mut self) -> Result<Node, SyntaxError> {
        let start = self.cursor.position();
        let mut forms = Vec::new();
        while let Some(form) = self.next_form()? {
            forms.push(form);
        }
        tracing::debug!(forms = forms.len(), "parsed block");
        Ok(Node::new(
            NodeKind::Block(forms),
            self.cursor.span_from(start),
        ))
    }

    /// Read the next top-level form, or `None` once only whitespace remains.
    pub fn next_form(&mut self) -> Result<Option<Node>, SyntaxError> {
        self.skip_whitespace();
        if self.cursor.is_eof() {
            return Ok(None);
        }
        self.form().map(Some)
    }

    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(is_whitespace);
    }

    fn unexpected_here(&self, found: char) -> SyntaxError {
        SyntaxError::new(
            SyntaxErrorKind::UnexpectedToken { found },
            self.cursor.char_span(),
        )
    }

    /// Read one form starting at a non-whitespace character.
    fn form(&mut self) -> Result<Node, SyntaxError> {
        ensure_sufficient_stack(|| {
            let Some(ch) = self.cursor.current() else {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::UnexpectedEof,
                    self.cursor.char_span(),
                ));
            };
            match ch {
                '0'..='9' => self.number(),
                '"' => self.string(),
                ':' => self.symbol(),
                '(' => self.collection(Delimiter::Paren),
                '[' => self.collection(Delimiter::Bracket),
                '{' => self.collection(Delimiter::Brace),
                '\'' => self.quoted(),
                c if is_identifier_char(c) => self.identifier(),
                found => Err(self.unexpected_here(found)),
            }
        })
    }

    fn number(&mut self) -> Result<Node, SyntaxError> {
        let start = self.cursor.position();
        let mut digits = String::new();
        let mut dots = 0usize;

        while let Some(ch) = self.cursor.current() {
            if is_end_of_token(ch) {
                break;
            }
            match ch {
                '0'..='9' => digits.push(ch),
                '.' => {
                    dots += 1;
                    digits.push(ch);
                }
                '_' => {}
                found => return Err(self.unexpected_here(found)),
            }
            self.cursor.advance();
        }

        let span = self.cursor.span_from(start);
        let invalid = || {
            SyntaxError::new(
                SyntaxErrorKind::InvalidNumber {
                    text: self.cursor.slice_from(start).to_string(),
                },
                span,
            )
        };
        let literal = match dots {
            0 => Literal::Int(digits.parse().map_err(|_| invalid())?),
            1 => Literal::Float(digits.parse().map_err(|_| invalid())?),
            _ => return Err(invalid()),
        };
        Ok(Node::new(NodeKind::Literal(literal), span))
    }

    fn string(&mut self) -> Result<Node, SyntaxError> {
        let start = self.cursor.position();
        self.cursor.advance();
        let mut value = String::new();

        loop {
            let ch = match self.cursor.advance() {
                Some('"') => break,
                Some('\\') => match self.cursor.advance() {
                    Some('n') => '\n',
                    Some('t') => '\t',
                    Some('r') => '\r',
                    Some(other) => other,
                    None => return Err(self.unterminated(start)),
                },
                Some(ch) => ch,
                None => return Err(self.unterminated(start)),
            };
            value.push(ch);
        }

        Ok(Node::new(
            NodeKind::Literal(Literal::Str(value)),
            self.cursor.span_from(start),
        ))
    }

    #[cold]
    fn unterminated(&self, start: little_ir::Position) -> SyntaxError {
        SyntaxError::new(SyntaxErrorKind::UnexpectedEof, self.cursor.span_from(start))
    }

    /// Consume an identifier-charset run up to the end of the token.
    fn identifier_run(&mut self) -> Result<&'a str, SyntaxError> {
        let start = self.cursor.position();
        while let Some(ch) = self.cursor.current() {
            if is_end_of_token(ch) {
                break;
            }
            if !is_identifier_char(ch) {
                return Err(self.unexpected_here(ch));
            }
            self.cursor.advance();
        }
        Ok(self.cursor.slice_from(start))
    }

    fn symbol(&mut self) -> Result<Node, SyntaxError> {
        let start = self.cursor.position();
        self.cursor.advance();
        let name = self.identifier_run()?;
        let span = self.cursor.span_from(start);
        if name.is_empty() {
            return Err(SyntaxError::new(
                SyntaxErrorKind::ExpectedToken {
                    expected: "a symbol name after `:`",
                },
                span,
            ));
        }
        Ok(Node::new(
            NodeKind::Literal(Literal::Symbol(name.to_string())),
            span,
        ))
    }

    fn identifier(&mut self) -> Result<Node, SyntaxError> {
        let start = self.cursor.position();
        let name = self.identifier_run()?;
        let kind = match name {
            "nil" => NodeKind::Literal(Literal::Nil),
            "true" => NodeKind::Literal(Literal::Bool(true)),
            "false" => NodeKind::Literal(Literal::Bool(false)),
            _ => NodeKind::Identifier(name.to_string()),
        };
        Ok(Node::new(kind, self.cursor.span_from(start)))
    }

    fn collection(&mut self, delim: Delimiter) -> Result<Node, SyntaxError> {
        let start = self.cursor.position();
        self.cursor.advance();
        let mut children = Vec::new();

        loop {
            self.skip_whitespace();
            match self.cursor.current() {
                None => {
                    return Err(SyntaxError::new(
                        SyntaxErrorKind::ExpectedToken {
                            expected: delim.expected(),
                        },
                        Span::point(self.cursor.position()),
                    ));
                }
                Some(ch) if ch == delim.close() => {
                    self.cursor.advance();
                    break;
                }
                Some(_) => children.push(self.form()?),
            }
        }

        let span = self.cursor.span_from(start);
        let kind = match delim {
            Delimiter::Paren => NodeKind::Expression(children),
            Delimiter::Bracket => NodeKind::Vector(children),
            Delimiter::Brace => {
                if children.len() % 2 != 0 {
                    return Err(SyntaxError::new(SyntaxErrorKind::MissingMapValue, span));
                }
                NodeKind::Map(children)
            }
        };
        Ok(Node::new(kind, span))
    }

    fn quoted(&mut self) -> Result<Node, SyntaxError> {
        let start = self.cursor.position();
        self.cursor.advance();
        match self.cursor.current() {
            Some(ch) if !is_whitespace(ch) && !is_closer(ch) => {
                let inner = self.form()?;
                Ok(Node::new(
                    NodeKind::Quoted(Rc::new(inner)),
                    self.cursor.span_from(start),
                ))
            }
            _ => Err(SyntaxError::new(
                SyntaxErrorKind::ExpectedToken {
                    expected: "a form after `'`",
                },
                self.cursor.char_span(),
            )),
        }
    }
}
