//! Error codes for all Little diagnostics.
//!
//! Each code is a unique identifier (e.g. `E1001`) whose first digit names the
//! phase that raised it.

use std::fmt;

/// Error codes for all Little diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E1xxx: Reader (syntax) errors
/// - E6xxx: Runtime / eval errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Reader Errors (E1xxx)
    /// Unexpected character
    E1001,
    /// Expected token (missing closer, empty symbol, dangling quote)
    E1002,
    /// Invalid number literal
    E1003,
    /// Unexpected end of input
    E1004,
    /// Map literal missing a value
    E1005,

    // Runtime Errors (E6xxx)
    /// Identifier not defined
    E6001,
    /// Name already defined in this scope
    E6002,
    /// Empty expression `()`
    E6003,
    /// Empty block
    E6004,
    /// Value is not callable
    E6005,
    /// Wrong number of arguments
    E6006,
    /// Wrong argument type
    E6007,
    /// Invalid parameter list
    E6008,
    /// Division by zero
    E6009,
    /// Index out of bounds
    E6010,
    /// Map key not found
    E6011,
    /// Maximum call depth exceeded
    E6012,
    /// Map node with an odd number of children
    E6013,
    /// Integer overflow
    E6014,
}

impl ErrorCode {
    /// All error codes, in declaration order.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        ErrorCode::E6005,
        ErrorCode::E6006,
        ErrorCode::E6007,
        ErrorCode::E6008,
        ErrorCode::E6009,
        ErrorCode::E6010,
        ErrorCode::E6011,
        ErrorCode::E6012,
        ErrorCode::E6013,
        ErrorCode::E6014,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6008 => "E6008",
            ErrorCode::E6009 => "E6009",
            ErrorCode::E6010 => "E6010",
            ErrorCode::E6011 => "E6011",
            ErrorCode::E6012 => "E6012",
            ErrorCode::E6013 => "E6013",
            ErrorCode::E6014 => "E6014",
        }
    }

    /// One-paragraph explanation, shown by `little explain`.
    pub fn explanation(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => {
                "The reader found a character that cannot start or continue a token here, \
                 such as a stray `)` or a letter inside a number."
            }
            ErrorCode::E1002 => {
                "The reader expected a specific token. Usually a collection is missing its \
                 closing bracket, a `:` is not followed by a name, or a `'` is not followed \
                 by a form."
            }
            ErrorCode::E1003 => {
                "A number literal has more than one decimal point or does not fit in a \
                 64-bit integer."
            }
            ErrorCode::E1004 => "The input ended inside a string literal.",
            ErrorCode::E1005 => {
                "A map literal `{...}` needs an even number of forms: each key must be \
                 followed by a value."
            }
            ErrorCode::E6001 => {
                "The identifier is not bound in the current scope or any enclosing scope. \
                 Define it with `def` first."
            }
            ErrorCode::E6002 => {
                "A name can be defined once per scope. Use `set!` to change an existing \
                 binding, or define it in a nested scope to shadow it."
            }
            ErrorCode::E6003 => "`()` has no function to call.",
            ErrorCode::E6004 => "A program must contain at least one form.",
            ErrorCode::E6005 => {
                "The first element of an expression must evaluate to a function."
            }
            ErrorCode::E6006 => {
                "The function was called with a different number of arguments than it \
                 declares."
            }
            ErrorCode::E6007 => "A built-in function received a value of the wrong type.",
            ErrorCode::E6008 => {
                "Function parameters must be identifiers, given as `'(a b)`, `'[a b]` or \
                 `[:a :b]`."
            }
            ErrorCode::E6009 => "The divisor of `/` evaluated to zero.",
            ErrorCode::E6010 => "A list index is outside the bounds of the list.",
            ErrorCode::E6011 => "The key is not present in the map.",
            ErrorCode::E6012 => {
                "Calls nested deeper than the interpreter allows. This usually means \
                 unbounded recursion; raise the limit with `--max-depth` if it is intended."
            }
            ErrorCode::E6013 => "A map node had an odd number of children.",
            ErrorCode::E6014 => "Integer arithmetic overflowed 64 bits.",
        }
    }

    /// Check if this is a reader error (E1xxx range).
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001
                | ErrorCode::E1002
                | ErrorCode::E1003
                | ErrorCode::E1004
                | ErrorCode::E1005
        )
    }

    /// Check if this is a runtime error (E6xxx range).
    pub fn is_eval_error(&self) -> bool {
        !self.is_syntax_error()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E6001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
