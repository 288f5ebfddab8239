//! Runtime values.
//!
//! Heap-backed variants (`Str`, `List`, `Map`) are immutable and shared;
//! cloning a value is always cheap. Build them through the factory methods
//! (`Value::string`, `Value::list`, `Value::map`).

mod heap;
mod map;

use std::fmt;
use std::rc::Rc;

use little_ir::{Escaped, Literal, Node};

use crate::function::{BuiltinFn, BuiltinFunction, FunctionValue, QuotedValue};
use crate::{Closure, Environment};

pub use heap::Heap;
pub use map::MapValue;

/// A Little runtime value.
#[derive(Clone, Default)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    #[default]
    Nil,
    Str(Heap<String>),
    List(Heap<Vec<Value>>),
    Map(Heap<MapValue>),
    Function(FunctionValue),
    /// A deferred form together with the environment it was quoted in.
    Quoted(QuotedValue),
}

impl Value {
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    #[inline]
    pub fn map(map: MapValue) -> Self {
        Value::Map(Heap::new(map))
    }

    pub fn builtin(name: &'static str, func: BuiltinFn) -> Self {
        Value::Function(FunctionValue::Builtin(BuiltinFunction { name, func }))
    }

    pub fn closure(closure: Closure) -> Self {
        Value::Function(FunctionValue::Closure(Rc::new(closure)))
    }

    pub fn quoted(node: Rc<Node>, env: Environment) -> Self {
        Value::Quoted(QuotedValue { node, env })
    }

    /// The value a literal evaluates to. Symbols become strings.
    pub fn from_literal(lit: &Literal) -> Self {
        match lit {
            Literal::Int(n) => Value::Int(*n),
            Literal::Float(n) => Value::Float(*n),
            Literal::Str(s) | Literal::Symbol(s) => Value::string(s.as_str()),
            Literal::Bool(b) => Value::Bool(*b),
            Literal::Nil => Value::Nil,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_quoted(&self) -> Option<&QuotedValue> {
        match self {
            Value::Quoted(q) => Some(q),
            _ => None,
        }
    }

    /// `nil`, `false`, zero, and empty strings and collections are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(n) => *n != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::List(items) => !items.is_empty(),
            Value::Map(map) => !map.is_empty(),
            Value::Function(_) | Value::Quoted(_) => true,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Nil => "nil",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Function(_) => "function",
            Value::Quoted(_) => "quoted",
        }
    }

    /// Display form for user output: strings unquoted, everything else as
    /// [`Display`](fmt::Display) renders it.
    pub fn display_value(&self) -> String {
        match self {
            Value::Str(s) => s.as_str().to_string(),
            other => other.to_string(),
        }
    }
}

#[allow(
    clippy::cast_precision_loss,
    reason = "mixed int/float comparison follows float semantics"
)]
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                *a as f64 == *b
            }
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Nil, Value::Nil) => true,
            (Value::Str(a), Value::Str(b)) => a.as_str() == b.as_str(),
            (Value::List(a), Value::List(b)) => **a == **b,
            (Value::Map(a), Value::Map(b)) => **a == **b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Quoted(a), Value::Quoted(b)) => {
                Rc::ptr_eq(&a.node, &b.node) && a.env.ptr_eq(&b.env)
            }
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}

/// Renders values the way a reader would see them: strings quoted and
/// escaped, lists as `[a, b]`, maps as `{k: v}`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n:?}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Nil => write!(f, "nil"),
            Value::Str(s) => write!(f, "{}", Escaped(s.as_str())),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
            Value::Function(func) => write!(f, "{func}"),
            Value::Quoted(q) => write!(f, "'{}", q.node),
        }
    }
}

/// Never descends into environments; closures and quoted values print their
/// code only.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(n) => write!(f, "Float({n:?})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Nil => write!(f, "Nil"),
            Value::Str(s) => write!(f, "Str({:?})", s.as_str()),
            Value::List(items) => write!(f, "List({:?})", &***items),
            Value::Map(map) => f.debug_map().entries(map.iter()).finish(),
            Value::Function(func) => write!(f, "Function({func})"),
            Value::Quoted(q) => write!(f, "Quoted('{})", q.node),
        }
    }
}
