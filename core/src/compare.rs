//! Typed scalar comparison
//!
//! The renderer evaluates its conditionals (`gt`, `eq`, ...) through these
//! functions. Operands are [`Value`]s; only the scalar kinds are comparable and
//! mixing two different kinds is an error, never a silent `false`.

use thiserror::Error;

/// A complex number operand
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

/// An untyped operand handed to the comparison functions.
///
/// `List` and `Nil` exist so non-scalar template values can be passed through;
/// they are rejected with [`CompareError::InvalidComparisonType`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Complex(Complex),
    Str(String),
    List(Vec<Value>),
    Nil,
}

/// The comparable categories of [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    Int,
    Uint,
    Float,
    Complex,
    Str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompareError {
    /// Operand is not a bool, integer, unsigned integer, float, complex or string
    #[error("invalid type for comparison")]
    InvalidComparisonType,

    /// Operands are comparable kinds, but not the same kind
    #[error("incompatible types for comparison")]
    IncompatibleKinds,

    /// Equality check with nothing to compare against
    #[error("missing argument for comparison")]
    MissingOperand,
}

impl Value {
    /// Classify this operand, failing for non-scalar values
    pub fn kind(&self) -> Result<Kind, CompareError> {
        match self {
            Self::Bool(_) => Ok(Kind::Bool),
            Self::Int(_) => Ok(Kind::Int),
            Self::Uint(_) => Ok(Kind::Uint),
            Self::Float(_) => Ok(Kind::Float),
            Self::Complex(_) => Ok(Kind::Complex),
            Self::Str(_) => Ok(Kind::Str),
            Self::List(_) | Self::Nil => Err(CompareError::InvalidComparisonType),
        }
    }
}

/// Kinds of both operands, which must match.
fn same_kind(a: &Value, b: &Value) -> Result<Kind, CompareError> {
    let k1 = a.kind()?;
    let k2 = b.kind()?;
    if k1 != k2 {
        return Err(CompareError::IncompatibleKinds);
    }
    Ok(k1)
}

/// `a == rest[0] || a == rest[1] || ...`
///
/// Stops at the first match. An element of an incompatible kind is an error even
/// if an earlier element would have matched later in the list.
pub fn equals(a: &Value, rest: &[Value]) -> Result<bool, CompareError> {
    a.kind()?;
    if rest.is_empty() {
        return Err(CompareError::MissingOperand);
    }
    for b in rest {
        same_kind(a, b)?;
        let truth = match (a, b) {
            (Value::Bool(x), Value::Bool(y)) => x == y,
            (Value::Int(x), Value::Int(y)) => x == y,
            (Value::Uint(x), Value::Uint(y)) => x == y,
            (Value::Float(x), Value::Float(y)) => x == y,
            (Value::Complex(x), Value::Complex(y)) => x == y,
            (Value::Str(x), Value::Str(y)) => x == y,
            _ => unreachable!("operand kinds were checked to match"),
        };
        if truth {
            return Ok(true);
        }
    }
    Ok(false)
}

/// `a < b`. Bools and complex numbers have no order.
pub fn less_than(a: &Value, b: &Value) -> Result<bool, CompareError> {
    match same_kind(a, b)? {
        Kind::Bool | Kind::Complex => return Err(CompareError::InvalidComparisonType),
        Kind::Int | Kind::Uint | Kind::Float | Kind::Str => {}
    }
    let truth = match (a, b) {
        (Value::Int(x), Value::Int(y)) => x < y,
        (Value::Uint(x), Value::Uint(y)) => x < y,
        (Value::Float(x), Value::Float(y)) => x < y,
        (Value::Str(x), Value::Str(y)) => x < y,
        _ => unreachable!("operand kinds were checked to match"),
    };
    Ok(truth)
}

/// `a <= b`, as `a < b || a == b`
pub fn less_or_equal(a: &Value, b: &Value) -> Result<bool, CompareError> {
    if less_than(a, b)? {
        return Ok(true);
    }
    equals(a, std::slice::from_ref(b))
}

/// `a > b`, as `!(a <= b)`. Errors pass through unchanged.
pub fn greater_than(a: &Value, b: &Value) -> Result<bool, CompareError> {
    less_or_equal(a, b).map(|le| !le)
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

macro_rules! value_from {
    ($variant:ident as $target:ty: $($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v as $target)
                }
            }
        )+
    };
}

value_from!(Int as i64: i8, i16, i32, i64, isize);
value_from!(Uint as u64: u8, u16, u32, u64, usize);
value_from!(Float as f64: f32, f64);

impl From<Complex> for Value {
    fn from(v: Complex) -> Self {
        Self::Complex(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Nil, Into::into)
    }
}
