//! Lightweight dynamic values for untyped pipelines.
//!
//! `Scalar` is the tagged union used when a pipeline's elements are not known
//! statically. Typed pipelines (`Queryable<i64>`, `Queryable<String>`, ...)
//! don't need it; they only need `Orderable` for natural ordering.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Bin(Vec<u8>),
}

/// The scalar kinds that have a natural (comparator-free) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderKind {
    Int,
    Text,
    Float,
}

impl std::fmt::Display for OrderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderKind::Int => "int",
            OrderKind::Text => "text",
            OrderKind::Float => "float",
        };
        f.write_str(name)
    }
}

/// Values that can be sorted without a caller-supplied comparator.
///
/// `order_kind` returns `None` for values outside the three natural kinds;
/// `natural_cmp` is only consulted for pairs that share a kind.
pub trait Orderable {
    fn order_kind(&self) -> Option<OrderKind>;
    fn natural_cmp(&self, other: &Self) -> Ordering;
}

impl Scalar {
    /// Short, stable name of the variant (used in error messages).
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "bool",
            Scalar::Int(_) => "int",
            Scalar::Float(_) => "float",
            Scalar::Str(_) => "text",
            Scalar::Bin(_) => "binary",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Convert a JSON value. Integers that fit `i64` become `Int`, other
    /// numbers become `Float`; arrays and objects keep their JSON text.
    pub fn from_json(value: serde_json::Value) -> Scalar {
        use serde_json::Value;

        match value {
            Value::Null => Scalar::Null,
            Value::Bool(b) => Scalar::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Scalar::Int(i),
                None => Scalar::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Scalar::Str(s),
            other @ (Value::Array(_) | Value::Object(_)) => Scalar::Str(other.to_string()),
        }
    }
}

/// Parse a JSON array document into a sequence of scalars.
pub fn scalars_from_json(doc: &str) -> Result<Vec<Scalar>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(doc)?;
    Ok(values.into_iter().map(Scalar::from_json).collect())
}

/// Bit pattern used for float equality/hashing: `-0.0` folds onto `0.0` and
/// every NaN folds onto one canonical NaN, so `Eq` stays reflexive.
fn canonical_bits(f: f64) -> u64 {
    if f.is_nan() {
        f64::NAN.to_bits()
    } else if f == 0.0 {
        0.0f64.to_bits()
    } else {
        f.to_bits()
    }
}

/// Float order used by natural sorting: NaN sorts before every number.
fn float_cmp(x: f64, y: f64) -> Ordering {
    match (x.is_nan(), y.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
    }
}

/// Assign a numeric order to scalar variants for mixed-kind comparisons.
fn scalar_type_order(s: &Scalar) -> u8 {
    use Scalar::*;
    match s {
        Null => 0,
        Bool(_) => 1,
        Int(_) => 2,
        Float(_) => 3,
        Str(_) => 4,
        Bin(_) => 5,
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        use Scalar::*;

        match (self, other) {
            (Null, Null) => true,
            (Bool(x), Bool(y)) => x == y,
            (Int(x), Int(y)) => x == y,
            (Float(x), Float(y)) => canonical_bits(*x) == canonical_bits(*y),
            (Str(x), Str(y)) => x == y,
            (Bin(x), Bin(y)) => x == y,
            _ => false,
        }
    }
}

impl Eq for Scalar {}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Write type discriminant first
        state.write_u8(scalar_type_order(self));

        match self {
            Scalar::Null => {}
            Scalar::Bool(b) => b.hash(state),
            Scalar::Int(i) => i.hash(state),
            Scalar::Float(f) => canonical_bits(*f).hash(state),
            Scalar::Str(s) => s.hash(state),
            Scalar::Bin(b) => b.hash(state),
        }
    }
}

impl Orderable for Scalar {
    fn order_kind(&self) -> Option<OrderKind> {
        match self {
            Scalar::Int(_) => Some(OrderKind::Int),
            Scalar::Str(_) => Some(OrderKind::Text),
            Scalar::Float(_) => Some(OrderKind::Float),
            _ => None,
        }
    }

    fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Scalar::Int(x), Scalar::Int(y)) => x.cmp(y),
            (Scalar::Str(x), Scalar::Str(y)) => x.cmp(y),
            (Scalar::Float(x), Scalar::Float(y)) => float_cmp(*x, *y),
            // Mixed kinds: order by variant order
            _ => scalar_type_order(self).cmp(&scalar_type_order(other)),
        }
    }
}

macro_rules! int_orderable {
    ($($t:ty),*) => {
        $(
            impl Orderable for $t {
                fn order_kind(&self) -> Option<OrderKind> {
                    Some(OrderKind::Int)
                }
                fn natural_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

macro_rules! float_orderable {
    ($($t:ty),*) => {
        $(
            impl Orderable for $t {
                fn order_kind(&self) -> Option<OrderKind> {
                    Some(OrderKind::Float)
                }
                fn natural_cmp(&self, other: &Self) -> Ordering {
                    float_cmp(f64::from(*self), f64::from(*other))
                }
            }
        )*
    };
}

int_orderable!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_orderable!(f32, f64);

impl Orderable for String {
    fn order_kind(&self) -> Option<OrderKind> {
        Some(OrderKind::Text)
    }
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl Orderable for &str {
    fn order_kind(&self) -> Option<OrderKind> {
        Some(OrderKind::Text)
    }
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(v as i64)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Str(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Str(v)
    }
}

impl From<Vec<u8>> for Scalar {
    fn from(v: Vec<u8>) -> Self {
        Scalar::Bin(v)
    }
}
