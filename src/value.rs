//! Dynamically-typed operands.

use std::fmt;

use itertools::Itertools;

/// A loosely typed argument, accepted by the vector loaders and the operator engine.
///
/// Scalars, sequences and other vectors can all be combined with a vector, so operators take
/// `impl Into<Value>` and the engine decides what to do based on the variant. Most callers never
/// spell out a [`Value`] and rely on the [`From`] impls instead:
///
/// ```
/// # use vectormaster::*;
/// let mut v = Vector3D::new(1.0, 2.0, 3.0);
/// v.add(5)?;                         // integer scalar
/// v.add(0.5)?;                       // real scalar
/// v.add([1, 2, 3])?;                 // sequence
/// v.add(Vector3D::new(1.0, 1.0, 1.0))?; // same-shape vector
/// assert_eq!(v, Vector3D::new(8.5, 10.5, 12.5));
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Real(f64),
    Seq(Vec<Value>),
    /// The fields of a vector, tagged with the name of its shape.
    Vector {
        shape: &'static str,
        elems: Vec<f64>,
    },
    Text(String),
}

impl Value {
    /// Returns the numeric value of a scalar, or `None` for every other variant.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Int(i) => Some(i as f64),
            Value::Real(r) => Some(r),
            _ => None,
        }
    }

    /// A short description of the variant, used in error messages.
    pub fn type_name(&self) -> String {
        match self {
            Value::Int(_) => "integer".into(),
            Value::Real(_) => "real".into(),
            Value::Seq(s) => format!("sequence of length {}", s.len()),
            Value::Vector { shape, .. } => (*shape).into(),
            Value::Text(_) => "text".into(),
        }
    }

    /// Converts a sequence of scalars into `N` numbers.
    ///
    /// Returns `None` if any element is not numeric or the length is wrong.
    pub(crate) fn numbers<const N: usize>(items: &[Value]) -> Option<[f64; N]> {
        if items.len() != N {
            return None;
        }
        let mut out = [0.0; N];
        for (slot, item) in out.iter_mut().zip(items) {
            *slot = item.as_f64()?;
        }
        Some(out)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Real(r) => write!(f, "{r}"),
            Value::Seq(items) => write!(f, "[{}]", items.iter().format(", ")),
            Value::Vector { shape, elems } => write!(f, "{shape}({})", elems.iter().format(", ")),
            Value::Text(s) => write!(f, "{s:?}"),
        }
    }
}

macro_rules! from_int {
    ($($types:ty),+) => {
        $(
            impl From<$types> for Value {
                fn from(value: $types) -> Self {
                    Value::Int(value.into())
                }
            }
        )+
    };
}
from_int!(i8, i16, i32, i64, u8, u16, u32);

/// Integers that may not fit an `i64` become the closest real.
macro_rules! from_wide_int {
    ($($types:ty),+) => {
        $(
            impl From<$types> for Value {
                fn from(value: $types) -> Self {
                    match i64::try_from(value) {
                        Ok(i) => Value::Int(i),
                        Err(_) => Value::Real(value as f64),
                    }
                }
            }
        )+
    };
}
from_wide_int!(u64, usize, isize, i128, u128);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Real(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Seq(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(value: [T; N]) -> Self {
        Value::Seq(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(value: &[T]) -> Self {
        Value::Seq(value.iter().cloned().map(Into::into).collect())
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}
