//! The shared operator engine.
//!
//! Every vector type in this crate is a thin wrapper around an `[f64; N]` array. The types
//! implement [`VectorShape`] to expose that array, and forward their arithmetic and geometric
//! operations to the free functions in this module. Adding a new vector-like type only requires
//! implementing [`VectorShape`]; none of the math has to be written again.
//!
//! Arithmetic follows a *mutate and report* convention: the receiver's fields are overwritten with
//! the result, and the new field values are returned. All validation happens before the first
//! field is written, so an `Err` always leaves the receiver untouched.

use std::{array, fmt};

use itertools::Itertools;

use crate::{Error, Precision, Result, Value};

/// A fixed-arity aggregate of named `f64` fields.
///
/// `N` is the number of fields; [`VectorShape::FIELDS`] names them in declaration order, which is
/// also the order used for iteration, indexing and elementwise operations.
pub trait VectorShape<const N: usize>: Copy {
    /// Name of the shape. Two vectors are only considered compatible if their names match.
    const NAME: &'static str;
    /// Field names, in order.
    const FIELDS: [&'static str; N];

    fn from_elems(elems: [f64; N], precision: Precision) -> Self;
    fn elems(&self) -> &[f64; N];
    fn elems_mut(&mut self) -> &mut [f64; N];
    fn precision(&self) -> Precision;

    /// Wraps this vector's fields in a [`Value::Vector`] tagged with [`VectorShape::NAME`].
    fn to_value(&self) -> Value {
        Value::Vector {
            shape: Self::NAME,
            elems: self.elems().to_vec(),
        }
    }
}

/// An elementwise arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// The operator's symbol (`+`, `-`, `*` or `/`).
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
        }
    }

    fn eval(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Op::Add => lhs + rhs,
            Op::Sub => lhs - rhs,
            Op::Mul => lhs * rhs,
            Op::Div => lhs / rhs,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Builds a vector from a loosely typed argument list.
///
/// Accepts no arguments (all fields zero), exactly `N` scalars, or a single sequence of exactly
/// `N` scalars. Anything else is an [`Error::Argument`].
pub fn load<S, const N: usize>(args: &[Value], precision: Precision) -> Result<S>
where
    S: VectorShape<N>,
{
    let elems = match args {
        [] => Some([0.0; N]),
        [Value::Seq(items)] => Value::numbers::<N>(items),
        _ => Value::numbers::<N>(args),
    };
    match elems {
        Some(elems) => Ok(S::from_elems(elems, precision)),
        None => Err(Error::Argument {
            expected: N,
            received: format!("({})", args.iter().format(", ")),
        }),
    }
}

/// Combines every field of `vector` with `other` using `op`, rounding each result to the vector's
/// precision.
///
/// `other` may be a vector of the same shape, a scalar, or a sequence of `N` scalars. Returns the
/// updated field values.
pub fn apply<S, const N: usize>(vector: &mut S, other: impl Into<Value>, op: Op) -> Result<[f64; N]>
where
    S: VectorShape<N>,
{
    let other = other.into();
    log::trace!("{} {} {}", S::NAME, op, other.type_name());

    let rhs = operand::<S, N>(&other, op)?;
    if op == Op::Div && rhs.contains(&0.0) {
        return Err(Error::DivisionByZero);
    }

    let lhs = *vector.elems();
    let precision = vector.precision();
    let out = array::from_fn(|i| precision.round(op.eval(lhs[i], rhs[i])));
    *vector.elems_mut() = out;
    Ok(out)
}

/// Resolves the right-hand side of an elementwise operation to `N` numbers.
fn operand<S, const N: usize>(other: &Value, op: Op) -> Result<[f64; N]>
where
    S: VectorShape<N>,
{
    match other {
        Value::Int(i) => Ok([*i as f64; N]),
        Value::Real(r) => Ok([*r; N]),
        Value::Vector { shape, elems } if *shape == S::NAME => {
            elems
                .as_slice()
                .try_into()
                .map_err(|_| Error::DimensionMismatch {
                    expected: N,
                    found: elems.len(),
                })
        }
        Value::Seq(items) if items.len() != N => Err(Error::DimensionMismatch {
            expected: N,
            found: items.len(),
        }),
        Value::Seq(items) => Value::numbers::<N>(items).ok_or_else(|| {
            let bad = items.iter().find(|item| item.as_f64().is_none());
            Error::UnsupportedOperand {
                op: op.symbol(),
                found: format!(
                    "sequence containing {}",
                    bad.map_or_else(|| "non-numbers".into(), Value::type_name)
                ),
            }
        }),
        _ => Err(Error::UnsupportedOperand {
            op: op.symbol(),
            found: other.type_name(),
        }),
    }
}

/// Extracts the fields of `other`, which must be a vector of the same shape as `S`.
fn same_shape<S, const N: usize>(other: &Value, op: &'static str) -> Result<[f64; N]>
where
    S: VectorShape<N>,
{
    if let Value::Vector { shape, elems } = other {
        if *shape == S::NAME {
            if let Ok(elems) = elems.as_slice().try_into() {
                return Ok(elems);
            }
        }
    }
    Err(Error::TypeMismatch {
        op,
        expected: S::NAME,
        found: other.type_name(),
    })
}

/// Negates every field of `vector` in place and returns the new values.
pub fn negate<S, const N: usize>(vector: &mut S) -> [f64; N]
where
    S: VectorShape<N>,
{
    let out = vector.elems().map(|e| -e);
    *vector.elems_mut() = out;
    out
}

/// Computes the dot product of `vector` and `other`, which must have the same shape.
pub fn dot<S, const N: usize>(vector: &S, other: impl Into<Value>) -> Result<f64>
where
    S: VectorShape<N>,
{
    let rhs = same_shape::<S, N>(&other.into(), "dot product")?;
    Ok(dot_elems(vector.elems(), &rhs))
}

pub(crate) fn dot_elems<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    a.iter().zip(b).map(|(a, b)| a * b).sum()
}

pub(crate) fn cross_elems(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    let [a0, a1, a2] = *a;
    let [b0, b1, b2] = *b;

    #[rustfmt::skip]
    let cross = [
        a1 * b2 - a2 * b1,
        a2 * b0 - a0 * b2,
        a0 * b1 - a1 * b0,
    ];
    cross
}

/// Replaces `vector` with its cross product with `other`, rounded to the vector's precision.
///
/// Only defined for 3-field shapes. Swapping the operands inverts the direction of the result.
pub fn cross<S>(vector: &mut S, other: impl Into<Value>) -> Result<[f64; 3]>
where
    S: VectorShape<3>,
{
    let rhs = same_shape::<S, 3>(&other.into(), "cross product")?;
    let precision = vector.precision();
    let out = cross_elems(vector.elems(), &rhs).map(|e| precision.round(e));
    *vector.elems_mut() = out;
    Ok(out)
}

/// Scales `vector` to unit length in place.
///
/// The result is not rounded. Fails with [`Error::DivisionByZero`] for a zero-length vector, which
/// has no direction.
pub fn normalise<S, const N: usize>(vector: &mut S) -> Result<[f64; N]>
where
    S: VectorShape<N>,
{
    let length2 = dot_elems(vector.elems(), vector.elems());
    if length2 == 0.0 {
        return Err(Error::DivisionByZero);
    }
    let scale = 1.0 / length2.sqrt();
    let out = vector.elems().map(|e| e * scale);
    *vector.elems_mut() = out;
    Ok(out)
}

/// Compares `vector` and `other` field by field, without any tolerance.
pub fn equals<S, const N: usize>(vector: &S, other: impl Into<Value>) -> Result<bool>
where
    S: VectorShape<N>,
{
    let rhs = same_shape::<S, N>(&other.into(), "equality")?;
    Ok(*vector.elems() == rhs)
}
