use thiserror::Error;

/// Errors returned by vector construction and the operator engine.
///
/// Operations fail before touching any field, so a vector is unchanged after an `Err`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The loader received something other than 0 or `expected` scalars.
    #[error("expected {expected} numeric values (or one sequence of {expected}), got {received}")]
    Argument { expected: usize, received: String },

    /// An elementwise operation was given a sequence of the wrong length.
    #[error("sequence length {found} does not match vector arity {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    /// A geometric operation requires both operands to be the same shape.
    #[error("{op} expects two {expected} operands, found {found}")]
    TypeMismatch {
        op: &'static str,
        expected: &'static str,
        found: String,
    },

    /// The right-hand side of an arithmetic operator is not a scalar, sequence or same-shape vector.
    #[error("unsupported operand for `{op}`: {found}")]
    UnsupportedOperand { op: &'static str, found: String },

    /// Division by zero, or normalisation of a zero-length vector.
    #[error("division by zero")]
    DivisionByZero,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
