//! Small fixed-dimension vector types sharing a single operator engine.
//!
//! The crate provides [`Vector2D`], [`Vector3D`], [`VectorRGB`], [`Vector4D`] and [`Quaternion`].
//! They all support the same set of operations:
//!
//! - elementwise `add`, `sub`, `mul` and `div` against another vector of the same type, a scalar,
//!   or a sequence with one scalar per field,
//! - negation, dot product, normalisation and exact equality,
//! - cross product on the 3-field types.
//!
//! None of that math lives in the vector types themselves. It is implemented once, in the
//! [`master`] module, against the [`VectorShape`] trait; each type only describes its fields.
//!
//! # Mutation
//!
//! The arithmetic methods update the vector they are called on and return the new field values:
//!
//! ```
//! # use vectormaster::*;
//! let mut a = Vector3D::new(4.5, 3.2, 5.6);
//! let fields = a.add(Vector3D::new(3.0, 5.0, 10.0))?;
//! assert_eq!(fields, [7.5, 8.2, 15.6]);
//! assert_eq!(a, Vector3D::new(7.5, 8.2, 15.6));
//! # Ok::<(), Error>(())
//! ```
//!
//! `applied` and the [`Neg`][std::ops::Neg] impl leave the receiver alone and return a new vector
//! instead. The quaternion product (`*` on [`Quaternion`]) is always non-mutating.
//!
//! # Rounding
//!
//! Every elementwise arithmetic result is rounded to a fixed number of decimal digits (14 by
//! default) to keep floating-point noise out of the fields. The [`Precision`] is chosen when a
//! vector is built and can be disabled with [`Precision::NONE`]. Normalisation is never rounded.
//!
//! # Errors
//!
//! Operations validate their input before writing anything, so a failed operation never leaves a
//! vector half-updated. See [`Error`] for the possible failures.

mod error;
pub mod master;
mod matrix;
mod precision;
mod quat;
mod value;
mod vector;

pub use error::{Error, Result};
pub use master::{Op, VectorShape};
pub use matrix::Mat4;
pub use precision::Precision;
pub use quat::Quaternion;
pub use value::Value;
pub use vector::{Direction, Subdivision, Vector2D, Vector3D, Vector4D, VectorRGB};
