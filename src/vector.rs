use crate::{master, Result, Value};

mod ops;
mod subdivide;

pub(crate) use ops::impl_ops;
pub use subdivide::{Direction, Subdivision};

/// Declares a vector type with named `f64` fields, backed by the [`master`] engine.
///
/// The generated type stores its fields as an array in declaration order, plus the
/// [`Precision`][crate::Precision] it was built with, and implements
/// [`VectorShape`][crate::VectorShape] so all arithmetic and geometry is shared.
macro_rules! vector_shape {
    (
        $(#[$attr:meta])*
        pub struct $name:ident[$n:literal] { $($field:ident: $index:literal),+ $(,)? }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy)]
        pub struct $name {
            elems: [f64; $n],
            precision: $crate::Precision,
        }

        impl $crate::VectorShape<$n> for $name {
            const NAME: &'static str = stringify!($name);
            const FIELDS: [&'static str; $n] = [$(stringify!($field)),+];

            fn from_elems(elems: [f64; $n], precision: $crate::Precision) -> Self {
                Self { elems, precision }
            }

            fn elems(&self) -> &[f64; $n] {
                &self.elems
            }

            fn elems_mut(&mut self) -> &mut [f64; $n] {
                &mut self.elems
            }

            fn precision(&self) -> $crate::Precision {
                self.precision
            }
        }

        impl $name {
            #[doc = concat!("Creates a [`", stringify!($name), "`] from its fields, using the default precision.")]
            pub const fn new($($field: f64),+) -> Self {
                Self {
                    elems: [$($field),+],
                    precision: $crate::Precision::DEFAULT,
                }
            }

            #[doc = concat!("Builds a [`", stringify!($name), "`] from a loosely typed argument list.")]
            ///
            /// Accepts no arguments (every field is zero), one scalar per field, or a single
            /// sequence with one scalar per field. Integers and reals may be mixed freely.
            ///
            /// # Errors
            ///
            /// Returns [`Error::Argument`][crate::Error::Argument] for any other argument list.
            pub fn load(args: &[$crate::Value]) -> $crate::Result<Self> {
                $crate::master::load(args, $crate::Precision::DEFAULT)
            }

            /// Returns a copy of `self` that rounds arithmetic results to `precision`.
            pub fn with_precision(self, precision: $crate::Precision) -> Self {
                Self { precision, ..self }
            }

            /// The precision arithmetic results are rounded to.
            pub fn precision(&self) -> $crate::Precision {
                self.precision
            }

            $(
                pub fn $field(&self) -> f64 {
                    self.elems[$index]
                }
            )+

            /// Adds `other` to `self` in place and returns the new field values.
            ///
            /// `other` may be a vector of the same type, a scalar, or a sequence with one scalar
            /// per field.
            pub fn add(&mut self, other: impl Into<$crate::Value>) -> $crate::Result<[f64; $n]> {
                $crate::master::apply(self, other, $crate::Op::Add)
            }

            /// Subtracts `other` from `self` in place and returns the new field values.
            pub fn sub(&mut self, other: impl Into<$crate::Value>) -> $crate::Result<[f64; $n]> {
                $crate::master::apply(self, other, $crate::Op::Sub)
            }

            /// Multiplies `self` by `other`, element by element, in place.
            pub fn mul(&mut self, other: impl Into<$crate::Value>) -> $crate::Result<[f64; $n]> {
                $crate::master::apply(self, other, $crate::Op::Mul)
            }

            /// Divides `self` by `other`, element by element, in place.
            ///
            /// Dividing by zero is an [`Error::DivisionByZero`][crate::Error::DivisionByZero]
            /// and leaves `self` unchanged.
            pub fn div(&mut self, other: impl Into<$crate::Value>) -> $crate::Result<[f64; $n]> {
                $crate::master::apply(self, other, $crate::Op::Div)
            }

            /// Applies `op` with `other` to `self` in place.
            pub fn apply(
                &mut self,
                other: impl Into<$crate::Value>,
                op: $crate::Op,
            ) -> $crate::Result<[f64; $n]> {
                $crate::master::apply(self, other, op)
            }

            /// Like [`Self::apply`], but returns the result as a new vector and leaves `self` alone.
            pub fn applied(
                &self,
                other: impl Into<$crate::Value>,
                op: $crate::Op,
            ) -> $crate::Result<Self> {
                let mut out = *self;
                $crate::master::apply(&mut out, other, op)?;
                Ok(out)
            }

            /// Negates every field in place.
            pub fn negate(&mut self) -> [f64; $n] {
                $crate::master::negate(self)
            }

            /// Computes the dot product with another vector of the same type.
            pub fn dot(&self, other: impl Into<$crate::Value>) -> $crate::Result<f64> {
                $crate::master::dot::<Self, $n>(self, other)
            }

            /// Scales `self` to unit length in place. The result is not rounded.
            pub fn normalise(&mut self) -> $crate::Result<[f64; $n]> {
                $crate::master::normalise(self)
            }

            /// Exact, field-by-field comparison with another vector of the same type.
            pub fn equals(&self, other: impl Into<$crate::Value>) -> $crate::Result<bool> {
                $crate::master::equals::<Self, $n>(self, other)
            }

            pub fn not_equals(&self, other: impl Into<$crate::Value>) -> $crate::Result<bool> {
                self.equals(other).map(|eq| !eq)
            }

            pub fn magnitude_squared(&self) -> f64 {
                $crate::master::dot_elems(&self.elems, &self.elems)
            }

            #[doc(alias = "length")]
            pub fn magnitude(&self) -> f64 {
                self.magnitude_squared().sqrt()
            }

            #[inline]
            pub fn to_array(&self) -> [f64; $n] {
                self.elems
            }

            pub fn to_vec(&self) -> Vec<f64> {
                self.elems.to_vec()
            }

            /// Returns `(field name, value)` pairs in declaration order.
            pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> {
                <Self as $crate::VectorShape<$n>>::FIELDS
                    .into_iter()
                    .zip(self.elems)
            }

            /// Returns the fields as a map keyed by field name.
            pub fn to_map(&self) -> ::std::collections::HashMap<&'static str, f64> {
                self.named().collect()
            }

            /// Returns the field at `index`, or `None` if it is out of range.
            pub fn get(&self, index: usize) -> Option<f64> {
                self.elems.get(index).copied()
            }

            /// Iterates over the field values in declaration order.
            pub fn iter(&self) -> ::std::array::IntoIter<f64, $n> {
                self.elems.into_iter()
            }
        }

        $crate::vector::impl_ops!($name, $n);
    };
}
pub(crate) use vector_shape;

vector_shape! {
    /// A 2D vector, for working with planar coordinates or UV values.
    pub struct Vector2D[2] { x: 0, y: 1 }
}

vector_shape! {
    /// A 3D vector, such as a vertex position or a normal direction.
    pub struct Vector3D[3] { x: 0, y: 1, z: 2 }
}

vector_shape! {
    /// A color with red, green and blue channels.
    ///
    /// Channels are plain `f64`s and are not clamped to any range.
    pub struct VectorRGB[3] { r: 0, g: 1, b: 2 }
}

vector_shape! {
    /// A 4D vector, such as a homogeneous vertex coordinate.
    pub struct Vector4D[4] { x: 0, y: 1, z: 2, w: 3 }
}

impl Default for Vector2D {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Default for Vector3D {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl Default for VectorRGB {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl Default for Vector4D {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

impl Vector3D {
    /// Replaces `self` with the cross product `self × other`, and returns the new fields.
    ///
    /// The result is perpendicular to both inputs. Its direction depends on the order of the
    /// operands: swapping them inverts the result. Each component is rounded to the precision of
    /// `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormaster::*;
    /// let mut x = Vector3D::new(1.0, 0.0, 0.0);
    /// x.cross(Vector3D::new(0.0, 1.0, 0.0))?;
    /// assert_eq!(x, Vector3D::new(0.0, 0.0, 1.0));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn cross(&mut self, other: impl Into<Value>) -> Result<[f64; 3]> {
        master::cross(self, other)
    }
}

impl VectorRGB {
    /// Replaces `self` with the cross product of the two colors treated as 3D vectors.
    pub fn cross(&mut self, other: impl Into<Value>) -> Result<[f64; 3]> {
        master::cross(self, other)
    }
}
