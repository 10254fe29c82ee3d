//! Implementations of `std` traits shared by every vector type.

/// Implements indexing, comparison, negation, iteration, conversions and formatting for a type
/// declared with `vector_shape!`.
macro_rules! impl_ops {
    ($name:ident, $n:literal) => {
        impl ::std::ops::Index<usize> for $name {
            type Output = f64;

            #[inline]
            fn index(&self, index: usize) -> &f64 {
                &self.elems[index]
            }
        }

        // Only the fields take part; two vectors with different precisions can be equal.
        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.elems == other.elems
            }
        }

        /// Element-wise negation, returning a new vector.
        impl ::std::ops::Neg for $name {
            type Output = Self;

            fn neg(mut self) -> Self {
                $crate::master::negate::<Self, $n>(&mut self);
                self
            }
        }

        impl IntoIterator for $name {
            type Item = f64;
            type IntoIter = ::std::array::IntoIter<f64, $n>;

            fn into_iter(self) -> Self::IntoIter {
                self.elems.into_iter()
            }
        }

        impl From<[f64; $n]> for $name {
            fn from(elems: [f64; $n]) -> Self {
                <Self as $crate::VectorShape<$n>>::from_elems(elems, $crate::Precision::DEFAULT)
            }
        }

        impl From<$name> for [f64; $n] {
            fn from(value: $name) -> Self {
                value.elems
            }
        }

        impl From<$name> for $crate::Value {
            fn from(value: $name) -> Self {
                <$name as $crate::VectorShape<$n>>::to_value(&value)
            }
        }

        impl From<&$name> for $crate::Value {
            fn from(value: &$name) -> Self {
                <$name as $crate::VectorShape<$n>>::to_value(value)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut tup = f.debug_tuple(stringify!($name));
                for elem in &self.elems {
                    tup.field(elem);
                }
                tup.finish()
            }
        }

        /// Formats the vector as `X: 1, Y: 2`.
        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                use ::itertools::Itertools;

                let fields = self.named().format_with(", ", |(name, value), f| {
                    f(&format_args!("{}: {}", name.to_uppercase(), value))
                });
                write!(f, "{fields}")
            }
        }
    };
}
pub(crate) use impl_ops;
