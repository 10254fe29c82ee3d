use std::{
    array, fmt,
    ops::{Index, Mul},
};

/// A 4x4 matrix of `f64`, stored row by row.
///
/// This is only as much matrix as the quaternion conversions need; it is not meant as a general
/// linear algebra type.
///
/// # Element Access
///
/// [`Mat4`] implements [`Index`] for tuples of `(usize, usize)`. The first element of the tuple is
/// the *row*, the second is the *column*, matching common mathematical notation. Indices are
/// 0-based.
///
/// ```
/// # use vectormaster::*;
/// let mat = Mat4::IDENTITY;
/// assert_eq!(mat[(0, 0)], 1.0);
/// assert_eq!(mat[(0, 1)], 0.0);
/// assert_eq!(mat.get(4, 0), None);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Mat4([[f64; 4]; 4]);

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    pub const fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        Self(rows)
    }

    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    pub fn rows(&self) -> &[[f64; 4]; 4] {
        &self.0
    }

    pub fn into_rows(self) -> [[f64; 4]; 4] {
        self.0
    }

    /// Returns the element at `row` and `col`, or `None` if either is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.0.get(row)?.get(col).copied()
    }

    /// Swaps the rows and columns of this matrix.
    pub fn transpose(self) -> Self {
        Self::from_fn(|row, col| self.0[col][row])
    }
}

impl Index<(usize, usize)> for Mat4 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.0[row][col]
    }
}

/// Matrix multiplication.
impl Mul for Mat4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_fn(|row, col| (0..4).map(|k| self.0[row][k] * rhs.0[k][col]).sum())
    }
}

impl fmt::Debug for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Writes a row on a single line, even when `{:#?}` is used.
        struct FormatRow<'a>(&'a [f64; 4]);
        impl fmt::Debug for FormatRow<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:?}", self.0)
            }
        }

        let mut list = f.debug_list();
        for row in &self.0 {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}
