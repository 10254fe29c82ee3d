mod ops;

use std::f64::consts::PI;

use crate::{master, vector::vector_shape, Mat4, Result};

/// Below this `|cos(pitch)|`, roll and yaw can no longer be told apart.
const GIMBAL_LOCK_EPSILON: f64 = 1.0e-6;

vector_shape! {
    /// A quaternion consisting of 3 imaginary numbers and a real number.
    ///
    /// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space.
    ///
    /// Quaternions are stored like a 4-dimensional vector, with an `x`, `y`, `z` and `w` component.
    /// `x`, `y` and `z` are the `i`, `j` and `k` imaginary parts, `w` is the real part.
    ///
    /// All the elementwise operations of the other vector types are available. Note that the `*`
    /// operator is *not* elementwise: it computes the quaternion product (see
    /// [`Quaternion::product`]), while the [`Quaternion::mul`] method multiplies element by element.
    pub struct Quaternion[4] { x: 0, y: 1, z: 2, w: 3 }
}

impl Default for Quaternion {
    /// Returns [`Quaternion::IDENTITY`].
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that represents no rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a unit quaternion representing a rotation of `radians` around `axis`.
    ///
    /// `axis` is expected to be of unit length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormaster::*;
    /// let q = Quaternion::from_axis_angle(Vector3D::new(0.0, 0.0, 1.0), std::f64::consts::PI);
    /// assert!((q.z() - 1.0).abs() < 1e-12);
    /// assert!(q.w().abs() < 1e-12);
    /// ```
    pub fn from_axis_angle(axis: impl Into<[f64; 3]>, radians: f64) -> Self {
        let [x, y, z] = axis.into();
        let (sin, cos) = (radians / 2.0).sin_cos();
        Self::new(x * sin, y * sin, z * sin, cos)
    }

    /// The imaginary part `(x, y, z)`.
    pub fn imaginary(&self) -> [f64; 3] {
        let [x, y, z, _] = self.elems;
        [x, y, z]
    }

    /// Computes the quaternion product `self * rhs`.
    ///
    /// With `v` the imaginary part and `w` the real part of each operand, the result has the
    /// imaginary part `w1*v2 + w2*v1 + v1 × v2` and the real part `w1*w2 - v1 · v2`.
    ///
    /// Unlike the elementwise operations, this does not modify either operand. The product is not
    /// commutative, and both operands are read throughout the computation. The result uses the
    /// precision of `self`, but is not rounded.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormaster::*;
    /// let i = Quaternion::new(1.0, 0.0, 0.0, 0.0);
    /// let j = Quaternion::new(0.0, 1.0, 0.0, 0.0);
    /// let k = Quaternion::new(0.0, 0.0, 1.0, 0.0);
    /// assert_eq!(i.product(&j), k);
    /// assert_eq!(j.product(&i), -k);
    /// ```
    pub fn product(&self, rhs: &Quaternion) -> Quaternion {
        let (u, w1) = (self.imaginary(), self.w());
        let (v, w2) = (rhs.imaginary(), rhs.w());
        let cross = master::cross_elems(&u, &v);
        let [x, y, z] = std::array::from_fn(|i| w1 * v[i] + w2 * u[i] + cross[i]);
        let w = w1 * w2 - master::dot_elems(&u, &v);
        Self::new(x, y, z, w).with_precision(self.precision)
    }

    /// Returns a normalised copy of `self`, leaving `self` unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`][crate::Error::DivisionByZero] for a zero quaternion.
    pub fn normalised(&self) -> Result<Self> {
        let mut out = *self;
        out.normalise()?;
        Ok(out)
    }

    /// Converts between left- and right-handed coordinates by swapping the Y and Z axes.
    pub fn right_handed(&self) -> Self {
        let [x, y, z, w] = self.elems;
        Self::new(-x, -z, -y, w).with_precision(self.precision)
    }

    /// Builds the 4x4 rotation matrix of this quaternion.
    ///
    /// The quaternion should be of unit length, otherwise the matrix will also scale.
    pub fn rotation_matrix(&self) -> Mat4 {
        let [x, y, z, w] = self.elems;
        rotation_matrix(x, y, z, w)
    }

    /// Builds the rotation matrix for right-handed coordinates, negating `x` and `y`.
    pub fn rotation_matrix_rh(&self) -> Mat4 {
        let [x, y, z, w] = self.elems;
        rotation_matrix(-x, -y, z, w)
    }

    /// Decomposes the rotation into `(roll, pitch, yaw)` angles, in radians.
    ///
    /// Near a pitch of ±90° roll and yaw describe the same rotation (gimbal lock); both are then
    /// shifted by -π.
    #[doc(alias = "euler")]
    pub fn roll_pitch_yaw(&self) -> (f64, f64, f64) {
        let m = self.rotation_matrix();

        let mut roll = m[(0, 1)].atan2(m[(1, 1)]);
        // rounding can push the element slightly outside of asin's domain
        let pitch = (-m[(2, 1)]).clamp(-1.0, 1.0).asin();
        let mut yaw = m[(2, 0)].atan2(m[(2, 2)]);

        if pitch.cos().abs() < GIMBAL_LOCK_EPSILON {
            log::debug!("gimbal lock at pitch {pitch}, adjusting roll {roll} and yaw {yaw}");
            roll -= PI;
            yaw -= PI;
        }

        (roll, pitch, yaw)
    }
}

fn rotation_matrix(x: f64, y: f64, z: f64, w: f64) -> Mat4 {
    let (xx, yy, zz) = (x * x, y * y, z * z);
    let (xy, xz, yz) = (x * y, x * z, y * z);
    let (wx, wy, wz) = (w * x, w * y, w * z);

    #[rustfmt::skip]
    let mat = Mat4::from_rows([
        [1.0 - 2.0 * yy - 2.0 * zz, 2.0 * xy + 2.0 * wz,       2.0 * xz - 2.0 * wy,       0.0],
        [2.0 * xy - 2.0 * wz,       1.0 - 2.0 * xx - 2.0 * zz, 2.0 * yz + 2.0 * wx,       0.0],
        [2.0 * xz + 2.0 * wy,       2.0 * yz - 2.0 * wx,       1.0 - 2.0 * xx - 2.0 * yy, 0.0],
        [0.0,                       0.0,                       0.0,                       1.0],
    ]);
    mat
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{Error, Vector3D};

    fn assert_mat_eq(a: Mat4, b: Mat4) {
        for row in 0..4 {
            for col in 0..4 {
                assert_abs_diff_eq!(a[(row, col)], b[(row, col)], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn defaults() {
        assert_eq!(Quaternion::default(), Quaternion::IDENTITY);
        assert_eq!(
            Quaternion::load(&[]).unwrap(),
            Quaternion::new(0.0, 0.0, 0.0, 0.0)
        );
        assert_mat_eq(Quaternion::IDENTITY.rotation_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn product() {
        let i = Quaternion::new(1.0, 0.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        let minus_one = Quaternion::new(0.0, 0.0, 0.0, -1.0);

        assert_eq!(i * j, k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(i * i, minus_one);
        assert_eq!(i * j * k, minus_one);

        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Quaternion::IDENTITY * q, q);
        assert_eq!(q * Quaternion::IDENTITY, q);
    }

    #[test]
    fn product_does_not_mutate() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(-1.0, 0.5, 2.0, 1.0);
        let _ = a.product(&b);
        assert_eq!(a, Quaternion::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(b, Quaternion::new(-1.0, 0.5, 2.0, 1.0));
        assert_ne!(a * b, b * a);
    }

    #[test]
    fn axis_angle() {
        let q = Quaternion::from_axis_angle(Vector3D::new(0.0, 0.0, 1.0), FRAC_PI_2);
        assert_abs_diff_eq!(q.magnitude(), 1.0, epsilon = 1e-12);

        // a quarter turn around Z maps the X axis onto the Y axis
        let m = q.rotation_matrix();
        assert_mat_eq(
            m,
            Mat4::from_rows([
                [0.0, 1.0, 0.0, 0.0],
                [-1.0, 0.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ]),
        );

        // composing two quarter turns gives a half turn
        let half = Quaternion::from_axis_angle([0.0, 0.0, 1.0], PI);
        let composed = q * q;
        for i in 0..4 {
            assert_abs_diff_eq!(composed[i], half[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn rotation_matrix_is_orthogonal() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0).normalised().unwrap();
        let m = q.rotation_matrix();
        assert_mat_eq(m * m.transpose(), Mat4::IDENTITY);
        let m = q.rotation_matrix_rh();
        assert_mat_eq(m * m.transpose(), Mat4::IDENTITY);
    }

    #[test]
    fn right_handed() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.right_handed(), Quaternion::new(-1.0, -3.0, -2.0, 4.0));
        assert_mat_eq(
            Quaternion::IDENTITY.rotation_matrix_rh(),
            Quaternion::IDENTITY.rotation_matrix(),
        );

        // a third of a turn around (1, 1, 1) cycles the axes
        let q = Quaternion::new(0.5, 0.5, 0.5, 0.5);
        assert_mat_eq(
            q.rotation_matrix(),
            Mat4::from_rows([
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ]),
        );
        assert_mat_eq(
            q.rotation_matrix_rh(),
            Mat4::from_rows([
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, -1.0, 0.0],
                [-1.0, 0.0, 0.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ]),
        );
    }

    #[test]
    fn euler() {
        let (roll, pitch, yaw) = Quaternion::IDENTITY.roll_pitch_yaw();
        assert_abs_diff_eq!(roll, 0.0);
        assert_abs_diff_eq!(pitch, 0.0);
        assert_abs_diff_eq!(yaw, 0.0);

        let q = Quaternion::from_axis_angle([0.0, 0.0, 1.0], FRAC_PI_2);
        let (roll, pitch, yaw) = q.roll_pitch_yaw();
        assert_abs_diff_eq!(roll, FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(pitch, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(yaw, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn euler_gimbal_lock() {
        // a quarter turn around X puts the pitch at -90°
        let q = Quaternion::from_axis_angle([1.0, 0.0, 0.0], FRAC_PI_2);
        let m = q.rotation_matrix();
        let (roll, pitch, yaw) = q.roll_pitch_yaw();
        assert_abs_diff_eq!(pitch.abs(), FRAC_PI_2, epsilon = 1e-6);
        assert_abs_diff_eq!(roll, m[(0, 1)].atan2(m[(1, 1)]) - PI, epsilon = 1e-12);
        assert_abs_diff_eq!(yaw, m[(2, 0)].atan2(m[(2, 2)]) - PI, epsilon = 1e-12);
    }

    #[test]
    fn normalised() {
        let q = Quaternion::new(0.0, 0.0, 3.0, 4.0);
        let n = q.normalised().unwrap();
        assert_eq!(q, Quaternion::new(0.0, 0.0, 3.0, 4.0));
        assert_abs_diff_eq!(n.magnitude(), 1.0, epsilon = 1e-12);
        assert_eq!(
            Quaternion::new(0.0, 0.0, 0.0, 0.0).normalised(),
            Err(Error::DivisionByZero)
        );
    }
}
