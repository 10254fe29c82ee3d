use std::ops::Mul;

use crate::Quaternion;

/// Quaternion product, see [`Quaternion::product`].
impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        self.product(&rhs)
    }
}

impl Mul<&Quaternion> for &Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: &Quaternion) -> Quaternion {
        self.product(rhs)
    }
}
