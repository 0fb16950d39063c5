//! Rotation quaternions.
//!
//! A body's spin about its own pole is naturally an axis-angle rotation, so the
//! orientation pipeline builds it as a quaternion, inverts it with
//! [`conjugate`](Quaternion::conjugate), and only then expands it to a matrix with
//! [`RotationMatrix3::from_quaternion`](super::RotationMatrix3::from_quaternion).
//!
//! # Conventions
//!
//! Components are `(x, y, z, w)` with `w` the scalar part. A unit quaternion built
//! by [`from_axis_angle`](Quaternion::from_axis_angle) describes an *active* rotation:
//! positive angles turn vectors counterclockwise when looking down the axis toward
//! the origin. This is the opposite sense to the passive `rotate_*` convention some
//! astronomy libraries use for frame rotations.
//!
//! ```
//! use celestial_core::{Quaternion, Vector3};
//!
//! let q = Quaternion::from_axis_angle(&Vector3::z_axis(), 0.4);
//! let inverse = q.conjugate();
//! let product = q.multiply(&inverse);
//! assert!((product.w - 1.0).abs() < 1e-15);
//! ```

use super::Vector3;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quaternion {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// The zero rotation `(0, 0, 0, 1)`.
    #[inline]
    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Builds the rotation of `angle` radians about `axis`.
    ///
    /// `axis` is assumed to be unit length; it is not normalized here.
    ///
    /// ```
    /// use celestial_core::{Quaternion, Vector3};
    /// use std::f64::consts::PI;
    ///
    /// let q = Quaternion::from_axis_angle(&Vector3::z_axis(), PI);
    /// assert!(q.w.abs() < 1e-15);
    /// assert!((q.z - 1.0).abs() < 1e-15);
    /// ```
    pub fn from_axis_angle(axis: &Vector3, angle: f64) -> Self {
        let (s, c) = libm::sincos(angle / 2.0);
        Self::new(axis.x * s, axis.y * s, axis.z * s, c)
    }

    /// Negates the vector part. For a unit quaternion this is the inverse rotation.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Hamilton product `self * other`: `other` is applied first, then `self`.
    pub fn multiply(&self, other: &Self) -> Self {
        let (lx, ly, lz, lw) = (self.x, self.y, self.z, self.w);
        let (rx, ry, rz, rw) = (other.x, other.y, other.z, other.w);

        Self::new(
            lw * rx + lx * rw + ly * rz - lz * ry,
            lw * ry - lx * rz + ly * rw + lz * rx,
            lw * rz + lx * ry - ly * rx + lz * rw,
            lw * rw - lx * rx - ly * ry - lz * rz,
        )
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w)
    }

    /// Scales to unit length. A zero quaternion is returned unchanged.
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            *self
        } else {
            Self::new(self.x / mag, self.y / mag, self.z / mag, self.w / mag)
        }
    }
}

impl std::ops::Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{HALF_PI, PI};

    #[test]
    fn test_from_axis_angle_zero_is_identity() {
        let q = Quaternion::from_axis_angle(&Vector3::x_axis(), 0.0);
        assert_eq!(q, Quaternion::identity());
    }

    #[test]
    fn test_from_axis_angle_components() {
        let q = Quaternion::from_axis_angle(&Vector3::z_axis(), HALF_PI);
        let half = (PI / 4.0).sin();
        assert!((q.z - half).abs() < 1e-15);
        assert!((q.w - half).abs() < 1e-15);
        assert_eq!(q.x, 0.0);
        assert_eq!(q.y, 0.0);
    }

    #[test]
    fn test_conjugate_negates_vector_part() {
        let q = Quaternion::new(0.1, -0.2, 0.3, 0.9);
        assert_eq!(q.conjugate(), Quaternion::new(-0.1, 0.2, -0.3, 0.9));
        assert_eq!(q.conjugate().conjugate(), q);
    }

    #[test]
    fn test_conjugate_equals_negated_angle() {
        let axis = Vector3::new(0.0, 0.6, 0.8);
        let q = Quaternion::from_axis_angle(&axis, 1.3).conjugate();
        let r = Quaternion::from_axis_angle(&axis, -1.3);
        assert!((q.x - r.x).abs() < 1e-15);
        assert!((q.y - r.y).abs() < 1e-15);
        assert!((q.z - r.z).abs() < 1e-15);
        assert!((q.w - r.w).abs() < 1e-15);
    }

    #[test]
    fn test_multiply_composes_angles_about_same_axis() {
        let z = Vector3::z_axis();
        let a = Quaternion::from_axis_angle(&z, 0.3);
        let b = Quaternion::from_axis_angle(&z, 0.5);
        let expected = Quaternion::from_axis_angle(&z, 0.8);
        let product = a * b;
        assert!((product.z - expected.z).abs() < 1e-15);
        assert!((product.w - expected.w).abs() < 1e-15);
    }

    #[test]
    fn test_normalize() {
        let q = Quaternion::new(0.0, 0.0, 3.0, 4.0).normalize();
        assert_eq!(q, Quaternion::new(0.0, 0.0, 0.6, 0.8));
        assert!((q.magnitude() - 1.0).abs() < 1e-15);

        let zero = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(zero.normalize(), zero);
    }

    #[test]
    fn test_display() {
        assert_eq!(Quaternion::identity().to_string(), "(0, 0, 0, 1)");
    }
}
