//! Spherical coordinates in clock/cone/magnitude form.
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `clock` | Angle in the xy-plane from +X toward +Y (azimuth) |
//! | `cone` | Angle down from +Z (polar angle, colatitude) |
//! | `magnitude` | Distance from the origin |
//!
//! Note that `cone` is measured from the pole, not from the equator as a declination
//! would be. The default value `(0, 0, 1)` is the unit vector along +Z.
//!
//! ```
//! use celestial_core::Vector3;
//! use celestial_orientation::Spherical;
//! use std::f64::consts::FRAC_PI_2;
//!
//! let s = Spherical::from_cartesian(&Vector3::new(1.0, 0.0, 0.0));
//! assert_eq!(s, Spherical::new(0.0, FRAC_PI_2, 1.0));
//! assert_eq!(Spherical::new(1.0, 2.0, 3.0).to_string(), "(1, 2, 3)");
//! ```
//!
//! # Output Destinations
//!
//! Operations that produce a new value also come in an `_into` form that writes into
//! a caller-owned destination and returns it, so per-frame code can reuse storage.
//! `Clone::clone_from` covers the same need for plain copies. A source that may be
//! absent is an `Option<&Spherical>`; `.copied()` propagates the absence.
//!
//! # Degenerate Input
//!
//! Nothing is validated on construction: a negative magnitude is stored as given.
//! [`from_cartesian`](Spherical::from_cartesian) does not special-case the origin.
//! With `libm::atan2(0, 0) = 0` the zero vector maps to `(0, 0, 0)`, while a
//! negative-zero `z` gives `cone = pi` because IEEE `atan2(+0, -0) = pi`.

use celestial_core::math::{atan2, sincos, sqrt};
use celestial_core::{CelestialError, CelestialResult, Vector3};
use std::fmt;

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spherical {
    pub clock: f64,
    pub cone: f64,
    pub magnitude: f64,
}

impl Spherical {
    pub fn new(clock: f64, cone: f64, magnitude: f64) -> Self {
        Self {
            clock,
            cone,
            magnitude,
        }
    }

    /// Converts a Cartesian vector.
    ///
    /// `clock = atan2(y, x)`, `cone = atan2(sqrt(x^2 + y^2), z)` and
    /// `magnitude = sqrt(x^2 + y^2 + z^2)`.
    pub fn from_cartesian(cartesian: &Vector3) -> Self {
        let mut result = Self::default();
        Self::from_cartesian_into(cartesian, &mut result);
        result
    }

    pub fn from_cartesian_into<'a>(cartesian: &Vector3, result: &'a mut Self) -> &'a mut Self {
        let radial_squared = cartesian.x * cartesian.x + cartesian.y * cartesian.y;
        result.clock = atan2(cartesian.y, cartesian.x);
        result.cone = atan2(sqrt(radial_squared), cartesian.z);
        result.magnitude = sqrt(radial_squared + cartesian.z * cartesian.z);
        result
    }

    /// Converts `[x, y, z]` from an untyped buffer.
    ///
    /// Fails with [`CelestialError::InvalidArgument`] naming `cartesian` unless the
    /// slice holds exactly three components.
    pub fn from_cartesian_slice(cartesian: &[f64]) -> CelestialResult<Self> {
        match cartesian {
            [x, y, z] => Ok(Self::from_cartesian(&Vector3::new(*x, *y, *z))),
            _ => Err(CelestialError::invalid_argument(
                "Spherical::from_cartesian_slice",
                "cartesian",
                &format!("expected 3 components, got {}", cartesian.len()),
            )),
        }
    }

    /// `x = m sin(cone) cos(clock)`, `y = m sin(cone) sin(clock)`, `z = m cos(cone)`.
    pub fn to_cartesian(&self) -> Vector3 {
        let mut result = Vector3::zeros();
        self.to_cartesian_into(&mut result);
        result
    }

    pub fn to_cartesian_into<'a>(&self, result: &'a mut Vector3) -> &'a mut Vector3 {
        let (sin_clock, cos_clock) = sincos(self.clock);
        let (sin_cone, cos_cone) = sincos(self.cone);
        let radial = self.magnitude * sin_cone;

        result.x = radial * cos_clock;
        result.y = radial * sin_clock;
        result.z = self.magnitude * cos_cone;
        result
    }

    /// Same direction with magnitude exactly 1.
    pub fn normalize(&self) -> Self {
        Self::new(self.clock, self.cone, 1.0)
    }

    pub fn normalize_into<'a>(&self, result: &'a mut Self) -> &'a mut Self {
        result.clock = self.clock;
        result.cone = self.cone;
        result.magnitude = 1.0;
        result
    }

    /// Exact field equality.
    ///
    /// A value always equals itself, even with NaN fields: identity is checked before
    /// the fields are compared.
    pub fn equals(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
            || (self.clock == other.clock
                && self.cone == other.cone
                && self.magnitude == other.magnitude)
    }

    /// True when every field differs by at most `epsilon`.
    ///
    /// ```
    /// use celestial_orientation::Spherical;
    ///
    /// let a = Spherical::new(1.0, 2.0, 3.0);
    /// let b = Spherical::new(1.05, 2.0, 2.95);
    /// assert!(!a.equals_epsilon(&b, 0.0));
    /// assert!(a.equals_epsilon(&b, 0.1));
    /// ```
    pub fn equals_epsilon(&self, other: &Self, epsilon: f64) -> bool {
        std::ptr::eq(self, other)
            || ((self.clock - other.clock).abs() <= epsilon
                && (self.cone - other.cone).abs() <= epsilon
                && (self.magnitude - other.magnitude).abs() <= epsilon)
    }
}

impl Default for Spherical {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

impl PartialEq for Spherical {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl From<Vector3> for Spherical {
    fn from(cartesian: Vector3) -> Self {
        Self::from_cartesian(&cartesian)
    }
}

impl From<Spherical> for Vector3 {
    fn from(spherical: Spherical) -> Self {
        spherical.to_cartesian()
    }
}

/// `(clock, cone, magnitude)` with Rust's shortest round-trip `f64` formatting.
impl fmt::Display for Spherical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.clock, self.cone, self.magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use celestial_core::constants::{HALF_PI, PI};

    fn sample_vectors() -> Vec<Vector3> {
        let mut out = Vec::new();
        for &x in &[-3.0, -0.5, 0.0, 0.25, 2.0] {
            for &y in &[-1.5, 0.0, 0.75, 4.0] {
                for &z in &[-2.0, 0.0, 0.1, 5.0] {
                    out.push(Vector3::new(x, y, z));
                }
            }
        }
        out
    }

    #[test]
    fn test_default_is_unit_pole() {
        let s = Spherical::default();
        assert_eq!(s, Spherical::new(0.0, 0.0, 1.0));
        assert_eq!(s.to_cartesian(), Vector3::z_axis());
    }

    #[test]
    fn test_negative_magnitude_is_accepted() {
        let s = Spherical::new(0.0, 0.0, -2.0);
        assert_eq!(s.magnitude, -2.0);
    }

    #[test]
    fn test_from_cartesian_x_axis() {
        let s = Spherical::from_cartesian(&Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(s.clock, 0.0);
        assert_eq!(s.cone, HALF_PI);
        assert_eq!(s.magnitude, 1.0);
    }

    #[test]
    fn test_from_cartesian_axes() {
        let y = Spherical::from_cartesian(&Vector3::y_axis());
        assert_eq!((y.clock, y.cone, y.magnitude), (HALF_PI, HALF_PI, 1.0));

        let south = Spherical::from_cartesian(&Vector3::new(0.0, 0.0, -4.0));
        assert_eq!((south.clock, south.cone, south.magnitude), (0.0, PI, 4.0));
    }

    #[test]
    fn test_from_cartesian_origin() {
        let s = Spherical::from_cartesian(&Vector3::zeros());
        assert_eq!(s.magnitude, 0.0);
        assert_eq!(s.clock, 0.0);
        assert_eq!(s.cone, 0.0);
    }

    #[test]
    fn test_from_cartesian_negative_zero_z() {
        let s = Spherical::from_cartesian(&Vector3::new(0.0, 0.0, -0.0));
        assert_eq!(s.magnitude, 0.0);
        assert_eq!(s.cone, PI);
    }

    #[test]
    fn test_from_cartesian_into_reuses_destination() {
        let mut dest = Spherical::new(9.0, 9.0, 9.0);
        let returned = Spherical::from_cartesian_into(&Vector3::new(0.0, 3.0, 4.0), &mut dest);
        returned.magnitude *= 2.0;
        assert_eq!(dest.clock, HALF_PI);
        assert_eq!(dest.magnitude, 10.0);
    }

    #[test]
    fn test_from_cartesian_slice() {
        let s = Spherical::from_cartesian_slice(&[1.0, 0.0, 0.0]).unwrap();
        assert_eq!(s, Spherical::new(0.0, HALF_PI, 1.0));

        let err = Spherical::from_cartesian_slice(&[1.0, 0.0]).unwrap_err();
        assert_eq!(err.argument(), Some("cartesian"));
        assert!(err.to_string().contains("got 2"));

        assert!(Spherical::from_cartesian_slice(&[]).is_err());
    }

    #[test]
    fn test_round_trip_reconstructs_vector() {
        for v in sample_vectors() {
            if v.magnitude() == 0.0 {
                continue;
            }
            let back = Spherical::from_cartesian(&v).to_cartesian();
            let tol = 1e-14 * v.magnitude();
            assert_abs_diff_eq!(back.x, v.x, epsilon = tol);
            assert_abs_diff_eq!(back.y, v.y, epsilon = tol);
            assert_abs_diff_eq!(back.z, v.z, epsilon = tol);
        }
    }

    #[test]
    fn test_to_cartesian_into() {
        let mut dest = Vector3::new(7.0, 7.0, 7.0);
        Spherical::new(0.0, HALF_PI, 2.0).to_cartesian_into(&mut dest);
        assert_abs_diff_eq!(dest.x, 2.0, epsilon = 1e-15);
        assert_abs_diff_eq!(dest.y, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(dest.z, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_normalize_forces_unit_magnitude() {
        let s = Spherical::new(0.4, 1.1, 17.5);
        let n = s.normalize();
        assert_eq!(n, Spherical::new(0.4, 1.1, 1.0));
        assert_eq!(n.normalize(), n);

        let zero = Spherical::from_cartesian(&Vector3::zeros()).normalize();
        assert_eq!(zero.magnitude, 1.0);
    }

    #[test]
    fn test_normalize_idempotent_over_samples() {
        for v in sample_vectors() {
            let n = Spherical::from_cartesian(&v).normalize();
            assert_eq!(n.normalize(), n);
            assert_eq!(n.magnitude, 1.0);
        }
    }

    #[test]
    fn test_normalize_into() {
        let mut dest = Spherical::default();
        Spherical::new(-1.0, 0.5, 3.0).normalize_into(&mut dest);
        assert_eq!(dest, Spherical::new(-1.0, 0.5, 1.0));
    }

    #[test]
    fn test_equals_reflexive_with_nan() {
        let s = Spherical::new(f64::NAN, 1.0, 1.0);
        assert!(s.equals(&s));
        let alias = &s;
        assert!(alias.eq(&s));

        let copy = s;
        assert!(!s.equals(&copy));
    }

    #[test]
    fn test_equals_exact() {
        let a = Spherical::new(1.0, 2.0, 3.0);
        assert_eq!(a, Spherical::new(1.0, 2.0, 3.0));
        assert_ne!(a, Spherical::new(1.0, 2.0, 3.0 + 1e-15));
    }

    #[test]
    fn test_equals_epsilon_symmetric() {
        let a = Spherical::new(0.1, 0.2, 0.3);
        let b = Spherical::new(0.11, 0.19, 0.31);
        for &eps in &[0.0, 0.005, 0.01, 0.011, 1.0] {
            assert_eq!(a.equals_epsilon(&b, eps), b.equals_epsilon(&a, eps));
        }
    }

    #[test]
    fn test_equals_epsilon_monotonic() {
        let a = Spherical::new(1.0, 1.0, 1.0);
        let b = Spherical::new(1.25, 0.5, 1.0);
        let epsilons = [0.0, 0.1, 0.25, 0.5, 0.75, 2.0];
        for (i, &e1) in epsilons.iter().enumerate() {
            if a.equals_epsilon(&b, e1) {
                for &e2 in &epsilons[i..] {
                    assert!(a.equals_epsilon(&b, e2), "held at {e1} but not {e2}");
                }
            }
        }
        assert!(!a.equals_epsilon(&b, 0.25));
        assert!(a.equals_epsilon(&b, 0.5));
    }

    #[test]
    fn test_equals_epsilon_requires_all_fields() {
        let a = Spherical::new(0.0, 0.0, 0.0);
        assert!(!a.equals_epsilon(&Spherical::new(0.0, 0.0, 0.2), 0.1));
        assert!(!a.equals_epsilon(&Spherical::new(0.0, 0.2, 0.0), 0.1));
        assert!(!a.equals_epsilon(&Spherical::new(0.2, 0.0, 0.0), 0.1));
    }

    #[test]
    fn test_clone_from_and_optional_source() {
        let source = Spherical::new(0.5, 0.25, 2.0);
        let mut dest = Spherical::default();
        dest.clone_from(&source);
        assert_eq!(dest, source);

        let absent: Option<&Spherical> = None;
        assert_eq!(absent.copied(), None);
        assert_eq!(Some(&source).copied(), Some(source));
    }

    #[test]
    fn test_display() {
        assert_eq!(Spherical::new(1.0, 2.0, 3.0).to_string(), "(1, 2, 3)");
        assert_eq!(Spherical::new(0.5, -0.25, 1e-3).to_string(), "(0.5, -0.25, 0.001)");
    }

    #[test]
    fn test_vector_conversions() {
        let s: Spherical = Vector3::new(0.0, 0.0, 2.0).into();
        assert_eq!(s, Spherical::new(0.0, 0.0, 2.0));
        let v: Vector3 = s.into();
        assert_eq!(v, Vector3::new(0.0, 0.0, 2.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let s = Spherical::new(0.1, 0.2, 0.3);
        let json = serde_json::to_string(&s).unwrap();
        let back: Spherical = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
