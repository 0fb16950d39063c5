//! Thin wrappers over `libm`.
//!
//! The orientation pipeline runs every rendered frame and its output is compared
//! bit-for-bit in tests, so trigonometry goes through `libm` rather than the
//! platform's `f64` intrinsics.

#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

#[inline]
pub fn sincos(x: f64) -> (f64, f64) {
    libm::sincos(x)
}

#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    libm::atan2(y, x)
}

#[inline]
pub fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}
