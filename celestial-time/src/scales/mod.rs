//! Time scales.
//!
//! Each scale is a newtype over [`JulianDate`](crate::JulianDate) so an instant in one
//! scale cannot be passed where another is expected. Conversions run in one direction
//! per step:
//!
//! | From | To | Offset |
//! |------|----|--------|
//! | [`UTC`] | [`TAI`] | + leap seconds (table lookup) |
//! | [`TAI`] | [`TT`] | + 32.184 s |
//! | [`TT`] | [`TAI`] | - 32.184 s |

pub mod tai;
pub mod tt;
pub mod utc;

pub use tai::TAI;
pub use tt::TT;
pub use utc::UTC;
