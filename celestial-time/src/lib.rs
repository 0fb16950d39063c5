//! Timestamps for time-dependent orientation models.
//!
//! IAU rotation models are polynomials in days (`d`) and Julian centuries (`T`)
//! of Terrestrial Time since J2000.0. This crate gets a caller from a wall-clock
//! or calendar instant to those arguments:
//!
//! ```text
//! UTC --(leap seconds)--> TAI --(+32.184 s)--> TT --> d, T
//! ```
//!
//! | Type | Meaning |
//! |------|---------|
//! | [`JulianDate`] | Split two-part Julian Date, scale-agnostic |
//! | [`UTC`] | Civil time, with [`UTC::now`] reading the system clock |
//! | [`TAI`] | International Atomic Time |
//! | [`TT`] | Terrestrial Time, the argument of the orientation models |
//!
//! ```
//! use celestial_time::{TT, UTC};
//!
//! let utc: UTC = "2000-01-01T11:58:55.816".parse().unwrap();
//! let tt: TT = utc.to_tai().to_tt();
//! assert!(tt.days_since_j2000().abs() < 1e-9);
//! ```

pub mod constants;
pub mod errors;
pub mod julian;
pub mod parsing;
pub mod scales;

pub use errors::{TimeError, TimeResult};
pub use julian::JulianDate;
pub use scales::{TAI, TT, UTC};
