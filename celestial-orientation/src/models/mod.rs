//! Built-in orientation models.
//!
//! | Model | Body | Terms |
//! |-------|------|-------|
//! | [`IauMoon`] | Moon | 13 fundamental arguments with periodic corrections |
//! | [`UniformRotation`] | Sun, Earth, Mars | linear α, δ and W |
//!
//! All coefficients are the IAU WGCCRE 2009 values. [`Body`] maps a name to its model.

mod body;
mod moon;
mod uniform;

pub use body::Body;
pub use moon::IauMoon;
pub use uniform::UniformRotation;
