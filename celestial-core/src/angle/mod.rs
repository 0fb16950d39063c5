//! Angle wrapping.
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Prime-meridian angle W, clock angle | [0, 2pi) | [`wrap_0_2pi`] |
//! | Signed differences | [-pi, +pi) | [`wrap_pm_pi`] |

mod normalize;

pub use normalize::{wrap_0_2pi, wrap_pm_pi};
