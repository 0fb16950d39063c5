//! Vectors, rotation matrices and quaternions.
//!
//! These are the primitives the orientation pipeline composes: a direction-cosine
//! matrix built column-by-column from body axes, a spin quaternion about the body
//! pole, and the matrix product joining the two.

mod quaternion;
mod rotation_matrix;
mod vector3;

pub use quaternion::Quaternion;
pub use rotation_matrix::RotationMatrix3;
pub use vector3::Vector3;
