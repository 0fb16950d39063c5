//! 3x3 rotation matrices.
//!
//! # Storage and Columns
//!
//! Elements are stored row-major as `[[f64; 3]; 3]`; `m[(i, j)]` is row `i`, column `j`.
//! Storage order is separate from how a matrix is *built*: an orientation matrix is
//! assembled from three body axes that become its **columns**, which is what
//! [`from_columns`](RotationMatrix3::from_columns) does. Reading the result back with
//! [`column`](RotationMatrix3::column) returns those axes unchanged.
//!
//! ```
//! use celestial_core::{RotationMatrix3, Vector3};
//!
//! let m = RotationMatrix3::from_columns(
//!     &Vector3::y_axis(),
//!     &-Vector3::x_axis(),
//!     &Vector3::z_axis(),
//! );
//! assert_eq!(m.column(0), Vector3::y_axis());
//! assert_eq!(m[(1, 0)], 1.0);
//! ```
//!
//! # Composition
//!
//! `a * b` applies `b` first, then `a`. The orientation pipeline's final matrix is
//! `P * R`: spin `R` acts on a vector before the pole orientation `P`.
//!
//! # Allocation
//!
//! Every operation here is stack-only. The `_into` variants write into a
//! caller-owned matrix so a per-frame caller can keep one destination alive.

use super::{Quaternion, Vector3};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix3 {
    elements: [[f64; 3]; 3],
}

impl RotationMatrix3 {
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Creates a matrix from row-major elements without checking that it is a rotation.
    pub fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    /// Creates the matrix whose columns are `x`, `y` and `z`, in that order.
    pub fn from_columns(x: &Vector3, y: &Vector3, z: &Vector3) -> Self {
        Self::from_array([[x.x, y.x, z.x], [x.y, y.y, z.y], [x.z, y.z, z.z]])
    }

    /// Column `col` as a vector. Panics if `col >= 3`.
    pub fn column(&self, col: usize) -> Vector3 {
        Vector3::new(
            self.elements[0][col],
            self.elements[1][col],
            self.elements[2][col],
        )
    }

    /// Row `row` as a vector. Panics if `row >= 3`.
    pub fn row(&self, row: usize) -> Vector3 {
        Vector3::from_array(self.elements[row])
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.elements[row][col] = value;
    }

    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    /// Expands a unit quaternion into the equivalent active rotation matrix.
    ///
    /// A rotation by `theta` about +Z becomes
    ///
    /// ```text
    /// | cos(theta) -sin(theta)  0 |
    /// | sin(theta)  cos(theta)  0 |
    /// |     0           0       1 |
    /// ```
    ///
    /// The quaternion is not renormalized; a non-unit input yields a scaled matrix.
    pub fn from_quaternion(q: &Quaternion) -> Self {
        let mut m = Self::identity();
        m.set_from_quaternion(q);
        m
    }

    /// In-place form of [`from_quaternion`](Self::from_quaternion).
    pub fn set_from_quaternion(&mut self, q: &Quaternion) -> &mut Self {
        let x2 = q.x * q.x;
        let xy = q.x * q.y;
        let xz = q.x * q.z;
        let xw = q.x * q.w;
        let y2 = q.y * q.y;
        let yz = q.y * q.z;
        let yw = q.y * q.w;
        let z2 = q.z * q.z;
        let zw = q.z * q.w;
        let w2 = q.w * q.w;

        self.elements = [
            [x2 - y2 - z2 + w2, 2.0 * (xy - zw), 2.0 * (xz + yw)],
            [2.0 * (xy + zw), -x2 + y2 - z2 + w2, 2.0 * (yz - xw)],
            [2.0 * (xz - yw), 2.0 * (yz + xw), -x2 - y2 + z2 + w2],
        ];
        self
    }

    /// Matrix product `self * other`: `other` acts first, then `self`.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = Self::identity();
        Self::multiply_into(self, other, &mut result);
        result
    }

    /// Writes `left * right` into `result` and returns it.
    pub fn multiply_into<'a>(left: &Self, right: &Self, result: &'a mut Self) -> &'a mut Self {
        let mut product = [[0.0; 3]; 3];

        for (i, row) in product.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += left.elements[i][k] * right.elements[k][j];
                }
            }
        }

        result.elements = product;
        result
    }

    /// Computes `M * v`.
    pub fn apply_to_vector(&self, vector: [f64; 3]) -> [f64; 3] {
        let m = &self.elements;
        [
            m[0][0] * vector[0] + m[0][1] * vector[1] + m[0][2] * vector[2],
            m[1][0] * vector[0] + m[1][1] * vector[1] + m[1][2] * vector[2],
            m[2][0] * vector[0] + m[2][1] * vector[1] + m[2][2] * vector[2],
        ]
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.elements;

        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// The transpose, which for a rotation is its inverse.
    pub fn transpose(&self) -> Self {
        let m = &self.elements;
        Self::from_array([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Checks `det(M) = +1` and `M * M^T = I`, each within `tolerance`.
    ///
    /// Returns `false` for any matrix containing NaN.
    ///
    /// ```
    /// use celestial_core::RotationMatrix3;
    ///
    /// let scaled = RotationMatrix3::from_array([
    ///     [2.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 1.0],
    /// ]);
    /// assert!(!scaled.is_rotation_matrix(1e-10));
    /// assert!(RotationMatrix3::identity().is_rotation_matrix(0.0));
    /// ```
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        let det = self.determinant();
        if !((det - 1.0).abs() <= tolerance) {
            return false;
        }

        let product = self.multiply(&self.transpose());
        product.max_difference(&Self::identity()) <= tolerance
    }

    /// Largest absolute element-wise difference. NaN elements yield NaN.
    pub fn max_difference(&self, other: &Self) -> f64 {
        let mut max_diff: f64 = 0.0;

        for i in 0..3 {
            for j in 0..3 {
                let diff = (self.elements[i][j] - other.elements[i][j]).abs();
                if diff.is_nan() {
                    return f64::NAN;
                }
                max_diff = max_diff.max(diff);
            }
        }

        max_diff
    }

    pub fn is_finite(&self) -> bool {
        self.elements.iter().flatten().all(|e| e.is_finite())
    }
}

impl Default for RotationMatrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for RotationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&RotationMatrix3> for &RotationMatrix3 {
    type Output = RotationMatrix3;

    fn mul(self, rhs: &RotationMatrix3) -> RotationMatrix3 {
        self.multiply(rhs)
    }
}

impl std::ops::Mul<Vector3> for RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        Vector3::from_array(self.apply_to_vector(vec.to_array()))
    }
}

impl std::ops::Mul<Vector3> for &RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        Vector3::from_array(self.apply_to_vector(vec.to_array()))
    }
}

impl std::ops::Index<(usize, usize)> for RotationMatrix3 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.elements[row][col]
    }
}

impl std::ops::IndexMut<(usize, usize)> for RotationMatrix3 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.elements[row][col]
    }
}

impl fmt::Display for RotationMatrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.elements {
            writeln!(f, "[{:15.12} {:15.12} {:15.12}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
