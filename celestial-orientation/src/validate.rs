//! Opt-in checks for evaluated orientations.
//!
//! The default evaluation path never validates. These checks back
//! [`OrientationAxes::evaluate_checked`](crate::OrientationAxes::evaluate_checked).

use crate::parameters::OrientationParameters;
use celestial_core::{CelestialError, CelestialResult, MathErrorKind, RotationMatrix3};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidationConfig {
    /// Allowed deviation of `MᵀM` from the identity and of `det M` from 1.
    pub orthonormality_tolerance: f64,
}

impl ValidationConfig {
    pub fn with_tolerance(orthonormality_tolerance: f64) -> Self {
        Self {
            orthonormality_tolerance,
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            orthonormality_tolerance: 1e-10,
        }
    }
}

/// Rejects parameters with a NaN or infinite component.
pub fn check_parameters(operation: &str, params: &OrientationParameters) -> CelestialResult<()> {
    let components = [
        ("right_ascension", params.right_ascension),
        ("declination", params.declination),
        ("rotation", params.rotation),
    ];
    for (component, value) in components {
        if !value.is_finite() {
            warn!(operation, component, value, "orientation parameter is not finite");
            return Err(CelestialError::numeric_instability(
                operation,
                MathErrorKind::NotFinite,
                &format!("{} is {}", component, value),
            ));
        }
    }
    Ok(())
}

/// Rejects a matrix that is not finite or not a proper rotation within tolerance.
pub fn check_rotation(
    operation: &str,
    matrix: &RotationMatrix3,
    config: &ValidationConfig,
) -> CelestialResult<()> {
    if !matrix.is_finite() {
        warn!(operation, "orientation matrix is not finite");
        return Err(CelestialError::numeric_instability(
            operation,
            MathErrorKind::NotFinite,
            "matrix has a non-finite element",
        ));
    }

    if !matrix.is_rotation_matrix(config.orthonormality_tolerance) {
        let determinant = matrix.determinant();
        warn!(
            operation,
            determinant,
            tolerance = config.orthonormality_tolerance,
            "orientation matrix is not orthonormal"
        );
        return Err(CelestialError::numeric_instability(
            operation,
            MathErrorKind::NotOrthonormal,
            &format!(
                "determinant {} outside tolerance {}",
                determinant, config.orthonormality_tolerance
            ),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tolerance() {
        assert_eq!(ValidationConfig::default().orthonormality_tolerance, 1e-10);
        assert_eq!(ValidationConfig::with_tolerance(1e-6).orthonormality_tolerance, 1e-6);
    }

    #[test]
    fn test_check_parameters_names_component() {
        let params = OrientationParameters::new(0.0, f64::NAN, 0.0);
        let err = check_parameters("test", &params).unwrap_err();
        match err {
            CelestialError::NumericInstability { kind, message, .. } => {
                assert_eq!(kind, MathErrorKind::NotFinite);
                assert!(message.starts_with("declination"));
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(check_parameters("test", &OrientationParameters::new(1.0, 0.5, 9.0)).is_ok());
    }

    #[test]
    fn test_check_rotation() {
        let config = ValidationConfig::default();
        assert!(check_rotation("test", &RotationMatrix3::identity(), &config).is_ok());

        let scaled = RotationMatrix3::from_array([[2.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        let err = check_rotation("test", &scaled, &config).unwrap_err();
        assert!(matches!(
            err,
            CelestialError::NumericInstability {
                kind: MathErrorKind::NotOrthonormal,
                ..
            }
        ));

        let mut nan = RotationMatrix3::identity();
        nan.set(1, 2, f64::NAN);
        let err = check_rotation("test", &nan, &config).unwrap_err();
        assert!(err.to_string().contains("NotFinite"));
    }

    #[test]
    fn test_reflection_is_rejected() {
        let reflection =
            RotationMatrix3::from_array([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]]);
        assert!(check_rotation("test", &reflection, &ValidationConfig::default()).is_err());
    }
}
