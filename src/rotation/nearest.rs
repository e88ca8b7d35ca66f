use nalgebra::SVD;
use tracing::{debug, warn};

use crate::error::{DecompositionError, Result};
use crate::math::{Matrix3, RotationScalar, Tolerances};

/// Finds the rotation matrix closest to `q` in the Frobenius norm, using the
/// default tolerances.
///
/// Useful for repairing a rotation that drifted through accumulated error or
/// for averaging several rotation estimates.
///
/// # Errors
///
/// Returns an error if the SVD does not converge.
pub fn approximate_rotation_matrix<T: RotationScalar>(q: &Matrix3<T>) -> Result<Matrix3<T>> {
    approximate_rotation_matrix_with(q, &T::default_tolerances())
}

/// Finds the rotation matrix closest to `q` in the Frobenius norm.
///
/// With `q = U S V^T`, the result is `U V^T`, negated when that is a
/// reflection.
///
/// # Errors
///
/// Returns an error if the SVD does not converge.
pub fn approximate_rotation_matrix_with<T: RotationScalar>(
    q: &Matrix3<T>,
    tolerances: &Tolerances<T>,
) -> Result<Matrix3<T>> {
    let svd = SVD::try_new(
        *q,
        true,
        true,
        tolerances.decomposition_eps,
        tolerances.max_iterations,
    );
    let Some((u, v_t)) = svd.and_then(|svd| Some((svd.u?, svd.v_t?))) else {
        warn!("singular value decomposition did not converge");
        return Err(DecompositionError::SvdNotConverged.into());
    };

    let r = u * v_t;
    if r.determinant() < T::zero() {
        debug!("nearest orthogonal matrix is a reflection, negating");
        return Ok(-r);
    }
    Ok(r)
}

/// Same as [`approximate_rotation_matrix`], writing the result into `out`.
///
/// # Errors
///
/// Returns an error if the SVD does not converge; `out` is left untouched.
pub fn approximate_rotation_matrix_into<T: RotationScalar>(
    q: &Matrix3<T>,
    out: &mut Matrix3<T>,
) -> Result<()> {
    out.copy_from(&approximate_rotation_matrix(q)?);
    Ok(())
}
