use std::cmp::Ordering;

use nalgebra::SVD;
use tracing::warn;

use crate::error::{DecompositionError, Result};
use crate::math::{Matrix3, RotationScalar, Tolerances, Vector3};

/// Finds the rotation axis of `m` as the unit eigenvector whose eigenvalue is
/// closest to 1, using the default tolerances.
///
/// # Errors
///
/// Returns an error if a decomposition does not converge or no real
/// eigenvalue lies near 1 (the input is not a rotation).
pub fn rotation_axis<T: RotationScalar>(m: &Matrix3<T>) -> Result<Vector3<T>> {
    rotation_axis_with(m, &T::default_tolerances())
}

/// Finds the rotation axis of `m` as the unit eigenvector whose eigenvalue is
/// closest to 1.
///
/// Eigenvalues come from a real Schur decomposition; only real ones within
/// `eigen_unit` of 1 are candidates. The eigenvector is the null vector of
/// `m - lambda I`, taken from its SVD. The sign of the axis is arbitrary.
///
/// # Errors
///
/// See [`rotation_axis`].
pub fn rotation_axis_with<T: RotationScalar>(
    m: &Matrix3<T>,
    tolerances: &Tolerances<T>,
) -> Result<Vector3<T>> {
    let Some(schur) = m
        .clone_owned()
        .try_schur(tolerances.decomposition_eps, tolerances.max_iterations)
    else {
        warn!("schur decomposition did not converge");
        return Err(DecompositionError::EigenNotConverged.into());
    };

    let distance = |lambda: T| (lambda - T::one()).abs();
    let closest = schur
        .complex_eigenvalues()
        .iter()
        .filter(|e| e.im.abs() <= tolerances.eigen_unit)
        .map(|e| e.re)
        .min_by(|a, b| distance(*a).partial_cmp(&distance(*b)).unwrap_or(Ordering::Equal));

    let lambda = match closest {
        Some(lambda) if distance(lambda) <= tolerances.eigen_unit => lambda,
        _ => {
            warn!("no real eigenvalue close to 1");
            return Err(DecompositionError::NoUnitEigenvalue.into());
        }
    };

    null_vector(&(m - Matrix3::identity() * lambda), tolerances)
}

/// Unit right singular vector of the smallest singular value.
fn null_vector<T: RotationScalar>(a: &Matrix3<T>, tolerances: &Tolerances<T>) -> Result<Vector3<T>> {
    let svd = SVD::try_new(
        *a,
        false,
        true,
        tolerances.decomposition_eps,
        tolerances.max_iterations,
    );
    let Some((singular_values, v_t)) = svd.and_then(|svd| Some((svd.singular_values, svd.v_t?)))
    else {
        warn!("singular value decomposition did not converge");
        return Err(DecompositionError::SvdNotConverged.into());
    };

    let smallest = singular_values
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        .map_or(2, |(index, _)| index);

    Ok(v_t.row(smallest).transpose().normalize())
}
