//! Conversions on heap-allocated, runtime-sized buffers.
//!
//! Every function that produces a value takes an optional output buffer.
//! When one is given it is filled and returned, otherwise a new buffer is
//! allocated. A buffer of the wrong shape is rejected rather than resized.
//! Quaternions are stored as `[w, i, j, k]`.

use nalgebra::{DMatrix, DVector, Dim, Matrix, RawStorage};

use crate::error::{InputError, Result};
use crate::math::{Matrix3, Quaternion, RotationScalar, Vector3};

use super::euler::{self, EulerAngles, EulerOrder};
use super::nearest;
use super::quaternion;
use super::rodrigues::{self, Rodrigues};

fn check_shape<T, R: Dim, C: Dim, S: RawStorage<T, R, C>>(
    m: &Matrix<T, R, C, S>,
    expected: (usize, usize),
) -> Result<()> {
    let found = m.shape();
    if found != expected {
        return Err(InputError::ShapeMismatch { expected, found }.into());
    }
    Ok(())
}

/// Reads a 3x3 matrix out of a dynamic one.
///
/// # Errors
///
/// Returns an error if `m` is not 3x3.
pub fn matrix3_from_dynamic<T: RotationScalar>(m: &DMatrix<T>) -> Result<Matrix3<T>> {
    check_shape(m, (3, 3))?;
    Ok(m.fixed_view::<3, 3>(0, 0).into_owned())
}

/// Reads a 3-vector out of a dynamic one.
///
/// # Errors
///
/// Returns an error if `v` does not have 3 entries.
pub fn vector3_from_dynamic<T: RotationScalar>(v: &DVector<T>) -> Result<Vector3<T>> {
    check_shape(v, (3, 1))?;
    Ok(v.fixed_rows::<3>(0).into_owned())
}

/// Reads a quaternion stored as `[w, i, j, k]`.
///
/// # Errors
///
/// Returns an error if `v` does not have 4 entries.
pub fn quaternion_from_dynamic<T: RotationScalar>(v: &DVector<T>) -> Result<Quaternion<T>> {
    check_shape(v, (4, 1))?;
    Ok(Quaternion::new(v[0], v[1], v[2], v[3]))
}

fn fill_matrix<T: RotationScalar>(value: &Matrix3<T>, out: Option<DMatrix<T>>) -> Result<DMatrix<T>> {
    let mut out = out.unwrap_or_else(|| DMatrix::zeros(3, 3));
    check_shape(&out, (3, 3))?;
    out.copy_from(value);
    Ok(out)
}

fn fill_quaternion<T: RotationScalar>(
    value: &Quaternion<T>,
    out: Option<DVector<T>>,
) -> Result<DVector<T>> {
    let mut out = out.unwrap_or_else(|| DVector::zeros(4));
    check_shape(&out, (4, 1))?;
    out[0] = value.w;
    out[1] = value.i;
    out[2] = value.j;
    out[3] = value.k;
    Ok(out)
}

/// See [`euler::euler_to_matrix`].
///
/// # Errors
///
/// Returns an error if `out` is not 3x3.
pub fn euler_to_matrix<T: RotationScalar>(
    order: EulerOrder,
    rot_a: T,
    rot_b: T,
    rot_c: T,
    out: Option<DMatrix<T>>,
) -> Result<DMatrix<T>> {
    fill_matrix(&euler::euler_to_matrix(order, rot_a, rot_b, rot_c), out)
}

/// See [`euler::matrix_to_euler`].
///
/// # Errors
///
/// Returns an error if `m` is not 3x3.
pub fn matrix_to_euler<T: RotationScalar>(m: &DMatrix<T>, order: EulerOrder) -> Result<EulerAngles<T>> {
    Ok(euler::matrix_to_euler(&matrix3_from_dynamic(m)?, order))
}

/// See [`rodrigues::rodrigues_to_matrix`]. The axis is normalized.
///
/// # Errors
///
/// Returns an error if `axis` does not have 3 entries or is zero-length, or
/// if `out` is not 3x3.
pub fn rodrigues_to_matrix<T: RotationScalar>(
    axis: &DVector<T>,
    theta: T,
    out: Option<DMatrix<T>>,
) -> Result<DMatrix<T>> {
    let r = Rodrigues::new(vector3_from_dynamic(axis)?, theta)?;
    fill_matrix(&rodrigues::rodrigues_to_matrix(&r), out)
}

/// See [`rodrigues::matrix_to_rodrigues`].
///
/// # Errors
///
/// Returns an error if `m` is not 3x3 or the conversion fails.
pub fn matrix_to_rodrigues<T: RotationScalar>(m: &DMatrix<T>) -> Result<Rodrigues<T>> {
    rodrigues::matrix_to_rodrigues(&matrix3_from_dynamic(m)?)
}

/// See [`quaternion::quaternion_to_matrix`].
///
/// # Errors
///
/// Returns an error if `q` does not have 4 entries or `out` is not 3x3.
pub fn quaternion_to_matrix<T: RotationScalar>(
    q: &DVector<T>,
    out: Option<DMatrix<T>>,
) -> Result<DMatrix<T>> {
    fill_matrix(&quaternion::quaternion_to_matrix(&quaternion_from_dynamic(q)?), out)
}

/// See [`quaternion::matrix_to_quaternion`].
///
/// # Errors
///
/// Returns an error if `m` is not 3x3, `out` does not have 4 entries, or the
/// conversion fails.
pub fn matrix_to_quaternion<T: RotationScalar>(
    m: &DMatrix<T>,
    out: Option<DVector<T>>,
) -> Result<DVector<T>> {
    let q = quaternion::matrix_to_quaternion(&matrix3_from_dynamic(m)?)?;
    fill_quaternion(&q, out)
}

/// See [`nearest::approximate_rotation_matrix`].
///
/// # Errors
///
/// Returns an error if `m` or `out` is not 3x3, or the SVD does not converge.
pub fn approximate_rotation_matrix<T: RotationScalar>(
    m: &DMatrix<T>,
    out: Option<DMatrix<T>>,
) -> Result<DMatrix<T>> {
    let r = nearest::approximate_rotation_matrix(&matrix3_from_dynamic(m)?)?;
    fill_matrix(&r, out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;
    use crate::error::GeorotError;

    fn shape_error(err: GeorotError) -> ((usize, usize), (usize, usize)) {
        match err {
            GeorotError::Input(InputError::ShapeMismatch { expected, found }) => (expected, found),
            other => panic!("expected ShapeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn allocates_when_no_buffer_given() {
        let m = euler_to_matrix(EulerOrder::XYZ, 0.0, 0.0, FRAC_PI_2, None).unwrap();
        assert_eq!(m.shape(), (3, 3));
        assert_relative_eq!(m[(1, 0)], 1.0, epsilon = 1e-15);
    }

    #[test]
    fn reuses_given_buffer() {
        let buffer = DMatrix::from_element(3, 3, 9.0);
        let m = rodrigues_to_matrix(&DVector::from_vec(vec![0.0, 0.0, 2.0]), 0.0, Some(buffer))
            .unwrap();
        assert_relative_eq!(m, DMatrix::identity(3, 3), epsilon = 1e-15);
    }

    #[test]
    fn rejects_wrong_output_shape() {
        let err = euler_to_matrix(EulerOrder::XYZ, 0.1, 0.2, 0.3, Some(DMatrix::zeros(4, 4)))
            .unwrap_err();
        assert_eq!(shape_error(err), ((3, 3), (4, 4)));
    }

    #[test]
    fn rejects_wrong_input_shape() {
        let err = matrix_to_rodrigues(&DMatrix::<f64>::identity(2, 3)).unwrap_err();
        assert_eq!(shape_error(err), ((3, 3), (2, 3)));

        let err = quaternion_to_matrix(&DVector::<f64>::zeros(3), None).unwrap_err();
        assert_eq!(shape_error(err), ((4, 1), (3, 1)));

        let err = rodrigues_to_matrix(&DVector::<f64>::zeros(4), 1.0, None).unwrap_err();
        assert_eq!(shape_error(err), ((3, 1), (4, 1)));
    }

    #[test]
    fn rejects_wrong_quaternion_buffer() {
        let m = DMatrix::<f64>::identity(3, 3);
        let err = matrix_to_quaternion(&m, Some(DVector::zeros(3))).unwrap_err();
        assert_eq!(shape_error(err), ((4, 1), (3, 1)));
    }

    #[test]
    fn quaternion_round_trip_through_buffers() {
        let m = euler_to_matrix(EulerOrder::ZXZ, 0.3, 0.9, -0.4, None).unwrap();
        let q = matrix_to_quaternion(&m, None).unwrap();
        assert_eq!(q.len(), 4);
        assert_relative_eq!(q.norm(), 1.0, epsilon = 1e-12);
        let back = quaternion_to_matrix(&q, Some(DMatrix::zeros(3, 3))).unwrap();
        assert_relative_eq!(back, m, epsilon = 1e-12);
    }

    #[test]
    fn euler_and_rodrigues_from_buffers() {
        let m = euler_to_matrix(EulerOrder::YZX, 0.2, -0.6, 1.0, None).unwrap();
        let e = matrix_to_euler(&m, EulerOrder::YZX).unwrap();
        assert_relative_eq!(e.rot_b, -0.6, epsilon = 1e-12);
        let r = matrix_to_rodrigues(&m).unwrap();
        assert_relative_eq!(r.axis.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn approximate_through_buffers() {
        let noisy = DMatrix::from_row_slice(3, 3, &[1.01, 0.0, 0.0, 0.0, 0.99, 0.02, 0.0, -0.01, 1.0]);
        let r = approximate_rotation_matrix(&noisy, None).unwrap();
        let fixed = matrix3_from_dynamic(&r).unwrap();
        assert!(crate::math::is_rotation_matrix(&fixed, 1e-9));
    }

    #[test]
    fn zero_axis_is_rejected() {
        let err = rodrigues_to_matrix(&DVector::<f64>::zeros(3), 1.0, None).unwrap_err();
        assert!(matches!(err, GeorotError::Input(InputError::ZeroVector)));
    }
}
