use tracing::debug;

use crate::error::Result;
use crate::math::{Matrix3, Quaternion, RotationScalar, Tolerances};

use super::euler::{matrix_to_euler_with, EulerAngles, EulerOrder};
use super::rodrigues::{matrix_to_rodrigues_with, Rodrigues};

/// Converts an axis-angle rotation to a unit quaternion:
/// `w = cos(theta / 2)`, `(i, j, k) = axis * sin(theta / 2)`.
#[must_use]
pub fn rodrigues_to_quaternion<T: RotationScalar>(r: &Rodrigues<T>) -> Quaternion<T> {
    let half = r.theta / (T::one() + T::one());
    let (s, c) = half.sin_cos();
    Quaternion::new(c, r.axis.x * s, r.axis.y * s, r.axis.z * s)
}

/// Converts a unit quaternion to axis-angle form, using the default
/// tolerances.
#[must_use]
pub fn quaternion_to_rodrigues<T: RotationScalar>(q: &Quaternion<T>) -> Rodrigues<T> {
    quaternion_to_rodrigues_with(q, &T::default_tolerances())
}

/// Converts a unit quaternion to axis-angle form. `theta` lies in `[0, 2 pi]`.
///
/// A vector part shorter than `zero_rotation` yields the zero rotation with
/// the canonical axis.
#[must_use]
pub fn quaternion_to_rodrigues_with<T: RotationScalar>(
    q: &Quaternion<T>,
    tolerances: &Tolerances<T>,
) -> Rodrigues<T> {
    let imag = q.imag();
    let norm = imag.norm();
    if norm <= tolerances.zero_rotation {
        debug!("quaternion vector part vanished, using canonical axis");
        return Rodrigues::identity();
    }
    let w = q.w.clamp(-T::one(), T::one());
    Rodrigues::from_unit_axis(imag / norm, (T::one() + T::one()) * w.acos())
}

/// Converts a rotation matrix to a unit quaternion by way of its axis-angle
/// form, using the default tolerances.
///
/// # Errors
///
/// See [`matrix_to_rodrigues`](super::rodrigues::matrix_to_rodrigues).
pub fn matrix_to_quaternion<T: RotationScalar>(m: &Matrix3<T>) -> Result<Quaternion<T>> {
    matrix_to_quaternion_with(m, &T::default_tolerances())
}

/// Converts a rotation matrix to a unit quaternion by way of its axis-angle
/// form.
///
/// # Errors
///
/// See [`matrix_to_rodrigues`](super::rodrigues::matrix_to_rodrigues).
pub fn matrix_to_quaternion_with<T: RotationScalar>(
    m: &Matrix3<T>,
    tolerances: &Tolerances<T>,
) -> Result<Quaternion<T>> {
    let r = matrix_to_rodrigues_with(m, tolerances)?;
    Ok(rodrigues_to_quaternion(&r))
}

/// Builds the rotation matrix of a quaternion.
///
/// The quaternion is not normalized: a non-unit input gives a scaled,
/// non-orthogonal matrix.
#[must_use]
#[allow(clippy::many_single_char_names)]
pub fn quaternion_to_matrix<T: RotationScalar>(q: &Quaternion<T>) -> Matrix3<T> {
    let (w, x, y, z) = (q.w, q.i, q.j, q.k);
    let two = T::one() + T::one();
    let (ww, xx, yy, zz) = (w * w, x * x, y * y, z * z);
    let (xy, xz, yz) = (x * y, x * z, y * z);
    let (wx, wy, wz) = (w * x, w * y, w * z);

    #[rustfmt::skip]
    let m = Matrix3::new(
        ww + xx - yy - zz, two * (xy - wz),   two * (xz + wy),
        two * (xy + wz),   ww - xx + yy - zz, two * (yz - wx),
        two * (xz - wy),   two * (yz + wx),   ww - xx - yy + zz,
    );
    m
}

/// Same as [`quaternion_to_matrix`], writing the result into `out`.
pub fn quaternion_to_matrix_into<T: RotationScalar>(q: &Quaternion<T>, out: &mut Matrix3<T>) {
    out.copy_from(&quaternion_to_matrix(q));
}

/// Converts Euler angles to a unit quaternion.
///
/// # Errors
///
/// See [`matrix_to_rodrigues`](super::rodrigues::matrix_to_rodrigues).
pub fn euler_to_quaternion<T: RotationScalar>(e: &EulerAngles<T>) -> Result<Quaternion<T>> {
    matrix_to_quaternion(&e.to_matrix())
}

/// Converts a unit quaternion to Euler angles for `order`.
#[must_use]
pub fn quaternion_to_euler<T: RotationScalar>(q: &Quaternion<T>, order: EulerOrder) -> EulerAngles<T> {
    matrix_to_euler_with(&quaternion_to_matrix(q), order, &T::default_tolerances())
}
