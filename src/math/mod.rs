mod tolerance;

pub use tolerance::{RotationScalar, Tolerances};

/// 3D vector type.
pub type Vector3<T = f64> = nalgebra::Vector3<T>;

/// 3x3 matrix type. Rotation matrices use this type.
pub type Matrix3<T = f64> = nalgebra::Matrix3<T>;

/// 4x4 homogeneous transformation matrix.
pub type Matrix4<T = f64> = nalgebra::Matrix4<T>;

/// Quaternion type, `w` is the scalar part.
pub type Quaternion<T = f64> = nalgebra::Quaternion<T>;

/// The canonical axis reported when a rotation has no defined axis.
#[must_use]
pub fn canonical_axis<T: RotationScalar>() -> Vector3<T> {
    Vector3::x()
}

/// Skew-symmetric cross-product matrix `[v]x`, such that `[v]x * u = v x u`.
#[must_use]
pub fn skew<T: RotationScalar>(v: &Vector3<T>) -> Matrix3<T> {
    let zero = T::zero();
    #[rustfmt::skip]
    let m = Matrix3::new(
        zero, -v.z,  v.y,
        v.z,  zero, -v.x,
        -v.y, v.x,  zero,
    );
    m
}

/// Returns `true` if `m` is orthonormal with determinant +1, within `tolerance`.
#[must_use]
pub fn is_rotation_matrix<T: RotationScalar>(m: &Matrix3<T>, tolerance: T) -> bool {
    let residual = m.transpose() * m - Matrix3::identity();
    if residual.iter().any(|e| e.abs() > tolerance) {
        return false;
    }
    (m.determinant() - T::one()).abs() <= tolerance
}
