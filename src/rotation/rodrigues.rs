use tracing::debug;

use crate::error::{InputError, Result};
use crate::math::{canonical_axis, skew, Matrix3, Matrix4, RotationScalar, Tolerances, Vector3};

use super::eigen_axis::rotation_axis_with;

/// A rotation as a unit axis and an angle in radians.
///
/// `(axis, theta)` and `(-axis, -theta)` describe the same rotation. A zero
/// rotation carries the canonical axis `(1, 0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rodrigues<T = f64> {
    pub axis: Vector3<T>,
    pub theta: T,
}

impl<T: RotationScalar> Rodrigues<T> {
    /// Creates a rotation of `theta` about `axis`, normalizing the axis.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis is zero-length.
    pub fn new(axis: Vector3<T>, theta: T) -> Result<Self> {
        let axis = axis
            .try_normalize(T::zero())
            .ok_or(InputError::ZeroVector)?;
        Ok(Self { axis, theta })
    }

    /// Creates a rotation from an axis the caller guarantees is unit length.
    #[must_use]
    pub fn from_unit_axis(axis: Vector3<T>, theta: T) -> Self {
        Self { axis, theta }
    }

    /// The zero rotation.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            axis: canonical_axis(),
            theta: T::zero(),
        }
    }

    /// Creates a rotation from a rotation vector: the angle is its length and
    /// the axis its direction.
    #[must_use]
    pub fn from_rotation_vector(v: &Vector3<T>) -> Self {
        let theta = v.norm();
        if theta <= T::default_tolerances().zero_rotation {
            return Self::identity();
        }
        Self {
            axis: v / theta,
            theta,
        }
    }

    /// The rotation vector `axis * theta`.
    #[must_use]
    pub fn rotation_vector(&self) -> Vector3<T> {
        self.axis * self.theta
    }

    /// Builds the rotation matrix with [`rodrigues_to_matrix`].
    #[must_use]
    pub fn to_matrix(&self) -> Matrix3<T> {
        rodrigues_to_matrix(self)
    }
}

/// Which formula recovers the axis-angle form of a rotation matrix.
///
/// Chosen from `(trace(R) - 1) / 2`, which equals `cos(theta)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisAngleRegime<T> {
    /// `sin(theta)` is usable: the axis comes from the antisymmetric part.
    Generic { cos_theta: T },
    /// No rotation; the axis is undefined.
    Identity,
    /// Rotation by pi; the antisymmetric part vanishes and the axis comes
    /// from the eigenvector with eigenvalue 1.
    HalfTurn,
}

impl<T: RotationScalar> AxisAngleRegime<T> {
    /// Picks the regime of `m`. `cos(theta)` within `zero_rotation` of 1
    /// means no rotation, within `half_turn` of -1 a rotation by pi.
    #[must_use]
    pub fn classify(m: &Matrix3<T>, tolerances: &Tolerances<T>) -> Self {
        let two = T::one() + T::one();
        let cos_theta = (m.trace() - T::one()) / two;
        if T::one() - cos_theta <= tolerances.zero_rotation {
            Self::Identity
        } else if cos_theta + T::one() <= tolerances.half_turn {
            Self::HalfTurn
        } else {
            Self::Generic { cos_theta }
        }
    }
}

/// Builds the rotation matrix of an axis-angle rotation with Rodrigues'
/// formula `R = I cos(t) + (1 - cos(t)) a a^T + sin(t) [a]x`.
///
/// The axis must be unit length.
#[must_use]
pub fn rodrigues_to_matrix<T: RotationScalar>(r: &Rodrigues<T>) -> Matrix3<T> {
    let (s, c) = r.theta.sin_cos();
    let a = &r.axis;
    Matrix3::identity() * c + a * a.transpose() * (T::one() - c) + skew(a) * s
}

/// Same as [`rodrigues_to_matrix`], writing the result into `out`.
pub fn rodrigues_to_matrix_into<T: RotationScalar>(r: &Rodrigues<T>, out: &mut Matrix3<T>) {
    out.copy_from(&rodrigues_to_matrix(r));
}

/// Builds the 4x4 homogeneous transform of an axis-angle rotation about the
/// origin.
#[must_use]
pub fn rodrigues_to_homogeneous<T: RotationScalar>(r: &Rodrigues<T>) -> Matrix4<T> {
    rodrigues_to_matrix(r).to_homogeneous()
}

/// Recovers the axis-angle form of a rotation matrix, using the default
/// tolerances.
///
/// # Errors
///
/// Returns an error if the matrix is a half-turn candidate and the eigen
/// decomposition fails or finds no eigenvalue near 1.
pub fn matrix_to_rodrigues<T: RotationScalar>(m: &Matrix3<T>) -> Result<Rodrigues<T>> {
    matrix_to_rodrigues_with(m, &T::default_tolerances())
}

/// Recovers the axis-angle form of a rotation matrix. `theta` lies in
/// `[0, pi]`.
///
/// # Errors
///
/// See [`matrix_to_rodrigues`].
pub fn matrix_to_rodrigues_with<T: RotationScalar>(
    m: &Matrix3<T>,
    tolerances: &Tolerances<T>,
) -> Result<Rodrigues<T>> {
    match AxisAngleRegime::classify(m, tolerances) {
        AxisAngleRegime::Generic { cos_theta } => {
            let theta = cos_theta.acos();
            let bottom = (T::one() + T::one()) * theta.sin();
            let axis = Vector3::new(
                m[(2, 1)] - m[(1, 2)],
                m[(0, 2)] - m[(2, 0)],
                m[(1, 0)] - m[(0, 1)],
            ) / bottom;
            // Renormalize: extreme underflow in the division leaves drift.
            match axis.try_normalize(T::zero()) {
                Some(axis) => Ok(Rodrigues { axis, theta }),
                None => {
                    debug!("antisymmetric part vanished, using eigen axis");
                    let axis = rotation_axis_with(m, tolerances)?;
                    Ok(Rodrigues { axis, theta })
                }
            }
        }
        AxisAngleRegime::Identity => {
            debug!("zero rotation, using canonical axis");
            Ok(Rodrigues::identity())
        }
        AxisAngleRegime::HalfTurn => {
            debug!("half-turn rotation, using eigen axis");
            let axis = rotation_axis_with(m, tolerances)?;
            Ok(Rodrigues {
                axis,
                theta: T::pi(),
            })
        }
    }
}
