use std::fmt;

use crate::math::{Matrix3, RotationScalar};

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Row/column index of the axis in a 3x3 matrix.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        };
        f.write_str(name)
    }
}

/// Rotation about the X axis by `angle` radians.
#[must_use]
pub fn rot_x<T: RotationScalar>(angle: T) -> Matrix3<T> {
    let mut m = Matrix3::zeros();
    set_rot_x(angle, &mut m);
    m
}

/// Rotation about the Y axis by `angle` radians.
#[must_use]
pub fn rot_y<T: RotationScalar>(angle: T) -> Matrix3<T> {
    let mut m = Matrix3::zeros();
    set_rot_y(angle, &mut m);
    m
}

/// Rotation about the Z axis by `angle` radians.
#[must_use]
pub fn rot_z<T: RotationScalar>(angle: T) -> Matrix3<T> {
    let mut m = Matrix3::zeros();
    set_rot_z(angle, &mut m);
    m
}

/// Rotation about `axis` by `angle` radians.
#[must_use]
pub fn rot_axis<T: RotationScalar>(axis: Axis, angle: T) -> Matrix3<T> {
    match axis {
        Axis::X => rot_x(angle),
        Axis::Y => rot_y(angle),
        Axis::Z => rot_z(angle),
    }
}

/// Overwrites `out` with a rotation about the X axis.
pub fn set_rot_x<T: RotationScalar>(angle: T, out: &mut Matrix3<T>) {
    let (s, c) = angle.sin_cos();
    let (o, l) = (T::zero(), T::one());
    #[rustfmt::skip]
    let m = Matrix3::new(
        l, o,  o,
        o, c, -s,
        o, s,  c,
    );
    out.copy_from(&m);
}

/// Overwrites `out` with a rotation about the Y axis.
pub fn set_rot_y<T: RotationScalar>(angle: T, out: &mut Matrix3<T>) {
    let (s, c) = angle.sin_cos();
    let (o, l) = (T::zero(), T::one());
    #[rustfmt::skip]
    let m = Matrix3::new(
         c, o, s,
         o, l, o,
        -s, o, c,
    );
    out.copy_from(&m);
}

/// Overwrites `out` with a rotation about the Z axis.
pub fn set_rot_z<T: RotationScalar>(angle: T, out: &mut Matrix3<T>) {
    let (s, c) = angle.sin_cos();
    let (o, l) = (T::zero(), T::one());
    #[rustfmt::skip]
    let m = Matrix3::new(
        c, -s, o,
        s,  c, o,
        o,  o, l,
    );
    out.copy_from(&m);
}
