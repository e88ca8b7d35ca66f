//! Conversions between the representations of a 3D rotation: rotation
//! matrices, axis-angle (Rodrigues) form, unit quaternions and Euler angles.
//!
//! All angles are in radians and all rotations are active and right-handed:
//! `rot_z(pi / 2)` maps `(1, 0, 0)` to `(0, 1, 0)`.

pub mod dynamic;
mod eigen_axis;
mod elementary;
mod euler;
mod nearest;
mod quaternion;
mod rodrigues;
#[cfg(test)]
mod test_util;

pub use eigen_axis::{rotation_axis, rotation_axis_with};
pub use elementary::{rot_axis, rot_x, rot_y, rot_z, set_rot_x, set_rot_y, set_rot_z, Axis};
pub use euler::{
    euler_to_matrix, euler_to_matrix_into, euler_to_rodrigues, matrix_to_euler,
    matrix_to_euler_with, rodrigues_to_euler, EulerAngles, EulerOrder,
};
pub use nearest::{
    approximate_rotation_matrix, approximate_rotation_matrix_into,
    approximate_rotation_matrix_with,
};
pub use quaternion::{
    euler_to_quaternion, matrix_to_quaternion, matrix_to_quaternion_with, quaternion_to_euler,
    quaternion_to_matrix, quaternion_to_matrix_into, quaternion_to_rodrigues,
    quaternion_to_rodrigues_with, rodrigues_to_quaternion,
};
pub use rodrigues::{
    matrix_to_rodrigues, matrix_to_rodrigues_with, rodrigues_to_homogeneous, rodrigues_to_matrix,
    rodrigues_to_matrix_into, AxisAngleRegime, Rodrigues,
};
