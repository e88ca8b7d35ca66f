use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{GeorotError, InputError, Result};
use crate::math::{Matrix3, RotationScalar, Tolerances};

use super::elementary::{rot_axis, Axis};
use super::rodrigues::{matrix_to_rodrigues, rodrigues_to_matrix, Rodrigues};

/// The ordered axes of an Euler-angle triple.
///
/// `XYZ` means: rotate about X by the first angle, then about Y by the
/// second, then about Z by the third, i.e. `R = Rz(c) * Ry(b) * Rx(a)`.
/// The last six variants repeat the first axis (proper Euler angles).
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EulerOrder {
    XYZ,
    XZY,
    YXZ,
    YZX,
    ZXY,
    ZYX,
    XYX,
    XZX,
    YXY,
    YZY,
    ZXZ,
    ZYZ,
}

/// Matrix entries read by the decomposition of one [`EulerOrder`].
///
/// `i` and `j` are the first and second axes. `k` is the third axis for
/// Tait-Bryan orders, and the axis not used at all for proper Euler orders.
/// `even` is set when `(i, j, k)` is a cyclic permutation of `(0, 1, 2)`.
#[derive(Debug, Clone, Copy)]
struct EntryTable {
    i: usize,
    j: usize,
    k: usize,
    even: bool,
}

impl EulerOrder {
    /// All recognized orderings.
    pub const ALL: [Self; 12] = [
        Self::XYZ,
        Self::XZY,
        Self::YXZ,
        Self::YZX,
        Self::ZXY,
        Self::ZYX,
        Self::XYX,
        Self::XZX,
        Self::YXY,
        Self::YZY,
        Self::ZXZ,
        Self::ZYZ,
    ];

    /// The three rotation axes, in application order.
    #[must_use]
    pub fn axes(self) -> [Axis; 3] {
        use Axis::{X, Y, Z};
        match self {
            Self::XYZ => [X, Y, Z],
            Self::XZY => [X, Z, Y],
            Self::YXZ => [Y, X, Z],
            Self::YZX => [Y, Z, X],
            Self::ZXY => [Z, X, Y],
            Self::ZYX => [Z, Y, X],
            Self::XYX => [X, Y, X],
            Self::XZX => [X, Z, X],
            Self::YXY => [Y, X, Y],
            Self::YZY => [Y, Z, Y],
            Self::ZXZ => [Z, X, Z],
            Self::ZYZ => [Z, Y, Z],
        }
    }

    /// Returns `true` when the first and third axes are the same.
    #[must_use]
    pub fn is_proper_euler(self) -> bool {
        let [a, _, c] = self.axes();
        a == c
    }

    fn entry_table(self) -> EntryTable {
        let [a, b, c] = self.axes();
        let i = a.index();
        let j = b.index();
        let k = if self.is_proper_euler() {
            3 - i - j
        } else {
            c.index()
        };
        EntryTable {
            i,
            j,
            k,
            even: j == (i + 1) % 3,
        }
    }
}

impl fmt::Display for EulerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.axes();
        write!(f, "{a}{b}{c}")
    }
}

impl FromStr for EulerOrder {
    type Err = GeorotError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|order| order.to_string() == upper)
            .ok_or_else(|| InputError::UnknownEulerOrder(s.to_owned()).into())
    }
}

/// Three angles in radians applied about the axes of `order`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerAngles<T = f64> {
    /// Axes the angles are applied about.
    pub order: EulerOrder,
    /// Angle about the first axis, applied first.
    pub rot_a: T,
    /// Angle about the second axis.
    pub rot_b: T,
    /// Angle about the third axis, applied last.
    pub rot_c: T,
}

impl<T: RotationScalar> EulerAngles<T> {
    /// Creates a new angle triple for `order`.
    #[must_use]
    pub fn new(order: EulerOrder, rot_a: T, rot_b: T, rot_c: T) -> Self {
        Self {
            order,
            rot_a,
            rot_b,
            rot_c,
        }
    }

    /// The angles as `[rot_a, rot_b, rot_c]`.
    #[must_use]
    pub fn angles(&self) -> [T; 3] {
        [self.rot_a, self.rot_b, self.rot_c]
    }

    /// Composes the rotation matrix.
    #[must_use]
    pub fn to_matrix(&self) -> Matrix3<T> {
        euler_to_matrix(self.order, self.rot_a, self.rot_b, self.rot_c)
    }
}

/// Builds `Rot(C, rot_c) * Rot(B, rot_b) * Rot(A, rot_a)` for the axes
/// `(A, B, C)` of `order`.
#[must_use]
pub fn euler_to_matrix<T: RotationScalar>(
    order: EulerOrder,
    rot_a: T,
    rot_b: T,
    rot_c: T,
) -> Matrix3<T> {
    let [a, b, c] = order.axes();
    rot_axis(c, rot_c) * rot_axis(b, rot_b) * rot_axis(a, rot_a)
}

/// Same as [`euler_to_matrix`], writing the result into `out`.
pub fn euler_to_matrix_into<T: RotationScalar>(
    order: EulerOrder,
    rot_a: T,
    rot_b: T,
    rot_c: T,
    out: &mut Matrix3<T>,
) {
    out.copy_from(&euler_to_matrix(order, rot_a, rot_b, rot_c));
}

/// Decomposes a rotation matrix into Euler angles for `order`, using the
/// default tolerances.
///
/// Composing the result reproduces `m`; the angles themselves need not match
/// the ones `m` was built from. In gimbal lock the third angle is 0.
#[must_use]
pub fn matrix_to_euler<T: RotationScalar>(m: &Matrix3<T>, order: EulerOrder) -> EulerAngles<T> {
    matrix_to_euler_with(m, order, &T::default_tolerances())
}

/// Decomposes a rotation matrix into Euler angles for `order`.
#[must_use]
pub fn matrix_to_euler_with<T: RotationScalar>(
    m: &Matrix3<T>,
    order: EulerOrder,
    tolerances: &Tolerances<T>,
) -> EulerAngles<T> {
    let table = order.entry_table();
    let [rot_a, rot_b, rot_c] = if order.is_proper_euler() {
        decompose_proper(m, table, order, tolerances.gimbal_lock)
    } else {
        decompose_tait_bryan(m, table, order, tolerances.gimbal_lock)
    };
    EulerAngles::new(order, rot_a, rot_b, rot_c)
}

/// Orders with three distinct axes. The middle angle lies in `[-pi/2, pi/2]`.
fn decompose_tait_bryan<T: RotationScalar>(
    m: &Matrix3<T>,
    EntryTable { i, j, k, even }: EntryTable,
    order: EulerOrder,
    gimbal_lock: T,
) -> [T; 3] {
    let sigma = if even { T::one() } else { -T::one() };
    let sin_b = -sigma * m[(k, i)];

    if T::one() - sin_b.abs() <= gimbal_lock {
        debug!(%order, "euler decomposition in gimbal lock");
        // Only rot_a + rot_c (or their difference) is observable here.
        let sign = if sin_b > T::zero() { T::one() } else { -T::one() };
        let rot_a = (sign * m[(i, j)]).atan2(m[(j, j)]);
        return [rot_a, sign * T::frac_pi_2(), T::zero()];
    }

    let rot_b = clamp_unit(sin_b).asin();
    let rot_a = (sigma * m[(k, j)]).atan2(m[(k, k)]);
    let rot_c = (sigma * m[(j, i)]).atan2(m[(i, i)]);
    [rot_a, rot_b, rot_c]
}

/// Orders that repeat the first axis. The middle angle lies in `[0, pi]`.
fn decompose_proper<T: RotationScalar>(
    m: &Matrix3<T>,
    EntryTable { i, j, k, even }: EntryTable,
    order: EulerOrder,
    gimbal_lock: T,
) -> [T; 3] {
    let sigma = if even { T::one() } else { -T::one() };
    let cos_b = m[(i, i)];

    if T::one() - cos_b.abs() <= gimbal_lock {
        debug!(%order, "euler decomposition in gimbal lock");
        let (sign, rot_b) = if cos_b > T::zero() {
            (T::one(), T::zero())
        } else {
            (-T::one(), T::pi())
        };
        let rot_a = (sigma * sign * m[(k, j)]).atan2(m[(j, j)]);
        return [rot_a, rot_b, T::zero()];
    }

    let rot_b = clamp_unit(cos_b).acos();
    let rot_a = m[(i, j)].atan2(sigma * m[(i, k)]);
    let rot_c = m[(j, i)].atan2(-sigma * m[(k, i)]);
    [rot_a, rot_b, rot_c]
}

fn clamp_unit<T: RotationScalar>(x: T) -> T {
    x.clamp(-T::one(), T::one())
}

/// Converts an axis-angle rotation to Euler angles for `order`.
#[must_use]
pub fn rodrigues_to_euler<T: RotationScalar>(r: &Rodrigues<T>, order: EulerOrder) -> EulerAngles<T> {
    matrix_to_euler(&rodrigues_to_matrix(r), order)
}

/// Converts Euler angles to axis-angle form.
///
/// # Errors
///
/// See [`matrix_to_rodrigues`].
pub fn euler_to_rodrigues<T: RotationScalar>(e: &EulerAngles<T>) -> Result<Rodrigues<T>> {
    matrix_to_rodrigues(&e.to_matrix())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;
    use crate::math::Vector3;
    use crate::rotation::elementary::{rot_x, rot_y, rot_z};
    use crate::rotation::test_util::Lcg;

    fn probe() -> Vector3 {
        Vector3::new(0.3, -1.1, 2.4)
    }

    fn assert_round_trip(order: EulerOrder, a: f64, b: f64, c: f64) {
        let m = euler_to_matrix(order, a, b, c);
        let found = matrix_to_euler(&m, order);
        let back = found.to_matrix();
        assert_relative_eq!(m * probe(), back * probe(), epsilon = 1e-9);
        assert_eq!(found.order, order);
    }

    #[test]
    fn xyz_composes_in_order() {
        let m = euler_to_matrix(EulerOrder::XYZ, 0.1, 0.2, 0.3);
        assert_relative_eq!(m, rot_z(0.3) * rot_y(0.2) * rot_x(0.1), epsilon = 1e-15);
    }

    #[test]
    fn xyz_regular_recovers_angles() {
        let m = euler_to_matrix(EulerOrder::XYZ, 0.4, -0.7, 1.3);
        let e = matrix_to_euler(&m, EulerOrder::XYZ);
        assert_relative_eq!(e.rot_a, 0.4, epsilon = 1e-12);
        assert_relative_eq!(e.rot_b, -0.7, epsilon = 1e-12);
        assert_relative_eq!(e.rot_c, 1.3, epsilon = 1e-12);
    }

    #[test]
    fn every_order_recovers_small_angles() {
        for order in EulerOrder::ALL {
            let m = euler_to_matrix(order, 0.2, 0.5, -0.4);
            let e = matrix_to_euler(&m, order);
            assert_relative_eq!(e.rot_a, 0.2, epsilon = 1e-12);
            assert_relative_eq!(e.rot_b, 0.5, epsilon = 1e-12);
            assert_relative_eq!(e.rot_c, -0.4, epsilon = 1e-12);
        }
    }

    #[test]
    fn round_trip_over_angle_grid() {
        let grid = [0.0, FRAC_PI_2, -FRAC_PI_2, PI, -PI, 0.3, -1.7];
        for order in EulerOrder::ALL {
            for &a in &grid {
                for &b in &grid {
                    for &c in &grid {
                        assert_round_trip(order, a, b, c);
                    }
                }
            }
        }
    }

    #[test]
    fn round_trip_random_angles() {
        let mut rng = Lcg::new(0x5eed);
        for order in EulerOrder::ALL {
            for _ in 0..50 {
                assert_round_trip(order, rng.angle(), rng.angle(), rng.angle());
            }
        }
    }

    #[test]
    fn single_axis_special_cases() {
        for order in EulerOrder::ALL {
            for angle in [FRAC_PI_2, PI] {
                assert_round_trip(order, angle, 0.0, 0.0);
                assert_round_trip(order, 0.0, angle, 0.0);
                assert_round_trip(order, 0.0, 0.0, angle);
            }
        }
    }

    #[test]
    fn gimbal_lock_reproduces_matrix() {
        let m = euler_to_matrix(EulerOrder::XYZ, 0.1, FRAC_PI_2, 0.3);
        let e = matrix_to_euler(&m, EulerOrder::XYZ);
        assert_relative_eq!(e.rot_b, FRAC_PI_2, epsilon = 1e-12);
        assert!(e.rot_c.abs() < f64::EPSILON);
        assert_relative_eq!(e.to_matrix(), m, epsilon = 1e-12);
    }

    #[test]
    fn gimbal_lock_negative_half_pi() {
        for order in EulerOrder::ALL.into_iter().filter(|o| !o.is_proper_euler()) {
            let m = euler_to_matrix(order, 0.6, -FRAC_PI_2, -0.2);
            let e = matrix_to_euler(&m, order);
            assert_relative_eq!(e.rot_b, -FRAC_PI_2, epsilon = 1e-12);
            assert_relative_eq!(e.to_matrix(), m, epsilon = 1e-12);
        }
    }

    #[test]
    fn proper_euler_lock_at_zero_and_pi() {
        for order in EulerOrder::ALL.into_iter().filter(|o| o.is_proper_euler()) {
            for b in [0.0, PI] {
                let m = euler_to_matrix(order, 0.9, b, 0.25);
                let e = matrix_to_euler(&m, order);
                assert!(e.rot_c.abs() < f64::EPSILON);
                assert_relative_eq!(e.to_matrix(), m, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn single_precision_round_trip() {
        let m = euler_to_matrix(EulerOrder::ZYX, 0.3_f32, 0.2, -0.9);
        let e = matrix_to_euler(&m, EulerOrder::ZYX);
        assert_relative_eq!(e.to_matrix(), m, epsilon = 1e-5);
    }

    #[test]
    fn into_writes_buffer() {
        let mut out = Matrix3::zeros();
        euler_to_matrix_into(EulerOrder::YZY, 0.1, 0.2, 0.3, &mut out);
        assert_relative_eq!(out, euler_to_matrix(EulerOrder::YZY, 0.1, 0.2, 0.3));
    }

    #[test]
    fn parse_and_display() {
        for order in EulerOrder::ALL {
            assert_eq!(order.to_string().parse::<EulerOrder>().unwrap(), order);
        }
        assert_eq!("zyz".parse::<EulerOrder>().unwrap(), EulerOrder::ZYZ);
        assert!("XXY".parse::<EulerOrder>().is_err());
    }

    #[test]
    fn rodrigues_and_euler_agree() {
        let r = Rodrigues::new(Vector3::<f64>::new(0.0, 0.0, 1.0), 0.9).unwrap();
        let e = rodrigues_to_euler(&r, EulerOrder::XYZ);
        assert!(e.rot_a.abs() < 1e-12 && e.rot_b.abs() < 1e-12);
        assert_relative_eq!(e.rot_c, 0.9, epsilon = 1e-12);

        let back = euler_to_rodrigues(&e).unwrap();
        assert_relative_eq!(back.axis, r.axis, epsilon = 1e-12);
        assert_relative_eq!(back.theta, 0.9, epsilon = 1e-12);
    }

    #[test]
    fn proper_orders_are_flagged() {
        let proper = EulerOrder::ALL.iter().filter(|o| o.is_proper_euler()).count();
        assert_eq!(proper, 6);
        assert!(!EulerOrder::YXZ.is_proper_euler());
    }
}
