use nalgebra::RealField;

/// Thresholds that select between the regular and degenerate branches of the
/// rotation conversions.
///
/// The defaults differ between single and double precision; see
/// [`RotationScalar::default_tolerances`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances<T> {
    /// Distance of `cos(theta)` from 1 below which a matrix is treated as the
    /// zero rotation.
    pub zero_rotation: T,
    /// Distance of `cos(theta)` from -1 below which a matrix is treated as a
    /// rotation by pi.
    pub half_turn: T,
    /// Distance of the coupling entry from +/-1 below which an Euler
    /// decomposition is treated as gimbal locked.
    pub gimbal_lock: T,
    /// Maximum distance of an eigenvalue from 1 for it to be accepted as the
    /// rotation axis eigenvalue.
    pub eigen_unit: T,
    /// Convergence threshold handed to the SVD and Schur solvers.
    pub decomposition_eps: T,
    /// Iteration cap for the SVD and Schur solvers.
    pub max_iterations: usize,
}

impl<T: RotationScalar> Default for Tolerances<T> {
    fn default() -> Self {
        T::default_tolerances()
    }
}

impl<T: RotationScalar> Tolerances<T> {
    /// Sets the zero rotation threshold.
    #[must_use]
    pub fn with_zero_rotation(mut self, zero_rotation: T) -> Self {
        self.zero_rotation = zero_rotation;
        self
    }

    /// Sets the half-turn threshold.
    #[must_use]
    pub fn with_half_turn(mut self, half_turn: T) -> Self {
        self.half_turn = half_turn;
        self
    }

    /// Sets the gimbal lock threshold.
    #[must_use]
    pub fn with_gimbal_lock(mut self, gimbal_lock: T) -> Self {
        self.gimbal_lock = gimbal_lock;
        self
    }

    /// Sets the eigenvalue acceptance threshold.
    #[must_use]
    pub fn with_eigen_unit(mut self, eigen_unit: T) -> Self {
        self.eigen_unit = eigen_unit;
        self
    }

    /// Sets the solver convergence threshold.
    #[must_use]
    pub fn with_decomposition_eps(mut self, decomposition_eps: T) -> Self {
        self.decomposition_eps = decomposition_eps;
        self
    }

    /// Sets the solver iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Floating-point types the rotation conversions are implemented for.
pub trait RotationScalar: RealField + Copy {
    /// Default thresholds for this precision.
    fn default_tolerances() -> Tolerances<Self>;
}

impl RotationScalar for f64 {
    fn default_tolerances() -> Tolerances<Self> {
        Tolerances {
            zero_rotation: 10.0 * f64::EPSILON,
            half_turn: 10.0 * f64::EPSILON,
            gimbal_lock: 10.0 * f64::EPSILON,
            eigen_unit: 1e-6,
            decomposition_eps: f64::EPSILON,
            max_iterations: 1000,
        }
    }
}

impl RotationScalar for f32 {
    fn default_tolerances() -> Tolerances<Self> {
        Tolerances {
            zero_rotation: 10.0 * f32::EPSILON,
            half_turn: 10.0 * f32::EPSILON,
            gimbal_lock: 10.0 * f32::EPSILON,
            eigen_unit: 1e-3,
            decomposition_eps: f32::EPSILON,
            max_iterations: 1000,
        }
    }
}
