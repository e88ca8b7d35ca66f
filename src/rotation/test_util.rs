//! Deterministic pseudo-random inputs for tests.

use std::f64::consts::PI;

use crate::math::{Matrix3, Vector3};

/// Linear congruential generator (Knuth's MMIX constants).
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Uniform in `[0, 1)`.
    #[allow(clippy::cast_precision_loss)]
    pub fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }

    /// Uniform in `[-pi, pi)`.
    pub fn angle(&mut self) -> f64 {
        (self.next_f64() * 2.0 - 1.0) * PI
    }

    /// Uniform in `[-1, 1)`.
    pub fn signed(&mut self) -> f64 {
        self.next_f64() * 2.0 - 1.0
    }

    pub fn unit_vector(&mut self) -> Vector3 {
        loop {
            let v = Vector3::new(self.signed(), self.signed(), self.signed());
            let n = v.norm();
            if n > 0.1 && n <= 1.0 {
                return v / n;
            }
        }
    }

    pub fn matrix(&mut self) -> Matrix3 {
        Matrix3::from_fn(|_, _| self.signed())
    }
}
