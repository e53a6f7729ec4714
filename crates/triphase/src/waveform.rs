//! Simple and compound voltages of a balanced three-phase system
//!
//! Unit amplitude simple voltages, so compound voltages peak at √3.

use ndarray::Array1;
use std::f64::consts::PI;

use crate::phase::PhaseAxis;

/// Simple voltage of phase `k` (0, 1 or 2) at phase `theta`
pub fn simple_voltage(theta: f64, phi0: f64, k: usize) -> f64 {
    (2.0 * PI * (theta + phi0 - k as f64 / 3.0)).sin()
}

/// Index of the phase following `k` in the cyclic order a → b → c → a
pub fn next_phase(k: usize) -> usize {
    (k + 1) % 3
}

/// Sampled simple and compound voltages
#[derive(Debug, Clone)]
pub struct ThreePhaseVoltages {
    /// `simple[k] = sin(2π(θ + φ0 − k/3))`
    pub simple: [Array1<f64>; 3],
    /// `compound[k] = simple[k] − simple[k + 1 mod 3]`
    pub compound: [Array1<f64>; 3],
}

impl ThreePhaseVoltages {
    pub fn generate(axis: &PhaseAxis, phi0: f64) -> Self {
        let simple: [Array1<f64>; 3] =
            std::array::from_fn(|k| axis.theta.mapv(|theta| simple_voltage(theta, phi0, k)));
        let compound = std::array::from_fn(|k| &simple[k] - &simple[next_phase(k)]);

        ThreePhaseVoltages { simple, compound }
    }

    pub fn len(&self) -> usize {
        self.simple[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.simple[0].is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_origin_quarter_period_gives_cosines() {
        let axis = PhaseAxis::with_density(0.0, 1.0, 500.0);
        let v = ThreePhaseVoltages::generate(&axis, 0.25);

        assert_eq!(v.len(), 500);
        assert_abs_diff_eq!(v.simple[0][0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.simple[1][0], -0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(v.simple[2][0], -0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_compound_is_cyclic_difference() {
        let axis = PhaseAxis::new(-0.3, 2.1, 1200);
        let v = ThreePhaseVoltages::generate(&axis, 0.1);

        for i in 0..v.len() {
            for k in 0..3 {
                assert_abs_diff_eq!(
                    v.compound[k][i],
                    v.simple[k][i] - v.simple[next_phase(k)][i],
                    epsilon = 1e-12
                );
            }
        }
    }

    #[test]
    fn test_balanced_system_sums_to_zero() {
        let axis = PhaseAxis::new(0.0, 1.0, 97);
        let v = ThreePhaseVoltages::generate(&axis, 0.0);

        for i in 0..v.len() {
            let sum = v.simple[0][i] + v.simple[1][i] + v.simple[2][i];
            assert_abs_diff_eq!(sum, 0.0, epsilon = 1e-12);
            let compound_sum = v.compound[0][i] + v.compound[1][i] + v.compound[2][i];
            assert_abs_diff_eq!(compound_sum, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_compound_amplitude_is_sqrt3() {
        let axis = PhaseAxis::new(0.0, 1.0, 6001);
        let v = ThreePhaseVoltages::generate(&axis, 0.0);

        let peak = v.compound[0].iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert_abs_diff_eq!(peak, 3f64.sqrt(), epsilon = 1e-6);
    }

    #[test]
    fn test_phase_order() {
        // phase b lags a by a third of a period
        let phi0 = 0.0;
        for theta in [0.0, 0.1, 0.37, 0.8] {
            assert_abs_diff_eq!(
                simple_voltage(theta, phi0, 1),
                simple_voltage(theta - 1.0 / 3.0, phi0, 0),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_empty_axis() {
        let v = ThreePhaseVoltages::generate(&PhaseAxis::new(0.0, 1.0, 0), 0.0);
        assert!(v.is_empty());
    }
}
