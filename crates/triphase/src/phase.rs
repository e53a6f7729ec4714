//! Sampled phase axis and tick placement

use ndarray::Array1;

/// Relative slack when deciding whether the last tick lands on the window end
const TICK_SLACK: f64 = 1e-9;

/// Uniformly sampled phase, normalized by 2π
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseAxis {
    pub theta: Array1<f64>,
}

impl PhaseAxis {
    /// `n` points from `theta_min` to `theta_max`, both ends included
    pub fn new(theta_min: f64, theta_max: f64, n: usize) -> Self {
        let theta = match n {
            0 => Array1::zeros(0),
            1 => Array1::from_elem(1, theta_min),
            _ => Array1::linspace(theta_min, theta_max, n),
        };
        PhaseAxis { theta }
    }

    /// Axis sampled at `samples_per_period` points per unit of phase span
    pub fn with_density(theta_min: f64, theta_max: f64, samples_per_period: f64) -> Self {
        let n = Self::sample_count(theta_min, theta_max, samples_per_period);
        Self::new(theta_min, theta_max, n)
    }

    /// Sample count for a window: the span times the density, rounded
    pub fn sample_count(theta_min: f64, theta_max: f64, samples_per_period: f64) -> usize {
        let n = (samples_per_period * (theta_max - theta_min)).round();
        if n.is_finite() && n > 0.0 {
            n as usize
        } else {
            0
        }
    }

    pub fn len(&self) -> usize {
        self.theta.len()
    }

    pub fn is_empty(&self) -> bool {
        self.theta.is_empty()
    }
}

/// Tick positions `theta_min + k * increment` up to and including `theta_max`
pub fn tick_positions(theta_min: f64, theta_max: f64, increment: f64) -> Vec<f64> {
    if increment <= 0.0 || theta_max < theta_min {
        return Vec::new();
    }
    let steps = (theta_max - theta_min) / increment;
    let count = (steps * (1.0 + TICK_SLACK) + TICK_SLACK).floor() as usize + 1;
    (0..count)
        .map(|k| theta_min + k as f64 * increment)
        .collect()
}
