//! Six-pulse bridge rectifier
//!
//! The bridge output follows, in turn, the six line-to-line voltages. Each one
//! is a cosine of amplitude √3 shifted by a multiple of π/3, and each is active
//! for one 60° sector. The firing delay ψ shifts every sector boundary; with
//! ψ = 0 the thyristors behave like diodes and each lobe is taken around its
//! peak.

use ndarray::Array1;
use std::f64::consts::{PI, SQRT_2};

use crate::phase::PhaseAxis;

const SQRT_3: f64 = 1.732_050_807_568_877_2;
const SECTORS: i64 = 6;

/// Sampled rectified voltage together with the active sector at each sample
#[derive(Debug, Clone)]
pub struct RectifiedVoltage {
    /// Commutation index in 0..6
    pub index: Array1<u8>,
    pub voltage: Array1<f64>,
}

/// Ideal six-pulse bridge fed by the three-phase system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SixPulseRectifier {
    /// Firing delay angle, normalized by 2π
    pub psi: f64,
    /// Phase origin of the supply
    pub phi0: f64,
}

impl SixPulseRectifier {
    pub fn new(psi: f64, phi0: f64) -> Self {
        Self { psi, phi0 }
    }

    /// Diode bridge (no firing delay)
    pub fn diode(phi0: f64) -> Self {
        Self::new(0.0, phi0)
    }

    /// Which of the six 60° sectors is conducting at `theta`
    pub fn commutation_index(&self, theta: f64) -> u8 {
        let sector = ((theta + self.phi0 - self.psi) * SECTORS as f64 + 0.5).floor() as i64;
        sector.rem_euclid(SECTORS) as u8
    }

    /// Output voltage at `theta`
    pub fn voltage(&self, theta: f64) -> f64 {
        let index = self.commutation_index(theta);
        SQRT_3 * (2.0 * PI * (theta + self.phi0) - PI / 3.0 * index as f64).cos()
    }

    pub fn waveform(&self, axis: &PhaseAxis) -> RectifiedVoltage {
        RectifiedVoltage {
            index: axis.theta.mapv(|theta| self.commutation_index(theta)),
            voltage: axis.theta.mapv(|theta| self.voltage(theta)),
        }
    }

    /// Lower and upper bounds reached by the output over a full period.
    ///
    /// Every active lobe is evaluated over the same arc
    /// `[2πψ − π/6, 2πψ + π/6]`, so the bounds are the extrema of `√3·cos`
    /// on that arc.
    pub fn envelope(&self) -> (f64, f64) {
        let start = 2.0 * PI * self.psi - PI / 6.0;
        let end = 2.0 * PI * self.psi + PI / 6.0;

        let contains = |offset: f64| {
            ((end - offset) / (2.0 * PI)).floor() >= ((start - offset) / (2.0 * PI)).ceil()
        };
        let (a, b) = (start.cos(), end.cos());

        let upper = if contains(0.0) { 1.0 } else { a.max(b) };
        let lower = if contains(PI) { -1.0 } else { a.min(b) };
        (SQRT_3 * lower, SQRT_3 * upper)
    }

    /// Average output of the ideal bridge, `(3√3/π)·cos(2πψ)`
    pub fn ideal_mean_voltage(&self) -> f64 {
        3.0 * SQRT_3 / PI * (2.0 * PI * self.psi).cos()
    }

    /// Ratio of the average output to the RMS line-to-line supply voltage
    pub fn mean_to_line_rms_ratio(&self) -> f64 {
        self.ideal_mean_voltage() / (SQRT_3 / SQRT_2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const EPS: f64 = 1e-12;

    fn period_axis() -> PhaseAxis {
        PhaseAxis::with_density(0.0, 1.0, 500.0)
    }

    #[test]
    fn test_sqrt3_constant() {
        assert_relative_eq!(SQRT_3, 3f64.sqrt());
    }

    #[test]
    fn test_diode_bridge_stays_near_peak() {
        let rectifier = SixPulseRectifier::diode(0.25);
        let out = rectifier.waveform(&PhaseAxis::new(0.0, 3.0, 3000));

        let low = SQRT_3 * (PI / 6.0).cos();
        for &v in out.voltage.iter() {
            assert!(v >= low - EPS && v <= SQRT_3 + EPS, "{} outside [{}, √3]", v, low);
        }
    }

    #[test]
    fn test_envelope_diode() {
        let (low, high) = SixPulseRectifier::diode(0.0).envelope();
        assert_abs_diff_eq!(low, 1.5, epsilon = EPS);
        assert_abs_diff_eq!(high, SQRT_3, epsilon = EPS);
    }

    #[test]
    fn test_envelope_contains_samples() {
        for psi in [0.0, 1.0 / 12.0, 0.1, 0.25, 0.4, 0.5] {
            let rectifier = SixPulseRectifier::new(psi, 0.25);
            let (low, high) = rectifier.envelope();
            let out = rectifier.waveform(&PhaseAxis::new(0.0, 2.0, 4000));
            for &v in out.voltage.iter() {
                assert!(
                    v >= low - 1e-9 && v <= high + 1e-9,
                    "psi = {}: {} outside [{}, {}]",
                    psi,
                    v,
                    low,
                    high
                );
            }
        }
    }

    #[test]
    fn test_envelope_firing_delay() {
        // ψ = π/6 (1/12): lobes are taken from their peak down to cos(π/3)
        let (low, high) = SixPulseRectifier::new(1.0 / 12.0, 0.0).envelope();
        assert_abs_diff_eq!(low, SQRT_3 * 0.5, epsilon = EPS);
        assert_abs_diff_eq!(high, SQRT_3, epsilon = EPS);

        // ψ = π (1/2): the output is fully inverted
        let (low, high) = SixPulseRectifier::new(0.5, 0.0).envelope();
        assert_abs_diff_eq!(low, -SQRT_3, epsilon = EPS);
        assert_abs_diff_eq!(high, -1.5, epsilon = EPS);
    }

    #[test]
    fn test_index_cycles_once_per_period() {
        let rectifier = SixPulseRectifier::new(1.0 / 12.0, 0.25);
        let out = rectifier.waveform(&period_axis());

        let mut changes = 0;
        for w in out.index.as_slice().unwrap().windows(2) {
            if w[1] != w[0] {
                assert_eq!(w[1], (w[0] + 1) % 6, "index must advance by one sector");
                changes += 1;
            }
        }
        // 500 samples over one period with endpoints included: every sector
        // boundary is crossed once, and the first sector reappears at the end
        assert!((5..=6).contains(&changes), "{} sector changes", changes);

        let mut seen = [false; 6];
        for &i in out.index.iter() {
            seen[i as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_index_is_wrapped_for_negative_phase() {
        let rectifier = SixPulseRectifier::new(0.0, 0.0);
        assert_eq!(rectifier.commutation_index(0.0), 0);
        assert_eq!(rectifier.commutation_index(-1.0 / 6.0), 5);
        assert_eq!(rectifier.commutation_index(-1.0), 0);
        assert_eq!(rectifier.commutation_index(1.0 / 6.0), 1);
    }

    #[test]
    fn test_sector_boundary_rounds_up() {
        // boundary of sector 0/1 sits at (1/2)/6 past ψ
        let rectifier = SixPulseRectifier::new(0.0, 0.0);
        assert_eq!(rectifier.commutation_index(1.0 / 12.0 - 1e-9), 0);
        assert_eq!(rectifier.commutation_index(1.0 / 12.0 + 1e-9), 1);

        // the same boundary moves with ψ
        let delayed = SixPulseRectifier::new(1.0 / 12.0, 0.0);
        assert_eq!(delayed.commutation_index(1.0 / 6.0 - 1e-9), 0);
        assert_eq!(delayed.commutation_index(1.0 / 6.0 + 1e-9), 1);
    }

    #[test]
    fn test_voltage_follows_max_line_voltage_for_diodes() {
        use crate::waveform::ThreePhaseVoltages;

        let axis = PhaseAxis::new(0.0, 1.0, 721);
        let phi0 = 0.0;
        let v = ThreePhaseVoltages::generate(&axis, phi0);
        let out = SixPulseRectifier::diode(phi0).waveform(&axis);

        for i in 0..axis.len() {
            let max_line = v
                .compound
                .iter()
                .flat_map(|c| [c[i], -c[i]])
                .fold(f64::NEG_INFINITY, f64::max);
            assert_abs_diff_eq!(out.voltage[i], max_line, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_mean_voltage_matches_samples() {
        for psi in [0.0, 1.0 / 12.0, 0.2] {
            let rectifier = SixPulseRectifier::new(psi, 0.25);
            let axis = PhaseAxis::new(0.0, 1.0, 60001);
            let out = rectifier.waveform(&axis);
            let mean = out.voltage.iter().take(60000).sum::<f64>() / 60000.0;
            assert_relative_eq!(mean, rectifier.ideal_mean_voltage(), max_relative = 1e-3);
        }
    }

    #[test]
    fn test_mean_ratio_diode() {
        // classic 1.35 · U_line for a diode bridge
        let ratio = SixPulseRectifier::diode(0.0).mean_to_line_rms_ratio();
        assert_abs_diff_eq!(ratio, 3.0 * SQRT_2 / PI, epsilon = EPS);
        assert_abs_diff_eq!(ratio, 1.35, epsilon = 0.01);
    }
}
