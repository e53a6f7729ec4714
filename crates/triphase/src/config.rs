//! Run configuration
//!
//! Every phase and angle is normalized by 2π (one period has length 1).

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::fraction::DEFAULT_TOLERANCE;
use crate::phase::PhaseAxis;

/// Naming scheme for the three phases: `prefix` + phase label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoltageLabels {
    pub prefix: String,
    /// Phase labels, in phase order. Order also defines compound adjacency.
    pub phases: [String; 3],
}

impl VoltageLabels {
    pub fn new(prefix: &str, phases: [&str; 3]) -> Self {
        VoltageLabels {
            prefix: prefix.to_string(),
            phases: phases.map(str::to_string),
        }
    }
}

impl Default for VoltageLabels {
    fn default() -> Self {
        VoltageLabels::new("V", ["a", "b", "c"])
    }
}

/// Which of the two figure layouts to draw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartStyle {
    /// Simple voltages dashed blue, compound voltages dotted green.
    Bichrome,
    /// Simple voltages in blue/green/red, compound voltages and their
    /// negations dashed black, rectified voltage bold black.
    #[default]
    Quadrichrome,
}

/// Parameters of a single run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriphaseConfig {
    /// Lower bound of the displayed phase window
    pub theta_min: f64,
    /// Upper bound of the displayed phase window (may exceed one period)
    pub theta_max: f64,
    /// Phase origin applied to all three simple voltages
    pub phi0: f64,
    pub labels: VoltageLabels,
    /// Draw the six-pulse rectified voltage and annotate ψ in the title
    pub rectifier_enabled: bool,
    /// Firing delay angle ψ, expected in [0, 1/2]
    pub psi: f64,
    /// Sample density along the phase axis
    pub samples_per_period: f64,
    /// Spacing between phase ticks (1/12 puts a tick every π/6)
    pub tick_increment: f64,
    /// Tolerance used when recognizing a phase as a fraction of π
    pub fraction_tolerance: f64,
    pub style: ChartStyle,
}

impl Default for TriphaseConfig {
    fn default() -> Self {
        Self {
            theta_min: 0.0,
            theta_max: 1.0 + 1.0 / 6.0,
            phi0: 0.25,
            labels: VoltageLabels::default(),
            rectifier_enabled: true,
            psi: 1.0 / 12.0,
            samples_per_period: 500.0,
            tick_increment: 1.0 / 12.0,
            fraction_tolerance: DEFAULT_TOLERANCE,
            style: ChartStyle::default(),
        }
    }
}

impl TriphaseConfig {
    /// Set the displayed phase window
    pub fn with_window(mut self, theta_min: f64, theta_max: f64) -> Self {
        self.theta_min = theta_min;
        self.theta_max = theta_max;
        self
    }

    /// Set the phase origin
    pub fn with_phase_origin(mut self, phi0: f64) -> Self {
        self.phi0 = phi0;
        self
    }

    /// Set the voltage naming scheme
    pub fn with_labels(mut self, labels: VoltageLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Enable the rectified voltage with firing angle `psi`
    pub fn with_rectifier(mut self, psi: f64) -> Self {
        self.rectifier_enabled = true;
        self.psi = psi;
        self
    }

    /// Disable the rectified voltage
    pub fn without_rectifier(mut self) -> Self {
        self.rectifier_enabled = false;
        self
    }

    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the fraction recognition tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.fraction_tolerance = tolerance;
        self
    }

    /// Number of samples along the phase axis
    pub fn sample_count(&self) -> usize {
        PhaseAxis::sample_count(self.theta_min, self.theta_max, self.samples_per_period)
    }

    /// Whether ψ lies in the usual [0, 1/2] firing range.
    ///
    /// Values outside still produce a waveform, so this is not part of
    /// [`TriphaseConfig::validate`].
    pub fn psi_in_range(&self) -> bool {
        (0.0..=0.5).contains(&self.psi)
    }

    /// Check that the configuration can produce a chart
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("theta_min", self.theta_min),
            ("theta_max", self.theta_max),
            ("phi0", self.phi0),
            ("psi", self.psi),
            ("samples_per_period", self.samples_per_period),
            ("tick_increment", self.tick_increment),
            ("fraction_tolerance", self.fraction_tolerance),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }

        if self.theta_max <= self.theta_min {
            return Err(ConfigError::EmptyWindow {
                min: self.theta_min,
                max: self.theta_max,
            });
        }
        if self.sample_count() == 0 {
            return Err(ConfigError::NoSamples {
                min: self.theta_min,
                max: self.theta_max,
                samples_per_period: self.samples_per_period,
            });
        }
        if self.tick_increment <= 0.0 {
            return Err(ConfigError::TickIncrement(self.tick_increment));
        }
        if self.fraction_tolerance < 0.0 {
            return Err(ConfigError::Tolerance(self.fraction_tolerance));
        }
        Ok(())
    }
}
