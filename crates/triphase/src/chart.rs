//! Renderer-agnostic chart model
//!
//! Everything a backend needs to draw the figure: sampled curves with their
//! visual encoding, phase ticks with fraction-of-π labels, title and legend
//! placement. Backends only map these onto their own primitives.

use ndarray::Array1;

use crate::config::{ChartStyle, TriphaseConfig};
use crate::error::TriphaseError;
use crate::fraction::FractionFormatter;
use crate::labels::VoltageNames;
use crate::phase::{tick_positions, PhaseAxis};
use crate::rectifier::{RectifiedVoltage, SixPulseRectifier};
use crate::waveform::ThreePhaseVoltages;

pub const TITLE: &str = "Three-phase sinusoidal voltage system";
pub const X_LABEL: &str = "phase θ";

/// Headroom added above and below the tallest curve
const Y_MARGIN: f64 = 0.1;
/// Matching tolerance when looking up the label of a tick
const TICK_MATCH: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesColor {
    Blue,
    Green,
    Red,
    Black,
}

impl SeriesColor {
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            SeriesColor::Blue => (0, 0, 255),
            SeriesColor::Green => (0, 128, 0),
            SeriesColor::Red => (255, 0, 0),
            SeriesColor::Black => (0, 0, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    Solid,
    Dashed,
    Dotted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    pub color: SeriesColor,
    pub stroke: Stroke,
    pub width: f32,
}

impl SeriesStyle {
    const fn new(color: SeriesColor, stroke: Stroke, width: f32) -> Self {
        Self {
            color,
            stroke,
            width,
        }
    }
}

/// One sampled curve, aligned with [`Chart::phase`]
#[derive(Debug, Clone)]
pub struct Series {
    pub name: String,
    pub values: Array1<f64>,
    pub style: SeriesStyle,
    pub in_legend: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendCorner {
    UpperRight,
    LowerRight,
}

#[derive(Debug, Clone)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub phase: Array1<f64>,
    pub series: Vec<Series>,
    pub ticks: Vec<Tick>,
    pub legend_corner: LegendCorner,
}

const SIMPLE_COLORS: [SeriesColor; 3] = [SeriesColor::Blue, SeriesColor::Green, SeriesColor::Red];
const COMPOUND: SeriesStyle = SeriesStyle::new(SeriesColor::Black, Stroke::Dashed, 1.0);
const RECTIFIED: SeriesStyle = SeriesStyle::new(SeriesColor::Black, Stroke::Solid, 2.0);
const BICHROME_SIMPLE: SeriesStyle = SeriesStyle::new(SeriesColor::Blue, Stroke::Dashed, 1.0);
const BICHROME_COMPOUND: SeriesStyle = SeriesStyle::new(SeriesColor::Green, Stroke::Dotted, 2.0);

impl Chart {
    /// Validate `config`, then compute every curve and label of the figure
    pub fn from_config(config: &TriphaseConfig) -> Result<Self, TriphaseError> {
        config.validate()?;

        let axis = PhaseAxis::with_density(
            config.theta_min,
            config.theta_max,
            config.samples_per_period,
        );
        let voltages = ThreePhaseVoltages::generate(&axis, config.phi0);
        let rectified = config
            .rectifier_enabled
            .then(|| SixPulseRectifier::new(config.psi, config.phi0).waveform(&axis));
        let names = VoltageNames::from_labels(&config.labels);
        let formatter = FractionFormatter::new(config.fraction_tolerance);

        Ok(Self::build(
            config,
            &axis,
            &voltages,
            rectified.as_ref(),
            &names,
            &formatter,
        ))
    }

    /// Assemble the chart from already computed curves
    pub fn build(
        config: &TriphaseConfig,
        axis: &PhaseAxis,
        voltages: &ThreePhaseVoltages,
        rectified: Option<&RectifiedVoltage>,
        names: &VoltageNames,
        formatter: &FractionFormatter,
    ) -> Self {
        let mut series = Vec::new();
        let mut title = TITLE.to_string();

        let legend_corner = match config.style {
            ChartStyle::Quadrichrome => {
                for k in 0..3 {
                    series.push(Series {
                        name: names.simple[k].clone(),
                        values: voltages.simple[k].clone(),
                        style: SeriesStyle::new(SIMPLE_COLORS[k], Stroke::Solid, 2.0),
                        in_legend: true,
                    });
                }
                for k in 0..3 {
                    series.push(Series {
                        name: names.compound[k].clone(),
                        values: voltages.compound[k].clone(),
                        style: COMPOUND,
                        in_legend: false,
                    });
                }
                for k in 0..3 {
                    series.push(Series {
                        name: format!("-{}", names.compound[k]),
                        values: -&voltages.compound[k],
                        style: COMPOUND,
                        in_legend: false,
                    });
                }
                if let Some(rectified) = rectified {
                    series.push(Series {
                        name: "rectified".to_string(),
                        values: rectified.voltage.clone(),
                        style: RECTIFIED,
                        in_legend: false,
                    });
                    title.push_str(&format!(", ψ = {}", formatter.format(config.psi)));
                }
                LegendCorner::LowerRight
            }
            ChartStyle::Bichrome => {
                for k in 0..3 {
                    series.push(Series {
                        name: names.simple[k].clone(),
                        values: voltages.simple[k].clone(),
                        style: BICHROME_SIMPLE,
                        in_legend: true,
                    });
                }
                for k in 0..3 {
                    series.push(Series {
                        name: names.compound[k].clone(),
                        values: voltages.compound[k].clone(),
                        style: BICHROME_COMPOUND,
                        in_legend: true,
                    });
                }
                LegendCorner::UpperRight
            }
        };

        let ticks = tick_positions(config.theta_min, config.theta_max, config.tick_increment)
            .into_iter()
            .map(|position| Tick {
                position,
                label: formatter.format(position),
            })
            .collect();

        Chart {
            title,
            x_label: X_LABEL.to_string(),
            phase: axis.theta.clone(),
            series,
            ticks,
            legend_corner,
        }
    }

    /// Phase range covered by the samples
    pub fn x_bounds(&self) -> (f64, f64) {
        match self.phase.len() {
            0 => (0.0, 1.0),
            n => (self.phase[0], self.phase[n - 1]),
        }
    }

    /// Symmetric vertical range covering every series
    pub fn y_bounds(&self) -> (f64, f64) {
        let peak = self
            .series
            .iter()
            .flat_map(|s| s.values.iter())
            .fold(0.0_f64, |acc, v| acc.max(v.abs()));
        let half = if peak > 0.0 { peak * (1.0 + Y_MARGIN) } else { 1.0 };
        (-half, half)
    }

    pub fn legend_entries(&self) -> Vec<&str> {
        self.series
            .iter()
            .filter(|s| s.in_legend)
            .map(|s| s.name.as_str())
            .collect()
    }

    /// Label of the tick placed at `position`, if any
    pub fn tick_label(&self, position: f64) -> Option<&str> {
        find_tick_label(&self.ticks, position)
    }

    pub fn tick_positions(&self) -> Vec<f64> {
        self.ticks.iter().map(|t| t.position).collect()
    }

    /// `(phase, value)` pairs of a series
    pub fn points<'a>(
        &'a self,
        series: &'a Series,
    ) -> impl Iterator<Item = (f64, f64)> + Clone + 'a {
        self.phase.iter().copied().zip(series.values.iter().copied())
    }
}

/// Look up a tick label by position
pub fn find_tick_label(ticks: &[Tick], position: f64) -> Option<&str> {
    ticks
        .iter()
        .find(|t| (t.position - position).abs() <= TICK_MATCH * position.abs().max(1.0))
        .map(|t| t.label.as_str())
}

/// Informational lines describing what a run plots
pub fn run_summary(config: &TriphaseConfig) -> Vec<String> {
    let names = VoltageNames::from_labels(&config.labels);
    let mut lines = vec![
        format!("plotting simple voltages {}", names.simple.join(", ")),
        format!("and compound voltages {}", names.compound.join(", ")),
    ];

    if config.rectifier_enabled && config.style == ChartStyle::Quadrichrome {
        let rectifier = SixPulseRectifier::new(config.psi, config.phi0);
        lines.push(format!(
            "and rectified voltage for ψ = {:.3}π (ideal mean {:.3})",
            config.psi * 2.0,
            rectifier.ideal_mean_voltage()
        ));
    }
    lines
}
