//! Fraction-of-π labels for phases
//!
//! A phase normalized by 2π is rewritten as a multiple of π and matched against
//! the denominators 1, 2, 3 and 6, in that order. The first denominator that
//! turns the value into an integer (within a tolerance) wins, so the label is
//! always built from the simplest candidate rather than a reduced fraction.

use std::fmt;

/// Tolerance on the fractional part when testing for an integer
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Candidate denominators, searched in order
pub const DENOMINATORS: [u32; 4] = [1, 2, 3, 6];

/// A phase expressed as a fraction of π
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AngleLabel {
    Zero,
    /// `count · π`
    Multiple { negative: bool, count: u64 },
    /// `numerator / denominator · π`
    Fraction {
        negative: bool,
        numerator: u64,
        denominator: u32,
    },
    /// Not a multiple of π/6; carries the value in units of π
    Unrepresentable(f64),
}

impl AngleLabel {
    pub fn is_representable(&self) -> bool {
        !matches!(self, AngleLabel::Unrepresentable(_))
    }

    /// LaTeX math markup, delimited by `$`
    pub fn to_latex(&self) -> String {
        match *self {
            AngleLabel::Zero => "$0$".to_string(),
            AngleLabel::Multiple { negative, count } => {
                let sign = sign(negative);
                if count == 1 {
                    format!("${sign}\\pi$")
                } else {
                    format!("${sign}{count}\\pi$")
                }
            }
            AngleLabel::Fraction {
                negative,
                numerator,
                denominator,
            } => format!("${}\\frac{{{numerator}}}{{{denominator}}}\\pi$", sign(negative)),
            AngleLabel::Unrepresentable(value) => format!("${value:.2}\\pi$"),
        }
    }
}

fn sign(negative: bool) -> &'static str {
    if negative {
        "-"
    } else {
        ""
    }
}

impl fmt::Display for AngleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            AngleLabel::Zero => write!(f, "0"),
            AngleLabel::Multiple { negative, count } => {
                let sign = sign(negative);
                if count == 1 {
                    write!(f, "{sign}π")
                } else {
                    write!(f, "{sign}{count}π")
                }
            }
            AngleLabel::Fraction {
                negative,
                numerator,
                denominator,
            } => {
                let sign = sign(negative);
                if numerator == 1 {
                    write!(f, "{sign}π/{denominator}")
                } else {
                    write!(f, "{sign}{numerator}π/{denominator}")
                }
            }
            AngleLabel::Unrepresentable(value) => write!(f, "{value:.2}π"),
        }
    }
}

/// Turns phases into [`AngleLabel`]s
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractionFormatter {
    pub tolerance: f64,
}

impl Default for FractionFormatter {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl FractionFormatter {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    fn is_integer(&self, value: f64) -> bool {
        (value - value.round()).abs() <= self.tolerance
    }

    /// Classify `phi` (normalized by 2π)
    pub fn classify(&self, phi: f64) -> AngleLabel {
        // now normalized by π
        let p = 2.0 * phi;

        let found = DENOMINATORS
            .iter()
            .copied()
            .find(|&den| self.is_integer(p * den as f64));

        let Some(denominator) = found else {
            return AngleLabel::Unrepresentable(p);
        };

        let num = (p * denominator as f64).round();
        let negative = num < 0.0;
        let magnitude = num.abs() as u64;

        match (denominator, magnitude) {
            (_, 0) => AngleLabel::Zero,
            (1, count) => AngleLabel::Multiple { negative, count },
            (denominator, numerator) => AngleLabel::Fraction {
                negative,
                numerator,
                denominator,
            },
        }
    }

    /// Display label for `phi`, warning when it is not a multiple of π/6
    pub fn format(&self, phi: f64) -> String {
        let label = self.classify(phi);
        if let AngleLabel::Unrepresentable(value) = label {
            log::warn!("phi={:.2}π is not a multiple of π/6, using a decimal label", value);
        }
        label.to_string()
    }
}
