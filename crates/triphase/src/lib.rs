//! Three-phase voltage system computations
//!
//! This crate provides:
//! - Simple and compound (line-to-line) voltages over a configurable phase window
//! - The six-pulse (thyristor or diode) bridge rectified voltage
//! - Fraction-of-π labels for phase ticks and annotations
//! - A renderer-agnostic chart model tying everything together
//!
//! All phases and angles are normalized by 2π: one period has length 1.

pub mod chart;
pub mod config;
pub mod error;
pub mod fraction;
pub mod labels;
pub mod phase;
pub mod rectifier;
pub mod waveform;

pub use chart::*;
pub use config::*;
pub use error::*;
pub use fraction::*;
pub use labels::*;
pub use phase::*;
pub use rectifier::*;
pub use waveform::*;
