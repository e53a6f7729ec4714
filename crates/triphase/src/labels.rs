//! Simple and compound voltage names

use crate::config::VoltageLabels;
use crate::waveform::next_phase;

/// Display names, in phase order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoltageNames {
    /// `prefix + label[k]`
    pub simple: [String; 3],
    /// `prefix + label[k] + label[k + 1 mod 3]`
    pub compound: [String; 3],
}

impl VoltageNames {
    pub fn from_labels(labels: &VoltageLabels) -> Self {
        let prefix = &labels.prefix;
        let phases = &labels.phases;

        VoltageNames {
            simple: std::array::from_fn(|k| format!("{prefix}{}", phases[k])),
            compound: std::array::from_fn(|k| {
                format!("{prefix}{}{}", phases[k], phases[next_phase(k)])
            }),
        }
    }
}
