//! Three-phase sinusoidal voltage chart
//!
//! Draws the simple and compound voltages of a three-phase system over an
//! adjustable phase window, plus the output of a six-pulse rectifier bridge
//! with firing delay ψ (ψ = 0 gives the diode bridge).
//!
//! Parameters are edited below. All phases and angles are normalized by 2π,
//! so one period has length 1.

mod export;
mod viewer;

use log::{debug, info, warn, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use triphase::{run_summary, Chart, ChartStyle, TriphaseConfig, VoltageLabels};

// ===== Adjustable parameters =====

const THETA_MIN: f64 = 0.0; // phase window start
const THETA_MAX: f64 = 1.0 + 1.0 / 6.0; // phase window end [1 for one period]
const PHI0: f64 = 0.25; // phase origin (0 works fine, 1/4 turns the sines into cosines)

const V_PREFIX: &str = "V";
const V_LABELS: [&str; 3] = ["a", "b", "c"];
// const V_LABELS: [&str; 3] = ["1", "2", "3"];

const RECTIFIER_ENABLED: bool = true;
const PSI_RECTIFIER: f64 = 1.0 / 12.0; // firing angle ψ, between 0 and 1/2

const STYLE: ChartStyle = ChartStyle::Quadrichrome;

// Also write the figure to rectifier_psi_<2ψ>pi.png
const SAVE_FIGURE: bool = false;

const LOG_LEVEL: LevelFilter = LevelFilter::Info;

fn config() -> TriphaseConfig {
    let config = TriphaseConfig::default()
        .with_window(THETA_MIN, THETA_MAX)
        .with_phase_origin(PHI0)
        .with_labels(VoltageLabels::new(V_PREFIX, V_LABELS))
        .with_style(STYLE);

    if RECTIFIER_ENABLED {
        config.with_rectifier(PSI_RECTIFIER)
    } else {
        config.without_rectifier()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    TermLogger::init(
        LOG_LEVEL,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let config = config();
    debug!("configuration: {}", serde_json::to_string(&config)?);
    if config.rectifier_enabled && !config.psi_in_range() {
        warn!(
            "firing angle ψ = {:.3}π is outside [0, π], the waveform is drawn anyway",
            config.psi * 2.0
        );
    }

    let chart = Chart::from_config(&config)?;
    for line in run_summary(&config) {
        info!("{}", line);
    }

    if SAVE_FIGURE {
        let path = export::figure_path(config.psi);
        export::save_png(&chart, &path)?;
        info!("wrote {}", path.display());
    }

    viewer::show(chart)?;
    Ok(())
}
