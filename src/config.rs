//! Command line configuration

use clap::{Parser, ValueEnum};
use wave_simulation::ScenarioKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScenarioArg {
    Refraction,
    Tension,
    Water,
    Orbit,
}

impl From<ScenarioArg> for ScenarioKind {
    fn from(arg: ScenarioArg) -> Self {
        match arg {
            ScenarioArg::Refraction => ScenarioKind::Refraction,
            ScenarioArg::Tension => ScenarioKind::Tension,
            ScenarioArg::Water => ScenarioKind::Water,
            ScenarioArg::Orbit => ScenarioKind::Orbit,
        }
    }
}

/// Interactive wave and orbit demos
#[derive(Debug, Parser)]
#[command(name = "wave-demos", version, about, long_about = None)]
pub struct Args {
    /// Demo shown at startup
    #[arg(short, long, value_enum, default_value_t = ScenarioArg::Refraction)]
    pub scenario: ScenarioArg,

    /// Longest frame the simulation catches up on, in seconds
    #[arg(long, default_value_t = 1.0)]
    pub max_frame_dt: f64,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1600)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 900)]
    pub height: u32,

    /// Segments per tessellated circle
    #[arg(long, default_value_t = wave_renderer::DEFAULT_CIRCLE_SEGMENTS)]
    pub segments: u32,
}
