//! Common interface of the demos and the selector that owns the active one

use crate::params::{ParameterError, Tunable};
use crate::timestep::TimestepConfig;
use crate::{OrbitScenario, RefractionScenario, TensionScenario, WaterScenario};
use wave_physics::{VelocityField, WaveField};

/// Simulation step used by every wave scenario
pub const WAVE_SIMULATION_DT: f64 = 0.001;

/// Width / height of the wave scenes
pub const WAVE_ASPECT_RATIO: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioKind {
    Refraction,
    Tension,
    Water,
    Orbit,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 4] = [Self::Refraction, Self::Tension, Self::Water, Self::Orbit];

    pub fn title(self) -> &'static str {
        match self {
            Self::Refraction => "Refraction",
            Self::Tension => "Tension and density",
            Self::Water => "Shallow water",
            Self::Orbit => "Centripetal force",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Refraction => {
                "A pulse crosses from one string into another of different density."
            }
            Self::Tension => "Wave speed grows with tension and falls with linear density.",
            Self::Water => "Waves in shallow water travel faster over deeper beds.",
            Self::Orbit => "A constant pull towards the centre bends the path into a circle.",
        }
    }
}

/// One interactive demo
///
/// The driver calls [`Scenario::simulate`] once per fixed step; the UI only
/// touches the scenario through parameter changes and the optional wave
/// controls.
pub trait Scenario: Tunable {
    fn kind(&self) -> ScenarioKind;

    fn timestep(&self) -> TimestepConfig;

    fn aspect_ratio(&self) -> f32;

    fn simulate(&mut self);

    /// Forward a slider change; returns the stored physical value
    fn set_parameter(&mut self, key: &str, t: f64) -> Result<f64, ParameterError> {
        self.set_normalized(key, t)
    }

    /// Return to the state the scenario was built with (parameters kept)
    fn reset(&mut self);

    fn wave(&self) -> Option<&WaveField<dyn VelocityField>> {
        None
    }

    fn wave_mut(&mut self) -> Option<&mut WaveField<dyn VelocityField>> {
        None
    }

    /// Send a pulse down the string, if this scenario has one
    fn pulse(&mut self) {
        if let Some(wave) = self.wave_mut() {
            wave.pulse();
        }
    }
}

/// The active demo
#[derive(Debug, Clone)]
pub enum Demo {
    Refraction(RefractionScenario),
    Tension(TensionScenario),
    Water(WaterScenario),
    Orbit(OrbitScenario),
}

impl Demo {
    pub fn new(kind: ScenarioKind) -> Self {
        log::info!("Starting scenario: {}", kind.title());
        match kind {
            ScenarioKind::Refraction => Self::Refraction(RefractionScenario::new()),
            ScenarioKind::Tension => Self::Tension(TensionScenario::new()),
            ScenarioKind::Water => Self::Water(WaterScenario::new()),
            ScenarioKind::Orbit => Self::Orbit(OrbitScenario::new()),
        }
    }

    pub fn kind(&self) -> ScenarioKind {
        self.scenario().kind()
    }

    pub fn scenario(&self) -> &dyn Scenario {
        match self {
            Self::Refraction(s) => s,
            Self::Tension(s) => s,
            Self::Water(s) => s,
            Self::Orbit(s) => s,
        }
    }

    pub fn scenario_mut(&mut self) -> &mut dyn Scenario {
        match self {
            Self::Refraction(s) => s,
            Self::Tension(s) => s,
            Self::Water(s) => s,
            Self::Orbit(s) => s,
        }
    }
}
