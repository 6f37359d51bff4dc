//! Two strings of different density joined in the middle
//!
//! A pulse launched from the left partially reflects and partially transmits
//! at the junction; the transmitted part travels at the speed of the second
//! medium.

use crate::params::{Parameter, Tunable};
use crate::scenario::{Scenario, ScenarioKind, WAVE_ASPECT_RATIO, WAVE_SIMULATION_DT};
use crate::timestep::TimestepConfig;
use wave_physics::{string_speed, BoundaryPolicy, InputPolicy, VelocityField, WaveField};

pub const REFRACTION_POINT_COUNT: usize = 400;
pub const REFRACTION_DAMPING: f64 = 0.3;
pub const REFRACTION_AMPLITUDE: f64 = 0.7;
pub const REFRACTION_TENSION: f64 = 0.05;
pub const MIN_DENSITY: f64 = 0.2;
pub const MAX_DENSITY: f64 = 1.0;

/// Position of the junction between the two media
pub const INTERFACE_POSITION: f64 = 0.5;

/// Piecewise-constant density, discontinuous at [`INTERFACE_POSITION`]
#[derive(Debug, Clone, PartialEq)]
pub struct TwoMedia {
    pub tension: f64,
    pub left_density: Parameter,
    pub right_density: Parameter,
}

impl Default for TwoMedia {
    fn default() -> Self {
        Self {
            tension: REFRACTION_TENSION,
            left_density: Parameter::new("density_left", "μ₁", "kg/m", MIN_DENSITY, MAX_DENSITY),
            right_density: Parameter::new("density_right", "μ₂", "kg/m", MIN_DENSITY, MAX_DENSITY),
        }
    }
}

impl TwoMedia {
    pub fn density_at(&self, x: f64) -> f64 {
        if x < INTERFACE_POSITION {
            self.left_density.value
        } else {
            self.right_density.value
        }
    }
}

impl VelocityField for TwoMedia {
    fn speed_at(&self, x: f64) -> f64 {
        string_speed(self.tension, self.density_at(x))
    }
}

#[derive(Debug, Clone)]
pub struct RefractionScenario {
    field: WaveField<TwoMedia>,
}

impl RefractionScenario {
    pub fn new() -> Self {
        let field = WaveField::new(REFRACTION_POINT_COUNT, TwoMedia::default())
            .with_damping(REFRACTION_DAMPING)
            .with_oscillator(1.0, REFRACTION_AMPLITUDE)
            .with_input(InputPolicy::Pulse)
            .with_boundary(BoundaryPolicy::Infinite);
        Self { field }
    }

    pub fn field(&self) -> &WaveField<TwoMedia> {
        &self.field
    }

    pub fn media(&self) -> &TwoMedia {
        self.field.velocity_field()
    }
}

impl Default for RefractionScenario {
    fn default() -> Self {
        Self::new()
    }
}

impl Tunable for RefractionScenario {
    fn parameters(&self) -> Vec<&Parameter> {
        let media = self.field.velocity_field();
        vec![&media.left_density, &media.right_density]
    }

    fn parameters_mut(&mut self) -> Vec<&mut Parameter> {
        let media = self.field.velocity_field_mut();
        vec![&mut media.left_density, &mut media.right_density]
    }
}

impl Scenario for RefractionScenario {
    fn kind(&self) -> ScenarioKind {
        ScenarioKind::Refraction
    }

    fn timestep(&self) -> TimestepConfig {
        TimestepConfig {
            simulation_dt: WAVE_SIMULATION_DT,
            ..Default::default()
        }
    }

    fn aspect_ratio(&self) -> f32 {
        WAVE_ASPECT_RATIO
    }

    fn simulate(&mut self) {
        self.field.step(WAVE_SIMULATION_DT);
    }

    fn reset(&mut self) {
        self.field.reset();
    }

    fn wave(&self) -> Option<&WaveField<dyn VelocityField>> {
        Some(&self.field as &WaveField<dyn VelocityField>)
    }

    fn wave_mut(&mut self) -> Option<&mut WaveField<dyn VelocityField>> {
        Some(&mut self.field as &mut WaveField<dyn VelocityField>)
    }
}
