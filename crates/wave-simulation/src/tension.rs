//! Wave speed on a uniform string, v = √(T / μ)
//!
//! Tension and linear density are tuned independently; the string starts at
//! rest and waves are launched with the pulse button.

use crate::params::{Parameter, Tunable};
use crate::refraction::{MAX_DENSITY, MIN_DENSITY};
use crate::scenario::{Scenario, ScenarioKind, WAVE_ASPECT_RATIO, WAVE_SIMULATION_DT};
use crate::timestep::TimestepConfig;
use wave_physics::{string_speed, VelocityField, WaveField};

pub const TENSION_POINT_COUNT: usize = 500;
pub const TENSION_DAMPING: f64 = 0.2;
pub const TENSION_AMPLITUDE: f64 = 0.5;
pub const MIN_TENSION: f64 = 0.05;
pub const MAX_TENSION: f64 = 0.25;

#[derive(Debug, Clone, PartialEq)]
pub struct StringMedium {
    pub tension: Parameter,
    pub density: Parameter,
}

impl Default for StringMedium {
    fn default() -> Self {
        Self {
            tension: Parameter::new("tension", "T", "N", MIN_TENSION, MAX_TENSION),
            density: Parameter::new("density", "μ", "kg/m", MIN_DENSITY, MAX_DENSITY),
        }
    }
}

impl VelocityField for StringMedium {
    fn speed_at(&self, _x: f64) -> f64 {
        string_speed(self.tension.value, self.density.value)
    }
}

#[derive(Debug, Clone)]
pub struct TensionScenario {
    field: WaveField<StringMedium>,
}

impl TensionScenario {
    pub fn new() -> Self {
        let field = WaveField::new(TENSION_POINT_COUNT, StringMedium::default())
            .with_damping(TENSION_DAMPING)
            .with_oscillator(1.0, TENSION_AMPLITUDE);
        Self { field }
    }

    pub fn field(&self) -> &WaveField<StringMedium> {
        &self.field
    }

    pub fn medium(&self) -> &StringMedium {
        self.field.velocity_field()
    }
}

impl Default for TensionScenario {
    fn default() -> Self {
        Self::new()
    }
}

impl Tunable for TensionScenario {
    fn parameters(&self) -> Vec<&Parameter> {
        let medium = self.field.velocity_field();
        vec![&medium.tension, &medium.density]
    }

    fn parameters_mut(&mut self) -> Vec<&mut Parameter> {
        let medium = self.field.velocity_field_mut();
        vec![&mut medium.tension, &mut medium.density]
    }
}

impl Scenario for TensionScenario {
    fn kind(&self) -> ScenarioKind {
        ScenarioKind::Tension
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use wave_physics::{BoundaryPolicy, InputPolicy};

    fn far_end_amplitude(tension: f64, density: f64) -> f64 {
        let mut scenario = TensionScenario::new();
        scenario.set_parameter("tension", tension).unwrap();
        scenario.set_parameter("density", density).unwrap();
        scenario.pulse();
        for _ in 0..1000 {
            scenario.simulate();
        }
        scenario.field().positions()[400..]
            .iter()
            .fold(0.0, |acc: f64, y| acc.max(y.abs()))
    }

    #[test]
    fn test_starts_at_rest_without_input() {
        let scenario = TensionScenario::new();
        assert_eq!(scenario.field().input, InputPolicy::None);
        assert_eq!(scenario.field().boundary, BoundaryPolicy::Infinite);
        assert_eq!(scenario.field().point_count(), TENSION_POINT_COUNT);
    }

    #[test]
    fn test_speed_from_tension_and_density() {
        let mut scenario = TensionScenario::new();
        assert_relative_eq!(scenario.medium().speed_at(0.3), 0.5, epsilon = 1e-12);

        scenario.set_parameter("tension", 1.0).unwrap();
        assert_relative_eq!(scenario.medium().speed_at(0.3), (1.25f64).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_faster_string_carries_pulse_further() {
        // Tight, light string: √(0.25/0.2) ≈ 1.1, reaches x = 0.8 within 1 s
        assert!(far_end_amplitude(1.0, 0.0) > 0.1);
        // Slack, heavy string: √(0.05/1) ≈ 0.22, still near the left end
        assert_eq!(far_end_amplitude(0.0, 1.0), 0.0);
    }
}
