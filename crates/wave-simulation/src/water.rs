//! Shallow-water waves, v = k·√h
//!
//! A single full-period pulse travels over a flat seabed whose depth the
//! user controls.

use crate::params::{Parameter, Tunable};
use crate::scenario::{Scenario, ScenarioKind, WAVE_ASPECT_RATIO, WAVE_SIMULATION_DT};
use crate::timestep::TimestepConfig;
use std::f64::consts::TAU;
use wave_physics::{shallow_water_speed, BoundaryPolicy, InputPolicy, VelocityField, WaveField};

pub const WATER_POINT_COUNT: usize = 300;
pub const WATER_AMPLITUDE: f64 = 1.0;
pub const MIN_DEPTH: f64 = 0.1;
pub const MAX_DEPTH: f64 = 1.0;

/// Proportionality constant between wave speed and √depth
pub const WATER_SPEED_FACTOR: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Basin {
    pub depth: Parameter,
}

impl Default for Basin {
    fn default() -> Self {
        Self {
            depth: Parameter::new("depth", "h", "m", MIN_DEPTH, MAX_DEPTH),
        }
    }
}

impl VelocityField for Basin {
    fn speed_at(&self, _x: f64) -> f64 {
        shallow_water_speed(WATER_SPEED_FACTOR, self.depth.value)
    }
}

#[derive(Debug, Clone)]
pub struct WaterScenario {
    field: WaveField<Basin>,
}

impl WaterScenario {
    pub fn new() -> Self {
        let field = WaveField::new(WATER_POINT_COUNT, Basin::default())
            .with_pulse_cutoff(TAU)
            .with_oscillator(1.0, WATER_AMPLITUDE)
            .with_input(InputPolicy::Pulse)
            .with_boundary(BoundaryPolicy::Infinite);
        Self { field }
    }

    pub fn field(&self) -> &WaveField<Basin> {
        &self.field
    }

    pub fn basin(&self) -> &Basin {
        self.field.velocity_field()
    }
}

impl Default for WaterScenario {
    fn default() -> Self {
        Self::new()
    }
}

impl Tunable for WaterScenario {
    fn parameters(&self) -> Vec<&Parameter> {
        vec![&self.field.velocity_field().depth]
    }

    fn parameters_mut(&mut self) -> Vec<&mut Parameter> {
        vec![&mut self.field.velocity_field_mut().depth]
    }
}

impl Scenario for WaterScenario {
    fn kind(&self) -> ScenarioKind {
        ScenarioKind::Water
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

    #[test]
    fn test_defaults() {
        let scenario = WaterScenario::new();
        let field = scenario.field();
        assert_eq!(field.point_count(), WATER_POINT_COUNT);
        assert_eq!(field.damping, 0.0);
        assert_eq!(field.pulse_cutoff, TAU);
        assert_relative_eq!(field.pulse_window(), 1.0);
    }

    #[test]
    fn test_speed_follows_depth() {
        let mut scenario = WaterScenario::new();
        assert_relative_eq!(scenario.basin().speed_at(0.5), MIN_DEPTH.sqrt());

        scenario.set_parameter("depth", 1.0).unwrap();
        assert_relative_eq!(scenario.basin().speed_at(0.5), 1.0);
    }

    #[test]
    fn test_pulse_is_one_full_period() {
        let mut scenario = WaterScenario::new();
        scenario.pulse();

        for _ in 0..250 {
            scenario.simulate();
        }
        // Quarter period: crest at the left end
        assert!(scenario.field().positions()[0] > 0.99);
        assert!(scenario.field().is_pulse_active());

        for _ in 0..800 {
            scenario.simulate();
        }
        assert!(!scenario.field().is_pulse_active());
    }
}
