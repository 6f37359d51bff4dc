//! Centripetal force demo
//!
//! The full trajectory is computed up front from the slider values and then
//! replayed one state per tick, fading out as it goes. After the last state
//! the demo waits briefly and starts over.

use crate::params::{Parameter, ParameterError, Tunable};
use crate::scenario::{Scenario, ScenarioKind};
use crate::timestep::TimestepConfig;
use wave_physics::{OrbitSetup, OrbitState, Trajectory};

/// Playback advances one trajectory state per tick
pub const ORBIT_TICK: f64 = 1.0 / 60.0;

/// Pause between the end of the playback and its restart
pub const ORBIT_RESTART_DELAY: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct OrbitScenario {
    pub force: Parameter,
    pub speed: Parameter,
    pub radius: Parameter,
    pub mass: Parameter,

    trajectory: Trajectory,
    index: usize,
    idle_time: f64,
    held: bool,
}

impl OrbitScenario {
    pub fn new() -> Self {
        let defaults = OrbitSetup::default();
        let mut scenario = Self {
            force: Parameter::new("force", "F", "N", 0.0, 5.0).with_value(defaults.force),
            speed: Parameter::new("speed", "v", "m/s", 0.1, 3.0).with_value(defaults.speed),
            radius: Parameter::new("radius", "r", "m", 0.5, 4.0).with_value(defaults.radius),
            mass: Parameter::new("mass", "m", "kg", 0.5, 5.0).with_value(defaults.mass),
            trajectory: Trajectory::default(),
            index: 0,
            idle_time: 0.0,
            held: false,
        };
        scenario.recalculate();
        scenario
    }

    pub fn setup(&self) -> OrbitSetup {
        OrbitSetup {
            force: self.force.value,
            speed: self.speed.value,
            radius: self.radius.value,
            mass: self.mass.value,
        }
    }

    /// Recompute the trajectory and rewind the playback
    pub fn recalculate(&mut self) {
        self.trajectory = Trajectory::compute(&self.setup());
        self.index = 0;
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// State currently shown by the playback, `None` between runs
    pub fn current(&self) -> Option<&OrbitState> {
        self.trajectory.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Opacity of the moving particle, fading towards the end of the run
    pub fn playback_alpha(&self) -> f32 {
        let progress = self.index as f32 / self.trajectory.len().max(1) as f32;
        0.75 * (1.0 - progress).max(0.0).powf(1.5)
    }

    /// Freeze the playback while the user is dragging a control
    pub fn set_held(&mut self, held: bool) {
        self.held = held;
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}

impl Default for OrbitScenario {
    fn default() -> Self {
        Self::new()
    }
}

impl Tunable for OrbitScenario {
    fn parameters(&self) -> Vec<&Parameter> {
        vec![&self.force, &self.speed, &self.radius, &self.mass]
    }

    fn parameters_mut(&mut self) -> Vec<&mut Parameter> {
        vec![&mut self.force, &mut self.speed, &mut self.radius, &mut self.mass]
    }
}

impl Scenario for OrbitScenario {
    fn kind(&self) -> ScenarioKind {
        ScenarioKind::Orbit
    }

    fn timestep(&self) -> TimestepConfig {
        TimestepConfig {
            simulation_dt: ORBIT_TICK,
            ..Default::default()
        }
    }

    fn aspect_ratio(&self) -> f32 {
        1.0
    }

    fn simulate(&mut self) {
        if self.held {
            return;
        }

        if self.index < self.trajectory.len() {
            self.index += 1;
        } else {
            self.idle_time += ORBIT_TICK;
            if self.idle_time > ORBIT_RESTART_DELAY {
                self.idle_time = 0.0;
                self.index = 0;
            }
        }
    }

    fn set_parameter(&mut self, key: &str, t: f64) -> Result<f64, ParameterError> {
        let value = self.set_normalized(key, t)?;
        self.recalculate();
        Ok(value)
    }

    fn reset(&mut self) {
        self.idle_time = 0.0;
        self.recalculate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_trajectory() {
        let scenario = OrbitScenario::new();
        assert!(!scenario.trajectory().is_empty());
        assert_eq!(scenario.trajectory().initial().unwrap().position.x, -1.0);
        assert_eq!(scenario.index(), 0);
        assert_eq!(scenario.playback_alpha(), 0.75);
    }

    #[test]
    fn test_playback_restarts_after_delay() {
        let mut scenario = OrbitScenario::new();
        let len = scenario.trajectory().len();

        for _ in 0..len {
            scenario.simulate();
        }
        assert!(scenario.current().is_none());

        // 0.5 s of idle ticks, then one more to cross the threshold
        for _ in 0..31 {
            scenario.simulate();
        }
        assert_eq!(scenario.index(), 0);
        assert!(scenario.current().is_some());
    }

    #[test]
    fn test_parameter_change_rewinds() {
        let mut scenario = OrbitScenario::new();
        for _ in 0..10 {
            scenario.simulate();
        }
        let before = scenario.trajectory().len();

        scenario.set_parameter("force", 0.2).unwrap();

        assert_eq!(scenario.index(), 0);
        assert_eq!(scenario.force.value, 1.0);
        assert_ne!(scenario.trajectory().len(), before);
    }

    #[test]
    fn test_held_playback_does_not_advance() {
        let mut scenario = OrbitScenario::new();
        scenario.set_held(true);
        for _ in 0..10 {
            scenario.simulate();
        }
        assert_eq!(scenario.index(), 0);
    }

    #[test]
    fn test_alpha_fades() {
        let mut scenario = OrbitScenario::new();
        let start = scenario.playback_alpha();
        for _ in 0..50 {
            scenario.simulate();
        }
        assert!(scenario.playback_alpha() < start);
    }
}
