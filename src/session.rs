//! The active demo, its frame driver and the user's run controls

use crate::gui::UiAction;
use glam::Vec2;
use wave_renderer::{paint, Canvas};
use wave_simulation::{Demo, FixedTimestep, FrameReport, ScenarioKind, TimestepConfig};

pub struct Session {
    demo: Demo,
    driver: FixedTimestep,
    max_frame_dt: f64,
    user_paused: bool,
    hidden: bool,
}

impl Session {
    pub fn new(kind: ScenarioKind, max_frame_dt: f64) -> Self {
        let demo = Demo::new(kind);
        let driver = FixedTimestep::new(Self::timestep_for(&demo, max_frame_dt));
        Self {
            demo,
            driver,
            max_frame_dt,
            user_paused: false,
            hidden: false,
        }
    }

    fn timestep_for(demo: &Demo, max_frame_dt: f64) -> TimestepConfig {
        TimestepConfig {
            max_frame_dt,
            ..demo.scenario().timestep()
        }
    }

    pub fn demo(&self) -> &Demo {
        &self.demo
    }

    pub fn driver(&self) -> &FixedTimestep {
        &self.driver
    }

    /// Simulate whatever the elapsed time allows, then paint one canvas
    pub fn frame(&mut self, elapsed: f64, canvas_size: Vec2) -> (FrameReport, Canvas) {
        self.driver.advance(
            elapsed,
            &mut self.demo,
            |demo| demo.scenario_mut().simulate(),
            |demo| paint(demo, canvas_size),
        )
    }

    /// Swap in a freshly built demo; selecting the active one does nothing
    pub fn select(&mut self, kind: ScenarioKind) {
        if kind == self.demo.kind() {
            return;
        }
        self.demo = Demo::new(kind);
        self.driver
            .set_config(Self::timestep_for(&self.demo, self.max_frame_dt));
    }

    pub fn pulse(&mut self) {
        self.demo.scenario_mut().pulse();
    }

    pub fn reset(&mut self) {
        log::debug!("Resetting {}", self.demo.kind().title());
        self.demo.scenario_mut().reset();
    }

    pub fn toggle_pause(&mut self) {
        self.user_paused = !self.user_paused;
        self.sync_pause();
    }

    /// Window occluded or minimized
    pub fn set_hidden(&mut self, hidden: bool) {
        if self.hidden != hidden {
            self.hidden = hidden;
            self.sync_pause();
        }
    }

    fn sync_pause(&mut self) {
        if self.user_paused || self.hidden {
            self.driver.pause();
        } else {
            self.driver.resume();
        }
    }

    pub fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::SelectScenario(kind) => self.select(kind),
            UiAction::SetParameter { key, t } => {
                match self.demo.scenario_mut().set_parameter(key, t) {
                    Ok(value) => log::debug!("{key} = {value:.3}"),
                    Err(e) => log::warn!("Ignoring slider change: {e}"),
                }
            }
            UiAction::Hold(held) => {
                if let Demo::Orbit(orbit) = &mut self.demo {
                    orbit.set_held(held);
                }
            }
            UiAction::Pulse => self.pulse(),
            UiAction::Reset => self.reset(),
            UiAction::TogglePause => self.toggle_pause(),
            UiAction::SetBoundary(boundary) => {
                if let Some(wave) = self.demo.scenario_mut().wave_mut() {
                    log::debug!("Boundary: {}", boundary.label());
                    wave.boundary = boundary;
                }
            }
            UiAction::SetInput(input) => {
                if let Some(wave) = self.demo.scenario_mut().wave_mut() {
                    log::debug!("Input: {}", input.label());
                    wave.input = input;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wave_physics::{BoundaryPolicy, InputPolicy};
    use wave_simulation::{RunState, Tunable, WAVE_SIMULATION_DT};

    const CANVAS: Vec2 = Vec2::new(400.0, 200.0);

    #[test]
    fn test_scenario_timestep_with_cli_cap() {
        let session = Session::new(ScenarioKind::Water, 0.25);
        let config = session.driver().config();
        assert_eq!(config.simulation_dt, WAVE_SIMULATION_DT);
        assert_eq!(config.max_frame_dt, 0.25);
    }

    #[test]
    fn test_frame_runs_wave_steps() {
        let mut session = Session::new(ScenarioKind::Refraction, 1.0);
        let (report, canvas) = session.frame(0.0105, CANVAS);
        assert_eq!(report.steps, 10);
        assert_eq!(canvas.size, CANVAS);
    }

    #[test]
    fn test_select_switches_timestep() {
        let mut session = Session::new(ScenarioKind::Tension, 1.0);
        session.select(ScenarioKind::Orbit);
        assert_eq!(session.demo().kind(), ScenarioKind::Orbit);
        assert_eq!(session.driver().config().simulation_dt, 1.0 / 60.0);
    }

    #[test]
    fn test_user_pause_survives_unhide() {
        let mut session = Session::new(ScenarioKind::Water, 1.0);
        session.toggle_pause();
        session.set_hidden(true);
        session.set_hidden(false);
        assert!(session.driver().is_paused());

        session.toggle_pause();
        assert_eq!(session.driver().state(), RunState::Resuming);
    }

    #[test]
    fn test_unhide_skips_hidden_time() {
        let mut session = Session::new(ScenarioKind::Water, 1.0);
        session.set_hidden(true);
        assert_eq!(session.frame(0.5, CANVAS).0.steps, 0);

        session.set_hidden(false);
        assert_eq!(session.frame(0.5, CANVAS).0.steps, 0);
        assert!(session.frame(0.0105, CANVAS).0.steps > 0);
    }

    #[test]
    fn test_wave_controls() {
        let mut session = Session::new(ScenarioKind::Tension, 1.0);
        session.apply(UiAction::SetBoundary(BoundaryPolicy::Fixed));
        session.apply(UiAction::SetInput(InputPolicy::Oscillator));

        let wave = session.demo().scenario().wave().unwrap();
        assert_eq!(wave.boundary, BoundaryPolicy::Fixed);
        assert_eq!(wave.input, InputPolicy::Oscillator);
    }

    #[test]
    fn test_hold_only_affects_orbit() {
        let mut session = Session::new(ScenarioKind::Orbit, 1.0);
        session.apply(UiAction::Hold(true));
        let Demo::Orbit(orbit) = session.demo() else {
            panic!("expected the orbit demo");
        };
        assert!(orbit.is_held());

        let mut session = Session::new(ScenarioKind::Water, 1.0);
        session.apply(UiAction::Hold(true));
        assert!(!session.driver().is_paused());
    }

    #[test]
    fn test_unknown_parameter_is_ignored() {
        let mut session = Session::new(ScenarioKind::Water, 1.0);
        session.apply(UiAction::SetParameter {
            key: "salinity",
            t: 0.5,
        });
        let depth = session.demo().scenario().parameter("depth").unwrap();
        assert_eq!(depth.value, depth.min);
    }
}
