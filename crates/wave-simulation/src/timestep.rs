//! Fixed-timestep driver
//!
//! Decouples the display frame rate from the simulation rate. Each frame the
//! elapsed wall time is accumulated and drained in constant `simulation_dt`
//! slices, then the frame is rendered exactly once.

/// Tunables for [`FixedTimestep`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimestepConfig {
    /// Size of one simulate call, in seconds
    pub simulation_dt: f64,
    /// Longest frame the driver will catch up on, in seconds
    pub max_frame_dt: f64,
}

impl Default for TimestepConfig {
    fn default() -> Self {
        Self {
            simulation_dt: 1.0 / 60.0,
            max_frame_dt: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
    /// The next frame discards its elapsed time, then the driver runs again
    Resuming,
}

/// What happened during one [`FixedTimestep::advance`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    pub steps: u32,
}

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    config: TimestepConfig,
    accumulated: f64,
    state: RunState,
}

impl FixedTimestep {
    pub fn new(config: TimestepConfig) -> Self {
        Self {
            config,
            accumulated: 0.0,
            state: RunState::Running,
        }
    }

    /// Run one frame: zero or more `simulate` calls on `state`, then one
    /// `render`, whose output is handed back with the frame report
    pub fn advance<S: ?Sized, R>(
        &mut self,
        elapsed: f64,
        state: &mut S,
        mut simulate: impl FnMut(&mut S),
        render: impl FnOnce(&mut S) -> R,
    ) -> (FrameReport, R) {
        let mut frame_dt = elapsed.min(self.config.max_frame_dt);

        if self.state == RunState::Resuming {
            frame_dt = 0.0;
            self.state = RunState::Running;
        }

        let mut report = FrameReport::default();
        if self.state == RunState::Running {
            self.accumulated += frame_dt;

            let steps = (self.accumulated / self.config.simulation_dt).floor() as u32;
            for _ in 0..steps {
                simulate(state);
                self.accumulated -= self.config.simulation_dt;
            }
            report.steps = steps;
        }

        (report, render(state))
    }

    /// Freeze the accumulator; frames still render
    pub fn pause(&mut self) {
        if self.state != RunState::Paused {
            log::debug!("simulation paused");
        }
        self.state = RunState::Paused;
    }

    /// Leave the paused state without fast-forwarding over the gap
    pub fn resume(&mut self) {
        if self.state == RunState::Paused {
            log::debug!("simulation resumed");
            self.state = RunState::Resuming;
        }
    }

    pub fn is_paused(&self) -> bool {
        self.state == RunState::Paused
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn config(&self) -> TimestepConfig {
        self.config
    }

    /// Swap tunables (on scenario change) and drop any leftover time
    pub fn set_config(&mut self, config: TimestepConfig) {
        self.config = config;
        self.accumulated = 0.0;
    }

    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(TimestepConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Call {
        Simulate,
        Render,
    }

    fn run_frame(driver: &mut FixedTimestep, elapsed: f64) -> Vec<Call> {
        let mut calls = Vec::new();
        driver.advance(
            elapsed,
            &mut calls,
            |calls| calls.push(Call::Simulate),
            |calls| calls.push(Call::Render),
        );
        calls
    }

    fn steps(driver: &mut FixedTimestep, elapsed: f64) -> u32 {
        driver.advance(elapsed, &mut (), |_| {}, |_| {}).0.steps
    }

    #[test]
    fn test_three_steps_then_one_render() {
        let mut driver = FixedTimestep::default();
        let calls = run_frame(&mut driver, 3.0 / 60.0);
        assert_eq!(
            calls,
            vec![Call::Simulate, Call::Simulate, Call::Simulate, Call::Render]
        );
    }

    #[test]
    fn test_render_output_is_returned() {
        let mut driver = FixedTimestep::default();
        let mut counter = 0;
        let (report, rendered) = driver.advance(
            2.0 / 60.0,
            &mut counter,
            |c| *c += 1,
            |c| format!("after {c} steps"),
        );
        assert_eq!(report.steps, 2);
        assert_eq!(rendered, "after 2 steps");
    }

    #[test]
    fn test_short_frames_accumulate() {
        let mut driver = FixedTimestep::default();
        assert_eq!(steps(&mut driver, 0.5 / 60.0), 0);
        assert_eq!(steps(&mut driver, 0.6 / 60.0), 1);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut driver = FixedTimestep::new(TimestepConfig {
            simulation_dt: 0.1,
            max_frame_dt: 0.25,
        });
        assert_eq!(steps(&mut driver, 10.0), 2);
    }

    #[test]
    fn test_paused_driver_only_renders() {
        let mut driver = FixedTimestep::default();
        driver.pause();
        assert!(driver.is_paused());
        assert_eq!(run_frame(&mut driver, 1.0), vec![Call::Render]);
    }

    #[test]
    fn test_resume_skips_the_gap() {
        let mut driver = FixedTimestep::default();
        driver.pause();
        run_frame(&mut driver, 0.5);
        driver.resume();
        assert_eq!(driver.state(), RunState::Resuming);

        assert_eq!(run_frame(&mut driver, 5.0), vec![Call::Render]);
        assert_eq!(driver.state(), RunState::Running);
        assert_eq!(steps(&mut driver, 2.0 / 60.0), 2);
    }

    #[test]
    fn test_resume_without_pause_is_noop() {
        let mut driver = FixedTimestep::default();
        driver.resume();
        assert_eq!(driver.state(), RunState::Running);
    }

    #[test]
    fn test_set_config_drops_leftover_time() {
        let mut driver = FixedTimestep::default();
        steps(&mut driver, 0.5 / 60.0);
        assert!(driver.accumulated() > 0.0);

        driver.set_config(TimestepConfig {
            simulation_dt: 0.001,
            max_frame_dt: 1.0,
        });
        assert_eq!(driver.accumulated(), 0.0);
    }
}
