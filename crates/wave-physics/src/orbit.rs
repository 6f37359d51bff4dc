//! Point mass under a constant-magnitude central force
//!
//! First-order Euler integration of a single particle pulled towards the
//! origin. Used by the centripetal force demo, which precomputes one turn
//! of the trajectory whenever a parameter changes and then replays it.

use crate::constants::{ORBIT_DT, ORBIT_ESCAPE_EXTENT, ORBIT_MAX_STATES};
use glam::DVec2;

/// Kinematic state of the orbiting particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    pub position: DVec2,
    pub velocity: DVec2,
    pub mass: f64,
    /// Magnitude of the centripetal force acting on the particle
    pub force: f64,
}

impl OrbitState {
    /// Advance by one Euler step: velocity first, then position
    pub fn step(&mut self, dt: f64) {
        let force = -self.force * self.radial_direction();
        self.velocity += force / self.mass * dt;
        self.position += self.velocity * dt;
    }

    /// Unit vector from the origin to the particle (NaN at the origin)
    pub fn radial_direction(&self) -> DVec2 {
        self.position / self.position.length()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    fn escaped(&self) -> bool {
        self.position.x.abs() > ORBIT_ESCAPE_EXTENT || self.position.y.abs() > ORBIT_ESCAPE_EXTENT
    }
}

/// Initial conditions chosen by the user
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSetup {
    /// Centripetal force magnitude (N)
    pub force: f64,
    /// Initial tangential speed (m/s)
    pub speed: f64,
    /// Initial distance from the centre (m)
    pub radius: f64,
    /// Particle mass (kg)
    pub mass: f64,
}

impl Default for OrbitSetup {
    fn default() -> Self {
        Self {
            force: 0.0,
            speed: 1.0,
            radius: 1.0,
            mass: 1.0,
        }
    }
}

impl OrbitSetup {
    /// Particle on the negative x axis moving straight up
    pub fn initial_state(&self) -> OrbitState {
        OrbitState {
            position: DVec2::new(-self.radius, 0.0),
            velocity: DVec2::new(0.0, self.speed),
            mass: self.mass,
            force: self.force,
        }
    }
}

/// Precomputed sequence of orbit states, replayed by index
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    states: Vec<OrbitState>,
}

impl Trajectory {
    /// Integrate until the particle completes one turn, escapes the view,
    /// or [`ORBIT_MAX_STATES`] states have been recorded
    pub fn compute(setup: &OrbitSetup) -> Self {
        let mut particle = setup.initial_state();
        let mut states = Vec::with_capacity(ORBIT_MAX_STATES);
        let mut completed_half_turn = false;

        for _ in 0..ORBIT_MAX_STATES {
            states.push(particle);

            let v = particle.velocity;
            completed_half_turn |= v.y < 0.0 && v.x < 0.0;
            if completed_half_turn && v.x > 0.0 && v.y > 0.0 {
                break;
            }
            if particle.escaped() {
                break;
            }

            particle.step(ORBIT_DT);
        }

        log::debug!("orbit trajectory recomputed: {} states", states.len());
        Self { states }
    }

    /// The state the particle starts from, `None` only for a default trajectory
    pub fn initial(&self) -> Option<&OrbitState> {
        self.states.first()
    }

    pub fn get(&self, index: usize) -> Option<&OrbitState> {
        self.states.get(index)
    }

    pub fn states(&self) -> &[OrbitState] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
