//! Discrete 1D wave field
//!
//! Explicit finite-difference integration of `∂²y/∂t² = v(x)² ∂²y/∂x² − k ∂y/∂t`
//! on `N` samples of [0, 1]. The scheme is only conditionally stable: the
//! caller picks `dt` so that `max v · dt / dx` stays well below 1. Nothing
//! here enforces that; an unstable configuration simply produces garbage
//! (and eventually NaN) until the parameters are brought back into range.

use crate::constants::*;
use crate::velocity::VelocityField;
use std::f64::consts::TAU;

/// How the right end (and, for `Infinite`, both ends) behaves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// Zero slope: the last sample follows its neighbour
    Free,
    /// Clamped to zero displacement
    Fixed,
    /// One-sided absorbing condition, outgoing waves leave the domain
    #[default]
    Infinite,
}

impl BoundaryPolicy {
    pub const ALL: [BoundaryPolicy; 3] = [Self::Free, Self::Fixed, Self::Infinite];

    pub fn label(self) -> &'static str {
        match self {
            Self::Free => "Free end",
            Self::Fixed => "Fixed end",
            Self::Infinite => "Infinite",
        }
    }
}

/// How the left end is driven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPolicy {
    /// Left end pinned at rest
    #[default]
    None,
    /// One-shot windowed oscillation, re-armed by [`WaveField::pulse`]
    Pulse,
    /// Continuous sinusoidal driving
    Oscillator,
}

impl InputPolicy {
    pub const ALL: [InputPolicy; 3] = [Self::None, Self::Pulse, Self::Oscillator];

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Pulse => "Pulse",
            Self::Oscillator => "Oscillator",
        }
    }
}

/// Displacement and velocity of `N` evenly spaced samples on [0, 1]
///
/// `V` is the propagation-speed capability. Scenarios keep their tunable
/// state inside it and mutate it through [`WaveField::velocity_field_mut`];
/// the next [`WaveField::step`] picks the new values up.
#[derive(Clone)]
pub struct WaveField<V: ?Sized> {
    position: Vec<f64>,
    velocity: Vec<f64>,

    /// Uniform damping coefficient (non-negative)
    pub damping: f64,
    pub boundary: BoundaryPolicy,
    pub input: InputPolicy,

    /// Driver frequency in Hz
    pub oscillator_frequency: f64,
    /// Peak displacement imposed on the left end
    pub oscillator_amplitude: f64,
    /// Phase angle (radians) at which a pulse stops driving
    pub pulse_cutoff: f64,

    phase_time: f64,
    velocity_field: V,
}

impl<V: ?Sized> std::fmt::Debug for WaveField<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaveField")
            .field("point_count", &self.position.len())
            .field("damping", &self.damping)
            .field("boundary", &self.boundary)
            .field("input", &self.input)
            .field("phase_time", &self.phase_time)
            .finish_non_exhaustive()
    }
}

impl<V: VelocityField> WaveField<V> {
    /// Create a field at rest with `point_count` samples
    ///
    /// # Panics
    /// If `point_count` is smaller than [`MIN_POINT_COUNT`].
    pub fn new(point_count: usize, velocity_field: V) -> Self {
        assert!(
            point_count >= MIN_POINT_COUNT,
            "wave field needs at least {MIN_POINT_COUNT} points, got {point_count}"
        );

        Self {
            position: vec![0.0; point_count],
            velocity: vec![0.0; point_count],
            damping: 0.0,
            boundary: BoundaryPolicy::default(),
            input: InputPolicy::default(),
            oscillator_frequency: DEFAULT_OSCILLATOR_FREQUENCY,
            oscillator_amplitude: DEFAULT_OSCILLATOR_AMPLITUDE,
            pulse_cutoff: DEFAULT_PULSE_CUTOFF,
            phase_time: IDLE_PHASE_TIME,
            velocity_field,
        }
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_input(mut self, input: InputPolicy) -> Self {
        self.input = input;
        self
    }

    pub fn with_oscillator(mut self, frequency: f64, amplitude: f64) -> Self {
        self.oscillator_frequency = frequency;
        self.oscillator_amplitude = amplitude;
        self
    }

    pub fn with_pulse_cutoff(mut self, cutoff: f64) -> Self {
        self.pulse_cutoff = cutoff;
        self
    }
}

impl<V: VelocityField + ?Sized> WaveField<V> {
    /// Advance the field by one explicit Euler step of size `dt`
    pub fn step(&mut self, dt: f64) {
        let last = self.position.len() - 1;
        let dx = self.spacing();

        self.phase_time += dt;
        let angle = self.phase_angle();

        match self.input {
            InputPolicy::Oscillator => {
                self.position[0] = self.oscillator_amplitude * angle.sin();
            }
            InputPolicy::Pulse => {
                // Past the cutoff the left end is left to the regular update.
                if angle < self.pulse_cutoff {
                    self.position[0] = self.oscillator_amplitude * angle.sin();
                }
            }
            InputPolicy::None => {
                self.position[0] = 0.0;
                self.velocity[0] = 0.0;
            }
        }

        let p = &self.position;
        for i in 1..last {
            let speed = self.velocity_field.speed_at(i as f64 * dx);
            let curvature = (p[i + 1] - 2.0 * p[i] + p[i - 1]) / (dx * dx);
            let acceleration = speed * speed * curvature - self.damping * self.velocity[i];
            self.velocity[i] += acceleration * dt;
        }

        match self.boundary {
            BoundaryPolicy::Fixed => self.velocity[last] = 0.0,
            BoundaryPolicy::Infinite => {
                self.velocity[0] =
                    self.velocity_field.speed_at(0.0) * (p[1] - p[0]) / dx;
                self.velocity[last] =
                    -self.velocity_field.speed_at(1.0) * (p[last] - p[last - 1]) / dx;
            }
            BoundaryPolicy::Free => {}
        }

        for (y, vy) in self.position.iter_mut().zip(&self.velocity) {
            *y += vy * dt;
        }

        match self.boundary {
            BoundaryPolicy::Fixed => self.position[last] = 0.0,
            BoundaryPolicy::Free => self.position[last] = self.position[last - 1],
            BoundaryPolicy::Infinite => {}
        }
    }

    /// Re-arm a one-shot pulse on the left end
    ///
    /// The clock is only rewound once the previous pulse window has elapsed,
    /// so repeated requests while a pulse is still playing do nothing.
    pub fn pulse(&mut self) {
        self.input = InputPolicy::Pulse;

        if self.phase_time > self.pulse_window() {
            self.phase_time = 0.0;
            log::debug!("pulse re-armed (window {:.3}s)", self.pulse_window());
        }
    }

    /// Duration of one pulse, in seconds
    pub fn pulse_window(&self) -> f64 {
        let period = 1.0 / self.oscillator_frequency;
        period * self.pulse_cutoff / TAU
    }

    pub fn is_pulse_active(&self) -> bool {
        self.input == InputPolicy::Pulse && self.phase_angle() < self.pulse_cutoff
    }

    /// Bring the field back to rest with an idle driver clock
    pub fn reset(&mut self) {
        self.position.fill(0.0);
        self.velocity.fill(0.0);
        self.phase_time = IDLE_PHASE_TIME;
    }

    /// Driver phase angle for the current clock, `2π · t · f`
    pub fn phase_angle(&self) -> f64 {
        TAU * self.phase_time * self.oscillator_frequency
    }

    pub fn phase_time(&self) -> f64 {
        self.phase_time
    }

    pub fn point_count(&self) -> usize {
        self.position.len()
    }

    /// Grid spacing, `1 / N`
    pub fn spacing(&self) -> f64 {
        1.0 / self.position.len() as f64
    }

    pub fn positions(&self) -> &[f64] {
        &self.position
    }

    /// Mutable displacement, for seeding initial conditions
    pub fn positions_mut(&mut self) -> &mut [f64] {
        &mut self.position
    }

    pub fn velocities(&self) -> &[f64] {
        &self.velocity
    }

    pub fn velocity_field(&self) -> &V {
        &self.velocity_field
    }

    pub fn velocity_field_mut(&mut self) -> &mut V {
        &mut self.velocity_field
    }

    /// Discrete energy: kinetic `½ Σ vᵢ² dx` plus elastic
    /// `½ Σ v(x)² ((yᵢ₊₁ − yᵢ)/dx)² dx`, with the speed sampled mid-segment
    pub fn energy(&self) -> f64 {
        let dx = self.spacing();
        let kinetic: f64 = self.velocity.iter().map(|v| 0.5 * v * v).sum();
        let elastic: f64 = self
            .position
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                let speed = self.velocity_field.speed_at((i as f64 + 0.5) * dx);
                let slope = (pair[1] - pair[0]) / dx;
                0.5 * speed * speed * slope * slope
            })
            .sum();
        (kinetic + elastic) * dx
    }

    /// `max v · dt / dx`; values approaching 1 are unstable
    pub fn courant_number(&self, dt: f64) -> f64 {
        let max_speed = self.velocity_field.max_speed(self.point_count());
        max_speed * dt / self.spacing()
    }
}
