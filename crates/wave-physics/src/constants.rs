//! Default values for the wave field and the orbit integrator
//!
//! These are simulation units: the string spans [0, 1] and time is in seconds.

use std::f64::consts::PI;

/// Smallest grid that still has an interior point for the second-derivative stencil
pub const MIN_POINT_COUNT: usize = 3;

/// Default driver frequency (Hz)
pub const DEFAULT_OSCILLATOR_FREQUENCY: f64 = 1.0;

/// Default driver amplitude
pub const DEFAULT_OSCILLATOR_AMPLITUDE: f64 = 0.4;

/// Default pulse window: half a period, a single hump
pub const DEFAULT_PULSE_CUTOFF: f64 = PI;

/// Clock value of a field that has never been pulsed.
/// Large enough that a PULSE input stays silent until `pulse()` re-arms it.
pub const IDLE_PHASE_TIME: f64 = 10_000.0;

/// Fixed Euler step used to precompute orbit trajectories
pub const ORBIT_DT: f64 = 0.05;

/// Upper bound on recorded orbit states (1 s of trajectory at 1 ms resolution)
pub const ORBIT_MAX_STATES: usize = 1000;

/// Orbits that leave this half-extent are considered escaped
pub const ORBIT_ESCAPE_EXTENT: f64 = 10.0;
