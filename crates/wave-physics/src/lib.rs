//! # Wave Physics
//!
//! Numerical core for the wave demos: a finite-difference integrator for the
//! 1D wave equation with pluggable boundaries, drivers and propagation speed,
//! plus the point-mass model behind the centripetal force orbit.

pub mod constants;
pub mod field;
pub mod interp;
pub mod orbit;
pub mod velocity;

pub use constants::*;
pub use field::*;
pub use interp::*;
pub use orbit::*;
pub use velocity::*;
