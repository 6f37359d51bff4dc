//! # Wave Simulation
//!
//! Scenario layer on top of the wave physics: the fixed-timestep driver,
//! slider-bound parameter sets and the four demo setups.

pub mod orbit;
pub mod params;
pub mod refraction;
pub mod scenario;
pub mod tension;
pub mod timestep;
pub mod water;

pub use orbit::*;
pub use params::*;
pub use refraction::*;
pub use scenario::*;
pub use tension::*;
pub use timestep::*;
pub use water::*;
