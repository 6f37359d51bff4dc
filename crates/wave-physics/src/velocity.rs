//! Propagation speed along the string
//!
//! The field model only ever asks one question of its surroundings: how fast
//! does a wave travel at normalized position `x`? Scenarios answer it with
//! their own state (densities, tension, depth), so the answer can change
//! between steps without the field knowing why.

/// Local wave propagation speed as a function of position
///
/// `x` ranges over [0, 1]. Implementations should return a positive speed;
/// nothing checks this, and a non-positive or very large speed makes the
/// explicit integrator blow up.
pub trait VelocityField {
    fn speed_at(&self, x: f64) -> f64;

    /// Largest speed on a uniform sampling of [0, 1]
    fn max_speed(&self, samples: usize) -> f64 {
        let samples = samples.max(2);
        (0..samples)
            .map(|i| self.speed_at(i as f64 / (samples - 1) as f64))
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Same speed everywhere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform(pub f64);

impl Default for Uniform {
    fn default() -> Self {
        Self(1.0)
    }
}

impl VelocityField for Uniform {
    fn speed_at(&self, _x: f64) -> f64 {
        self.0
    }
}

impl<F> VelocityField for F
where
    F: Fn(f64) -> f64,
{
    fn speed_at(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Speed of a transverse wave on a string, v = √(T / μ)
pub fn string_speed(tension: f64, density: f64) -> f64 {
    (tension / density).sqrt()
}

/// Shallow-water wave speed, v = k·√h
pub fn shallow_water_speed(k: f64, depth: f64) -> f64 {
    k * depth.sqrt()
}
