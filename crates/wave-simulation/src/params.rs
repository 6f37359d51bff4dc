//! Slider-bound scenario parameters
//!
//! Every tunable quantity is stored as a physical value with a declared
//! range. Sliders work in normalized [0, 1] and go through `lerp`/`map`.

use thiserror::Error;
use wave_physics::{lerp, map};

#[derive(Debug, Error, PartialEq)]
pub enum ParameterError {
    #[error("unknown parameter `{0}`")]
    Unknown(String),
}

/// A physical quantity with a slider range
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Lookup key, stable across UI changes
    pub key: &'static str,
    /// Symbol shown next to the slider, e.g. `μ₁`
    pub symbol: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    pub value: f64,
}

impl Parameter {
    /// New parameter sitting at its minimum
    pub fn new(key: &'static str, symbol: &'static str, unit: &'static str, min: f64, max: f64) -> Self {
        Self {
            key,
            symbol,
            unit,
            min,
            max,
            value: min,
        }
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// Store the physical value for slider position `t`
    pub fn set_normalized(&mut self, t: f64) {
        self.value = lerp(self.min, self.max, t);
    }

    /// Slider position of the current value
    pub fn normalized(&self) -> f64 {
        map(self.value, self.min, self.max, 0.0, 1.0)
    }

    /// Label in the form `μ₁ = 0.20 kg/m`
    pub fn label(&self) -> String {
        if self.unit.is_empty() {
            format!("{} = {:.2}", self.symbol, self.value)
        } else {
            format!("{} = {:.2} {}", self.symbol, self.value, self.unit)
        }
    }
}

/// Access to a scenario's tunable parameters
pub trait Tunable {
    fn parameters(&self) -> Vec<&Parameter>;

    fn parameters_mut(&mut self) -> Vec<&mut Parameter>;

    fn parameter(&self, key: &str) -> Option<&Parameter> {
        self.parameters().into_iter().find(|p| p.key == key)
    }

    /// Move the slider for `key` to `t` and store the mapped physical value
    fn set_normalized(&mut self, key: &str, t: f64) -> Result<f64, ParameterError> {
        let parameter = self
            .parameters_mut()
            .into_iter()
            .find(|p| p.key == key)
            .ok_or_else(|| ParameterError::Unknown(key.to_string()))?;
        parameter.set_normalized(t);
        log::debug!("{} set to {:.3}", key, parameter.value);
        Ok(parameter.value)
    }
}
