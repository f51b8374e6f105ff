//! # Conversion Engine
//!
//! The arithmetic heart of the crate: map a magnitude from one scale to
//! another by routing through Celsius. One pivot unit keeps the branch
//! count linear in the number of scales instead of quadratic.
//!
//! Every function here is total over the reals. Values below absolute
//! zero convert like any other number; no domain validation is
//! performed and nothing can fail.

use crate::core::unit::TemperatureUnit;

/// Offset between the Kelvin and Celsius scales
pub const KELVIN_OFFSET: f64 = 273.15;

/// Freezing point of water on the Fahrenheit scale
pub const FAHRENHEIT_FREEZING: f64 = 32.0;

/// Normalize a magnitude from `from` into Celsius
pub fn to_celsius(value: f64, from: TemperatureUnit) -> f64 {
    match from {
        TemperatureUnit::Fahrenheit => (value - FAHRENHEIT_FREEZING) * 5.0 / 9.0,
        TemperatureUnit::Kelvin => value - KELVIN_OFFSET,
        TemperatureUnit::Celsius => value,
    }
}

/// Denormalize a Celsius magnitude into `to`
pub fn from_celsius(celsius: f64, to: TemperatureUnit) -> f64 {
    match to {
        TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + FAHRENHEIT_FREEZING,
        TemperatureUnit::Kelvin => celsius + KELVIN_OFFSET,
        TemperatureUnit::Celsius => celsius,
    }
}

/// Convert a magnitude from one scale to another
pub fn convert(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    from_celsius(to_celsius(value, from), to)
}

/// A single conversion request
///
/// Transient value object: built fresh for every recomputation, never
/// mutated, discarded after [`run`](Conversion::run).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    /// Input magnitude
    pub value: f64,
    /// Source unit
    pub from: TemperatureUnit,
    /// Destination unit
    pub to: TemperatureUnit,
}

impl Conversion {
    pub const fn new(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> Self {
        Self { value, from, to }
    }

    /// Execute the request
    pub fn run(&self) -> f64 {
        convert(self.value, self.from, self.to)
    }
}
