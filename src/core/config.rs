//! # Form Configuration
//!
//! Initial state and display settings for
//! [`ConverterForm`](crate::engine::ConverterForm).

use crate::core::unit::TemperatureUnit;

/// Configuration for a converter form
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormConfig {
    /// Initial input magnitude
    pub initial_value: f64,

    /// Initial source unit
    pub initial_from: TemperatureUnit,

    /// Initial destination unit
    pub initial_to: TemperatureUnit,

    /// Decimal digits used by the default output formatter
    pub precision: usize,
}

impl FormConfig {
    /// Create a config with explicit initial state and default precision
    pub fn new(
        initial_value: f64,
        initial_from: TemperatureUnit,
        initial_to: TemperatureUnit,
    ) -> Self {
        Self {
            initial_value,
            initial_from,
            initial_to,
            precision: 2,
        }
    }

    /// Override the formatter precision
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

impl Default for FormConfig {
    /// 0.0, Fahrenheit into Celsius
    fn default() -> Self {
        Self::new(
            0.0,
            TemperatureUnit::Fahrenheit,
            TemperatureUnit::Celsius,
        )
    }
}
