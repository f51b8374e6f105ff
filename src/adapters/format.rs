//! # Format Adapters
//!
//! Implementations of the Format port.
//!
//! `FixedFormat` renders with a fixed number of decimal digits.
//! Locale-aware grouping or unit symbols belong in alternative
//! adapters.

use crate::ports::Format;

/// Fixed-precision output formatting
#[derive(Debug, Clone, Copy)]
pub struct FixedFormat {
    /// Decimal digits after the point
    precision: usize,
}

impl FixedFormat {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }
}

impl Default for FixedFormat {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Format for FixedFormat {
    fn format(&self, value: f64) -> String {
        format!("{:.*}", self.precision, value)
    }
}
