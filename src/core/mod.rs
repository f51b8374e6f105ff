//! # Core
//!
//! Pure domain logic: the unit labels, the conversion arithmetic, and
//! the form configuration. Nothing here performs I/O or holds state
//! beyond the values passed in.

pub mod config;
pub mod convert;
pub mod unit;

pub use config::FormConfig;
pub use convert::{convert, from_celsius, to_celsius, Conversion};
pub use unit::TemperatureUnit;
