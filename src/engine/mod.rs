//! # Engine
//!
//! The orchestration layer that wires everything together.
//!
//! This is where:
//! - Configuration is applied
//! - The conversion core meets the port traits
//! - The observable form is exposed

mod form;

pub use form::ConverterForm;
