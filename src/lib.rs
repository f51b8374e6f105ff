//! # Thermion
//!
//! > "Every scale meets at Celsius"
//!
//! Thermion converts a numeric temperature between Fahrenheit, Celsius,
//! and Kelvin by routing every conversion through a single pivot unit,
//! and wraps that function in an observable form: three pieces of state
//! (value, source unit, destination unit) that recompute and re-render
//! the output whenever any of them changes.
//!
//! ## Philosophy
//!
//! - **Pivot over pairs** - One intermediate unit, not N² formulas
//! - **State feeds a function, function feeds a view** - No hidden reactivity
//! - **Pure core, swappable adapters** - Hexagonal architecture
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       THERMION                               │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  CORE (pure math, no I/O)                                   │
//! │    TemperatureUnit, Conversion, convert, FormConfig         │
//! │                                                              │
//! │  PORTS (trait contracts)                                     │
//! │    View, Format, InputError                                 │
//! │                                                              │
//! │  ADAPTERS (swappable implementations)                       │
//! │    View: MemoryView                                         │
//! │    Format: FixedFormat                                      │
//! │    API: Python bindings                                      │
//! │                                                              │
//! │  ENGINE (orchestration)                                      │
//! │    ConverterForm - the main entry point                     │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use thermion::{ConverterForm, FormConfig, MemoryView};
//!
//! // Default state: 0.0, Fahrenheit -> Celsius
//! let mut form = ConverterForm::new(FormConfig::default());
//!
//! // Attach a view; it re-renders after every change
//! let view = MemoryView::shared();
//! form.attach(Box::new(view.clone()));
//!
//! // Drive the state
//! form.set_value(212.0);
//!
//! assert_eq!(form.output(), 100.0);
//! assert_eq!(view.borrow().latest().unwrap().output, 100.0);
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - pure math, no I/O
/// Contains: TemperatureUnit, Conversion, convert, FormConfig
pub mod core;

/// Port definitions - trait contracts for adapters
/// Contains: View trait, Format trait, InputError
pub mod ports;

/// Adapter implementations - swappable components
/// Contains: view, format, python submodules
pub mod adapters;

/// Engine - orchestration layer
/// Contains: ConverterForm main struct
pub mod engine;

// ============================================================================
// PYTHON BINDINGS (when enabled)
// ============================================================================

#[cfg(feature = "python")]
pub use adapters::python::*;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core types
pub use crate::core::config::FormConfig;
pub use crate::core::convert::{convert, from_celsius, to_celsius, Conversion};
pub use crate::core::unit::TemperatureUnit;

// Port traits
pub use crate::ports::{Format, FormSnapshot, InputError, InputResult, View};

// Adapters
pub use crate::adapters::format::FixedFormat;
pub use crate::adapters::view::MemoryView;

// Engine
pub use crate::engine::ConverterForm;

// ============================================================================
// CRATE-LEVEL DOCUMENTATION
// ============================================================================

/// The four primitives of Thermion:
///
/// 1. **TemperatureUnit**: one of three scales - a pure label
/// 2. **Convert**: `fn(value, from, to) -> value` - route through Celsius
/// 3. **Form**: `{value, from, to}` - the observable state triple
/// 4. **View**: `fn(snapshot)` - what re-renders on change
///
/// Everything else is configuration or adapters.
#[doc(hidden)]
pub const _PRIMITIVES: () = ();
