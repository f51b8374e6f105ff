//! # Ports
//!
//! Trait contracts between the engine and the outside world:
//! - `View`: what re-renders when the form changes
//! - `Format`: how the output magnitude becomes text
//! - `InputError`: how malformed textual input is rejected
//!
//! Adapters implement these; the engine only knows the traits.

pub mod format;
pub mod input;
pub mod view;

pub use format::Format;
pub use input::{InputError, InputResult};
pub use view::{FormSnapshot, View};
