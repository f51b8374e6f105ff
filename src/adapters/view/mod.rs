//! # View Adapters
//!
//! Implementations of the View port.
//!
//! Available adapters:
//! - `MemoryView` - retains the latest snapshot (headless, testing)

mod memory;

pub use memory::MemoryView;
