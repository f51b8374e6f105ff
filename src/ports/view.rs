//! # View Port
//!
//! The observer half of the form contract. Whenever any of the three
//! state fields changes, the engine recomputes the output and hands
//! every attached view a fresh snapshot.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::unit::TemperatureUnit;

/// Everything a presentation layer needs to render the form
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormSnapshot {
    /// Current input magnitude
    pub value: f64,

    /// Source unit
    pub from: TemperatureUnit,

    /// Destination unit
    pub to: TemperatureUnit,

    /// Computed output magnitude
    pub output: f64,
}

/// Render-on-change observer
///
/// Called once when attached and again after every state change.
pub trait View {
    fn render(&mut self, snapshot: &FormSnapshot);
}

/// A view behind a shared handle is still a view; the form holds one
/// handle while the caller keeps another for inspection.
impl<V: View> View for Rc<RefCell<V>> {
    fn render(&mut self, snapshot: &FormSnapshot) {
        self.borrow_mut().render(snapshot);
    }
}
