//! # Memory View Adapter
//!
//! Headless View that retains only the latest snapshot.
//!
//! Good for:
//! - Testing
//! - Embedding the form where no display exists yet
//! - Polling the current output without a callback
//!
//! Keeps no history: each render replaces the previous snapshot.

use std::cell::RefCell;
use std::rc::Rc;

use crate::ports::{FormSnapshot, View};

/// View adapter that remembers the latest render
#[derive(Debug, Default)]
pub struct MemoryView {
    /// Latest snapshot, if anything has rendered yet
    latest: Option<FormSnapshot>,

    /// Number of renders received
    renders: usize,
}

impl MemoryView {
    /// Create an empty view
    pub fn new() -> Self {
        Self {
            latest: None,
            renders: 0,
        }
    }

    /// Create a shared handle: one clone goes to the form, the caller
    /// keeps another for inspection
    pub fn shared() -> Rc<RefCell<MemoryView>> {
        Rc::new(RefCell::new(MemoryView::new()))
    }

    /// The latest snapshot rendered into this view
    pub fn latest(&self) -> Option<&FormSnapshot> {
        self.latest.as_ref()
    }

    /// Number of renders received
    pub fn renders(&self) -> usize {
        self.renders
    }

    /// Forget the latest snapshot and reset the counter
    pub fn clear(&mut self) {
        self.latest = None;
        self.renders = 0;
    }
}

impl View for MemoryView {
    fn render(&mut self, snapshot: &FormSnapshot) {
        self.latest = Some(*snapshot);
        self.renders += 1;
    }
}
