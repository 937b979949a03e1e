//! An ordered grouping of slots. Purely organizational.

use crate::slot::Slot;

/// One level of a facility: an ordered sequence of slots.
///
/// Levels carry no behavior of their own; the facility scans them in
/// declaration order and each slot guards its own state.
#[derive(Debug)]
pub struct Level {
    index: usize,
    slots: Vec<Slot>,
}

impl Level {
    /// Create a level from its position and its slots in scan order.
    pub(crate) fn new(index: usize, slots: Vec<Slot>) -> Self {
        Self { index, slots }
    }

    /// The level's position within the facility (0-based).
    pub fn index(&self) -> usize {
        self.index
    }

    /// The level's slots in scan order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }
}
