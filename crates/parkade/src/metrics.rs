//! Occupancy counters for diagnostics and telemetry.
//!
//! [`OccupancyStats`] is a point-in-time snapshot assembled slot by
//! slot under each slot's own lock. Under concurrent mutation the
//! counts may mix states from slightly different instants; consumers
//! treat them as advisory.

/// Occupancy counts for one level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LevelOccupancy {
    /// The level's position within the facility (0-based).
    pub level: usize,
    /// Number of slots on this level.
    pub total_slots: usize,
    /// Number of slots currently holding a vehicle.
    pub occupied_slots: usize,
}

/// Facility-wide occupancy counts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OccupancyStats {
    /// Total slots across all levels.
    pub total_slots: usize,
    /// Occupied slots across all levels.
    pub occupied_slots: usize,
    /// Per-level breakdown in scan order.
    pub per_level: Vec<LevelOccupancy>,
}

impl OccupancyStats {
    /// Slots currently free, across all levels.
    pub fn free_slots(&self) -> usize {
        self.total_slots - self.occupied_slots
    }

    /// Whether every slot in the facility is occupied.
    pub fn is_full(&self) -> bool {
        self.occupied_slots == self.total_slots
    }
}
