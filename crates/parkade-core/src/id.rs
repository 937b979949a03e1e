//! Strongly-typed identifiers and the slot-id generator.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

/// Identifies a parking slot within a facility.
///
/// Slot ids are minted once at facility construction time by a
/// [`SlotIdGenerator`] and are stable for the facility's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub u32);

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SlotId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Caller-supplied identity of a vehicle.
///
/// The allocator treats vehicle ids as opaque beyond equality checks.
/// Zero is reserved: [`Vehicle::new`](crate::Vehicle::new) rejects it,
/// so a stored occupant id is always non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VehicleId(pub u64);

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for VehicleId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Mints unique, strictly increasing [`SlotId`] values.
///
/// Backed by an atomic counter, so concurrent `generate` calls never
/// return the same id and never lose an update. The first id handed
/// out is 1; ids are one greater than the previous call's, in the
/// order calls complete. The operation cannot fail.
#[derive(Debug, Default)]
pub struct SlotIdGenerator {
    last: AtomicU32,
}

impl SlotIdGenerator {
    /// Create a generator whose first [`generate`](Self::generate)
    /// call returns `SlotId(1)`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next slot id. Thread-safe.
    pub fn generate(&self) -> SlotId {
        SlotId(self.last.fetch_add(1, Ordering::Relaxed) + 1)
    }
}
