//! A single parking space and its occupancy state machine.
//!
//! [`Slot`] is the sole authority over one physical space. Its only
//! mutable field is the occupant, guarded by a private mutex, so the
//! availability check and the occupant write happen in one critical
//! section — two racing admissions can never both observe "available".

use std::sync::Mutex;

use parkade_core::{CategorySet, SlotError, SlotId, Vehicle, VehicleCategory, VehicleId};

/// A single parking space.
///
/// Two states: empty and occupied. Empty → occupied via a successful
/// [`try_accommodate`](Slot::try_accommodate); occupied → empty via a
/// successful [`release`](Slot::release). The invalid direction fails
/// with a typed error and leaves the state untouched.
///
/// All operations are internally synchronized; callers never need an
/// external lock to use a slot safely.
#[derive(Debug)]
pub struct Slot {
    id: SlotId,
    accepted: CategorySet,
    occupant: Mutex<Option<VehicleId>>,
}

// Compile-time assertion: Slot must be Send + Sync.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<Slot>();
};

impl Slot {
    /// Create an empty slot with the given id and accepted categories.
    ///
    /// The accepted-category set is fixed for the slot's lifetime.
    pub fn new(id: SlotId, accepted: CategorySet) -> Self {
        Self {
            id,
            accepted,
            occupant: Mutex::new(None),
        }
    }

    /// This slot's id, stable for the facility's lifetime.
    pub fn id(&self) -> SlotId {
        self.id
    }

    /// The categories this slot is willing to host.
    pub fn accepted_categories(&self) -> &[VehicleCategory] {
        &self.accepted
    }

    /// Whether the slot is currently empty and accepts `category`.
    ///
    /// Takes the slot's lock for the duration of the check; the answer
    /// is advisory, since another caller may claim the slot before this
    /// one acts on it.
    pub fn can_accommodate(&self, category: VehicleCategory) -> bool {
        let occupant = self.occupant.lock().unwrap();
        occupant.is_none() && self.accepted.contains(&category)
    }

    /// Atomically claim the slot for `vehicle`.
    ///
    /// Checks emptiness and category match under one lock and, if both
    /// hold, stores the vehicle's id and returns this slot's id. Fails
    /// with [`SlotError::NotAvailable`] and no side effects otherwise.
    pub fn try_accommodate(&self, vehicle: Vehicle) -> Result<SlotId, SlotError> {
        let mut occupant = self.occupant.lock().unwrap();
        if occupant.is_some() || !self.accepted.contains(&vehicle.category()) {
            return Err(SlotError::NotAvailable);
        }
        *occupant = Some(vehicle.id());
        Ok(self.id)
    }

    /// Atomically clear the occupant.
    ///
    /// Fails with [`SlotError::AlreadyEmpty`] if the slot has no
    /// occupant — a double release is a caller bug and is surfaced,
    /// not absorbed.
    pub fn release(&self) -> Result<(), SlotError> {
        let mut occupant = self.occupant.lock().unwrap();
        if occupant.is_none() {
            return Err(SlotError::AlreadyEmpty);
        }
        *occupant = None;
        Ok(())
    }

    /// Snapshot of the current occupant, if any.
    pub fn occupant(&self) -> Option<VehicleId> {
        *self.occupant.lock().unwrap()
    }

    /// Whether the slot currently holds a vehicle.
    pub fn is_occupied(&self) -> bool {
        self.occupant().is_some()
    }
}
