//! Parkade: a concurrent first-fit parking-slot allocator.
//!
//! A [`Facility`] owns an ordered collection of levels, each an ordered
//! collection of slots. Arriving vehicles are placed by a first-fit
//! scan; each slot guards its own occupancy with a private mutex, so
//! concurrent entry and exit calls contend only on the slots they
//! actually touch.
//!
//! # Quick start
//!
//! ```rust
//! use parkade::prelude::*;
//!
//! // Two levels: three car slots, then two truck slots.
//! let layout = FacilityLayout {
//!     levels: vec![
//!         LevelSpec::uniform(3, VehicleCategory::Car),
//!         LevelSpec::uniform(2, VehicleCategory::Truck),
//!     ],
//! };
//! let facility = Facility::new(layout).unwrap();
//!
//! let car = Vehicle::new(VehicleId(17), VehicleCategory::Car).unwrap();
//! let slot = facility.entry(car).unwrap();
//! assert_eq!(slot, SlotId(1)); // first-fit: level 0, slot 0
//!
//! assert_eq!(facility.occupancy_grid(), "X..\n..\n");
//! facility.exit(slot).unwrap();
//! assert_eq!(facility.occupancy_grid(), "...\n..\n");
//! ```
//!
//! # Concurrency
//!
//! A `Facility` is the unit of sharing: wrap it in an `Arc` and call
//! [`entry`](Facility::entry) / [`exit`](Facility::exit) from any
//! number of threads. Operations on the same slot are linearizable;
//! there is no ordering guarantee across slots, and a concurrent scan
//! may miss capacity that frees up an instant later (callers retry if
//! they care).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod facility;
pub mod layout;
pub mod level;
pub mod metrics;
pub mod slot;

pub use facility::Facility;
pub use layout::{FacilityLayout, LayoutError, LevelSpec, SlotSpec};
pub use level::Level;
pub use metrics::{LevelOccupancy, OccupancyStats};
pub use slot::Slot;

// Re-export the leaf types so callers need only one dependency.
pub use parkade_core::{
    CategorySet, EntryError, ExitError, SlotError, SlotId, SlotIdGenerator, Vehicle,
    VehicleCategory, VehicleError, VehicleId,
};

/// Convenience re-exports for callers of the allocator.
pub mod prelude {
    pub use crate::facility::Facility;
    pub use crate::layout::{FacilityLayout, LevelSpec, SlotSpec};
    pub use parkade_core::{
        EntryError, ExitError, SlotId, Vehicle, VehicleCategory, VehicleId,
    };
}
