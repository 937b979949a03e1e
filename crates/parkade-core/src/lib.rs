//! Core types for the parkade parking-slot allocator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the typed identifiers, the vehicle model, and the error taxonomy
//! shared by the allocator crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod vehicle;

pub use error::{EntryError, ExitError, SlotError, VehicleError};
pub use id::{SlotId, SlotIdGenerator, VehicleId};
pub use vehicle::{CategorySet, Vehicle, VehicleCategory};
