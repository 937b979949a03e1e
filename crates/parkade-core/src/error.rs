//! Error types for the parkade allocator.
//!
//! One enum per subsystem: vehicle construction, single-slot
//! admission/release, facility entry, and facility exit. All variants
//! are recoverable data-level outcomes; none are retried internally.

use std::error::Error;
use std::fmt;

use crate::id::SlotId;
use crate::vehicle::VehicleCategory;

/// Errors from [`Vehicle::new`](crate::Vehicle::new).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VehicleError {
    /// The id is the reserved zero value ("no occupant" sentinel).
    ZeroId,
    /// The category is the [`VehicleCategory::Unknown`] sentinel.
    UnknownCategory,
}

impl fmt::Display for VehicleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroId => write!(f, "vehicle id must be non-zero"),
            Self::UnknownCategory => write!(f, "vehicle category must not be unknown"),
        }
    }
}

impl Error for VehicleError {}

/// Errors from a single slot's admission/release operations.
///
/// `NotAvailable` drives scan continuation inside the facility's entry
/// loop and never surfaces to the facility's caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotError {
    /// The slot is occupied or does not accept the vehicle's category.
    NotAvailable,
    /// A release was attempted on a slot with no occupant.
    AlreadyEmpty,
}

impl fmt::Display for SlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAvailable => write!(f, "slot not available"),
            Self::AlreadyEmpty => write!(f, "slot already empty"),
        }
    }
}

impl Error for SlotError {}

/// Errors from the facility's entry operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryError {
    /// No slot in the facility accepted the vehicle after a full scan.
    NoCapacity {
        /// The category that could not be placed.
        category: VehicleCategory,
    },
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCapacity { category } => {
                write!(f, "no capacity for {category} vehicle")
            }
        }
    }
}

impl Error for EntryError {}

/// Errors from the facility's exit operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitError {
    /// No slot in the facility has the supplied id.
    SlotNotFound {
        /// The unrecognized id.
        id: SlotId,
    },
    /// The slot exists but has no occupant (double exit).
    AlreadyEmpty {
        /// The id of the empty slot.
        id: SlotId,
    },
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SlotNotFound { id } => write!(f, "slot {id} not found"),
            Self::AlreadyEmpty { id } => write!(f, "slot {id} already empty"),
        }
    }
}

impl Error for ExitError {}
