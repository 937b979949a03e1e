//! The vehicle model: categories, category sets, and the vehicle record.

use crate::error::VehicleError;
use crate::id::VehicleId;
use smallvec::SmallVec;
use std::fmt;

/// The class of vehicle a slot is willing to host.
///
/// A closed, small set. [`Unknown`](VehicleCategory::Unknown) is the
/// zero-value sentinel: it is the `Default`, it is never assignable to
/// a constructed [`Vehicle`], and layout validation rejects slots that
/// accept it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VehicleCategory {
    /// Sentinel: no category. Never valid for a real vehicle or slot.
    #[default]
    Unknown,
    /// Motorcycles, scooters, and other two-wheelers.
    TwoWheeler,
    /// Passenger cars.
    Car,
    /// Trucks and other heavy vehicles.
    Truck,
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::TwoWheeler => write!(f, "two-wheeler"),
            Self::Car => write!(f, "car"),
            Self::Truck => write!(f, "truck"),
        }
    }
}

/// The set of categories a slot accepts.
///
/// `SmallVec<[VehicleCategory; 4]>` keeps the common case (one to four
/// categories) off the heap; larger sets spill transparently.
pub type CategorySet = SmallVec<[VehicleCategory; 4]>;

/// An immutable record of a vehicle's identity and category.
///
/// Construction validates both fields; once built, a `Vehicle` is
/// plain copyable data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vehicle {
    id: VehicleId,
    category: VehicleCategory,
}

impl Vehicle {
    /// Create a vehicle with the given identity and category.
    ///
    /// Returns `Err(VehicleError::ZeroId)` if `id` is the reserved
    /// zero value, or `Err(VehicleError::UnknownCategory)` if
    /// `category` is the [`VehicleCategory::Unknown`] sentinel.
    pub fn new(id: VehicleId, category: VehicleCategory) -> Result<Self, VehicleError> {
        if id.0 == 0 {
            return Err(VehicleError::ZeroId);
        }
        if category == VehicleCategory::Unknown {
            return Err(VehicleError::UnknownCategory);
        }
        Ok(Self { id, category })
    }

    /// The caller-supplied identity. Always non-zero.
    pub fn id(&self) -> VehicleId {
        self.id
    }

    /// The vehicle's category. Never [`VehicleCategory::Unknown`].
    pub fn category(&self) -> VehicleCategory {
        self.category
    }
}
