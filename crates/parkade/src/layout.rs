//! Facility layout: the static configuration a facility is built from.
//!
//! [`FacilityLayout`] is plain data describing levels and slots;
//! [`validate()`](FacilityLayout::validate) checks structural
//! invariants before [`Facility::new`](crate::Facility::new) mints slot
//! ids and takes ownership of the structure.

use std::error::Error;
use std::fmt;

use parkade_core::{CategorySet, VehicleCategory};

// ── SlotSpec ───────────────────────────────────────────────────────

/// Specification of one slot: the categories it will accept.
#[derive(Clone, Debug)]
pub struct SlotSpec {
    /// Categories this slot is willing to host. Must be non-empty and
    /// must not contain [`VehicleCategory::Unknown`].
    pub categories: CategorySet,
}

impl SlotSpec {
    /// A slot accepting a single category.
    pub fn for_category(category: VehicleCategory) -> Self {
        Self {
            categories: std::iter::once(category).collect(),
        }
    }

    /// A slot accepting every category in `categories`.
    pub fn any_of(categories: impl IntoIterator<Item = VehicleCategory>) -> Self {
        Self {
            categories: categories.into_iter().collect(),
        }
    }
}

// ── LevelSpec ──────────────────────────────────────────────────────

/// Specification of one level: its slots in scan order.
#[derive(Clone, Debug)]
pub struct LevelSpec {
    /// Slot specifications in scan order. Must be non-empty.
    pub slots: Vec<SlotSpec>,
}

impl LevelSpec {
    /// A level of `count` identical slots, each accepting `category`.
    pub fn uniform(count: usize, category: VehicleCategory) -> Self {
        Self {
            slots: (0..count).map(|_| SlotSpec::for_category(category)).collect(),
        }
    }
}

// ── LayoutError ────────────────────────────────────────────────────

/// Errors detected during [`FacilityLayout::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout has no levels.
    NoLevels,
    /// A level has no slots.
    EmptyLevel {
        /// Index of the empty level.
        level: usize,
    },
    /// A slot accepts no categories.
    NoCategories {
        /// Level index of the offending slot.
        level: usize,
        /// Slot index within the level.
        slot: usize,
    },
    /// A slot accepts the [`VehicleCategory::Unknown`] sentinel.
    UnknownCategory {
        /// Level index of the offending slot.
        level: usize,
        /// Slot index within the level.
        slot: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLevels => write!(f, "layout has no levels"),
            Self::EmptyLevel { level } => write!(f, "level {level} has no slots"),
            Self::NoCategories { level, slot } => {
                write!(f, "slot {slot} on level {level} accepts no categories")
            }
            Self::UnknownCategory { level, slot } => {
                write!(f, "slot {slot} on level {level} accepts the unknown category")
            }
        }
    }
}

impl Error for LayoutError {}

// ── FacilityLayout ─────────────────────────────────────────────────

/// Complete static configuration for constructing a facility.
///
/// Declaration order is load-bearing: the entry scan visits levels,
/// then slots within a level, in exactly this order.
#[derive(Clone, Debug)]
pub struct FacilityLayout {
    /// Level specifications in scan order.
    pub levels: Vec<LevelSpec>,
}

impl FacilityLayout {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), LayoutError> {
        // 1. At least one level.
        if self.levels.is_empty() {
            return Err(LayoutError::NoLevels);
        }
        for (level_idx, level) in self.levels.iter().enumerate() {
            // 2. Each level has at least one slot.
            if level.slots.is_empty() {
                return Err(LayoutError::EmptyLevel { level: level_idx });
            }
            for (slot_idx, slot) in level.slots.iter().enumerate() {
                // 3. Each slot accepts at least one category.
                if slot.categories.is_empty() {
                    return Err(LayoutError::NoCategories {
                        level: level_idx,
                        slot: slot_idx,
                    });
                }
                // 4. The unknown sentinel never enters the allocation path.
                if slot.categories.contains(&VehicleCategory::Unknown) {
                    return Err(LayoutError::UnknownCategory {
                        level: level_idx,
                        slot: slot_idx,
                    });
                }
            }
        }
        Ok(())
    }

    /// Total number of slots across all levels.
    pub fn slot_count(&self) -> usize {
        self.levels.iter().map(|l| l.slots.len()).sum()
    }
}
