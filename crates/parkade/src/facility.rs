//! The top-level allocator: routes entry/exit requests to slots.
//!
//! [`Facility`] owns all levels and slots for one installation and is
//! the unit of sharing across threads. Placement is first-fit: the
//! scan visits levels, then slots within a level, in declaration
//! order, and the first slot that accepts wins. There is no
//! facility-wide lock — contention is local to individual slots.

use crate::layout::{FacilityLayout, LayoutError};
use crate::level::Level;
use crate::metrics::{LevelOccupancy, OccupancyStats};
use crate::slot::Slot;

use parkade_core::{
    EntryError, ExitError, SlotId, SlotIdGenerator, Vehicle, VehicleCategory,
};

/// Occupancy-grid marker for an empty slot.
const GRID_EMPTY: char = '.';
/// Occupancy-grid marker for an occupied slot.
const GRID_OCCUPIED: char = 'X';

/// The top-level parking allocator.
///
/// Constructed once from a static [`FacilityLayout`] and shared (via
/// `Arc`) across any number of concurrent callers. Every operation is
/// self-contained and side-effect-free on failure: no partial
/// admission, no partial release, no internal retries.
#[derive(Debug)]
pub struct Facility {
    levels: Vec<Level>,
}

// Compile-time assertion: Facility must be Send + Sync.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<Facility>();
};

impl Facility {
    /// Build a facility from a layout, minting slot ids in scan order.
    ///
    /// The layout is validated first; ids start at 1 and follow the
    /// scan order (level by level, slot by slot), so a given layout
    /// always produces the same ids.
    pub fn new(layout: FacilityLayout) -> Result<Self, LayoutError> {
        layout.validate()?;
        let ids = SlotIdGenerator::new();
        let levels = layout
            .levels
            .into_iter()
            .enumerate()
            .map(|(index, spec)| {
                let slots = spec
                    .slots
                    .into_iter()
                    .map(|slot| Slot::new(ids.generate(), slot.categories))
                    .collect();
                Level::new(index, slots)
            })
            .collect();
        Ok(Self { levels })
    }

    /// The facility's levels in scan order.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Total number of slots across all levels.
    pub fn slot_count(&self) -> usize {
        self.levels.iter().map(|l| l.slots().len()).sum()
    }

    /// Admit a vehicle, returning the id of the slot that accepted it.
    ///
    /// First-fit: each slot in scan order is asked to
    /// [`try_accommodate`](Slot::try_accommodate) until one succeeds.
    /// Racing callers may both scan the same slot, but at most one
    /// claims it; the loser continues scanning and may fail with
    /// [`EntryError::NoCapacity`] even though capacity existed an
    /// instant earlier. That transient false negative is accepted
    /// behavior — callers retry if they care.
    pub fn entry(&self, vehicle: Vehicle) -> Result<SlotId, EntryError> {
        for slot in self.slots() {
            if let Ok(id) = slot.try_accommodate(vehicle) {
                return Ok(id);
            }
        }
        Err(EntryError::NoCapacity {
            category: vehicle.category(),
        })
    }

    /// Release the slot with the given id.
    ///
    /// Linear-scans for a matching id and delegates to that slot's
    /// [`release`](Slot::release). Fails [`ExitError::SlotNotFound`]
    /// for an id this facility never minted, and
    /// [`ExitError::AlreadyEmpty`] for a double exit.
    pub fn exit(&self, id: SlotId) -> Result<(), ExitError> {
        for slot in self.slots() {
            if slot.id() == id {
                // release() only fails AlreadyEmpty.
                return slot.release().map_err(|_| ExitError::AlreadyEmpty { id });
            }
        }
        Err(ExitError::SlotNotFound { id })
    }

    /// Ids of all slots currently able to accept `category`, in scan
    /// order.
    ///
    /// A point-in-time snapshot: under concurrent entries it may be
    /// stale by the time the caller acts on it. Advisory only — this
    /// is not a reservation.
    pub fn available_slots(&self, category: VehicleCategory) -> Vec<SlotId> {
        self.slots()
            .filter(|slot| slot.can_accommodate(category))
            .map(Slot::id)
            .collect()
    }

    /// Diagnostic occupancy grid: one row per level, one marker per
    /// slot in scan order (`X` occupied, `.` empty), every row
    /// terminated by a newline.
    ///
    /// Each slot is read under its own lock, so under concurrent
    /// mutation the grid can mix states from slightly different
    /// instants.
    pub fn occupancy_grid(&self) -> String {
        let mut grid = String::with_capacity(self.slot_count() + self.levels.len());
        for level in &self.levels {
            for slot in level.slots() {
                grid.push(if slot.is_occupied() {
                    GRID_OCCUPIED
                } else {
                    GRID_EMPTY
                });
            }
            grid.push('\n');
        }
        grid
    }

    /// Point-in-time occupancy counts, facility-wide and per level.
    pub fn occupancy(&self) -> OccupancyStats {
        let per_level: Vec<LevelOccupancy> = self
            .levels
            .iter()
            .map(|level| LevelOccupancy {
                level: level.index(),
                total_slots: level.slots().len(),
                occupied_slots: level.slots().iter().filter(|s| s.is_occupied()).count(),
            })
            .collect();
        OccupancyStats {
            total_slots: per_level.iter().map(|l| l.total_slots).sum(),
            occupied_slots: per_level.iter().map(|l| l.occupied_slots).sum(),
            per_level,
        }
    }

    /// All slots in scan order.
    fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.levels.iter().flat_map(|level| level.slots().iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LevelSpec;
    use parkade_core::VehicleId;
    use proptest::prelude::*;

    /// Three levels of three slots: cars, then two-wheelers, then trucks.
    fn three_by_three() -> Facility {
        Facility::new(FacilityLayout {
            levels: vec![
                LevelSpec::uniform(3, VehicleCategory::Car),
                LevelSpec::uniform(3, VehicleCategory::TwoWheeler),
                LevelSpec::uniform(3, VehicleCategory::Truck),
            ],
        })
        .unwrap()
    }

    fn vehicle(id: u64, category: VehicleCategory) -> Vehicle {
        Vehicle::new(VehicleId(id), category).unwrap()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_mints_ids_in_scan_order() {
        let facility = three_by_three();
        let ids: Vec<_> = facility
            .levels()
            .iter()
            .flat_map(|l| l.slots().iter().map(Slot::id))
            .collect();
        let expected: Vec<_> = (1..=9).map(SlotId).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn new_rejects_invalid_layout() {
        let result = Facility::new(FacilityLayout { levels: vec![] });
        assert_eq!(result.unwrap_err(), LayoutError::NoLevels);
    }

    // ── Entry / exit ────────────────────────────────────────────

    #[test]
    fn entry_exit_round_trip_per_category() {
        let facility = three_by_three();

        let car_slot = facility.entry(vehicle(1, VehicleCategory::Car)).unwrap();
        let bike_slot = facility
            .entry(vehicle(2, VehicleCategory::TwoWheeler))
            .unwrap();
        let truck_slot = facility.entry(vehicle(3, VehicleCategory::Truck)).unwrap();

        // First-fit: first slot of the matching level.
        assert_eq!(car_slot, SlotId(1));
        assert_eq!(bike_slot, SlotId(4));
        assert_eq!(truck_slot, SlotId(7));

        assert_eq!(facility.occupancy_grid(), "X..\nX..\nX..\n");

        facility.exit(car_slot).unwrap();
        facility.exit(bike_slot).unwrap();
        facility.exit(truck_slot).unwrap();
        assert_eq!(facility.occupancy_grid(), "...\n...\n...\n");
    }

    #[test]
    fn entry_skips_occupied_slots() {
        let facility = three_by_three();
        assert_eq!(
            facility.entry(vehicle(1, VehicleCategory::Car)),
            Ok(SlotId(1))
        );
        assert_eq!(
            facility.entry(vehicle(2, VehicleCategory::Car)),
            Ok(SlotId(2))
        );
        assert_eq!(
            facility.entry(vehicle(3, VehicleCategory::Car)),
            Ok(SlotId(3))
        );
    }

    #[test]
    fn entry_full_category_fails_no_capacity() {
        let facility = three_by_three();
        for id in 1..=3 {
            facility.entry(vehicle(id, VehicleCategory::Car)).unwrap();
        }
        assert_eq!(
            facility.entry(vehicle(4, VehicleCategory::Car)),
            Err(EntryError::NoCapacity {
                category: VehicleCategory::Car
            })
        );
        // Other categories are unaffected.
        assert!(facility.entry(vehicle(5, VehicleCategory::Truck)).is_ok());
    }

    #[test]
    fn entry_no_matching_category_fails_regardless_of_occupancy() {
        // A facility with no truck slots at all.
        let facility = Facility::new(FacilityLayout {
            levels: vec![LevelSpec::uniform(3, VehicleCategory::Car)],
        })
        .unwrap();
        assert_eq!(
            facility.entry(vehicle(1, VehicleCategory::Truck)),
            Err(EntryError::NoCapacity {
                category: VehicleCategory::Truck
            })
        );
    }

    #[test]
    fn entry_never_places_in_excluding_slot() {
        let facility = three_by_three();
        let slot_id = facility.entry(vehicle(1, VehicleCategory::Truck)).unwrap();
        let slot = facility
            .levels()
            .iter()
            .flat_map(|l| l.slots())
            .find(|s| s.id() == slot_id)
            .unwrap();
        assert!(slot.accepted_categories().contains(&VehicleCategory::Truck));
    }

    #[test]
    fn exit_unknown_id_fails_slot_not_found() {
        let facility = three_by_three();
        assert_eq!(
            facility.exit(SlotId(100)),
            Err(ExitError::SlotNotFound { id: SlotId(100) })
        );
    }

    #[test]
    fn exit_twice_fails_already_empty() {
        let facility = three_by_three();
        let id = facility.entry(vehicle(1, VehicleCategory::Car)).unwrap();
        assert_eq!(facility.exit(id), Ok(()));
        assert_eq!(facility.exit(id), Err(ExitError::AlreadyEmpty { id }));
    }

    #[test]
    fn exit_empty_slot_fails_already_empty() {
        let facility = three_by_three();
        assert_eq!(
            facility.exit(SlotId(1)),
            Err(ExitError::AlreadyEmpty { id: SlotId(1) })
        );
    }

    #[test]
    fn freed_slot_is_reused_first_fit() {
        let facility = three_by_three();
        let first = facility.entry(vehicle(1, VehicleCategory::Car)).unwrap();
        facility.entry(vehicle(2, VehicleCategory::Car)).unwrap();
        facility.exit(first).unwrap();
        // The freed slot is earliest in scan order, so it wins again.
        assert_eq!(
            facility.entry(vehicle(3, VehicleCategory::Car)),
            Ok(first)
        );
    }

    // ── Availability / diagnostics ──────────────────────────────

    #[test]
    fn available_slots_in_scan_order() {
        let facility = three_by_three();
        assert_eq!(
            facility.available_slots(VehicleCategory::Car),
            vec![SlotId(1), SlotId(2), SlotId(3)]
        );

        facility.entry(vehicle(1, VehicleCategory::Car)).unwrap();
        assert_eq!(
            facility.available_slots(VehicleCategory::Car),
            vec![SlotId(2), SlotId(3)]
        );
        // Other categories see their own levels only.
        assert_eq!(
            facility.available_slots(VehicleCategory::Truck),
            vec![SlotId(7), SlotId(8), SlotId(9)]
        );
    }

    #[test]
    fn multi_category_slot_is_available_to_each() {
        let facility = Facility::new(FacilityLayout {
            levels: vec![LevelSpec {
                slots: vec![crate::layout::SlotSpec::any_of([
                    VehicleCategory::Car,
                    VehicleCategory::TwoWheeler,
                ])],
            }],
        })
        .unwrap();
        assert_eq!(
            facility.available_slots(VehicleCategory::Car),
            vec![SlotId(1)]
        );
        assert_eq!(
            facility.available_slots(VehicleCategory::TwoWheeler),
            vec![SlotId(1)]
        );
        assert!(facility.available_slots(VehicleCategory::Truck).is_empty());
    }

    #[test]
    fn occupancy_grid_matches_layout_shape() {
        let facility = Facility::new(FacilityLayout {
            levels: vec![
                LevelSpec::uniform(2, VehicleCategory::Car),
                LevelSpec::uniform(4, VehicleCategory::Truck),
            ],
        })
        .unwrap();
        assert_eq!(facility.occupancy_grid(), "..\n....\n");
    }

    #[test]
    fn occupancy_counts_per_level() {
        let facility = three_by_three();
        facility.entry(vehicle(1, VehicleCategory::Car)).unwrap();
        facility.entry(vehicle(2, VehicleCategory::Car)).unwrap();
        facility.entry(vehicle(3, VehicleCategory::Truck)).unwrap();

        let stats = facility.occupancy();
        assert_eq!(stats.total_slots, 9);
        assert_eq!(stats.occupied_slots, 3);
        assert_eq!(stats.free_slots(), 6);
        assert_eq!(
            stats.per_level,
            vec![
                LevelOccupancy {
                    level: 0,
                    total_slots: 3,
                    occupied_slots: 2
                },
                LevelOccupancy {
                    level: 1,
                    total_slots: 3,
                    occupied_slots: 0
                },
                LevelOccupancy {
                    level: 2,
                    total_slots: 3,
                    occupied_slots: 1
                },
            ]
        );
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_category() -> impl Strategy<Value = VehicleCategory> {
        prop_oneof![
            Just(VehicleCategory::TwoWheeler),
            Just(VehicleCategory::Car),
            Just(VehicleCategory::Truck),
        ]
    }

    proptest! {
        /// Without concurrency, identical entry sequences always yield
        /// identical slot assignments (first-fit determinism).
        #[test]
        fn entry_sequence_is_deterministic(
            categories in prop::collection::vec(arb_category(), 0..24),
        ) {
            let run = |facility: &Facility| -> Vec<Result<SlotId, EntryError>> {
                categories
                    .iter()
                    .enumerate()
                    .map(|(i, &cat)| facility.entry(vehicle(i as u64 + 1, cat)))
                    .collect()
            };
            let first = run(&three_by_three());
            let second = run(&three_by_three());
            prop_assert_eq!(first, second);
        }

        /// A granted slot always accepts the vehicle's category.
        #[test]
        fn entry_respects_category(
            categories in prop::collection::vec(arb_category(), 1..24),
        ) {
            let facility = three_by_three();
            for (i, &cat) in categories.iter().enumerate() {
                if let Ok(id) = facility.entry(vehicle(i as u64 + 1, cat)) {
                    let slot = facility
                        .levels()
                        .iter()
                        .flat_map(|l| l.slots())
                        .find(|s| s.id() == id)
                        .unwrap();
                    prop_assert!(slot.accepted_categories().contains(&cat));
                }
            }
        }

        /// Occupied count never exceeds the number of successful
        /// entries minus successful exits.
        #[test]
        fn occupancy_tracks_entries_and_exits(
            categories in prop::collection::vec(arb_category(), 1..24),
        ) {
            let facility = three_by_three();
            let mut granted = Vec::new();
            for (i, &cat) in categories.iter().enumerate() {
                if let Ok(id) = facility.entry(vehicle(i as u64 + 1, cat)) {
                    granted.push(id);
                }
            }
            prop_assert_eq!(facility.occupancy().occupied_slots, granted.len());

            for id in &granted {
                prop_assert_eq!(facility.exit(*id), Ok(()));
            }
            prop_assert_eq!(facility.occupancy().occupied_slots, 0);
        }
    }
}
