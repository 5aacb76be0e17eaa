//! In-memory vehicle storage.
//!
//! Vehicles live in a `DashMap` keyed by id, with an atomic sequence
//! handing out new ids.

use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

use dashmap::DashMap;

use crate::models::{Vehicle, fold_case};

/// Vehicle repository backed by a concurrent map.
///
/// Cloning shares the underlying storage.
#[derive(Clone, Debug, Default)]
pub struct VehicleRepository {
    store: Arc<DashMap<i32, Vehicle>>,
    /// Last id handed out
    sequence: Arc<AtomicI32>,
}

impl VehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves the next id, or `None` once the id space is exhausted.
    pub fn next_id(&self) -> Option<i32> {
        self.sequence
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| last.checked_add(1))
            .ok()
            .map(|previous| previous + 1)
    }

    /// Ensures ids handed out later are greater than `id`.
    pub fn advance_sequence_to(&self, id: i32) {
        self.sequence.fetch_max(id, Ordering::SeqCst);
    }

    /// Stores a vehicle under `id`, replacing any previous entry.
    pub fn insert(&self, id: i32, vehicle: Vehicle) {
        self.advance_sequence_to(id);
        self.store.insert(id, vehicle);
    }

    pub fn contains(&self, id: i32) -> bool {
        self.store.contains_key(&id)
    }

    pub fn find_by_id(&self, id: i32) -> Option<Vehicle> {
        self.store.get(&id).map(|entry| entry.value().clone())
    }

    /// All vehicles ordered by id.
    pub fn list_all(&self) -> Vec<Vehicle> {
        let mut vehicles: Vec<(i32, Vehicle)> = self
            .store
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();
        vehicles.sort_by_key(|(id, _)| *id);
        vehicles.into_iter().map(|(_, vehicle)| vehicle).collect()
    }

    /// Replaces the vehicle stored under `id`.
    ///
    /// Returns `false` when no such vehicle exists.
    pub fn update(&self, id: i32, vehicle: Vehicle) -> bool {
        match self.store.get_mut(&id) {
            Some(mut entry) => {
                *entry = vehicle;
                true
            }
            None => false,
        }
    }

    /// Returns `true` iff a vehicle was removed.
    pub fn delete(&self, id: i32) -> bool {
        self.store.remove(&id).is_some()
    }

    /// Whether another vehicle (not `except`) already uses `plate`, compared
    /// case-insensitively.
    pub fn exists_license_plate(&self, plate: &str, except: Option<i32>) -> bool {
        let plate = fold_case(plate);
        self.store.iter().any(|entry| {
            Some(*entry.key()) != except
                && entry
                    .value()
                    .plate()
                    .is_some_and(|existing| fold_case(existing) == plate)
        })
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
