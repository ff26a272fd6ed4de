use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::Serialize;

use crate::domain::route::Route;
use crate::error::{Error, Result};

/// A persisted booking: a user bound to a route, a travel date and the
/// resolved airline.
///
/// The date is an opaque value; it is not validated against any schedule.
/// The airline field holds the preferred airline when one was given,
/// otherwise a comma-joined list of every airline available on the route
/// (in no particular order).
#[derive(Debug, Clone, Serialize)]
pub struct Reservation {
    pub id: u64,
    pub user: String,
    pub route: Route,
    pub date: String,
    pub airline: String,
}

#[derive(Debug, Default)]
struct StoreInner {
    /// Reservation storage, keyed by the assigned id.
    records: HashMap<u64, Reservation>,

    /// The most recently assigned id. Ids are `last + 1`, unique and
    /// increasing; they are never reused.
    last_id: u64,
}

/// Assigns identifiers and persists booking records.
///
/// Records live for the process lifetime; there is no removal operation.
#[derive(Debug, Clone, Default)]
pub struct ReservationStore {
    /// Record map and id counter are protected with a single lock, so id
    /// assignment is serialized.
    inner: Arc<RwLock<StoreInner>>,
}

impl ReservationStore {
    pub fn new() -> Self {
        Self { inner: Arc::new(RwLock::new(StoreInner::default())) }
    }

    /// Persists a booking and assigns the next identifier.
    ///
    /// # Returns
    /// Returns the newly assigned reservation id.
    pub fn insert(&self, user: &str, route: Route, date: &str, airline: String) -> u64 {
        let mut guard = self.inner.write().expect("RwLock poisoned");

        let id = guard.last_id + 1;
        guard.last_id = id;

        let reservation = Reservation { id, user: user.to_string(), route, date: date.to_string(), airline };
        guard.records.insert(id, reservation);

        log::info!("Stored reservation {} for user '{}'.", id, user);

        id
    }

    /// Get a reservation by id.
    ///
    /// # Returns
    /// Returns the stored record, or `ReservationNotFound` for an unknown
    /// id. No mutation, no removal.
    pub fn lookup(&self, id: u64) -> Result<Reservation> {
        let guard = self.inner.read().expect("RwLock poisoned");
        guard.records.get(&id).cloned().ok_or(Error::ReservationNotFound(id))
    }

    pub fn len(&self) -> usize {
        let guard = self.inner.read().expect("RwLock poisoned");
        guard.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
