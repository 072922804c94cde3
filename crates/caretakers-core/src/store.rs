//! In-memory record collection for one entity kind.

use chrono::NaiveDate;
use log::{debug, warn};
use thiserror::Error;

use crate::entity::Entity;
use crate::models::EntityId;

/// Store errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("No {kind} ids left to assign")]
    IdsExhausted { kind: &'static str },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Ordered collection of records of one kind.
///
/// Records keep insertion order. Identifiers come from a monotonic counter
/// owned by the store and are never reused, even after a delete. Operations
/// on an absent id change nothing and report `false`.
#[derive(Debug, Clone)]
pub struct EntityStore<E: Entity> {
    records: Vec<E>,
    /// `None` once the id space is used up
    next_id: Option<u64>,
}

impl<E: Entity> Default for EntityStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> EntityStore<E> {
    /// Empty store handing out ids from 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Empty store handing out ids from `first_id`.
    pub fn starting_at(first_id: u64) -> Self {
        Self {
            records: Vec::new(),
            next_id: Some(first_id.max(1)),
        }
    }

    /// Store pre-filled with `records`; new ids continue after the highest
    /// seeded id. Later duplicates of an id are dropped.
    pub fn with_records(records: Vec<E>) -> Self {
        let mut store = Self::new();
        store.seed(records);
        store
    }

    /// Append existing records, keeping their ids.
    pub fn seed(&mut self, records: Vec<E>) {
        for record in records {
            if self.position(record.id()).is_some() {
                debug!("{} {} already stored, skipping seed", E::KIND, record.id());
                continue;
            }
            self.reserve_through(record.id());
            self.records.push(record);
        }
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[E] {
        &self.records
    }

    pub fn get(&self, id: EntityId) -> Option<&E> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Id the next [`add`](Self::add) will assign, `None` when exhausted.
    pub fn peek_next_id(&self) -> Option<EntityId> {
        self.next_id.map(EntityId)
    }

    /// Create a record dated today (local time).
    pub fn add(&mut self, draft: E::Draft) -> StoreResult<&E> {
        let today = chrono::Local::now().date_naive();
        self.add_on(draft, today)
    }

    /// Create a record with an explicit creation date.
    ///
    /// Fails without touching the store once every id has been handed out.
    pub fn add_on(&mut self, draft: E::Draft, date: NaiveDate) -> StoreResult<&E> {
        let Some(next) = self.next_id else {
            warn!("{} ids exhausted", E::KIND);
            return Err(StoreError::IdsExhausted { kind: E::KIND });
        };
        let id = EntityId(next);
        self.next_id = next.checked_add(1);

        let record = E::create(id, draft, date);
        debug!("Added {} {} ({})", E::KIND, id, record.name());
        self.records.push(record);

        let last = self.records.len() - 1;
        Ok(&self.records[last])
    }

    /// Replace the record with `id` by `record`.
    ///
    /// The replacement is stored as given except for the fields that never
    /// change after creation, which are kept from the stored record.
    pub fn update(&mut self, id: EntityId, mut record: E) -> bool {
        match self.position(id) {
            Some(index) => {
                record.pin_immutable(&self.records[index]);
                debug!("Updated {} {}", E::KIND, id);
                self.records[index] = record;
                true
            }
            None => {
                debug!("Update of unknown {} {} ignored", E::KIND, id);
                false
            }
        }
    }

    /// Delete the record with `id`.
    pub fn remove(&mut self, id: EntityId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.records.remove(index);
                debug!("Removed {} {}", E::KIND, id);
                true
            }
            None => {
                debug!("Removal of unknown {} {} ignored", E::KIND, id);
                false
            }
        }
    }

    /// Records whose name contains `query`, ignoring case, in store order.
    pub fn search(&self, query: &str) -> Vec<&E> {
        let needle = query.trim().to_lowercase();
        self.records
            .iter()
            .filter(|r| r.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// First record whose name equals `name` exactly.
    ///
    /// Display names are the only link between a patient's caretaker field
    /// and the caretaker collection.
    pub fn find_by_name(&self, name: &str) -> Option<&E> {
        self.records.iter().find(|r| r.name() == name)
    }

    /// Make sure the counter never hands out `id` or anything below it.
    fn reserve_through(&mut self, id: EntityId) {
        self.next_id = match (self.next_id, id.get().checked_add(1)) {
            (Some(next), Some(after)) => Some(next.max(after)),
            _ => None,
        };
    }

    fn position(&self, id: EntityId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }
}
