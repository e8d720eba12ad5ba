//! Map-backed entity table with store-assigned integer ids.
//!
//! # Invariants
//! - Ids come from a per-table counter and are strictly increasing.
//! - Validation runs before the counter advances, so rejected writes never
//!   consume an id.
//! - Updates fully replace the stored entity; there is no partial merge.
//!
//! The table itself is not synchronized. Owning stores keep it behind a
//! `Mutex` so create/update are serialized across callers.

use crate::model::validation::ValidationError;
use crate::storage::{EntityKind, StoreError, StoreResult};
use std::collections::BTreeMap;

/// Entity that can live in a [`MemoryTable`].
pub trait Entity: Clone {
    const KIND: EntityKind;

    fn id(&self) -> u64;
    fn set_id(&mut self, id: u64);
    fn validate(&self) -> Result<(), ValidationError>;

    /// Fills defaulted fields before the entity is stored.
    fn normalize(&mut self) {}
}

#[derive(Debug)]
pub struct MemoryTable<T> {
    rows: BTreeMap<u64, T>,
    last_id: u64,
}

impl<T> Default for MemoryTable<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T: Entity> MemoryTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// All rows in ascending id order, which is also insertion order.
    pub fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    pub fn get(&self, id: u64) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.rows.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Validates, assigns the next id and stores the entity.
    ///
    /// Any caller-provided id is ignored.
    pub fn insert_new(&mut self, mut entity: T) -> StoreResult<T> {
        entity.validate()?;

        self.last_id += 1;
        let id = self.last_id;
        if self.rows.contains_key(&id) {
            // Unreachable while all inserts go through this method.
            self.last_id -= 1;
            return Err(StoreError::AlreadyExists { kind: T::KIND, id });
        }

        entity.set_id(id);
        entity.normalize();
        self.rows.insert(id, entity.clone());
        Ok(entity)
    }

    /// Validates and replaces an existing entity with the same id.
    pub fn replace(&mut self, mut entity: T) -> StoreResult<T> {
        entity.validate()?;

        let id = entity.id();
        if !self.rows.contains_key(&id) {
            return Err(StoreError::not_found(T::KIND, id));
        }

        entity.normalize();
        self.rows.insert(id, entity.clone());
        Ok(entity)
    }
}
