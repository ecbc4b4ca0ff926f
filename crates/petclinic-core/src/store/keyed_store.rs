use std::collections::BTreeMap;
use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::errors::{ClinicError, Result};
use crate::model::{Entity, Identity};

/// Thread-safe in-memory store for one entity type
///
/// Entities are keyed by identity in an ordered map, so iteration order is
/// ascending identity. Fresh identities are `successor(max key)`: a freed
/// identity is handed out again only when it was the maximum. Once the
/// maximum key is the top of the identity range, the smallest free positive
/// identity is used instead.
///
/// Every mutation is a single map operation performed under the write
/// guard, so a poisoned lock cannot expose a partial write and is recovered
/// rather than reported.
pub struct KeyedStore<T: Entity> {
    entries: RwLock<BTreeMap<T::Id, T>>,
}

impl<T: Entity> KeyedStore<T> {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<T::Id, T>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<T::Id, T>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store an entity, assigning an identity if it has none
    ///
    /// Identity assignment and insertion happen under one write guard, so
    /// concurrent callers never receive the same fresh identity. An entity
    /// that already carries an identity overwrites (or creates) that key.
    ///
    /// Returns the entity as stored.
    ///
    /// # Errors
    ///
    /// Returns `IdentityExhausted` if the entity has no identity and every
    /// positive identity is taken. Nothing is stored in that case.
    pub fn put(&self, mut entity: T) -> Result<T> {
        let mut entries = self.write();

        let id = match entity.id() {
            Some(id) => id,
            None => {
                let next = fresh_identity(&entries)
                    .ok_or(ClinicError::IdentityExhausted { kind: T::KIND })?;
                entity.set_id(next);
                next
            }
        };

        entries.insert(id, entity.clone());
        Ok(entity)
    }

    /// Get the entity stored at `id`
    pub fn get(&self, id: T::Id) -> Option<T> {
        self.read().get(&id).cloned()
    }

    /// Snapshot of all stored entities, in ascending identity order
    pub fn get_all(&self) -> Vec<T> {
        self.read().values().cloned().collect()
    }

    /// Remove the entity at `id`
    ///
    /// Returns whether an entity was removed; a miss is not an error.
    pub fn remove(&self, id: T::Id) -> bool {
        self.write().remove(&id).is_some()
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.read().contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Remove every entity
    pub fn clear(&self) {
        self.write().clear();
    }
}

/// `successor(max key)`, falling back to the smallest free positive key
fn fresh_identity<I: Identity, T>(entries: &BTreeMap<I, T>) -> Option<I> {
    match entries.keys().next_back() {
        None => Some(I::first()),
        Some(max) => max
            .checked_successor()
            .or_else(|| smallest_free(entries)),
    }
}

fn smallest_free<I: Identity, T>(entries: &BTreeMap<I, T>) -> Option<I> {
    let mut candidate = I::first();
    for &key in entries.range(candidate..).map(|(key, _)| key) {
        if key != candidate {
            return Some(candidate);
        }
        candidate = candidate.checked_successor()?;
    }
    Some(candidate)
}

impl<T: Entity> Default for KeyedStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> fmt::Debug for KeyedStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedStore")
            .field("kind", &T::KIND)
            .field("len", &self.len())
            .finish()
    }
}
