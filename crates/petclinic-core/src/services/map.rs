//! In-memory CRUD services
//!
//! One [`MapService`] per entity type, each owning its own [`KeyedStore`].
//! Every operation is a pure delegation to the store. Only `save` can
//! fail, when the store's identity range is exhausted.

use std::sync::Arc;
use std::time::Instant;

use super::crud::CrudService;
use super::owner::OwnerService;
use crate::errors::Result;
use crate::logging_facility::elapsed_ms;
use crate::model::{Entity, Owner, Pet, PetType, Speciality, Vet, Visit};
use crate::queries::owner_queries;
use crate::store::KeyedStore;
use crate::{log_op_end, log_op_error, log_op_start};

/// CRUD service backed by an in-memory keyed store
#[derive(Debug)]
pub struct MapService<T: Entity> {
    store: Arc<KeyedStore<T>>,
}

pub type OwnerMapService = MapService<Owner>;
pub type PetMapService = MapService<Pet>;
pub type PetTypeMapService = MapService<PetType>;
pub type VisitMapService = MapService<Visit>;
pub type SpecialityMapService = MapService<Speciality>;
pub type VetMapService = MapService<Vet>;

impl<T: Entity> MapService<T> {
    /// Create a service over a fresh, empty store
    pub fn new() -> Self {
        Self::with_store(Arc::new(KeyedStore::new()))
    }

    /// Create a service over an existing store
    pub fn with_store(store: Arc<KeyedStore<T>>) -> Self {
        Self { store }
    }

    /// The backing store
    pub fn store(&self) -> &Arc<KeyedStore<T>> {
        &self.store
    }
}

impl<T: Entity> Default for MapService<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Clone for MapService<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<T: Entity> CrudService<T> for MapService<T> {
    fn find_all(&self) -> Result<Vec<T>> {
        let all = self.store.get_all();
        tracing::debug!(entity_kind = T::KIND.as_str(), result_len = all.len(), "find_all");
        Ok(all)
    }

    fn find_by_id(&self, id: T::Id) -> Result<Option<T>> {
        let found = self.store.get(id);
        tracing::debug!(
            entity_kind = T::KIND.as_str(),
            entity_id = %id,
            found = found.is_some(),
            "find_by_id"
        );
        Ok(found)
    }

    fn save(&self, entity: T) -> Result<T> {
        let started = Instant::now();
        log_op_start!("save", entity_kind = T::KIND.as_str(), new = entity.is_new());

        let saved = match self.store.put(entity) {
            Ok(saved) => saved,
            Err(err) => {
                log_op_error!(
                    "save",
                    err,
                    duration_ms = elapsed_ms(started),
                    entity_kind = T::KIND.as_str()
                );
                return Err(err);
            }
        };

        let entity_id = saved.id().map(|id| id.to_string()).unwrap_or_default();
        log_op_end!(
            "save",
            duration_ms = elapsed_ms(started),
            entity_kind = T::KIND.as_str(),
            entity_id = entity_id.as_str()
        );
        Ok(saved)
    }

    fn delete_by_id(&self, id: T::Id) -> Result<()> {
        let started = Instant::now();
        log_op_start!("delete_by_id", entity_kind = T::KIND.as_str(), entity_id = %id);

        let removed = self.store.remove(id);

        log_op_end!(
            "delete_by_id",
            duration_ms = elapsed_ms(started),
            entity_kind = T::KIND.as_str(),
            entity_id = %id,
            removed = removed
        );
        Ok(())
    }
}

impl OwnerService for MapService<Owner> {
    fn find_by_last_name(&self, last_name: &str) -> Result<Option<Owner>> {
        Ok(owner_queries::find_by_last_name(self.find_all()?, last_name))
    }

    fn find_all_by_last_name_like(&self, pattern: &str) -> Result<Vec<Owner>> {
        let started = Instant::now();
        log_op_start!("find_all_by_last_name_like", pattern = pattern);

        let found = owner_queries::filter_last_name_like(self.find_all()?, pattern);

        log_op_end!(
            "find_all_by_last_name_like",
            duration_ms = elapsed_ms(started),
            pattern = pattern,
            result_len = found.len()
        );
        Ok(found)
    }
}
