//! Repository-backed CRUD services
//!
//! A [`Repository`] is an external persistence collaborator. The service
//! layer delegates to it without catching, translating or retrying
//! failures: a backing error reaches the caller exactly as the repository
//! produced it.

use std::marker::PhantomData;
use std::time::Instant;

use super::crud::CrudService;
use crate::errors::Result;
use crate::logging_facility::elapsed_ms;
use crate::model::Entity;
use crate::log_op_error;

/// Persistence collaborator for one entity type
pub trait Repository<T: Entity>: Send + Sync {
    fn find_all(&self) -> Result<Vec<T>>;

    fn find_by_id(&self, id: T::Id) -> Result<Option<T>>;

    fn save(&self, entity: T) -> Result<T>;

    fn delete_by_id(&self, id: T::Id) -> Result<()>;
}

/// CRUD service delegating to a [`Repository`]
pub struct RepositoryService<T: Entity, R: Repository<T>> {
    repository: R,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity, R: Repository<T>> RepositoryService<T, R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            _entity: PhantomData,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

fn report<V>(op: &'static str, kind: &'static str, started: Instant, result: Result<V>) -> Result<V> {
    if let Err(err) = &result {
        log_op_error!(op, *err, duration_ms = elapsed_ms(started), entity_kind = kind);
    }
    result
}

impl<T: Entity, R: Repository<T>> CrudService<T> for RepositoryService<T, R> {
    fn find_all(&self) -> Result<Vec<T>> {
        let started = Instant::now();
        report("find_all", T::KIND.as_str(), started, self.repository.find_all())
    }

    fn find_by_id(&self, id: T::Id) -> Result<Option<T>> {
        let started = Instant::now();
        report("find_by_id", T::KIND.as_str(), started, self.repository.find_by_id(id))
    }

    fn save(&self, entity: T) -> Result<T> {
        let started = Instant::now();
        report("save", T::KIND.as_str(), started, self.repository.save(entity))
    }

    fn delete_by_id(&self, id: T::Id) -> Result<()> {
        let started = Instant::now();
        report("delete_by_id", T::KIND.as_str(), started, self.repository.delete_by_id(id))
    }
}
