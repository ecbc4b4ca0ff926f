use crate::errors::Result;
use crate::model::Entity;

/// CRUD capability over one entity type
///
/// Lookup misses are `Ok(None)` / empty results. `Err` is reserved for
/// backing failures, which implementations propagate unmodified.
pub trait CrudService<T: Entity>: Send + Sync {
    /// All stored entities, in store iteration order
    fn find_all(&self) -> Result<Vec<T>>;

    /// The entity at `id`, if any
    fn find_by_id(&self, id: T::Id) -> Result<Option<T>>;

    /// Store `entity`, assigning an identity if it has none
    ///
    /// The returned entity always carries an identity for in-memory stores.
    fn save(&self, entity: T) -> Result<T>;

    /// Delete `entity` by its identity; an unsaved entity is a no-op
    fn delete(&self, entity: &T) -> Result<()> {
        match entity.id() {
            Some(id) => self.delete_by_id(id),
            None => Ok(()),
        }
    }

    /// Delete the entity at `id`; a miss is a no-op
    fn delete_by_id(&self, id: T::Id) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Speciality;
    use std::sync::Mutex;

    /// Records which ids reach `delete_by_id`
    #[derive(Default)]
    struct RecordingService {
        deleted: Mutex<Vec<u64>>,
    }

    impl CrudService<Speciality> for RecordingService {
        fn find_all(&self) -> Result<Vec<Speciality>> {
            Ok(Vec::new())
        }

        fn find_by_id(&self, _id: u64) -> Result<Option<Speciality>> {
            Ok(None)
        }

        fn save(&self, entity: Speciality) -> Result<Speciality> {
            Ok(entity)
        }

        fn delete_by_id(&self, id: u64) -> Result<()> {
            self.deleted.lock().unwrap().push(id);
            Ok(())
        }
    }

    // Compile-time test: ensure the trait is object-safe
    fn _assert_crud_service_object_safe(_: &dyn CrudService<Speciality>) {}

    #[test]
    fn test_delete_delegates_to_delete_by_id() {
        let service = RecordingService::default();
        let mut speciality = Speciality::new("radiology");
        speciality.id = Some(4);

        service.delete(&speciality).unwrap();

        assert_eq!(*service.deleted.lock().unwrap(), vec![4]);
    }

    #[test]
    fn test_delete_without_identity_is_noop() {
        let service = RecordingService::default();

        service.delete(&Speciality::new("radiology")).unwrap();

        assert!(service.deleted.lock().unwrap().is_empty());
    }
}
