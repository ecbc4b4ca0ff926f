use super::crud::CrudService;
use crate::errors::Result;
use crate::model::Owner;

/// Owner CRUD plus last-name lookups used by the find-owner workflow
pub trait OwnerService: CrudService<Owner> {
    /// First owner whose last name equals `last_name`, ignoring case
    fn find_by_last_name(&self, last_name: &str) -> Result<Option<Owner>>;

    /// Owners whose last name contains the substring inside a `%substring%`
    /// pattern, ignoring case, in store iteration order
    ///
    /// An empty substring matches every owner; no match is an empty `Vec`.
    fn find_all_by_last_name_like(&self, pattern: &str) -> Result<Vec<Owner>>;
}
