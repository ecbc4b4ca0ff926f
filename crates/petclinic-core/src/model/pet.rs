use chrono::NaiveDate;
use petclinic_core_types::EntityKind;
use serde::{Deserialize, Serialize};

use super::entity::{impl_entity, EntityId};

/// Pet - an animal registered to an owner
///
/// `owner_id` is a weak back-reference: it is followed by lookup and may
/// dangle after the owner is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pet {
    /// Identity, assigned on first save
    pub id: Option<EntityId>,

    pub name: String,

    pub birth_date: Option<NaiveDate>,

    /// Referenced pet type id
    pub pet_type_id: Option<EntityId>,

    /// Owning owner id (lookup only)
    pub owner_id: Option<EntityId>,

    /// Visit ids in the order they were recorded
    pub visit_ids: Vec<EntityId>,
}

impl Pet {
    /// Create an unsaved pet with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create a nameless pet that already carries an identity
    pub fn with_id(id: EntityId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn is_owned(&self) -> bool {
        self.owner_id.is_some()
    }

    /// Add a visit id to this pet's history
    pub fn add_visit_id(&mut self, visit_id: EntityId) {
        if !self.visit_ids.contains(&visit_id) {
            self.visit_ids.push(visit_id);
        }
    }
}

impl_entity!(Pet, EntityKind::Pet);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entity;

    #[test]
    fn test_with_id_pet() {
        let pet = Pet::with_id(12);
        assert_eq!(pet.id(), Some(12));
        assert!(!pet.is_owned());
        assert!(pet.name.is_empty());
    }

    #[test]
    fn test_add_visit_id_keeps_order() {
        let mut pet = Pet::new("Rosy");
        pet.add_visit_id(2);
        pet.add_visit_id(1);
        pet.add_visit_id(2);
        assert_eq!(pet.visit_ids, vec![2, 1]);
    }
}
