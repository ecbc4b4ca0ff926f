use petclinic_core_types::EntityKind;
use serde::{Deserialize, Serialize};

use super::entity::{impl_entity, EntityId};

/// Owner - a client of the clinic
///
/// Pets are referenced by id, in the order they were registered. The owner
/// does not own its pets' lifecycle: deleting an owner leaves its pets in
/// place.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Owner {
    /// Identity, assigned on first save
    pub id: Option<EntityId>,

    pub first_name: String,

    pub last_name: String,

    pub address: String,

    pub city: String,

    pub telephone: String,

    /// Registered pet ids (in registration order)
    pub pet_ids: Vec<EntityId>,
}

impl Owner {
    /// Create an unsaved owner with the given name
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    /// Create an owner that already carries an identity
    pub fn with_id(id: EntityId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            ..Self::new(first_name, last_name)
        }
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Add a pet id to this owner's pet list
    pub fn add_pet_id(&mut self, pet_id: EntityId) {
        if !self.pet_ids.contains(&pet_id) {
            self.pet_ids.push(pet_id);
        }
    }

    pub fn has_pet(&self, pet_id: EntityId) -> bool {
        self.pet_ids.contains(&pet_id)
    }
}

impl_entity!(Owner, EntityKind::Owner);
