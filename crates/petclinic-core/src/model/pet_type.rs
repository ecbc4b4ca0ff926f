use petclinic_core_types::EntityKind;
use serde::{Deserialize, Serialize};

use super::entity::{impl_entity, EntityId};

/// Kind of animal (dog, cat, ...)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PetType {
    pub id: Option<EntityId>,
    pub name: String,
}

impl PetType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

impl_entity!(PetType, EntityKind::PetType);
