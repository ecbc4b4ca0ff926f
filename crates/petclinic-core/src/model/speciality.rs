use petclinic_core_types::EntityKind;
use serde::{Deserialize, Serialize};

use super::entity::{impl_entity, EntityId};

/// A vet speciality (radiology, surgery, ...)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Speciality {
    pub id: Option<EntityId>,
    pub description: String,
}

impl Speciality {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: None,
            description: description.into(),
        }
    }
}

impl_entity!(Speciality, EntityKind::Speciality);
