use std::collections::BTreeSet;

use petclinic_core_types::EntityKind;
use serde::{Deserialize, Serialize};

use super::entity::{impl_entity, EntityId};

/// Vet - a veterinarian and the specialities they hold
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Vet {
    pub id: Option<EntityId>,

    pub first_name: String,

    pub last_name: String,

    /// Speciality ids (a set; order carries no meaning)
    pub speciality_ids: BTreeSet<EntityId>,
}

impl Vet {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns false if the speciality was already present
    pub fn add_speciality_id(&mut self, speciality_id: EntityId) -> bool {
        self.speciality_ids.insert(speciality_id)
    }
}

impl_entity!(Vet, EntityKind::Vet);
