use chrono::NaiveDate;
use petclinic_core_types::EntityKind;
use serde::{Deserialize, Serialize};

use super::entity::{impl_entity, EntityId};

/// Visit - one appointment of a pet at the clinic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    pub id: Option<EntityId>,

    pub date: NaiveDate,

    pub description: String,

    /// Visited pet id (lookup only)
    pub pet_id: Option<EntityId>,
}

impl Visit {
    /// Create an unsaved visit on `date`
    pub fn new(date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            id: None,
            date,
            description: description.into(),
            pet_id: None,
        }
    }

    /// Create an unsaved, undescribed visit for `pet_id` on `date`
    pub fn for_pet(pet_id: EntityId, date: NaiveDate) -> Self {
        Self {
            pet_id: Some(pet_id),
            ..Self::new(date, String::new())
        }
    }
}

impl_entity!(Visit, EntityKind::Visit);
