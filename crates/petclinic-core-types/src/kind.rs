//! Entity kind classification
//!
//! Every record the clinic stores belongs to exactly one kind. The kind is
//! carried on log events and structured errors so that a failure can be
//! attributed to a store without inspecting the payload.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of entity types held by the clinic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Owner,
    Pet,
    PetType,
    Visit,
    Speciality,
    Vet,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Owner,
        EntityKind::Pet,
        EntityKind::PetType,
        EntityKind::Visit,
        EntityKind::Speciality,
        EntityKind::Vet,
    ];

    /// The kind whose `as_str` is `name`
    pub fn from_name(name: &str) -> Option<EntityKind> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// Stable lowercase name used in log fields and error context
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Owner => "owner",
            EntityKind::Pet => "pet",
            EntityKind::PetType => "pet_type",
            EntityKind::Visit => "visit",
            EntityKind::Speciality => "speciality",
            EntityKind::Vet => "vet",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(EntityKind::PetType.to_string(), "pet_type");
        assert_eq!(format!("{}", EntityKind::Owner), EntityKind::Owner.as_str());
    }

    #[test]
    fn test_from_name_inverts_as_str() {
        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::from_name(kind.as_str()), Some(kind));
        }
        assert_eq!(EntityKind::from_name("PetType"), None);
        assert_eq!(EntityKind::from_name(""), None);
    }

    #[test]
    fn test_serialization_uses_snake_case() {
        let json = serde_json::to_string(&EntityKind::PetType).unwrap();
        assert_eq!(json, "\"pet_type\"");

        let kind: EntityKind = serde_json::from_str("\"speciality\"").unwrap();
        assert_eq!(kind, EntityKind::Speciality);
    }
}
