//! Identity-bearing records
//!
//! Every stored record implements [`Entity`]: it exposes an optional identity
//! that the keyed store assigns on first save and never changes afterwards.

use std::fmt;
use std::hash::Hash;

use petclinic_core_types::EntityKind;

/// Identity type used by all clinic entities
pub type EntityId = u64;

/// An integer identity with a well-defined first value and successor
///
/// The keyed store derives fresh identities as `checked_successor(max key)`,
/// or `first()` when the store is empty.
pub trait Identity: Copy + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// The identity handed to the first entity saved into an empty store
    fn first() -> Self;

    /// The identity following `self`, or `None` at the top of the range
    fn checked_successor(self) -> Option<Self>;
}

macro_rules! impl_identity {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Identity for $ty {
                fn first() -> Self {
                    1
                }

                fn checked_successor(self) -> Option<Self> {
                    self.checked_add(1)
                }
            }
        )*
    };
}

impl_identity!(u32, u64, i64);

/// A record that can live in a keyed store
pub trait Entity: Clone + fmt::Debug + Send + Sync + 'static {
    /// Identity type for this entity
    type Id: Identity;

    /// Kind reported in logs and errors
    const KIND: EntityKind;

    /// The identity, if the entity has been saved
    fn id(&self) -> Option<Self::Id>;

    /// Assign the identity
    ///
    /// Only the keyed store calls this, and only for entities without one.
    fn set_id(&mut self, id: Self::Id);

    /// True until the entity is saved for the first time
    fn is_new(&self) -> bool {
        self.id().is_none()
    }
}

/// Implements [`Entity`] for a struct with an `id: Option<EntityId>` field
macro_rules! impl_entity {
    ($ty:ty, $kind:expr) => {
        impl $crate::model::Entity for $ty {
            type Id = $crate::model::EntityId;

            const KIND: petclinic_core_types::EntityKind = $kind;

            fn id(&self) -> Option<Self::Id> {
                self.id
            }

            fn set_id(&mut self, id: Self::Id) {
                self.id = Some(id);
            }
        }
    };
}

pub(crate) use impl_entity;
