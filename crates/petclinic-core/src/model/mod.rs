pub mod entity;
pub mod owner;
pub mod pet;
pub mod pet_type;
pub mod speciality;
pub mod vet;
pub mod visit;

pub use entity::{Entity, EntityId, Identity};
pub use owner::Owner;
pub use pet::Pet;
pub use pet_type::PetType;
pub use speciality::Speciality;
pub use vet::Vet;
pub use visit::Visit;
