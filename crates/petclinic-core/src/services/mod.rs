//! CRUD services
//!
//! [`CrudService`] is the capability the presentation layer calls. Two
//! implementations exist: [`MapService`] over an in-memory
//! [`KeyedStore`](crate::store::KeyedStore), and [`RepositoryService`]
//! delegating to an external [`Repository`].

pub mod crud;
pub mod map;
pub mod owner;
pub mod repository;

pub use crud::CrudService;
pub use map::{
    MapService, OwnerMapService, PetMapService, PetTypeMapService, SpecialityMapService,
    VetMapService, VisitMapService,
};
pub use owner::OwnerService;
pub use repository::{Repository, RepositoryService};
