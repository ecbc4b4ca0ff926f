//! PetClinic Core - in-memory data-access kernel for a veterinary clinic
//!
//! This crate provides:
//! - Owner, Pet, PetType, Visit, Vet and Speciality records with id references
//! - A thread-safe keyed store with max-plus-one identity assignment
//! - A generic CRUD capability with in-memory and repository-backed services
//! - The owner last-name pattern query and cross-entity resolution
//! - Presentation-neutral owner and visit workflows
//! - YAML seed fixtures and TOML configuration

pub mod clinic;
pub mod config;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod queries;
pub mod resolution;
pub mod seed;
pub mod services;
pub mod store;
pub mod workflows;

#[doc(hidden)]
pub mod __private {
    pub use petclinic_core_types::schema;
    pub use tracing;
}

// Re-export commonly used types
pub use clinic::Clinic;
pub use config::ClinicConfig;
pub use errors::{ClinicError, ExError, ExErrorKind, Result};
pub use model::{Entity, EntityId, Identity, Owner, Pet, PetType, Speciality, Vet, Visit};
pub use services::{CrudService, MapService, OwnerService, Repository, RepositoryService};
pub use store::KeyedStore;
