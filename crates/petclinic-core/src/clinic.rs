//! The set of per-entity services a clinic runs on

use std::path::Path;

use crate::errors::Result;
use crate::seed::{self, SeedV0};
use crate::services::{
    OwnerMapService, PetMapService, PetTypeMapService, SpecialityMapService, VetMapService,
    VisitMapService,
};

/// One in-memory CRUD service per entity type
///
/// Each service owns its own store; cloning a `Clinic` shares the stores.
#[derive(Debug, Clone, Default)]
pub struct Clinic {
    pub owners: OwnerMapService,
    pub pets: PetMapService,
    pub pet_types: PetTypeMapService,
    pub visits: VisitMapService,
    pub vets: VetMapService,
    pub specialities: SpecialityMapService,
}

impl Clinic {
    /// An empty clinic
    pub fn new() -> Self {
        Self::default()
    }

    /// A clinic populated from a parsed seed
    ///
    /// # Errors
    ///
    /// Returns `UnknownReference` if the seed names an undeclared pet type
    /// or speciality.
    pub fn from_seed(seed: &SeedV0) -> Result<Self> {
        let clinic = Self::new();
        seed::load_into(&clinic, seed)?;
        Ok(clinic)
    }

    /// A clinic populated from a seed file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_seed_file(path: &Path) -> Result<Self> {
        let seed = seed::parse_seed_file(path)?;
        Self::from_seed(&seed)
    }
}
