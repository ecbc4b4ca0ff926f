//! Seed parser with validation
//!
//! Parses YAML and validates schema version and name references

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use petclinic_core_types::EntityKind;

use crate::errors::{ClinicError, Result};
use crate::seed::format_v0::SeedV0;

/// Parse a seed file from a path
///
/// # Errors
///
/// Returns `Io` if the file cannot be read, otherwise as [`parse_seed_str`].
pub fn parse_seed_file(path: &Path) -> Result<SeedV0> {
    let content = fs::read_to_string(path)?;
    parse_seed_str(&content)
}

/// Parse a seed from a string
///
/// # Errors
///
/// Returns `SeedParse` for malformed YAML, `SeedValidation` for an
/// unsupported schema version and `UnknownReference` for a pet type or
/// speciality that was never declared.
pub fn parse_seed_str(content: &str) -> Result<SeedV0> {
    let seed: SeedV0 = serde_yaml::from_str(content)?;
    validate_seed(&seed)?;
    Ok(seed)
}

/// Validate a parsed seed
pub(crate) fn validate_seed(seed: &SeedV0) -> Result<()> {
    if seed.schema_version != 0 {
        return Err(ClinicError::seed_validation(format!(
            "Unsupported schema_version: {}. Expected 0",
            seed.schema_version
        )));
    }

    let mut pet_types = HashSet::new();
    for name in &seed.pet_types {
        if !pet_types.insert(name.as_str()) {
            return Err(ClinicError::seed_validation(format!(
                "Duplicate pet type: {}",
                name
            )));
        }
    }

    let mut specialities = HashSet::new();
    for name in &seed.specialities {
        if !specialities.insert(name.as_str()) {
            return Err(ClinicError::seed_validation(format!(
                "Duplicate speciality: {}",
                name
            )));
        }
    }

    for vet in &seed.vets {
        if let Some(name) = vet
            .specialities
            .iter()
            .find(|name| !specialities.contains(name.as_str()))
        {
            return Err(ClinicError::UnknownReference {
                kind: EntityKind::Speciality,
                name: name.clone(),
            });
        }
    }

    for pet in seed.owners.iter().flat_map(|owner| &owner.pets) {
        if let Some(name) = &pet.pet_type {
            if !pet_types.contains(name.as_str()) {
                return Err(ClinicError::UnknownReference {
                    kind: EntityKind::PetType,
                    name: name.clone(),
                });
            }
        }
    }

    Ok(())
}
