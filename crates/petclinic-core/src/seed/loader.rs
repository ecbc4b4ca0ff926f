//! Seed loader
//!
//! Saves a validated fixture through a clinic's CRUD services. Names are
//! resolved to the identities assigned while saving.

use std::collections::HashMap;
use std::time::Instant;

use petclinic_core_types::EntityKind;

use crate::clinic::Clinic;
use crate::errors::{ClinicError, Result};
use crate::logging_facility::elapsed_ms;
use crate::model::{EntityId, Owner, Pet, PetType, Speciality, Vet, Visit};
use crate::resolution::{record_visit, register_pet};
use crate::seed::format_v0::{SeedOwner, SeedV0};
use crate::seed::parser::validate_seed;
use crate::services::CrudService;
use crate::{log_op_end, log_op_error, log_op_start};

/// Load `seed` into `clinic`
///
/// The seed is validated before anything is saved.
///
/// # Errors
///
/// Returns the validation error for an invalid seed, or propagates a
/// service failure.
pub fn load_into(clinic: &Clinic, seed: &SeedV0) -> Result<()> {
    let started = Instant::now();
    log_op_start!("load_seed", owners = seed.owners.len(), vets = seed.vets.len());

    match load_validated(clinic, seed) {
        Ok(()) => {
            log_op_end!("load_seed", duration_ms = elapsed_ms(started));
            Ok(())
        }
        Err(err) => {
            log_op_error!("load_seed", err, duration_ms = elapsed_ms(started));
            Err(err)
        }
    }
}

fn load_validated(clinic: &Clinic, seed: &SeedV0) -> Result<()> {
    validate_seed(seed)?;

    let mut pet_types = HashMap::new();
    for name in &seed.pet_types {
        let saved = clinic.pet_types.save(PetType::new(name.clone()))?;
        pet_types.insert(name.as_str(), saved.id);
    }

    let mut specialities = HashMap::new();
    for name in &seed.specialities {
        let saved = clinic.specialities.save(Speciality::new(name.clone()))?;
        specialities.insert(name.as_str(), saved.id);
    }

    for seed_vet in &seed.vets {
        let mut vet = Vet::new(seed_vet.first_name.clone(), seed_vet.last_name.clone());
        for name in &seed_vet.specialities {
            let id = lookup(&specialities, EntityKind::Speciality, name)?;
            vet.add_speciality_id(id);
        }
        clinic.vets.save(vet)?;
    }

    for seed_owner in &seed.owners {
        load_owner(clinic, &pet_types, seed_owner)?;
    }

    Ok(())
}

fn load_owner(
    clinic: &Clinic,
    pet_types: &HashMap<&str, Option<EntityId>>,
    seed_owner: &SeedOwner,
) -> Result<()> {
    let mut owner = Owner::new(seed_owner.first_name.clone(), seed_owner.last_name.clone());
    owner.address = seed_owner.address.clone();
    owner.city = seed_owner.city.clone();
    owner.telephone = seed_owner.telephone.clone();
    let owner = clinic.owners.save(owner)?;
    let owner_id = owner.id.ok_or(ClinicError::MissingIdentity {
        kind: EntityKind::Owner,
    })?;

    for seed_pet in &seed_owner.pets {
        let mut pet = Pet::new(seed_pet.name.clone());
        pet.birth_date = seed_pet.birth_date;
        if let Some(name) = &seed_pet.pet_type {
            pet.pet_type_id = Some(lookup(pet_types, EntityKind::PetType, name)?);
        }

        let registered = register_pet(&clinic.owners, &clinic.pets, owner_id, pet)?;
        let pet_id = registered
            .and_then(|registered| registered.pet.id)
            .ok_or(ClinicError::MissingIdentity {
                kind: EntityKind::Pet,
            })?;

        for seed_visit in &seed_pet.visits {
            let mut visit = Visit::for_pet(pet_id, seed_visit.date);
            visit.description = seed_visit.description.clone();
            record_visit(&clinic.pets, &clinic.visits, visit)?;
        }
    }

    Ok(())
}

fn lookup(names: &HashMap<&str, Option<EntityId>>, kind: EntityKind, name: &str) -> Result<EntityId> {
    match names.get(name) {
        Some(Some(id)) => Ok(*id),
        Some(None) => Err(ClinicError::MissingIdentity { kind }),
        None => Err(ClinicError::UnknownReference {
            kind,
            name: name.to_string(),
        }),
    }
}
