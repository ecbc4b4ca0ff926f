//! Cross-entity resolution
//!
//! Assembles composites by following id references between stores. Each
//! lookup is an independent single-entity read: a reference that dangles
//! (because its target was deleted, possibly concurrently) shows up as an
//! absent part of the composite, never as an error.

use std::time::Instant;

use crate::errors::Result;
use crate::logging_facility::elapsed_ms;
use crate::model::{EntityId, Owner, Pet, Visit};
use crate::services::CrudService;
use crate::{log_op_end, log_op_start};

/// A pet together with the owner its back-reference resolves to
#[derive(Debug, Clone, PartialEq)]
pub struct PetWithOwner {
    pub pet: Pet,
    pub owner: Option<Owner>,
}

impl PetWithOwner {
    /// Pet names an owner that could not be loaded
    pub fn owner_is_dangling(&self) -> bool {
        self.pet.owner_id.is_some() && self.owner.is_none()
    }
}

/// An owner with its pets attached, in the owner's pet order
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerWithPets {
    pub owner: Owner,
    pub pets: Vec<Pet>,
    /// Pet ids listed on the owner with no stored pet
    pub missing_pet_ids: Vec<EntityId>,
}

/// Load a pet and the owner it references
///
/// Returns `None` if the pet does not exist. A pet without an owner, or
/// with a dangling owner reference, resolves with `owner: None`.
pub fn resolve_pet<P, O>(pets: &P, owners: &O, pet_id: EntityId) -> Result<Option<PetWithOwner>>
where
    P: CrudService<Pet> + ?Sized,
    O: CrudService<Owner> + ?Sized,
{
    let started = Instant::now();
    log_op_start!("resolve_pet", pet_id = pet_id);

    let Some(pet) = pets.find_by_id(pet_id)? else {
        log_op_end!(
            "resolve_pet",
            duration_ms = elapsed_ms(started),
            pet_id = pet_id,
            found = false
        );
        return Ok(None);
    };

    let owner = match pet.owner_id {
        Some(owner_id) => owners.find_by_id(owner_id)?,
        None => None,
    };

    let resolved = PetWithOwner { pet, owner };
    if resolved.owner_is_dangling() {
        tracing::warn!(
            pet_id = pet_id,
            owner_id = ?resolved.pet.owner_id,
            "pet references an owner that is not stored"
        );
    }

    log_op_end!(
        "resolve_pet",
        duration_ms = elapsed_ms(started),
        pet_id = pet_id,
        found = true
    );
    Ok(Some(resolved))
}

/// Load an owner and attach the pets it lists
///
/// Returns `None` if the owner does not exist.
pub fn owner_with_pets<O, P>(owners: &O, pets: &P, owner_id: EntityId) -> Result<Option<OwnerWithPets>>
where
    O: CrudService<Owner> + ?Sized,
    P: CrudService<Pet> + ?Sized,
{
    let Some(owner) = owners.find_by_id(owner_id)? else {
        return Ok(None);
    };

    let mut attached = Vec::with_capacity(owner.pet_ids.len());
    let mut missing_pet_ids = Vec::new();
    for &pet_id in &owner.pet_ids {
        match pets.find_by_id(pet_id)? {
            Some(pet) => attached.push(pet),
            None => missing_pet_ids.push(pet_id),
        }
    }

    Ok(Some(OwnerWithPets {
        owner,
        pets: attached,
        missing_pet_ids,
    }))
}

/// Register `pet` with the owner at `owner_id`
///
/// Sets the pet's owner reference, saves the pet, appends its id to the
/// owner's pet list and saves the owner. Returns `None`, saving nothing,
/// if the owner does not exist.
pub fn register_pet<O, P>(owners: &O, pets: &P, owner_id: EntityId, mut pet: Pet) -> Result<Option<PetWithOwner>>
where
    O: CrudService<Owner> + ?Sized,
    P: CrudService<Pet> + ?Sized,
{
    let started = Instant::now();
    log_op_start!("register_pet", owner_id = owner_id);

    let Some(mut owner) = owners.find_by_id(owner_id)? else {
        log_op_end!(
            "register_pet",
            duration_ms = elapsed_ms(started),
            owner_id = owner_id,
            found = false
        );
        return Ok(None);
    };

    pet.owner_id = Some(owner_id);
    let pet = pets.save(pet)?;
    if let Some(pet_id) = pet.id {
        owner.add_pet_id(pet_id);
    }
    let owner = owners.save(owner)?;

    log_op_end!(
        "register_pet",
        duration_ms = elapsed_ms(started),
        owner_id = owner_id,
        pet_id = ?pet.id,
        found = true
    );
    Ok(Some(PetWithOwner {
        pet,
        owner: Some(owner),
    }))
}

/// Save `visit` and append it to the referenced pet's history
///
/// The visit is saved even when its pet reference is absent or dangling;
/// only an existing pet is updated.
pub fn record_visit<P, V>(pets: &P, visits: &V, visit: Visit) -> Result<Visit>
where
    P: CrudService<Pet> + ?Sized,
    V: CrudService<Visit> + ?Sized,
{
    let visit = visits.save(visit)?;

    if let (Some(visit_id), Some(pet_id)) = (visit.id, visit.pet_id) {
        if let Some(mut pet) = pets.find_by_id(pet_id)? {
            pet.add_visit_id(visit_id);
            pets.save(pet)?;
        }
    }

    Ok(visit)
}
