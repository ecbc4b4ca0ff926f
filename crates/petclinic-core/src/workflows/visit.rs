use std::time::Instant;

use chrono::{Local, NaiveDate};

use super::binding::BindingResult;
use crate::errors::Result;
use crate::logging_facility::elapsed_ms;
use crate::model::{EntityId, Owner, Pet, Visit};
use crate::resolution::{record_visit, resolve_pet};
use crate::services::CrudService;
use crate::{log_op_end, log_op_start};

pub const CREATE_OR_UPDATE_VISIT_FORM: &str = "pets/createOrUpdateVisitForm";

/// A visit being filled in for a pet, with the pet's owner for display
#[derive(Debug, Clone, PartialEq)]
pub struct VisitForm {
    /// Unsaved, bound to `pet`
    pub visit: Visit,
    pub pet: Pet,
    pub owner: Option<Owner>,
}

/// Outcome of submitting the new-visit form
#[derive(Debug, Clone, PartialEq)]
pub enum NewVisitOutcome {
    /// The form had errors; show it again
    Reprompt,
    /// The visit was recorded; go to the pet's owner, or the owner list
    /// when the pet has none
    Redirect {
        owner_id: Option<EntityId>,
        visit: Visit,
    },
}

impl NewVisitOutcome {
    pub fn view_name(&self) -> String {
        match self {
            NewVisitOutcome::Reprompt => CREATE_OR_UPDATE_VISIT_FORM.to_string(),
            NewVisitOutcome::Redirect {
                owner_id: Some(owner_id),
                ..
            } => format!("redirect:/owners/{owner_id}"),
            NewVisitOutcome::Redirect { owner_id: None, .. } => "redirect:/owners".to_string(),
        }
    }
}

/// Prepare a visit for today bound to the pet at `pet_id`
///
/// Returns `None` if the pet does not exist.
///
/// # Errors
///
/// Propagates service failures.
pub fn load_pet_with_visit<P, O>(pets: &P, owners: &O, pet_id: EntityId) -> Result<Option<VisitForm>>
where
    P: CrudService<Pet> + ?Sized,
    O: CrudService<Owner> + ?Sized,
{
    load_pet_with_visit_on(pets, owners, pet_id, Local::now().date_naive())
}

/// Prepare a visit on `date` bound to the pet at `pet_id`
///
/// The visit takes the identity of the pet the service returned, and `pet_id`
/// only when that pet carries none.
///
/// # Errors
///
/// Propagates service failures.
pub fn load_pet_with_visit_on<P, O>(
    pets: &P,
    owners: &O,
    pet_id: EntityId,
    date: NaiveDate,
) -> Result<Option<VisitForm>>
where
    P: CrudService<Pet> + ?Sized,
    O: CrudService<Owner> + ?Sized,
{
    let Some(resolved) = resolve_pet(pets, owners, pet_id)? else {
        return Ok(None);
    };

    let bound_id = resolved.pet.id.unwrap_or(pet_id);
    Ok(Some(VisitForm {
        visit: Visit::for_pet(bound_id, date),
        pet: resolved.pet,
        owner: resolved.owner,
    }))
}

/// Record the form's visit unless the form has errors
///
/// # Errors
///
/// Propagates service failures.
pub fn process_new_visit_form<V, P, B>(
    visits: &V,
    pets: &P,
    form: VisitForm,
    binding: &B,
) -> Result<NewVisitOutcome>
where
    V: CrudService<Visit> + ?Sized,
    P: CrudService<Pet> + ?Sized,
    B: BindingResult + ?Sized,
{
    if binding.has_errors() {
        return Ok(NewVisitOutcome::Reprompt);
    }

    let started = Instant::now();
    log_op_start!("process_new_visit_form", pet_id = ?form.pet.id);

    let owner_id = form.pet.owner_id;
    let visit = record_visit(pets, visits, form.visit)?;

    log_op_end!(
        "process_new_visit_form",
        duration_ms = elapsed_ms(started),
        visit_id = ?visit.id,
        owner_id = ?owner_id
    );
    Ok(NewVisitOutcome::Redirect { owner_id, visit })
}
