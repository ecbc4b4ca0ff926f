use std::time::Instant;

use petclinic_core_types::EntityKind;

use super::binding::BindingResult;
use crate::errors::{ClinicError, Result};
use crate::logging_facility::elapsed_ms;
use crate::model::{EntityId, Owner};
use crate::queries::wrap_wildcards;
use crate::services::{CrudService, OwnerService};
use crate::{log_op_end, log_op_start};

pub const FIND_OWNERS_VIEW: &str = "owners/findOwners";
pub const OWNERS_LIST_VIEW: &str = "owners/ownersList";
pub const CREATE_OR_UPDATE_OWNER_FORM: &str = "owners/createOrUpdateOwnerForm";

fn owner_redirect(owner_id: EntityId) -> String {
    format!("redirect:/owners/{owner_id}")
}

/// Outcome of the find-owner search, decided purely by result count
#[derive(Debug, Clone, PartialEq)]
pub enum FindOwnersOutcome {
    /// No owner matched; show the search form again
    NotFound,
    /// Exactly one owner matched; go to its detail view
    Redirect { owner_id: EntityId },
    /// Several owners matched; list them
    Listing(Vec<Owner>),
}

impl FindOwnersOutcome {
    pub fn view_name(&self) -> String {
        match self {
            FindOwnersOutcome::NotFound => FIND_OWNERS_VIEW.to_string(),
            FindOwnersOutcome::Redirect { owner_id } => owner_redirect(*owner_id),
            FindOwnersOutcome::Listing(_) => OWNERS_LIST_VIEW.to_string(),
        }
    }
}

/// Outcome of submitting the owner create/update form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationOutcome {
    /// The form had errors; show it again
    Reprompt,
    /// The owner was saved; go to its detail view
    Redirect { owner_id: EntityId },
}

impl CreationOutcome {
    pub fn view_name(&self) -> String {
        match self {
            CreationOutcome::Reprompt => CREATE_OR_UPDATE_OWNER_FORM.to_string(),
            CreationOutcome::Redirect { owner_id } => owner_redirect(*owner_id),
        }
    }
}

/// Search owners by last name
///
/// An absent last name searches with an empty substring, which matches
/// every owner. The service is called exactly once.
///
/// # Errors
///
/// Propagates service failures. Returns `MissingIdentity` if the single
/// match carries no identity to redirect to.
pub fn process_find_form<S>(service: &S, last_name: Option<&str>) -> Result<FindOwnersOutcome>
where
    S: OwnerService + ?Sized,
{
    let started = Instant::now();
    let pattern = wrap_wildcards(last_name.unwrap_or_default());
    log_op_start!("process_find_form", pattern = pattern.as_str());

    let mut results = service.find_all_by_last_name_like(&pattern)?;
    let result_len = results.len();

    let outcome = match result_len {
        0 => FindOwnersOutcome::NotFound,
        1 => {
            let owner = results.remove(0);
            let owner_id = owner.id.ok_or(ClinicError::MissingIdentity {
                kind: EntityKind::Owner,
            })?;
            FindOwnersOutcome::Redirect { owner_id }
        }
        _ => FindOwnersOutcome::Listing(results),
    };

    log_op_end!(
        "process_find_form",
        duration_ms = elapsed_ms(started),
        result_len = result_len
    );
    Ok(outcome)
}

/// Save a new owner unless the form has errors
///
/// # Errors
///
/// Propagates service failures. Returns `MissingIdentity` if the service
/// hands back an owner without identity.
pub fn process_creation_form<S, B>(service: &S, owner: Owner, binding: &B) -> Result<CreationOutcome>
where
    S: CrudService<Owner> + ?Sized,
    B: BindingResult + ?Sized,
{
    if binding.has_errors() {
        return Ok(CreationOutcome::Reprompt);
    }

    let saved = service.save(owner)?;
    let owner_id = saved.id.ok_or(ClinicError::MissingIdentity {
        kind: EntityKind::Owner,
    })?;
    Ok(CreationOutcome::Redirect { owner_id })
}

/// Overwrite the owner at `owner_id` with the submitted form unless it has errors
///
/// The submitted owner takes the path identity, whatever it carried.
///
/// # Errors
///
/// Propagates service failures.
pub fn process_update_form<S, B>(
    service: &S,
    owner_id: EntityId,
    mut owner: Owner,
    binding: &B,
) -> Result<CreationOutcome>
where
    S: CrudService<Owner> + ?Sized,
    B: BindingResult + ?Sized,
{
    if binding.has_errors() {
        return Ok(CreationOutcome::Reprompt);
    }

    owner.id = Some(owner_id);
    service.save(owner)?;
    Ok(CreationOutcome::Redirect { owner_id })
}
