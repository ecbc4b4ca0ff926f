//! Presentation-neutral workflow outcomes
//!
//! Each workflow calls the CRUD capabilities and returns an outcome value
//! that carries the data a presenter needs plus the view name it would
//! choose. No HTTP, routing or templates live here.

pub mod binding;
pub mod owner;
pub mod visit;

pub use binding::{BindingResult, FieldError, FieldErrors};
pub use owner::{process_creation_form, process_find_form, process_update_form, CreationOutcome, FindOwnersOutcome};
pub use visit::{load_pet_with_visit, load_pet_with_visit_on, process_new_visit_form, NewVisitOutcome, VisitForm};
