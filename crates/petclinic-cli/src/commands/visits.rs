//! Visit commands
//!
//! Usage: petclinic visits new --pet <ID> --description <TEXT>
//!
//! The clinic lives only for the duration of the command, so a recorded
//! visit is reported but not kept.

use clap::{Args, Subcommand};
use petclinic_core::workflows::{
    load_pet_with_visit, process_new_visit_form, FieldErrors, NewVisitOutcome,
};
use petclinic_core::Clinic;
use serde_json::json;

use super::{print_json, OutputFormat};

#[derive(Debug, Args)]
pub struct VisitsArgs {
    #[command(subcommand)]
    pub command: VisitsCommand,
}

#[derive(Debug, Subcommand)]
pub enum VisitsCommand {
    /// Record a visit for today
    New(NewVisitArgs),
}

#[derive(Debug, Args)]
pub struct NewVisitArgs {
    /// Pet id
    #[arg(long)]
    pub pet: u64,

    /// What the visit was for
    #[arg(long)]
    pub description: String,
}

/// Execute visits command
pub fn execute(
    clinic: &Clinic,
    format: OutputFormat,
    args: VisitsArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        VisitsCommand::New(new_args) => execute_new(clinic, format, new_args),
    }
}

fn execute_new(
    clinic: &Clinic,
    format: OutputFormat,
    args: NewVisitArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut form = load_pet_with_visit(&clinic.pets, &clinic.owners, args.pet)?
        .ok_or_else(|| format!("Pet {} not found", args.pet))?;

    let mut errors = FieldErrors::new();
    if args.description.trim().is_empty() {
        errors.reject("description", "required");
    }
    form.visit.description = args.description;
    let pet_name = form.pet.name.clone();

    let outcome = process_new_visit_form(&clinic.visits, &clinic.pets, form, &errors)?;
    let view = outcome.view_name();

    let NewVisitOutcome::Redirect { visit, .. } = outcome else {
        let rejected: Vec<_> = errors
            .errors()
            .iter()
            .map(|error| format!("{} {}", error.field, error.code))
            .collect();
        return Err(format!("Visit rejected ({}): {}", view, rejected.join(", ")).into());
    };

    match format {
        OutputFormat::Json => print_json(&json!({ "view": view, "visit": visit }))?,
        OutputFormat::Text => {
            println!("view: {}", view);
            println!(
                "visit {}\t{}\t{}\t{}",
                visit.id.unwrap_or_default(),
                pet_name,
                visit.date,
                visit.description
            );
        }
    }
    Ok(())
}
