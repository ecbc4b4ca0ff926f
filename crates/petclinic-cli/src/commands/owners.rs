//! Owner commands
//!
//! Usage:
//!   petclinic owners find [--last-name <NAME>]
//!   petclinic owners show <ID>

use clap::{Args, Subcommand};
use petclinic_core::resolution::owner_with_pets;
use petclinic_core::workflows::{process_find_form, FindOwnersOutcome};
use petclinic_core::{Clinic, CrudService, Owner};
use serde_json::json;

use super::{print_json, OutputFormat};

#[derive(Debug, Args)]
pub struct OwnersArgs {
    #[command(subcommand)]
    pub command: OwnersCommand,
}

#[derive(Debug, Subcommand)]
pub enum OwnersCommand {
    /// Find owners whose last name contains the given text
    Find(FindArgs),
    /// Show an owner with pets and visits
    Show(ShowArgs),
}

#[derive(Debug, Args)]
pub struct FindArgs {
    /// Last name substring; omit to list every owner
    #[arg(long)]
    pub last_name: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Owner id
    pub id: u64,
}

/// Execute owners command
pub fn execute(
    clinic: &Clinic,
    format: OutputFormat,
    args: OwnersArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        OwnersCommand::Find(find_args) => execute_find(clinic, format, find_args),
        OwnersCommand::Show(show_args) => execute_show(clinic, format, show_args),
    }
}

fn owner_line(owner: &Owner) -> String {
    format!(
        "{}\t{}\t{}",
        owner.id.unwrap_or_default(),
        owner.full_name(),
        owner.city
    )
}

fn execute_find(
    clinic: &Clinic,
    format: OutputFormat,
    args: FindArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let outcome = process_find_form(&clinic.owners, args.last_name.as_deref())?;
    let view = outcome.view_name();

    let owners = match outcome {
        FindOwnersOutcome::NotFound => Vec::new(),
        FindOwnersOutcome::Redirect { owner_id } => clinic.owners.find_by_id(owner_id)?.into_iter().collect(),
        FindOwnersOutcome::Listing(owners) => owners,
    };

    match format {
        OutputFormat::Json => print_json(&json!({ "view": view, "owners": owners }))?,
        OutputFormat::Text => {
            println!("view: {}", view);
            if owners.is_empty() {
                println!("No owners found");
            }
            for owner in &owners {
                println!("{}", owner_line(owner));
            }
        }
    }
    Ok(())
}

fn execute_show(
    clinic: &Clinic,
    format: OutputFormat,
    args: ShowArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let composite = owner_with_pets(&clinic.owners, &clinic.pets, args.id)?
        .ok_or_else(|| format!("Owner {} not found", args.id))?;

    let mut pets = Vec::with_capacity(composite.pets.len());
    for pet in &composite.pets {
        let mut visits = Vec::with_capacity(pet.visit_ids.len());
        for &visit_id in &pet.visit_ids {
            visits.extend(clinic.visits.find_by_id(visit_id)?);
        }
        let pet_type = match pet.pet_type_id {
            Some(id) => clinic.pet_types.find_by_id(id)?.map(|pet_type| pet_type.name),
            None => None,
        };
        pets.push((pet, pet_type, visits));
    }

    match format {
        OutputFormat::Json => {
            let pets: Vec<_> = pets
                .iter()
                .map(|(pet, pet_type, visits)| json!({ "pet": pet, "pet_type": pet_type, "visits": visits }))
                .collect();
            print_json(&json!({ "owner": composite.owner, "pets": pets }))?;
        }
        OutputFormat::Text => {
            let owner = &composite.owner;
            println!("{}", owner.full_name());
            println!("  {}, {}", owner.address, owner.city);
            println!("  {}", owner.telephone);
            for (pet, pet_type, visits) in &pets {
                println!(
                    "pet {}\t{}\t{}",
                    pet.id.unwrap_or_default(),
                    pet.name,
                    pet_type.as_deref().unwrap_or("-")
                );
                for visit in visits {
                    println!("  visit {}\t{}", visit.date, visit.description);
                }
            }
        }
    }
    Ok(())
}
