//! Vet commands
//!
//! Usage: petclinic vets list

use clap::{Args, Subcommand};
use petclinic_core::{Clinic, CrudService};
use serde_json::json;

use super::{print_json, OutputFormat};

#[derive(Debug, Args)]
pub struct VetsArgs {
    #[command(subcommand)]
    pub command: VetsCommand,
}

#[derive(Debug, Subcommand)]
pub enum VetsCommand {
    /// List veterinarians with their specialities
    List,
}

/// Execute vets command
pub fn execute(
    clinic: &Clinic,
    format: OutputFormat,
    args: VetsArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        VetsCommand::List => execute_list(clinic, format),
    }
}

fn execute_list(clinic: &Clinic, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let mut rows = Vec::new();
    for vet in clinic.vets.find_all()? {
        let mut specialities = Vec::with_capacity(vet.speciality_ids.len());
        for &id in &vet.speciality_ids {
            specialities.extend(
                clinic
                    .specialities
                    .find_by_id(id)?
                    .map(|speciality| speciality.description),
            );
        }
        rows.push((vet, specialities));
    }

    match format {
        OutputFormat::Json => {
            let vets: Vec<_> = rows
                .iter()
                .map(|(vet, specialities)| json!({ "vet": vet, "specialities": specialities }))
                .collect();
            print_json(&json!({ "vets": vets }))?;
        }
        OutputFormat::Text => {
            for (vet, specialities) in &rows {
                let specialities = if specialities.is_empty() {
                    "none".to_string()
                } else {
                    specialities.join(", ")
                };
                println!(
                    "{}\t{}\t{}",
                    vet.id.unwrap_or_default(),
                    vet.full_name(),
                    specialities
                );
            }
        }
    }
    Ok(())
}
