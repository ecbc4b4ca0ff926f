//! Seed Format v0 schema
//!
//! Defines the YAML structure for seed fixtures. Pet types and specialities
//! are declared by name; pets and vets refer to them by that name.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Top-level seed file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    #[serde(default)]
    pub pet_types: Vec<String>,

    #[serde(default)]
    pub specialities: Vec<String>,

    #[serde(default)]
    pub vets: Vec<SeedVet>,

    #[serde(default)]
    pub owners: Vec<SeedOwner>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedVet {
    pub first_name: String,
    pub last_name: String,

    /// Speciality names
    #[serde(default)]
    pub specialities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedOwner {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub telephone: String,
    #[serde(default)]
    pub pets: Vec<SeedPet>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedPet {
    pub name: String,

    /// Pet type name
    #[serde(default)]
    pub pet_type: Option<String>,

    #[serde(default)]
    pub birth_date: Option<NaiveDate>,

    #[serde(default)]
    pub visits: Vec<SeedVisit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedVisit {
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
}
