//! Seed fixtures
//!
//! Provides:
//! - Seed Format v0 schema
//! - YAML parser with validation
//! - Loader that saves a fixture through a clinic's services

pub mod format_v0;
pub mod loader;
pub mod parser;

pub use format_v0::{SeedOwner, SeedPet, SeedV0, SeedVet, SeedVisit};
pub use loader::load_into;
pub use parser::{parse_seed_file, parse_seed_str};
