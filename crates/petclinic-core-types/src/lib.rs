//! Core types shared across the PetClinic facilities
//!
//! This crate provides foundational types used by both error handling
//! and logging facilities:
//!
//! - **Entity kinds**: the closed set of record types the clinic stores
//! - **Schema constants**: Canonical field keys and event names

pub mod kind;
pub mod schema;

pub use kind::EntityKind;
