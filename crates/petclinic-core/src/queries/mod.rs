//! Read-side queries over stored entities
//!
//! Queries operate on snapshots returned by `find_all()`; they never touch a
//! store directly.

pub mod owner_queries;

pub use owner_queries::{filter_last_name_like, find_by_last_name, strip_wildcards, wrap_wildcards};
