//! Owner name lookups
//!
//! Patterns follow the `%substring%` convention: callers wrap raw input with
//! [`wrap_wildcards`] and queries strip the markers again before matching.
//! Matching is a case-insensitive substring test on the last name.

use crate::model::Owner;

/// Wildcard marker surrounding a like-pattern
pub const WILDCARD: char = '%';

/// Wrap raw user input as a like-pattern: `Buck` becomes `%Buck%`
pub fn wrap_wildcards(raw: &str) -> String {
    format!("{WILDCARD}{raw}{WILDCARD}")
}

/// Strip leading and trailing wildcard markers from a like-pattern
///
/// Markers inside the pattern are kept and matched literally.
pub fn strip_wildcards(pattern: &str) -> &str {
    pattern.trim_matches(WILDCARD)
}

fn last_name_contains(owner: &Owner, needle_lower: &str) -> bool {
    owner.last_name.to_lowercase().contains(needle_lower)
}

/// Keep owners whose last name contains the pattern's substring
///
/// Input order is preserved. An empty substring keeps every owner.
pub fn filter_last_name_like(owners: Vec<Owner>, pattern: &str) -> Vec<Owner> {
    let needle = strip_wildcards(pattern).to_lowercase();
    owners
        .into_iter()
        .filter(|owner| last_name_contains(owner, &needle))
        .collect()
}

/// First owner whose last name equals `last_name`, ignoring case
pub fn find_by_last_name(owners: Vec<Owner>, last_name: &str) -> Option<Owner> {
    let wanted = last_name.to_lowercase();
    owners
        .into_iter()
        .find(|owner| owner.last_name.to_lowercase() == wanted)
}
