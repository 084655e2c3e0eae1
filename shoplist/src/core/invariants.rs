//! Semantic invariants of a persisted list.

use std::collections::HashSet;

use crate::list::ShoppingList;

/// Check invariants a well-formed list must hold:
/// - ids are positive
/// - ids are unique
/// - text is non-empty after trimming
pub fn validate_invariants(list: &ShoppingList) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (pos, item) in list.items().iter().enumerate() {
        if item.id == 0 {
            errors.push(format!("item {}: id must be > 0", pos));
        }
        if !seen.insert(item.id) {
            errors.push(format!("item {}: duplicate id {}", pos, item.id));
        }
        if item.text.trim().is_empty() {
            errors.push(format!("item {} (id {}): text must not be blank", pos, item.id));
        }
    }

    errors
}
