//! Collection invariants the type system does not enforce on its own.

use std::collections::HashSet;

use crate::core::task::{Task, TaskId};

/// Check collection invariants:
/// - No duplicate ids
/// - Every id is below `next_id`, so the generator can never reissue one
///   (`None` means the generator is exhausted and issues nothing more)
///
/// Title emptiness is ruled out by [`crate::core::task::TaskTitle`].
/// Returns messages in collection order (empty when valid).
pub fn validate_invariants(tasks: &[Task], next_id: Option<TaskId>) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, task) in tasks.iter().enumerate() {
        if !seen.insert(task.id()) {
            errors.push(format!("duplicate id {} at position {}", task.id(), index));
        }
        if let Some(next_id) = next_id.filter(|next_id| task.id() >= *next_id) {
            errors.push(format!(
                "id {} at position {} is not below next id {}",
                task.id(),
                index,
                next_id
            ));
        }
    }

    errors
}
