//! Starter tasks for a freshly launched list.

use crate::core::task::{Task, TaskId, TaskTitle};

const SAMPLE_TASKS: [(u64, &str, bool); 6] = [
    (1, "Buy groceries", false),
    (2, "Walk the dog", true),
    (3, "Finish project", false),
    (4, "Call mom", true),
    (5, "Read a book", false),
    (6, "Exercise", true),
];

/// The six sample tasks, ids 1 through 6, in display order.
pub fn sample_tasks() -> Vec<Task> {
    SAMPLE_TASKS
        .iter()
        .filter_map(|&(id, title, is_done)| {
            TaskTitle::parse(title).map(|title| Task::new(TaskId::new(id), title, is_done))
        })
        .collect()
}
