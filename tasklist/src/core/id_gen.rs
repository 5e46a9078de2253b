//! Monotonic task id generation.

use crate::core::task::TaskId;

/// Hands out strictly increasing ids, starting at 1.
///
/// Ids are never handed out twice, so an id freed by a delete is never
/// reassigned to a later task. Once `u64::MAX` has been issued the
/// generator is exhausted and yields `None` instead of wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    next: Option<u64>,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self { next: Some(1) }
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator whose first id is greater than `max`.
    ///
    /// Returns `None` when `max` is `u64::MAX`.
    pub fn starting_after(max: TaskId) -> Option<Self> {
        max.get().checked_add(1).map(|next| Self { next: Some(next) })
    }

    /// The id the next call to [`IdGenerator::next_id`] will return.
    pub fn peek(&self) -> Option<TaskId> {
        self.next.map(TaskId::new)
    }

    pub fn next_id(&mut self) -> Option<TaskId> {
        let current = self.next?;
        self.next = current.checked_add(1);
        Some(TaskId::new(current))
    }
}
