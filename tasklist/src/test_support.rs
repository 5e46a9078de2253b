//! Test-only helpers for building tasks, stores and scripted dialogs.

use std::collections::VecDeque;

use crate::core::confirm::{Confirm, ConfirmOutcome, DeletePrompt};
use crate::core::store::TaskStore;
use crate::core::task::{Task, TaskId, TaskTitle};

/// Create a task with explicit state. Panics on a blank title.
pub fn task(id: u64, title: &str, is_done: bool) -> Task {
    let title = TaskTitle::parse(title).expect("test task title must not be blank");
    Task::new(TaskId::new(id), title, is_done)
}

/// Create a store seeded with `tasks` in the given order.
pub fn store_with(tasks: Vec<Task>) -> TaskStore {
    TaskStore::from_tasks(tasks).expect("valid test seed")
}

/// Confirmation dialog that replays predetermined answers.
///
/// Answers `Cancelled` once the script runs out. Every prompt shown is
/// recorded for assertions.
#[derive(Debug, Default)]
pub struct ScriptedConfirm {
    outcomes: VecDeque<ConfirmOutcome>,
    prompts: Vec<DeletePrompt>,
}

impl ScriptedConfirm {
    pub fn new(outcomes: impl IntoIterator<Item = ConfirmOutcome>) -> Self {
        Self {
            outcomes: outcomes.into_iter().collect(),
            prompts: Vec::new(),
        }
    }

    pub fn prompts(&self) -> &[DeletePrompt] {
        &self.prompts
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, prompt: &DeletePrompt) -> ConfirmOutcome {
        self.prompts.push(prompt.clone());
        self.outcomes
            .pop_front()
            .unwrap_or(ConfirmOutcome::Cancelled)
    }
}
