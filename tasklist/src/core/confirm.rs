//! Delete confirmation gate.
//!
//! Interactive deletes must pass through [`gated_remove`]: the host's
//! [`Confirm`] capability answers exactly once per delete intent, and only
//! [`ConfirmOutcome::Confirmed`] reaches [`TaskStore::remove`].

use tracing::debug;

use crate::core::store::TaskStore;
use crate::core::task::{Task, TaskId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Cancelled,
    Confirmed,
}

/// Text of the two-option delete prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePrompt {
    pub task_id: TaskId,
    pub heading: String,
    pub message: String,
    pub cancel_label: &'static str,
    pub confirm_label: &'static str,
}

impl DeletePrompt {
    pub fn for_task(task: &Task) -> Self {
        Self {
            task_id: task.id(),
            heading: "Delete task".to_string(),
            message: format!("Are you sure you want to delete \"{}\"?", task.title()),
            cancel_label: "Cancel",
            confirm_label: "Delete",
        }
    }
}

/// Host-supplied confirmation dialog.
pub trait Confirm {
    fn confirm(&mut self, prompt: &DeletePrompt) -> ConfirmOutcome;
}

impl<F> Confirm for F
where
    F: FnMut(&DeletePrompt) -> ConfirmOutcome,
{
    fn confirm(&mut self, prompt: &DeletePrompt) -> ConfirmOutcome {
        self(prompt)
    }
}

/// What a gated delete intent ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed,
    Cancelled,
    /// The id no longer exists; nobody was asked.
    Stale,
}

/// Ask `confirm` about deleting `id`, removing the task only on confirmation.
pub fn gated_remove(store: &mut TaskStore, id: TaskId, confirm: &mut dyn Confirm) -> DeleteOutcome {
    let Some(task) = store.get(id) else {
        debug!(task_id = %id, "delete ignored: unknown task");
        return DeleteOutcome::Stale;
    };
    let prompt = DeletePrompt::for_task(task);
    match confirm.confirm(&prompt) {
        ConfirmOutcome::Confirmed => {
            store.remove(id);
            DeleteOutcome::Removed
        }
        ConfirmOutcome::Cancelled => {
            debug!(task_id = %id, "delete cancelled");
            DeleteOutcome::Cancelled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::projector::project;
    use crate::core::theme::Palette;
    use crate::test_support::{ScriptedConfirm, store_with, task};

    /// Scenario: cancel leaves [A] untouched.
    #[test]
    fn cancel_keeps_collection() {
        let mut store = store_with(vec![task(1, "A", false)]);
        let before = store.snapshot();
        let mut confirm = ScriptedConfirm::new([ConfirmOutcome::Cancelled]);

        let outcome = gated_remove(&mut store, TaskId::new(1), &mut confirm);

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert!(store.snapshot().same_snapshot(&before));
        assert_eq!(confirm.prompts().len(), 1);
    }

    /// Scenario: confirm removes the last task and the projection goes empty.
    #[test]
    fn confirm_removes_and_empties_projection() {
        let mut store = store_with(vec![task(1, "A", false)]);
        let mut confirm = ScriptedConfirm::new([ConfirmOutcome::Confirmed]);

        let outcome = gated_remove(&mut store, TaskId::new(1), &mut confirm);

        assert_eq!(outcome, DeleteOutcome::Removed);
        assert_eq!(store.count(), 0);
        assert!(project(&store.snapshot(), &Palette::LIGHT).is_empty);
    }

    #[test]
    fn stale_id_never_prompts() {
        let mut store = store_with(vec![task(1, "A", false)]);
        let mut asked = 0;
        let mut confirm = |_: &DeletePrompt| {
            asked += 1;
            ConfirmOutcome::Confirmed
        };

        let outcome = gated_remove(&mut store, TaskId::new(9), &mut confirm);

        assert_eq!(outcome, DeleteOutcome::Stale);
        assert_eq!(asked, 0);
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn prompt_names_the_task() {
        let prompt = DeletePrompt::for_task(&task(4, "Walk the dog", true));
        assert_eq!(prompt.task_id, TaskId::new(4));
        assert!(prompt.message.contains("\"Walk the dog\""));
        assert_eq!((prompt.cancel_label, prompt.confirm_label), ("Cancel", "Delete"));
    }
}
