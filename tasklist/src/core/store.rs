//! Authoritative task collection and its mutation contract.
//!
//! Every mutation replaces the current [`TaskCollection`] snapshot with a new
//! one; snapshots already handed out are never modified. A mutation that
//! does nothing (blank title, unknown id) keeps the current snapshot, so
//! callers can detect "nothing changed" with [`TaskCollection::same_snapshot`].

use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::id_gen::IdGenerator;
use crate::core::invariants::validate_invariants;
use crate::core::task::{Task, TaskId, TaskTitle};

/// Immutable, ordered snapshot of tasks. Most recently added first.
///
/// Cloning is cheap (shared storage). Equality compares by value; use
/// [`TaskCollection::same_snapshot`] for identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCollection {
    tasks: Arc<[Task]>,
}

impl Default for TaskCollection {
    fn default() -> Self {
        Self {
            tasks: Arc::from(Vec::new()),
        }
    }
}

impl TaskCollection {
    fn from_vec(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Arc::from(tasks),
        }
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// True when both values share the same underlying snapshot.
    pub fn same_snapshot(&self, other: &TaskCollection) -> bool {
        Arc::ptr_eq(&self.tasks, &other.tasks)
    }

    fn with_prepended(&self, task: Task) -> Self {
        let mut tasks = Vec::with_capacity(self.tasks.len() + 1);
        tasks.push(task);
        tasks.extend(self.tasks.iter().cloned());
        Self::from_vec(tasks)
    }

    fn with_toggled(&self, id: TaskId) -> Option<Self> {
        self.get(id)?;
        let tasks = self
            .tasks
            .iter()
            .map(|task| {
                if task.id() == id {
                    task.toggled()
                } else {
                    task.clone()
                }
            })
            .collect();
        Some(Self::from_vec(tasks))
    }

    fn without(&self, id: TaskId) -> Option<Self> {
        self.get(id)?;
        let tasks = self
            .tasks
            .iter()
            .filter(|task| task.id() != id)
            .cloned()
            .collect();
        Some(Self::from_vec(tasks))
    }
}

impl<'a> IntoIterator for &'a TaskCollection {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owns the current snapshot and the id generator.
///
/// None of the mutations fail: blank titles and stale ids are no-ops that
/// return the unchanged snapshot.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    snapshot: TaskCollection,
    ids: IdGenerator,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store holding `tasks` in the given order.
    ///
    /// The id generator starts after the largest seeded id. Returns every
    /// invariant violation (joined) when the seed is inconsistent, or an
    /// error when the largest id leaves no room for new ones.
    pub fn from_tasks(tasks: Vec<Task>) -> Result<Self, String> {
        let ids = match tasks.iter().map(Task::id).max() {
            Some(max) => IdGenerator::starting_after(max).ok_or_else(|| {
                format!("invalid task seed: id {} leaves no room for new ids", max)
            })?,
            None => IdGenerator::new(),
        };
        let errors = validate_invariants(&tasks, ids.peek());
        if !errors.is_empty() {
            return Err(format!("invalid task seed: {}", errors.join("; ")));
        }
        debug!(count = tasks.len(), next_id = ?ids.peek(), "store seeded");
        Ok(Self {
            snapshot: TaskCollection::from_vec(tasks),
            ids,
        })
    }

    /// Current snapshot (cheap clone).
    pub fn snapshot(&self) -> TaskCollection {
        self.snapshot.clone()
    }

    pub fn count(&self) -> usize {
        self.snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.snapshot.get(id)
    }

    /// Prepend a new, not-done task titled `raw_title` (trimmed).
    ///
    /// A title that trims to nothing, or an exhausted id space, leaves the
    /// snapshot untouched.
    pub fn add(&mut self, raw_title: &str) -> TaskCollection {
        let Some(title) = TaskTitle::parse(raw_title) else {
            debug!("add ignored: blank title");
            return self.snapshot();
        };
        let Some(id) = self.ids.next_id() else {
            warn!("add ignored: task ids exhausted");
            return self.snapshot();
        };
        let next = self.snapshot.with_prepended(Task::new(id, title, false));
        debug!(task_id = %id, count = next.len(), "task added");
        self.replace(next)
    }

    /// Flip `is_done` of task `id`. Unknown ids are ignored.
    pub fn toggle(&mut self, id: TaskId) -> TaskCollection {
        match self.snapshot.with_toggled(id) {
            Some(next) => {
                debug!(task_id = %id, "task toggled");
                self.replace(next)
            }
            None => {
                debug!(task_id = %id, "toggle ignored: unknown task");
                self.snapshot()
            }
        }
    }

    /// Drop task `id`, keeping the order of the rest. Unknown ids are ignored.
    ///
    /// Interactive deletes go through [`crate::core::confirm::gated_remove`].
    pub fn remove(&mut self, id: TaskId) -> TaskCollection {
        match self.snapshot.without(id) {
            Some(next) => {
                debug!(task_id = %id, count = next.len(), "task removed");
                self.replace(next)
            }
            None => {
                debug!(task_id = %id, "remove ignored: unknown task");
                self.snapshot()
            }
        }
    }

    fn replace(&mut self, next: TaskCollection) -> TaskCollection {
        debug_assert!(
            validate_invariants(next.as_slice(), self.ids.peek()).is_empty(),
            "task collection invariants violated"
        );
        self.snapshot = next;
        self.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{store_with, task};

    fn ids(collection: &TaskCollection) -> Vec<u64> {
        collection.iter().map(|task| task.id().get()).collect()
    }

    /// Scenario: empty store, add "Buy milk".
    #[test]
    fn add_to_empty_store_creates_open_task() {
        let mut store = TaskStore::new();

        assert!(store.is_empty());
        let next = store.add("Buy milk");

        assert!(!store.is_empty());
        assert_eq!(store.count(), 1);
        let first = &next.as_slice()[0];
        assert_eq!(first.title().as_str(), "Buy milk");
        assert!(!first.is_done());
    }

    #[test]
    fn add_prepends_and_trims() {
        let mut store = store_with(vec![task(1, "A", false)]);

        let next = store.add("  B  ");

        assert_eq!(next.len(), 2);
        assert_eq!(next.as_slice()[0].title().as_str(), "B");
        assert_eq!(next.as_slice()[1].id(), TaskId::new(1));
    }

    /// Scenario: blank title leaves [A] untouched.
    #[test]
    fn add_blank_title_is_noop() {
        let mut store = store_with(vec![task(1, "A", false)]);
        let before = store.snapshot();

        for blank in ["", "   ", "\t \n"] {
            let after = store.add(blank);
            assert!(after.same_snapshot(&before));
        }
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn ids_stay_unique_after_remove_then_add() {
        let mut store = TaskStore::new();
        store.add("A");
        let removed = store.snapshot().as_slice()[0].id();
        store.remove(removed);

        let next = store.add("B");

        assert_ne!(next.as_slice()[0].id(), removed);
    }

    /// Scenario: toggle(1) on [A, B(done)].
    #[test]
    fn toggle_flips_only_target() {
        let mut store = store_with(vec![task(1, "A", false), task(2, "B", true)]);

        let next = store.toggle(TaskId::new(1));

        assert_eq!(next.as_slice(), &[task(1, "A", true), task(2, "B", true)]);
    }

    #[test]
    fn toggle_twice_restores_original() {
        let original = vec![task(3, "C", false), task(2, "B", true), task(1, "A", false)];
        let mut store = store_with(original.clone());

        store.toggle(TaskId::new(2));
        let next = store.toggle(TaskId::new(2));

        assert_eq!(next.as_slice(), original.as_slice());
    }

    #[test]
    fn toggle_and_remove_unknown_id_are_noops() {
        let mut store = store_with(vec![task(2, "B", false), task(1, "A", true)]);
        let before = store.snapshot();

        assert!(store.toggle(TaskId::new(42)).same_snapshot(&before));
        assert!(store.remove(TaskId::new(42)).same_snapshot(&before));
        assert_eq!(ids(&store.snapshot()), vec![2, 1]);
    }

    #[test]
    fn remove_preserves_order_of_remaining() {
        let mut store = store_with(vec![
            task(3, "C", false),
            task(2, "B", false),
            task(1, "A", false),
        ]);

        let next = store.remove(TaskId::new(2));

        assert_eq!(ids(&next), vec![3, 1]);
        assert!(next.get(TaskId::new(2)).is_none());
    }

    #[test]
    fn mutations_never_touch_earlier_snapshots() {
        let mut store = store_with(vec![task(1, "A", false)]);
        let before = store.snapshot();

        store.toggle(TaskId::new(1));
        store.add("B");

        assert_eq!(before.as_slice(), &[task(1, "A", false)]);
    }

    #[test]
    fn from_tasks_advances_generator_past_seed() {
        let mut store = store_with(vec![task(6, "F", true), task(2, "B", false)]);

        let next = store.add("G");

        assert_eq!(next.as_slice()[0].id(), TaskId::new(7));
    }

    #[test]
    fn from_tasks_rejects_seed_at_max_id() {
        let err = TaskStore::from_tasks(vec![task(u64::MAX, "A", false)])
            .expect_err("expected error");
        assert!(err.contains("leaves no room for new ids"));
    }

    #[test]
    fn add_after_last_id_is_noop() {
        let mut store = store_with(vec![task(u64::MAX - 1, "A", false)]);

        let next = store.add("B");
        assert_eq!(next.as_slice()[0].id(), TaskId::new(u64::MAX));

        let after = store.add("C");
        assert!(after.same_snapshot(&next));
        assert_eq!(ids(&after), vec![u64::MAX, u64::MAX - 1]);
    }

    #[test]
    fn from_tasks_rejects_duplicate_ids() {
        let err = TaskStore::from_tasks(vec![task(1, "A", false), task(1, "B", false)])
            .expect_err("expected error");
        assert!(err.contains("duplicate id 1"));
    }
}
