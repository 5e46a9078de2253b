//! Task identity and value types.
//!
//! A [`Task`] is an immutable value: state changes produce a new `Task`
//! (see [`Task::toggled`]) rather than mutating a shared record.

use std::fmt;

use serde::Serialize;

/// Store-unique task identifier. Never reused after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trimmed, non-empty task title.
///
/// The only constructor is [`TaskTitle::parse`], so a title held by a task
/// can never be blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Trim `raw`; returns `None` when nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    is_done: bool,
}

impl Task {
    /// Build a task with explicit state (seeding and tests).
    ///
    /// Fresh tasks created by the store always start with `is_done = false`.
    pub fn new(id: TaskId, title: TaskTitle, is_done: bool) -> Self {
        Self { id, title, is_done }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &TaskTitle {
        &self.title
    }

    pub fn is_done(&self) -> bool {
        self.is_done
    }

    /// Copy of this task with `is_done` negated; id and title unchanged.
    pub fn toggled(&self) -> Self {
        Self {
            id: self.id,
            title: self.title.clone(),
            is_done: !self.is_done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let title = TaskTitle::parse("  Buy milk \n").expect("title");
        assert_eq!(title.as_str(), "Buy milk");
    }

    #[test]
    fn parse_rejects_blank_input() {
        assert!(TaskTitle::parse("").is_none());
        assert!(TaskTitle::parse("   ").is_none());
        assert!(TaskTitle::parse("\t\n").is_none());
    }

    #[test]
    fn toggled_flips_only_done_flag() {
        let title = TaskTitle::parse("A").expect("title");
        let task = Task::new(TaskId::new(7), title.clone(), false);

        let flipped = task.toggled();

        assert!(flipped.is_done());
        assert_eq!(flipped.id(), TaskId::new(7));
        assert_eq!(flipped.title(), &title);
        assert!(!task.is_done());
        assert_eq!(flipped.toggled(), task);
    }
}
