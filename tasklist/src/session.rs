//! Intent dispatch for one task-list screen.
//!
//! A [`Session`] owns the store, the theme and the input buffer. Hosts turn
//! user actions into [`Intent`]s, hand them to [`Session::handle`], and
//! re-render from [`Session::projection`].

use tracing::{debug, info};

use crate::core::confirm::{Confirm, DeleteOutcome, gated_remove};
use crate::core::projector::{ListProjector, Projection};
use crate::core::store::TaskStore;
use crate::core::task::TaskId;
use crate::core::theme::{ThemeMode, ThemeSelector};

/// A discrete user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Text submitted from the input widget.
    Submit(String),
    Toggle(TaskId),
    /// Delete request; goes through the confirmation gate.
    Delete(TaskId),
    ToggleTheme,
}

/// Result of handling one intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Added(TaskId),
    Toggled(TaskId),
    Deleted(TaskId),
    DeleteCancelled(TaskId),
    ThemeChanged(ThemeMode),
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    BlankTitle,
    UnknownTask(TaskId),
}

/// Pending text of the input widget and whether it holds focus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
    focused: bool,
}

impl InputBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Replace the pending text and take focus, as typing would.
    pub fn type_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.focused = true;
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }
}

#[derive(Debug, Default)]
pub struct Session {
    store: TaskStore,
    theme: ThemeSelector,
    input: InputBuffer,
    projector: ListProjector,
}

impl Session {
    pub fn new(store: TaskStore, theme: ThemeSelector) -> Self {
        info!(tasks = store.count(), theme = %theme.mode(), "session started");
        Self {
            store,
            theme,
            input: InputBuffer::default(),
            projector: ListProjector::new(),
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn theme(&self) -> &ThemeSelector {
        &self.theme
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputBuffer {
        &mut self.input
    }

    /// Rows for the current snapshot and theme.
    pub fn projection(&mut self) -> &Projection {
        let snapshot = self.store.snapshot();
        self.projector.project(&snapshot, &self.theme)
    }

    pub fn handle(&mut self, intent: Intent, confirm: &mut dyn Confirm) -> SessionEvent {
        debug!(?intent, "handling intent");
        match intent {
            Intent::Submit(text) => self.submit(&text),
            Intent::Toggle(id) => {
                let before = self.store.snapshot();
                if self.store.toggle(id).same_snapshot(&before) {
                    SessionEvent::Ignored(IgnoreReason::UnknownTask(id))
                } else {
                    SessionEvent::Toggled(id)
                }
            }
            Intent::Delete(id) => match gated_remove(&mut self.store, id, confirm) {
                DeleteOutcome::Removed => SessionEvent::Deleted(id),
                DeleteOutcome::Cancelled => SessionEvent::DeleteCancelled(id),
                DeleteOutcome::Stale => SessionEvent::Ignored(IgnoreReason::UnknownTask(id)),
            },
            Intent::ToggleTheme => {
                let mode = self.theme.toggle();
                debug!(theme = %mode, "theme toggled");
                SessionEvent::ThemeChanged(mode)
            }
        }
    }

    fn submit(&mut self, text: &str) -> SessionEvent {
        let before = self.store.snapshot();
        let after = self.store.add(text);
        if after.same_snapshot(&before) {
            return SessionEvent::Ignored(IgnoreReason::BlankTitle);
        }
        self.input.clear();
        self.input.blur();
        match after.as_slice().first() {
            Some(task) => SessionEvent::Added(task.id()),
            None => SessionEvent::Ignored(IgnoreReason::BlankTitle),
        }
    }
}
