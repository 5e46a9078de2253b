//! Projection of a task snapshot into render-ready rows.
//!
//! [`project`] is a pure function of the snapshot and palette. [`ListProjector`]
//! wraps it with a one-entry cache keyed by snapshot identity and theme mode,
//! so re-rendering an unchanged state reuses the previous rows.

use serde::Serialize;

use crate::core::store::TaskCollection;
use crate::core::task::{Task, TaskId};
use crate::core::theme::{Palette, ThemeMode, ThemeSelector};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckboxGlyph {
    Filled,
    Outline,
}

impl CheckboxGlyph {
    /// Icon-font name for graphical hosts.
    pub fn icon_name(self) -> &'static str {
        match self {
            CheckboxGlyph::Filled => "checkbox",
            CheckboxGlyph::Outline => "square-outline",
        }
    }

    /// Symbol for text hosts.
    pub fn symbol(self) -> char {
        match self {
            CheckboxGlyph::Filled => '☑',
            CheckboxGlyph::Outline => '☐',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleStyle {
    Normal,
    Strikethrough,
}

/// One visible list row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderRow {
    /// Stable render key (the task id as text).
    pub key: String,
    pub id: TaskId,
    pub title: String,
    pub is_done: bool,
    pub checkbox_glyph: CheckboxGlyph,
    /// Icon-set name for the glyph, for hosts that draw icons.
    pub checkbox_icon: &'static str,
    pub checkbox_color: &'static str,
    pub title_style: TitleStyle,
}

impl RenderRow {
    fn from_task(task: &Task, palette: &Palette) -> Self {
        let (checkbox_glyph, checkbox_color, title_style) = if task.is_done() {
            (
                CheckboxGlyph::Filled,
                palette.done_accent,
                TitleStyle::Strikethrough,
            )
        } else {
            (CheckboxGlyph::Outline, palette.placeholder, TitleStyle::Normal)
        };
        Self {
            key: task.id().to_string(),
            id: task.id(),
            title: task.title().to_string(),
            is_done: task.is_done(),
            checkbox_glyph,
            checkbox_icon: checkbox_glyph.icon_name(),
            checkbox_color,
            title_style,
        }
    }
}

/// Rows in collection order plus the derived empty-state flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Projection {
    pub rows: Vec<RenderRow>,
    pub is_empty: bool,
}

impl Projection {
    /// Task id shown at 1-based `position`, if any.
    pub fn task_at(&self, position: usize) -> Option<TaskId> {
        position
            .checked_sub(1)
            .and_then(|index| self.rows.get(index))
            .map(|row| row.id)
    }

    pub fn open_count(&self) -> usize {
        self.rows.iter().filter(|row| !row.is_done).count()
    }
}

pub fn project(collection: &TaskCollection, palette: &Palette) -> Projection {
    let rows: Vec<RenderRow> = collection
        .iter()
        .map(|task| RenderRow::from_task(task, palette))
        .collect();
    Projection {
        is_empty: rows.is_empty(),
        rows,
    }
}

/// Caching front for [`project`].
#[derive(Debug, Default)]
pub struct ListProjector {
    last: Option<CachedProjection>,
}

#[derive(Debug)]
struct CachedProjection {
    snapshot: TaskCollection,
    mode: ThemeMode,
    projection: Projection,
}

impl ListProjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Project `collection` under `theme`, recomputing only when the
    /// snapshot identity or theme mode changed since the last call.
    pub fn project(&mut self, collection: &TaskCollection, theme: &ThemeSelector) -> &Projection {
        let stale = match &self.last {
            Some(cached) => {
                !cached.snapshot.same_snapshot(collection) || cached.mode != theme.mode()
            }
            None => true,
        };
        if stale {
            self.last = None;
        }
        let cached = self.last.get_or_insert_with(|| CachedProjection {
            snapshot: collection.clone(),
            mode: theme.mode(),
            projection: project(collection, theme.palette()),
        });
        &cached.projection
    }
}
