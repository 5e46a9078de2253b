//! Store and projection behavior driven through the public API.
//!
//! These tests sweep representative inputs over the mutation contract:
//! ordering, identity, no-op tolerance and the empty-state flag.

use tasklist::core::confirm::ConfirmOutcome;
use tasklist::core::projector::project;
use tasklist::core::store::{TaskCollection, TaskStore};
use tasklist::core::task::TaskId;
use tasklist::core::theme::{Palette, ThemeSelector};
use tasklist::session::{Intent, Session, SessionEvent};
use tasklist::test_support::{ScriptedConfirm, store_with, task};

fn seeded() -> TaskStore {
    store_with(vec![
        task(4, "Call mom", true),
        task(3, "Finish project", false),
        task(2, "Walk the dog", true),
        task(1, "Buy groceries", false),
    ])
}

fn ids(collection: &TaskCollection) -> Vec<u64> {
    collection.iter().map(|task| task.id().get()).collect()
}

#[test]
fn add_prepends_exactly_one_open_task() {
    for title in ["x", "Buy milk", "  padded  ", "multi word title", "ünïcödé"] {
        let mut store = seeded();
        let before = store.snapshot();

        let after = store.add(title);

        assert_eq!(after.len(), before.len() + 1, "title {:?}", title);
        let first = &after.as_slice()[0];
        assert_eq!(first.title().as_str(), title.trim());
        assert!(!first.is_done());
        assert_eq!(&after.as_slice()[1..], before.as_slice());
    }
}

#[test]
fn blank_titles_change_nothing() {
    for blank in ["", " ", "   ", "\t", "\n\r "] {
        let mut store = seeded();
        let before = store.snapshot();

        assert_eq!(store.add(blank), before, "title {:?}", blank);
    }
}

#[test]
fn toggle_affects_only_its_target() {
    for id in 1..=4 {
        let mut store = seeded();
        let before = store.snapshot();

        let after = store.toggle(TaskId::new(id));

        assert_eq!(ids(&after), ids(&before));
        for (old, new) in before.iter().zip(after.iter()) {
            assert_eq!(old.title(), new.title());
            if old.id() == TaskId::new(id) {
                assert_ne!(old.is_done(), new.is_done());
            } else {
                assert_eq!(old, new);
            }
        }
        assert_eq!(store.toggle(TaskId::new(id)), before);
    }
}

#[test]
fn absent_ids_are_noops() {
    for id in [0, 5, 99, u64::MAX] {
        let mut store = seeded();
        let before = store.snapshot();

        assert!(store.toggle(TaskId::new(id)).same_snapshot(&before));
        assert!(store.remove(TaskId::new(id)).same_snapshot(&before));
        assert_eq!(store.count(), 4);
    }
}

#[test]
fn remove_drops_one_and_keeps_order() {
    for id in 1..=4 {
        let mut store = seeded();
        let mut expected = ids(&store.snapshot());
        expected.retain(|other| *other != id);

        let after = store.remove(TaskId::new(id));

        assert_eq!(store.count(), 3);
        assert!(after.get(TaskId::new(id)).is_none());
        assert_eq!(ids(&after), expected);
    }
}

#[test]
fn empty_flag_tracks_count() {
    let mut store = store_with(vec![task(2, "B", false), task(1, "A", true)]);
    for id in [2, 1] {
        assert!(!project(&store.snapshot(), &Palette::LIGHT).is_empty);
        store.remove(TaskId::new(id));
    }
    assert_eq!(store.count(), 0);
    assert!(project(&store.snapshot(), &Palette::DARK).is_empty);
}

/// Scenario: add to an empty list, then confirm its deletion.
#[test]
fn session_round_trip_back_to_empty() {
    let mut session = Session::new(TaskStore::new(), ThemeSelector::default());
    let mut confirm = ScriptedConfirm::new([ConfirmOutcome::Confirmed]);

    let added = session.handle(Intent::Submit("Buy milk".to_string()), &mut confirm);
    let SessionEvent::Added(id) = added else {
        panic!("expected add, got {:?}", added);
    };
    assert_eq!(session.projection().rows[0].title, "Buy milk");
    assert_eq!(session.projection().rows[0].key, id.to_string());

    let deleted = session.handle(Intent::Delete(id), &mut confirm);

    assert_eq!(deleted, SessionEvent::Deleted(id));
    assert!(session.projection().is_empty);
}
