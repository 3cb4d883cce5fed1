//! Tests for the task list store

use std::sync::Arc;

use todo_dash::core::models::{Filter, Snapshot, Stats, Task};
use todo_dash::core::services::TodoStore;

use crate::common::{
    FixedIdSource, RecordingSink, SequenceIdSource, empty_store, snapshot_of, store_with, values,
};

// =============================================================================
// ADD
// =============================================================================

#[test]
fn add_appends_pending_task() {
    let (mut store, _sink) = empty_store();

    store.add("Buy milk");

    assert_eq!(store.tasks().len(), 1);
    let task = &store.tasks()[0];
    assert_eq!(task.value, "Buy milk");
    assert!(!task.completed);
}

#[test]
fn add_keeps_text_as_typed() {
    let (mut store, _sink) = empty_store();

    store.add("  padded  ");

    assert_eq!(store.tasks()[0].value, "  padded  ");
}

#[test]
fn add_ignores_blank_text() {
    let (mut store, _sink) = empty_store();

    store.add("");
    store.add("   ");
    store.add("\t\n");

    assert!(store.tasks().is_empty());
}

#[test]
fn add_preserves_insertion_order() {
    let (mut store, _sink) = empty_store();

    store.add("A");
    store.add("B");
    store.add("C");

    assert_eq!(values(store.tasks()), ["A", "B", "C"]);
}

#[test]
fn ids_are_unique_when_clock_repeats() {
    let sink = Arc::new(RecordingSink::new());
    let mut store = TodoStore::init(Arc::clone(&sink), FixedIdSource(1_000));

    store.add("A");
    store.add("B");
    store.add("C");

    let ids: Vec<_> = store.tasks().iter().map(|t| t.id).collect();
    assert_eq!(ids, [1_000, 1_001, 1_002]);
}

#[test]
fn ids_exceed_loaded_ids_when_clock_is_behind() {
    let sink = Arc::new(RecordingSink::with_snapshot(Snapshot {
        tasks: vec![Task::new(5_000, "old")],
        dark_mode: false,
    }));
    let mut store = TodoStore::init(Arc::clone(&sink), FixedIdSource(10));

    store.add("new");

    assert_eq!(store.tasks()[1].id, 5_001);
}

#[test]
fn ids_stay_unique_when_loaded_ids_reach_max() {
    let sink = Arc::new(RecordingSink::with_snapshot(Snapshot {
        tasks: vec![Task::new(i64::MAX, "x")],
        dark_mode: false,
    }));
    let mut store = TodoStore::init(Arc::clone(&sink), FixedIdSource(i64::MAX));

    store.add("y");
    store.add("z");

    let ids: Vec<_> = store.tasks().iter().map(|t| t.id).collect();
    assert_eq!(ids, [i64::MAX, i64::MAX - 1, i64::MAX - 2]);

    store.delete(i64::MAX - 1);
    assert_eq!(values(store.tasks()), ["x", "z"]);
}

#[test]
fn clock_id_is_used_when_free_after_max() {
    let sink = Arc::new(RecordingSink::with_snapshot(Snapshot {
        tasks: vec![Task::new(i64::MAX, "x")],
        dark_mode: false,
    }));
    let mut store = TodoStore::init(Arc::clone(&sink), FixedIdSource(10));

    store.add("y");
    store.add("z");
    store.toggle_complete(10);

    let ids: Vec<_> = store.tasks().iter().map(|t| t.id).collect();
    assert_eq!(ids, [i64::MAX, 10, i64::MAX - 1]);
    assert!(store.get(10).unwrap().completed);
    assert!(!store.get(i64::MAX).unwrap().completed);
}

#[test]
fn deleted_ids_are_not_reused() {
    let sink = Arc::new(RecordingSink::new());
    let mut store = TodoStore::init(Arc::clone(&sink), FixedIdSource(7));

    store.add("first");
    let first = store.tasks()[0].id;
    store.delete(first);
    store.add("second");

    assert_ne!(store.tasks()[0].id, first);
}

// =============================================================================
// DELETE / TOGGLE
// =============================================================================

#[test]
fn delete_removes_only_matching_task() {
    let (mut store, _sink) = store_with(snapshot_of(&[("A", false), ("B", true), ("C", false)]));

    store.delete(2);

    assert_eq!(values(store.tasks()), ["A", "C"]);
}

#[test]
fn delete_unknown_id_is_noop() {
    let (mut store, _sink) = store_with(snapshot_of(&[("A", false), ("B", false)]));

    store.delete(99);

    assert_eq!(values(store.tasks()), ["A", "B"]);
}

#[test]
fn toggle_flips_only_target() {
    let (mut store, _sink) = store_with(snapshot_of(&[("A", false), ("B", false), ("C", true)]));

    store.toggle_complete(2);

    let flags: Vec<_> = store.tasks().iter().map(|t| t.completed).collect();
    assert_eq!(flags, [false, true, true]);
    assert_eq!(values(store.tasks()), ["A", "B", "C"]);

    store.toggle_complete(2);
    assert!(!store.get(2).unwrap().completed);
}

#[test]
fn toggle_unknown_id_is_noop() {
    let snapshot = snapshot_of(&[("A", false), ("B", true)]);
    let (mut store, _sink) = store_with(snapshot.clone());

    store.toggle_complete(42);

    assert_eq!(store.tasks(), snapshot.tasks.as_slice());
}

// =============================================================================
// CLEAR
// =============================================================================

#[test]
fn clear_completed_keeps_pending_in_order() {
    let (mut store, _sink) = store_with(snapshot_of(&[
        ("A", true),
        ("B", false),
        ("C", true),
        ("D", false),
    ]));

    store.clear_completed();

    assert_eq!(values(store.tasks()), ["B", "D"]);
    assert!(store.tasks().iter().all(|t| !t.completed));
}

#[test]
fn clear_completed_with_nothing_completed_is_noop() {
    let (mut store, _sink) = store_with(snapshot_of(&[("A", false), ("B", false), ("C", false)]));

    store.clear_completed();

    assert_eq!(values(store.tasks()), ["A", "B", "C"]);
}

#[test]
fn clear_all_empties_list() {
    let (mut store, _sink) = store_with(snapshot_of(&[("A", true), ("B", false)]));

    store.clear_all();

    assert!(store.tasks().is_empty());
    assert_eq!(store.stats(), Stats::default());
}

// =============================================================================
// EDIT
// =============================================================================

#[test]
fn commit_edit_overwrites_value() {
    let (mut store, _sink) = store_with(snapshot_of(&[("A", false), ("B", false)]));

    store.start_edit(2, "B");
    store.set_edit_buffer("Bee");
    store.commit_edit();

    assert_eq!(store.get(2).unwrap().value, "Bee");
    assert!(store.editing().is_none());
}

#[test]
fn commit_blank_edit_keeps_session_open() {
    let (mut store, _sink) = store_with(snapshot_of(&[("A", false)]));

    store.start_edit(1, "A");
    store.set_edit_buffer("   ");
    store.commit_edit();

    assert_eq!(store.get(1).unwrap().value, "A");
    let session = store.editing().expect("edit should stay open");
    assert_eq!(session.target, 1);
    assert_eq!(session.buffer, "   ");
}

#[test]
fn cancel_edit_leaves_task_untouched() {
    let (mut store, _sink) = store_with(snapshot_of(&[("A", false)]));

    store.start_edit(1, "A");
    store.set_edit_buffer("changed");
    store.cancel_edit();

    assert!(store.editing().is_none());
    assert_eq!(store.get(1).unwrap().value, "A");
}

#[test]
fn starting_new_edit_discards_previous_buffer() {
    let (mut store, _sink) = store_with(snapshot_of(&[("A", false), ("B", false)]));

    store.start_edit(1, "A");
    store.set_edit_buffer("half-typed");
    store.start_edit(2, "B");
    store.commit_edit();

    assert_eq!(values(store.tasks()), ["A", "B"]);
    assert!(store.editing().is_none());
}

#[test]
fn edit_targets_task_by_id_under_filter() {
    let (mut store, _sink) = store_with(snapshot_of(&[("A", true), ("B", false), ("C", false)]));
    store.set_filter(Filter::Pending);

    let target = store.filtered_view().nth(1).unwrap().clone();
    store.start_edit(target.id, &target.value);
    store.set_edit_buffer("Cee");
    store.commit_edit();

    assert_eq!(values(store.tasks()), ["A", "B", "Cee"]);
}

#[test]
fn start_edit_unknown_id_is_noop() {
    let (mut store, _sink) = store_with(snapshot_of(&[("A", false)]));

    store.start_edit(9, "whatever");

    assert!(store.editing().is_none());
}

#[test]
fn deleting_edited_task_closes_session() {
    let (mut store, _sink) = store_with(snapshot_of(&[("A", false), ("B", false)]));

    store.start_edit(1, "A");
    store.delete(1);

    assert!(store.editing().is_none());
}

#[test]
fn clear_completed_closes_session_on_removed_task() {
    let (mut store, _sink) = store_with(snapshot_of(&[("A", true), ("B", false)]));

    store.start_edit(2, "B");
    store.clear_completed();
    assert!(store.editing().is_some(), "B survived, edit stays open");

    store.toggle_complete(2);
    store.clear_completed();
    assert!(store.editing().is_none());
}

#[test]
fn commit_without_session_is_noop() {
    let snapshot = snapshot_of(&[("A", false)]);
    let (mut store, _sink) = store_with(snapshot.clone());

    store.commit_edit();
    store.set_edit_buffer("ignored");

    assert_eq!(store.tasks(), snapshot.tasks.as_slice());
}

// =============================================================================
// VIEWS
// =============================================================================

#[test]
fn filtered_view_selects_by_completion() {
    let (mut store, _sink) = store_with(snapshot_of(&[
        ("A", true),
        ("B", false),
        ("C", true),
    ]));

    assert_eq!(values(store.filtered_view()), ["A", "B", "C"]);

    store.set_filter(Filter::Completed);
    assert_eq!(values(store.filtered_view()), ["A", "C"]);

    store.set_filter(Filter::Pending);
    assert_eq!(values(store.filtered_view()), ["B"]);
}

#[test]
fn filtered_view_is_restartable() {
    let (mut store, _sink) = store_with(snapshot_of(&[("A", true), ("B", false)]));
    store.set_filter(Filter::Completed);

    let first: Vec<_> = store.filtered_view().cloned().collect();
    let second: Vec<_> = store.filtered_view().cloned().collect();

    assert_eq!(first, second);
}

#[test]
fn set_filter_does_not_mutate_list() {
    let snapshot = snapshot_of(&[("A", true), ("B", false)]);
    let (mut store, sink) = store_with(snapshot.clone());

    store.set_filter(Filter::Pending);

    assert_eq!(store.filter(), Filter::Pending);
    assert_eq!(store.tasks(), snapshot.tasks.as_slice());
    assert_eq!(sink.write_count(), 0);
}

#[test]
fn stats_count_whole_list() {
    let (mut store, _sink) = store_with(snapshot_of(&[("A", true), ("B", false), ("C", false)]));
    store.set_filter(Filter::Completed);

    let stats = store.stats();

    assert_eq!(stats.total, 3);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.pending, 2);
}

#[test]
fn scenario_buy_milk_walk_dog() {
    let (mut store, _sink) = empty_store();

    store.add("Buy milk");
    store.add("Walk dog");
    let milk = store.tasks()[0].id;
    store.toggle_complete(milk);

    assert_eq!(
        store.stats(),
        Stats {
            total: 2,
            completed: 1,
            pending: 1
        }
    );
    store.set_filter(Filter::Completed);
    assert_eq!(values(store.filtered_view()), ["Buy milk"]);
}

// =============================================================================
// THEME
// =============================================================================

#[test]
fn theme_toggles_and_sets() {
    let (mut store, sink) = empty_store();
    assert!(!store.dark_mode());

    store.toggle_theme();
    assert!(store.dark_mode());

    store.set_dark_mode(false);
    assert!(!store.dark_mode());
    assert_eq!(sink.write_count(), 2);
}

#[test]
fn theme_is_independent_of_tasks() {
    let (mut store, _sink) = store_with(snapshot_of(&[("A", false)]));

    store.toggle_theme();
    store.clear_all();

    assert!(store.dark_mode());
}

// =============================================================================
// WRITE-THROUGH
// =============================================================================

#[test]
fn every_mutation_writes_full_state() {
    let (mut store, sink) = empty_store();

    store.add("A");
    store.add("B");
    store.toggle_complete(1);
    store.start_edit(2, "B");
    store.set_edit_buffer("Bee");
    store.commit_edit();
    store.toggle_theme();

    assert_eq!(sink.write_count(), 5);
    let last = sink.last_write().unwrap();
    assert_eq!(&last, store.snapshot());
    assert!(last.dark_mode);
    assert_eq!(values(&last.tasks), ["A", "Bee"]);
}

#[test]
fn noop_mutations_still_write_back() {
    let (mut store, sink) = empty_store();

    store.add("   ");
    store.delete(1);
    store.toggle_complete(1);
    store.clear_completed();

    assert_eq!(sink.write_count(), 4);
}

#[test]
fn view_and_edit_state_are_not_written() {
    let (mut store, sink) = store_with(snapshot_of(&[("A", false)]));

    store.set_filter(Filter::Completed);
    store.start_edit(1, "A");
    store.set_edit_buffer("x");
    store.cancel_edit();

    assert_eq!(sink.write_count(), 0);
}

#[test]
fn init_loads_snapshot() {
    let mut snapshot = snapshot_of(&[("A", true), ("B", false)]);
    snapshot.dark_mode = true;

    let (store, _sink) = store_with(snapshot.clone());

    assert_eq!(store.snapshot(), &snapshot);
    assert_eq!(store.filter(), Filter::All);
    assert!(store.editing().is_none());
}

#[test]
fn init_drops_duplicate_ids() {
    let snapshot = Snapshot {
        tasks: vec![Task::new(1, "A"), Task::new(1, "dup"), Task::new(2, "B")],
        dark_mode: false,
    };

    let (store, _sink) = store_with(snapshot);

    assert_eq!(values(store.tasks()), ["A", "B"]);
}

#[test]
fn failed_write_marks_store_dirty() {
    let (mut store, sink) = empty_store();
    sink.set_failing(true);

    store.add("A");

    assert!(store.has_unsaved_changes());
    assert_eq!(values(store.tasks()), ["A"], "in-memory state still updated");

    sink.set_failing(false);
    store.add("B");
    assert!(!store.has_unsaved_changes());
}

#[test]
fn teardown_retries_unsaved_state() {
    let (mut store, sink) = empty_store();
    sink.set_failing(true);
    store.add("A");
    sink.set_failing(false);

    store.teardown().unwrap();

    assert_eq!(values(&sink.last_write().unwrap().tasks), ["A"]);
}

#[test]
fn teardown_reports_persistent_failure() {
    let (mut store, sink) = empty_store();
    sink.set_failing(true);
    store.add("A");

    assert!(store.teardown().is_err());
}

#[test]
fn teardown_when_clean_does_not_write() {
    let (store, sink) = store_with(snapshot_of(&[("A", false)]));

    store.teardown().unwrap();

    assert_eq!(sink.write_count(), 0);
}

#[test]
fn sequence_source_feeds_ids() {
    let sink = Arc::new(RecordingSink::new());
    let mut store = TodoStore::init(sink, SequenceIdSource::starting_at(100));

    store.add("A");
    store.add("B");

    let ids: Vec<_> = store.tasks().iter().map(|t| t.id).collect();
    assert_eq!(ids, [100, 101]);
}
