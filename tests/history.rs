//! Behavioral tests for the task history store through the public API.

use todo_history::adapters::stepping::clock::SteppingClock;
use todo_history::history::Memento;
use todo_history::{HistoryLimit, Task, TaskHistoryStore, ViewFilter};

fn store() -> TaskHistoryStore {
    TaskHistoryStore::with_clock(HistoryLimit::Unbounded, Box::new(SteppingClock::default()))
}

fn scenario() -> TaskHistoryStore {
    let mut store = store();
    store.add_task(Task::builder("Buy groceries").due_date("2023-09-20").build());
    store.add_task(Task::builder("Finish report").build());
    store.add_task(Task::builder("Call mom").build());
    store
}

#[test]
fn groceries_walkthrough() {
    let mut store = scenario();
    store.mark_completed("Buy groceries");
    let all = store.view_tasks(ViewFilter::All);
    assert_eq!(all.len(), 3);
    assert_eq!(all[0], "Buy groceries - Completed, Due: 2023-09-20");

    store.undo();
    assert_eq!(store.view_tasks(ViewFilter::All)[0], "Buy groceries - Pending, Due: 2023-09-20");

    store.redo();
    assert_eq!(store.view_tasks(ViewFilter::All)[0], "Buy groceries - Completed, Due: 2023-09-20");

    store.delete_task("Call mom");
    assert_eq!(
        store.view_tasks(ViewFilter::All),
        vec!["Buy groceries - Completed, Due: 2023-09-20", "Finish report - Pending, Due: None"]
    );
}

#[test]
fn view_length_tracks_adds_minus_deletes() {
    let mut store = store();
    let names = ["one", "two", "three", "four", "five"];
    for name in names {
        store.add_task(Task::builder(name).build());
    }
    store.delete_task("two");
    store.delete_task("four");
    let all = store.view_tasks(ViewFilter::All);
    assert_eq!(all.len(), names.len() - 2);
    assert_eq!(
        all,
        vec!["one - Pending, Due: None", "three - Pending, Due: None", "five - Pending, Due: None"]
    );
}

#[test]
fn undo_and_redo_on_empty_stacks_are_idempotent() {
    let mut store = scenario();
    while store.undo() {}
    let tasks = store.tasks().to_vec();
    let redo = store.redo_entries().to_vec();
    assert!(!store.undo());
    assert_eq!(store.tasks(), tasks.as_slice());
    assert_eq!(store.redo_entries(), redo.as_slice());
    assert_eq!(store.undo_depth(), 0);

    while store.redo() {}
    let tasks = store.tasks().to_vec();
    let undo = store.undo_entries().to_vec();
    assert!(!store.redo());
    assert_eq!(store.tasks(), tasks.as_slice());
    assert_eq!(store.undo_entries(), undo.as_slice());
}

#[test]
fn add_then_undo_removes_the_task() {
    let mut store = scenario();
    store.add_task(Task::builder("Walk dog").completed(true).build());
    store.undo();
    assert!(store.tasks().iter().all(|t| t.description() != "Walk dog"));
    assert_eq!(store.len(), 3);
}

#[test]
fn redo_right_after_undo_restores_visible_state() {
    let mut store = scenario();
    store.mark_completed("Finish report");
    let before = store.view_tasks(ViewFilter::All);
    store.undo();
    assert_ne!(store.view_tasks(ViewFilter::All), before);
    store.redo();
    assert_eq!(store.view_tasks(ViewFilter::All), before);

    store.add_task(Task::builder("Walk dog").build());
    let before = store.view_tasks(ViewFilter::All);
    store.undo();
    store.redo();
    assert_eq!(store.view_tasks(ViewFilter::All), before);
}

#[test]
fn every_mutation_after_undo_disables_redo() {
    let mutations: [fn(&mut TaskHistoryStore); 3] = [
        |s| s.add_task(Task::builder("new").build()),
        |s| s.mark_completed("Finish report"),
        |s| s.delete_task("Finish report"),
    ];
    for mutate in mutations {
        let mut store = scenario();
        store.undo();
        assert!(store.can_redo());
        mutate(&mut store);
        assert!(!store.can_redo());
        let snapshot = store.tasks().to_vec();
        assert!(!store.redo());
        assert_eq!(store.tasks(), snapshot.as_slice());
    }
}

#[test]
fn deleting_an_unknown_task_still_journals() {
    let mut store = scenario();
    store.delete_task("Nobody");
    assert_eq!(store.len(), 3);
    assert_eq!(store.undo_entries().last().map(|e| &e.memento), Some(&Memento::DeletionMarker));

    // The marker reverses positionally, so the last task goes away.
    store.undo();
    assert_eq!(store.len(), 2);
    assert!(store.tasks().iter().all(|t| t.description() != "Call mom"));
}

#[test]
fn filters_split_completed_and_pending() {
    let mut store = scenario();
    store.mark_completed("Call mom");
    assert_eq!(store.view_tasks(ViewFilter::Completed), vec!["Call mom - Completed, Due: None"]);
    assert_eq!(store.view_tasks(ViewFilter::Pending).len(), 2);
    assert_eq!(store.view_tasks(ViewFilter::parse_lossy("whatever")).len(), 3);
}

#[test]
fn bounded_store_forgets_oldest_actions() {
    let mut store = TaskHistoryStore::with_limit(HistoryLimit::bounded(1).unwrap());
    store.add_task(Task::builder("a").build());
    store.add_task(Task::builder("b").build());
    assert_eq!(store.undo_depth(), 1);
    assert!(store.undo());
    assert!(!store.undo());
    assert_eq!(store.view_tasks(ViewFilter::All), vec!["a - Pending, Due: None"]);
}

#[test]
fn padded_filter_names_show_everything() {
    let mut store = store();
    store.add_task(Task::builder("done").completed(true).build());
    store.add_task(Task::builder("open").build());
    assert_eq!(store.view_tasks(ViewFilter::parse_lossy(" pending ")).len(), 2);
}
