use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use taskboard_core::{Project, ProjectStatus, ProjectStore};

/// Records every snapshot a listener receives.
fn recorder(store: &mut ProjectStore) -> Rc<RefCell<Vec<Vec<Project>>>> {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    store.add_listener(move |projects| sink.borrow_mut().push(projects));
    calls
}

#[test]
fn generated_ids_are_pairwise_distinct() {
    let mut store = ProjectStore::new();
    let ids: Vec<_> = (0..200)
        .map(|index| store.add_project(format!("project {index}"), "description", 2))
        .collect();

    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn every_listener_sees_post_mutation_state_once() {
    let mut store = ProjectStore::new();
    let first = recorder(&mut store);
    let second = recorder(&mut store);

    let id = store.add_project("Build API", "Design and implement", 3);

    for calls in [&first, &second] {
        let calls = calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].len(), 1);
        assert_eq!(calls[0][0].id, id);
    }
}

#[test]
fn late_listener_misses_earlier_mutations() {
    let mut store = ProjectStore::new();
    store.add_project("early", "description", 1);
    let late = recorder(&mut store);
    assert!(late.borrow().is_empty());

    store.add_project("later", "description", 1);
    let calls = late.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].len(), 2);
}

#[test]
fn mutating_a_snapshot_does_not_leak() {
    let mut store = ProjectStore::new();
    store.add_listener(|mut projects| {
        projects.clear();
    });
    store.add_listener(|mut projects| {
        for project in projects.iter_mut() {
            project.title = "tampered".to_string();
            project.status = ProjectStatus::Finished;
        }
    });
    let observer = recorder(&mut store);

    store.add_project("Build API", "Design and implement", 3);

    assert_eq!(store.projects()[0].title, "Build API");
    assert!(store.projects()[0].is_active());
    let calls = observer.borrow();
    assert_eq!(calls[0][0].title, "Build API");
    assert_eq!(calls[0][0].status, ProjectStatus::Active);
}

#[test]
fn moving_twice_notifies_twice_and_stays_finished() {
    let mut store = ProjectStore::new();
    let id = store.add_project("Build API", "Design and implement", 3);
    let calls = recorder(&mut store);

    store.move_project(id.as_str(), ProjectStatus::Finished);
    store.move_project(id.as_str(), ProjectStatus::Finished);

    assert_eq!(calls.borrow().len(), 2);
    assert_eq!(store.len(), 1);
    assert_eq!(
        store.get(id.as_str()).map(|project| project.status),
        Some(ProjectStatus::Finished)
    );
}

#[test]
fn unknown_id_changes_nothing_and_stays_silent() {
    let mut store = ProjectStore::new();
    store.add_project("Build API", "Design and implement", 3);
    let before = store.snapshot();
    let calls = recorder(&mut store);

    let moved = store.move_project("does-not-exist", ProjectStatus::Finished);

    assert!(!moved);
    assert_eq!(store.snapshot(), before);
    assert!(calls.borrow().is_empty());
}

#[test]
fn listeners_run_in_registration_order() {
    let mut store = ProjectStore::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    for tag in 0..3 {
        let order = Rc::clone(&order);
        store.add_listener(move |_| order.borrow_mut().push(tag));
    }

    store.add_project("Build API", "Design and implement", 3);
    assert_eq!(*order.borrow(), vec![0, 1, 2]);
    assert_eq!(store.listener_count(), 3);
}
