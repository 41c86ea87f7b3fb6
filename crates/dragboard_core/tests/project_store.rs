use dragboard_core::{Document, Mount, Project, ProjectStatus, ProjectStore, ProjectView};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use uuid::Uuid;

fn recording_store() -> (ProjectStore, Rc<RefCell<Vec<Vec<Project>>>>) {
    let store = ProjectStore::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    {
        let seen = Rc::clone(&seen);
        store.add_listener(move |projects| seen.borrow_mut().push(projects.to_vec()));
    }
    (store, seen)
}

#[test]
fn add_project_appends_active_project_and_notifies_once() {
    let (store, seen) = recording_store();

    let id = store.add_project("Build shed", "Construct backyard shed", 3);

    assert_eq!(store.len(), 1);
    let project = store.get(id).unwrap();
    assert_eq!(project.status, ProjectStatus::Active);
    assert_eq!(project.people_count, 3);
    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(seen.borrow()[0], vec![project]);
}

#[test]
fn ids_are_pairwise_distinct() {
    let store = ProjectStore::new();
    let ids: Vec<_> = (0..200)
        .map(|i| store.add_project(format!("p{i}"), "some description", 1 + i % 5))
        .collect();

    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn add_listener_does_not_replay_current_state() {
    let store = ProjectStore::new();
    store.add_project("Existing", "already there", 2);

    let calls = Rc::new(RefCell::new(0));
    {
        let calls = Rc::clone(&calls);
        store.add_listener(move |_| *calls.borrow_mut() += 1);
    }
    assert_eq!(*calls.borrow(), 0);

    store.add_project("Next", "comes later", 2);
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn every_listener_gets_exactly_one_post_mutation_snapshot() {
    let store = ProjectStore::new();
    let counts = Rc::new(RefCell::new(vec![0_usize; 3]));
    for slot in 0..3 {
        let counts = Rc::clone(&counts);
        store.add_listener(move |_| counts.borrow_mut()[slot] += 1);
    }

    let id = store.add_project("A", "first project", 1);
    store.set_status(id, ProjectStatus::Finished);

    assert_eq!(*counts.borrow(), vec![2, 2, 2]);
}

#[test]
fn set_status_changes_only_the_target_and_keeps_order() {
    let (store, seen) = recording_store();
    let first = store.add_project("P1", "first project", 1);
    let second = store.add_project("P2", "second project", 2);

    store.set_status(first, ProjectStatus::Finished);

    let last = seen.borrow().last().cloned().unwrap();
    assert_eq!(
        last.iter().map(|p| (p.id, p.status)).collect::<Vec<_>>(),
        vec![
            (first, ProjectStatus::Finished),
            (second, ProjectStatus::Active)
        ]
    );
    assert_eq!(seen.borrow().len(), 3);
}

#[test]
fn set_status_with_unknown_id_is_silent_noop() {
    let (store, seen) = recording_store();
    store.add_project("P1", "first project", 1);
    let before = store.snapshot();
    let notifications = seen.borrow().len();

    store.set_status(Uuid::new_v4(), ProjectStatus::Finished);

    assert_eq!(seen.borrow().len(), notifications);
    assert_eq!(store.snapshot(), before);
}

#[test]
fn set_status_to_current_value_still_notifies_with_equal_state() {
    let (store, seen) = recording_store();
    let id = store.add_project("P1", "first project", 1);
    let before = store.snapshot();

    store.set_status(id, ProjectStatus::Active);

    assert_eq!(seen.borrow().len(), 2);
    assert_eq!(seen.borrow()[1], before.to_vec());
}

#[test]
fn snapshot_mutation_cannot_reach_store() {
    let (store, seen) = recording_store();
    let id = store.add_project("P1", "first project", 1);

    let mut copy = seen.borrow()[0].clone();
    copy[0].status = ProjectStatus::Finished;

    assert_eq!(store.get(id).unwrap().status, ProjectStatus::Active);
}

#[test]
fn mutation_from_listener_is_dispatched_after_current_round() {
    let store = Rc::new(ProjectStore::new());
    let first = store.add_project("P1", "first project", 1);
    let log = Rc::new(RefCell::new(Vec::new()));
    let active: Rc<dyn Mount> = Rc::new(Document::with_default_templates("app"));
    let active_view = ProjectView::mount(
        ProjectStatus::Active,
        Rc::clone(&store),
        active,
        "app",
    )
    .unwrap();
    {
        let weak = Rc::downgrade(&store);
        let log = Rc::clone(&log);
        store.add_listener(move |projects| {
            let status = projects[0].status;
            log.borrow_mut().push(status);
            if status == ProjectStatus::Finished {
                if let Some(store) = weak.upgrade() {
                    store.set_status(projects[0].id, ProjectStatus::Active);
                }
            }
        });
    }
    let finished: Rc<dyn Mount> = Rc::new(Document::with_default_templates("app"));
    let finished_view = ProjectView::mount(
        ProjectStatus::Finished,
        Rc::clone(&store),
        finished,
        "app",
    )
    .unwrap();

    store.set_status(first, ProjectStatus::Finished);

    assert_eq!(
        *log.borrow(),
        vec![ProjectStatus::Finished, ProjectStatus::Active]
    );
    assert_eq!(store.get(first).unwrap().status, ProjectStatus::Active);
    assert_eq!(active_view.project_ids(), vec![first]);
    assert!(finished_view.project_ids().is_empty());
}

#[test]
fn queued_snapshots_reach_every_listener_in_mutation_order() {
    let store = Rc::new(ProjectStore::new());
    let counts = Rc::new(RefCell::new(Vec::new()));
    {
        let weak = Rc::downgrade(&store);
        store.add_listener(move |projects| {
            if projects.len() == 1 {
                if let Some(store) = weak.upgrade() {
                    store.add_project("P2", "added by listener", 2);
                }
            }
        });
    }
    {
        let counts = Rc::clone(&counts);
        store.add_listener(move |projects| counts.borrow_mut().push(projects.len()));
    }

    store.add_project("P1", "first project", 1);

    assert_eq!(*counts.borrow(), vec![1, 2]);
    assert_eq!(store.len(), 2);
}
