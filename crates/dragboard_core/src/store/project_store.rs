//! Project store with synchronous listener dispatch.
//!
//! # Responsibility
//! - Create projects and apply status transitions.
//! - Fan out post-mutation snapshots to listeners in registration order.
//!
//! # Invariants
//! - Insertion order is preserved and never rearranged.
//! - Listeners run on the mutating call's turn, after internal borrows are released,
//!   so a listener may read or mutate the store again without panicking.
//! - A mutation made by a listener is queued: the current dispatch reaches every
//!   listener first, then the queued snapshot is dispatched, so each listener's last
//!   snapshot is the final state.
//! - `set_status` for an unknown id emits no notification.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use log::{debug, info};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

/// Immutable copy of the full project sequence handed to listeners.
pub type ProjectSnapshot = Rc<[Project]>;

/// Callback invoked with every post-mutation snapshot.
pub type Listener = Rc<dyn Fn(&[Project])>;

/// Handle identifying one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Single source of truth for board projects.
///
/// One instance is built by the application assembly and shared as
/// `Rc<ProjectStore>`; the store is single-threaded by construction.
#[derive(Default)]
pub struct ProjectStore {
    projects: RefCell<Vec<Project>>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    next_listener_id: Cell<u64>,
    pending: RefCell<VecDeque<ProjectSnapshot>>,
    dispatching: Cell<bool>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an active project, appends it and notifies listeners.
    ///
    /// Inputs are trusted: validation happens in the form before this call.
    pub fn add_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people_count: u32,
    ) -> ProjectId {
        let project = Project::new(title, description, people_count);
        let id = project.id;
        let total = {
            let mut projects = self.projects.borrow_mut();
            projects.push(project);
            projects.len()
        };
        info!(
            "event=project_add module=store status=ok project_id={} people={} total={}",
            id, people_count, total
        );
        self.notify();
        id
    }

    /// Moves one project to `new_status`.
    ///
    /// Unknown ids are a silent no-op. A known id always notifies, even when
    /// the status does not change.
    pub fn set_status(&self, project_id: ProjectId, new_status: ProjectStatus) {
        let previous = {
            let mut projects = self.projects.borrow_mut();
            match projects.iter_mut().find(|project| project.id == project_id) {
                Some(project) => {
                    let previous = project.status;
                    project.status = new_status;
                    previous
                }
                None => {
                    debug!(
                        "event=project_status module=store status=noop reason=unknown_id project_id={}",
                        project_id
                    );
                    return;
                }
            }
        };
        info!(
            "event=project_status module=store status=ok project_id={} from={} to={}",
            project_id, previous, new_status
        );
        self.notify();
    }

    /// Registers a listener for future mutations.
    ///
    /// The listener is not called with the current state.
    pub fn add_listener(&self, listener: impl Fn(&[Project]) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id.get());
        self.next_listener_id.set(id.0 + 1);
        let listener: Listener = Rc::new(listener);
        self.listeners.borrow_mut().push((id, listener));
        debug!(
            "event=listener_add module=store status=ok listener_id={} listeners={}",
            id.0,
            self.listener_count()
        );
        id
    }

    /// Unregisters a listener. Returns `false` when the handle is unknown.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        before != listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Returns an immutable copy of the current sequence.
    pub fn snapshot(&self) -> ProjectSnapshot {
        Rc::from(self.projects.borrow().as_slice())
    }

    /// Returns a copy of one project.
    pub fn get(&self, project_id: ProjectId) -> Option<Project> {
        self.projects
            .borrow()
            .iter()
            .find(|project| project.id == project_id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.projects.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.borrow().is_empty()
    }

    fn notify(&self) {
        self.pending.borrow_mut().push_back(self.snapshot());
        if self.dispatching.replace(true) {
            debug!(
                "event=notify module=store status=queued pending={}",
                self.pending.borrow().len()
            );
            return;
        }
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(snapshot) = next else {
                break;
            };
            // Listeners registered during dispatch only see later mutations.
            let listeners: Vec<Listener> = self
                .listeners
                .borrow()
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect();
            for listener in listeners {
                listener(&snapshot[..]);
            }
        }
        self.dispatching.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectStore;
    use crate::model::project::ProjectStatus;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn listeners_run_in_registration_order() {
        let store = ProjectStore::new();
        let calls = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second", "third"] {
            let calls = Rc::clone(&calls);
            store.add_listener(move |_| calls.borrow_mut().push(tag));
        }

        store.add_project("A", "first project", 1);
        assert_eq!(*calls.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn listener_may_reenter_store() {
        let store = Rc::new(ProjectStore::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let inner = Rc::downgrade(&store);
            let seen = Rc::clone(&seen);
            store.add_listener(move |projects| {
                let store = inner.upgrade().expect("store alive during dispatch");
                seen.borrow_mut().push((projects.len(), store.len()));
            });
        }

        store.add_project("A", "first project", 2);
        assert_eq!(*seen.borrow(), vec![(1, 1)]);
    }

    #[test]
    fn removed_listener_is_not_called() {
        let store = ProjectStore::new();
        let count = Rc::new(RefCell::new(0));
        let id = {
            let count = Rc::clone(&count);
            store.add_listener(move |_| *count.borrow_mut() += 1)
        };

        assert!(store.remove_listener(id));
        assert!(!store.remove_listener(id));
        store.add_project("A", "first project", 2);
        assert_eq!(*count.borrow(), 0);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn snapshot_is_detached_from_live_state() {
        let store = ProjectStore::new();
        let id = store.add_project("A", "first project", 2);
        let before = store.snapshot();

        store.set_status(id, ProjectStatus::Finished);
        assert_eq!(before[0].status, ProjectStatus::Active);
        assert_eq!(store.get(id).map(|p| p.status), Some(ProjectStatus::Finished));
    }
}
