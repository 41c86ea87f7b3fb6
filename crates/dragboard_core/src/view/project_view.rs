//! Filtered project list; the drop target of the board.
//!
//! # Responsibility
//! - Keep a local copy of the projects whose status matches this view's kind.
//! - Re-render every card from scratch on each store notification.
//! - Translate a completed drop into `ProjectStore::set_status(id, kind)`.
//!
//! # Invariants
//! - `kind` is fixed at construction and is the only destination status this
//!   view ever requests.
//! - The local list is replaced wholesale, never patched.
//! - The view holds the store weakly from the listener side, so dropping the
//!   view unregisters it without leaking a cycle.

use crate::dnd::payload::DragPayload;
use crate::dnd::transfer::DragEvent;
use crate::dnd::DropTarget;
use crate::dom::document::PROJECT_LIST_TEMPLATE;
use crate::dom::element::{first_by_tag, ElementHandle};
use crate::dom::{InsertPosition, Mount, MountError};
use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::store::project_store::{ListenerId, ProjectStore};
use crate::view::project_card::ProjectCard;
use log::{error, info, warn};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Class marking a list as the current drop candidate.
pub const DROPPABLE_CLASS: &str = "droppable";

/// One board column.
///
/// Cheap to clone; clones share the same underlying view.
#[derive(Clone)]
pub struct ProjectView {
    inner: Rc<ViewInner>,
}

struct ViewInner {
    kind: ProjectStatus,
    store: Rc<ProjectStore>,
    mount: Rc<dyn Mount>,
    element: ElementHandle,
    list: ElementHandle,
    list_id: String,
    listener: Cell<Option<ListenerId>>,
    render_count: Cell<usize>,
    state: RefCell<ViewState>,
}

#[derive(Default)]
struct ViewState {
    projects: Vec<Project>,
    cards: Vec<ProjectCard>,
}

impl ProjectView {
    /// Mounts the view at the end of `host_id` and subscribes it to `store`.
    ///
    /// The view is seeded from the store's current snapshot without
    /// triggering a notification.
    pub fn mount(
        kind: ProjectStatus,
        store: Rc<ProjectStore>,
        mount: Rc<dyn Mount>,
        host_id: &str,
    ) -> Result<Self, MountError> {
        let element = mount.mount(PROJECT_LIST_TEMPLATE, host_id, InsertPosition::End)?;
        let section_id = section_id(kind);
        let list_id = format!("{section_id}-list");
        element.borrow_mut().id = Some(section_id);
        if let Some(heading) = first_by_tag(&element, "h2") {
            heading.borrow_mut().text =
                Some(format!("{} PROJECTS", kind.as_str().to_ascii_uppercase()));
        }
        let list = first_by_tag(&element, "ul")
            .ok_or_else(|| MountError::MissingElement {
                template: PROJECT_LIST_TEMPLATE.to_string(),
                tag: "ul".to_string(),
            })?;
        list.borrow_mut().id = Some(list_id.clone());

        let inner = Rc::new(ViewInner {
            kind,
            store: Rc::clone(&store),
            mount,
            element,
            list,
            list_id,
            listener: Cell::new(None),
            render_count: Cell::new(0),
            state: RefCell::new(ViewState::default()),
        });

        let weak: Weak<ViewInner> = Rc::downgrade(&inner);
        let listener = store.add_listener(move |projects| {
            if let Some(inner) = weak.upgrade() {
                inner.apply(projects);
            }
        });
        inner.listener.set(Some(listener));
        inner.apply(&store.snapshot());

        Ok(Self { inner })
    }

    pub fn kind(&self) -> ProjectStatus {
        self.inner.kind
    }

    pub fn element(&self) -> &ElementHandle {
        &self.inner.element
    }

    pub fn list_element(&self) -> &ElementHandle {
        &self.inner.list
    }

    /// Projects currently shown, in store order.
    pub fn projects(&self) -> Vec<Project> {
        self.inner.state.borrow().projects.clone()
    }

    pub fn project_ids(&self) -> Vec<ProjectId> {
        self.inner
            .state
            .borrow()
            .projects
            .iter()
            .map(|project| project.id)
            .collect()
    }

    /// Cards currently rendered, in store order.
    pub fn cards(&self) -> Vec<ProjectCard> {
        self.inner.state.borrow().cards.clone()
    }

    pub fn card(&self, project_id: ProjectId) -> Option<ProjectCard> {
        self.inner
            .state
            .borrow()
            .cards
            .iter()
            .find(|card| card.project().id == project_id)
            .cloned()
    }

    /// Whether the list currently shows the drop affordance.
    pub fn is_drop_candidate(&self) -> bool {
        self.inner.list.borrow().has_class(DROPPABLE_CLASS)
    }

    /// Number of full renders, including the initial seed.
    pub fn render_count(&self) -> usize {
        self.inner.render_count.get()
    }
}

impl ViewInner {
    fn apply(&self, projects: &[Project]) {
        let filtered: Vec<Project> = projects
            .iter()
            .filter(|project| project.status == self.kind)
            .cloned()
            .collect();
        let cards = self.render(&filtered);
        *self.state.borrow_mut() = ViewState {
            projects: filtered,
            cards,
        };
        self.render_count.set(self.render_count.get() + 1);
    }

    fn render(&self, projects: &[Project]) -> Vec<ProjectCard> {
        self.list.borrow_mut().children.clear();
        let mut cards = Vec::with_capacity(projects.len());
        for project in projects {
            match ProjectCard::mount(self.mount.as_ref(), &self.list_id, project.clone()) {
                Ok(card) => cards.push(card),
                Err(err) => error!(
                    "event=card_render module=view status=error kind={} project_id={} error={}",
                    self.kind, project.id, err
                ),
            }
        }
        cards
    }

    fn set_drop_candidate(&self, on: bool) {
        let mut list = self.list.borrow_mut();
        if on {
            list.classes.insert(DROPPABLE_CLASS.to_string());
        } else {
            list.classes.remove(DROPPABLE_CLASS);
        }
    }
}

impl Drop for ViewInner {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.store.remove_listener(listener);
        }
    }
}

impl DropTarget for ProjectView {
    fn target_id(&self) -> String {
        section_id(self.inner.kind)
    }

    fn on_drag_over(&self, event: &mut DragEvent<'_>) {
        if DragPayload::is_acceptable(event.data_transfer()) {
            event.prevent_default();
            self.inner.set_drop_candidate(true);
        }
    }

    fn on_drag_leave(&self, _event: &mut DragEvent<'_>) {
        self.inner.set_drop_candidate(false);
    }

    fn on_drop(&self, event: &mut DragEvent<'_>) {
        match DragPayload::decode(event.data_transfer()) {
            Ok(payload) => {
                info!(
                    "event=project_drop module=view status=ok kind={} project_id={}",
                    self.inner.kind,
                    payload.project_id()
                );
                self.inner
                    .store
                    .set_status(payload.project_id(), self.inner.kind);
            }
            Err(err) => warn!(
                "event=project_drop module=view status=noop kind={} reason={}",
                self.inner.kind, err
            ),
        }
        self.inner.set_drop_candidate(false);
    }

    fn boxed(&self) -> Box<dyn DropTarget> {
        Box::new(self.clone())
    }
}

fn section_id(kind: ProjectStatus) -> String {
    format!("{}-projects", kind.as_str())
}
