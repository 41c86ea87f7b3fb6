//! Application assembly.
//!
//! # Responsibility
//! - Build the one store-backed board: input form plus active and finished views.
//! - Offer a complete drag gesture for hosts that cannot emit raw drag events.
//!
//! # Invariants
//! - Every component shares the store handle passed in; the board creates no
//!   second store.

use crate::config::BoardConfig;
use crate::dnd::session::{DragSession, DragSessionError, DropOutcome};
use crate::dom::{Mount, MountError};
use crate::model::project::{ProjectId, ProjectStatus};
use crate::store::project_store::ProjectStore;
use crate::view::project_card::ProjectCard;
use crate::view::project_form::ProjectForm;
use crate::view::project_view::ProjectView;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Errors from board-level gesture helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// No rendered card carries this id.
    UnknownProject(ProjectId),
    Session(DragSessionError),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownProject(id) => write!(f, "no card rendered for project {id}"),
            Self::Session(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Session(err) => Some(err),
            Self::UnknownProject(_) => None,
        }
    }
}

impl From<DragSessionError> for BoardError {
    fn from(value: DragSessionError) -> Self {
        Self::Session(value)
    }
}

/// Mounted board.
pub struct Board {
    store: Rc<ProjectStore>,
    form: ProjectForm,
    active: ProjectView,
    finished: ProjectView,
}

impl Board {
    /// Mounts the form first in the host, then the active and finished views.
    pub fn mount(
        store: Rc<ProjectStore>,
        mount: Rc<dyn Mount>,
        config: &BoardConfig,
    ) -> Result<Self, MountError> {
        let host_id = config.host_id.as_str();
        let form = ProjectForm::mount(Rc::clone(&store), mount.as_ref(), host_id)?;
        let active = ProjectView::mount(
            ProjectStatus::Active,
            Rc::clone(&store),
            Rc::clone(&mount),
            host_id,
        )?;
        let finished =
            ProjectView::mount(ProjectStatus::Finished, Rc::clone(&store), mount, host_id)?;
        info!(
            "event=board_mount module=app status=ok host={} projects={}",
            host_id,
            store.len()
        );
        Ok(Self {
            store,
            form,
            active,
            finished,
        })
    }

    pub fn store(&self) -> &Rc<ProjectStore> {
        &self.store
    }

    pub fn form(&self) -> &ProjectForm {
        &self.form
    }

    pub fn view(&self, kind: ProjectStatus) -> &ProjectView {
        match kind {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }

    /// Finds the rendered card for `project_id` in either view.
    pub fn card(&self, project_id: ProjectId) -> Option<ProjectCard> {
        ProjectStatus::ALL
            .iter()
            .find_map(|kind| self.view(*kind).card(project_id))
    }

    /// Runs start, drag-over and drop for one card onto the `to` view.
    pub fn move_project(
        &self,
        session: &mut DragSession,
        project_id: ProjectId,
        to: ProjectStatus,
    ) -> Result<DropOutcome, BoardError> {
        let card = self
            .card(project_id)
            .ok_or(BoardError::UnknownProject(project_id))?;
        let target = self.view(to);
        session.start(card)?;
        session.drag_over(target)?;
        Ok(session.drop(target)?)
    }
}
