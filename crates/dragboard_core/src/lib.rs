//! Core logic for the Dragboard project board.
//! The store in this crate is the single source of truth for project state.

pub mod app;
pub mod config;
pub mod dnd;
pub mod dom;
pub mod logging;
pub mod model;
pub mod store;
pub mod validation;
pub mod view;

pub use app::{Board, BoardError};
pub use config::{BoardConfig, ConfigError};
pub use dnd::payload::{DragPayload, PayloadError};
pub use dnd::session::{DragPhase, DragSession, DragSessionError, DropOutcome};
pub use dnd::transfer::{DataTransfer, DragEvent, DropEffect, TEXT_PLAIN};
pub use dnd::{DragSource, DropTarget};
pub use dom::{Document, Element, ElementHandle, InsertPosition, Mount, MountError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::project::{people_label, Project, ProjectId, ProjectStatus, UnknownStatus};
pub use store::project_store::{ListenerId, ProjectSnapshot, ProjectStore};
pub use validation::{validate, FieldValue, Validatable};
pub use view::project_card::ProjectCard;
pub use view::project_form::{FormError, FormField, ProjectForm};
pub use view::project_view::{ProjectView, DROPPABLE_CLASS};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
