//! Drag-and-drop protocol between project cards and project views.
//!
//! # Responsibility
//! - Carry a dragged project's identity from a card to a view.
//! - Turn a completed drop into exactly one status transition.
//!
//! # Invariants
//! - No store mutation happens unless a drop reaction fires.
//! - Nothing survives a gesture beyond what the session carries.

pub mod payload;
pub mod session;
pub mod transfer;

use crate::dnd::transfer::DragEvent;

/// Element that can start a drag gesture.
pub trait DragSource {
    fn on_drag_start(&self, event: &mut DragEvent<'_>);
    fn on_drag_end(&self, event: &mut DragEvent<'_>);
}

/// Element that can receive a drop.
pub trait DropTarget {
    /// Stable id of the target element.
    fn target_id(&self) -> String;
    /// Calls `prevent_default` on the event to accept the drop.
    fn on_drag_over(&self, event: &mut DragEvent<'_>);
    fn on_drag_leave(&self, event: &mut DragEvent<'_>);
    fn on_drop(&self, event: &mut DragEvent<'_>);
    /// Owned handle to the same target, kept by the session while the
    /// payload is over it.
    fn boxed(&self) -> Box<dyn DropTarget>;
}
