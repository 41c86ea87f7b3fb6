//! Drag session driving one gesture at a time.
//!
//! # Responsibility
//! - Own the data transfer for the gesture in flight.
//! - Dispatch start/over/leave/drop/end reactions to sources and targets.
//!
//! # Invariants
//! - At most one gesture is in flight.
//! - A target's drop reaction fires only when that target accepted the last drag-over.
//! - A target that accepted the payload gets a drag-leave when the payload moves to
//!   another target or the gesture ends without dropping on it.
//! - Every gesture ends back in `DragPhase::Idle` with the transfer cleared.

use crate::dnd::transfer::{DataTransfer, DragEvent};
use crate::dnd::{DragSource, DropTarget};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Gesture state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    /// Payload is live, not over an accepting target.
    Dragging,
    /// Payload is over the target with this id, which accepted it.
    OverTarget(String),
}

/// How a gesture ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The target with this id received the drop.
    Dropped(String),
    /// The gesture ended without a drop reaction.
    Cancelled,
}

/// Misuse of the session API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSessionError {
    GestureInFlight,
    NoGesture,
}

impl Display for DragSessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GestureInFlight => write!(f, "a drag gesture is already in progress"),
            Self::NoGesture => write!(f, "no drag gesture is in progress"),
        }
    }
}

impl Error for DragSessionError {}

/// Native-style drag session shared by all sources and targets.
pub struct DragSession {
    phase: DragPhase,
    transfer: DataTransfer,
    source: Option<Box<dyn DragSource>>,
    target: Option<Box<dyn DropTarget>>,
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DragSession {
    pub fn new() -> Self {
        Self {
            phase: DragPhase::Idle,
            transfer: DataTransfer::new(),
            source: None,
            target: None,
        }
    }

    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    pub fn data_transfer(&self) -> &DataTransfer {
        &self.transfer
    }

    /// Begins a gesture from `source`.
    pub fn start(&mut self, source: impl DragSource + 'static) -> Result<(), DragSessionError> {
        if self.phase != DragPhase::Idle {
            return Err(DragSessionError::GestureInFlight);
        }
        self.transfer.clear();
        let mut event = DragEvent::new(&mut self.transfer);
        source.on_drag_start(&mut event);
        self.source = Some(Box::new(source));
        self.phase = DragPhase::Dragging;
        debug!("event=drag_start module=dnd status=ok");
        Ok(())
    }

    /// Moves the payload over `target`. Returns whether the target accepted it.
    pub fn drag_over(&mut self, target: &dyn DropTarget) -> Result<bool, DragSessionError> {
        self.require_gesture()?;
        let target_id = target.target_id();
        if !self.is_over(&target_id) {
            self.leave_current();
        }
        let mut event = DragEvent::new(&mut self.transfer);
        target.on_drag_over(&mut event);
        let accepted = event.default_prevented();
        if accepted {
            self.target = Some(target.boxed());
            self.phase = DragPhase::OverTarget(target_id);
        } else {
            self.leave_current();
        }
        Ok(accepted)
    }

    /// Moves the payload off `target`.
    pub fn drag_leave(&mut self, target: &dyn DropTarget) -> Result<(), DragSessionError> {
        self.require_gesture()?;
        let mut event = DragEvent::new(&mut self.transfer);
        target.on_drag_leave(&mut event);
        if self.is_over(&target.target_id()) {
            self.target = None;
            self.phase = DragPhase::Dragging;
        }
        Ok(())
    }

    /// Releases the payload over `target` and ends the gesture.
    pub fn drop(&mut self, target: &dyn DropTarget) -> Result<DropOutcome, DragSessionError> {
        self.require_gesture()?;
        let target_id = target.target_id();
        let outcome = if self.is_over(&target_id) {
            self.target = None;
            let mut event = DragEvent::new(&mut self.transfer);
            target.on_drop(&mut event);
            DropOutcome::Dropped(target_id)
        } else {
            self.leave_current();
            DropOutcome::Cancelled
        };
        self.finish(&outcome);
        Ok(outcome)
    }

    /// Abandons the gesture without any drop reaction.
    pub fn cancel(&mut self) -> Result<DropOutcome, DragSessionError> {
        self.require_gesture()?;
        self.leave_current();
        self.finish(&DropOutcome::Cancelled);
        Ok(DropOutcome::Cancelled)
    }

    fn is_over(&self, target_id: &str) -> bool {
        matches!(&self.phase, DragPhase::OverTarget(current) if current == target_id)
    }

    /// Sends drag-leave to the accepting target, if any.
    fn leave_current(&mut self) {
        if let Some(target) = self.target.take() {
            let mut event = DragEvent::new(&mut self.transfer);
            target.on_drag_leave(&mut event);
        }
        self.phase = DragPhase::Dragging;
    }

    fn require_gesture(&self) -> Result<(), DragSessionError> {
        if self.phase == DragPhase::Idle {
            Err(DragSessionError::NoGesture)
        } else {
            Ok(())
        }
    }

    fn finish(&mut self, outcome: &DropOutcome) {
        if let Some(source) = self.source.take() {
            let mut event = DragEvent::new(&mut self.transfer);
            source.on_drag_end(&mut event);
        }
        self.target = None;
        self.transfer.clear();
        self.phase = DragPhase::Idle;
        debug!(
            "event=drag_end module=dnd status=ok dropped={}",
            matches!(outcome, DropOutcome::Dropped(_))
        );
    }
}
