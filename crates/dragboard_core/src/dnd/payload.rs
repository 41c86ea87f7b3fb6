//! Typed drag payload carried over the plain-text channel.
//!
//! # Responsibility
//! - Encode a dragged project's identity into a `DataTransfer`.
//! - Validate and decode it on the receiving side before use.
//!
//! # Invariants
//! - The wire form is exactly one `text/plain` field holding the project id.
//! - No origin status travels with the payload; the receiving view decides.

use crate::dnd::transfer::{DataTransfer, DropEffect, TEXT_PLAIN};
use crate::model::project::ProjectId;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Message transferred from a drag source to a drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPayload {
    ProjectId(ProjectId),
}

/// Payload decode failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// No `text/plain` field is present.
    Missing,
    /// The text field does not hold a project id.
    Malformed(String),
}

impl Display for PayloadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => write!(f, "drag payload has no {TEXT_PLAIN} field"),
            Self::Malformed(value) => write!(f, "drag payload is not a project id: `{value}`"),
        }
    }
}

impl Error for PayloadError {}

impl DragPayload {
    /// Writes the payload and declares a move operation.
    pub fn encode(&self, transfer: &mut DataTransfer) {
        match self {
            Self::ProjectId(id) => transfer.set_data(TEXT_PLAIN, id.to_string()),
        }
        transfer.set_effect_allowed(DropEffect::Move);
    }

    /// Reads and validates the payload.
    pub fn decode(transfer: &DataTransfer) -> Result<Self, PayloadError> {
        let raw = transfer.get_data(TEXT_PLAIN).ok_or(PayloadError::Missing)?;
        let trimmed = raw.trim();
        Uuid::parse_str(trimmed)
            .map(Self::ProjectId)
            .map_err(|_| PayloadError::Malformed(trimmed.to_string()))
    }

    /// Whether the in-flight data is of the kind project views accept.
    ///
    /// Only the format is checked; the content is validated on drop.
    pub fn is_acceptable(transfer: &DataTransfer) -> bool {
        transfer
            .types()
            .first()
            .is_some_and(|format| format == TEXT_PLAIN)
    }

    pub fn project_id(&self) -> ProjectId {
        match self {
            Self::ProjectId(id) => *id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DragPayload, PayloadError};
    use crate::dnd::transfer::{DataTransfer, DropEffect, TEXT_PLAIN};
    use uuid::Uuid;

    #[test]
    fn encode_writes_plain_text_id_and_move_effect() {
        let id = Uuid::new_v4();
        let mut transfer = DataTransfer::new();
        DragPayload::ProjectId(id).encode(&mut transfer);

        assert_eq!(transfer.types(), [TEXT_PLAIN]);
        assert_eq!(transfer.get_data(TEXT_PLAIN), Some(id.to_string().as_str()));
        assert_eq!(transfer.effect_allowed(), DropEffect::Move);
        assert_eq!(DragPayload::decode(&transfer), Ok(DragPayload::ProjectId(id)));
    }

    #[test]
    fn decode_rejects_missing_and_malformed_data() {
        let mut transfer = DataTransfer::new();
        assert_eq!(DragPayload::decode(&transfer), Err(PayloadError::Missing));

        transfer.set_data(TEXT_PLAIN, "zzz");
        assert_eq!(
            DragPayload::decode(&transfer),
            Err(PayloadError::Malformed("zzz".to_string()))
        );
    }

    #[test]
    fn only_plain_text_first_is_acceptable() {
        let mut transfer = DataTransfer::new();
        assert!(!DragPayload::is_acceptable(&transfer));

        transfer.set_data("text/uri-list", "https://example.com");
        transfer.set_data(TEXT_PLAIN, "zzz");
        assert!(!DragPayload::is_acceptable(&transfer));

        let mut plain = DataTransfer::new();
        plain.set_data(TEXT_PLAIN, "zzz");
        assert!(DragPayload::is_acceptable(&plain));
    }
}
