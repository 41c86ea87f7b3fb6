//! Render surface for board components.
//!
//! Components obtain their root element through [`Mount`] and never clone
//! templates themselves.

pub mod document;
pub mod element;

pub use document::{Document, InsertPosition, Mount, MountError};
pub use element::{Element, ElementHandle};
