//! Board components: input form, project views and project cards.
//!
//! # Responsibility
//! - Render store snapshots through the mount primitive.
//! - Wire user gestures back into `ProjectStore` operations.
//!
//! # Invariants
//! - Components receive the store by handle; none looks it up globally.
//! - Components keep only disposable copies of projects.

pub mod project_card;
pub mod project_form;
pub mod project_view;
