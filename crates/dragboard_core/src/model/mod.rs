//! Domain model for board projects.
//!
//! # Responsibility
//! - Define the canonical project record shared by store, views and cards.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Projects are never deleted; status is the only mutable lifecycle field.

pub mod project;
