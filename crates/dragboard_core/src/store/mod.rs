//! Observable project state.
//!
//! # Responsibility
//! - Own the canonical ordered project collection.
//! - Notify subscribers synchronously after each mutation.
//!
//! # Invariants
//! - Only `ProjectStore` mutates a `Project`.
//! - Subscribers only ever see immutable snapshots.

pub mod project_store;
