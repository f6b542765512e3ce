//! Recipe domain model.
//!
//! # Responsibility
//! - Define the canonical recipe record shared by store, service and CLI.
//!
//! # Invariants
//! - Every persisted recipe is identified by a stable `RecipeId`.
//! - Deletion is a hard delete owned by the store; the model has no tombstone.

pub mod recipe;
