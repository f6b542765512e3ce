//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the recipe data access contract consumed by services.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Recipe::validate()` before persistence.
//! - Multi-row reads return a stable order for an unchanged record set.

pub mod recipe_repo;
