//! Core domain logic for FlavorHub recipes.
//! This crate owns recipe persistence, queries and the recipe of the day.

pub mod clock;
pub mod daily;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use daily::{daily_seed, select_daily, select_daily_for, SelectionError};
pub use logging::{init_logging, LogLevel, LoggingError, UnknownLogLevel};
pub use model::recipe::{Recipe, RecipeId, RecipeValidationError, MAX_NAME_CHARS};
pub use repo::recipe_repo::{RecipeStore, RepoError, RepoResult, SqliteRecipeStore};
pub use service::recipe_service::RecipeService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
