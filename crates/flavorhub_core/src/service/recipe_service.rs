//! Recipe use-case service.
//!
//! # Responsibility
//! - Provide stable recipe entry points for core callers.
//! - Delegate persistence and queries to a `RecipeStore`.
//! - Pick the recipe of the day from the store snapshot and a `Clock`.
//!
//! # Invariants
//! - Service APIs never bypass store validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::clock::Clock;
use crate::daily::select_daily;
use crate::model::recipe::{Recipe, RecipeId};
use crate::repo::recipe_repo::{RecipeStore, RepoResult};
use log::{debug, info, warn};

/// Use-case service wrapper for recipe operations.
pub struct RecipeService<S: RecipeStore, C: Clock> {
    store: S,
    clock: C,
}

impl<S: RecipeStore, C: Clock> RecipeService<S, C> {
    /// Creates a service over the provided store and date source.
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Lists every recipe in store order (by id).
    pub fn get_all_recipes(&self) -> RepoResult<Vec<Recipe>> {
        self.store.fetch_all()
    }

    /// Gets one recipe by id; `None` when it does not exist.
    pub fn get_recipe_by_id(&self, id: RecipeId) -> RepoResult<Option<Recipe>> {
        self.store.find_by_id(id)
    }

    /// Lists recipes whose difficulty level matches exactly.
    pub fn get_recipes_by_difficulty(&self, difficulty_level: &str) -> RepoResult<Vec<Recipe>> {
        self.store.find_by_difficulty_level(difficulty_level)
    }

    /// Lists recipes whose cuisine type matches exactly.
    pub fn get_recipes_by_cuisine(&self, cuisine_type: &str) -> RepoResult<Vec<Recipe>> {
        self.store.find_by_cuisine_type(cuisine_type)
    }

    /// Case-insensitive name search; a blank term returns every recipe.
    pub fn search_recipes(&self, search_term: &str) -> RepoResult<Vec<Recipe>> {
        self.store.find_by_name_containing_ignore_case(search_term)
    }

    /// Inserts or updates a recipe and returns it as stored.
    ///
    /// Returns store-level not-found or validation errors unchanged.
    pub fn save_recipe(&self, recipe: &Recipe) -> RepoResult<Recipe> {
        let saved = self.store.save(recipe)?;
        debug!(
            "event=recipe_save module=service status=ok recipe_id={} created={}",
            saved.id.unwrap_or_default(),
            recipe.id.is_none()
        );
        Ok(saved)
    }

    /// Deletes a recipe by id; missing ids surface as `RepoError::NotFound`.
    pub fn delete_recipe(&self, id: RecipeId) -> RepoResult<()> {
        self.store.delete_by_id(id)?;
        debug!("event=recipe_delete module=service status=ok recipe_id={id}");
        Ok(())
    }

    /// Returns the recipe of the day, or `None` when the store is empty.
    ///
    /// # Contract
    /// - Repeated calls on the same `Clock` date over an unchanged store
    ///   return the same recipe.
    /// - Store errors propagate; an empty store does not.
    pub fn get_daily_recipe(&self) -> RepoResult<Option<Recipe>> {
        info!("event=daily_recipe module=service status=start");
        let all_recipes = self.store.fetch_all()?;

        if all_recipes.is_empty() {
            warn!("event=daily_recipe module=service status=empty recipe_count=0");
            return Ok(None);
        }

        let today = self.clock.today();
        let daily = select_daily(&all_recipes, today).cloned();
        if let Some(recipe) = &daily {
            info!(
                "event=daily_recipe module=service status=ok date={} recipe_count={} recipe_id={} recipe_name={}",
                today,
                all_recipes.len(),
                recipe.id.unwrap_or_default(),
                recipe.name
            );
        }

        Ok(daily)
    }
}
