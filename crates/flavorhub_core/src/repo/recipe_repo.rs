//! Recipe store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD and simple attribute/text queries over `recipes`.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths call `Recipe::validate()` before SQL mutations.
//! - Read paths reject invalid persisted rows instead of masking them.
//! - Every list query is ordered by `id ASC`; daily selection indexes into
//!   `fetch_all()` by position and relies on this.

use crate::db::functions::FOLD_CASE;
use crate::db::DbError;
use crate::model::recipe::{Recipe, RecipeId, RecipeValidationError};
use rusqlite::{params, Connection, Row, ToSql};
use std::error::Error;
use std::fmt::{Display, Formatter};

const RECIPE_SELECT_SQL: &str = "SELECT
    id,
    name,
    description,
    cuisine_type,
    difficulty_level,
    prep_time_minutes,
    cook_time_minutes,
    servings,
    instructions
FROM recipes";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for recipe persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(RecipeValidationError),
    Db(DbError),
    NotFound(RecipeId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "recipe not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted recipe data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<RecipeValidationError> for RepoError {
    fn from(value: RecipeValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage contract for recipe records.
pub trait RecipeStore {
    /// Returns every recipe, ordered by id.
    fn fetch_all(&self) -> RepoResult<Vec<Recipe>>;
    fn find_by_id(&self, id: RecipeId) -> RepoResult<Option<Recipe>>;
    /// Exact, case-sensitive match on `difficulty_level`.
    fn find_by_difficulty_level(&self, difficulty_level: &str) -> RepoResult<Vec<Recipe>>;
    /// Exact, case-sensitive match on `cuisine_type`.
    fn find_by_cuisine_type(&self, cuisine_type: &str) -> RepoResult<Vec<Recipe>>;
    /// Substring match on `name`, ignoring case. An empty term matches all.
    fn find_by_name_containing_ignore_case(&self, term: &str) -> RepoResult<Vec<Recipe>>;
    /// Inserts when `id` is `None`, otherwise updates the existing row.
    ///
    /// Returns the recipe as stored, including a generated id on insert.
    fn save(&self, recipe: &Recipe) -> RepoResult<Recipe>;
    fn delete_by_id(&self, id: RecipeId) -> RepoResult<()>;
}

/// SQLite-backed recipe store.
pub struct SqliteRecipeStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRecipeStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn query_recipes(&self, filter: &str, bind: &[&dyn ToSql]) -> RepoResult<Vec<Recipe>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{RECIPE_SELECT_SQL} {filter} ORDER BY id ASC;"))?;
        let mut rows = stmt.query(bind)?;
        let mut recipes = Vec::new();

        while let Some(row) = rows.next()? {
            recipes.push(parse_recipe_row(row)?);
        }

        Ok(recipes)
    }

    fn insert(&self, recipe: &Recipe) -> RepoResult<Recipe> {
        self.conn.execute(
            "INSERT INTO recipes (
                name,
                description,
                cuisine_type,
                difficulty_level,
                prep_time_minutes,
                cook_time_minutes,
                servings,
                instructions
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                recipe.name.as_str(),
                recipe.description.as_deref(),
                recipe.cuisine_type.as_deref(),
                recipe.difficulty_level.as_deref(),
                recipe.prep_time_minutes,
                recipe.cook_time_minutes,
                recipe.servings,
                recipe.instructions.as_deref(),
            ],
        )?;

        Ok(Recipe {
            id: Some(self.conn.last_insert_rowid()),
            ..recipe.clone()
        })
    }

    fn update(&self, id: RecipeId, recipe: &Recipe) -> RepoResult<Recipe> {
        let changed = self.conn.execute(
            "UPDATE recipes
             SET
                name = ?1,
                description = ?2,
                cuisine_type = ?3,
                difficulty_level = ?4,
                prep_time_minutes = ?5,
                cook_time_minutes = ?6,
                servings = ?7,
                instructions = ?8,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?9;",
            params![
                recipe.name.as_str(),
                recipe.description.as_deref(),
                recipe.cuisine_type.as_deref(),
                recipe.difficulty_level.as_deref(),
                recipe.prep_time_minutes,
                recipe.cook_time_minutes,
                recipe.servings,
                recipe.instructions.as_deref(),
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(recipe.clone())
    }
}

impl RecipeStore for SqliteRecipeStore<'_> {
    fn fetch_all(&self) -> RepoResult<Vec<Recipe>> {
        self.query_recipes("", &[])
    }

    fn find_by_id(&self, id: RecipeId) -> RepoResult<Option<Recipe>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{RECIPE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_recipe_row(row)?));
        }

        Ok(None)
    }

    fn find_by_difficulty_level(&self, difficulty_level: &str) -> RepoResult<Vec<Recipe>> {
        self.query_recipes("WHERE difficulty_level = ?1", &[&difficulty_level])
    }

    fn find_by_cuisine_type(&self, cuisine_type: &str) -> RepoResult<Vec<Recipe>> {
        self.query_recipes("WHERE cuisine_type = ?1", &[&cuisine_type])
    }

    fn find_by_name_containing_ignore_case(&self, term: &str) -> RepoResult<Vec<Recipe>> {
        // instr() sidesteps LIKE wildcard escaping for `%` and `_` in terms.
        self.query_recipes(
            &format!("WHERE instr({FOLD_CASE}(name), {FOLD_CASE}(?1)) > 0"),
            &[&term],
        )
    }

    fn save(&self, recipe: &Recipe) -> RepoResult<Recipe> {
        recipe.validate()?;

        match recipe.id {
            None => self.insert(recipe),
            Some(id) => self.update(id, recipe),
        }
    }

    fn delete_by_id(&self, id: RecipeId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM recipes WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_recipe_row(row: &Row<'_>) -> RepoResult<Recipe> {
    let id: RecipeId = row.get("id")?;

    let recipe = Recipe {
        id: Some(id),
        name: row.get("name")?,
        description: row.get("description")?,
        cuisine_type: row.get("cuisine_type")?,
        difficulty_level: row.get("difficulty_level")?,
        prep_time_minutes: parse_unsigned(row, "prep_time_minutes", id)?,
        cook_time_minutes: parse_unsigned(row, "cook_time_minutes", id)?,
        servings: parse_unsigned(row, "servings", id)?,
        instructions: row.get("instructions")?,
    };
    recipe.validate().map_err(|err| {
        RepoError::InvalidData(format!("recipe {id} failed validation: {err}"))
    })?;
    Ok(recipe)
}

fn parse_unsigned(row: &Row<'_>, column: &str, id: RecipeId) -> RepoResult<Option<u32>> {
    match row.get::<_, Option<i64>>(column)? {
        Some(value) => u32::try_from(value).map(Some).map_err(|_| {
            RepoError::InvalidData(format!(
                "invalid {column} value `{value}` in recipes row {id}"
            ))
        }),
        None => Ok(None),
    }
}
