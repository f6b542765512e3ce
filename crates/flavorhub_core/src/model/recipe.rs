//! Recipe domain record.
//!
//! # Responsibility
//! - Define the persisted shape of a recipe.
//! - Provide validation used by every store write path.
//!
//! # Invariants
//! - `id` is `None` until the store assigns one, and never changes afterwards.
//! - `name` is non-blank and at most [`MAX_NAME_CHARS`] characters.
//! - `servings`, when set, is greater than zero.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned recipe identity.
pub type RecipeId = i64;

/// Upper bound on recipe display names.
pub const MAX_NAME_CHARS: usize = 200;

/// Canonical recipe record.
///
/// `cuisine_type` and `difficulty_level` are free-form categories matched
/// exactly by store filters; they carry no meaning for daily selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// `None` for recipes that have not been saved yet.
    pub id: Option<RecipeId>,
    pub name: String,
    pub description: Option<String>,
    pub cuisine_type: Option<String>,
    pub difficulty_level: Option<String>,
    pub prep_time_minutes: Option<u32>,
    pub cook_time_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub instructions: Option<String>,
}

impl Recipe {
    /// Creates an unsaved recipe with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            cuisine_type: None,
            difficulty_level: None,
            prep_time_minutes: None,
            cook_time_minutes: None,
            servings: None,
            instructions: None,
        }
    }

    /// Creates a recipe with a caller-provided identity.
    ///
    /// Used when the id is already known, e.g. to update an existing row.
    pub fn with_id(id: RecipeId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            ..Self::new(name)
        }
    }

    /// Validates write-time invariants.
    ///
    /// # Errors
    /// - [`RecipeValidationError::EmptyName`] when `name` is blank.
    /// - [`RecipeValidationError::NameTooLong`] when `name` exceeds [`MAX_NAME_CHARS`].
    /// - [`RecipeValidationError::ZeroServings`] when `servings == Some(0)`.
    pub fn validate(&self) -> Result<(), RecipeValidationError> {
        if self.name.trim().is_empty() {
            return Err(RecipeValidationError::EmptyName);
        }

        let name_chars = self.name.chars().count();
        if name_chars > MAX_NAME_CHARS {
            return Err(RecipeValidationError::NameTooLong {
                max: MAX_NAME_CHARS,
                actual: name_chars,
            });
        }

        if self.servings == Some(0) {
            return Err(RecipeValidationError::ZeroServings);
        }

        Ok(())
    }

    /// Returns prep plus cook time when at least one of them is known.
    pub fn total_time_minutes(&self) -> Option<u32> {
        match (self.prep_time_minutes, self.cook_time_minutes) {
            (None, None) => None,
            (prep, cook) => Some(prep.unwrap_or(0).saturating_add(cook.unwrap_or(0))),
        }
    }
}

/// Write-time validation failures for [`Recipe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeValidationError {
    EmptyName,
    NameTooLong { max: usize, actual: usize },
    ZeroServings,
}

impl Display for RecipeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "recipe name cannot be empty"),
            Self::NameTooLong { max, actual } => {
                write!(f, "recipe name has {actual} characters; at most {max} allowed")
            }
            Self::ZeroServings => write!(f, "servings must be greater than zero"),
        }
    }
}

impl Error for RecipeValidationError {}
