//! Deterministic "recipe of the day" selection.
//!
//! # Responsibility
//! - Map a calendar date and a recipe snapshot to exactly one recipe.
//!
//! # Invariants
//! - Same snapshot (same order) and same date always select the same item.
//! - The selected item is always a member of the snapshot.
//! - Selection index is `(year * 1000 + day_of_year) mod len`, non-negative.
//!
//! Selection is positional, so the "same recipe all day" guarantee is only
//! as strong as the ordering stability of whoever produced the snapshot.
//! `RecipeStore::fetch_all` orders by id for this reason.

use chrono::{Datelike, NaiveDate};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Input errors for date-component based selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// `(year, day_of_year)` does not name a real calendar day.
    InvalidDate { year: i32, day_of_year: u32 },
}

impl Display for SelectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, day_of_year } => {
                write!(f, "day {day_of_year} is not a valid day of year {year}")
            }
        }
    }
}

impl Error for SelectionError {}

/// Computes the snapshot position selected for `today`.
///
/// Returns `None` when `len == 0`.
pub fn daily_seed(today: NaiveDate, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let stamp = i64::from(today.year()) * 1000 + i64::from(today.ordinal());
    // len fits in i64 for any slice that can exist in memory.
    let len = i64::try_from(len).ok()?;
    usize::try_from(stamp.rem_euclid(len)).ok()
}

/// Selects the recipe of the day from an ordered snapshot.
///
/// Returns `None` for an empty snapshot; this is not an error.
pub fn select_daily<T>(recipes: &[T], today: NaiveDate) -> Option<&T> {
    daily_seed(today, recipes.len()).and_then(|seed| recipes.get(seed))
}

/// Selects the recipe of the day from raw calendar components.
///
/// # Errors
/// - [`SelectionError::InvalidDate`] when `day_of_year` is outside the
///   year's range (`1..=365`, or `1..=366` in leap years). The date is
///   checked before the snapshot, so an empty snapshot does not hide it.
pub fn select_daily_for<T>(
    recipes: &[T],
    year: i32,
    day_of_year: u32,
) -> Result<Option<&T>, SelectionError> {
    let today = NaiveDate::from_yo_opt(year, day_of_year)
        .ok_or(SelectionError::InvalidDate { year, day_of_year })?;
    Ok(select_daily(recipes, today))
}
