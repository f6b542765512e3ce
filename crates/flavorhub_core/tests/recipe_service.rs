use chrono::NaiveDate;
use flavorhub_core::db::{open_db, open_db_in_memory};
use flavorhub_core::{
    FixedClock, Recipe, RecipeId, RecipeService, RecipeStore, RepoError, RepoResult,
    SqliteRecipeStore,
};
use rusqlite::Connection;

fn day(year: i32, ordinal: u32) -> FixedClock {
    FixedClock(NaiveDate::from_yo_opt(year, ordinal).unwrap())
}

fn seed_names(conn: &Connection, names: &[&str]) {
    let store = SqliteRecipeStore::new(conn);
    for name in names {
        store.save(&Recipe::new(*name)).unwrap();
    }
}

fn daily_name(conn: &Connection, clock: FixedClock) -> Option<String> {
    RecipeService::new(SqliteRecipeStore::new(conn), clock)
        .get_daily_recipe()
        .unwrap()
        .map(|recipe| recipe.name)
}

#[test]
fn daily_recipe_is_none_for_empty_store() {
    let conn = open_db_in_memory().unwrap();
    assert_eq!(daily_name(&conn, day(2024, 100)), None);
}

#[test]
fn daily_recipe_follows_date_seed() {
    let conn = open_db_in_memory().unwrap();
    seed_names(&conn, &["Carbonara", "Tikka Masala", "Pad Thai", "Pho"]);

    // (year * 1000 + day_of_year) % 4
    assert_eq!(daily_name(&conn, day(2024, 100)).as_deref(), Some("Carbonara"));
    assert_eq!(daily_name(&conn, day(2024, 101)).as_deref(), Some("Tikka Masala"));
    assert_eq!(daily_name(&conn, day(2024, 102)).as_deref(), Some("Pad Thai"));
    assert_eq!(daily_name(&conn, day(2024, 103)).as_deref(), Some("Pho"));
    assert_eq!(daily_name(&conn, day(2025, 100)).as_deref(), Some("Carbonara"));
}

#[test]
fn daily_recipe_is_stable_within_a_day() {
    let conn = open_db_in_memory().unwrap();
    seed_names(&conn, &["Ramen", "Paella", "Goulash"]);
    let service = RecipeService::new(SqliteRecipeStore::new(&conn), day(2026, 289));

    let first = service.get_daily_recipe().unwrap().unwrap();
    for _ in 0..5 {
        assert_eq!(service.get_daily_recipe().unwrap().unwrap(), first);
    }
    assert!(service.get_all_recipes().unwrap().contains(&first));
}

#[test]
fn daily_recipe_survives_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flavorhub.db");

    let conn = open_db(&path).unwrap();
    seed_names(&conn, &["Ramen", "Paella", "Goulash", "Moussaka", "Laksa"]);
    let before = daily_name(&conn, day(2026, 289));
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(daily_name(&conn, day(2026, 289)), before);
}

#[test]
fn single_recipe_is_selected_every_day() {
    let conn = open_db_in_memory().unwrap();
    seed_names(&conn, &["Lasagna"]);

    for ordinal in [1, 59, 60, 200, 366] {
        assert_eq!(daily_name(&conn, day(2024, ordinal)).as_deref(), Some("Lasagna"));
    }
}

#[test]
fn crud_operations_delegate_to_store() {
    let conn = open_db_in_memory().unwrap();
    let service = RecipeService::new(SqliteRecipeStore::new(&conn), day(2024, 1));

    let mut curry = Recipe::new("Green Curry");
    curry.cuisine_type = Some("Thai".to_string());
    curry.difficulty_level = Some("medium".to_string());
    let curry = service.save_recipe(&curry).unwrap();

    let mut toast = Recipe::new("French Toast");
    toast.cuisine_type = Some("French".to_string());
    toast.difficulty_level = Some("easy".to_string());
    let toast = service.save_recipe(&toast).unwrap();

    assert_eq!(service.get_all_recipes().unwrap(), vec![curry.clone(), toast.clone()]);
    assert_eq!(service.get_recipe_by_id(curry.id.unwrap()).unwrap(), Some(curry.clone()));
    assert_eq!(service.get_recipes_by_cuisine("Thai").unwrap(), vec![curry.clone()]);
    assert_eq!(service.get_recipes_by_difficulty("easy").unwrap(), vec![toast.clone()]);
    assert_eq!(service.search_recipes("toast").unwrap(), vec![toast.clone()]);

    service.delete_recipe(toast.id.unwrap()).unwrap();
    assert_eq!(service.get_all_recipes().unwrap(), vec![curry]);
    assert!(matches!(
        service.delete_recipe(toast.id.unwrap()),
        Err(RepoError::NotFound(_))
    ));
}

struct UnavailableStore;

impl RecipeStore for UnavailableStore {
    fn fetch_all(&self) -> RepoResult<Vec<Recipe>> {
        Err(RepoError::InvalidData("store offline".to_string()))
    }

    fn find_by_id(&self, id: RecipeId) -> RepoResult<Option<Recipe>> {
        Err(RepoError::NotFound(id))
    }

    fn find_by_difficulty_level(&self, _difficulty_level: &str) -> RepoResult<Vec<Recipe>> {
        self.fetch_all()
    }

    fn find_by_cuisine_type(&self, _cuisine_type: &str) -> RepoResult<Vec<Recipe>> {
        self.fetch_all()
    }

    fn find_by_name_containing_ignore_case(&self, _term: &str) -> RepoResult<Vec<Recipe>> {
        self.fetch_all()
    }

    fn save(&self, _recipe: &Recipe) -> RepoResult<Recipe> {
        Err(RepoError::InvalidData("store offline".to_string()))
    }

    fn delete_by_id(&self, id: RecipeId) -> RepoResult<()> {
        Err(RepoError::NotFound(id))
    }
}

#[test]
fn daily_recipe_propagates_store_errors() {
    let service = RecipeService::new(UnavailableStore, day(2024, 100));
    let err = service.get_daily_recipe().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message == "store offline"));
}
