//! FlavorHub command-line entry point.
//!
//! # Responsibility
//! - Expose `RecipeService` use cases as subcommands.
//! - Print results as JSON for scripting.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use flavorhub_core::db::open_db;
use flavorhub_core::{
    core_version, init_logging, Clock, FixedClock, LogLevel, Recipe, RecipeId, RecipeService,
    SqliteRecipeStore, SystemClock,
};
use log::info;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "flavorhub",
    version = core_version(),
    about = "Manage recipes and pick the recipe of the day"
)]
struct Cli {
    /// SQLite database file
    #[arg(long, env = "FLAVORHUB_DB", default_value = "flavorhub.sqlite3")]
    db: PathBuf,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, env = "FLAVORHUB_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error; defaults to debug in debug builds, info otherwise
    #[arg(long, env = "FLAVORHUB_LOG_LEVEL", requires = "log_dir")]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every recipe
    List,
    /// Show one recipe
    Get { id: RecipeId },
    /// Case-insensitive name search
    Search { term: String },
    /// Recipes of one cuisine
    ByCuisine { cuisine: String },
    /// Recipes of one difficulty level
    ByDifficulty { difficulty: String },
    /// Add a new recipe
    Add(AddArgs),
    /// Delete a recipe
    Delete { id: RecipeId },
    /// Show the recipe of the day
    Daily {
        /// Pick for this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[derive(Args)]
struct AddArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    cuisine: Option<String>,
    #[arg(long)]
    difficulty: Option<String>,
    /// Prep time in minutes
    #[arg(long)]
    prep: Option<u32>,
    /// Cook time in minutes
    #[arg(long)]
    cook: Option<u32>,
    #[arg(long)]
    servings: Option<u32>,
    #[arg(long)]
    instructions: Option<String>,
}

impl From<AddArgs> for Recipe {
    fn from(args: AddArgs) -> Self {
        Self {
            description: args.description,
            cuisine_type: args.cuisine,
            difficulty_level: args.difficulty,
            prep_time_minutes: args.prep,
            cook_time_minutes: args.cook,
            servings: args.servings,
            instructions: args.instructions,
            ..Recipe::new(args.name)
        }
    }
}

/// JSON shape printed for a recipe: the stored fields plus derived ones.
#[derive(Serialize)]
struct RecipeView<'a> {
    #[serde(flatten)]
    recipe: &'a Recipe,
    total_time_minutes: Option<u32>,
}

impl<'a> From<&'a Recipe> for RecipeView<'a> {
    fn from(recipe: &'a Recipe) -> Self {
        Self {
            recipe,
            total_time_minutes: recipe.total_time_minutes(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        init_logging(cli.log_level.unwrap_or_default(), log_dir)
            .context("failed to initialize logging")?;
    }

    let conn = open_db(&cli.db)
        .with_context(|| format!("failed to open recipe database `{}`", cli.db.display()))?;

    let pinned_clock;
    let clock: &dyn Clock = match &cli.command {
        Command::Daily { date: Some(date) } => {
            pinned_clock = FixedClock(*date);
            &pinned_clock
        }
        _ => &SystemClock,
    };

    run(
        &RecipeService::new(SqliteRecipeStore::new(&conn), clock),
        cli.command,
    )
}

type CliService<'conn, 'clock> = RecipeService<SqliteRecipeStore<'conn>, &'clock dyn Clock>;

fn run(service: &CliService<'_, '_>, command: Command) -> Result<()> {
    match command {
        Command::List => print_recipes(&service.get_all_recipes()?),
        Command::Get { id } => match service.get_recipe_by_id(id)? {
            Some(recipe) => print_json(&RecipeView::from(&recipe)),
            None => bail!("recipe {id} not found"),
        },
        Command::Search { term } => print_recipes(&service.search_recipes(&term)?),
        Command::ByCuisine { cuisine } => {
            print_recipes(&service.get_recipes_by_cuisine(&cuisine)?)
        }
        Command::ByDifficulty { difficulty } => {
            print_recipes(&service.get_recipes_by_difficulty(&difficulty)?)
        }
        Command::Add(args) => {
            let saved = service.save_recipe(&Recipe::from(args))?;
            info!(
                "event=cli_add module=cli status=ok recipe_id={}",
                saved.id.unwrap_or_default()
            );
            print_json(&RecipeView::from(&saved))
        }
        Command::Delete { id } => {
            service.delete_recipe(id)?;
            println!("deleted recipe {id}");
            Ok(())
        }
        Command::Daily { .. } => match service.get_daily_recipe()? {
            Some(recipe) => print_json(&RecipeView::from(&recipe)),
            None => {
                println!("no recipe today");
                Ok(())
            }
        },
    }
}

fn print_recipes(recipes: &[Recipe]) -> Result<()> {
    let views: Vec<RecipeView<'_>> = recipes.iter().map(RecipeView::from).collect();
    print_json(&views)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render JSON")?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{run, Cli, Command, RecipeView};
    use chrono::NaiveDate;
    use clap::{CommandFactory, Parser};
    use flavorhub_core::db::open_db_in_memory;
    use flavorhub_core::{Clock, FixedClock, LogLevel, Recipe, RecipeService, SqliteRecipeStore};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn add_args_map_onto_recipe() {
        let cli = Cli::try_parse_from([
            "flavorhub",
            "add",
            "--name",
            "Tom Yum",
            "--cuisine",
            "Thai",
            "--servings",
            "2",
        ])
        .unwrap();

        let Command::Add(args) = cli.command else {
            panic!("expected add command");
        };
        let recipe = Recipe::from(args);
        assert_eq!(recipe.id, None);
        assert_eq!(recipe.name, "Tom Yum");
        assert_eq!(recipe.cuisine_type.as_deref(), Some("Thai"));
        assert_eq!(recipe.servings, Some(2));
        assert_eq!(recipe.difficulty_level, None);
    }

    #[test]
    fn daily_accepts_iso_date() {
        let cli = Cli::try_parse_from(["flavorhub", "daily", "--date", "2024-04-09"]).unwrap();
        let Command::Daily { date: Some(date) } = cli.command else {
            panic!("expected daily command with date");
        };
        assert_eq!(date.to_string(), "2024-04-09");
    }

    #[test]
    fn log_level_is_validated_and_needs_log_dir() {
        let cli = Cli::try_parse_from([
            "flavorhub",
            "--log-dir",
            "/var/log/flavorhub",
            "--log-level",
            "WARNING",
            "list",
        ])
        .unwrap();
        assert_eq!(cli.log_level, Some(LogLevel::Warn));

        assert!(Cli::try_parse_from([
            "flavorhub",
            "--log-dir",
            "/var/log/flavorhub",
            "--log-level",
            "loud",
            "list",
        ])
        .is_err());

        let err = Cli::try_parse_from(["flavorhub", "--log-level", "info", "list"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn version_comes_from_core() {
        let version = Cli::command().get_version().map(str::to_string);
        assert_eq!(version.as_deref(), Some(flavorhub_core::core_version()));
    }

    #[test]
    fn recipe_view_adds_total_time() {
        let mut recipe = Recipe::with_id(1, "Paella");
        recipe.prep_time_minutes = Some(20);
        recipe.cook_time_minutes = Some(45);

        let value = serde_json::to_value(RecipeView::from(&recipe)).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Paella");
        assert_eq!(value["total_time_minutes"], 65);
    }

    #[test]
    fn every_command_dispatches_through_run() {
        let conn = open_db_in_memory().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 4, 9).unwrap();
        let clock = FixedClock(date);
        let service = RecipeService::new(SqliteRecipeStore::new(&conn), &clock as &dyn Clock);

        run(&service, Command::Daily { date: Some(date) }).unwrap();

        let add = Cli::try_parse_from(["flavorhub", "add", "--name", "Gumbo"]).unwrap();
        run(&service, add.command).unwrap();
        run(&service, Command::List).unwrap();
        run(&service, Command::Get { id: 1 }).unwrap();
        run(&service, Command::Daily { date: Some(date) }).unwrap();
        assert_eq!(service.get_daily_recipe().unwrap().unwrap().name, "Gumbo");

        run(&service, Command::Delete { id: 1 }).unwrap();
        assert!(run(&service, Command::Get { id: 1 }).is_err());
    }
}
