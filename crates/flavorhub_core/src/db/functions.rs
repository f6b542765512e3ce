//! Application-defined SQL functions.
//!
//! # Invariants
//! - Registered on every connection returned by `open_db*` before migrations.
//! - Store queries may rely on these names; raw `Connection::open` handles
//!   that skip bootstrap do not have them.

use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;

/// Full Unicode lowercase fold. SQLite's built-in `lower()` only folds ASCII.
pub const FOLD_CASE: &str = "fold_case";

pub(super) fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        FOLD_CASE,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let value: Option<String> = ctx.get(0)?;
            Ok(value.map(|text| text.to_lowercase()))
        },
    )
}
