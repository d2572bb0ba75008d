use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Prepare the schedule database for use.
///
/// The `periods` and `log` schema lives entirely in the migration
/// engine, so opening an older database upgrades it in place.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}
