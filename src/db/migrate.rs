use crate::ui::messages::success;
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `periods` table exists.
fn periods_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='periods'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `periods` table has a `created_at` column.
fn periods_has_created_at_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('periods')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "created_at" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `periods` table.
///
/// One row per period per weekday; `position` preserves the order in
/// which periods were entered, which is also the order used to resolve
/// overlapping start times.
fn create_periods_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS periods (
            weekday     INTEGER NOT NULL CHECK(weekday BETWEEN 0 AND 6),
            id          TEXT NOT NULL,
            position    INTEGER NOT NULL,
            name        TEXT NOT NULL,
            start_time  TEXT NOT NULL,
            end_time    TEXT NOT NULL,
            kind        TEXT NOT NULL CHECK(kind IN ('CLASS','BREAK','LUNCH','OTHER')),
            PRIMARY KEY (weekday, id)
        );

        CREATE INDEX IF NOT EXISTS idx_periods_weekday_position ON periods(weekday, position);
        "#,
    )?;
    Ok(())
}

fn migrate_add_created_at_column(conn: &Connection) -> Result<(), Error> {
    let version = "20250406_0003_add_created_at";

    // 1) Verifica se già applicata
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(()); // già applicata
    }

    // 2) Esegui la migrazione (skip se la colonna esiste già)
    if !periods_has_created_at_column(conn)? {
        conn.execute(
            "ALTER TABLE periods ADD COLUMN created_at TEXT NOT NULL DEFAULT '';",
            [],
        )
        .map_err(|e| {
            Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(format!("Failed to add 'created_at' column: {}", e)),
            )
        })?;
    }

    // 3) Marca come applicata
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added created_at to periods')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'created_at' to periods table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invocata da db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create periods table if missing
    if !periods_table_exists(conn)? {
        create_periods_table(conn)?;
        success("Created periods table.");
    }

    // 3) Incremental schema migrations
    migrate_add_created_at_column(conn)?;

    Ok(())
}
