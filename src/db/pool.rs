//! Thin wrapper around the SQLite connection shared by the commands.

use rusqlite::{Connection, Result};
use std::path::Path;

/// Owns the open connection to the schedule database.
pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }
}
