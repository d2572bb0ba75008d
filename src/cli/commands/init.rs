use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;

use crate::cli::parser::{Cli, Commands};
use crate::db::initialize::init_db;
use crate::ui::messages::warning;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database (prod or test mode)
///  - all pending DB migrations
///
/// With `--force` an existing database file is deleted first.
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ PREPARA CONFIGURAZIONE
    //
    // Config::init_all crea:
    //   ~/.rschooltimer/
    //   ~/.rschooltimer/rschooltimer.conf
    // e il file del DB configurato. In test-mode il file di
    // configurazione non viene toccato.
    //

    if let Some(custom) = &cli.db {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let mut cfg = Config::load();

    // the --db override also applies here, so migrations run on the
    // database the rest of this invocation will use
    if let Some(custom) = &cli.db {
        cfg.database = custom.clone();
    }

    let db_path = cfg.database.clone();

    println!("⚙️  Initializing rSchoolTimer…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Database   : {}", &db_path);

    //
    // 2️⃣ APERTURA DB (--force riparte da un file vuoto)
    //
    if matches!(cli.command, Commands::Init { force: true }) && Path::new(&db_path).exists() {
        fs::remove_file(&db_path)?;
        warning(format!("Existing database removed: {}", &db_path));
    }

    let conn = Connection::open(&db_path)?;

    //
    // 3️⃣ INIZIALIZZAZIONE DB (tabelle + migrazioni)
    //
    init_db(&conn)?;

    // In test-mode il file di configurazione non viene toccato,
    // quindi la migrazione delle preferenze resta fuori.
    if !cli.test {
        crate::config::migrate::migrate_add_preferences(&conn)?;
    }

    println!("✅ Database initialized at {}", &db_path);

    //
    // 4️⃣ LOG INTERNO (non bloccante)
    //
    if let Err(e) = log::stlog(
        &conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 rSchoolTimer initialization completed!");
    Ok(())
}
