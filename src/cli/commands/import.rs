use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::log::stlog;
use crate::db::pool::DbPool;
use crate::db::queries::replace_week;
use crate::errors::AppResult;
use crate::export::import::load_backup;
use crate::ui::messages::{info, success};
use crate::utils::path::resolve_cli_path;

/// Load a backup document and replace the stored week with it.
///
/// Takes the full [`Cli`] because preference adoption honors the
/// global --test flag (no config file update in test mode).
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { input } = &cli.command {
        let path = resolve_cli_path(input)?;

        //
        // 1. Parse and validate before touching the database
        //
        let backup = load_backup(&path)?;
        let day_count = backup.schedule.days().count();

        //
        // 2. Replace the stored week transactionally
        //
        let mut pool = DbPool::new(&cfg.database)?;
        replace_week(&mut pool, &backup.schedule)?;

        //
        // 3. Adopt imported preferences (full documents only).
        //    The saved file keeps its own database path; only the
        //    preference fields change.
        //
        if let Some(prefs) = &backup.preferences
            && !cli.test
        {
            let mut updated = Config::load();
            updated.time_format = prefs.time_format;
            updated.school_level = prefs.school_level;
            updated.opacity = prefs.opacity;
            updated.save()?;

            info("Preferences updated from backup.");
        }

        stlog(
            &pool.conn,
            "import",
            &path.display().to_string(),
            &format!("Imported schedule ({} days)", day_count),
        )?;

        success(format!("Imported backup from '{}'.", path.display()));
    }

    Ok(())
}
