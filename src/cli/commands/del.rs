use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::stlog;
use crate::db::pool::DbPool;
use crate::db::queries::{clear_day, delete_period};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::date;
use crate::utils::time::day_name;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { day, id, all, yes } = cmd {
        let weekday = match day {
            Some(s) => {
                date::parse_weekday(s).ok_or_else(|| AppError::InvalidWeekday(s.clone()))?
            }
            None => date::today_weekday() as u8,
        };

        let day_label = day_name(weekday as u32);

        //
        // Confirmation prompt
        //
        let prompt = if let Some(period_id) = id {
            format!(
                "Delete period {} on {}? This action is irreversible.",
                period_id, day_label
            )
        } else if *all {
            format!(
                "Delete ALL periods on {}? This action is irreversible.",
                day_label
            )
        } else {
            return Err(AppError::Other(
                "Nothing to delete: pass --id <ID> or --all".to_string(),
            ));
        };

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        let mut pool = DbPool::new(&cfg.database)?;

        if let Some(period_id) = id {
            delete_period(&mut pool, weekday, period_id)?;

            stlog(
                &pool.conn,
                "del",
                &format!("day {}", weekday),
                &format!("Deleted period {}", period_id),
            )?;

            success(format!(
                "Period {} on {} has been deleted.",
                period_id, day_label
            ));
        } else {
            let removed = clear_day(&mut pool, weekday)?;

            stlog(
                &pool.conn,
                "del",
                &format!("day {}", weekday),
                &format!("Cleared day ({} periods)", removed),
            )?;

            success(format!(
                "All {} periods on {} have been deleted.",
                removed, day_label
            ));
        }
    }

    Ok(())
}
