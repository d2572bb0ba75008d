use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::stlog;
use crate::db::pool::DbPool;
use crate::db::queries::copy_day;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::time::day_name;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Copy { from, to } = cmd {
        let source =
            date::parse_weekday(from).ok_or_else(|| AppError::InvalidWeekday(from.clone()))?;

        //
        // Default targets: school days, minus the source itself
        //
        let targets: Vec<u8> = match to {
            Some(list) => date::parse_weekday_list(list)
                .ok_or_else(|| AppError::InvalidWeekday(list.clone()))?,
            None => (1..=5).filter(|d| *d != source).collect(),
        };

        let targets: Vec<u8> = targets.into_iter().filter(|d| *d != source).collect();

        if targets.is_empty() {
            warning("No target days to copy onto.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;

        copy_day(&mut pool, source, &targets)?;

        let target_names: Vec<String> =
            targets.iter().map(|d| day_name(*d as u32)).collect();

        stlog(
            &pool.conn,
            "copy",
            &format!("day {}", source),
            &format!("Copied day {} onto {:?}", source, targets),
        )?;

        success(format!(
            "Copied {} onto: {}",
            day_name(source as u32),
            target_names.join(", ")
        ));
    }

    Ok(())
}
