use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::template;
use crate::db::log::stlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_period, load_day, next_period_id};
use crate::errors::{AppError, AppResult};
use crate::models::period_type::PeriodType;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::{day_name, normalize_time_input};

/// Append a period to a day's timetable.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        day,
        name,
        start,
        end,
        kind,
    } = cmd
    {
        //
        // 1. Resolve the weekday (default: today)
        //
        let weekday = match day {
            Some(s) => {
                date::parse_weekday(s).ok_or_else(|| AppError::InvalidWeekday(s.clone()))?
            }
            None => date::today_weekday() as u8,
        };

        //
        // 2. Open DB and look at what the day already holds
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let existing = load_day(&mut pool, weekday)?;
        let id = next_period_id(&mut pool, weekday)?;

        //
        // 3. Derive defaults by continuing the day
        //
        let mut period = template::continue_day(&existing, cfg.school_level, &id);

        //
        // 4. Apply explicit overrides (loose time input accepted)
        //
        if let Some(n) = name {
            period.name = n.clone();
        }

        if let Some(s) = start {
            period.start_time =
                normalize_time_input(s).ok_or_else(|| AppError::InvalidTime(s.clone()))?;
        }

        if let Some(e) = end {
            period.end_time =
                normalize_time_input(e).ok_or_else(|| AppError::InvalidTime(e.clone()))?;
        }

        if let Some(k) = kind {
            period.kind = PeriodType::from_code(k).ok_or_else(|| {
                AppError::InvalidPeriodType(format!(
                    "Invalid period kind '{}'. Use class, break, lunch or other",
                    k
                ))
            })?;
        }

        //
        // 5. Persist + internal log
        //
        insert_period(&mut pool, weekday, &period)?;

        stlog(
            &pool.conn,
            "add",
            &format!("day {}", weekday),
            &format!(
                "Added period {} '{}' {} - {} [{}]",
                period.id,
                period.name,
                period.start_time,
                period.end_time,
                period.kind.to_db_str()
            ),
        )?;

        success(format!(
            "Added '{}' ({} - {}) to {}",
            period.name,
            period.start_time,
            period.end_time,
            day_name(weekday as u32)
        ));
    }

    Ok(())
}
