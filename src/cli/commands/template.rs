use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::template::default_schedule;
use crate::db::log::stlog;
use crate::db::pool::DbPool;
use crate::db::queries::replace_day;
use crate::errors::{AppError, AppResult};
use crate::models::preferences::SchoolLevel;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::day_name;

/// Install the stock timetable, replacing whatever the target days held.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Template {
        level,
        classes,
        days,
    } = cmd
    {
        //
        // 1. School level: explicit flag or the configured one
        //
        let level = match level {
            Some(code) => SchoolLevel::from_code(code).ok_or_else(|| {
                AppError::Config(format!(
                    "Invalid school level '{}'. Use MIDDLE or HIGH",
                    code
                ))
            })?,
            None => cfg.school_level,
        };

        //
        // 2. Target days (default: Mon-Fri)
        //
        let targets: Vec<u8> = match days {
            Some(list) => date::parse_weekday_list(list)
                .ok_or_else(|| AppError::InvalidWeekday(list.clone()))?,
            None => (1..=5).collect(),
        };

        //
        // 3. Build once, install everywhere
        //
        let periods = default_schedule(level, *classes);

        let mut pool = DbPool::new(&cfg.database)?;

        for &weekday in &targets {
            replace_day(&mut pool, weekday, &periods)?;
        }

        let target_names: Vec<String> =
            targets.iter().map(|d| day_name(*d as u32)).collect();

        stlog(
            &pool.conn,
            "template",
            &format!("{:?}", targets),
            &format!(
                "Installed {} template ({} classes) on {:?}",
                level.code(),
                classes,
                targets
            ),
        )?;

        success(format!(
            "Installed the {} template ({} periods) on: {}",
            level.code(),
            periods.len(),
            target_names.join(", ")
        ));
    }

    Ok(())
}
