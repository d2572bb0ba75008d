use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{load_day, load_week};
use crate::errors::{AppError, AppResult};
use crate::models::period::Period;
use crate::utils::colors::{RESET, color_for_kind, color_for_optional_field};
use crate::utils::date;
use crate::utils::formatting::bold;
use crate::utils::table::Table;
use crate::utils::time::{day_name, format_time_value};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { day, week } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        if *week {
            let schedule = load_week(&mut pool)?;

            if schedule.is_empty() {
                println!("No periods stored yet.");
                return Ok(());
            }

            for (weekday, periods) in schedule.days() {
                println!("\n=== {} ===", bold(&day_name(weekday as u32)));
                print_day(periods, cfg);
            }

            return Ok(());
        }

        let weekday = match day {
            Some(s) => {
                date::parse_weekday(s).ok_or_else(|| AppError::InvalidWeekday(s.clone()))?
            }
            None => date::today_weekday() as u8,
        };

        let periods = load_day(&mut pool, weekday)?;

        if periods.is_empty() {
            println!("No periods for {}.", day_name(weekday as u32));
            return Ok(());
        }

        println!("\n=== {} ===", bold(&day_name(weekday as u32)));
        print_day(&periods, cfg);
    }

    Ok(())
}

fn print_day(periods: &[Period], cfg: &Config) {
    let mut table = Table::new(&["ID", "Name", "Start", "End", "Length", "Kind"]);

    for p in periods {
        // broken times yield an empty, greyed-out length cell
        let length = p
            .duration_minutes()
            .map(|m| format!("{} min", m))
            .unwrap_or_default();

        table.add_row(vec![
            p.id.clone(),
            p.name.clone(),
            format_time_value(&p.start_time, cfg.time_format),
            format_time_value(&p.end_time, cfg.time_format),
            format!(
                "{}{}{}",
                color_for_optional_field(Some(length.as_str())),
                length,
                RESET
            ),
            format!(
                "{}{} {}{}",
                color_for_kind(&p.kind),
                p.kind.icon(),
                p.kind.to_db_str(),
                RESET
            ),
        ]);
    }

    println!("{}", table.render());
}
