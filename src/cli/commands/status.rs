use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analyzer;
use crate::db::pool::DbPool;
use crate::db::queries::load_day;
use crate::errors::{AppError, AppResult};
use crate::models::status::CurrentStatus;
use crate::ui::widget::{PANEL_LINES, render_panel};
use crate::utils::date;
use crate::utils::time::normalize_time_input;
use chrono::{Local, NaiveTime};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Parse the --at argument: strict HH:MM / HH:MM:SS first, then the
/// same loose forms the add command accepts (9, 930, 09:30).
fn parse_clock(s: &str) -> AppResult<NaiveTime> {
    let parsed = NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"));

    match parsed {
        Ok(t) => Ok(t),
        Err(_) => normalize_time_input(s)
            .and_then(|n| NaiveTime::parse_from_str(&n, "%H:%M").ok())
            .ok_or_else(|| AppError::InvalidTime(s.to_string())),
    }
}

fn print_json(status: &CurrentStatus) -> AppResult<()> {
    let json = serde_json::to_string_pretty(status)
        .map_err(|e| AppError::from(io::Error::other(format!("JSON serialization error: {e}"))))?;

    println!("{}", json);
    Ok(())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status {
        at,
        day,
        json,
        watch,
    } = cmd
    {
        let weekday = match day {
            Some(s) => {
                date::parse_weekday(s).ok_or_else(|| AppError::InvalidWeekday(s.clone()))? as u32
            }
            None => date::today_weekday(),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let periods = load_day(&mut pool, weekday as u8)?;

        //
        // Frozen clock: --at renders exactly one frame
        //
        if let Some(at_str) = at {
            let now = parse_clock(at_str)?;
            let status = analyzer::analyze_at(&periods, now, weekday);

            if *json {
                print_json(&status)?;
            } else {
                let clock = now.format("%H:%M").to_string();
                println!("{}", render_panel(&status, cfg.time_format, &clock));
            }

            return Ok(());
        }

        //
        // Live clock, redrawn in place once per second
        //
        if *watch {
            loop {
                let now = Local::now().time();
                let status = analyzer::analyze_at(&periods, now, weekday);
                let clock = now.format("%H:%M").to_string();

                println!("{}", render_panel(&status, cfg.time_format, &clock));
                io::stdout().flush()?;

                thread::sleep(Duration::from_secs(1));

                // move back to the top of the frame and erase it
                print!("\x1b[{}A\x1b[J", PANEL_LINES);
            }
        }

        let now = Local::now().time();
        let status = analyzer::analyze_at(&periods, now, weekday);

        if *json {
            print_json(&status)?;
        } else {
            let clock = now.format("%H:%M").to_string();
            println!("{}", render_panel(&status, cfg.time_format, &clock));
        }
    }

    Ok(())
}
