use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::period::Period;
use crate::models::period_type::PeriodType;
use crate::models::schedule::WeeklySchedule;
use chrono::Local;
use rusqlite::params;
use rusqlite::{Result, Row};

/// Load one day's periods in entry order.
pub fn load_day(pool: &mut DbPool, weekday: u8) -> AppResult<Vec<Period>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, name, start_time, end_time, kind FROM periods
         WHERE weekday = ?1
         ORDER BY position ASC",
    )?;

    let rows = stmt.query_map([weekday], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Load the whole stored week, day by day.
pub fn load_week(pool: &mut DbPool) -> AppResult<WeeklySchedule> {
    let mut schedule = WeeklySchedule::new();

    for weekday in 0..7u8 {
        let periods = load_day(pool, weekday)?;
        if !periods.is_empty() {
            schedule.set_day(weekday, periods);
        }
    }

    Ok(schedule)
}

pub fn map_row(row: &Row) -> Result<Period> {
    let kind_str: String = row.get("kind")?;
    let kind = PeriodType::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidPeriodType(kind_str.clone())),
        )
    })?;

    Ok(Period {
        id: row.get("id")?,
        name: row.get("name")?,
        start_time: row.get("start_time")?,
        end_time: row.get("end_time")?,
        kind,
    })
}

/// Next free numeric id for a day (highest numeric id + 1, as TEXT).
pub fn next_period_id(pool: &mut DbPool, weekday: u8) -> AppResult<String> {
    let max: i64 = pool.conn.query_row(
        "SELECT COALESCE(MAX(CAST(id AS INTEGER)), 0) FROM periods WHERE weekday = ?1",
        [weekday],
        |row| row.get(0),
    )?;

    Ok((max + 1).to_string())
}

/// Append a period at the end of a day's entry order.
pub fn insert_period(pool: &mut DbPool, weekday: u8, p: &Period) -> AppResult<()> {
    let position: i64 = pool.conn.query_row(
        "SELECT COALESCE(MAX(position), -1) + 1 FROM periods WHERE weekday = ?1",
        [weekday],
        |row| row.get(0),
    )?;

    pool.conn.execute(
        "INSERT INTO periods (weekday, id, position, name, start_time, end_time, kind, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            weekday,
            p.id,
            position,
            p.name,
            p.start_time,
            p.end_time,
            p.kind.to_db_str(),
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

pub fn delete_period(pool: &mut DbPool, weekday: u8, id: &str) -> AppResult<()> {
    let affected = pool.conn.execute(
        "DELETE FROM periods WHERE weekday = ?1 AND id = ?2",
        params![weekday, id],
    )?;

    if affected == 0 {
        return Err(AppError::PeriodNotFound(id.to_string()));
    }

    Ok(())
}

/// Delete every period of a day. Returns how many rows went away.
pub fn clear_day(pool: &mut DbPool, weekday: u8) -> AppResult<usize> {
    let affected = pool
        .conn
        .execute("DELETE FROM periods WHERE weekday = ?1", [weekday])?;

    Ok(affected)
}

/// Replace one day's timetable in a single transaction, renumbering
/// positions from zero.
pub fn replace_day(pool: &mut DbPool, weekday: u8, periods: &[Period]) -> AppResult<()> {
    let tx = pool.conn.transaction()?;

    tx.execute("DELETE FROM periods WHERE weekday = ?1", [weekday])?;

    {
        let mut stmt = tx.prepare(
            "INSERT INTO periods (weekday, id, position, name, start_time, end_time, kind, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )?;

        let now = Local::now().to_rfc3339();

        for (position, p) in periods.iter().enumerate() {
            stmt.execute(params![
                weekday,
                p.id,
                position as i64,
                p.name,
                p.start_time,
                p.end_time,
                p.kind.to_db_str(),
                now,
            ])?;
        }
    }

    tx.commit()?;
    Ok(())
}

/// Replace the whole stored week in a single transaction.
/// Either every day lands or none does.
pub fn replace_week(pool: &mut DbPool, schedule: &WeeklySchedule) -> AppResult<()> {
    let tx = pool.conn.transaction()?;

    tx.execute("DELETE FROM periods", [])?;

    {
        let mut stmt = tx.prepare(
            "INSERT INTO periods (weekday, id, position, name, start_time, end_time, kind, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )?;

        let now = Local::now().to_rfc3339();

        for (weekday, periods) in schedule.days() {
            for (position, p) in periods.iter().enumerate() {
                stmt.execute(params![
                    weekday,
                    p.id,
                    position as i64,
                    p.name,
                    p.start_time,
                    p.end_time,
                    p.kind.to_db_str(),
                    now,
                ])?;
            }
        }
    }

    tx.commit()?;
    Ok(())
}

/// Deep-copy one day's timetable onto each target day.
pub fn copy_day(pool: &mut DbPool, from: u8, to: &[u8]) -> AppResult<()> {
    let source = load_day(pool, from)?;

    for &target in to {
        if target == from {
            continue;
        }
        replace_day(pool, target, &source)?;
    }

    Ok(())
}
