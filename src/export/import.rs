//! Loading and validation of backup documents.

use crate::errors::{AppError, AppResult};
use crate::export::model::BackupDocument;
use crate::models::period::Period;
use crate::models::preferences::AppPreferences;
use crate::models::schedule::WeeklySchedule;
use crate::utils::time::parse_time;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A parsed backup: always a schedule, preferences only when the
/// document carried them.
#[derive(Debug)]
pub struct ImportedBackup {
    pub schedule: WeeklySchedule,
    pub preferences: Option<AppPreferences>,
}

/// Read and validate a backup file.
///
/// Two shapes are accepted: the full backup document, and the legacy
/// bare period array, which is applied to Monday through Friday and
/// leaves preferences untouched.
pub fn load_backup(path: &Path) -> AppResult<ImportedBackup> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Import(format!("Cannot read '{}': {}", path.display(), e)))?;

    let imported = parse_backup(&content)?;
    validate_schedule(&imported.schedule)?;

    Ok(imported)
}

pub(crate) fn parse_backup(content: &str) -> AppResult<ImportedBackup> {
    if let Ok(document) = serde_json::from_str::<BackupDocument>(content) {
        return Ok(ImportedBackup {
            schedule: document.schedule,
            preferences: Some(document.preferences),
        });
    }

    // Legacy shape: a bare array describing a single day
    if let Ok(day) = serde_json::from_str::<Vec<Period>>(content) {
        let mut schedule = WeeklySchedule::new();
        for weekday in 1..=5u8 {
            schedule.set_day(weekday, day.clone());
        }

        return Ok(ImportedBackup {
            schedule,
            preferences: None,
        });
    }

    Err(AppError::Import(
        "Unrecognized backup format: expected a backup document or a period array".to_string(),
    ))
}

/// Reject documents that would corrupt the stored week.
///
/// Unlike the analyzer, which routes around malformed rows at read
/// time, the import boundary is strict: times must parse, every period
/// must end after it starts, and ids must be unique within a day.
pub(crate) fn validate_schedule(schedule: &WeeklySchedule) -> AppResult<()> {
    for (weekday, periods) in schedule.days() {
        if weekday > 6 {
            return Err(AppError::InvalidWeekday(weekday.to_string()));
        }

        let mut seen = HashSet::new();

        for p in periods {
            let start = parse_time(&p.start_time).ok_or_else(|| {
                AppError::Import(format!(
                    "Day {}: period '{}' has invalid start time '{}'",
                    weekday, p.name, p.start_time
                ))
            })?;

            let end = parse_time(&p.end_time).ok_or_else(|| {
                AppError::Import(format!(
                    "Day {}: period '{}' has invalid end time '{}'",
                    weekday, p.name, p.end_time
                ))
            })?;

            if start >= end {
                return Err(AppError::Import(format!(
                    "Day {}: period '{}' must end after it starts ({} >= {})",
                    weekday, p.name, p.start_time, p.end_time
                )));
            }

            if !seen.insert(p.id.clone()) {
                return Err(AppError::Import(format!(
                    "Day {}: duplicate period id '{}'",
                    weekday, p.id
                )));
            }
        }
    }

    Ok(())
}
