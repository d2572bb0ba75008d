// src/export/model.rs

use crate::export::ExportFormat;
use crate::models::preferences::AppPreferences;
use crate::models::schedule::WeeklySchedule;
use serde::{Deserialize, Serialize};

/// Backup document shape shared by export and import.
///
/// The schedule maps weekday digits ("0" = Sunday) to period arrays,
/// exactly as it round-trips through JSON.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    #[serde(default = "default_version")]
    pub version: u32,
    pub schedule: WeeklySchedule,
    pub preferences: AppPreferences,
    #[serde(default)]
    pub exported_at: String,
}

pub(crate) fn default_version() -> u32 {
    1
}

/// Struttura piatta per l'export CSV dei periodi.
#[derive(Serialize, Clone, Debug)]
pub struct PeriodRow {
    pub weekday: u8,
    pub id: String,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub kind: String,
}

pub(crate) fn schedule_to_rows(schedule: &WeeklySchedule) -> Vec<PeriodRow> {
    let mut rows = Vec::new();

    for (weekday, periods) in schedule.days() {
        for p in periods {
            rows.push(PeriodRow {
                weekday,
                id: p.id.clone(),
                name: p.name.clone(),
                start_time: p.start_time.clone(),
                end_time: p.end_time.clone(),
                kind: p.kind.to_db_str().to_string(),
            });
        }
    }

    rows
}

/// Date-stamped default backup file name in the current directory.
pub fn default_backup_filename(format: &ExportFormat) -> String {
    format!(
        "school-timer-backup-{}.{}",
        crate::utils::date::today().format("%Y-%m-%d"),
        format.as_str()
    )
}
