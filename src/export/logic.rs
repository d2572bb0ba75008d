// src/export/logic.rs

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_week;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{BackupDocument, default_backup_filename};
use crate::ui::messages::warning;
use crate::utils::path::resolve_cli_path;
use chrono::Local;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the stored week plus display preferences.
    ///
    /// - `format`: "csv" | "json"
    /// - `file`: output path, relative paths resolved against the
    ///   current directory; `None` falls back to a date-stamped name
    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        format: &ExportFormat,
        file: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let file = match file {
            Some(f) => f.clone(),
            None => default_backup_filename(format),
        };

        let path = resolve_cli_path(&file)?;

        ensure_writable(&path, force)?;

        let schedule = load_week(pool)?;

        if schedule.is_empty() {
            warning("No periods stored yet; exporting an empty schedule.");
        }

        let document = BackupDocument {
            version: 1,
            schedule,
            preferences: cfg.preferences(),
            exported_at: Local::now().to_rfc3339(),
        };

        match format {
            ExportFormat::Csv => export_csv(&document, &path)?,
            ExportFormat::Json => export_json(&document, &path)?,
        }

        Ok(())
    }
}
