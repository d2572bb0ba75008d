use crate::ui::messages::success;
use rusqlite::{Connection, Error, OptionalExtension};
use serde_yaml::Value;
use std::fs;

const VERSION: &str = "20250612_0004_add_preferences";

/// Migration that adds the widget preference parameters (`time_format`,
/// `school_level`, `opacity`) to the YAML config, if missing, and marks
/// the migration as applied in the `log` table.
///
/// A malformed `opacity` value (anything that is not a number) is reset
/// to the default instead of being left to break deserialization.
pub fn migrate_add_preferences(conn: &Connection) -> Result<(), Error> {
    // Check if already applied
    let mut chk = conn.prepare(
        "SELECT 1 FROM log WHERE operation = 'migration_applied' AND target = ?1 LIMIT 1",
    )?;
    if chk.query_row([VERSION], |_| Ok(())).optional()?.is_some() {
        return Ok(()); // already applied
    }

    let conf_file = super::Config::config_file();

    if conf_file.exists() {
        let content = fs::read_to_string(&conf_file).map_err(|e| {
            Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(format!("Failed to read config {:?}: {}", conf_file, e)),
            )
        })?;

        if let Ok(mut yaml) = serde_yaml::from_str::<Value>(&content)
            && let Some(map) = yaml.as_mapping_mut()
        {
            let mut changed = false;

            let tf_key = Value::String("time_format".to_string());
            if !map.contains_key(&tf_key) {
                map.insert(tf_key, Value::String("24h".to_string()));
                changed = true;
            }

            let sl_key = Value::String("school_level".to_string());
            if !map.contains_key(&sl_key) {
                map.insert(sl_key, Value::String("HIGH".to_string()));
                changed = true;
            }

            let op_key = Value::String("opacity".to_string());
            if !matches!(map.get(&op_key), Some(Value::Number(_))) {
                map.insert(op_key, Value::Number(serde_yaml::Number::from(0.7)));
                changed = true;
            }

            if changed {
                // Serialize updated YAML
                let serialized = serde_yaml::to_string(&yaml).map_err(|e| {
                    Error::SqliteFailure(
                        rusqlite::ffi::Error::new(1),
                        Some(format!(
                            "Failed to serialize updated config {:?}: {}",
                            conf_file, e
                        )),
                    )
                })?;

                // Inject documentation comment right after the `school_level` line
                let mut new_content = String::new();

                for line in serialized.lines() {
                    new_content.push_str(line);
                    new_content.push('\n');

                    if line.starts_with("school_level:") {
                        new_content.push_str(
                            "# school-level parameter options:\n\
                             #   MIDDLE → 45-minute class blocks\n\
                             #   HIGH   → 50-minute class blocks\n",
                        );
                    }
                }

                fs::write(&conf_file, new_content).map_err(|e| {
                    Error::SqliteFailure(
                        rusqlite::ffi::Error::new(1),
                        Some(format!(
                            "Failed to write updated config {:?}: {}",
                            conf_file, e
                        )),
                    )
                })?;
            }
        }
    }

    // Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added widget preference parameters to config')",
        [VERSION],
    )?;

    success(format!(
        "Migration applied: {} → added widget preference parameters to config",
        VERSION
    ));

    Ok(())
}
