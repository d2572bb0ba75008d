use super::period_type::PeriodType;
use crate::utils::time;
use serde::{Deserialize, Serialize};

/// One named, typed block of the school day.
/// Serializes camelCase with `kind` as `type`, the shape the backup
/// document uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub id: String,         // ⇔ periods.id (TEXT, unique within its weekday)
    pub name: String,       // ⇔ periods.name
    pub start_time: String, // ⇔ periods.start_time (TEXT "HH:MM")
    pub end_time: String,   // ⇔ periods.end_time (TEXT "HH:MM")
    #[serde(rename = "type")]
    pub kind: PeriodType, // ⇔ periods.kind ('CLASS'|'BREAK'|'LUNCH'|'OTHER')
}

impl Period {
    pub fn new(id: &str, name: &str, start_time: &str, end_time: &str, kind: PeriodType) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            kind,
        }
    }

    /// Start offset in minutes from midnight; `None` when the stored
    /// string does not parse (the analyzer then skips this period).
    pub fn start_minutes(&self) -> Option<i64> {
        time::time_to_minutes(&self.start_time)
    }

    /// End offset in minutes from midnight; `None` when unparseable.
    pub fn end_minutes(&self) -> Option<i64> {
        time::time_to_minutes(&self.end_time)
    }

    pub fn duration_minutes(&self) -> Option<i64> {
        Some(self.end_minutes()? - self.start_minutes()?)
    }
}
