use super::period::Period;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Weekday → ordered period list, keys 0=Sunday .. 6=Saturday.
/// An absent or empty entry means no school that day. Serializes as a
/// plain JSON object with string keys ("0".."6"), the backup-document
/// shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule(pub BTreeMap<u8, Vec<Period>>);

impl WeeklySchedule {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn set_day(&mut self, weekday: u8, periods: Vec<Period>) {
        self.0.insert(weekday, periods);
    }

    /// Iterate the stored days in weekday order.
    pub fn days(&self) -> impl Iterator<Item = (u8, &[Period])> {
        self.0.iter().map(|(d, v)| (*d, v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|v| v.is_empty())
    }
}
