use super::period::Period;
use serde::Serialize;

/// The five terminal classifications of the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Active,
    BeforeSchool,
    AfterSchool,
    Gap,
    NoSchedule,
}

/// One analyzer verdict, recomputed from scratch every tick.
/// Serializes camelCase; absent period references become JSON null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentStatus {
    pub current_period: Option<Period>,
    pub next_period: Option<Period>,
    pub status: Status,
    pub remaining_seconds: i64,
    pub total_duration_seconds: i64,
    pub elapsed_seconds: i64,
    pub day_name: String,
}
