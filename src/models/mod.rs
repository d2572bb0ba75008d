pub mod period;
pub mod period_type;
pub mod preferences;
pub mod schedule;
pub mod status;
