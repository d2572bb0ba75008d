use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PeriodType {
    Class, // CLASS
    Break, // BREAK
    Lunch, // LUNCH
    Other, // OTHER
}

impl PeriodType {
    pub fn code(&self) -> &'static str {
        match self {
            PeriodType::Class => "CLASS",
            PeriodType::Break => "BREAK",
            PeriodType::Lunch => "LUNCH",
            PeriodType::Other => "OTHER",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.code()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "CLASS" => Some(PeriodType::Class),
            "BREAK" => Some(PeriodType::Break),
            "LUNCH" => Some(PeriodType::Lunch),
            "OTHER" => Some(PeriodType::Other),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        PeriodType::from_db_str(&code.to_uppercase())
    }

    /// Icon shown in the status panel and the timetable listing.
    pub fn icon(&self) -> &'static str {
        match self {
            PeriodType::Class => "📖",
            PeriodType::Break => "☕",
            PeriodType::Lunch => "🍽️",
            PeriodType::Other => "🕐",
        }
    }

    pub fn is_class(&self) -> bool {
        matches!(self, PeriodType::Class)
    }
}
