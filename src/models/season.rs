use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Indian cropping seasons, keyed to calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Kharif,
    Rabi,
    Zaid,
}

impl Season {
    /// Kharif: June-October. Rabi: November-March. Zaid: April-May.
    ///
    /// Months outside 1..=12 land in Rabi, the same as the boundary months
    /// on either side of the calendar.
    pub fn from_month(month: u32) -> Self {
        match month {
            6..=10 => Season::Kharif,
            4 | 5 => Season::Zaid,
            _ => Season::Rabi,
        }
    }

    pub fn for_date(date: NaiveDate) -> Self {
        Self::from_month(date.month())
    }

    pub fn current() -> Self {
        Self::for_date(Local::now().date_naive())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Kharif => "Kharif",
            Season::Rabi => "Rabi",
            Season::Zaid => "Zaid",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Season label for a calendar month.
pub fn current_season(month: u32) -> &'static str {
    Season::from_month(month).as_str()
}
