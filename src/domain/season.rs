//! Football season labels.

use std::fmt;

use chrono::{Datelike, NaiveDate};

/// Month (1-based) in which a new season is considered to start.
const SEASON_START_MONTH: u32 = 8;

/// A football season spanning two calendar years, e.g. `2024-2025`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Season {
    start_year: i32,
}

impl Season {
    #[must_use]
    pub const fn starting(start_year: i32) -> Self {
        Self { start_year }
    }

    /// The season in progress on `date`: August onwards belongs to the
    /// season starting that year, earlier months to the previous one.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        let year = date.year();
        if date.month() >= SEASON_START_MONTH {
            Self::starting(year)
        } else {
            Self::starting(year - 1)
        }
    }

    #[must_use]
    pub const fn start_year(&self) -> i32 {
        self.start_year
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start_year, self.start_year + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn august_starts_a_new_season() {
        assert_eq!(Season::containing(date(2024, 8, 1)).to_string(), "2024-2025");
    }

    #[test]
    fn july_belongs_to_previous_season() {
        assert_eq!(Season::containing(date(2024, 7, 31)).to_string(), "2023-2024");
    }

    #[test]
    fn winter_belongs_to_season_started_last_year() {
        assert_eq!(Season::containing(date(2025, 1, 15)).to_string(), "2024-2025");
        assert_eq!(Season::containing(date(2024, 12, 19)).start_year(), 2024);
    }
}
