//! Week bucket keys for the weekly statistics.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// First day of a statistics week.
///
/// `Sunday` matches C `strftime("%U")`: week 00 holds the days before the
/// first Sunday of the year. `Monday` matches `%W`, which is what SQLite's
/// `strftime('%Y-%W', date)` produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeekStart::Sunday => "sunday",
            WeekStart::Monday => "monday",
        }
    }
}

/// Zero-based week of the year (0..=53).
pub fn week_number(date: NaiveDate, start: WeekStart) -> u32 {
    let offset = match start {
        WeekStart::Sunday => date.weekday().num_days_from_sunday(),
        WeekStart::Monday => date.weekday().num_days_from_monday(),
    };
    (date.ordinal0() + 7 - offset) / 7
}

/// `YYYY-WW` bucket key; sorts chronologically as a plain string.
pub fn week_key(date: NaiveDate, start: WeekStart) -> String {
    format!("{:04}-{:02}", date.year(), week_number(date, start))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn year_boundary_with_sunday_weeks() {
        // 2024-12-31 is a Tuesday, 2025-01-01 a Wednesday
        assert_eq!(week_key(d(2024, 12, 31), WeekStart::Sunday), "2024-52");
        assert_eq!(week_key(d(2025, 1, 1), WeekStart::Sunday), "2025-00");
    }

    #[test]
    fn year_boundary_with_monday_weeks() {
        // Same dates as SQLite strftime('%Y-%W') groups them; differs from the
        // Sunday rule (and from ISO-8601, which puts both in 2025-W01).
        assert_eq!(week_key(d(2024, 12, 31), WeekStart::Monday), "2024-53");
        assert_eq!(week_key(d(2025, 1, 1), WeekStart::Monday), "2025-00");
    }

    #[test]
    fn days_before_first_sunday_are_week_zero() {
        // 2024-01-07 is the first Sunday of 2024
        assert_eq!(week_number(d(2024, 1, 1), WeekStart::Sunday), 0);
        assert_eq!(week_number(d(2024, 1, 6), WeekStart::Sunday), 0);
        assert_eq!(week_number(d(2024, 1, 7), WeekStart::Sunday), 1);
        assert_eq!(week_number(d(2024, 1, 15), WeekStart::Sunday), 2);
    }

    #[test]
    fn year_starting_on_sunday_has_no_week_zero() {
        // 2023-01-01 is a Sunday
        assert_eq!(week_key(d(2023, 1, 1), WeekStart::Sunday), "2023-01");
        assert_eq!(week_key(d(2023, 1, 1), WeekStart::Monday), "2023-00");
    }

    #[test]
    fn matches_chrono_strftime() {
        let mut day = d(2020, 1, 1);
        while day < d(2026, 1, 1) {
            assert_eq!(
                week_key(day, WeekStart::Sunday),
                day.format("%Y-%U").to_string()
            );
            assert_eq!(
                week_key(day, WeekStart::Monday),
                day.format("%Y-%W").to_string()
            );
            day = day.succ_opt().unwrap();
        }
    }
}
