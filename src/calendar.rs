//! Calendar arithmetic behind a trait, so the selection core never touches a
//! date library directly.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::{CalendarDate, FIRST_DAY_OF_MONTH};

/// First column of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    const fn weekday(self) -> Weekday {
        match self {
            Self::Monday => Weekday::Mon,
            Self::Sunday => Weekday::Sun,
        }
    }
}

/// Month, week and interval computations needed by the picker.
///
/// Operations that could leave the representable calendar return `None`.
pub trait CalendarMath {
    fn start_of_month(&self, date: CalendarDate) -> CalendarDate;

    fn end_of_month(&self, date: CalendarDate) -> CalendarDate;

    fn start_of_week(&self, date: CalendarDate) -> CalendarDate;

    fn end_of_week(&self, date: CalendarDate) -> CalendarDate;

    /// Shifts by whole months, clamping the day to the target month's length.
    fn add_months(&self, date: CalendarDate, months: i32) -> Option<CalendarDate>;

    fn add_days(&self, date: CalendarDate, days: i64) -> Option<CalendarDate>;

    /// Replaces the year, keeping month and day (Feb 29 clamps to Feb 28).
    fn with_year(&self, date: CalendarDate, year: i32) -> Option<CalendarDate>;

    fn is_same_month(&self, a: CalendarDate, b: CalendarDate) -> bool {
        a.year() == b.year() && a.month() == b.month()
    }

    /// Inclusive membership test. The bounds may be given in either order.
    fn is_within_interval(&self, date: CalendarDate, a: CalendarDate, b: CalendarDate) -> bool {
        a.min(b) <= date && date <= a.max(b)
    }

    /// Every day from `start` to `end` inclusive; empty when `start > end`.
    fn days_between(&self, start: CalendarDate, end: CalendarDate) -> Vec<CalendarDate> {
        let mut days = Vec::new();
        let mut current = Some(start);
        while let Some(day) = current.filter(|day| *day <= end) {
            days.push(day);
            current = self.add_days(day, 1);
        }
        days
    }
}

/// [`CalendarMath`] on top of `chrono`'s proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChronoCalendar {
    week_start: WeekStart,
}

impl ChronoCalendar {
    pub const fn new(week_start: WeekStart) -> Self {
        Self { week_start }
    }

    pub const fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Days between the configured week start and `date`'s weekday
    fn offset_in_week(&self, date: NaiveDate) -> u64 {
        let first = self.week_start.weekday().num_days_from_monday();
        let current = date.weekday().num_days_from_monday();
        u64::from((current + 7 - first) % 7)
    }
}

impl CalendarMath for ChronoCalendar {
    fn start_of_month(&self, date: CalendarDate) -> CalendarDate {
        date.naive()
            .with_day(FIRST_DAY_OF_MONTH)
            .map_or(date, CalendarDate::from)
    }

    fn end_of_month(&self, date: CalendarDate) -> CalendarDate {
        let first = self.start_of_month(date).naive();
        first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            // no following month in the last representable year
            .or_else(|| NaiveDate::from_ymd_opt(first.year(), 12, 31))
            .map_or(date, CalendarDate::from)
    }

    fn start_of_week(&self, date: CalendarDate) -> CalendarDate {
        let naive = date.naive();
        naive
            .checked_sub_days(Days::new(self.offset_in_week(naive)))
            .map_or(date, CalendarDate::from)
    }

    fn end_of_week(&self, date: CalendarDate) -> CalendarDate {
        let naive = date.naive();
        naive
            .checked_add_days(Days::new(6 - self.offset_in_week(naive)))
            .map_or(date, CalendarDate::from)
    }

    fn add_months(&self, date: CalendarDate, months: i32) -> Option<CalendarDate> {
        let naive = date.naive();
        let shifted = if months >= 0 {
            naive.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            naive.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        shifted.map(CalendarDate::from)
    }

    fn add_days(&self, date: CalendarDate, days: i64) -> Option<CalendarDate> {
        let naive = date.naive();
        let shifted = if days >= 0 {
            naive.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            naive.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        shifted.map(CalendarDate::from)
    }

    fn with_year(&self, date: CalendarDate, year: i32) -> Option<CalendarDate> {
        let naive = date.naive();
        naive
            .with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, naive.month(), naive.day() - 1))
            .map(CalendarDate::from)
    }
}
