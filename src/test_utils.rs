//! Shared constructors for unit tests.

#![allow(clippy::expect_used)]

use crate::{CalendarDate, DateRange, SelectionPolicy};

pub fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::from_ymd(year, month, day).expect("test date must be valid")
}

pub fn range(start: CalendarDate, end: CalendarDate) -> DateRange {
    DateRange::new(Some(start), Some(end)).expect("test range must be ordered")
}

/// Policy with both restrictions off, anchored on an arbitrary "today"
pub fn open_policy() -> SelectionPolicy {
    SelectionPolicy::new(false, false, date(2025, 6, 15))
}

pub fn no_past(today: CalendarDate) -> SelectionPolicy {
    SelectionPolicy::new(true, false, today)
}

pub fn no_future(today: CalendarDate) -> SelectionPolicy {
    SelectionPolicy::new(false, true, today)
}
