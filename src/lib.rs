//! Selection core for date-picker widgets.
//!
//! The crate turns day clicks, hovers and navigation events into a committed
//! [`CalendarDate`] (single mode) or an ordered [`DateRange`] (range mode).
//! Rendering is left to the caller: a presentation layer opens a [`Session`],
//! forwards input events to it and re-reads its query surface after each one.

mod calendar;
mod config;
mod consts;
mod engine;
mod grid;
mod picker;
mod policy;
mod prelude;
mod range;
mod range_engine;
mod session;
mod single_engine;
#[cfg(test)]
mod test_utils;
mod view;

pub use calendar::{CalendarMath, ChronoCalendar, WeekStart};
pub use config::{ConfigError, PickerConfig};
pub use consts::*;
pub use engine::SelectionEngine;
pub use grid::{DayCell, MonthGrid};
pub use picker::{DatePicker, RangePicker, SinglePicker};
pub use policy::SelectionPolicy;
pub use range::{DateRange, RangeError};
pub use range_engine::{RangeSelectionEngine, SelectionState};
pub use session::{RangeSession, Session, SingleSession};
pub use single_engine::SingleSelectionEngine;
pub use view::ViewState;

use crate::prelude::*;
use chrono::{Datelike, Local, NaiveDate};
use std::str::FromStr;

/// A calendar day with no time-of-day component.
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into)]
pub struct CalendarDate(NaiveDate);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl CalendarDate {
    /// Creates a date from its components, rejecting days that do not exist
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the month or day is out of range.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Today according to the local clock
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Underlying chrono value, for [`CalendarMath`] implementations
    #[inline]
    pub const fn naive(self) -> NaiveDate {
        self.0
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        // split from the right so a signed year keeps its leading '-'
        let mut parts: Vec<&str> = trimmed.rsplitn(3, DATE_SEPARATOR).map(str::trim).collect();
        parts.reverse();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {trimmed}"
            )));
        };

        let year = year
            .parse::<i32>()
            .map_err(|_| DateError::InvalidFormat((*year).to_owned()))?;
        let month = month
            .parse::<u32>()
            .map_err(|_| DateError::InvalidFormat((*month).to_owned()))?;
        let day = day
            .parse::<u32>()
            .map_err(|_| DateError::InvalidFormat((*day).to_owned()))?;

        Self::from_ymd(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
