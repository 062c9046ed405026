use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, ChronoCalendar, DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR, SelectionPolicy, WeekStart};

/// Picker options supplied by the host application.
///
/// Every field has a default, so a partial (or empty) document deserializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub disable_past:   bool,
    pub disable_future: bool,
    pub min_year:       i32,
    pub max_year:       i32,
    pub week_start:     WeekStart,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid year range: min_year ({min}) is after max_year ({max})")]
    InvalidYearRange { min: i32, max: i32 },
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            disable_past:   false,
            disable_future: false,
            min_year:       DEFAULT_MIN_YEAR,
            max_year:       DEFAULT_MAX_YEAR,
            week_start:     WeekStart::default(),
        }
    }
}

impl PickerConfig {
    /// # Errors
    /// Returns `ConfigError::InvalidYearRange` if `min_year > max_year`.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.min_year > self.max_year {
            return Err(ConfigError::InvalidYearRange {
                min: self.min_year,
                max: self.max_year,
            });
        }
        Ok(())
    }

    /// Selection policy for a session opened on `today`
    pub const fn policy(&self, today: CalendarDate) -> SelectionPolicy {
        SelectionPolicy::new(self.disable_past, self.disable_future, today)
    }

    /// Years offered by the year selector
    pub const fn years(&self) -> RangeInclusive<i32> {
        self.min_year..=self.max_year
    }

    pub const fn calendar(&self) -> ChronoCalendar {
        ChronoCalendar::new(self.week_start)
    }
}
