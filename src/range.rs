use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DateError, OPEN_ENDPOINT, RANGE_SEPARATOR};

/// A committed date interval (inclusive on both ends).
///
/// Either endpoint may be absent while a selection is only half made. When
/// both are present the start is never after the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateRange {
    start: Option<CalendarDate>,
    end:   Option<CalendarDate>,
}

/// Error type for date range construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: CalendarDate, end: CalendarDate },

    /// Error parsing an endpoint.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    /// Range with neither endpoint chosen
    pub const fn empty() -> Self {
        Self { start: None, end: None }
    }

    /// Range with only its anchor chosen
    pub const fn starting_at(start: CalendarDate) -> Self {
        Self {
            start: Some(start),
            end:   None,
        }
    }

    /// Creates a range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if both endpoints are present and start > end.
    pub fn new(start: Option<CalendarDate>, end: Option<CalendarDate>) -> Result<Self, RangeError> {
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(RangeError::InvalidRange { start, end });
            }
        }
        Ok(Self { start, end })
    }

    /// Builds a complete range from two days picked in either order.
    pub fn normalized(a: CalendarDate, b: CalendarDate) -> Self {
        Self {
            start: Some(a.min(b)),
            end:   Some(a.max(b)),
        }
    }

    pub const fn start(&self) -> Option<CalendarDate> {
        self.start
    }

    pub const fn end(&self) -> Option<CalendarDate> {
        self.end
    }

    /// Returns both endpoints as a tuple
    pub const fn dates(&self) -> (Option<CalendarDate>, Option<CalendarDate>) {
        (self.start, self.end)
    }

    /// True when neither endpoint is set
    pub const fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// True when both endpoints are set
    pub const fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// The date a calendar should open on: the start, else the end.
    pub fn primary_date(&self) -> Option<CalendarDate> {
        self.start.or(self.end)
    }

    /// Checks whether `date` falls inside a complete range.
    /// Half-open ranges contain nothing.
    pub fn contains(&self, date: CalendarDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    }
}

fn parse_endpoint(part: &str) -> Result<Option<CalendarDate>, RangeError> {
    if part == OPEN_ENDPOINT {
        return Ok(None);
    }
    Ok(Some(part.parse::<CalendarDate>()?))
}

struct Endpoint(Option<CalendarDate>);

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{date}"),
            None => f.write_str(OPEN_ENDPOINT),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{RANGE_SEPARATOR}{}", Endpoint(self.start), Endpoint(self.end))
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // ISO 8601 extended format: use RANGE_SEPARATOR to separate start/end
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match trimmed.split_once(RANGE_SEPARATOR) {
            None => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            Some((_, rest)) if rest.contains(RANGE_SEPARATOR) => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
            Some((start_str, end_str)) => {
                let start = parse_endpoint(start_str.trim())?;
                let end = parse_endpoint(end_str.trim())?;

                Self::new(start, end)
            },
        }
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
