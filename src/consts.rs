/// Earliest year offered by the year selector (inclusive)
pub const DEFAULT_MIN_YEAR: i32 = 1999;

/// Latest year offered by the year selector (inclusive)
pub const DEFAULT_MAX_YEAR: i32 = 2025;

/// Days in one row of the month grid
pub const DAYS_PER_WEEK: usize = 7;

/// Months per calendar year
pub const MONTHS_PER_YEAR: i32 = 12;

/// First day of month, used when normalizing the visible month
pub const FIRST_DAY_OF_MONTH: u32 = 1;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Interval separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';
/// Placeholder for an absent interval endpoint (ISO 8601-2 open interval)
pub const OPEN_ENDPOINT: &str = "..";
