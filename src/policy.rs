use serde::{Deserialize, Serialize};

use crate::CalendarDate;

/// Decides which days may be picked.
///
/// Each day is judged on its own against `reference_today`; the policy never
/// looks at the current selection, so an end day before the anchor is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionPolicy {
    disable_past:    bool,
    disable_future:  bool,
    reference_today: CalendarDate,
}

impl SelectionPolicy {
    pub const fn new(disable_past: bool, disable_future: bool, reference_today: CalendarDate) -> Self {
        Self {
            disable_past,
            disable_future,
            reference_today,
        }
    }

    /// Policy that accepts every day
    pub const fn unrestricted(reference_today: CalendarDate) -> Self {
        Self::new(false, false, reference_today)
    }

    pub const fn disable_past(&self) -> bool {
        self.disable_past
    }

    pub const fn disable_future(&self) -> bool {
        self.disable_future
    }

    pub const fn reference_today(&self) -> CalendarDate {
        self.reference_today
    }

    /// Whether `date` may be picked. Today itself is always selectable.
    pub fn is_selectable(&self, date: CalendarDate) -> bool {
        if self.disable_past && date < self.reference_today {
            return false;
        }
        if self.disable_future && date > self.reference_today {
            return false;
        }
        true
    }

    #[inline]
    pub fn is_disabled(&self, date: CalendarDate) -> bool {
        !self.is_selectable(date)
    }
}
