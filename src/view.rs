use crate::{CalendarDate, CalendarMath, ChronoCalendar, prelude::*};

/// The calendar page on screen, independent of any selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState<C = ChronoCalendar> {
    visible_month: CalendarDate,
    selected_year: i32,
    calendar:      C,
}

impl<C: CalendarMath> ViewState<C> {
    /// Opens on the month containing `date`.
    pub fn new(calendar: C, date: CalendarDate) -> Self {
        let visible_month = calendar.start_of_month(date);
        Self {
            visible_month,
            selected_year: visible_month.year(),
            calendar,
        }
    }

    /// First day of the displayed month
    pub const fn visible_month(&self) -> CalendarDate {
        self.visible_month
    }

    pub const fn selected_year(&self) -> i32 {
        self.selected_year
    }

    pub const fn calendar(&self) -> &C {
        &self.calendar
    }

    /// Whether `date` belongs to the displayed month
    pub fn shows_month_of(&self, date: CalendarDate) -> bool {
        self.calendar.is_same_month(self.visible_month, date)
    }

    pub fn go_to_previous_month(&mut self) -> bool {
        self.shift_months(-1)
    }

    pub fn go_to_next_month(&mut self) -> bool {
        self.shift_months(1)
    }

    /// Keeps the month, replaces the year.
    pub fn go_to_year(&mut self, year: i32) -> bool {
        let Some(month) = self.calendar.with_year(self.visible_month, year) else {
            trace!(year, "year outside the representable calendar");
            return false;
        };
        self.visible_month = month;
        self.selected_year = year;
        trace!(visible_month = %self.visible_month, "jumped to year");
        true
    }

    fn shift_months(&mut self, months: i32) -> bool {
        let Some(month) = self.calendar.add_months(self.visible_month, months) else {
            trace!(months, "month shift outside the representable calendar");
            return false;
        };
        self.visible_month = month;
        self.selected_year = month.year();
        trace!(visible_month = %self.visible_month, "shifted visible month");
        true
    }
}
