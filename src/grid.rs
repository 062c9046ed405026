//! Render model for one calendar page.

use serde::Serialize;

use crate::{CalendarDate, CalendarMath, DAYS_PER_WEEK, SelectionEngine, ViewState};

/// Everything a renderer needs to draw one day button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date:              CalendarDate,
    /// False for the leading/trailing days borrowed from adjacent months
    pub in_visible_month:  bool,
    pub is_today:          bool,
    pub disabled:          bool,
    pub selected_start:    bool,
    pub selected_end:      bool,
    pub in_selected_range: bool,
    pub in_preview_range:  bool,
}

/// Whole weeks covering the visible month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    month: CalendarDate,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn build<E, C>(view: &ViewState<C>, engine: &E) -> Self
    where
        E: SelectionEngine,
        C: CalendarMath,
    {
        let calendar = view.calendar();
        let month = view.visible_month();
        let first = calendar.start_of_week(calendar.start_of_month(month));
        let last = calendar.end_of_week(calendar.end_of_month(month));
        let today = engine.policy().reference_today();

        let cells = calendar
            .days_between(first, last)
            .into_iter()
            .map(|date| DayCell {
                date,
                in_visible_month: calendar.is_same_month(date, month),
                is_today: date == today,
                disabled: engine.policy().is_disabled(date),
                selected_start: engine.is_selected_start(date),
                selected_end: engine.is_selected_end(date),
                in_selected_range: engine.is_in_selected_range(date),
                in_preview_range: engine.is_in_preview_range(date),
            })
            .collect();

        Self { month, cells }
    }

    /// First day of the month this grid was built for
    pub const fn month(&self) -> CalendarDate {
        self.month
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// Rows of the grid, one per week
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn week_count(&self) -> usize {
        self.cells.len().div_ceil(DAYS_PER_WEEK)
    }

    pub fn cell(&self, date: CalendarDate) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.date == date)
    }
}
