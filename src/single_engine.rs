use crate::{CalendarDate, SelectionEngine, SelectionPolicy, prelude::*};

/// One-click selection: every accepted click replaces the chosen day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleSelectionEngine {
    policy:   SelectionPolicy,
    selected: Option<CalendarDate>,
}

impl SelectionEngine for SingleSelectionEngine {
    type State = Option<CalendarDate>;
    type Value = Option<CalendarDate>;

    fn new(policy: SelectionPolicy) -> Self {
        Self { policy, selected: None }
    }

    fn policy(&self) -> &SelectionPolicy {
        &self.policy
    }

    fn on_day_interaction(&mut self, day: CalendarDate) -> bool {
        if !self.policy.is_selectable(day) {
            trace!(%day, "ignoring click on disabled day");
            return false;
        }
        debug!(%day, "single date selected");
        self.selected = Some(day);
        true
    }

    fn reset(&mut self, value: Option<CalendarDate>) {
        self.selected = value;
    }

    fn commit(&self) -> Option<CalendarDate> {
        self.selected
    }

    fn state(&self) -> Option<CalendarDate> {
        self.selected
    }

    fn is_selected_start(&self, day: CalendarDate) -> bool {
        self.selected == Some(day)
    }

    fn is_selected_end(&self, day: CalendarDate) -> bool {
        self.selected == Some(day)
    }

    fn is_in_selected_range(&self, day: CalendarDate) -> bool {
        self.selected == Some(day)
    }

    fn has_selection(value: &Option<CalendarDate>) -> bool {
        value.is_some()
    }

    fn primary_date(value: &Option<CalendarDate>) -> Option<CalendarDate> {
        *value
    }
}
