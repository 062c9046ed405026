use crate::{CalendarDate, DateRange, SelectionEngine, SelectionPolicy, prelude::*};

/// Progress of a two-click range selection.
///
/// `Complete` holds the days in click order; they are only put in
/// chronological order when the range is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionState {
    #[default]
    Empty,
    /// Anchor chosen, waiting for the second click
    StartOnly(CalendarDate),
    Complete(CalendarDate, CalendarDate),
}

impl SelectionState {
    pub const fn start(&self) -> Option<CalendarDate> {
        match *self {
            Self::Empty => None,
            Self::StartOnly(start) | Self::Complete(start, _) => Some(start),
        }
    }

    pub const fn end(&self) -> Option<CalendarDate> {
        match *self {
            Self::Complete(_, end) => Some(end),
            Self::Empty | Self::StartOnly(_) => None,
        }
    }
}

/// Two-click interval selection with hover preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSelectionEngine {
    policy: SelectionPolicy,
    state:  SelectionState,
    hover:  Option<CalendarDate>,
}

impl RangeSelectionEngine {
    /// Hovered day, only ever set while waiting for the second click
    pub const fn hover_preview(&self) -> Option<CalendarDate> {
        self.hover
    }

    /// Ordered interval between the anchor and the hovered day
    pub fn preview_range(&self) -> Option<DateRange> {
        match (self.state, self.hover) {
            (SelectionState::StartOnly(start), Some(hover)) => Some(DateRange::normalized(start, hover)),
            _ => None,
        }
    }

    fn set_state(&mut self, state: SelectionState) {
        self.state = state;
        if !matches!(state, SelectionState::StartOnly(_)) {
            self.hover = None;
        }
    }
}

impl SelectionEngine for RangeSelectionEngine {
    type State = SelectionState;
    type Value = DateRange;

    fn new(policy: SelectionPolicy) -> Self {
        Self {
            policy,
            state: SelectionState::Empty,
            hover: None,
        }
    }

    fn policy(&self) -> &SelectionPolicy {
        &self.policy
    }

    fn on_day_interaction(&mut self, day: CalendarDate) -> bool {
        if !self.policy.is_selectable(day) {
            trace!(%day, "ignoring click on disabled day");
            return false;
        }

        let next = match self.state {
            SelectionState::Empty | SelectionState::Complete(..) => SelectionState::StartOnly(day),
            SelectionState::StartOnly(start) => SelectionState::Complete(start, day),
        };
        debug!(from = ?self.state, to = ?next, "range selection transition");
        self.set_state(next);
        true
    }

    fn on_hover(&mut self, day: CalendarDate) -> bool {
        if !matches!(self.state, SelectionState::StartOnly(_)) {
            return false;
        }
        self.hover = Some(day);
        true
    }

    fn on_hover_leave(&mut self) {
        self.hover = None;
    }

    fn reset(&mut self, value: DateRange) {
        let state = match value.dates() {
            (Some(start), Some(end)) => SelectionState::Complete(start, end),
            (Some(start), None) => SelectionState::StartOnly(start),
            (None, _) => SelectionState::Empty,
        };
        self.state = state;
        self.hover = None;
    }

    fn commit(&self) -> DateRange {
        match self.state {
            SelectionState::Empty => DateRange::empty(),
            SelectionState::StartOnly(start) => DateRange::starting_at(start),
            SelectionState::Complete(start, end) => DateRange::normalized(start, end),
        }
    }

    fn state(&self) -> SelectionState {
        self.state
    }

    fn is_selected_start(&self, day: CalendarDate) -> bool {
        self.state.start() == Some(day)
    }

    fn is_selected_end(&self, day: CalendarDate) -> bool {
        self.state.end() == Some(day)
    }

    fn is_in_selected_range(&self, day: CalendarDate) -> bool {
        match self.state {
            SelectionState::Complete(a, b) => a.min(b) <= day && day <= a.max(b),
            SelectionState::Empty | SelectionState::StartOnly(_) => false,
        }
    }

    fn is_in_preview_range(&self, day: CalendarDate) -> bool {
        self.preview_range().is_some_and(|preview| preview.contains(day))
    }

    fn has_selection(value: &DateRange) -> bool {
        !value.is_empty()
    }

    fn primary_date(value: &DateRange) -> Option<CalendarDate> {
        value.primary_date()
    }
}
