use std::fmt;

use crate::{CalendarDate, SelectionPolicy};

/// Lifecycle shared by the single-date and range engines.
///
/// An engine owns the in-progress selection for one session. Events for
/// days the policy rejects are ignored. Nothing is ordered or validated
/// until [`commit`](SelectionEngine::commit).
pub trait SelectionEngine {
    /// What the caller receives on accept
    type Value: Copy + PartialEq + fmt::Debug;
    /// Internal state exposed for rendering
    type State: Copy + PartialEq + fmt::Debug;

    fn new(policy: SelectionPolicy) -> Self;

    fn policy(&self) -> &SelectionPolicy;

    /// Handles a day click. Returns whether the selection changed.
    fn on_day_interaction(&mut self, day: CalendarDate) -> bool;

    /// Returns whether the hover was accepted.
    fn on_hover(&mut self, _day: CalendarDate) -> bool {
        false
    }

    fn on_hover_leave(&mut self) {}

    /// Force-sets the selection, e.g. to restore a snapshot.
    fn reset(&mut self, value: Self::Value);

    /// The current selection as an ordered value.
    fn commit(&self) -> Self::Value;

    fn state(&self) -> Self::State;

    fn is_selected_start(&self, day: CalendarDate) -> bool;

    fn is_selected_end(&self, day: CalendarDate) -> bool;

    fn is_in_selected_range(&self, day: CalendarDate) -> bool;

    fn is_in_preview_range(&self, _day: CalendarDate) -> bool {
        false
    }

    /// Whether a value carries anything worth restoring on open
    fn has_selection(value: &Self::Value) -> bool;

    /// The day the calendar should open on for this value
    fn primary_date(value: &Self::Value) -> Option<CalendarDate>;
}
