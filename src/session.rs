use std::ops::RangeInclusive;

use crate::{
    CalendarDate, CalendarMath, ChronoCalendar, MonthGrid, RangeSelectionEngine, SelectionEngine, SelectionPolicy,
    SingleSelectionEngine, ViewState, prelude::*,
};

/// One open/select/close cycle of a picker.
///
/// A session is consumed by [`accept`](Session::accept) or
/// [`cancel`](Session::cancel), so a closed session cannot receive events.
#[derive(Debug, Clone)]
pub struct Session<E: SelectionEngine, C = ChronoCalendar> {
    engine:   E,
    view:     ViewState<C>,
    snapshot: E::Value,
    years:    RangeInclusive<i32>,
}

pub type RangeSession<C = ChronoCalendar> = Session<RangeSelectionEngine, C>;
pub type SingleSession<C = ChronoCalendar> = Session<SingleSelectionEngine, C>;

impl<E: SelectionEngine, C: CalendarMath> Session<E, C> {
    /// Opens a session on a previous selection.
    ///
    /// An empty `prior` leaves the engine in its initial state. The view opens
    /// on the month of the prior selection, else on the policy's today.
    /// `years` bounds what [`on_year_change`](Self::on_year_change) accepts.
    pub fn open(prior: E::Value, policy: SelectionPolicy, calendar: C, years: RangeInclusive<i32>) -> Self {
        let mut engine = E::new(policy);
        if E::has_selection(&prior) {
            engine.reset(prior);
        }
        let focus = E::primary_date(&prior).unwrap_or_else(|| policy.reference_today());
        let view = ViewState::new(calendar, focus);
        debug!(?prior, visible_month = %view.visible_month(), "picker session opened");

        Self {
            engine,
            view,
            snapshot: prior,
            years,
        }
    }

    pub fn on_day_interaction(&mut self, day: CalendarDate) -> bool {
        self.engine.on_day_interaction(day)
    }

    pub fn on_hover(&mut self, day: CalendarDate) -> bool {
        self.engine.on_hover(day)
    }

    pub fn on_hover_leave(&mut self) {
        self.engine.on_hover_leave();
    }

    pub fn on_previous_month(&mut self) -> bool {
        self.view.go_to_previous_month()
    }

    pub fn on_next_month(&mut self) -> bool {
        self.view.go_to_next_month()
    }

    /// Jumps to `year`, ignoring years the year selector does not offer.
    pub fn on_year_change(&mut self, year: i32) -> bool {
        if !self.years.contains(&year) {
            trace!(year, years = ?self.years, "ignoring year outside the selector range");
            return false;
        }
        self.view.go_to_year(year)
    }

    /// Commits the selection and closes the session.
    pub fn accept(self) -> E::Value {
        let value = self.engine.commit();
        debug!(?value, "picker session accepted");
        value
    }

    /// Closes the session without emitting anything.
    ///
    /// Consuming the session is the cancel: in-session clicks die with the
    /// engine, and the caller keeps the value the session was opened on.
    pub fn cancel(self) {
        debug!(discarded = ?self.engine.state(), kept = ?self.snapshot, "picker session cancelled");
    }

    pub fn current_selection_state(&self) -> E::State {
        self.engine.state()
    }

    pub const fn current_view_state(&self) -> &ViewState<C> {
        &self.view
    }

    pub fn is_date_disabled(&self, day: CalendarDate) -> bool {
        self.engine.policy().is_disabled(day)
    }

    pub fn is_date_in_preview_range(&self, day: CalendarDate) -> bool {
        self.engine.is_in_preview_range(day)
    }

    pub fn is_date_in_selected_range(&self, day: CalendarDate) -> bool {
        self.engine.is_in_selected_range(day)
    }

    /// Render model for the visible month
    pub fn month_grid(&self) -> MonthGrid {
        MonthGrid::build(&self.view, &self.engine)
    }

    /// Selection as it was when the session opened
    pub const fn snapshot(&self) -> &E::Value {
        &self.snapshot
    }

    /// Years offered by the year selector
    pub fn years(&self) -> RangeInclusive<i32> {
        self.years.clone()
    }

    pub const fn engine(&self) -> &E {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, no_past, open_policy, range};
    use crate::{DateRange, SelectionState};

    fn open_range(prior: DateRange, policy: SelectionPolicy) -> RangeSession {
        Session::open(prior, policy, ChronoCalendar::default(), 1999..=2025)
    }

    #[test]
    fn test_open_empty_starts_on_today() {
        let session = open_range(DateRange::empty(), open_policy());
        assert_eq!(session.current_selection_state(), SelectionState::Empty);
        assert_eq!(session.current_view_state().visible_month(), date(2025, 6, 1));
        assert_eq!(session.snapshot(), &DateRange::empty());
    }

    #[test]
    fn test_open_restores_prior_selection() {
        let prior = range(date(2025, 1, 5), date(2025, 1, 10));
        let session = open_range(prior, open_policy());
        assert_eq!(
            session.current_selection_state(),
            SelectionState::Complete(date(2025, 1, 5), date(2025, 1, 10))
        );
        assert_eq!(session.current_view_state().visible_month(), date(2025, 1, 1));
        assert!(session.is_date_in_selected_range(date(2025, 1, 7)));
    }

    #[test]
    fn test_open_restores_partial_selection() {
        let prior = DateRange::starting_at(date(2024, 11, 20));
        let session = open_range(prior, open_policy());
        assert_eq!(
            session.current_selection_state(),
            SelectionState::StartOnly(date(2024, 11, 20))
        );
        assert_eq!(session.current_view_state().selected_year(), 2024);
    }

    #[test]
    fn test_navigation_leaves_selection_alone() {
        let mut session = open_range(DateRange::empty(), open_policy());
        session.on_day_interaction(date(2025, 6, 3));
        assert!(session.on_next_month());
        assert!(session.on_previous_month());
        assert!(session.on_previous_month());
        assert!(session.on_year_change(2001));
        assert_eq!(session.current_view_state().visible_month(), date(2001, 5, 1));
        assert_eq!(
            session.current_selection_state(),
            SelectionState::StartOnly(date(2025, 6, 3))
        );
    }

    #[test]
    fn test_year_change_outside_selector_is_ignored() {
        let mut session = open_range(DateRange::empty(), open_policy());
        assert!(!session.on_year_change(1998));
        assert!(!session.on_year_change(2026));
        assert_eq!(session.current_view_state().visible_month(), date(2025, 6, 1));
        assert_eq!(session.years(), 1999..=2025);
    }

    #[test]
    fn test_query_surface() {
        let mut session = open_range(DateRange::empty(), no_past(date(2025, 6, 15)));
        assert!(session.is_date_disabled(date(2025, 6, 14)));
        assert!(!session.is_date_disabled(date(2025, 6, 15)));

        session.on_day_interaction(date(2025, 6, 20));
        session.on_hover(date(2025, 6, 17));
        assert!(session.is_date_in_preview_range(date(2025, 6, 18)));
        assert_eq!(session.engine().hover_preview(), Some(date(2025, 6, 17)));

        session.on_hover_leave();
        assert!(!session.is_date_in_preview_range(date(2025, 6, 18)));

        let grid = session.month_grid();
        assert_eq!(grid.month(), date(2025, 6, 1));
        assert!(grid.cell(date(2025, 6, 20)).is_some_and(|cell| cell.selected_start));
    }

    #[test]
    fn test_accept_emits_normalized_range() {
        let mut session = open_range(DateRange::empty(), open_policy());
        session.on_day_interaction(date(2025, 3, 10));
        session.on_day_interaction(date(2025, 3, 1));
        assert_eq!(session.accept(), range(date(2025, 3, 1), date(2025, 3, 10)));
    }

    #[test]
    fn test_accept_untouched_session_returns_snapshot() {
        let prior = range(date(2025, 1, 5), date(2025, 1, 10));
        let session = open_range(prior, open_policy());
        assert_eq!(session.accept(), prior);
    }

    #[test]
    fn test_cancel_then_reopen_shows_snapshot() {
        let prior = range(date(2025, 1, 5), date(2025, 1, 10));
        let mut session = open_range(prior, open_policy());
        session.on_day_interaction(date(2025, 2, 1));
        session.on_day_interaction(date(2025, 2, 3));
        assert_eq!(session.snapshot(), &prior);
        let kept = *session.snapshot();
        session.cancel();

        let reopened = open_range(kept, open_policy());
        assert_eq!(
            reopened.current_selection_state(),
            SelectionState::Complete(date(2025, 1, 5), date(2025, 1, 10))
        );
    }

    #[test]
    fn test_single_session() {
        let mut session: SingleSession =
            Session::open(Some(date(2025, 2, 14)), open_policy(), ChronoCalendar::default(), 1999..=2025);
        assert_eq!(session.current_selection_state(), Some(date(2025, 2, 14)));
        assert_eq!(session.current_view_state().visible_month(), date(2025, 2, 1));

        session.on_day_interaction(date(2025, 2, 20));
        assert_eq!(session.accept(), Some(date(2025, 2, 20)));
    }
}
