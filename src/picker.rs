use crate::{
    CalendarDate, ChronoCalendar, ConfigError, PickerConfig, RangeSelectionEngine, SelectionEngine, Session,
    SingleSelectionEngine, prelude::*,
};

/// The input field behind a picker: holds the committed value between sessions.
#[derive(Debug, Clone)]
pub struct DatePicker<E: SelectionEngine> {
    config: PickerConfig,
    value:  E::Value,
}

pub type RangePicker = DatePicker<RangeSelectionEngine>;
pub type SinglePicker = DatePicker<SingleSelectionEngine>;

impl<E: SelectionEngine> DatePicker<E>
where
    E::Value: Default,
{
    /// # Errors
    /// Returns `ConfigError` if the configuration is inconsistent.
    pub fn new(config: PickerConfig) -> Result<Self, ConfigError> {
        Self::with_value(config, E::Value::default())
    }
}

impl<E: SelectionEngine> DatePicker<E> {
    /// # Errors
    /// Returns `ConfigError` if the configuration is inconsistent.
    pub fn with_value(config: PickerConfig, value: E::Value) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, value })
    }

    pub const fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// The last accepted value
    pub const fn value(&self) -> &E::Value {
        &self.value
    }

    /// Opens a calendar session seeded with the held value.
    pub fn open(&self, today: CalendarDate) -> Session<E, ChronoCalendar> {
        Session::open(
            self.value,
            self.config.policy(today),
            self.config.calendar(),
            self.config.years(),
        )
    }

    /// Accepts the session and keeps its result.
    pub fn accept(&mut self, session: Session<E, ChronoCalendar>) -> E::Value {
        self.value = session.accept();
        debug!(value = ?self.value, "picker value updated");
        self.value
    }

    /// Cancels the session; the held value is left as it was.
    pub fn cancel(&self, session: Session<E, ChronoCalendar>) {
        session.cancel();
        debug!(value = ?self.value, "picker value kept");
    }
}
