//! The date picker controller.
//!
//! [`PickerState`] holds what the user is browsing and moves only through the
//! transition methods below. [`DatePicker`] wraps it with the external
//! contract: a Gregorian ISO `value` in, an `on_change` callback out.
//!
//! ```text
//! Years --select_year--> Months --select_month--> Days --select_day--> commit
//!   ^                      |  ^                     |
//!   +------show_years------+  +-----show_months-----+
//! ```

use std::fmt;

use chrono::{Local, Weekday};
use serde::{Deserialize, Serialize};

use crate::{
    GregorianDate, JalaliDate, MAX_JALALI, MIN_JALALI, Month, MonthCell, MonthGrid, PICKER_MAX_YEAR,
    PICKER_MIN_YEAR, ParseError, YearCell, month_grid, month_list, prelude::*, year_list,
};

/// Which granularity the picker is showing
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize,
)]
pub enum View {
    #[default]
    Years,
    Months,
    Days,
}

/// Error type for picker operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PickerError {
    /// The action does not apply to the current view.
    #[error("{action} is not available in the {view} view")]
    InvalidTransition { action: &'static str, view: View },

    /// The picker is closed.
    #[error("{action} requires the picker to be open")]
    NotOpen { action: &'static str },

    /// The year is not offered by the year list.
    #[error("Year {year} is outside the picker window {min}-{max}")]
    YearOutsideWindow { year: i32, min: i32, max: i32 },

    /// Configuration failed validation.
    #[error("Invalid picker configuration: {0}")]
    InvalidConfig(String),

    /// Error building a date.
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

/// Picker settings. Defaults reproduce the stock Persian picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// First year in the year list
    pub min_year:   i32,
    /// Last year in the year list (inclusive)
    pub max_year:   i32,
    /// First column of the day grid
    pub week_start: Weekday,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            min_year:   PICKER_MIN_YEAR,
            max_year:   PICKER_MAX_YEAR,
            week_start: Weekday::Sat,
        }
    }
}

impl PickerConfig {
    /// Checks that the year window is non-empty and every year in it can be
    /// converted in full.
    ///
    /// # Errors
    /// Returns `PickerError::InvalidConfig` describing the first problem found.
    pub fn validate(&self) -> Result<(), PickerError> {
        if self.min_year > self.max_year {
            return Err(PickerError::InvalidConfig(format!(
                "min_year {} is after max_year {}",
                self.min_year, self.max_year
            )));
        }
        // The edge years are only partly representable.
        let (lowest, highest) = (MIN_JALALI.0 + 1, MAX_JALALI.0 - 1);
        if self.min_year < lowest || self.max_year > highest {
            return Err(PickerError::InvalidConfig(format!(
                "year window {}-{} exceeds {lowest}-{highest}",
                self.min_year, self.max_year
            )));
        }
        Ok(())
    }

    /// Whether `year` appears in the year list
    pub fn contains_year(&self, year: i32) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }
}

/// Source of "today", used when the picker has no value.
pub trait Clock {
    fn today(&self) -> GregorianDate;
}

/// Reads the local date from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> GregorianDate {
        // Only fails past year 9999
        GregorianDate::try_from(Local::now().date_naive()).unwrap_or(GregorianDate::MAX)
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub GregorianDate);

impl Clock for FixedClock {
    fn today(&self) -> GregorianDate {
        self.0
    }
}

/// What the user is browsing in an open picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerState {
    selected:      JalaliDate,
    display_year:  i32,
    display_month: Month,
    view:          View,
}

impl PickerState {
    /// State anchored at `selected`, showing the year list
    pub const fn new(selected: JalaliDate) -> Self {
        Self {
            selected,
            display_year: selected.year(),
            display_month: selected.month(),
            view: View::Years,
        }
    }

    pub const fn selected(&self) -> JalaliDate {
        self.selected
    }

    pub const fn display_year(&self) -> i32 {
        self.display_year
    }

    pub const fn display_month(&self) -> Month {
        self.display_month
    }

    pub const fn view(&self) -> View {
        self.view
    }

    /// Re-anchors on an externally supplied date.
    pub const fn set_selected(&mut self, selected: JalaliDate) {
        self.selected = selected;
        self.display_year = selected.year();
        self.display_month = selected.month();
    }

    /// Prepares for opening: year list, scrolled to the selected year.
    pub const fn open(&mut self) {
        self.view = View::Years;
        self.display_year = self.selected.year();
    }

    /// Drops back to the year list; the selection is untouched.
    pub const fn close(&mut self) {
        self.view = View::Years;
    }

    fn require(&self, action: &'static str, allowed: &[View]) -> Result<(), PickerError> {
        if allowed.contains(&self.view) {
            Ok(())
        } else {
            Err(PickerError::InvalidTransition {
                action,
                view: self.view,
            })
        }
    }

    /// `Years -> Months`
    ///
    /// # Errors
    /// `PickerError::InvalidTransition` outside the year list.
    pub fn select_year(&mut self, year: i32) -> Result<(), PickerError> {
        self.require("select_year", &[View::Years])?;
        self.display_year = year;
        self.view = View::Months;
        Ok(())
    }

    /// `Months -> Days`
    ///
    /// # Errors
    /// `PickerError::InvalidTransition` outside the month list.
    pub fn select_month(&mut self, month: Month) -> Result<(), PickerError> {
        self.require("select_month", &[View::Months])?;
        self.display_month = month;
        self.view = View::Days;
        Ok(())
    }

    /// `Days -> Months`, keeping the displayed year and month
    ///
    /// # Errors
    /// `PickerError::InvalidTransition` outside the day grid.
    pub fn show_months(&mut self) -> Result<(), PickerError> {
        self.require("show_months", &[View::Days])?;
        self.view = View::Months;
        Ok(())
    }

    /// `Days | Months -> Years`, keeping the displayed year and month
    ///
    /// # Errors
    /// `PickerError::InvalidTransition` from the year list itself.
    pub fn show_years(&mut self) -> Result<(), PickerError> {
        self.require("show_years", &[View::Days, View::Months])?;
        self.view = View::Years;
        Ok(())
    }

    /// Previous month in the day grid, rolling back a year before month 1.
    ///
    /// # Errors
    /// `PickerError::InvalidTransition` outside the day grid.
    pub fn prev_month(&mut self) -> Result<(), PickerError> {
        self.require("prev_month", &[View::Days])?;
        match self.display_month.pred() {
            Some(month) => self.display_month = month,
            None => {
                self.display_month = Month::LAST;
                self.display_year -= 1;
            }
        }
        Ok(())
    }

    /// Next month in the day grid, rolling forward a year after month 12.
    ///
    /// # Errors
    /// `PickerError::InvalidTransition` outside the day grid.
    pub fn next_month(&mut self) -> Result<(), PickerError> {
        self.require("next_month", &[View::Days])?;
        match self.display_month.succ() {
            Some(month) => self.display_month = month,
            None => {
                self.display_month = Month::FIRST;
                self.display_year += 1;
            }
        }
        Ok(())
    }

    /// # Errors
    /// `PickerError::InvalidTransition` outside the month list.
    pub fn prev_year(&mut self) -> Result<(), PickerError> {
        self.require("prev_year", &[View::Months])?;
        self.display_year -= 1;
        Ok(())
    }

    /// # Errors
    /// `PickerError::InvalidTransition` outside the month list.
    pub fn next_year(&mut self) -> Result<(), PickerError> {
        self.require("next_year", &[View::Months])?;
        self.display_year += 1;
        Ok(())
    }

    /// Picks `day` of the displayed month, making it the selection and
    /// returning to the year list.
    ///
    /// # Errors
    /// `PickerError::InvalidTransition` outside the day grid, or
    /// `PickerError::ParseError` if `day` is not in the displayed month.
    pub fn select_day(&mut self, day: u8) -> Result<JalaliDate, PickerError> {
        self.require("select_day", &[View::Days])?;
        let date = JalaliDate::new(self.display_year, self.display_month.get(), day)?;
        self.selected = date;
        self.view = View::Years;
        Ok(date)
    }
}

/// A Jalali date picker bound to a Gregorian `YYYY-MM-DD` value.
///
/// The committed value belongs to the owner: `on_change` receives the new
/// ISO string and the owner feeds it back through [`DatePicker::set_value`].
pub struct DatePicker<F, C = SystemClock>
where
    F: FnMut(&str),
    C: Clock,
{
    config:        PickerConfig,
    clock:         C,
    on_change:     F,
    value:         String,
    display_value: String,
    state:         PickerState,
    open:          bool,
}

impl<F> DatePicker<F>
where
    F: FnMut(&str),
{
    /// Picker with the default configuration and the system clock.
    pub fn new(value: &str, on_change: F) -> Self {
        let clock = SystemClock;
        let mut picker = Self {
            config: PickerConfig::default(),
            state: PickerState::new(clock.today().to_jalali()),
            clock,
            on_change,
            value: String::new(),
            display_value: String::new(),
            open: false,
        };
        picker.set_value(value);
        picker
    }
}

impl<F, C> DatePicker<F, C>
where
    F: FnMut(&str),
    C: Clock,
{
    /// Picker with an explicit configuration and clock.
    ///
    /// # Errors
    /// Returns `PickerError::InvalidConfig` if `config` fails validation.
    pub fn with_config(
        config: PickerConfig,
        clock: C,
        value: &str,
        on_change: F,
    ) -> Result<Self, PickerError> {
        config.validate()?;
        let mut picker = Self {
            config,
            state: PickerState::new(clock.today().to_jalali()),
            clock,
            on_change,
            value: String::new(),
            display_value: String::new(),
            open: false,
        };
        picker.set_value(value);
        Ok(picker)
    }

    /// Takes a new external value. A malformed value clears the display and
    /// leaves the selection where it was.
    pub fn set_value(&mut self, value: &str) {
        value.clone_into(&mut self.value);
        if value.trim().is_empty() {
            self.display_value.clear();
            return;
        }
        match value.parse::<GregorianDate>() {
            Ok(date) => {
                let jalali = date.to_jalali();
                self.display_value = jalali.to_string();
                self.state.set_selected(jalali);
            }
            Err(err) => {
                log::warn!("Ignoring picker value {value:?}: {err}");
                self.display_value.clear();
            }
        }
    }

    /// Re-anchors on today's date without touching the external value.
    pub fn select_today(&mut self) {
        self.state.set_selected(self.clock.today().to_jalali());
    }

    pub fn open(&mut self) {
        self.open = true;
        self.state.open();
        log::debug!("Picker opened at year {}", self.state.display_year);
    }

    /// Closes without committing; the external value is unchanged.
    pub fn close(&mut self) {
        self.open = false;
        self.state.close();
        log::debug!("Picker closed");
    }

    fn transition(
        &mut self,
        action: &'static str,
        apply: impl FnOnce(&mut PickerState) -> Result<(), PickerError>,
    ) -> Result<(), PickerError> {
        if !self.open {
            return Err(PickerError::NotOpen { action });
        }
        let before = self.state.view;
        apply(&mut self.state)?;
        log::debug!(
            "{action}: {before} -> {} at {}/{:02}",
            self.state.view,
            self.state.display_year,
            self.state.display_month.get()
        );
        Ok(())
    }

    /// # Errors
    /// `PickerError::YearOutsideWindow` for a year the list does not offer,
    /// otherwise as [`PickerState::select_year`].
    pub fn select_year(&mut self, year: i32) -> Result<(), PickerError> {
        let window = self.config.clone();
        self.transition("select_year", |s| {
            if !window.contains_year(year) {
                return Err(PickerError::YearOutsideWindow {
                    year,
                    min: window.min_year,
                    max: window.max_year,
                });
            }
            s.select_year(year)
        })
    }

    /// # Errors
    /// `PickerError::ParseError` for a month outside 1-12, otherwise as
    /// [`PickerState::select_month`].
    pub fn select_month(&mut self, month: u8) -> Result<(), PickerError> {
        let month = Month::new(month)?;
        self.transition("select_month", |s| s.select_month(month))
    }

    /// # Errors
    /// As [`PickerState::show_months`].
    pub fn show_months(&mut self) -> Result<(), PickerError> {
        self.transition("show_months", PickerState::show_months)
    }

    /// # Errors
    /// As [`PickerState::show_years`].
    pub fn show_years(&mut self) -> Result<(), PickerError> {
        self.transition("show_years", PickerState::show_years)
    }

    /// # Errors
    /// As [`PickerState::prev_month`].
    pub fn prev_month(&mut self) -> Result<(), PickerError> {
        self.transition("prev_month", PickerState::prev_month)
    }

    /// # Errors
    /// As [`PickerState::next_month`].
    pub fn next_month(&mut self) -> Result<(), PickerError> {
        self.transition("next_month", PickerState::next_month)
    }

    /// # Errors
    /// As [`PickerState::prev_year`].
    pub fn prev_year(&mut self) -> Result<(), PickerError> {
        self.transition("prev_year", PickerState::prev_year)
    }

    /// # Errors
    /// As [`PickerState::next_year`].
    pub fn next_year(&mut self) -> Result<(), PickerError> {
        self.transition("next_year", PickerState::next_year)
    }

    /// Commits `day` of the displayed month: converts it to Gregorian, hands
    /// the `YYYY-MM-DD` string to `on_change` and closes the picker.
    ///
    /// # Errors
    /// `PickerError::NotOpen`, `PickerError::InvalidTransition` outside the
    /// day grid, or `PickerError::ParseError` for a day not in the month.
    /// The callback is not invoked on error.
    pub fn select_day(&mut self, day: u8) -> Result<GregorianDate, PickerError> {
        if !self.open {
            return Err(PickerError::NotOpen {
                action: "select_day",
            });
        }
        let jalali = self.state.select_day(day)?;
        let gregorian = jalali.to_gregorian();
        let iso = gregorian.to_string();
        log::debug!("Committing {jalali} as {iso}");
        (self.on_change)(&iso);
        self.close();
        Ok(gregorian)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn view(&self) -> View {
        self.state.view
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// The external Gregorian value as last supplied
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Jalali `YYYY/MM/DD` for the input field, empty when unset
    pub fn display_value(&self) -> &str {
        &self.display_value
    }

    pub fn selected(&self) -> JalaliDate {
        self.state.selected
    }

    /// Year list for the configured window, marking the displayed year
    pub fn year_list(&self) -> Vec<YearCell> {
        year_list(
            self.config.min_year,
            self.config.max_year,
            self.state.display_year,
        )
    }

    /// Month list, marking the selected month
    pub fn month_list(&self) -> Vec<MonthCell> {
        month_list(self.state.selected.month())
    }

    /// Day grid for the displayed month, marking the selected day
    ///
    /// # Errors
    /// `PickerError::ParseError` if navigation has moved past the
    /// representable range.
    pub fn day_grid(&self) -> Result<MonthGrid, PickerError> {
        month_grid(
            self.state.display_year,
            self.state.display_month,
            Some(self.state.selected),
            self.config.week_start,
        )
        .map_err(PickerError::from)
    }
}

impl<F, C> fmt::Debug for DatePicker<F, C>
where
    F: FnMut(&str),
    C: Clock,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatePicker")
            .field("config", &self.config)
            .field("value", &self.value)
            .field("display_value", &self.display_value)
            .field("state", &self.state)
            .field("open", &self.open)
            .finish_non_exhaustive()
    }
}
