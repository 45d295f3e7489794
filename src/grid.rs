//! Cell layouts for the picker's three views.

use chrono::Weekday;
use serde::Serialize;

use crate::{DAYS_PER_WEEK, JalaliDate, Month, ParseError, jalali_month_length};

/// One selectable day in a [`MonthGrid`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day:      u8,
    pub selected: bool,
}

/// One entry of the month list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCell {
    pub month:    Month,
    pub name:     &'static str,
    pub selected: bool,
}

/// One entry of the year list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCell {
    pub year:     i32,
    pub selected: bool,
}

/// Days of one Jalali month laid out in week rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year:           i32,
    pub month:          Month,
    /// Empty cells before day 1 in the first row
    pub leading_blanks: u8,
    pub days:           Vec<DayCell>,
}

impl MonthGrid {
    /// All cells in reading order, `None` for the leading blanks
    pub fn cells(&self) -> impl Iterator<Item = Option<DayCell>> + '_ {
        std::iter::repeat_n(None, usize::from(self.leading_blanks))
            .chain(self.days.iter().copied().map(Some))
    }

    /// Cells grouped into weeks; the last week is padded with `None`.
    pub fn weeks(&self) -> Vec<[Option<DayCell>; 7]> {
        let cells: Vec<_> = self.cells().collect();
        cells
            .chunks(usize::from(DAYS_PER_WEEK))
            .map(|chunk| std::array::from_fn(|i| chunk.get(i).copied().flatten()))
            .collect()
    }
}

/// Lays out the Jalali month `year`/`month` for a week beginning on
/// `week_start`, marking `selected` if it falls in that month.
///
/// # Errors
/// Returns `ParseError::OutOfRange` if the month has no Gregorian counterpart
/// in years 1-9999.
pub fn month_grid(
    year: i32,
    month: Month,
    selected: Option<JalaliDate>,
    week_start: Weekday,
) -> Result<MonthGrid, ParseError> {
    let first = JalaliDate::new(year, month.get(), 1)?;
    let weekday = first.to_gregorian().weekday_from_sunday();
    let start = u8::try_from(week_start.num_days_from_sunday()).unwrap_or_default();
    let leading_blanks = (weekday + DAYS_PER_WEEK - start) % DAYS_PER_WEEK;

    let days = (1..=jalali_month_length(year, month.get()))
        .map(|day| DayCell {
            day,
            selected: selected.is_some_and(|s| s.to_tuple() == (year, month.get(), day)),
        })
        .collect();

    Ok(MonthGrid {
        year,
        month,
        leading_blanks,
        days,
    })
}

/// The twelve Jalali months with their Persian names, marking `selected`.
pub fn month_list(selected: Month) -> Vec<MonthCell> {
    Month::all()
        .map(|month| MonthCell {
            month,
            name: month.persian_name(),
            selected: month == selected,
        })
        .collect()
}

/// Years `min_year..=max_year`, marking `selected`.
pub fn year_list(min_year: i32, max_year: i32, selected: i32) -> Vec<YearCell> {
    (min_year..=max_year)
        .map(|year| YearCell {
            year,
            selected: year == selected,
        })
        .collect()
}
