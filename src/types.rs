use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, PERSIAN_MONTHS,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
///
/// Both calendars number their months 1 through 12, so the same type serves
/// Gregorian and Jalali dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Farvardin in the Jalali calendar, January in the Gregorian one
    pub const FIRST: Self = Self(NonZeroU8::MIN);

    /// Esfand in the Jalali calendar, December in the Gregorian one
    pub const LAST: Self = match NonZeroU8::new(MAX_MONTH) {
        Some(month) => Self(month),
        None => Self::FIRST,
    };

    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Persian name of this month when read as a Jalali month
    pub const fn persian_name(self) -> &'static str {
        PERSIAN_MONTHS[(self.0.get() - 1) as usize]
    }

    /// The following month, or `None` after month 12
    pub fn succ(self) -> Option<Self> {
        Self::new(self.get() + 1).ok()
    }

    /// The preceding month, or `None` before month 1
    pub fn pred(self) -> Option<Self> {
        Self::new(self.get() - 1).ok()
    }

    /// All twelve months in order
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=MAX_MONTH).filter_map(|m| Self::new(m).ok())
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Gregorian helpers

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
        assert!(matches!(
            Month::new(255),
            Err(ParseError::InvalidMonth(255))
        ));
    }

    #[test]
    fn test_month_succ_pred_stop_at_year_edges() {
        let esfand = Month::new(12).unwrap();
        assert_eq!(esfand.succ(), None);
        assert_eq!(esfand.pred(), Some(Month::new(11).unwrap()));

        assert_eq!(Month::FIRST.pred(), None);
        assert_eq!(Month::FIRST.succ(), Some(Month::new(2).unwrap()));
    }

    #[test]
    fn test_month_all() {
        let months: Vec<u8> = Month::all().map(Month::get).collect();
        assert_eq!(months, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_month_persian_name() {
        assert_eq!(Month::FIRST.persian_name(), "فروردین");
        assert_eq!(Month::new(12).unwrap().persian_name(), "اسفند");
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(8).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "8");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);

        assert!(serde_json::from_str::<Month>("13").is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i32,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description,
            );
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
    }

    #[test]
    fn test_all_months_have_valid_days() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(2023, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
    }
}
