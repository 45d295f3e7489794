mod consts;
mod convert;
mod date;
mod format;
mod grid;
mod picker;
mod prelude;
mod types;

pub use consts::*;
pub use convert::{gregorian_to_jalali, is_jalali_leap_year, jalali_month_length, jalali_to_gregorian};
pub use date::{GregorianDate, JalaliDate};
pub use format::{display_value, format_persian, to_persian_digits, weekday_headers};
pub use grid::{DayCell, MonthCell, MonthGrid, YearCell, month_grid, month_list, year_list};
pub use picker::{
    Clock, DatePicker, FixedClock, PickerConfig, PickerError, PickerState, SystemClock, View,
};
pub use types::{Month, days_in_month, is_leap_year};

use crate::prelude::*;
use std::str::FromStr;

/// The calendar a [`CivilDate`] is expressed in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Calendar {
    #[display(fmt = "gregorian")]
    Gregorian,
    #[display(fmt = "jalali")]
    Jalali,
}

/// A civil date in either calendar.
/// The two variants share no representation; conversion is the only bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From)]
pub enum CivilDate {
    /// Gregorian date, shown as `YYYY-MM-DD`
    #[display(fmt = "{_0}")]
    Gregorian(GregorianDate),
    /// Jalali date, shown as `YYYY/MM/DD`
    #[display(fmt = "{_0}")]
    Jalali(JalaliDate),
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(
        fmt = "Invalid year: {} (must be {}-{})",
        "_0",
        MIN_GREGORIAN_YEAR,
        MAX_GREGORIAN_YEAR
    )]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "Date {year}/{month:02}/{day:02} has no Gregorian counterpart in years 1-9999")]
    OutOfRange { year: i32, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CivilDate {
    /// Which calendar this date is expressed in
    pub const fn calendar(&self) -> Calendar {
        match self {
            Self::Gregorian(_) => Calendar::Gregorian,
            Self::Jalali(_) => Calendar::Jalali,
        }
    }

    /// Returns the year component
    pub const fn year(&self) -> i32 {
        match self {
            Self::Gregorian(d) => d.year(),
            Self::Jalali(d) => d.year(),
        }
    }

    /// Returns the month component
    pub const fn month(&self) -> Month {
        match self {
            Self::Gregorian(d) => d.month(),
            Self::Jalali(d) => d.month(),
        }
    }

    /// Returns the day component
    pub const fn day(&self) -> u8 {
        match self {
            Self::Gregorian(d) => d.day(),
            Self::Jalali(d) => d.day(),
        }
    }

    /// The same day expressed in the other calendar.
    /// Applying this twice returns the original date.
    pub fn to_other_calendar(&self) -> Self {
        match self {
            Self::Gregorian(d) => Self::Jalali(d.to_jalali()),
            Self::Jalali(d) => Self::Gregorian(d.to_gregorian()),
        }
    }

    /// The same day in the Gregorian calendar
    pub fn to_gregorian(&self) -> GregorianDate {
        match self {
            Self::Gregorian(d) => *d,
            Self::Jalali(d) => d.to_gregorian(),
        }
    }

    /// The same day in the Jalali calendar
    pub fn to_jalali(&self) -> JalaliDate {
        match self {
            Self::Gregorian(d) => d.to_jalali(),
            Self::Jalali(d) => *d,
        }
    }
}

impl FromStr for CivilDate {
    type Err = ParseError;

    /// `YYYY-MM-DD` parses as Gregorian and `YYYY/MM/DD` as Jalali.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // A Jalali year may carry a minus sign, so the slash decides first.
        if trimmed.contains(JALALI_SEPARATOR) {
            if trimmed.trim_start_matches(DATE_SEPARATOR).contains(DATE_SEPARATOR) {
                return Err(ParseError::InvalidFormat(format!(
                    "Mixed delimiters ({DATE_SEPARATOR} and {JALALI_SEPARATOR})"
                )));
            }
            trimmed.parse().map(Self::Jalali)
        } else if trimmed.contains(DATE_SEPARATOR) {
            trimmed.parse().map(Self::Gregorian)
        } else {
            Err(ParseError::InvalidFormat(trimmed.to_owned()))
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
struct TaggedDate {
    calendar: Calendar,
    date:     String,
}

impl serde::Serialize for CivilDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        TaggedDate {
            calendar: self.calendar(),
            date:     self.to_string(),
        }
        .serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for CivilDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tagged = TaggedDate::deserialize(deserializer)?;
        match tagged.calendar {
            Calendar::Gregorian => tagged.date.parse().map(Self::Gregorian),
            Calendar::Jalali => tagged.date.parse().map(Self::Jalali),
        }
        .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gregorian() {
        let date = "2024-03-20".parse::<CivilDate>().unwrap();
        assert_eq!(date.calendar(), Calendar::Gregorian);
        assert_eq!((date.year(), date.month().get(), date.day()), (2024, 3, 20));
    }

    #[test]
    fn test_parse_jalali() {
        let date = "1403/01/01".parse::<CivilDate>().unwrap();
        assert_eq!(date.calendar(), Calendar::Jalali);
        assert_eq!((date.year(), date.month().get(), date.day()), (1403, 1, 1));

        let date = "-621/10/11".parse::<CivilDate>().unwrap();
        assert_eq!(date.year(), -621);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<CivilDate>(), Err(ParseError::EmptyInput));
        assert_eq!("   ".parse::<CivilDate>(), Err(ParseError::EmptyInput));
        assert!(matches!(
            "1403/01-01".parse::<CivilDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "20240320".parse::<CivilDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1404/12/30".parse::<CivilDate>(),
            Err(ParseError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_to_other_calendar_twice_is_identity() {
        for s in ["2024-03-20", "1900-01-01", "2100-12-31", "1403/12/30", "1350/01/01"] {
            let date = s.parse::<CivilDate>().unwrap();
            let other = date.to_other_calendar();
            assert_ne!(other.calendar(), date.calendar());
            assert_eq!(other.to_other_calendar(), date, "{s}");
        }
    }

    #[test]
    fn test_fixed_points() {
        let nowruz = "2024-03-20".parse::<CivilDate>().unwrap();
        assert_eq!(nowruz.to_jalali().to_tuple(), (1403, 1, 1));

        let date = "1400/01/01".parse::<CivilDate>().unwrap();
        assert_eq!(date.to_gregorian().to_string(), "2021-03-21");
        assert_eq!(date.to_jalali(), JalaliDate::new(1400, 1, 1).unwrap());
    }

    #[test]
    fn test_display() {
        let g = CivilDate::from(GregorianDate::new(2024, 3, 20).unwrap());
        assert_eq!(g.to_string(), "2024-03-20");
        assert_eq!(g.to_other_calendar().to_string(), "1403/01/01");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ParseError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            ParseError::InvalidDay {
                year: 1404,
                month: 12,
                day: 30
            }
            .to_string(),
            "Invalid day 30 for month 1404-12"
        );
        assert_eq!(ParseError::EmptyInput.to_string(), "Empty date string");
    }

    #[test]
    fn test_serde() {
        let date = "1403/12/30".parse::<CivilDate>().unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#"{"calendar":"jalali","date":"1403/12/30"}"#);
        assert_eq!(serde_json::from_str::<CivilDate>(&json).unwrap(), date);

        let parsed: CivilDate =
            serde_json::from_str(r#"{"calendar":"gregorian","date":"2025-03-20"}"#).unwrap();
        assert_eq!(parsed.to_other_calendar(), date);

        assert!(
            serde_json::from_str::<CivilDate>(r#"{"calendar":"jalali","date":"2025-03-20"}"#)
                .is_err()
        );
    }
}
