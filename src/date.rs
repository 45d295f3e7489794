use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::{
    DATE_SEPARATOR, JALALI_SEPARATOR, MAX_GREGORIAN_YEAR, MAX_JALALI, MIN_DAY,
    MIN_GREGORIAN_YEAR, MIN_JALALI, ParseError,
    convert::{gregorian_to_jalali, jalali_month_length, jalali_to_gregorian},
    prelude::*,
    types::{Month, days_in_month},
};

/// A validated date in the Gregorian calendar, years `1..=9999`.
///
/// Displays and parses as ISO 8601 `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, "month.get()", day)]
pub struct GregorianDate {
    year:  i32,
    month: Month,
    day:   u8,
}

/// A validated date in the Jalali (Solar Hijri) calendar.
///
/// Displays and parses as `YYYY/MM/DD`; the year is not padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}/{:02}/{:02}", year, "month.get()", day)]
pub struct JalaliDate {
    year:  i32,
    month: Month,
    day:   u8,
}

impl GregorianDate {
    /// The latest representable date, 9999-12-31
    pub const MAX: Self = Self {
        year:  MAX_GREGORIAN_YEAR,
        month: Month::LAST,
        day:   31,
    };

    /// Creates a new Gregorian date, validating each component
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear`, `InvalidMonth` or `InvalidDay` for
    /// the first component out of range.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        if !(MIN_GREGORIAN_YEAR..=MAX_GREGORIAN_YEAR).contains(&year) {
            return Err(ParseError::InvalidYear(year));
        }
        let month_typed = Month::new(month)?;
        if day < MIN_DAY || day > days_in_month(year, month) {
            return Err(ParseError::InvalidDay { year, month, day });
        }
        Ok(Self {
            year,
            month: month_typed,
            day,
        })
    }

    /// Returns the year
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month
    #[inline]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns the day of the month
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns `(year, month, day)`
    pub const fn to_tuple(&self) -> (i32, u8, u8) {
        (self.year, self.month.get(), self.day)
    }

    /// Converts to the Jalali calendar. Every Gregorian date in range has a
    /// Jalali counterpart, so this cannot fail.
    pub fn to_jalali(&self) -> JalaliDate {
        let (year, month, day) = gregorian_to_jalali(self.year, self.month.get(), self.day);
        JalaliDate::from_converted(year, month, day)
    }

    /// Day of week counted from Sunday (Sunday = 0 ... Saturday = 6)
    pub fn weekday_from_sunday(&self) -> u8 {
        // `NaiveDate` covers far more than years 1..=9999
        let weekday = NaiveDate::from(*self).weekday().num_days_from_sunday();
        u8::try_from(weekday).unwrap_or_default()
    }
}

impl JalaliDate {
    /// Creates a new Jalali date, validating each component against the
    /// Jalali month lengths and the representable range.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` or `InvalidDay` for a bad component,
    /// and `ParseError::OutOfRange` for a valid date with no Gregorian
    /// counterpart in years `1..=9999`.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        let month_typed = Month::new(month)?;
        if day < MIN_DAY || day > jalali_month_length(year, month) {
            return Err(ParseError::InvalidDay { year, month, day });
        }
        let tuple = (year, month, day);
        if tuple < MIN_JALALI || tuple > MAX_JALALI {
            return Err(ParseError::OutOfRange { year, month, day });
        }
        Ok(Self {
            year,
            month: month_typed,
            day,
        })
    }

    /// Builds from a converter result, which is always in range.
    fn from_converted(year: i32, month: u8, day: u8) -> Self {
        debug_assert!(Self::new(year, month, day).is_ok());
        Self {
            year,
            month: Month::new(month).unwrap_or(Month::FIRST),
            day,
        }
    }

    /// Returns the year
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month
    #[inline]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns the day of the month
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns `(year, month, day)`
    pub const fn to_tuple(&self) -> (i32, u8, u8) {
        (self.year, self.month.get(), self.day)
    }

    /// Number of days in this date's month
    pub const fn month_length(&self) -> u8 {
        jalali_month_length(self.year, self.month.get())
    }

    /// Converts to the Gregorian calendar. The representable Jalali range is
    /// exactly the image of Gregorian years `1..=9999`, so this cannot fail.
    pub fn to_gregorian(&self) -> GregorianDate {
        let (year, month, day) = jalali_to_gregorian(self.year, self.month.get(), self.day);
        debug_assert!(GregorianDate::new(year, month, day).is_ok());
        GregorianDate {
            year,
            month: Month::new(month).unwrap_or(Month::FIRST),
            day,
        }
    }
}

impl From<GregorianDate> for JalaliDate {
    fn from(date: GregorianDate) -> Self {
        date.to_jalali()
    }
}

impl From<JalaliDate> for GregorianDate {
    fn from(date: JalaliDate) -> Self {
        date.to_gregorian()
    }
}

impl From<GregorianDate> for NaiveDate {
    fn from(date: GregorianDate) -> Self {
        // Years 1..=9999 with validated month and day are always accepted.
        Self::from_ymd_opt(date.year, u32::from(date.month.get()), u32::from(date.day))
            .unwrap_or(Self::MIN)
    }
}

impl TryFrom<NaiveDate> for GregorianDate {
    type Error = ParseError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let narrow =
            |n: u32| u8::try_from(n).map_err(|_| ParseError::InvalidFormat(date.to_string()));
        Self::new(date.year(), narrow(date.month())?, narrow(date.day())?)
    }
}

/// Splits `s` on `sep` into exactly three numeric components.
fn split_three(s: &str, sep: char) -> Result<(i32, u8, u8), ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    // A leading minus belongs to the year, not to the separator.
    let (sign, body) = match trimmed.strip_prefix('-') {
        Some(rest) if sep != DATE_SEPARATOR => (-1, rest),
        _ => (1, trimmed),
    };

    let parts: Vec<&str> = body.split(sep).map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ParseError::InvalidFormat(format!(
            "Expected 3 components separated by '{}', found {}",
            sep,
            parts.len()
        )));
    }

    let year = parts[0]
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;
    let month = parts[1]
        .parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;
    let day = parts[2]
        .parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;

    Ok((sign * year, month, day))
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = split_three(s, DATE_SEPARATOR)?;
        Self::new(year, month, day)
    }
}

impl FromStr for JalaliDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = split_three(s, JALALI_SEPARATOR)?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
