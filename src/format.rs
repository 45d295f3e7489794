//! Text shown for dates: the picker's input field, Persian-digit labels for
//! cards and tables, and the weekday header row.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Weekday};

use crate::{GregorianDate, PERSIAN_DIGITS, PERSIAN_WEEKDAYS, UNKNOWN_DATE};

/// Text for the picker's input field: the Jalali `YYYY/MM/DD` equivalent of a
/// Gregorian ISO `value`, or an empty string when the value is unset or
/// cannot be read.
pub fn display_value(value: &str) -> String {
    value
        .parse::<GregorianDate>()
        .map(|date| date.to_jalali().to_string())
        .unwrap_or_default()
}

/// Jalali rendering of a Gregorian `value` in Persian digits, e.g.
/// `"2024-03-20"` becomes `"۱۴۰۳/۰۱/۰۱"`. RFC 3339 and naive timestamps are
/// accepted too; only their date part is used. Missing or unreadable values
/// yield `UNKNOWN_DATE`.
pub fn format_persian(value: &str) -> String {
    match calendar_day(value).map(GregorianDate::try_from) {
        Some(Ok(date)) => to_persian_digits(&date.to_jalali().to_string()),
        Some(Err(err)) => {
            log::debug!("Cannot format {value:?} as a Jalali date: {err}");
            UNKNOWN_DATE.to_owned()
        }
        None => {
            log::debug!("Cannot format {value:?} as a Jalali date: not a date or timestamp");
            UNKNOWN_DATE.to_owned()
        }
    }
}

/// The calendar day of a timestamp or plain date, as written (no time zone
/// shift is applied to offset timestamps).
fn calendar_day(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .or_else(|_| value.parse::<NaiveDateTime>().map(|dt| dt.date()))
        .or_else(|_| value.parse::<NaiveDate>())
        .ok()
}

/// Replaces ASCII digits with Persian ones, leaving everything else intact.
pub fn to_persian_digits(s: &str) -> String {
    s.chars()
        .map(|c| {
            c.to_digit(10)
                .and_then(|d| PERSIAN_DIGITS.get(usize::try_from(d).ok()?).copied())
                .unwrap_or(c)
        })
        .collect()
}

/// Weekday header labels for a week beginning on `week_start`.
pub fn weekday_headers(week_start: Weekday) -> [&'static str; 7] {
    // PERSIAN_WEEKDAYS begins on Saturday
    let offset = usize::try_from(week_start.succ().num_days_from_sunday()).unwrap_or_default();
    std::array::from_fn(|i| PERSIAN_WEEKDAYS[(i + offset) % PERSIAN_WEEKDAYS.len()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_value() {
        assert_eq!(display_value("2024-03-20"), "1403/01/01");
        assert_eq!(display_value("2021-04-09"), "1400/01/20");
        assert_eq!(display_value(""), "");
        assert_eq!(display_value("not-a-date"), "");
        assert_eq!(display_value("2024-02-30"), "");
    }

    #[test]
    fn test_format_persian() {
        assert_eq!(format_persian("2024-03-20"), "۱۴۰۳/۰۱/۰۱");
        assert_eq!(format_persian("2025-03-20"), "۱۴۰۳/۱۲/۳۰");
        assert_eq!(format_persian(""), UNKNOWN_DATE);
        assert_eq!(format_persian("yesterday"), UNKNOWN_DATE);
    }

    #[test]
    fn test_format_persian_accepts_timestamps() {
        struct TestCase {
            input:    &'static str,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                input:    "2024-03-20T10:15:00Z",
                expected: "۱۴۰۳/۰۱/۰۱",
            },
            TestCase {
                input:    "2024-03-20T10:15:00.123456+03:30",
                expected: "۱۴۰۳/۰۱/۰۱",
            },
            TestCase {
                input:    "2024-03-20T23:30:00-05:00",
                expected: "۱۴۰۳/۰۱/۰۱",
            },
            TestCase {
                input:    "2024-03-20T10:15:00",
                expected: "۱۴۰۳/۰۱/۰۱",
            },
            TestCase {
                input:    " 2025-03-20T00:00:00Z ",
                expected: "۱۴۰۳/۱۲/۳۰",
            },
            TestCase {
                input:    "2024-03-20T25:00:00Z",
                expected: UNKNOWN_DATE,
            },
            TestCase {
                input:    "2024-02-30T10:15:00Z",
                expected: UNKNOWN_DATE,
            },
        ];

        for case in cases {
            assert_eq!(format_persian(case.input), case.expected, "{:?}", case.input);
        }
    }

    #[test]
    fn test_to_persian_digits() {
        assert_eq!(to_persian_digits("0123456789"), "۰۱۲۳۴۵۶۷۸۹");
        assert_eq!(to_persian_digits("1403/01/01"), "۱۴۰۳/۰۱/۰۱");
        assert_eq!(to_persian_digits("abc"), "abc");
        assert_eq!(to_persian_digits("۱۲"), "۱۲");
    }

    #[test]
    fn test_weekday_headers() {
        assert_eq!(
            weekday_headers(Weekday::Sat),
            ["ش", "ی", "د", "س", "چ", "پ", "ج"]
        );
        assert_eq!(
            weekday_headers(Weekday::Sun),
            ["ی", "د", "س", "چ", "پ", "ج", "ش"]
        );
        assert_eq!(weekday_headers(Weekday::Fri)[0], "ج");
    }
}
