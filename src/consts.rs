/// Minimum valid Gregorian year (inclusive)
pub const MIN_GREGORIAN_YEAR: i32 = 1;
/// Maximum valid Gregorian year (inclusive)
pub const MAX_GREGORIAN_YEAR: i32 = 9999;

/// Earliest Jalali date representable, the image of Gregorian 0001-01-01
pub const MIN_JALALI: (i32, u8, u8) = (-621, 10, 11);
/// Latest Jalali date representable, the image of Gregorian 9999-12-31
pub const MAX_JALALI: (i32, u8, u8) = (9378, 10, 10);

/// Maximum valid month (December / Esfand)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December / Esfand
pub const LAST_MONTH: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days before the first of each Gregorian month in a non-leap year
pub(crate) const GREGORIAN_DAYS_BEFORE_MONTH: [i32; 12] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in a 400-year Gregorian cycle
pub(crate) const GREGORIAN_CYCLE_DAYS: i32 = 146_097;
/// Days in a 100-year Gregorian cycle whose century year is not leap
pub(crate) const CENTURY_DAYS: i32 = 36_524;
/// Days in a four-year cycle with one leap day
pub(crate) const QUAD_YEAR_DAYS: i32 = 1_461;
/// Days in a common year
pub(crate) const COMMON_YEAR_DAYS: i32 = 365;

/// Day-count offset anchoring the Gregorian side of the conversion
pub(crate) const GREGORIAN_EPOCH_DAYS: i32 = 355_666;
/// Day-count offset anchoring the Jalali side of the conversion
pub(crate) const JALALI_EPOCH_DAYS: i32 = -355_668;
/// Year shift between the conversion epoch and Jalali year numbering
pub(crate) const JALALI_EPOCH_YEAR: i32 = 1595;

/// Length of the Jalali intercalation cycle in years
pub const JALALI_CYCLE_YEARS: i32 = 33;
/// Days in one 33-year Jalali cycle (8 leap years)
pub(crate) const JALALI_CYCLE_DAYS: i32 = 12_053;
/// Leap years per 33-year Jalali cycle
pub(crate) const JALALI_LEAPS_PER_CYCLE: i32 = 8;
/// Remainders of `year % 33` marking a Jalali leap year (30-day Esfand)
pub const JALALI_LEAP_REMAINDERS: [i32; 8] = [1, 5, 9, 13, 17, 22, 26, 30];

/// Months 1-6 of the Jalali year have 31 days
pub const JALALI_LONG_MONTH_DAYS: u8 = 31;
/// Months 7-11 of the Jalali year have 30 days
pub const JALALI_SHORT_MONTH_DAYS: u8 = 30;
/// Esfand in a common Jalali year
pub const ESFAND_DAYS: u8 = 29;
/// Esfand in a Jalali leap year
pub const ESFAND_DAYS_LEAP: u8 = 30;
/// Last of the 31-day Jalali months (Shahrivar)
pub(crate) const LAST_LONG_MONTH: u8 = 6;
/// Day-of-year index where the 30-day Jalali months begin (6 * 31)
pub(crate) const FIRST_HALF_DAYS: i32 = 186;

/// First year offered by the picker's year list
pub const PICKER_MIN_YEAR: i32 = 1350;
/// Last year offered by the picker's year list (inclusive)
pub const PICKER_MAX_YEAR: i32 = 1450;

/// Days in a week
pub const DAYS_PER_WEEK: u8 = 7;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Jalali display separator
pub const JALALI_SEPARATOR: char = '/';

/// Jalali month names, Farvardin first
pub const PERSIAN_MONTHS: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Weekday column headers, Saturday first
pub const PERSIAN_WEEKDAYS: [&str; 7] = ["ش", "ی", "د", "س", "چ", "پ", "ج"];

/// Persian digits, indexed by value
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Shown in place of a date that is missing or cannot be read
pub const UNKNOWN_DATE: &str = "نامشخص";
