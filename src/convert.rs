//! Gregorian <-> Jalali civil date arithmetic.
//!
//! Both directions count days from a shared epoch using only integer
//! division, so every result is exact. Inputs outside the documented ranges
//! are a contract violation: debug builds assert, release builds return an
//! unspecified triple. Use [`GregorianDate`](crate::GregorianDate) and
//! [`JalaliDate`](crate::JalaliDate) for checked conversions.

use crate::consts::{
    CENTURY_DAYS, COMMON_YEAR_DAYS, ESFAND_DAYS, ESFAND_DAYS_LEAP, FEBRUARY, FIRST_HALF_DAYS,
    GREGORIAN_CYCLE_DAYS, GREGORIAN_DAYS_BEFORE_MONTH, GREGORIAN_EPOCH_DAYS, JALALI_CYCLE_DAYS,
    JALALI_CYCLE_YEARS, JALALI_EPOCH_DAYS, JALALI_EPOCH_YEAR, JALALI_LEAP_REMAINDERS,
    JALALI_LEAPS_PER_CYCLE, JALALI_LONG_MONTH_DAYS, JALALI_SHORT_MONTH_DAYS, LAST_LONG_MONTH,
    LAST_MONTH, MAX_MONTH, QUAD_YEAR_DAYS,
};
use crate::types::days_in_month;

/// Converts a Gregorian `(year, month, day)` to the Jalali calendar.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    reason = "month and day stay within 1..=31 for inputs inside the documented range"
)]
pub const fn gregorian_to_jalali(gy: i32, gm: u8, gd: u8) -> (i32, u8, u8) {
    debug_assert!(gm != 0 && gm <= MAX_MONTH);

    // The leap-day terms count February 29 of `gy` only once March is reached.
    let gy2 = if gm > FEBRUARY { gy + 1 } else { gy };
    let mut days = GREGORIAN_EPOCH_DAYS
        + COMMON_YEAR_DAYS * gy
        + (gy2 + 3) / 4
        - (gy2 + 99) / 100
        + (gy2 + 399) / 400
        + gd as i32
        + GREGORIAN_DAYS_BEFORE_MONTH[(gm - 1) as usize];

    let mut jy = -JALALI_EPOCH_YEAR + JALALI_CYCLE_YEARS * (days / JALALI_CYCLE_DAYS);
    days %= JALALI_CYCLE_DAYS;
    jy += 4 * (days / QUAD_YEAR_DAYS);
    days %= QUAD_YEAR_DAYS;

    if days > COMMON_YEAR_DAYS {
        jy += (days - 1) / COMMON_YEAR_DAYS;
        days = (days - 1) % COMMON_YEAR_DAYS;
    }

    let (jm, jd) = if days < FIRST_HALF_DAYS {
        (1 + days / 31, 1 + days % 31)
    } else {
        (7 + (days - FIRST_HALF_DAYS) / 30, 1 + (days - FIRST_HALF_DAYS) % 30)
    };

    (jy, jm as u8, jd as u8)
}

/// Converts a Jalali `(year, month, day)` to the Gregorian calendar.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    reason = "month and day stay within 1..=31 for inputs inside the documented range"
)]
pub const fn jalali_to_gregorian(jy: i32, jm: u8, jd: u8) -> (i32, u8, u8) {
    debug_assert!(jm != 0 && jm <= MAX_MONTH);

    let cycle_year = jy + JALALI_EPOCH_YEAR;
    let mut days = JALALI_EPOCH_DAYS
        + COMMON_YEAR_DAYS * cycle_year
        + (cycle_year / JALALI_CYCLE_YEARS) * JALALI_LEAPS_PER_CYCLE
        + (cycle_year % JALALI_CYCLE_YEARS + 3) / 4;

    days += if jm <= LAST_LONG_MONTH {
        (jm as i32 - 1) * 31
    } else {
        (jm as i32 - 7) * 30 + FIRST_HALF_DAYS
    };
    // The epoch constant already absorbs the one-based day, so the day is
    // added whole.
    days += jd as i32;

    let mut gy = 400 * (days / GREGORIAN_CYCLE_DAYS);
    days %= GREGORIAN_CYCLE_DAYS;

    if days > CENTURY_DAYS {
        days -= 1;
        gy += 100 * (days / CENTURY_DAYS);
        days %= CENTURY_DAYS;
        if days >= COMMON_YEAR_DAYS {
            days += 1;
        }
    }

    gy += 4 * (days / QUAD_YEAR_DAYS);
    days %= QUAD_YEAR_DAYS;

    // Same order as the forward direction; swapping it breaks year boundaries.
    if days > COMMON_YEAR_DAYS {
        gy += (days - 1) / COMMON_YEAR_DAYS;
        days = (days - 1) % COMMON_YEAR_DAYS;
    }

    let mut gd = days + 1;
    let mut gm = 1;
    while gm < LAST_MONTH && gd > days_in_month(gy, gm) as i32 {
        gd -= days_in_month(gy, gm) as i32;
        gm += 1;
    }

    (gy, gm, gd as u8)
}

/// Whether `year` is a Jalali leap year under the 33-year cycle rule.
pub const fn is_jalali_leap_year(year: i32) -> bool {
    let r = year.rem_euclid(JALALI_CYCLE_YEARS);
    let mut i = 0;
    while i < JALALI_LEAP_REMAINDERS.len() {
        if JALALI_LEAP_REMAINDERS[i] == r {
            return true;
        }
        i += 1;
    }
    false
}

/// Number of days in a Jalali month: 31 for months 1-6, 30 for months 7-11,
/// and 29 or 30 for Esfand depending on [`is_jalali_leap_year`].
pub const fn jalali_month_length(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month <= LAST_LONG_MONTH {
        JALALI_LONG_MONTH_DAYS
    } else if month < LAST_MONTH {
        JALALI_SHORT_MONTH_DAYS
    } else if is_jalali_leap_year(year) {
        ESFAND_DAYS_LEAP
    } else {
        ESFAND_DAYS
    }
}
