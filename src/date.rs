//! Calendar arithmetic helpers over `chrono::NaiveDate`.

use chrono::{Datelike, Days, Months, NaiveDate};

/// Absolute distance between two dates in whole days.
pub fn date_period(a: NaiveDate, b: NaiveDate) -> i64 {
    (a - b).num_days().abs()
}

/// First day of the month containing `date`.
pub fn first_date_in_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn last_date_in_month(date: NaiveDate) -> NaiveDate {
    first_date_in_month(date) + Months::new(1) - Days::new(1)
}

/// First day of the quarter containing `date`.
pub fn first_date_in_quarter(date: NaiveDate) -> NaiveDate {
    let month = (date.month0() / 3) * 3 + 1;
    NaiveDate::from_ymd_opt(date.year(), month, 1).unwrap_or(date)
}

/// Last day of the quarter containing `date`.
pub fn last_date_in_quarter(date: NaiveDate) -> NaiveDate {
    first_date_in_quarter(date) + Months::new(3) - Days::new(1)
}

/// Whether the year containing `date` is a leap year.
pub fn is_leap_year(date: NaiveDate) -> bool {
    date.leap_year()
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    last_date_in_month(date).day()
}
