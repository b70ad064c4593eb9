//! Tenure calculation and calendar helpers.
//!
//! Chrono has no year/month/day difference, so the civil borrowing rules are
//! implemented here. The helpers for adding months and years clamp to the end
//! of short months, the way every grant date in the engine is derived.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Elapsed service time between a hire date and a reference date.
///
/// # Example
///
/// ```
/// use leave_accrual_engine::calculation::Tenure;
///
/// let tenure = Tenure { years: 1, months: 3, days: 10 };
/// assert_eq!(tenure.total_months(), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenure {
    /// Completed years.
    pub years: u32,
    /// Completed months beyond `years`.
    pub months: u32,
    /// Remaining days beyond `months`.
    pub days: u32,
}

impl Tenure {
    /// Completed months of service, years included.
    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }
}

/// Calculates the tenure between `hire_date` and `as_of`.
///
/// Subtracts day, month and year components. A negative day count borrows a
/// month and adds the actual length of the calendar month before `as_of`; a
/// negative month count borrows a year. When the hire day does not exist in
/// that preceding month (hire on the 31st, as-of in March), the month
/// anniversary clamps to its last day and the remaining days are `as_of.day()`.
///
/// Adding `years`, then `months` (clamped), then `days` to `hire_date` always
/// yields `as_of`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDateRange`] if `as_of` is before `hire_date`.
///
/// # Examples
///
/// ```
/// use leave_accrual_engine::calculation::calculate_tenure;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2023, 7, 1).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let tenure = calculate_tenure(hire, as_of).unwrap();
/// assert_eq!((tenure.years, tenure.months, tenure.days), (0, 6, 0));
///
/// // Borrowing uses the real length of February
/// let hire = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// let tenure = calculate_tenure(hire, as_of).unwrap();
/// assert_eq!((tenure.years, tenure.months, tenure.days), (0, 1, 14));
/// ```
pub fn calculate_tenure(hire_date: NaiveDate, as_of: NaiveDate) -> EngineResult<Tenure> {
    if as_of < hire_date {
        return Err(EngineError::InvalidDateRange {
            hire_date,
            end_date: as_of,
        });
    }

    let mut years = as_of.year() - hire_date.year();
    let mut months = as_of.month() as i32 - hire_date.month() as i32;
    let mut days = as_of.day() as i32 - hire_date.day() as i32;

    if days < 0 {
        months -= 1;
        let (prev_year, prev_month) = previous_month(as_of.year(), as_of.month());
        let prev_len = days_in_month(prev_year, prev_month) as i32;
        days = if hire_date.day() as i32 > prev_len {
            as_of.day() as i32
        } else {
            days + prev_len
        };
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    Ok(Tenure {
        years: years as u32,
        months: months as u32,
        days: days as u32,
    })
}

/// Completed months of service at `as_of`.
pub fn months_completed(hire_date: NaiveDate, as_of: NaiveDate) -> EngineResult<u32> {
    Ok(calculate_tenure(hire_date, as_of)?.total_months())
}

/// Returns true for Gregorian leap years.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Number of days in a calendar month (28-31).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

/// Number of days in a calendar year (365 or 366).
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

/// Adds calendar months, clamping to the last day of short months.
pub fn add_months(date: NaiveDate, months: u32) -> EngineResult<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| EngineError::InvalidDate {
            value: date.to_string(),
            message: format!("adding {} months leaves the calendar range", months),
        })
}

/// Adds calendar years, clamping Feb 29 to Feb 28 in common years.
pub fn add_years(date: NaiveDate, years: u32) -> EngineResult<NaiveDate> {
    add_months(date, years.saturating_mul(12))
}

/// January 1 of `year`.
pub fn start_of_year(year: i32) -> EngineResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| out_of_range(year))
}

/// December 31 of `year`.
pub fn end_of_year(year: i32) -> EngineResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(|| out_of_range(year))
}

/// Inclusive number of days from `from` through `to`.
pub(crate) fn days_inclusive(from: NaiveDate, to: NaiveDate) -> u32 {
    ((to - from).num_days() + 1).max(0) as u32
}

fn out_of_range(year: i32) -> EngineError {
    EngineError::InvalidDate {
        value: year.to_string(),
        message: "year is outside the supported calendar range".to_string(),
    }
}
