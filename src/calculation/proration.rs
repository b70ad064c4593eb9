//! Proration of leave entitlements.
//!
//! Both proration rules scale a whole-period entitlement by a fraction of the
//! period served and round up. The arithmetic uses `Decimal` so that exact
//! fractions (292/365 = 0.8) never pick up a spurious extra day.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use super::tenure::{days_in_year, days_inclusive, start_of_year};
use crate::error::EngineResult;
use crate::models::{HireRecord, LeaveYearEntry};

/// Returns `ceil(amount * numerator / denominator)`.
///
/// # Examples
///
/// ```
/// use leave_accrual_engine::calculation::ceil_ratio;
///
/// assert_eq!(ceil_ratio(15, 292, 365), 12);
/// assert_eq!(ceil_ratio(15, 184, 365), 8);
/// assert_eq!(ceil_ratio(15, 0, 365), 0);
/// ```
pub fn ceil_ratio(amount: u32, numerator: u32, denominator: u32) -> u32 {
    if denominator == 0 {
        return amount;
    }
    let value = Decimal::from(amount) * Decimal::from(numerator) / Decimal::from(denominator);
    value.ceil().to_u32().unwrap_or(amount)
}

/// The outcome of rescaling a ledger entry for a termination within its year.
///
/// # Example
///
/// ```
/// use leave_accrual_engine::calculation::prorate_for_termination;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let hire = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// let termination = NaiveDate::from_ymd_opt(2023, 7, 1).unwrap();
///
/// let result = prorate_for_termination(16, hire, termination).unwrap();
/// assert_eq!(result.days_worked, 182);
/// assert_eq!(result.days_in_year, 365);
/// assert_eq!(result.prorated_days, 8);
/// assert!(result.ratio > Decimal::from_str("0.49").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminationProration {
    /// The termination year.
    pub year: i32,
    /// Days served in the termination year, both ends included.
    pub days_worked: u32,
    /// Length of the termination year (366 in leap years).
    pub days_in_year: u32,
    /// `days_worked / days_in_year`.
    pub ratio: Decimal,
    /// The entry before proration.
    pub original_days: u32,
    /// `ceil(original_days * ratio)`.
    pub prorated_days: u32,
}

/// Rescales `days` for a termination on `termination_date`.
///
/// Days worked count from January 1 of the termination year, or from the
/// hire date if the employee was hired that same year, through the
/// termination date inclusive. The result is never larger than `days`, and
/// equals it for a termination on December 31.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidDate`] if the termination year
/// is outside the calendar range.
pub fn prorate_for_termination(
    days: u32,
    hire_date: NaiveDate,
    termination_date: NaiveDate,
) -> EngineResult<TerminationProration> {
    let year = termination_date.year();
    let service_start = start_of_year(year)?.max(hire_date);
    let days_worked = days_inclusive(service_start, termination_date);
    let year_length = days_in_year(year);

    let prorated_days = ceil_ratio(days, days_worked, year_length).min(days);

    Ok(TerminationProration {
        year,
        days_worked,
        days_in_year: year_length,
        ratio: Decimal::from(days_worked) / Decimal::from(year_length),
        original_days: days,
        prorated_days,
    })
}

/// Closes a ledger year, prorating it when the employee left during it.
///
/// `prorate` is false for entries that already count only the grants made
/// before the horizon end.
pub(crate) fn close_ledger_year(
    year: i32,
    accrued_days: u32,
    prorate: bool,
    record: &HireRecord,
) -> EngineResult<LeaveYearEntry> {
    match record.termination_date {
        Some(termination) if prorate && termination.year() == year => {
            let proration = prorate_for_termination(accrued_days, record.hire_date, termination)?;
            Ok(LeaveYearEntry::prorated(year, accrued_days, proration.prorated_days))
        }
        _ => Ok(LeaveYearEntry::new(year, accrued_days)),
    }
}
