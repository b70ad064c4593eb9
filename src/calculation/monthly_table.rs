//! Monthly side-by-side projection of both conventions.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use super::entitlement::entitlement_for_months;
use super::fiscal_ledger::fiscal_year_ledger;
use super::schedule::{fiscal_monthly_grant_dates, is_hired_on_january_first};
use super::tenure::{days_in_month, end_of_year};
use crate::config::AccrualPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    ConventionComparison, DayCountComparison, HireRecord, Horizon, MonthlyRow, YearComparison,
};

fn validate_horizon_years(horizon_years: u32, policy: &AccrualPolicy) -> EngineResult<()> {
    if horizon_years == 0 || horizon_years > policy.max_table_years {
        return Err(EngineError::InvalidHorizon {
            years: horizon_years,
            max: policy.max_table_years,
        });
    }
    Ok(())
}

fn row_date(year: i32, month: u32, hire_day: u32) -> EngineResult<NaiveDate> {
    let day = hire_day.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| EngineError::InvalidDate {
        value: format!("{:04}-{:02}-{:02}", year, month, day),
        message: "projection row is outside the calendar range".to_string(),
    })
}

/// Generates one row per month, from the hire month through December of the
/// last projected year.
///
/// `horizon_years` counts calendar years starting with the hire year and must
/// be between 1 and `max_table_years`. Each row is dated on the hire
/// day-of-month, clamped to short months. The anniversary column is the
/// capped month count during the first year, then the annual entitlement for
/// the completed years. The fiscal column counts the monthly grants made by
/// the row date in the hire year, then carries the fiscal ledger entry of
/// the row's year.
///
/// For a terminated employee the table ends with the first row dated on or
/// after the termination date. The fiscal column then follows the terminated
/// ledger: the termination year shows its prorated entry and a row past the
/// last ledger year shows 0.
///
/// # Errors
///
/// Returns [`EngineError::InvalidHorizon`] when `horizon_years` is out of range.
///
/// # Examples
///
/// ```
/// use leave_accrual_engine::calculation::generate_monthly_table;
/// use leave_accrual_engine::config::AccrualPolicy;
/// use leave_accrual_engine::models::HireRecord;
///
/// let record = HireRecord::parse("2023-07-01", None).unwrap();
/// let policy = AccrualPolicy::korean_labor_standards();
///
/// let table = generate_monthly_table(&record, 2, &policy).unwrap();
/// assert_eq!(table.len(), 18);
/// assert_eq!(table[6].tenure_months, 6);
/// assert_eq!(table[6].anniversary_days, 6);
/// assert_eq!(table[6].fiscal_days, 8);
/// ```
pub fn generate_monthly_table(
    record: &HireRecord,
    horizon_years: u32,
    policy: &AccrualPolicy,
) -> EngineResult<Vec<MonthlyRow>> {
    record.validate()?;
    validate_horizon_years(horizon_years, policy)?;

    let hire_date = record.hire_date;
    let hire_year = hire_date.year();
    let last_year = hire_year + horizon_years as i32 - 1;

    let window = Horizon::ending(record, end_of_year(last_year)?);
    let fiscal_by_year: BTreeMap<i32, u32> = fiscal_year_ledger(record, &window, policy)?
        .into_iter()
        .map(|entry| (entry.year, entry.days))
        .collect();
    let fiscal_entry = |year: i32| fiscal_by_year.get(&year).copied().unwrap_or(0);

    let hire_year_fiscal_dates = fiscal_monthly_grant_dates(hire_date, policy)?;
    let hired_on_january_first = is_hired_on_january_first(hire_date);

    let mut rows = Vec::with_capacity(horizon_years as usize * 12);

    for year in hire_year..=last_year {
        let first_month = if year == hire_year { hire_date.month() } else { 1 };
        for month in first_month..=12 {
            let as_of = row_date(year, month, hire_date.day())?;
            let tenure_months = (year - hire_year) as u32 * 12 + month - hire_date.month();

            let fiscal_days = if year == hire_year && !hired_on_january_first {
                let granted = hire_year_fiscal_dates.iter().filter(|d| **d <= as_of).count() as u32;
                granted.min(fiscal_entry(hire_year))
            } else {
                fiscal_entry(year)
            };

            rows.push(MonthlyRow {
                as_of,
                tenure_years: tenure_months / 12,
                tenure_months,
                anniversary_days: entitlement_for_months(tenure_months, policy),
                fiscal_days,
            });

            if record.termination_date.is_some_and(|t| as_of >= t) {
                return Ok(rows);
            }
        }
    }

    Ok(rows)
}

/// Summarizes the monthly table: the last row, the column sums, and the
/// largest value of each column per calendar year.
///
/// # Examples
///
/// ```
/// use leave_accrual_engine::calculation::compare_conventions;
/// use leave_accrual_engine::config::AccrualPolicy;
/// use leave_accrual_engine::models::HireRecord;
///
/// let record = HireRecord::parse("2023-01-01", None).unwrap();
/// let policy = AccrualPolicy::korean_labor_standards();
///
/// let comparison = compare_conventions(&record, 1, &policy).unwrap();
/// assert_eq!(comparison.current.anniversary, 11);
/// assert_eq!(comparison.current.fiscal, 15);
/// assert_eq!(comparison.current.difference, 4);
/// ```
pub fn compare_conventions(
    record: &HireRecord,
    horizon_years: u32,
    policy: &AccrualPolicy,
) -> EngineResult<ConventionComparison> {
    let table = generate_monthly_table(record, horizon_years, policy)?;

    let current = table
        .last()
        .map(|row| DayCountComparison::new(row.anniversary_days, row.fiscal_days))
        .unwrap_or_else(|| DayCountComparison::new(0, 0));

    let (anniversary_total, fiscal_total) = table.iter().fold((0u32, 0u32), |(a, f), row| {
        (a + row.anniversary_days, f + row.fiscal_days)
    });

    let mut maxima: BTreeMap<i32, (u32, u32)> = BTreeMap::new();
    for row in &table {
        let entry = maxima.entry(row.as_of.year()).or_default();
        entry.0 = entry.0.max(row.anniversary_days);
        entry.1 = entry.1.max(row.fiscal_days);
    }

    Ok(ConventionComparison {
        current,
        cumulative: DayCountComparison::new(anniversary_total, fiscal_total),
        per_year: maxima
            .into_iter()
            .map(|(year, (anniversary, fiscal))| YearComparison {
                year,
                days: DayCountComparison::new(anniversary, fiscal),
            })
            .collect(),
    })
}
