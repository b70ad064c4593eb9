//! Anniversary-convention yearly ledger.
//!
//! The ledger attributes leave to calendar years while entitlement follows
//! the hire date. The year of the first anniversary carries the remaining
//! monthly grants plus the share of the first annual grant that falls in it;
//! every later year carries the entitlement for the years completed by
//! January 1.

use chrono::Datelike;

use super::entitlement::{annual_entitlement, proportional_grant};
use super::proration::close_ledger_year;
use super::schedule::{anniversary_monthly_grant_dates, effective_end, is_full_first_year};
use super::tenure::{add_years, calculate_tenure, days_inclusive, end_of_year, start_of_year};
use crate::config::AccrualPolicy;
use crate::error::EngineResult;
use crate::models::{HireRecord, Horizon, LeaveYearEntry};

/// Builds the anniversary-convention ledger, one entry per calendar year
/// from the hire year through the horizon year.
///
/// # Arguments
///
/// * `record` - The employee's hire and termination dates
/// * `horizon` - The end of the computation window
/// * `policy` - The accrual numbers
///
/// # Returns
///
/// The ledger entries in year order. A termination stops the ledger at the
/// termination year and prorates that year's entry. A hire year counted in
/// monthly grants is never prorated; it already holds only the grants made
/// before the horizon end.
///
/// # Examples
///
/// ```
/// use leave_accrual_engine::calculation::employment_year_ledger;
/// use leave_accrual_engine::config::AccrualPolicy;
/// use leave_accrual_engine::models::{HireRecord, Horizon};
/// use chrono::NaiveDate;
///
/// let record = HireRecord::parse("2020-01-01", Some("2023-07-01")).unwrap();
/// let horizon = Horizon::ending(&record, NaiveDate::from_ymd_opt(2030, 12, 31).unwrap());
/// let policy = AccrualPolicy::korean_labor_standards();
///
/// let ledger = employment_year_ledger(&record, &horizon, &policy).unwrap();
/// let last = ledger.last().unwrap();
/// assert_eq!(last.year, 2023);
/// assert_eq!(last.accrued_days, 16);
/// assert_eq!(last.days, 8);
/// ```
pub fn employment_year_ledger(
    record: &HireRecord,
    horizon: &Horizon,
    policy: &AccrualPolicy,
) -> EngineResult<Vec<LeaveYearEntry>> {
    record.validate()?;

    let hire_date = record.hire_date;
    let end = effective_end(record, horizon);
    if hire_date > end {
        return Ok(Vec::new());
    }

    let hire_year = hire_date.year();
    let full_first_year = is_full_first_year(hire_date, policy)?;
    let monthly_dates = if full_first_year {
        Vec::new()
    } else {
        anniversary_monthly_grant_dates(hire_date, policy)?
    };
    let mut ledger = Vec::with_capacity((end.year() - hire_year + 1) as usize);

    for year in hire_year..=end.year() {
        let (accrued, prorate) = if year == hire_year {
            if full_first_year {
                (policy.base_annual_days, true)
            } else {
                let granted = monthly_dates
                    .iter()
                    .filter(|d| d.year() == hire_year && **d <= end)
                    .count() as u32;
                (granted, false)
            }
        } else if year == hire_year + 1 && !full_first_year {
            let remaining_months = monthly_dates.iter().filter(|d| d.year() == year).count() as u32;
            let first_anniversary = add_years(hire_date, 1)?;
            let days_after_anniversary = days_inclusive(first_anniversary, end_of_year(year)?);
            (
                remaining_months + proportional_grant(days_after_anniversary, policy),
                true,
            )
        } else {
            let years_at_start = calculate_tenure(hire_date, start_of_year(year)?)?.years;
            (annual_entitlement(years_at_start, policy), true)
        };

        ledger.push(close_ledger_year(year, accrued, prorate, record)?);
    }

    Ok(ledger)
}
