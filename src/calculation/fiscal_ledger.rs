//! Fiscal-convention yearly ledger.
//!
//! Under the fiscal convention every employee shares the January 1
//! boundary: monthly grants in the hire year, a proportional grant on the
//! first January 1, then the annual entitlement each January 1 after that.

use chrono::{Datelike, NaiveDate};

use super::entitlement::{annual_entitlement, proportional_grant};
use super::proration::close_ledger_year;
use super::schedule::{
    effective_end, fiscal_monthly_grant_dates, hire_year_days, is_hired_on_january_first,
};
use super::tenure::start_of_year;
use crate::config::AccrualPolicy;
use crate::error::EngineResult;
use crate::models::{HireRecord, Horizon, LeaveYearEntry};

/// Full years of service at a fiscal boundary, counted in blocks of
/// `full_year_days` days.
pub(crate) fn fiscal_years_worked(
    hire_date: NaiveDate,
    boundary: NaiveDate,
    policy: &AccrualPolicy,
) -> u32 {
    let days = (boundary - hire_date).num_days().max(0);
    (days / i64::from(policy.full_year_days)) as u32
}

/// Builds the fiscal-convention ledger, one entry per calendar year from the
/// hire year through the horizon year.
///
/// - Hire year: the base grant for a January 1 hire, otherwise the number of
///   monthly grant dates up to the horizon end.
/// - First full calendar year: [`proportional_grant`] for the days served in
///   the hire year.
/// - Later years: [`annual_entitlement`] for the full years served on
///   January 1.
///
/// A termination stops the ledger at the termination year and prorates that
/// year's entry by the days served in it. A month-counted hire year is not
/// prorated: it already counts only the grants made before the termination.
///
/// # Examples
///
/// ```
/// use leave_accrual_engine::calculation::fiscal_year_ledger;
/// use leave_accrual_engine::config::AccrualPolicy;
/// use leave_accrual_engine::models::{HireRecord, Horizon};
/// use chrono::NaiveDate;
///
/// let record = HireRecord::parse("2022-03-15", None).unwrap();
/// let horizon = Horizon::ending(&record, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
/// let policy = AccrualPolicy::korean_labor_standards();
///
/// let ledger = fiscal_year_ledger(&record, &horizon, &policy).unwrap();
/// let days: Vec<u32> = ledger.iter().map(|e| e.days).collect();
/// assert_eq!(days, vec![9, 12, 15]);
/// ```
pub fn fiscal_year_ledger(
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
    let mut ledger = Vec::with_capacity((end.year() - hire_year + 1) as usize);

    for year in hire_year..=end.year() {
        let (accrued, prorate) = if year == hire_year {
            if is_hired_on_january_first(hire_date) {
                (policy.base_annual_days, true)
            } else {
                let granted = fiscal_monthly_grant_dates(hire_date, policy)?
                    .into_iter()
                    .filter(|d| *d <= end)
                    .count() as u32;
                (granted, false)
            }
        } else if year == hire_year + 1 {
            (proportional_grant(hire_year_days(hire_date)?, policy), true)
        } else {
            let years_worked = fiscal_years_worked(hire_date, start_of_year(year)?, policy);
            (annual_entitlement(years_worked, policy), true)
        };

        ledger.push(close_ledger_year(year, accrued, prorate, record)?);
    }

    Ok(ledger)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn ledger(hire: &str, termination: Option<&str>, end: &str) -> Vec<LeaveYearEntry> {
        let record = HireRecord::parse(hire, termination).unwrap();
        let horizon = Horizon::ending(&record, date(end));
        fiscal_year_ledger(&record, &horizon, &AccrualPolicy::korean_labor_standards()).unwrap()
    }

    fn days(entries: &[LeaveYearEntry]) -> Vec<(i32, u32)> {
        entries.iter().map(|e| (e.year, e.days)).collect()
    }

    #[test]
    fn test_fiscal_years_worked_counts_blocks_of_365() {
        let policy = AccrualPolicy::korean_labor_standards();
        assert_eq!(fiscal_years_worked(date("2022-03-15"), date("2024-01-01"), &policy), 1);
        assert_eq!(fiscal_years_worked(date("2022-03-15"), date("2026-01-01"), &policy), 3);
        assert_eq!(fiscal_years_worked(date("2020-01-01"), date("2024-01-01"), &policy), 4);
        assert_eq!(fiscal_years_worked(date("2024-01-01"), date("2023-01-01"), &policy), 0);
    }

    #[test]
    fn test_january_first_hire_gets_full_grant() {
        let entries = ledger("2023-01-01", None, "2024-12-31");
        assert_eq!(days(&entries), vec![(2023, 15), (2024, 15)]);
    }

    #[test]
    fn test_mid_year_hire() {
        let entries = ledger("2022-03-15", None, "2026-12-31");
        assert_eq!(
            days(&entries),
            vec![(2022, 9), (2023, 12), (2024, 15), (2025, 15), (2026, 16)]
        );
    }

    #[test]
    fn test_first_of_month_hire_counts_december_31_grant() {
        let entries = ledger("2023-07-01", None, "2024-12-31");
        assert_eq!(entries[0], LeaveYearEntry::new(2023, 6));
        // 184 days served in 2023
        assert_eq!(entries[1], LeaveYearEntry::new(2024, 8));
    }

    #[test]
    fn test_termination_prorates_final_year() {
        let entries = ledger("2022-03-15", Some("2024-03-31"), "2030-12-31");
        assert_eq!(entries.len(), 3);
        let last = entries.last().unwrap();
        assert_eq!(last.year, 2024);
        assert_eq!(last.accrued_days, 15);
        // ceil(15 * 91 / 366)
        assert_eq!(last.days, 4);
    }

    #[test]
    fn test_termination_in_hire_year_counts_grants_made() {
        let entries = ledger("2023-07-01", Some("2023-11-15"), "2030-12-31");
        assert_eq!(entries, vec![LeaveYearEntry::new(2023, 4)]);
    }

    #[test]
    fn test_termination_in_hire_year_of_january_first_hire() {
        let entries = ledger("2023-01-01", Some("2023-07-01"), "2030-12-31");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].accrued_days, 15);
        // ceil(15 * 182 / 365)
        assert_eq!(entries[0].days, 8);
    }

    #[test]
    fn test_empty_when_hired_after_horizon() {
        assert!(ledger("2031-01-01", None, "2030-12-31").is_empty());
    }

    #[test]
    fn test_seniority_cap_reached() {
        let entries = ledger("1990-01-01", None, "2030-12-31");
        assert_eq!(entries.last().unwrap().days, 25);
        assert!(entries.iter().all(|e| e.days <= 25));
    }
}
