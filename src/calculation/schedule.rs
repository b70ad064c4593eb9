//! Grant schedules.
//!
//! A schedule lists every dated grant an employee receives up to the horizon
//! end, with its own expiry. The anniversary schedule follows the hire date;
//! the fiscal schedule moves every grant after the hire year to January 1.

use chrono::{Datelike, NaiveDate};

use super::entitlement::{additional_days, annual_entitlement, proportional_grant};
use super::fiscal_ledger::fiscal_years_worked;
use super::tenure::{add_months, add_years, days_inclusive, end_of_year, start_of_year};
use crate::config::AccrualPolicy;
use crate::error::EngineResult;
use crate::models::{AccrualGrant, HireRecord, Horizon};

/// Inclusive days of service in the hire year, hire date through December 31.
pub(crate) fn hire_year_days(hire_date: NaiveDate) -> EngineResult<u32> {
    Ok(days_inclusive(hire_date, end_of_year(hire_date.year())?))
}

/// Returns true if the hire year alone amounts to a full year of service
/// (January 1 hires, and January 2 hires in leap years).
pub(crate) fn is_full_first_year(hire_date: NaiveDate, policy: &AccrualPolicy) -> EngineResult<bool> {
    Ok(hire_year_days(hire_date)? >= policy.full_year_days)
}

pub(crate) fn is_hired_on_january_first(hire_date: NaiveDate) -> bool {
    hire_date.month() == 1 && hire_date.day() == 1
}

/// The first-year monthly grant dates under the anniversary convention:
/// `hire + k months` for `k = 1..=first_year_monthly_cap`.
pub(crate) fn anniversary_monthly_grant_dates(
    hire_date: NaiveDate,
    policy: &AccrualPolicy,
) -> EngineResult<Vec<NaiveDate>> {
    (1..=policy.first_year_monthly_cap)
        .map(|k| add_months(hire_date, k))
        .collect()
}

/// The hire-year monthly grant dates under the fiscal convention.
///
/// Only the months left in the hire year earn a grant. A grant that would
/// land on the following January 1 is dated December 31 so that it stays in
/// the hire year. January 1 hires get no monthly grants.
pub(crate) fn fiscal_monthly_grant_dates(
    hire_date: NaiveDate,
    policy: &AccrualPolicy,
) -> EngineResult<Vec<NaiveDate>> {
    if is_hired_on_january_first(hire_date) {
        return Ok(Vec::new());
    }

    let starts_on_first = u32::from(hire_date.day() == 1);
    let count = (12 - hire_date.month() + starts_on_first).min(policy.first_year_monthly_cap);
    let year_end = end_of_year(hire_date.year())?;

    (1..=count)
        .map(|k| add_months(hire_date, k).map(|d| d.min(year_end)))
        .collect()
}

/// The last date a grant may fall on: the horizon end, or the termination
/// date when that comes first.
pub(crate) fn effective_end(record: &HireRecord, horizon: &Horizon) -> NaiveDate {
    match record.termination_date {
        Some(termination) => horizon.end_date.min(termination),
        None => horizon.end_date,
    }
}

fn grant(grant_date: NaiveDate, expiry_date: NaiveDate, days: u32, note: String) -> AccrualGrant {
    AccrualGrant {
        grant_date,
        expiry_date,
        days,
        note,
    }
}

fn with_additional(note: String, additional: u32) -> String {
    if additional > 0 {
        format!("{} +{} additional", note, additional)
    } else {
        note
    }
}

/// Builds the anniversary-convention grant schedule.
///
/// A full first year earns one grant of `base_annual_days` on the hire date.
/// Otherwise each of the first eleven months of service earns a one-day grant.
/// Every anniversary then earns the annual entitlement for the years
/// completed on that date. Each grant expires one year after it is made,
/// clipped to the horizon end or the termination date, whichever is earlier.
/// Grants dated after that are not emitted.
///
/// # Examples
///
/// ```
/// use leave_accrual_engine::calculation::employment_year_schedule;
/// use leave_accrual_engine::config::AccrualPolicy;
/// use leave_accrual_engine::models::{HireRecord, Horizon};
/// use chrono::NaiveDate;
///
/// let record = HireRecord::parse("2023-07-01", None).unwrap();
/// let horizon = Horizon::ending(&record, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
/// let policy = AccrualPolicy::korean_labor_standards();
///
/// let grants = employment_year_schedule(&record, &horizon, &policy).unwrap();
/// assert_eq!(grants.len(), 12);
/// assert_eq!(grants[0].note, "Month 1 of service");
/// assert_eq!(grants[11].days, 15);
/// ```
pub fn employment_year_schedule(
    record: &HireRecord,
    horizon: &Horizon,
    policy: &AccrualPolicy,
) -> EngineResult<Vec<AccrualGrant>> {
    record.validate()?;

    let hire_date = record.hire_date;
    let end = effective_end(record, horizon);
    let mut grants = Vec::new();

    if hire_date > end {
        return Ok(grants);
    }

    if is_full_first_year(hire_date, policy)? {
        grants.push(grant(
            hire_date,
            add_years(hire_date, 1)?.min(end),
            policy.base_annual_days,
            "Full first year of service".to_string(),
        ));
    } else {
        for (index, grant_date) in anniversary_monthly_grant_dates(hire_date, policy)?
            .into_iter()
            .enumerate()
        {
            if grant_date > end {
                break;
            }
            grants.push(grant(
                grant_date,
                add_years(grant_date, 1)?.min(end),
                1,
                format!("Month {} of service", index + 1),
            ));
        }
    }

    let mut years = 1;
    loop {
        let grant_date = add_years(hire_date, years)?;
        if grant_date > end {
            break;
        }
        let note = format!("Anniversary {} (service year {})", years, years + 1);
        grants.push(grant(
            grant_date,
            add_years(grant_date, 1)?.min(end),
            annual_entitlement(years, policy),
            with_additional(note, additional_days(years, policy)),
        ));
        years += 1;
    }

    Ok(grants)
}

/// Builds the fiscal-convention grant schedule.
///
/// The hire year earns one-day monthly grants (or the full base grant for a
/// January 1 hire), all expiring on the following January 1. Every later
/// January 1 earns one grant: the proportional grant for the hire year's
/// service first, then the annual entitlement for the full years served.
/// Expiries are clipped to the horizon end.
///
/// # Examples
///
/// ```
/// use leave_accrual_engine::calculation::fiscal_year_schedule;
/// use leave_accrual_engine::config::AccrualPolicy;
/// use leave_accrual_engine::models::{HireRecord, Horizon};
/// use chrono::NaiveDate;
///
/// let record = HireRecord::parse("2022-03-15", None).unwrap();
/// let horizon = Horizon::ending(&record, NaiveDate::from_ymd_opt(2023, 6, 30).unwrap());
/// let policy = AccrualPolicy::korean_labor_standards();
///
/// let grants = fiscal_year_schedule(&record, &horizon, &policy).unwrap();
/// assert_eq!(grants.len(), 10);
/// assert_eq!(grants[0].grant_date, NaiveDate::from_ymd_opt(2022, 4, 15).unwrap());
/// assert_eq!(grants[9].grant_date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
/// assert_eq!(grants[9].days, 12);
/// ```
pub fn fiscal_year_schedule(
    record: &HireRecord,
    horizon: &Horizon,
    policy: &AccrualPolicy,
) -> EngineResult<Vec<AccrualGrant>> {
    record.validate()?;

    let hire_date = record.hire_date;
    let hire_year = hire_date.year();
    let end = effective_end(record, horizon);
    let mut grants = Vec::new();

    if hire_date > end {
        return Ok(grants);
    }

    let first_boundary = start_of_year(hire_year + 1)?;

    if is_hired_on_january_first(hire_date) {
        grants.push(grant(
            hire_date,
            first_boundary.min(end),
            policy.base_annual_days,
            "Hired on January 1".to_string(),
        ));
    } else {
        for (index, grant_date) in fiscal_monthly_grant_dates(hire_date, policy)?
            .into_iter()
            .enumerate()
        {
            if grant_date > end {
                break;
            }
            grants.push(grant(
                grant_date,
                first_boundary.min(end),
                1,
                format!("Month {} of service", index + 1),
            ));
        }
    }

    let worked_in_hire_year = hire_year_days(hire_date)?;
    let mut year = hire_year + 1;
    loop {
        let grant_date = start_of_year(year)?;
        if grant_date > end {
            break;
        }
        let expiry_date = start_of_year(year + 1)?.min(end);

        let (days, note) = if year == hire_year + 1 {
            let days = proportional_grant(worked_in_hire_year, policy);
            let note = if worked_in_hire_year >= policy.full_year_days {
                format!("Full year worked in {}", hire_year)
            } else {
                format!(
                    "Proportional grant for {} days worked in {}",
                    worked_in_hire_year, hire_year
                )
            };
            (days, note)
        } else {
            let years_worked = fiscal_years_worked(hire_date, grant_date, policy);
            let note = format!("Fiscal year {} ({} years of service)", year, years_worked);
            (
                annual_entitlement(years_worked, policy),
                with_additional(note, additional_days(years_worked, policy)),
            )
        };

        grants.push(grant(grant_date, expiry_date, days, note));
        year += 1;
    }

    Ok(grants)
}
