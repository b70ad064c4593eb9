//! Grant amount rules.
//!
//! This module holds the day-count formulas shared by both conventions:
//! the monthly first-year accrual, the annual base grant with seniority days,
//! and the proportional grant for a partial first fiscal year.
//!
//! # Statute Reference
//!
//! Labor Standards Act Article 60(1), 60(2) and 60(4).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::proration::ceil_ratio;
use super::tenure::{Tenure, add_months, add_years, calculate_tenure};
use crate::config::AccrualPolicy;
use crate::error::EngineResult;

/// Seniority days added to the base grant after `years_worked` completed years.
///
/// One day for every two years beyond the first, from the third year on,
/// capped at `max_additional_days`.
///
/// # Examples
///
/// ```
/// use leave_accrual_engine::calculation::additional_days;
/// use leave_accrual_engine::config::AccrualPolicy;
///
/// let policy = AccrualPolicy::korean_labor_standards();
/// assert_eq!(additional_days(1, &policy), 0);
/// assert_eq!(additional_days(3, &policy), 1);
/// assert_eq!(additional_days(6, &policy), 2);
/// assert_eq!(additional_days(40, &policy), 10);
/// ```
pub fn additional_days(years_worked: u32, policy: &AccrualPolicy) -> u32 {
    if years_worked < policy.seniority_threshold_years {
        return 0;
    }
    (years_worked.saturating_sub(1) / policy.seniority_step_years).min(policy.max_additional_days)
}

/// The annual grant after `years_worked` completed years: base plus seniority days.
pub fn annual_entitlement(years_worked: u32, policy: &AccrualPolicy) -> u32 {
    policy.base_annual_days + additional_days(years_worked, policy)
}

/// First-year leave after `months_completed` months: one day per month, capped.
pub fn monthly_accrual_days(months_completed: u32, policy: &AccrualPolicy) -> u32 {
    months_completed.min(policy.first_year_monthly_cap)
}

/// Grant for a partial first year of `days_worked` days.
///
/// A full year earns the base grant; anything shorter earns the base grant
/// scaled by `days_worked / full_year_days`, rounded up.
///
/// # Examples
///
/// ```
/// use leave_accrual_engine::calculation::proportional_grant;
/// use leave_accrual_engine::config::AccrualPolicy;
///
/// let policy = AccrualPolicy::korean_labor_standards();
/// assert_eq!(proportional_grant(292, &policy), 12);
/// assert_eq!(proportional_grant(365, &policy), 15);
/// assert_eq!(proportional_grant(366, &policy), 15);
/// ```
pub fn proportional_grant(days_worked: u32, policy: &AccrualPolicy) -> u32 {
    if days_worked >= policy.full_year_days {
        return policy.base_annual_days;
    }
    ceil_ratio(policy.base_annual_days, days_worked, policy.full_year_days)
}

/// Anniversary-convention leave held after `total_months` months of service.
pub(crate) fn entitlement_for_months(total_months: u32, policy: &AccrualPolicy) -> u32 {
    let years = total_months / 12;
    if years == 0 {
        monthly_accrual_days(total_months, policy)
    } else {
        annual_entitlement(years, policy)
    }
}

/// Months of service whose grant date has been reached by `as_of`.
///
/// A grant falls on `hire + n months`, clamped to short months, so a hire on
/// the 31st reaches its first grant on April 30 although [`calculate_tenure`]
/// only completes that month on May 1. The count is therefore the completed
/// months, plus one when the next clamped grant date is already reached.
pub(crate) fn granted_months(hire_date: NaiveDate, as_of: NaiveDate) -> EngineResult<u32> {
    let completed = calculate_tenure(hire_date, as_of)?.total_months();
    if add_months(hire_date, completed + 1)? <= as_of {
        Ok(completed + 1)
    } else {
        Ok(completed)
    }
}

/// Anniversary-convention leave days at `as_of`.
///
/// Under a year of service this is the number of monthly grant dates reached,
/// capped at 11; from the first anniversary on it is the annual entitlement
/// for the anniversaries reached.
///
/// # Examples
///
/// ```
/// use leave_accrual_engine::calculation::employment_year_leave;
/// use leave_accrual_engine::config::AccrualPolicy;
/// use chrono::NaiveDate;
///
/// let policy = AccrualPolicy::korean_labor_standards();
/// let hire = NaiveDate::from_ymd_opt(2023, 7, 1).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(employment_year_leave(hire, as_of, &policy).unwrap(), 6);
/// ```
pub fn employment_year_leave(
    hire_date: NaiveDate,
    as_of: NaiveDate,
    policy: &AccrualPolicy,
) -> EngineResult<u32> {
    Ok(entitlement_for_months(granted_months(hire_date, as_of)?, policy))
}

/// An employee's anniversary-convention position on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementSnapshot {
    /// The reference date.
    pub as_of: NaiveDate,
    /// Tenure at `as_of`.
    pub tenure: Tenure,
    /// Leave days held under the anniversary convention.
    pub days: u32,
    /// The date of the next grant: the next monthly grant during the first
    /// year, otherwise the next anniversary.
    pub next_grant_date: NaiveDate,
}

/// Computes the entitlement snapshot at `as_of`.
///
/// # Examples
///
/// ```
/// use leave_accrual_engine::calculation::entitlement_as_of;
/// use leave_accrual_engine::config::AccrualPolicy;
/// use chrono::NaiveDate;
///
/// let policy = AccrualPolicy::korean_labor_standards();
/// let hire = NaiveDate::from_ymd_opt(2020, 3, 15).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
///
/// let snapshot = entitlement_as_of(hire, as_of, &policy).unwrap();
/// assert_eq!(snapshot.tenure.years, 3);
/// assert_eq!(snapshot.days, 16);
/// assert_eq!(snapshot.next_grant_date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
/// ```
pub fn entitlement_as_of(
    hire_date: NaiveDate,
    as_of: NaiveDate,
    policy: &AccrualPolicy,
) -> EngineResult<EntitlementSnapshot> {
    let tenure = calculate_tenure(hire_date, as_of)?;
    let granted = granted_months(hire_date, as_of)?;
    let anniversaries = granted / 12;

    let next_grant_date = if anniversaries == 0 && granted < policy.first_year_monthly_cap {
        add_months(hire_date, granted + 1)?
    } else {
        add_years(hire_date, anniversaries + 1)?
    };

    Ok(EntitlementSnapshot {
        as_of,
        tenure,
        days: entitlement_for_months(granted, policy),
        next_grant_date,
    })
}
