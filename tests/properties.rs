//! Property tests for the accrual rules.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;

use leave_accrual_engine::calculation::{
    add_months, additional_days, calculate_tenure, employment_year_leave, employment_year_ledger,
    employment_year_schedule, fiscal_year_ledger, fiscal_year_schedule, generate_monthly_table,
    proportional_grant, prorate_for_termination,
};
use leave_accrual_engine::config::AccrualPolicy;
use leave_accrual_engine::models::{AccrualGrant, HireRecord, Horizon, LeaveYearEntry};

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
}

fn policy() -> AccrualPolicy {
    AccrualPolicy::korean_labor_standards()
}

fn grant_totals(grants: &[AccrualGrant]) -> BTreeMap<i32, u32> {
    let mut totals = BTreeMap::new();
    for grant in grants {
        *totals.entry(grant.grant_date.year()).or_insert(0) += grant.days;
    }
    totals
}

fn accrued(ledger: &[LeaveYearEntry]) -> BTreeMap<i32, u32> {
    ledger
        .iter()
        .filter(|e| e.accrued_days > 0)
        .map(|e| (e.year, e.accrued_days))
        .collect()
}

proptest! {
    /// Adding the tenure back to the hire date lands on the reference date.
    #[test]
    fn tenure_reapplies_to_reference_date(start in 0i64..15000, span in 0i64..4000) {
        let hire = base() + Duration::days(start);
        let as_of = hire + Duration::days(span);

        let tenure = calculate_tenure(hire, as_of).unwrap();
        let rebuilt = add_months(hire, tenure.total_months()).unwrap() + Duration::days(tenure.days as i64);

        prop_assert_eq!(rebuilt, as_of);
        prop_assert!(tenure.months < 12);
    }

    /// Leave held on any date matches the grants the schedule has made by then:
    /// the monthly grant count before the first anniversary, the latest
    /// anniversary grant afterwards.
    #[test]
    fn leave_matches_schedule_on_every_date(start in 0i64..15000, span in 0i64..4000) {
        let hire = base() + Duration::days(start);
        let as_of = hire + Duration::days(span);
        let record = HireRecord::new(hire, None).unwrap();
        let horizon = Horizon::ending(&record, as_of);

        let grants = employment_year_schedule(&record, &horizon, &policy()).unwrap();
        let leave = employment_year_leave(hire, as_of, &policy()).unwrap();

        match grants.last() {
            Some(last) if last.note.starts_with("Anniversary") => prop_assert_eq!(leave, last.days),
            _ if grants.iter().all(|g| g.days == 1) => prop_assert_eq!(leave, grants.len() as u32),
            // a full first year is granted up front; the month count still applies
            _ => prop_assert!(leave <= 11),
        }
    }

    /// Seniority days never decrease with service and never exceed 10.
    #[test]
    fn additional_days_monotone_and_capped(years in 0u32..80) {
        let policy = policy();
        prop_assert!(additional_days(years, &policy) <= 10);
        prop_assert!(additional_days(years, &policy) <= additional_days(years + 1, &policy));
    }

    /// The proportional grant never decreases and never exceeds the base grant.
    #[test]
    fn proportional_grant_monotone(days in 0u32..400) {
        let policy = policy();
        prop_assert!(proportional_grant(days, &policy) <= proportional_grant(days + 1, &policy));
        prop_assert!(proportional_grant(days, &policy) <= 15);
    }

    /// Termination proration never increases an entry.
    #[test]
    fn termination_never_increases_entry(days in 0u32..=25, start in 0i64..15000, span in 0i64..6000) {
        let hire = base() + Duration::days(start);
        let termination = hire + Duration::days(span);

        let result = prorate_for_termination(days, hire, termination).unwrap();
        prop_assert!(result.prorated_days <= days);
        if termination.month() == 12 && termination.day() == 31 && hire.year() < termination.year() {
            prop_assert_eq!(result.prorated_days, days);
        }
    }

    /// Fiscal grants per calendar year add up to the ledger's accrued days.
    #[test]
    fn fiscal_schedule_matches_ledger(
        start in 0i64..12000,
        horizon_span in 0i64..4000,
        terminated in any::<bool>(),
    ) {
        let hire = base() + Duration::days(start);
        let end = hire + Duration::days(horizon_span);
        let record = HireRecord::new(hire, terminated.then_some(end)).unwrap();
        let horizon = Horizon::ending(&record, end);

        let ledger = fiscal_year_ledger(&record, &horizon, &policy()).unwrap();
        let grants = fiscal_year_schedule(&record, &horizon, &policy()).unwrap();

        prop_assert_eq!(grant_totals(&grants), accrued(&ledger));
    }

    /// Anniversary hire-year grants add up to the ledger's first entry.
    #[test]
    fn anniversary_hire_year_matches_ledger(start in 0i64..12000, horizon_span in 0i64..2000) {
        let hire = base() + Duration::days(start);
        let record = HireRecord::new(hire, None).unwrap();
        let horizon = Horizon::ending(&record, hire + Duration::days(horizon_span));

        let ledger = employment_year_ledger(&record, &horizon, &policy()).unwrap();
        let grants = employment_year_schedule(&record, &horizon, &policy()).unwrap();

        let granted = grant_totals(&grants).get(&hire.year()).copied().unwrap_or(0);
        prop_assert_eq!(granted, ledger[0].accrued_days);
    }

    /// Every grant lies inside the horizon and lasts at least until its own date.
    #[test]
    fn schedules_stay_within_horizon(start in 0i64..12000, horizon_span in 0i64..4000) {
        let hire = base() + Duration::days(start);
        let end = hire + Duration::days(horizon_span);
        let record = HireRecord::new(hire, None).unwrap();
        let horizon = Horizon::ending(&record, end);

        for grants in [
            employment_year_schedule(&record, &horizon, &policy()).unwrap(),
            fiscal_year_schedule(&record, &horizon, &policy()).unwrap(),
        ] {
            for grant in grants {
                prop_assert!(grant.days >= 1);
                prop_assert!(grant.grant_date >= hire);
                prop_assert!(grant.grant_date <= end);
                prop_assert!(grant.expiry_date <= end);
                prop_assert!(grant.expiry_date >= grant.grant_date);
            }
        }
    }

    /// Ledger entries never exceed the 25-day ceiling.
    #[test]
    fn ledger_entries_capped(start in 0i64..12000, horizon_span in 0i64..20000) {
        let hire = base() + Duration::days(start);
        let record = HireRecord::new(hire, None).unwrap();
        let horizon = Horizon::ending(&record, hire + Duration::days(horizon_span));

        for entry in employment_year_ledger(&record, &horizon, &policy()).unwrap() {
            prop_assert!(entry.days <= 25);
        }
        for entry in fiscal_year_ledger(&record, &horizon, &policy()).unwrap() {
            prop_assert!(entry.days <= 25);
        }
    }

    /// Every table row's anniversary column matches the entitlement on the
    /// row date, clamped month ends included.
    #[test]
    fn table_anniversary_column_matches_entitlement(start in 0i64..12000, years in 1u32..6) {
        let hire = base() + Duration::days(start);
        let record = HireRecord::new(hire, None).unwrap();

        for row in generate_monthly_table(&record, years, &policy()).unwrap() {
            let expected = employment_year_leave(hire, row.as_of, &policy()).unwrap();
            prop_assert_eq!(row.anniversary_days, expected);
        }
    }

    /// After the hire year, the table's fiscal column is the terminated
    /// ledger's entry for the row year, or 0 once the ledger has ended.
    #[test]
    fn table_fiscal_column_follows_terminated_ledger(
        start in 0i64..12000,
        service in 0i64..3000,
        years in 1u32..12,
    ) {
        let hire = base() + Duration::days(start);
        let termination = hire + Duration::days(service);
        let record = HireRecord::new(hire, Some(termination)).unwrap();

        let horizon = Horizon::ending(&record, termination);
        let ledger: BTreeMap<i32, u32> = fiscal_year_ledger(&record, &horizon, &policy())
            .unwrap()
            .into_iter()
            .map(|e| (e.year, e.days))
            .collect();

        for row in generate_monthly_table(&record, years, &policy()).unwrap() {
            let year = row.as_of.year();
            if year > hire.year() {
                prop_assert_eq!(row.fiscal_days, ledger.get(&year).copied().unwrap_or(0));
            } else {
                prop_assert!(row.fiscal_days <= ledger[&year]);
            }
        }
    }
}
