//! Calculation logic for the Leave Accrual Engine.
//!
//! This module contains the pure accrual rules: tenure and calendar helpers,
//! grant amounts, termination proration, the yearly ledgers and grant
//! schedules of both conventions, and the monthly projection table with its
//! comparison summary. Every function takes its inputs explicitly and reads
//! no clock.

mod anniversary_ledger;
mod entitlement;
mod fiscal_ledger;
mod monthly_table;
mod proration;
mod schedule;
mod tenure;

pub use anniversary_ledger::employment_year_ledger;
pub use entitlement::{
    EntitlementSnapshot, additional_days, annual_entitlement, employment_year_leave,
    entitlement_as_of, monthly_accrual_days, proportional_grant,
};
pub use fiscal_ledger::fiscal_year_ledger;
pub use monthly_table::{compare_conventions, generate_monthly_table};
pub use proration::{TerminationProration, ceil_ratio, prorate_for_termination};
pub use schedule::{employment_year_schedule, fiscal_year_schedule};
pub use tenure::{
    Tenure, add_months, add_years, calculate_tenure, days_in_month, days_in_year, end_of_year,
    is_leap_year, months_completed, start_of_year,
};
