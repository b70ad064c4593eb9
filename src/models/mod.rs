//! Core data models for the Leave Accrual Engine.
//!
//! Every model is an immutable value record derived fresh on each call.

mod convention;
mod hire_record;
mod leave;
mod projection;
mod report;

pub use convention::AccrualConvention;
pub use hire_record::{HireRecord, Horizon, HorizonSource, parse_date};
pub use leave::{AccrualGrant, LeaveYearEntry};
pub use projection::{ConventionComparison, DayCountComparison, MonthlyRow, YearComparison};
pub use report::AccrualReport;
