//! Report envelope for engine results.
//!
//! This module contains the [`AccrualReport`] type that wraps any engine
//! output with the identifying information a consumer needs to store or
//! display it: a calculation ID, timestamp, engine version, and the inputs
//! the result was computed from.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AccrualConvention, HireRecord, Horizon};

/// An engine result together with its provenance.
///
/// # Example
///
/// ```
/// use leave_accrual_engine::models::{AccrualReport, HireRecord, LeaveYearEntry};
/// use chrono::NaiveDate;
///
/// let record = HireRecord::new(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(), None).unwrap();
/// let report = AccrualReport::new(&record, vec![LeaveYearEntry::new(2023, 15)]);
///
/// assert_eq!(report.hire_date, record.hire_date);
/// assert_eq!(report.result.len(), 1);
/// assert!(report.horizon.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualReport<T> {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The hire date the result was computed for.
    pub hire_date: NaiveDate,
    /// The termination date, if the employee has left.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub termination_date: Option<NaiveDate>,
    /// The convention used, for convention-specific results.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub convention: Option<AccrualConvention>,
    /// The computation window, for horizon-bounded results.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub horizon: Option<Horizon>,
    /// The engine output.
    pub result: T,
}

impl<T> AccrualReport<T> {
    /// Wraps a result computed for `record`.
    pub fn new(record: &HireRecord, result: T) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            hire_date: record.hire_date,
            termination_date: record.termination_date,
            convention: None,
            horizon: None,
            result,
        }
    }

    /// Records the convention the result was computed under.
    pub fn with_convention(mut self, convention: AccrualConvention) -> Self {
        self.convention = Some(convention);
        self
    }

    /// Records the horizon the result was bounded by.
    pub fn with_horizon(mut self, horizon: Horizon) -> Self {
        self.horizon = Some(horizon);
        self
    }
}
