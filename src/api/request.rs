//! Request types for the Leave Accrual Engine API.
//!
//! Every `/leave/*` endpoint accepts the same JSON body. Dates arrive as
//! `YYYY-MM-DD` strings and are parsed here so that a malformed date maps to
//! an `INVALID_DATE` error rather than a generic JSON rejection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{AccrualConvention, HireRecord, parse_date};

fn default_convention() -> String {
    AccrualConvention::Anniversary.as_str().to_string()
}

/// Request body for the `/leave/*` endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// The first day of employment.
    pub hire_date: String,
    /// The last day of employment, if the employee has left.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub termination_date: Option<String>,
    /// Convention tag (`anniversary` or `fiscal`, plus aliases).
    #[serde(default = "default_convention")]
    pub convention: String,
    /// Projection length in calendar years for `/leave/table` and
    /// `/leave/comparison`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizon_years: Option<u32>,
    /// Reference date for `/leave/entitlement`; today when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<String>,
}

impl LeaveRequest {
    /// Creates a request for an active employee with the default convention.
    pub fn new(hire_date: impl Into<String>) -> Self {
        Self {
            hire_date: hire_date.into(),
            termination_date: None,
            convention: default_convention(),
            horizon_years: None,
            as_of: None,
        }
    }

    /// Parses and validates the employment dates.
    pub fn record(&self) -> EngineResult<HireRecord> {
        HireRecord::parse(&self.hire_date, self.termination_date.as_deref())
    }

    /// Parses the convention tag.
    pub fn convention(&self) -> EngineResult<AccrualConvention> {
        self.convention.parse()
    }

    /// Parses the reference date, if one was given.
    pub fn as_of(&self) -> EngineResult<Option<NaiveDate>> {
        self.as_of.as_deref().map(parse_date).transpose()
    }
}
