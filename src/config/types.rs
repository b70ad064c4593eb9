//! Configuration types for leave accrual.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata about the statute the policy implements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatuteMetadata {
    /// Short identifier of the statute (e.g., "KR-LSA").
    pub code: String,
    /// The human-readable name of the statute.
    pub name: String,
    /// The version or effective date of the rules.
    pub version: String,
    /// The article granting annual leave.
    pub clause: String,
    /// URL to the official text.
    pub source_url: String,
}

/// The numbers that drive every accrual rule.
///
/// [`AccrualPolicy::korean_labor_standards`] returns the statutory values;
/// the same values ship in `config/korea_lsa/accrual.yaml`.
///
/// # Example
///
/// ```
/// use leave_accrual_engine::config::AccrualPolicy;
///
/// let policy = AccrualPolicy::korean_labor_standards();
/// assert_eq!(policy.base_annual_days, 15);
/// assert_eq!(policy.base_annual_days + policy.max_additional_days, 25);
/// assert!(policy.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualPolicy {
    /// Days granted on each anniversary once a full year is served.
    pub base_annual_days: u32,
    /// Cap on one-day monthly grants during the first year of service.
    pub first_year_monthly_cap: u32,
    /// Completed years of service before seniority days start.
    pub seniority_threshold_years: u32,
    /// Years of service per additional seniority day.
    pub seniority_step_years: u32,
    /// Cap on seniority days added to the base grant.
    pub max_additional_days: u32,
    /// Days counted as one full year in proration and year counting.
    pub full_year_days: u32,
    /// Calendar years past today that bound computation for active employees.
    pub look_ahead_years: u32,
    /// Projection table length when the caller does not give one.
    pub default_table_years: u32,
    /// Longest accepted projection table.
    pub max_table_years: u32,
}

impl AccrualPolicy {
    /// The Korean Labor Standards Act (Article 60) values.
    pub fn korean_labor_standards() -> Self {
        Self {
            base_annual_days: 15,
            first_year_monthly_cap: 11,
            seniority_threshold_years: 3,
            seniority_step_years: 2,
            max_additional_days: 10,
            full_year_days: 365,
            look_ahead_years: 5,
            default_table_years: 5,
            max_table_years: 50,
        }
    }

    /// Checks that the policy values are usable.
    pub fn validate(&self) -> EngineResult<()> {
        fn invalid(field: &str, message: &str) -> EngineResult<()> {
            Err(EngineError::InvalidPolicy {
                field: field.to_string(),
                message: message.to_string(),
            })
        }

        if self.base_annual_days == 0 {
            return invalid("base_annual_days", "must be greater than zero");
        }
        if !(1..=11).contains(&self.first_year_monthly_cap) {
            return invalid("first_year_monthly_cap", "must be between 1 and 11");
        }
        if self.seniority_step_years == 0 {
            return invalid("seniority_step_years", "must be greater than zero");
        }
        if !(365..=366).contains(&self.full_year_days) {
            return invalid("full_year_days", "must be 365 or 366");
        }
        if self.max_table_years == 0 {
            return invalid("max_table_years", "must be greater than zero");
        }
        if !(1..=self.max_table_years).contains(&self.default_table_years) {
            return invalid("default_table_years", "must be between 1 and max_table_years");
        }
        Ok(())
    }
}

impl Default for AccrualPolicy {
    fn default() -> Self {
        Self::korean_labor_standards()
    }
}

/// Complete leave policy configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeavePolicyConfig {
    statute: StatuteMetadata,
    policy: AccrualPolicy,
}

impl LeavePolicyConfig {
    /// Creates a new configuration from its parts.
    pub fn new(statute: StatuteMetadata, policy: AccrualPolicy) -> Self {
        Self { statute, policy }
    }

    /// Returns the statute metadata.
    pub fn statute(&self) -> &StatuteMetadata {
        &self.statute
    }

    /// Returns the accrual policy.
    pub fn policy(&self) -> &AccrualPolicy {
        &self.policy
    }
}
