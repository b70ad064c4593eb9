//! The accrual engine facade.
//!
//! [`LeaveAccrualEngine`] binds an [`AccrualPolicy`] and a [`Clock`] to the
//! pure functions in [`crate::calculation`]. Employee dates are arguments on
//! every call; the engine holds no per-employee state and can be shared
//! across threads.

use std::fmt::Debug;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use crate::calculation::{
    EntitlementSnapshot, compare_conventions, employment_year_ledger, employment_year_schedule,
    entitlement_as_of, fiscal_year_ledger, fiscal_year_schedule, generate_monthly_table,
};
use crate::config::{AccrualPolicy, ConfigLoader};
use crate::error::EngineResult;
use crate::models::{
    AccrualConvention, AccrualGrant, ConventionComparison, HireRecord, Horizon, LeaveYearEntry,
    MonthlyRow,
};

/// Source of the current date.
pub trait Clock: Send + Sync + Debug {
    /// Today's date.
    fn today(&self) -> NaiveDate;
}

/// The local system date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Computes leave ledgers, schedules and projections for hire records.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use leave_accrual_engine::config::AccrualPolicy;
/// use leave_accrual_engine::engine::{FixedClock, LeaveAccrualEngine};
/// use leave_accrual_engine::models::AccrualConvention;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let engine = LeaveAccrualEngine::with_clock(
///     AccrualPolicy::korean_labor_standards(),
///     Arc::new(FixedClock(today)),
/// );
///
/// let hire = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
/// let ledger = engine
///     .compute_yearly_ledger(hire, None, AccrualConvention::Fiscal)
///     .unwrap();
/// assert_eq!(ledger[0].days, 15);
/// ```
#[derive(Debug, Clone)]
pub struct LeaveAccrualEngine {
    policy: AccrualPolicy,
    clock: Arc<dyn Clock>,
}

impl LeaveAccrualEngine {
    /// Creates an engine that reads the system clock.
    pub fn new(policy: AccrualPolicy) -> Self {
        Self::with_clock(policy, Arc::new(SystemClock))
    }

    /// Creates an engine with an explicit clock.
    pub fn with_clock(policy: AccrualPolicy, clock: Arc<dyn Clock>) -> Self {
        Self { policy, clock }
    }

    /// Creates an engine from a loaded policy directory.
    pub fn from_config(loader: &ConfigLoader) -> Self {
        Self::new(loader.policy().clone())
    }

    /// Returns the accrual policy.
    pub fn policy(&self) -> &AccrualPolicy {
        &self.policy
    }

    /// Resolves the computation horizon for a record: the termination date,
    /// or `look_ahead_years` past today.
    pub fn horizon(&self, record: &HireRecord) -> EngineResult<Horizon> {
        Horizon::resolve(record, self.clock.today(), self.policy.look_ahead_years)
    }

    fn record(
        &self,
        hire_date: NaiveDate,
        termination_date: Option<NaiveDate>,
    ) -> EngineResult<HireRecord> {
        HireRecord::new(hire_date, termination_date).inspect_err(|err| {
            warn!(
                hire_date = %hire_date,
                termination_date = ?termination_date,
                error = %err,
                "Rejected hire record"
            );
        })
    }

    /// Computes the per-calendar-year ledger under `convention`.
    pub fn compute_yearly_ledger(
        &self,
        hire_date: NaiveDate,
        termination_date: Option<NaiveDate>,
        convention: AccrualConvention,
    ) -> EngineResult<Vec<LeaveYearEntry>> {
        let record = self.record(hire_date, termination_date)?;
        let horizon = self.horizon(&record)?;

        let ledger = match convention {
            AccrualConvention::Anniversary => employment_year_ledger(&record, &horizon, &self.policy)?,
            AccrualConvention::Fiscal => fiscal_year_ledger(&record, &horizon, &self.policy)?,
        };

        debug!(
            hire_date = %hire_date,
            convention = %convention,
            horizon_end = %horizon.end_date,
            entries = ledger.len(),
            "Computed yearly ledger"
        );
        Ok(ledger)
    }

    /// Computes the dated grant schedule under `convention`.
    pub fn compute_schedule(
        &self,
        hire_date: NaiveDate,
        termination_date: Option<NaiveDate>,
        convention: AccrualConvention,
    ) -> EngineResult<Vec<AccrualGrant>> {
        let record = self.record(hire_date, termination_date)?;
        let horizon = self.horizon(&record)?;

        let grants = match convention {
            AccrualConvention::Anniversary => {
                employment_year_schedule(&record, &horizon, &self.policy)?
            }
            AccrualConvention::Fiscal => fiscal_year_schedule(&record, &horizon, &self.policy)?,
        };

        debug!(
            hire_date = %hire_date,
            convention = %convention,
            horizon_end = %horizon.end_date,
            grants = grants.len(),
            "Computed grant schedule"
        );
        Ok(grants)
    }

    /// Generates the monthly side-by-side table over `horizon_years`
    /// calendar years starting with the hire year.
    pub fn compute_monthly_table(
        &self,
        hire_date: NaiveDate,
        termination_date: Option<NaiveDate>,
        horizon_years: u32,
    ) -> EngineResult<Vec<MonthlyRow>> {
        let record = self.record(hire_date, termination_date)?;
        let rows = generate_monthly_table(&record, horizon_years, &self.policy).inspect_err(|err| {
            warn!(horizon_years, error = %err, "Rejected projection table request");
        })?;

        debug!(
            hire_date = %hire_date,
            horizon_years,
            rows = rows.len(),
            "Generated monthly table"
        );
        Ok(rows)
    }

    /// Summarizes the monthly table over `horizon_years`.
    pub fn compare_conventions(
        &self,
        hire_date: NaiveDate,
        termination_date: Option<NaiveDate>,
        horizon_years: u32,
    ) -> EngineResult<ConventionComparison> {
        let record = self.record(hire_date, termination_date)?;
        let comparison = compare_conventions(&record, horizon_years, &self.policy).inspect_err(|err| {
            warn!(horizon_years, error = %err, "Rejected comparison request");
        })?;

        debug!(
            hire_date = %hire_date,
            horizon_years,
            difference = comparison.current.difference,
            "Compared conventions"
        );
        Ok(comparison)
    }

    /// Anniversary-convention position on `as_of`, or today when `as_of` is
    /// not given.
    pub fn entitlement_as_of(
        &self,
        hire_date: NaiveDate,
        as_of: Option<NaiveDate>,
    ) -> EngineResult<EntitlementSnapshot> {
        let as_of = as_of.unwrap_or_else(|| self.clock.today());
        let snapshot = entitlement_as_of(hire_date, as_of, &self.policy).inspect_err(|err| {
            warn!(hire_date = %hire_date, as_of = %as_of, error = %err, "Rejected entitlement request");
        })?;

        debug!(
            hire_date = %hire_date,
            as_of = %as_of,
            days = snapshot.days,
            "Computed entitlement snapshot"
        );
        Ok(snapshot)
    }
}

impl Default for LeaveAccrualEngine {
    fn default() -> Self {
        Self::new(AccrualPolicy::default())
    }
}
