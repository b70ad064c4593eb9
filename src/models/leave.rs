//! Ledger entries and accrual grants.
//!
//! These are the two primary outputs of the engine: a per-calendar-year
//! ledger of leave days, and the dated grants that make up a schedule.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The leave days attributed to one calendar year.
///
/// # Example
///
/// ```
/// use leave_accrual_engine::models::LeaveYearEntry;
///
/// let entry = LeaveYearEntry::prorated(2023, 16, 8);
/// assert!(entry.is_prorated());
/// assert_eq!(entry.days, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveYearEntry {
    /// The calendar year.
    pub year: i32,
    /// Final leave days for the year.
    pub days: u32,
    /// Leave days before termination proration. Equal to `days` for every
    /// year except a termination year.
    pub accrued_days: u32,
}

impl LeaveYearEntry {
    /// Creates an entry that was not prorated.
    pub fn new(year: i32, days: u32) -> Self {
        Self {
            year,
            days,
            accrued_days: days,
        }
    }

    /// Creates an entry rescaled for a termination within the year.
    pub fn prorated(year: i32, accrued_days: u32, days: u32) -> Self {
        Self {
            year,
            days,
            accrued_days,
        }
    }

    /// Returns true if termination proration changed the entry.
    pub fn is_prorated(&self) -> bool {
        self.days != self.accrued_days
    }
}

/// A single addition of leave days, effective on `grant_date`.
///
/// # Example
///
/// ```
/// use leave_accrual_engine::models::AccrualGrant;
/// use chrono::NaiveDate;
///
/// let grant = AccrualGrant {
///     grant_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
///     expiry_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
///     days: 15,
///     note: "Anniversary 1 (service year 2)".to_string(),
/// };
/// assert_eq!(grant.days, 15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualGrant {
    /// The date the days become available.
    pub grant_date: NaiveDate,
    /// The date the days lapse, clipped to the computation horizon.
    pub expiry_date: NaiveDate,
    /// Number of leave days granted (at least 1).
    pub days: u32,
    /// Why the grant was made.
    pub note: String,
}
