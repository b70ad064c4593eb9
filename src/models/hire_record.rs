//! Hire record and computation horizon.
//!
//! A [`HireRecord`] carries the only employee facts the accrual rules need:
//! the hire date and an optional termination date. A [`Horizon`] bounds every
//! computation for that record.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Parses a calendar date in `YYYY-MM-DD` format.
///
/// # Examples
///
/// ```
/// use leave_accrual_engine::models::parse_date;
///
/// assert!(parse_date("2024-02-29").is_ok());
/// assert!(parse_date("2023-02-29").is_err());
/// ```
pub fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| EngineError::InvalidDate {
        value: value.to_string(),
        message: format!("expected a calendar date in YYYY-MM-DD format ({})", e),
    })
}

/// The employment dates of a single employee.
///
/// # Invariant
///
/// If present, `termination_date >= hire_date`. [`HireRecord::new`] enforces it;
/// records built by hand (or deserialized) are checked with
/// [`HireRecord::validate`] before any computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HireRecord {
    /// The first day of employment.
    pub hire_date: NaiveDate,
    /// The last day of employment, if the employee has left.
    #[serde(default)]
    pub termination_date: Option<NaiveDate>,
}

impl HireRecord {
    /// Creates a validated hire record.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_accrual_engine::models::HireRecord;
    /// use chrono::NaiveDate;
    ///
    /// let hire = NaiveDate::from_ymd_opt(2023, 7, 1).unwrap();
    /// let left = NaiveDate::from_ymd_opt(2023, 6, 30).unwrap();
    ///
    /// assert!(HireRecord::new(hire, None).is_ok());
    /// assert!(HireRecord::new(hire, Some(left)).is_err());
    /// ```
    pub fn new(hire_date: NaiveDate, termination_date: Option<NaiveDate>) -> EngineResult<Self> {
        let record = Self {
            hire_date,
            termination_date,
        };
        record.validate()?;
        Ok(record)
    }

    /// Builds a record from `YYYY-MM-DD` strings.
    pub fn parse(hire_date: &str, termination_date: Option<&str>) -> EngineResult<Self> {
        let hire_date = parse_date(hire_date)?;
        let termination_date = termination_date.map(parse_date).transpose()?;
        Self::new(hire_date, termination_date)
    }

    /// Checks the record invariant.
    pub fn validate(&self) -> EngineResult<()> {
        match self.termination_date {
            Some(termination) if termination < self.hire_date => {
                Err(EngineError::InvalidDateRange {
                    hire_date: self.hire_date,
                    end_date: termination,
                })
            }
            _ => Ok(()),
        }
    }

    /// Returns true if the employee has left.
    pub fn is_terminated(&self) -> bool {
        self.termination_date.is_some()
    }
}

/// Where a horizon's end date comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum HorizonSource {
    /// The employee has left; the horizon ends on the termination date.
    Termination,
    /// The employee is active; the horizon looks ahead from today.
    LookAhead {
        /// Number of calendar years past today.
        years: u32,
    },
    /// The caller fixed the end date (projection tables).
    Window,
}

/// The end of the computation window for a hire record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Horizon {
    /// The last date any grant may fall on.
    pub end_date: NaiveDate,
    /// Why the window ends there.
    pub source: HorizonSource,
}

impl Horizon {
    /// Resolves the horizon for a record.
    ///
    /// Terminated employees stop at their termination date. Active employees
    /// look `look_ahead_years` calendar years past `today`.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_accrual_engine::models::{HireRecord, Horizon, HorizonSource};
    /// use chrono::NaiveDate;
    ///
    /// let record = HireRecord::new(NaiveDate::from_ymd_opt(2023, 7, 1).unwrap(), None).unwrap();
    /// let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    ///
    /// let horizon = Horizon::resolve(&record, today, 5).unwrap();
    /// assert_eq!(horizon.end_date, NaiveDate::from_ymd_opt(2029, 3, 15).unwrap());
    /// assert_eq!(horizon.source, HorizonSource::LookAhead { years: 5 });
    /// ```
    pub fn resolve(record: &HireRecord, today: NaiveDate, look_ahead_years: u32) -> EngineResult<Self> {
        record.validate()?;

        if let Some(termination) = record.termination_date {
            return Ok(Self {
                end_date: termination,
                source: HorizonSource::Termination,
            });
        }

        let end_date = today
            .checked_add_months(Months::new(look_ahead_years.saturating_mul(12)))
            .ok_or_else(|| EngineError::InvalidDate {
                value: today.to_string(),
                message: format!("{} years ahead is outside the calendar range", look_ahead_years),
            })?;

        Ok(Self {
            end_date,
            source: HorizonSource::LookAhead {
                years: look_ahead_years,
            },
        })
    }

    /// Fixed horizon ending on `end_date`, used by callers that bound the
    /// window themselves (the projection table, tests).
    pub fn ending(record: &HireRecord, end_date: NaiveDate) -> Self {
        match record.termination_date {
            Some(termination) if termination <= end_date => Self {
                end_date: termination,
                source: HorizonSource::Termination,
            },
            _ => Self {
                end_date,
                source: HorizonSource::Window,
            },
        }
    }
}
