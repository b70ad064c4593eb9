//! Leave accounting conventions.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The accounting convention used to bucket and grant annual leave.
///
/// # Example
///
/// ```
/// use leave_accrual_engine::models::AccrualConvention;
///
/// let convention: AccrualConvention = "fiscal_year".parse().unwrap();
/// assert_eq!(convention, AccrualConvention::Fiscal);
/// assert!("lunar".parse::<AccrualConvention>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccrualConvention {
    /// Leave is granted per employee on each service anniversary.
    Anniversary,
    /// Leave is granted to everyone on January 1 of each calendar year.
    Fiscal,
}

impl AccrualConvention {
    /// Both conventions, in display order.
    pub const ALL: [AccrualConvention; 2] = [AccrualConvention::Anniversary, AccrualConvention::Fiscal];

    /// The canonical tag of the convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccrualConvention::Anniversary => "anniversary",
            AccrualConvention::Fiscal => "fiscal",
        }
    }
}

impl std::fmt::Display for AccrualConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccrualConvention {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "anniversary" | "hire_date" | "employment_year" => Ok(AccrualConvention::Anniversary),
            "fiscal" | "fiscal_year" | "calendar_year" => Ok(AccrualConvention::Fiscal),
            _ => Err(EngineError::UnsupportedConvention { tag: s.to_string() }),
        }
    }
}
