//! Monthly projection rows and convention comparison.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One month of the side-by-side projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRow {
    /// The reference date: the hire day-of-month, clamped to short months.
    pub as_of: NaiveDate,
    /// Whole years of service at `as_of`.
    pub tenure_years: u32,
    /// Whole months of service at `as_of`.
    pub tenure_months: u32,
    /// Anniversary-convention leave days at `as_of`.
    pub anniversary_days: u32,
    /// Fiscal-convention leave days at `as_of`.
    pub fiscal_days: u32,
}

/// Day counts under both conventions and the gap between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCountComparison {
    /// Anniversary-convention day count.
    pub anniversary: u32,
    /// Fiscal-convention day count.
    pub fiscal: u32,
    /// `fiscal - anniversary`.
    pub difference: i64,
}

impl DayCountComparison {
    /// Builds a comparison, computing the signed difference.
    pub fn new(anniversary: u32, fiscal: u32) -> Self {
        Self {
            anniversary,
            fiscal,
            difference: i64::from(fiscal) - i64::from(anniversary),
        }
    }
}

/// The largest day count of each convention within one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearComparison {
    /// The calendar year.
    pub year: i32,
    /// The year's figures.
    #[serde(flatten)]
    pub days: DayCountComparison,
}

/// Side-by-side summary of both conventions over a projection table.
///
/// # Example
///
/// ```
/// use leave_accrual_engine::models::{ConventionComparison, DayCountComparison};
///
/// let comparison = ConventionComparison {
///     current: DayCountComparison::new(15, 16),
///     cumulative: DayCountComparison::new(120, 131),
///     per_year: vec![],
/// };
/// assert_eq!(comparison.current.difference, 1);
/// assert_eq!(comparison.cumulative.difference, 11);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConventionComparison {
    /// Day counts on the last row of the table.
    pub current: DayCountComparison,
    /// Sums of the day counts over every row of the table.
    pub cumulative: DayCountComparison,
    /// Per-year maxima.
    pub per_year: Vec<YearComparison>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difference_is_fiscal_minus_anniversary() {
        assert_eq!(DayCountComparison::new(15, 12).difference, -3);
        assert_eq!(DayCountComparison::new(11, 15).difference, 4);
        assert_eq!(DayCountComparison::new(0, 0).difference, 0);
    }

    #[test]
    fn test_year_comparison_serializes_flat() {
        let row = YearComparison {
            year: 2024,
            days: DayCountComparison::new(11, 15),
        };
        let json = serde_json::to_value(row).unwrap();
        assert_eq!(json["year"], 2024);
        assert_eq!(json["anniversary"], 11);
        assert_eq!(json["fiscal"], 15);
        assert_eq!(json["difference"], 4);
    }

    #[test]
    fn test_monthly_row_deserializes() {
        let json = r#"{
            "as_of": "2024-01-01",
            "tenure_years": 0,
            "tenure_months": 6,
            "anniversary_days": 6,
            "fiscal_days": 8
        }"#;
        let row: MonthlyRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.tenure_months, 6);
        assert_eq!(row.fiscal_days, 8);
    }
}
