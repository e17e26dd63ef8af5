//! Domain models for per-region case observations.
//!
//! A [`RawRecord`] is one row as the tabular collaborator hands it over: the
//! date is still text and the trailing-week count may be missing. An
//! [`Observation`] is the validated form the chart pipeline works on.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One unvalidated input row.
///
/// # Examples
///
/// ```
/// use trajectory_backend::core::domain::RawRecord;
///
/// let row = RawRecord::new("Kathmandu", "05/04/2020", 12.0, Some(9.0));
/// assert!(row.has_weekly_cases());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub region: String,
    pub date: String,
    pub cumulative_cases: f64,
    pub weekly_cases: Option<f64>,
}

impl RawRecord {
    pub fn new(
        region: impl Into<String>,
        date: impl Into<String>,
        cumulative_cases: f64,
        weekly_cases: Option<f64>,
    ) -> Self {
        Self {
            region: region.into(),
            date: date.into(),
            cumulative_cases,
            weekly_cases,
        }
    }

    /// Rows without a trailing-week value never reach the chart.
    pub fn has_weekly_cases(&self) -> bool {
        self.weekly_cases.is_some_and(|v| !v.is_nan())
    }
}

/// A single region's case counts on one date.
///
/// `cumulative_cases` is assumed non-decreasing per region as dates advance;
/// nothing in the backend checks or repairs that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub region: String,
    pub date: NaiveDate,
    pub cumulative_cases: f64,
    /// New cases over the trailing seven days
    pub weekly_cases: f64,
}

impl Observation {
    pub fn new(
        region: impl Into<String>,
        date: NaiveDate,
        cumulative_cases: f64,
        weekly_cases: f64,
    ) -> Self {
        Self {
            region: region.into(),
            date,
            cumulative_cases,
            weekly_cases,
        }
    }

    /// The (x, y) position of this observation on the trajectory chart.
    pub fn point(&self) -> (f64, f64) {
        (self.cumulative_cases, self.weekly_cases)
    }
}
