use chrono::NaiveDate;
use log::{info, warn};

use super::domain::{Observation, RawRecord};
use crate::error::{TrajectoryError, TrajectoryResult};
use crate::time::parse_date;

/// Filtered, date-parsed observations in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    observations: Vec<Observation>,
    dropped_rows: usize,
}

impl Dataset {
    /// Build a dataset from already validated observations.
    pub fn new(observations: Vec<Observation>) -> Self {
        Self {
            observations,
            dropped_rows: 0,
        }
    }

    /// Apply the input contract to raw rows.
    ///
    /// Rows with a missing trailing-week value are dropped first; every
    /// remaining date must parse with `date_format`, otherwise the whole load
    /// fails with [`TrajectoryError::DateParse`] naming the 1-based row.
    pub fn from_records(records: Vec<RawRecord>, date_format: &str) -> TrajectoryResult<Self> {
        let total = records.len();
        let mut observations = Vec::with_capacity(total);
        let mut dropped_rows = 0;

        for (idx, record) in records.into_iter().enumerate() {
            let weekly_cases = match record.weekly_cases {
                Some(v) if !v.is_nan() => v,
                _ => {
                    dropped_rows += 1;
                    continue;
                }
            };

            let date = parse_date(&record.date, date_format).ok_or_else(|| {
                TrajectoryError::DateParse {
                    row: idx + 1,
                    value: record.date.clone(),
                    format: date_format.to_string(),
                }
            })?;

            observations.push(Observation {
                region: record.region,
                date,
                cumulative_cases: record.cumulative_cases,
                weekly_cases,
            });
        }

        if dropped_rows > 0 {
            warn!(
                "Dropped {} of {} rows with no trailing-week case count",
                dropped_rows, total
            );
        }
        info!("Dataset ready: {} observations", observations.len());

        Ok(Self {
            observations,
            dropped_rows,
        })
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Number of input rows removed for lacking a trailing-week value.
    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    /// Largest trailing-week case count, or 0 for an empty dataset.
    pub fn max_weekly_cases(&self) -> f64 {
        self.observations
            .iter()
            .map(|o| o.weekly_cases)
            .fold(0.0, f64::max)
    }

    /// Earliest and latest observation dates.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.observations.iter().map(|o| o.date).min()?;
        let last = self.observations.iter().map(|o| o.date).max()?;
        Some((first, last))
    }
}
