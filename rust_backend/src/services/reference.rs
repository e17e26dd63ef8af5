//! Constant-doubling-time reference curves.
//!
//! A reference curve answers "what would a region growing with a fixed
//! doubling time look like on these axes". It is synthesised from a daily case
//! series `c, c(1+g), c(1+g)^2, ...` with `g = 2^(1/D) - 1`, then mapped to the
//! same coordinates as the regions: cumulative sum on x, trailing-week sum on y.
//!
//! Generation stops before the trailing-week sum would pass the dataset's
//! largest weekly count plus a per-curve extension, so each curve spans roughly
//! the same vertical range as the real data.

use log::debug;

use crate::api::types::ReferenceCurve;
use crate::config::{ReferenceCurveSettings, ReferenceSettings};
use crate::error::{TrajectoryError, TrajectoryResult};

/// Days in the trailing window
pub const TRAILING_WINDOW: usize = 7;

/// Per-day growth rate that doubles a quantity every `doubling_time_days`.
pub fn growth_rate(doubling_time_days: f64) -> TrajectoryResult<f64> {
    if !doubling_time_days.is_finite() || doubling_time_days <= 0.0 {
        return Err(TrajectoryError::InvalidDoublingTime {
            days: doubling_time_days,
        });
    }
    Ok(2f64.powf(1.0 / doubling_time_days) - 1.0)
}

/// Sliding sums of `window` consecutive values.
///
/// Entry `k` covers `daily[k..k + window]`, i.e. it belongs to day
/// `k + window - 1`. Shorter inputs give an empty result.
pub fn trailing_sums(daily: &[f64], window: usize) -> Vec<f64> {
    if window == 0 {
        return Vec::new();
    }
    daily.windows(window).map(|w| w.iter().sum()).collect()
}

/// Running totals.
pub fn cumulative_sums(daily: &[f64]) -> Vec<f64> {
    daily
        .iter()
        .scan(0.0, |total, &v| {
            *total += v;
            Some(*total)
        })
        .collect()
}

/// Display name of a curve, shared by its line and its label.
pub fn curve_name(doubling_time_days: f64) -> String {
    format!("{} days doubling time of confirmed cases", doubling_time_days)
}

/// Generates reference curves with shared start value and length cap.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceCurveGenerator {
    initial_daily_cases: f64,
    max_days: usize,
}

impl Default for ReferenceCurveGenerator {
    fn default() -> Self {
        Self::from_settings(&ReferenceSettings::default())
    }
}

impl ReferenceCurveGenerator {
    pub fn new(initial_daily_cases: f64, max_days: usize) -> Self {
        Self {
            initial_daily_cases,
            max_days,
        }
    }

    pub fn from_settings(settings: &ReferenceSettings) -> Self {
        Self::new(settings.initial_daily_cases, settings.max_days)
    }

    /// Synthetic daily cases for one doubling time.
    ///
    /// Always starts with the initial value. Each further day is appended only
    /// while the trailing-week sum ending on it stays at or below `threshold`
    /// (partial sums over the first six days), and never beyond `max_days`.
    pub fn daily_series(&self, doubling_time_days: f64, threshold: f64) -> TrajectoryResult<Vec<f64>> {
        let factor = 1.0 + growth_rate(doubling_time_days)?;
        let mut daily = vec![self.initial_daily_cases];

        while daily.len() < self.max_days {
            let next = daily[daily.len() - 1] * factor;
            let start = (daily.len() + 1).saturating_sub(TRAILING_WINDOW);
            let week_sum = daily[start..].iter().sum::<f64>() + next;
            if week_sum > threshold {
                break;
            }
            daily.push(next);
        }

        if daily.len() == self.max_days {
            debug!(
                "Reference series for D={} hit the {} day cap",
                doubling_time_days, self.max_days
            );
        }
        Ok(daily)
    }

    /// Build the displayable curve for one configured doubling time.
    ///
    /// `max_weekly_cases` is the largest trailing-week count in the dataset;
    /// the stop threshold is that plus the curve's extension.
    pub fn generate(
        &self,
        settings: &ReferenceCurveSettings,
        max_weekly_cases: f64,
    ) -> TrajectoryResult<ReferenceCurve> {
        let d = settings.doubling_time_days;
        let daily = self.daily_series(d, max_weekly_cases + settings.extension)?;

        let ys = trailing_sums(&daily, TRAILING_WINDOW);
        let cumulative = cumulative_sums(&daily);
        let xs = cumulative[cumulative.len() - ys.len()..].to_vec();

        let [dx, dy] = settings.label_offset;
        let label_point = xs
            .last()
            .zip(ys.last())
            .map(|(&x, &y)| (x + dx, y + dy));

        debug!(
            "Reference curve D={}: {} daily values, {} points",
            d,
            daily.len(),
            xs.len()
        );

        Ok(ReferenceCurve {
            doubling_time_days: d,
            name: curve_name(d),
            xs,
            ys,
            label_point,
            visible: settings.visible,
        })
    }

    /// Generate every configured curve, rejecting bad doubling times up front.
    pub fn generate_all(
        &self,
        curves: &[ReferenceCurveSettings],
        max_weekly_cases: f64,
    ) -> TrajectoryResult<Vec<ReferenceCurve>> {
        for curve in curves {
            growth_rate(curve.doubling_time_days)?;
        }
        curves
            .iter()
            .map(|curve| self.generate(curve, max_weekly_cases))
            .collect()
    }
}
