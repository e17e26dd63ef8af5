//! Animation frame construction.
//!
//! Frame `i` shows every observation dated on or before the `i`-th distinct
//! date, one trace per region. Only the most recent point of each trace is
//! labelled and opaque; earlier points stay on the path as a faint trail.
//!
//! Each region's observations are sorted once. Frames are then produced by
//! advancing a per-region cursor as the date window grows, instead of
//! re-filtering the whole dataset for every (frame, region) pair.

use chrono::NaiveDate;
use log::debug;

use crate::api::types::{RegionTrace, TraceFrame};
use crate::core::{Dataset, Observation};
use crate::services::colors::ColorAssignment;
use crate::services::series::SeriesIndex;
use crate::time::format_date_label;

/// Opacity of the highlighted current point
const CURRENT_OPACITY: u8 = 1;
/// Opacity of trail points
const TRAIL_OPACITY: u8 = 0;

/// One observation, pre-rendered for repeated use across frames.
#[derive(Debug, Clone)]
struct PathPoint {
    date: NaiveDate,
    x: f64,
    y: f64,
    hover_date: String,
}

impl PathPoint {
    fn from_observation(obs: &Observation, date_format: &str) -> Self {
        Self {
            date: obs.date,
            x: obs.cumulative_cases,
            y: obs.weekly_cases,
            hover_date: format_date_label(obs.date, date_format),
        }
    }
}

/// Builds the initial traces and every animation frame of a dataset.
pub struct FrameBuilder<'a> {
    index: &'a SeriesIndex,
    colors: &'a ColorAssignment,
    date_format: &'a str,
    /// Per region, in region-list order, sorted by date
    paths: Vec<Vec<PathPoint>>,
}

impl<'a> FrameBuilder<'a> {
    /// Group and sort the dataset's observations per region.
    ///
    /// Observations sharing a region and a date keep their input order.
    pub fn new(
        dataset: &Dataset,
        index: &'a SeriesIndex,
        colors: &'a ColorAssignment,
        date_format: &'a str,
    ) -> Self {
        let regions = index.regions();
        let mut paths: Vec<Vec<PathPoint>> = vec![Vec::new(); regions.len()];

        for obs in dataset.observations() {
            if let Some(pos) = regions.position(&obs.region) {
                paths[pos].push(PathPoint::from_observation(obs, date_format));
            }
        }
        for path in &mut paths {
            // stable: same-date rows stay in input order
            path.sort_by_key(|p| p.date);
        }

        Self {
            index,
            colors,
            date_format,
            paths,
        }
    }

    /// Traces for the first-date-only window, the chart's starting state.
    ///
    /// Identical to the traces of the first frame; empty when there are no dates.
    pub fn initial_traces(&self) -> Vec<RegionTrace> {
        match self.index.dates().first() {
            Some(&first) => self.window_traces(first),
            None => Vec::new(),
        }
    }

    /// Traces for the window of all observations dated on or before `last`.
    pub fn window_traces(&self, last: NaiveDate) -> Vec<RegionTrace> {
        self.index
            .regions()
            .iter()
            .zip(&self.paths)
            .map(|(region, path)| {
                let visible = path.partition_point(|p| p.date <= last);
                self.region_trace(region, &path[..visible])
            })
            .collect()
    }

    /// One frame per distinct date, in date order.
    pub fn build_frames(&self) -> Vec<TraceFrame> {
        let dates = self.index.dates();
        let mut cursors = vec![0usize; self.paths.len()];
        let mut frames = Vec::with_capacity(dates.len());

        for &date in dates {
            let traces = self
                .index
                .regions()
                .iter()
                .zip(&self.paths)
                .zip(cursors.iter_mut())
                .map(|((region, path), cursor)| {
                    while *cursor < path.len() && path[*cursor].date <= date {
                        *cursor += 1;
                    }
                    self.region_trace(region, &path[..*cursor])
                })
                .collect();

            frames.push(TraceFrame {
                name: format_date_label(date, self.date_format),
                traces,
            });
        }

        debug!(
            "Built {} frames for {} regions",
            frames.len(),
            self.paths.len()
        );
        frames
    }

    fn region_trace(&self, region: &str, points: &[PathPoint]) -> RegionTrace {
        let (texts, opacities) = point_labels(region, points.len());
        RegionTrace {
            region: region.to_string(),
            xs: points.iter().map(|p| p.x).collect(),
            ys: points.iter().map(|p| p.y).collect(),
            texts,
            opacities,
            hover_dates: points.iter().map(|p| p.hover_date.clone()).collect(),
            colors: self.colors.colors_for(region),
        }
    }
}

/// Label text and marker opacity for a path of `len` points.
///
/// Only the last point carries the region name and full opacity. An empty
/// path gets a single placeholder entry so every frame has a well-formed
/// trace for every region.
pub fn point_labels(region: &str, len: usize) -> (Vec<String>, Vec<u8>) {
    if len == 0 {
        return (vec![region.to_string()], vec![CURRENT_OPACITY]);
    }

    let mut texts = vec![String::new(); len];
    let mut opacities = vec![TRAIL_OPACITY; len];
    texts[len - 1] = region.to_string();
    opacities[len - 1] = CURRENT_OPACITY;
    (texts, opacities)
}
