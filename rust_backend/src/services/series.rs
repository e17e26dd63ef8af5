//! Date and region enumeration.
//!
//! Both orderings are fixed here, once per dataset: dates ascending by calendar
//! value drive animation steps, and regions in first-seen order drive colour
//! assignment, legend order and per-frame trace order.

use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};

use crate::core::Dataset;

/// Distinct regions in first-seen order, with O(1) position lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionList {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl RegionList {
    /// Insert a region if unseen; returns its position either way.
    pub fn insert(&mut self, region: &str) -> usize {
        if let Some(&pos) = self.positions.get(region) {
            return pos;
        }
        let pos = self.names.len();
        self.names.push(region.to_string());
        self.positions.insert(region.to_string(), pos);
        pos
    }

    pub fn position(&self, region: &str) -> Option<usize> {
        self.positions.get(region).copied()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for RegionList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = RegionList::default();
        for region in iter {
            list.insert(region);
        }
        list
    }
}

/// The two orderings every later stage depends on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesIndex {
    dates: Vec<NaiveDate>,
    regions: RegionList,
}

impl SeriesIndex {
    /// Derive the sorted distinct dates and first-seen regions of a dataset.
    ///
    /// An empty dataset yields an empty index.
    pub fn extract(dataset: &Dataset) -> Self {
        let observations = dataset.observations();
        let dates: BTreeSet<NaiveDate> = observations.iter().map(|o| o.date).collect();
        let regions: RegionList = observations.iter().map(|o| o.region.as_str()).collect();

        Self {
            dates: dates.into_iter().collect(),
            regions,
        }
    }

    /// Strictly increasing distinct dates.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn regions(&self) -> &RegionList {
        &self.regions
    }

    /// Position of a date in the index.
    pub fn date_position(&self, date: NaiveDate) -> Option<usize> {
        self.dates.binary_search(&date).ok()
    }
}
