//! Core domain models for case trajectories.
//!
//! This module defines the observation records the chart is built from and the
//! filtered [`Dataset`](dataset::Dataset) every downstream stage consumes.

pub mod dataset;
pub mod domain;

pub use dataset::Dataset;
pub use domain::{Observation, RawRecord};
