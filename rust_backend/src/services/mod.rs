//! Service layer: the stages that turn a [`Dataset`](crate::core::Dataset) into
//! a [`ChartSpec`](crate::api::ChartSpec).
//!
//! - [`series`]: sorted dates and first-seen regions
//! - [`colors`]: per-region colour draw
//! - [`frames`]: initial traces and animation frames
//! - [`reference`]: constant-doubling-time curves
//! - [`chart`]: slider steps and final assembly

pub mod chart;
pub mod colors;
pub mod frames;
pub mod reference;
pub mod series;

pub use chart::{assemble_chart, slider_steps};
pub use colors::ColorAssignment;
pub use frames::FrameBuilder;
pub use reference::ReferenceCurveGenerator;
pub use series::{RegionList, SeriesIndex};
