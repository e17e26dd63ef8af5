//! End-to-end chart pipeline.
//!
//! [`pipeline::TrajectoryPipeline`] runs every stage, from the case table to a
//! finished [`ChartSpec`](crate::api::ChartSpec), in one synchronous pass.

pub mod pipeline;

pub use pipeline::{PipelineResult, TrajectoryPipeline};
