//! # Trajectory Chart Backend
//!
//! Turns a per-region epidemic case table into an animated log-log trajectory
//! chart: cumulative cases against new cases over the trailing week, one curve
//! per region, plus reference curves for constant doubling times.
//!
//! ## Architecture
//!
//! - [`core`]: observation records and the filtered [`core::Dataset`]
//! - [`parsing`]: CSV case table parsing
//! - [`time`]: date parsing and label formatting
//! - [`services`]: series extraction, colours, frame building, reference curves, assembly
//! - [`api`]: the [`api::ChartSpec`] handed to the renderer and its plotly form
//! - [`io`]: dataset loading and figure export
//! - [`preprocessing`]: the end-to-end [`preprocessing::TrajectoryPipeline`]
//! - [`config`]: TOML chart configuration
//!
//! ## Example
//!
//! ```no_run
//! use rand::SeedableRng;
//! use std::path::Path;
//! use trajectory_backend::api::build_figure;
//! use trajectory_backend::preprocessing::TrajectoryPipeline;
//!
//! let pipeline = TrajectoryPipeline::new();
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
//! let result = pipeline.process(Path::new("districts.csv"), &mut rng).unwrap();
//! let figure = build_figure(&result.chart, pipeline.config());
//! ```

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod parsing;
pub mod preprocessing;
pub mod services;
pub mod time;

pub use api::ChartSpec;
pub use config::ChartConfig;
pub use error::{TrajectoryError, TrajectoryResult};
