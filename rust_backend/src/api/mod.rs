//! # API Module
//!
//! The data handed to the rendering collaborator.
//!
//! ## Architecture
//!
//! - [`types`]: the chart-ready [`ChartSpec`] and its parts (frames, traces,
//!   slider steps, reference curves, colours)
//! - [`figure`]: conversion of a `ChartSpec` into a Plotly figure document
//!
//! ## Design Principles
//!
//! 1. **Primitives Only**: numbers are `f64`, dates are already-formatted labels
//! 2. **Index-aligned**: every per-point array of a trace has one entry per observation
//! 3. **Serializable**: all types derive `Serialize` so they can be shipped as JSON

pub mod figure;
pub mod types;

pub use figure::{build_figure, Figure};
pub use types::{
    ChartSpec, ReferenceCurve, RegionColors, RegionTrace, Rgba, SliderStep, TraceFrame,
};
