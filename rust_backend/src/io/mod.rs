//! Input/output for the trajectory chart.
//!
//! - [`loaders`]: case table on disk (or in memory) to a filtered [`Dataset`](crate::core::Dataset)
//! - [`export`]: figure document to JSON or a standalone HTML page

pub mod export;
pub mod loaders;

pub use export::{render_html, render_json, write_figure, ExportFormat};
pub use loaders::DatasetLoader;
