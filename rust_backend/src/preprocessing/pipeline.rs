use log::info;
use rand::Rng;
use std::path::Path;

use crate::api::types::ChartSpec;
use crate::config::ChartConfig;
use crate::core::Dataset;
use crate::error::TrajectoryResult;
use crate::io::loaders::DatasetLoader;
use crate::services::chart::assemble_chart;
use crate::services::colors::ColorAssignment;
use crate::services::frames::FrameBuilder;
use crate::services::reference::ReferenceCurveGenerator;
use crate::services::series::SeriesIndex;

/// Result of a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub chart: ChartSpec,
    pub total_observations: usize,
    pub dropped_rows: usize,
    pub region_count: usize,
}

/// Main chart pipeline
#[derive(Debug, Clone, Default)]
pub struct TrajectoryPipeline {
    config: ChartConfig,
}

impl TrajectoryPipeline {
    /// Create a new pipeline with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline with custom configuration
    pub fn with_config(config: ChartConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Load a case table from CSV and build its chart
    ///
    /// # Arguments
    /// * `csv_path` - Path to the per-region case CSV
    /// * `rng` - Random source for region colours
    pub fn process<R: Rng + ?Sized>(&self, csv_path: &Path, rng: &mut R) -> TrajectoryResult<PipelineResult> {
        // Step 1: Reject bad settings before touching the file
        self.config.validate()?;

        // Step 2: Load and filter
        let dataset = DatasetLoader::load_from_csv(csv_path, &self.config.dataset)?;
        self.process_dataset(&dataset, rng)
    }

    /// Same as [`process`](Self::process) for CSV text
    pub fn process_csv_str<R: Rng + ?Sized>(&self, content: &str, rng: &mut R) -> TrajectoryResult<PipelineResult> {
        self.config.validate()?;
        let dataset = DatasetLoader::load_from_str(content, &self.config.dataset)?;
        self.process_dataset(&dataset, rng)
    }

    /// Build the chart for an already loaded dataset
    pub fn process_dataset<R: Rng + ?Sized>(&self, dataset: &Dataset, rng: &mut R) -> TrajectoryResult<PipelineResult> {
        // Step 3: Validate settings, also for datasets handed in directly
        self.config.validate()?;

        // Step 4: Dates and regions
        let index = SeriesIndex::extract(dataset);
        info!(
            "Extracted {} dates and {} regions",
            index.dates().len(),
            index.regions().len()
        );

        // Step 5: Colours, drawn once
        let colors = ColorAssignment::assign(index.regions(), rng);

        // Step 6: Frames
        let builder = FrameBuilder::new(dataset, &index, &colors, &self.config.dataset.date_format);
        let initial_traces = builder.initial_traces();
        let frames = builder.build_frames();
        info!("Built {} animation frames", frames.len());

        // Step 7: Reference curves
        let generator = ReferenceCurveGenerator::from_settings(&self.config.reference);
        let reference_curves =
            generator.generate_all(&self.config.reference.curves, dataset.max_weekly_cases())?;
        info!("Generated {} reference curves", reference_curves.len());

        // Step 8: Assemble
        Ok(PipelineResult {
            chart: assemble_chart(initial_traces, frames, reference_curves),
            total_observations: dataset.len(),
            dropped_rows: dataset.dropped_rows(),
            region_count: index.regions().len(),
        })
    }
}
