//! Chart configuration file support.
//!
//! Reads presentation and dataset settings from a TOML file. Every field has a
//! default, so an empty file (or no file at all) yields the stock district
//! trajectory chart.
//!
//! ```toml
//! [dataset]
//! region_column = "district"
//! date_format = "%d/%m/%Y"
//!
//! [[reference.curves]]
//! doubling_time_days = 3.0
//! extension = 0.0
//! label_offset = [0.0, 200.0]
//! visible = true
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{TrajectoryError, TrajectoryResult};

/// Top-level chart configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub layout: LayoutSettings,
    #[serde(default)]
    pub animation: AnimationSettings,
    #[serde(default)]
    pub reference: ReferenceSettings,
}

/// Column names and date format of the input table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_region_column")]
    pub region_column: String,
    #[serde(default = "default_date_column")]
    pub date_column: String,
    #[serde(default = "default_cumulative_column")]
    pub cumulative_column: String,
    #[serde(default = "default_weekly_column")]
    pub weekly_column: String,
    /// chrono format string, also used for frame and slider labels
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

/// Static chart styling handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSettings {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_x_axis_title")]
    pub x_axis_title: String,
    #[serde(default = "default_y_axis_title")]
    pub y_axis_title: String,
    /// Display range of both log axes, in decades
    #[serde(default = "default_axis_range")]
    pub axis_range: [f64; 2],
    #[serde(default = "default_legend_title")]
    pub legend_title: String,
    #[serde(default)]
    pub margin: MarginSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginSettings {
    #[serde(default = "default_margin_side")]
    pub l: u32,
    #[serde(default = "default_margin_right")]
    pub r: u32,
    #[serde(default = "default_margin_side")]
    pub b: u32,
    #[serde(default = "default_margin_side")]
    pub t: u32,
    #[serde(default = "default_margin_pad")]
    pub pad: u32,
}

/// Play/pause and slider timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationSettings {
    #[serde(default = "default_play_frame_duration_ms")]
    pub play_frame_duration_ms: f64,
    #[serde(default = "default_transition_ms")]
    pub play_transition_ms: f64,
    #[serde(default = "default_play_easing")]
    pub play_easing: String,
    #[serde(default = "default_transition_ms")]
    pub slider_transition_ms: f64,
    #[serde(default = "default_slider_easing")]
    pub slider_easing: String,
    #[serde(default = "default_transition_ms")]
    pub step_frame_duration_ms: f64,
}

/// Reference curve generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSettings {
    /// Daily cases on day zero of every synthetic series
    #[serde(default = "default_initial_daily_cases")]
    pub initial_daily_cases: f64,
    /// Upper bound on generated days, guards very long doubling times
    #[serde(default = "default_max_days")]
    pub max_days: usize,
    #[serde(default = "default_curves")]
    pub curves: Vec<ReferenceCurveSettings>,
}

/// One constant-doubling-time reference curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceCurveSettings {
    pub doubling_time_days: f64,
    /// Added to the data's maximum weekly cases to get the stop threshold
    #[serde(default)]
    pub extension: f64,
    /// (dx, dy) nudge applied to the label point
    #[serde(default)]
    pub label_offset: [f64; 2],
    #[serde(default)]
    pub visible: bool,
}

impl ReferenceCurveSettings {
    pub fn new(doubling_time_days: f64, extension: f64, label_offset: [f64; 2], visible: bool) -> Self {
        Self {
            doubling_time_days,
            extension,
            label_offset,
            visible,
        }
    }
}

fn default_region_column() -> String {
    "district".to_string()
}

fn default_date_column() -> String {
    "case_notification_date".to_string()
}

fn default_cumulative_column() -> String {
    "cumulative_cases".to_string()
}

fn default_weekly_column() -> String {
    "cases_in_last_7_days".to_string()
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

fn default_title() -> String {
    "Trajectory of Districtwise COVID-19 Confirmed Cases".to_string()
}

fn default_x_axis_title() -> String {
    "Total Confirmed Cases".to_string()
}

fn default_y_axis_title() -> String {
    "New Confirmed Cases (in the Past Week)".to_string()
}

fn default_axis_range() -> [f64; 2] {
    [0.0, 5.0]
}

fn default_legend_title() -> String {
    "Districts(Double click to isolate one)".to_string()
}

fn default_margin_side() -> u32 {
    100
}

fn default_margin_right() -> u32 {
    200
}

fn default_margin_pad() -> u32 {
    20
}

fn default_play_frame_duration_ms() -> f64 {
    500.0 / 3.0
}

fn default_transition_ms() -> f64 {
    300.0
}

fn default_play_easing() -> String {
    "quadratic-in-out".to_string()
}

fn default_slider_easing() -> String {
    "cubic-in-out".to_string()
}

fn default_initial_daily_cases() -> f64 {
    0.01
}

fn default_max_days() -> usize {
    10_000
}

fn default_curves() -> Vec<ReferenceCurveSettings> {
    vec![
        ReferenceCurveSettings::new(2.0, -500.0, [0.0, 200.0], true),
        ReferenceCurveSettings::new(4.0, 100.0, [0.0, 200.0], false),
        ReferenceCurveSettings::new(8.0, 500.0, [2000.0, 2000.0], false),
    ]
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            region_column: default_region_column(),
            date_column: default_date_column(),
            cumulative_column: default_cumulative_column(),
            weekly_column: default_weekly_column(),
            date_format: default_date_format(),
        }
    }
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            x_axis_title: default_x_axis_title(),
            y_axis_title: default_y_axis_title(),
            axis_range: default_axis_range(),
            legend_title: default_legend_title(),
            margin: MarginSettings::default(),
        }
    }
}

impl Default for MarginSettings {
    fn default() -> Self {
        Self {
            l: default_margin_side(),
            r: default_margin_right(),
            b: default_margin_side(),
            t: default_margin_side(),
            pad: default_margin_pad(),
        }
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            play_frame_duration_ms: default_play_frame_duration_ms(),
            play_transition_ms: default_transition_ms(),
            play_easing: default_play_easing(),
            slider_transition_ms: default_transition_ms(),
            slider_easing: default_slider_easing(),
            step_frame_duration_ms: default_transition_ms(),
        }
    }
}

impl Default for ReferenceSettings {
    fn default() -> Self {
        Self {
            initial_daily_cases: default_initial_daily_cases(),
            max_days: default_max_days(),
            curves: default_curves(),
        }
    }
}

impl ChartConfig {
    /// Load chart configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(ChartConfig)` if the file was read, parsed and validated
    /// * `Err(TrajectoryError::Configuration)` otherwise
    pub fn from_file<P: AsRef<Path>>(path: P) -> TrajectoryResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            TrajectoryError::configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> TrajectoryResult<Self> {
        let deserializer = toml::Deserializer::new(content);
        let config: ChartConfig = serde_path_to_error::deserialize(deserializer).map_err(|e| {
            TrajectoryError::configuration(format!("Failed to parse config at '{}': {}", e.path(), e.inner()))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check invariants serde cannot express.
    pub fn validate(&self) -> TrajectoryResult<()> {
        let columns = [
            ("region_column", &self.dataset.region_column),
            ("date_column", &self.dataset.date_column),
            ("cumulative_column", &self.dataset.cumulative_column),
            ("weekly_column", &self.dataset.weekly_column),
            ("date_format", &self.dataset.date_format),
        ];
        for (name, value) in columns {
            if value.trim().is_empty() {
                return Err(TrajectoryError::configuration(format!(
                    "dataset.{} must not be empty",
                    name
                )));
            }
        }

        for curve in &self.reference.curves {
            if !curve.doubling_time_days.is_finite() || curve.doubling_time_days <= 0.0 {
                return Err(TrajectoryError::InvalidDoublingTime {
                    days: curve.doubling_time_days,
                });
            }
        }

        let initial = self.reference.initial_daily_cases;
        if !initial.is_finite() || initial <= 0.0 {
            return Err(TrajectoryError::configuration(format!(
                "reference.initial_daily_cases must be > 0, got {}",
                initial
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = ChartConfig::from_toml_str("").unwrap();
        assert_eq!(config, ChartConfig::default());
        assert_eq!(config.dataset.date_format, "%d/%m/%Y");
        assert_eq!(config.reference.curves.len(), 3);
    }

    #[test]
    fn test_default_reference_curves() {
        let curves = ChartConfig::default().reference.curves;
        let days: Vec<f64> = curves.iter().map(|c| c.doubling_time_days).collect();
        assert_eq!(days, vec![2.0, 4.0, 8.0]);
        let extensions: Vec<f64> = curves.iter().map(|c| c.extension).collect();
        assert_eq!(extensions, vec![-500.0, 100.0, 500.0]);
        assert_eq!(curves.iter().filter(|c| c.visible).count(), 1);
        assert!(curves[0].visible);
        assert_eq!(curves[2].label_offset, [2000.0, 2000.0]);
    }

    #[test]
    fn test_partial_override() {
        let toml = r#"
            [dataset]
            region_column = "county"

            [[reference.curves]]
            doubling_time_days = 3.0
            visible = true
        "#;
        let config = ChartConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.dataset.region_column, "county");
        assert_eq!(config.dataset.date_column, "case_notification_date");
        assert_eq!(config.reference.curves.len(), 1);
        assert_eq!(config.reference.curves[0].extension, 0.0);
        assert_eq!(config.reference.initial_daily_cases, 0.01);
    }

    #[test]
    fn test_non_positive_doubling_time_rejected() {
        let toml = r#"
            [[reference.curves]]
            doubling_time_days = 0.0
        "#;
        let err = ChartConfig::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, TrajectoryError::InvalidDoublingTime { days } if days == 0.0));
    }

    #[test]
    fn test_type_error_reports_path() {
        let toml = r#"
            [layout]
            axis_range = "wide"
        "#;
        let err = ChartConfig::from_toml_str(toml).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("axis_range"), "unexpected message: {}", msg);
    }

    #[test]
    fn test_empty_column_rejected() {
        let toml = r#"
            [dataset]
            weekly_column = " "
        "#;
        let err = ChartConfig::from_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("weekly_column"));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[layout]\ntitle = \"Counties\"").unwrap();
        let config = ChartConfig::from_file(file.path()).unwrap();
        assert_eq!(config.layout.title, "Counties");
    }

    #[test]
    fn test_missing_file() {
        let err = ChartConfig::from_file("/nonexistent/chart.toml").unwrap_err();
        assert!(matches!(err, TrajectoryError::Configuration { .. }));
    }
}
