//! Chart-ready data transfer types.
//!
//! A [`ChartSpec`] is built once per dataset load and never mutated afterwards.
//! The renderer looks frames up by the label on each [`SliderStep`], so
//! `slider_steps[i].frame == frames[i].name` holds for every spec produced by
//! [`crate::services::chart::assemble_chart`].

use serde::{Serialize, Serializer};
use std::fmt;

// =========================================================
// Colours
// =========================================================

/// An `rgba(r,g,b,a)` colour.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self { r, g, b, alpha }
    }

    /// Same channels, different opacity.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.alpha)
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Line and marker colour of one region, shared by every frame.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct RegionColors {
    /// Semi-transparent, the trail line
    pub line: Rgba,
    /// Opaque, the markers
    pub marker: Rgba,
}

// =========================================================
// Region Traces and Frames
// =========================================================

/// One region's path as of a given frame.
///
/// `xs`, `ys` and `hover_dates` hold one entry per observation in date order.
/// `texts` and `opacities` match them in length, with only the last point
/// labelled and opaque. A region with no observations yet keeps empty point
/// arrays and a single placeholder label/opacity entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionTrace {
    pub region: String,
    /// Cumulative cases
    pub xs: Vec<f64>,
    /// Trailing-week new cases
    pub ys: Vec<f64>,
    pub texts: Vec<String>,
    pub opacities: Vec<u8>,
    pub hover_dates: Vec<String>,
    pub colors: RegionColors,
}

impl RegionTrace {
    /// Number of observations on the path.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// The highlighted, most recent point.
    pub fn current_point(&self) -> Option<(f64, f64)> {
        Some((*self.xs.last()?, *self.ys.last()?))
    }
}

/// One animation step, named by the label of its last date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceFrame {
    pub name: String,
    /// One trace per region, in region-list order
    pub traces: Vec<RegionTrace>,
}

/// Slider position pointing at a frame by name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderStep {
    pub label: String,
    pub frame: String,
}

// =========================================================
// Reference Curves
// =========================================================

/// A constant-doubling-time growth curve drawn behind the regions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceCurve {
    pub doubling_time_days: f64,
    pub name: String,
    /// Cumulative sum of the synthetic daily series
    pub xs: Vec<f64>,
    /// Trailing-week sum of the synthetic daily series
    pub ys: Vec<f64>,
    /// Where the curve's text label sits; absent for an empty curve
    pub label_point: Option<(f64, f64)>,
    /// Shown by default, otherwise legend-toggle only
    pub visible: bool,
}

impl ReferenceCurve {
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

// =========================================================
// Chart Specification
// =========================================================

/// Everything the renderer needs for the animated trajectory chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSpec {
    /// Starting state, identical in construction to the first frame
    pub initial_traces: Vec<RegionTrace>,
    pub frames: Vec<TraceFrame>,
    pub slider_steps: Vec<SliderStep>,
    pub reference_curves: Vec<ReferenceCurve>,
}

impl ChartSpec {
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Look a frame up by name, as the renderer does for a slider step.
    pub fn frame(&self, name: &str) -> Option<&TraceFrame> {
        self.frames.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_display() {
        let c = Rgba::new(12, 200, 3, 0.5);
        assert_eq!(c.to_string(), "rgba(12,200,3,0.5)");
        assert_eq!(c.with_alpha(1.0).to_string(), "rgba(12,200,3,1)");
    }

    #[test]
    fn test_rgba_serializes_as_string() {
        let c = Rgba::new(1, 2, 3, 1.0);
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"rgba(1,2,3,1)\"");
    }

    #[test]
    fn test_current_point_of_empty_trace() {
        let colors = RegionColors {
            line: Rgba::new(0, 0, 0, 0.5),
            marker: Rgba::new(0, 0, 0, 1.0),
        };
        let trace = RegionTrace {
            region: "A".to_string(),
            xs: vec![],
            ys: vec![],
            texts: vec!["A".to_string()],
            opacities: vec![1],
            hover_dates: vec![],
            colors,
        };
        assert!(trace.is_empty());
        assert_eq!(trace.current_point(), None);
    }
}
