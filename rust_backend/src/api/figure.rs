//! Plotly figure document.
//!
//! Converts a [`ChartSpec`] and the presentation settings of a [`ChartConfig`]
//! into the `{data, layout, frames}` structure plotly.js animates. Region
//! traces come first in `data`, in region order, so each frame's traces line
//! up with them by position; reference curves follow as static traces.

use serde::{Serialize, Serializer};
use serde_json::{json, Value};

use crate::api::types::{ChartSpec, ReferenceCurve, RegionTrace, SliderStep};
use crate::config::{AnimationSettings, ChartConfig, LayoutSettings, MarginSettings};

const REFERENCE_LINE_COLOR: &str = "gray";
const REFERENCE_LINE_WIDTH: f64 = 2.0;

/// Whether a trace is drawn or only listed in the legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    LegendOnly,
}

impl Serialize for Visibility {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Visibility::Shown => serializer.serialize_bool(true),
            Visibility::LegendOnly => serializer.serialize_str("legendonly"),
        }
    }
}

/// Per-point labels, or one label for a text-only trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TraceText {
    PerPoint(Vec<String>),
    Single(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub opacity: Vec<u8>,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<String>,
}

/// A plotly `scatter` trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub mode: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TraceText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customdata: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoverinfo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textposition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legendgroup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<Visibility>,
}

impl ScatterTrace {
    fn new(mode: &str, name: &str, x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            x,
            y,
            mode: mode.to_string(),
            name: name.to_string(),
            text: None,
            customdata: None,
            hovertemplate: None,
            hoverinfo: None,
            marker: None,
            line: None,
            textposition: None,
            legendgroup: None,
            showlegend: None,
            visible: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
    #[serde(rename = "type")]
    pub axis_type: String,
    pub range: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub hovermode: String,
    pub margin: MarginSettings,
    pub updatemenus: Vec<Value>,
    pub sliders: Vec<Value>,
    pub showlegend: bool,
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigureFrame {
    pub name: String,
    pub data: Vec<ScatterTrace>,
}

/// Complete plotly figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<ScatterTrace>,
    pub layout: Layout,
    pub frames: Vec<FigureFrame>,
}

/// Build the plotly figure for a chart.
pub fn build_figure(spec: &ChartSpec, config: &ChartConfig) -> Figure {
    let mut data: Vec<ScatterTrace> = spec.initial_traces.iter().map(region_scatter).collect();
    for curve in &spec.reference_curves {
        data.extend(reference_scatters(curve));
    }

    let frames = spec
        .frames
        .iter()
        .map(|frame| FigureFrame {
            name: frame.name.clone(),
            data: frame.traces.iter().map(region_scatter).collect(),
        })
        .collect();

    Figure {
        data,
        layout: layout(&config.layout, &config.animation, &spec.slider_steps),
        frames,
    }
}

/// Hover text template for one region's points.
pub fn hover_template(region: &str) -> String {
    format!(
        "{}<br> %{{customdata}} <br>Total Confirmed Cases: %{{x}} <br>Weekly Confirmed Cases: %{{y}}<extra></extra>",
        region
    )
}

fn region_scatter(trace: &RegionTrace) -> ScatterTrace {
    let mut scatter = ScatterTrace::new("lines+markers", &trace.region, trace.xs.clone(), trace.ys.clone());
    scatter.text = Some(TraceText::PerPoint(trace.texts.clone()));
    scatter.customdata = Some(trace.hover_dates.clone());
    scatter.hovertemplate = Some(hover_template(&trace.region));
    scatter.marker = Some(Marker {
        opacity: trace.opacities.clone(),
        color: trace.colors.marker.to_string(),
    });
    scatter.line = Some(Line {
        color: trace.colors.line.to_string(),
        width: None,
        dash: None,
    });
    scatter.textposition = Some("bottom right".to_string());
    scatter
}

/// The dotted curve plus, when it has a terminus, its text label.
fn reference_scatters(curve: &ReferenceCurve) -> Vec<ScatterTrace> {
    let group = curve.doubling_time_days.to_string();
    let visible = if curve.visible {
        None
    } else {
        Some(Visibility::LegendOnly)
    };

    let mut line = ScatterTrace::new("lines", &curve.name, curve.xs.clone(), curve.ys.clone());
    line.line = Some(Line {
        color: REFERENCE_LINE_COLOR.to_string(),
        width: Some(REFERENCE_LINE_WIDTH),
        dash: Some("dot".to_string()),
    });
    line.textposition = Some("top right".to_string());
    line.hoverinfo = Some("skip".to_string());
    line.legendgroup = Some(group.clone());
    line.visible = visible;

    let mut scatters = vec![line];
    if let Some((x, y)) = curve.label_point {
        let mut label = ScatterTrace::new("text", &curve.name, vec![x], vec![y]);
        label.text = Some(TraceText::Single(curve.name.clone()));
        label.hoverinfo = Some("skip".to_string());
        label.showlegend = Some(false);
        label.legendgroup = Some(group);
        label.visible = visible;
        scatters.push(label);
    }
    scatters
}

fn layout(settings: &LayoutSettings, animation: &AnimationSettings, steps: &[SliderStep]) -> Layout {
    let axis = |title: &str| Axis {
        title: Title::new(title),
        axis_type: "log".to_string(),
        range: settings.axis_range,
    };

    Layout {
        title: Title::new(&settings.title),
        xaxis: axis(&settings.x_axis_title),
        yaxis: axis(&settings.y_axis_title),
        hovermode: "closest".to_string(),
        margin: settings.margin.clone(),
        updatemenus: vec![play_pause_menu(animation)],
        sliders: vec![slider(animation, steps)],
        showlegend: true,
        legend: Legend {
            title: Title::new(&settings.legend_title),
        },
    }
}

fn play_pause_menu(animation: &AnimationSettings) -> Value {
    json!({
        "buttons": [
            {
                "args": [null, {
                    "frame": {"duration": animation.play_frame_duration_ms, "redraw": true},
                    "fromcurrent": true,
                    "transition": {
                        "duration": animation.play_transition_ms,
                        "easing": animation.play_easing,
                    },
                }],
                "label": "Play",
                "method": "animate",
            },
            {
                "args": [[null], {
                    "frame": {"duration": 0, "redraw": true},
                    "mode": "immediate",
                    "transition": {"duration": 0},
                }],
                "label": "Pause",
                "method": "animate",
            },
        ],
        "direction": "left",
        "pad": {"r": 10, "t": 87},
        "showactive": true,
        "type": "buttons",
        "x": 0.1,
        "xanchor": "right",
        "y": 0,
        "yanchor": "top",
    })
}

fn slider(animation: &AnimationSettings, steps: &[SliderStep]) -> Value {
    let steps: Vec<Value> = steps
        .iter()
        .map(|step| {
            json!({
                "args": [[step.frame], {
                    "frame": {"duration": animation.step_frame_duration_ms, "redraw": false},
                    "mode": "immediate",
                    "transition": {"duration": animation.slider_transition_ms},
                }],
                "label": step.label,
                "method": "animate",
            })
        })
        .collect();

    json!({
        "active": 0,
        "yanchor": "top",
        "xanchor": "left",
        "currentvalue": {
            "font": {"size": 20},
            "prefix": "Date:",
            "visible": true,
            "xanchor": "left",
        },
        "transition": {
            "duration": animation.slider_transition_ms,
            "easing": animation.slider_easing,
        },
        "pad": {"b": 10, "t": 50},
        "len": 0.9,
        "x": 0.1,
        "y": 0,
        "steps": steps,
    })
}
