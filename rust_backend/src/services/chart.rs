//! Chart assembly.

use crate::api::types::{ChartSpec, ReferenceCurve, RegionTrace, SliderStep, TraceFrame};

/// One slider step per frame, labelled and targeted by the frame's name.
pub fn slider_steps(frames: &[TraceFrame]) -> Vec<SliderStep> {
    frames
        .iter()
        .map(|frame| SliderStep {
            label: frame.name.clone(),
            frame: frame.name.clone(),
        })
        .collect()
}

/// Merge the pieces built by the other services into one [`ChartSpec`].
pub fn assemble_chart(
    initial_traces: Vec<RegionTrace>,
    frames: Vec<TraceFrame>,
    reference_curves: Vec<ReferenceCurve>,
) -> ChartSpec {
    let slider_steps = slider_steps(&frames);
    ChartSpec {
        initial_traces,
        frames,
        slider_steps,
        reference_curves,
    }
}
