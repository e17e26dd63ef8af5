//! Per-region colour assignment.
//!
//! Each region gets one random RGB draw, stored and reused for every frame.
//! The random source is a parameter: callers pass a seeded
//! `rand_chacha::ChaCha8Rng` for reproducible output, or `rand::rng()`.

use log::debug;
use rand::Rng;
use std::collections::HashMap;

use crate::api::types::{RegionColors, Rgba};
use crate::services::series::RegionList;

/// Opacity of a region's trail line
pub const LINE_ALPHA: f64 = 0.5;
/// Opacity of a region's markers
pub const MARKER_ALPHA: f64 = 1.0;

/// Colour used for a region that was never assigned one
const FALLBACK_RGB: (u8, u8, u8) = (128, 128, 128);

impl RegionColors {
    /// Line and marker colours sharing one RGB triple.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            line: Rgba::new(r, g, b, LINE_ALPHA),
            marker: Rgba::new(r, g, b, MARKER_ALPHA),
        }
    }
}

/// Immutable region -> colour mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorAssignment {
    colors: HashMap<String, RegionColors>,
}

impl ColorAssignment {
    /// Draw a colour for every region, in list order.
    ///
    /// Two regions may end up with the same colour; nothing downstream relies
    /// on colours being distinct.
    pub fn assign<R: Rng + ?Sized>(regions: &RegionList, rng: &mut R) -> Self {
        let colors = regions
            .iter()
            .map(|region| {
                let (r, g, b) = (rng.random::<u8>(), rng.random::<u8>(), rng.random::<u8>());
                (region.to_string(), RegionColors::from_rgb(r, g, b))
            })
            .collect();
        Self { colors }
    }

    pub fn get(&self, region: &str) -> Option<RegionColors> {
        self.colors.get(region).copied()
    }

    /// Colours for a region, grey if it was not part of the assignment.
    pub fn colors_for(&self, region: &str) -> RegionColors {
        self.get(region).unwrap_or_else(|| {
            debug!("No colour assigned to region '{}', using fallback", region);
            let (r, g, b) = FALLBACK_RGB;
            RegionColors::from_rgb(r, g, b)
        })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn regions(names: &[&str]) -> RegionList {
        names.iter().copied().collect()
    }

    #[test]
    fn test_every_region_gets_colors() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let assignment = ColorAssignment::assign(&regions(&["A", "B", "C"]), &mut rng);
        assert_eq!(assignment.len(), 3);
        for name in ["A", "B", "C"] {
            assert!(assignment.get(name).is_some());
        }
    }

    #[test]
    fn test_line_and_marker_share_rgb() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let assignment = ColorAssignment::assign(&regions(&["A"]), &mut rng);
        let colors = assignment.get("A").unwrap();
        assert_eq!(colors.line.with_alpha(1.0), colors.marker);
        assert_eq!(colors.line.alpha, 0.5);
        assert_eq!(colors.marker.alpha, 1.0);
    }

    #[test]
    fn test_lookup_is_stable() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let assignment = ColorAssignment::assign(&regions(&["A", "B"]), &mut rng);
        let first = assignment.colors_for("B");
        for _ in 0..10 {
            assert_eq!(assignment.colors_for("B"), first);
        }
    }

    #[test]
    fn test_same_seed_same_colors() {
        let list = regions(&["A", "B", "C"]);
        let a = ColorAssignment::assign(&list, &mut ChaCha8Rng::seed_from_u64(42));
        let b = ColorAssignment::assign(&list, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shared_colour_renders() {
        use crate::api::build_figure;
        use crate::config::ChartConfig;
        use crate::core::{Dataset, Observation};
        use crate::services::chart::assemble_chart;
        use crate::services::frames::FrameBuilder;
        use crate::services::series::SeriesIndex;
        use chrono::NaiveDate;

        let shared = RegionColors::from_rgb(40, 90, 160);
        let assignment = ColorAssignment {
            colors: HashMap::from([("A".to_string(), shared), ("B".to_string(), shared)]),
        };
        let day = |d| NaiveDate::from_ymd_opt(2020, 4, d).unwrap();
        let dataset = Dataset::new(vec![
            Observation::new("A", day(1), 1.0, 1.0),
            Observation::new("B", day(1), 2.0, 2.0),
            Observation::new("A", day(2), 3.0, 2.0),
        ]);
        let index = SeriesIndex::extract(&dataset);
        let builder = FrameBuilder::new(&dataset, &index, &assignment, "%d/%m/%Y");
        let frames = builder.build_frames();

        assert_eq!(frames.len(), 2);
        for frame in &frames {
            assert_eq!(frame.traces[0].colors, frame.traces[1].colors);
            assert_eq!(frame.traces[0].region, "A");
            assert_eq!(frame.traces[1].region, "B");
        }

        let chart = assemble_chart(builder.initial_traces(), frames, Vec::new());
        let figure = build_figure(&chart, &ChartConfig::default());
        assert_eq!(figure.data.len(), 2);
        assert_eq!(figure.data[0].name, "A");
        assert_eq!(figure.data[1].name, "B");
        assert_eq!(figure.frames.len(), 2);
    }

    #[test]
    fn test_unknown_region_falls_back() {
        let assignment = ColorAssignment::default();
        let colors = assignment.colors_for("nowhere");
        assert_eq!(colors.marker.to_string(), "rgba(128,128,128,1)");
    }
}
