use serde::{Deserialize, Serialize};

use crate::data::IncidentSeries;

use super::{CountScale, YearScale};

/// Aggregated point placed in pixel space, keyed by its year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedPoint {
    pub year: i32,
    pub count: u32,
    pub x: f64,
    pub y: f64,
}

/// Projected straight segment between two consecutive placed points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Projects the series through both scales, preserving ascending-year order.
///
/// Deterministic and side-effect free so rendering, interaction hit-testing,
/// and tests consume the exact same geometry.
#[must_use]
pub fn project_series(
    series: &IncidentSeries,
    year_scale: YearScale,
    count_scale: CountScale,
) -> Vec<PlacedPoint> {
    series
        .points()
        .iter()
        .map(|point| PlacedPoint {
            year: point.year,
            count: point.count,
            x: year_scale.year_to_pixel(point.year),
            y: count_scale.count_to_pixel(point.count),
        })
        .collect()
}

/// Connects consecutive placed points with straight segments, no smoothing.
#[must_use]
pub fn line_segments_between(placed: &[PlacedPoint]) -> Vec<LineSegment> {
    if placed.len() < 2 {
        return Vec::new();
    }

    placed
        .windows(2)
        .map(|pair| LineSegment {
            x1: pair[0].x,
            y1: pair[0].y,
            x2: pair[1].x,
            y2: pair[1].y,
        })
        .collect()
}
