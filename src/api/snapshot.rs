use serde::{Deserialize, Serialize};

use crate::core::{PlacedPoint, Viewport};
use crate::data::AggregatedPoint;
use crate::error::ChartResult;
use crate::interaction::{HoverState, SelectionState};
use crate::render::Renderer;

use super::ChartEngine;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub year_domain: (f64, f64),
    pub count_domain: (f64, f64),
    pub series: Vec<AggregatedPoint>,
    pub placed: Vec<PlacedPoint>,
    pub hover: HoverState,
    pub selection: SelectionState,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            viewport: self.config().viewport(),
            year_domain: self.year_scale().linear().domain(),
            count_domain: self.count_scale().linear().domain(),
            series: self.series().points().to_vec(),
            placed: self.placed_points().to_vec(),
            hover: self.hover(),
            selection: self.selection(),
        }
    }

    /// Pretty JSON rendering of the snapshot; identical engine state yields
    /// byte-identical output.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }
}
