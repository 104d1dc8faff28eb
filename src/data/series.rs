use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::NormalizedRecord;

/// Per-year incident count. `count` is at least 1: years absent from the
/// input simply have no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedPoint {
    pub year: i32,
    pub count: u32,
}

/// The ordered per-year counts driving all downstream rendering.
///
/// Years are unique and strictly ascending. The series is built once per data
/// load and has no mutating methods; re-deriving it means reloading the
/// source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentSeries {
    points: Vec<AggregatedPoint>,
}

impl IncidentSeries {
    /// Groups records by exact year and counts group sizes.
    ///
    /// Grouping through a `BTreeMap` makes ordering and determinism
    /// structural: any permutation of the input yields the same series.
    /// Empty input yields an empty series, which renders an empty chart.
    #[must_use]
    pub fn from_records(records: &[NormalizedRecord]) -> Self {
        let mut counts: BTreeMap<i32, u32> = BTreeMap::new();
        for record in records {
            *counts.entry(record.year).or_insert(0) += 1;
        }

        let points: Vec<AggregatedPoint> = counts
            .into_iter()
            .map(|(year, count)| AggregatedPoint { year, count })
            .collect();
        debug!(
            records = records.len(),
            distinct_years = points.len(),
            "aggregated incident series"
        );
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[AggregatedPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `(min year, max year)` across the series, `None` when empty.
    #[must_use]
    pub fn year_extent(&self) -> Option<(i32, i32)> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some((first.year, last.year)),
            _ => None,
        }
    }

    /// Largest per-year count, 0 when the series is empty.
    #[must_use]
    pub fn max_count(&self) -> u32 {
        self.points.iter().map(|point| point.count).max().unwrap_or(0)
    }

    /// Looks up the aggregated point for an exact year.
    #[must_use]
    pub fn find_year(&self, year: i32) -> Option<AggregatedPoint> {
        self.points
            .binary_search_by_key(&year, |point| point.year)
            .ok()
            .map(|index| self.points[index])
    }

    /// Distinct years in ascending order, suitable for a selection control.
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        self.points.iter().map(|point| point.year).collect()
    }
}
