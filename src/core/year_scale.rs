use serde::{Deserialize, Serialize};

use crate::data::IncidentSeries;
use crate::error::ChartResult;

use super::LinearScale;

/// Horizontal axis: year domain fitted to the series extent.
///
/// A single distinct year collapses the domain; the underlying scale then
/// places the point at the range midpoint instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearScale {
    scale: LinearScale,
}

impl YearScale {
    /// Fits the domain to `[min year, max year]` of the series over the given
    /// pixel range (left to right). An empty series fits a degenerate
    /// `[0, 0]` domain.
    pub fn fit(series: &IncidentSeries, range: (f64, f64)) -> ChartResult<Self> {
        let (domain_min, domain_max) = match series.year_extent() {
            Some((min_year, max_year)) => (f64::from(min_year), f64::from(max_year)),
            None => (0.0, 0.0),
        };
        let scale = LinearScale::new(domain_min, domain_max, range.0, range.1)?;
        Ok(Self { scale })
    }

    #[must_use]
    pub fn year_to_pixel(self, year: i32) -> f64 {
        self.scale.map(f64::from(year))
    }

    #[must_use]
    pub fn linear(self) -> LinearScale {
        self.scale
    }

    /// Integer year ticks, formatted as plain integers by the frame builder.
    #[must_use]
    pub fn ticks(self, target_count: usize) -> Vec<i64> {
        self.scale.integer_ticks(target_count)
    }
}
