use serde::{Deserialize, Serialize};

use crate::data::IncidentSeries;
use crate::error::ChartResult;

use super::LinearScale;

/// Vertical axis: count domain anchored at zero.
///
/// The domain is always `[0, max count]`, never `[min count, max count]`, so
/// line heights compare against a true zero baseline. The pixel range is
/// passed as `(bottom, top)`: larger counts map to smaller pixel rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CountScale {
    scale: LinearScale,
}

impl CountScale {
    /// Fits the domain to `[0, max count]` over the inverted pixel range.
    /// An empty series fits a degenerate `[0, 0]` domain.
    pub fn fit(series: &IncidentSeries, range_bottom_top: (f64, f64)) -> ChartResult<Self> {
        let scale = LinearScale::new(
            0.0,
            f64::from(series.max_count()),
            range_bottom_top.0,
            range_bottom_top.1,
        )?;
        Ok(Self { scale })
    }

    #[must_use]
    pub fn count_to_pixel(self, count: u32) -> f64 {
        self.scale.map(f64::from(count))
    }

    #[must_use]
    pub fn linear(self) -> LinearScale {
        self.scale
    }

    /// Integer count ticks; counts are whole numbers, fractional ticks carry
    /// no meaning here.
    #[must_use]
    pub fn ticks(self, target_count: usize) -> Vec<i64> {
        self.scale.integer_ticks(target_count)
    }
}
