use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Affine mapping from a data domain interval to a pixel range interval.
///
/// Pure value object owned independently per axis. An inverted range
/// (`range_min > range_max`) is valid and is how the vertical axis maps
/// larger values to smaller pixel rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    pub domain_min: f64,
    pub domain_max: f64,
    pub range_min: f64,
    pub range_max: f64,
}

impl LinearScale {
    pub fn new(
        domain_min: f64,
        domain_max: f64,
        range_min: f64,
        range_max: f64,
    ) -> ChartResult<Self> {
        for (name, value) in [
            ("domain_min", domain_min),
            ("domain_max", domain_max),
            ("range_min", range_min),
            ("range_max", range_max),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "scale bound `{name}` must be finite"
                )));
            }
        }
        if domain_min > domain_max {
            return Err(ChartError::InvalidData(
                "scale domain must be ordered: domain_min <= domain_max".to_owned(),
            ));
        }

        Ok(Self {
            domain_min,
            domain_max,
            range_min,
            range_max,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }

    /// A zero-width domain cannot spread values across the range.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_max == self.domain_min
    }

    /// Maps a domain value to a pixel coordinate.
    ///
    /// With a zero-width domain every value lands on the range midpoint, so a
    /// single-point series draws centered instead of dividing by zero.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain_max - self.domain_min;
        if span == 0.0 {
            return (self.range_min + self.range_max) / 2.0;
        }
        let normalized = (value - self.domain_min) / span;
        self.range_min + normalized * (self.range_max - self.range_min)
    }

    /// Maps a pixel coordinate back to a domain value.
    ///
    /// The degenerate inverse of a zero-width domain is the domain value
    /// itself.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let range_span = self.range_max - self.range_min;
        if range_span == 0.0 || self.is_degenerate() {
            return self.domain_min;
        }
        let normalized = (pixel - self.range_min) / range_span;
        self.domain_min + normalized * (self.domain_max - self.domain_min)
    }

    /// Integer ticks inside the domain on a 1/2/5 step ladder.
    ///
    /// The step is never below 1, so years and counts label as plain
    /// integers. A degenerate domain yields its single value when it sits on
    /// an integer.
    #[must_use]
    pub fn integer_ticks(self, target_count: usize) -> Vec<i64> {
        if target_count == 0 {
            return Vec::new();
        }

        let span = self.domain_max - self.domain_min;
        if span <= 0.0 {
            if self.domain_min.fract() == 0.0 {
                return vec![self.domain_min as i64];
            }
            return Vec::new();
        }

        let raw_step = span / target_count as f64;
        let magnitude = 10_f64.powf(raw_step.log10().floor());
        let mut step = magnitude;
        for multiplier in [1.0, 2.0, 5.0, 10.0] {
            step = magnitude * multiplier;
            if step >= raw_step {
                break;
            }
        }
        let step = step.max(1.0).round() as i64;

        let first = (self.domain_min / step as f64).ceil() as i64 * step;
        let mut ticks = Vec::new();
        let mut tick = first;
        while (tick as f64) <= self.domain_max + 1e-9 {
            ticks.push(tick);
            tick += step;
        }
        ticks
    }
}
