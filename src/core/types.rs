use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Full drawing-surface size in pixels, margins included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Fixed margins around the plot interior, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(50.0, 30.0, 60.0, 70.0)
    }
}

/// Margin-adjusted interior region all chart coordinates target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn from_viewport(viewport: Viewport, margin: Margin) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        margin.validate()?;

        let width = f64::from(viewport.width) - margin.left - margin.right;
        let height = f64::from(viewport.height) - margin.top - margin.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidData(
                "margins leave no plot interior".to_owned(),
            ));
        }

        Ok(Self {
            left: margin.left,
            top: margin.top,
            width,
            height,
        })
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        self.left + self.width / 2.0
    }

    #[must_use]
    pub fn center_y(self) -> f64 {
        self.top + self.height / 2.0
    }
}
