use serde::{Deserialize, Serialize};

use crate::core::{Margin, PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::InteractionConfig;

/// Public engine bootstrap configuration.
///
/// `width` and `height` size the plot interior; the drawing surface adds the
/// margins around it. The type is serializable so host applications can
/// persist/load chart setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub margin: Margin,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_x_axis_label")]
    pub x_axis_label: String,
    #[serde(default = "default_y_axis_label")]
    pub y_axis_label: String,
    #[serde(default)]
    pub interaction: InteractionConfig,
}

impl ChartEngineConfig {
    /// Creates a config with the given plot-interior size and default
    /// margins and labels.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            margin: Margin::default(),
            title: default_title(),
            x_axis_label: default_x_axis_label(),
            y_axis_label: default_y_axis_label(),
            interaction: InteractionConfig::default(),
        }
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_axis_labels(
        mut self,
        x_axis_label: impl Into<String>,
        y_axis_label: impl Into<String>,
    ) -> Self {
        self.x_axis_label = x_axis_label.into();
        self.y_axis_label = y_axis_label.into();
        self
    }

    #[must_use]
    pub fn with_interaction(mut self, interaction: InteractionConfig) -> Self {
        self.interaction = interaction;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        self.margin.validate()?;
        if self.title.is_empty() || self.x_axis_label.is_empty() || self.y_axis_label.is_empty() {
            return Err(ChartError::InvalidData(
                "chart labels must not be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Full surface size: plot interior plus margins.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        let width = f64::from(self.width) + self.margin.left + self.margin.right;
        let height = f64::from(self.height) + self.margin.top + self.margin.bottom;
        Viewport::new(width.round() as u32, height.round() as u32)
    }

    /// Margin-adjusted interior region scale ranges target.
    pub fn plot_area(&self) -> ChartResult<PlotArea> {
        PlotArea::from_viewport(self.viewport(), self.margin)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        // 900x400 surface with the default margins.
        Self::new(800, 290)
    }
}

fn default_title() -> String {
    "Annual Aircraft Incidents".to_owned()
}

fn default_x_axis_label() -> String {
    "Year".to_owned()
}

fn default_y_axis_label() -> String {
    "Number of Incidents".to_owned()
}
