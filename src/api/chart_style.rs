use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Visual constants consumed by the frame builder.
///
/// Defaults follow the reference look: a 2 px steelblue line, steelblue point
/// markers, an orange highlight marker with a black outline, and a white
/// tooltip box with a 1 px black border and 5 px padding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub line_color: Color,
    pub line_width: f64,
    pub marker_radius: f64,
    pub marker_color: Color,
    pub highlight_radius: f64,
    pub highlight_color: Color,
    pub highlight_outline_width: f64,
    pub highlight_outline_color: Color,
    pub axis_color: Color,
    pub axis_width: f64,
    pub tick_length_px: f64,
    pub tick_label_font_px: f64,
    pub axis_label_font_px: f64,
    pub title_font_px: f64,
    pub text_color: Color,
    pub tooltip_fill: Color,
    pub tooltip_border_color: Color,
    pub tooltip_border_width: f64,
    pub tooltip_padding_px: f64,
    pub tooltip_font_px: f64,
}

impl ChartStyle {
    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("line_width", self.line_width),
            ("marker_radius", self.marker_radius),
            ("highlight_radius", self.highlight_radius),
            ("highlight_outline_width", self.highlight_outline_width),
            ("axis_width", self.axis_width),
            ("tick_length_px", self.tick_length_px),
            ("tick_label_font_px", self.tick_label_font_px),
            ("axis_label_font_px", self.axis_label_font_px),
            ("title_font_px", self.title_font_px),
            ("tooltip_border_width", self.tooltip_border_width),
            ("tooltip_font_px", self.tooltip_font_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style field `{name}` must be finite and > 0"
                )));
            }
        }
        if !self.tooltip_padding_px.is_finite() || self.tooltip_padding_px < 0.0 {
            return Err(ChartError::InvalidData(
                "style field `tooltip_padding_px` must be finite and >= 0".to_owned(),
            ));
        }

        for color in [
            self.line_color,
            self.marker_color,
            self.highlight_color,
            self.highlight_outline_color,
            self.axis_color,
            self.text_color,
            self.tooltip_fill,
            self.tooltip_border_color,
        ] {
            color.validate()?;
        }
        Ok(())
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        let steelblue = Color::rgb(70.0 / 255.0, 130.0 / 255.0, 180.0 / 255.0);
        let black = Color::rgb(0.0, 0.0, 0.0);
        Self {
            line_color: steelblue,
            line_width: 2.0,
            marker_radius: 4.0,
            marker_color: steelblue,
            highlight_radius: 6.5,
            highlight_color: Color::rgb(1.0, 165.0 / 255.0, 0.0),
            highlight_outline_width: 1.5,
            highlight_outline_color: black,
            axis_color: black,
            axis_width: 1.0,
            tick_length_px: 6.0,
            tick_label_font_px: 10.0,
            axis_label_font_px: 12.0,
            title_font_px: 16.0,
            text_color: black,
            tooltip_fill: Color::rgb(1.0, 1.0, 1.0),
            tooltip_border_color: black,
            tooltip_border_width: 1.0,
            tooltip_padding_px: 5.0,
            tooltip_font_px: 11.0,
        }
    }
}
