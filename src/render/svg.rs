use std::fmt::Write as _;

use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer, TextHAlign};

use super::primitives::Color;

/// String backend emitting one standalone SVG document per frame.
///
/// Each render pass replaces the previous document, mirroring the frame
/// contract: the scene is rebuilt, never appended to.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The SVG document produced by the most recent render pass.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.document = document_for(frame);
        Ok(())
    }
}

fn document_for(frame: &RenderFrame) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        frame.viewport.width, frame.viewport.height
    );

    for line in &frame.lines {
        let _ = writeln!(
            svg,
            r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-opacity="{}" stroke-width="{}"/>"#,
            line.x1,
            line.y1,
            line.x2,
            line.y2,
            css_rgb(line.color),
            fmt_number(line.color.alpha),
            fmt_number(line.stroke_width),
        );
    }

    for rect in &frame.rects {
        let stroke = match rect.border_color {
            Some(color) => format!(
                r#" stroke="{}" stroke-width="{}""#,
                css_rgb(color),
                fmt_number(rect.border_width)
            ),
            None => String::new(),
        };
        let _ = writeln!(
            svg,
            r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" fill-opacity="{}"{}/>"#,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            css_rgb(rect.fill),
            fmt_number(rect.fill.alpha),
            stroke,
        );
    }

    for circle in &frame.circles {
        let stroke = match circle.outline_color {
            Some(color) => format!(
                r#" stroke="{}" stroke-width="{}""#,
                css_rgb(color),
                fmt_number(circle.outline_width)
            ),
            None => String::new(),
        };
        let _ = writeln!(
            svg,
            r#"  <circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}" fill-opacity="{}"{}/>"#,
            circle.x,
            circle.y,
            fmt_number(circle.radius),
            css_rgb(circle.fill),
            fmt_number(circle.fill.alpha),
            stroke,
        );
    }

    for text in &frame.texts {
        let anchor = match text.h_align {
            TextHAlign::Left => "start",
            TextHAlign::Center => "middle",
            TextHAlign::Right => "end",
        };
        let transform = if text.angle_degrees != 0.0 {
            format!(
                r#" transform="rotate({} {:.2} {:.2})""#,
                fmt_number(text.angle_degrees),
                text.x,
                text.y
            )
        } else {
            String::new()
        };
        let _ = writeln!(
            svg,
            r#"  <text x="{:.2}" y="{:.2}" font-size="{}" fill="{}" text-anchor="{}"{}>{}</text>"#,
            text.x,
            text.y,
            fmt_number(text.font_size_px),
            css_rgb(text.color),
            anchor,
            transform,
            escape_text(&text.text),
        );
    }

    svg.push_str("</svg>\n");
    svg
}

fn css_rgb(color: Color) -> String {
    format!(
        "rgb({},{},{})",
        channel_to_u8(color.red),
        channel_to_u8(color.green),
        channel_to_u8(color.blue)
    )
}

fn channel_to_u8(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

fn fmt_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::{css_rgb, escape_text, fmt_number};
    use crate::render::Color;

    #[test]
    fn css_rgb_converts_normalized_channels() {
        assert_eq!(css_rgb(Color::rgb(1.0, 1.0, 1.0)), "rgb(255,255,255)");
        assert_eq!(css_rgb(Color::rgb(0.0, 0.0, 0.0)), "rgb(0,0,0)");
    }

    #[test]
    fn fmt_number_drops_trailing_zero_fraction() {
        assert_eq!(fmt_number(2.0), "2");
        assert_eq!(fmt_number(1.5), "1.5");
    }

    #[test]
    fn escape_text_handles_markup_characters() {
        assert_eq!(escape_text("a < b & c > d"), "a &lt; b &amp; c &gt; d");
    }
}
