use crate::core::{CountScale, PlacedPoint, PlotArea, YearScale, line_segments_between};
use crate::error::ChartResult;
use crate::interaction::{HoverPayload, HoverState};
use crate::render::{
    CirclePrimitive, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::{ChartEngineConfig, ChartStyle};

const AXIS_YEAR_TARGET_SPACING_PX: f64 = 80.0;
const AXIS_COUNT_TARGET_SPACING_PX: f64 = 45.0;

/// Everything one draw pass consumes, borrowed from the engine.
pub(super) struct FrameInputs<'a> {
    pub config: &'a ChartEngineConfig,
    pub style: &'a ChartStyle,
    pub placed: &'a [PlacedPoint],
    pub year_scale: YearScale,
    pub count_scale: CountScale,
    pub hover: HoverState,
    pub highlight: Option<PlacedPoint>,
}

/// Materializes the full scene: axes, ticks, line path, point markers, the
/// highlight marker, text labels, and the tooltip overlay.
///
/// The frame is rebuilt from scratch each pass and markers come one-per
/// placed point, so re-rendering an unchanged series yields an identical
/// scene with no accumulated elements.
pub(super) fn build_render_frame(inputs: FrameInputs<'_>) -> ChartResult<RenderFrame> {
    let plot = inputs.config.plot_area()?;
    let mut frame = RenderFrame::new(inputs.config.viewport());

    push_axes(&mut frame, inputs.style, plot);
    if !inputs.placed.is_empty() {
        push_axis_ticks(&mut frame, &inputs, plot);
        push_line_path(&mut frame, &inputs);
        push_markers(&mut frame, &inputs);
    }
    push_highlight(&mut frame, &inputs);
    push_labels(&mut frame, &inputs, plot);
    push_tooltip(&mut frame, &inputs);

    frame.validate()?;
    Ok(frame)
}

fn push_axes(frame: &mut RenderFrame, style: &ChartStyle, plot: PlotArea) {
    frame.lines.push(LinePrimitive::new(
        plot.left,
        plot.bottom(),
        plot.right(),
        plot.bottom(),
        style.axis_width,
        style.axis_color,
    ));
    frame.lines.push(LinePrimitive::new(
        plot.left,
        plot.top,
        plot.left,
        plot.bottom(),
        style.axis_width,
        style.axis_color,
    ));
}

fn push_axis_ticks(frame: &mut RenderFrame, inputs: &FrameInputs<'_>, plot: PlotArea) {
    let style = inputs.style;

    let year_target = tick_target_count(plot.width, AXIS_YEAR_TARGET_SPACING_PX);
    for year in inputs.year_scale.ticks(year_target) {
        let x = inputs.year_scale.linear().map(year as f64);
        frame.lines.push(LinePrimitive::new(
            x,
            plot.bottom(),
            x,
            plot.bottom() + style.tick_length_px,
            style.axis_width,
            style.axis_color,
        ));
        frame.texts.push(TextPrimitive::new(
            year.to_string(),
            x,
            plot.bottom() + style.tick_length_px + style.tick_label_font_px,
            style.tick_label_font_px,
            style.text_color,
            TextHAlign::Center,
        ));
    }

    let count_target = tick_target_count(plot.height, AXIS_COUNT_TARGET_SPACING_PX);
    for count in inputs.count_scale.ticks(count_target) {
        let y = inputs.count_scale.linear().map(count as f64);
        frame.lines.push(LinePrimitive::new(
            plot.left - style.tick_length_px,
            y,
            plot.left,
            y,
            style.axis_width,
            style.axis_color,
        ));
        frame.texts.push(TextPrimitive::new(
            count.to_string(),
            plot.left - style.tick_length_px - 3.0,
            y + style.tick_label_font_px * 0.35,
            style.tick_label_font_px,
            style.text_color,
            TextHAlign::Right,
        ));
    }
}

fn push_line_path(frame: &mut RenderFrame, inputs: &FrameInputs<'_>) {
    for segment in line_segments_between(inputs.placed) {
        frame.lines.push(LinePrimitive::new(
            segment.x1,
            segment.y1,
            segment.x2,
            segment.y2,
            inputs.style.line_width,
            inputs.style.line_color,
        ));
    }
}

fn push_markers(frame: &mut RenderFrame, inputs: &FrameInputs<'_>) {
    for point in inputs.placed {
        frame.circles.push(CirclePrimitive::new(
            point.x,
            point.y,
            inputs.style.marker_radius,
            inputs.style.marker_color,
        ));
    }
}

fn push_highlight(frame: &mut RenderFrame, inputs: &FrameInputs<'_>) {
    if let Some(point) = inputs.highlight {
        frame.circles.push(
            CirclePrimitive::new(
                point.x,
                point.y,
                inputs.style.highlight_radius,
                inputs.style.highlight_color,
            )
            .with_outline(
                inputs.style.highlight_outline_width,
                inputs.style.highlight_outline_color,
            ),
        );
    }
}

fn push_labels(frame: &mut RenderFrame, inputs: &FrameInputs<'_>, plot: PlotArea) {
    let style = inputs.style;

    frame.texts.push(TextPrimitive::new(
        inputs.config.title.clone(),
        plot.center_x(),
        plot.top - 20.0,
        style.title_font_px,
        style.text_color,
        TextHAlign::Center,
    ));
    frame.texts.push(TextPrimitive::new(
        inputs.config.x_axis_label.clone(),
        plot.center_x(),
        plot.bottom() + 50.0,
        style.axis_label_font_px,
        style.text_color,
        TextHAlign::Center,
    ));
    frame.texts.push(
        TextPrimitive::new(
            inputs.config.y_axis_label.clone(),
            plot.left - 50.0,
            plot.center_y(),
            style.axis_label_font_px,
            style.text_color,
            TextHAlign::Center,
        )
        .with_angle(-90.0),
    );
}

fn push_tooltip(frame: &mut RenderFrame, inputs: &FrameInputs<'_>) {
    let HoverState::Showing(payload) = inputs.hover else {
        return;
    };
    let style = inputs.style;

    let (first_line, second_line) = tooltip_lines(payload);
    let longest = first_line.len().max(second_line.len()) as f64;
    let box_width = style.tooltip_padding_px * 2.0 + longest * style.tooltip_font_px * 0.62;
    let box_height = style.tooltip_padding_px * 2.0 + style.tooltip_font_px * 2.7;

    frame.rects.push(
        RectPrimitive::new(
            payload.anchor_x,
            payload.anchor_y,
            box_width,
            box_height,
            style.tooltip_fill,
        )
        .with_border(style.tooltip_border_width, style.tooltip_border_color),
    );

    let text_x = payload.anchor_x + style.tooltip_padding_px;
    frame.texts.push(TextPrimitive::new(
        first_line,
        text_x,
        payload.anchor_y + style.tooltip_padding_px + style.tooltip_font_px,
        style.tooltip_font_px,
        style.text_color,
        TextHAlign::Left,
    ));
    frame.texts.push(TextPrimitive::new(
        second_line,
        text_x,
        payload.anchor_y + style.tooltip_padding_px + style.tooltip_font_px * 2.4,
        style.tooltip_font_px,
        style.text_color,
        TextHAlign::Left,
    ));
}

fn tooltip_lines(payload: HoverPayload) -> (String, String) {
    (
        format!("Year: {}", payload.year),
        format!("Incidents: {}", payload.count),
    )
}

fn tick_target_count(axis_span_px: f64, target_spacing_px: f64) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return 2;
    }
    ((axis_span_px / target_spacing_px).floor() as usize).clamp(2, 10)
}

#[cfg(test)]
mod tests {
    use super::{tick_target_count, tooltip_lines};
    use crate::interaction::HoverPayload;

    #[test]
    fn tick_target_count_tracks_axis_span() {
        assert_eq!(tick_target_count(800.0, 80.0), 10);
        assert_eq!(tick_target_count(230.0, 45.0), 5);
        assert_eq!(tick_target_count(40.0, 45.0), 2);
    }

    #[test]
    fn tooltip_lines_report_year_and_count() {
        let payload = HoverPayload {
            year: 2002,
            count: 1,
            anchor_x: 0.0,
            anchor_y: 0.0,
        };
        let (first, second) = tooltip_lines(payload);
        assert_eq!(first, "Year: 2002");
        assert_eq!(second, "Incidents: 1");
    }
}
