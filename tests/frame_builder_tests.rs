use approx::assert_relative_eq;

use trendline_rs::api::{ChartEngine, ChartEngineConfig};
use trendline_rs::data::RawRecord;
use trendline_rs::render::NullRenderer;

fn records_for(years: &[i32]) -> Vec<RawRecord> {
    years
        .iter()
        .map(|year| RawRecord::from_pairs([("year", year.to_string())]))
        .collect()
}

fn engine_with(years: &[i32]) -> ChartEngine<NullRenderer> {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine");
    engine.load_records(&records_for(years)).expect("load");
    engine
}

#[test]
fn marker_count_equals_series_length() {
    let engine = engine_with(&[2001, 2001, 2003, 2002]);
    let frame = engine.build_frame().expect("frame");

    assert_eq!(frame.circles.len(), engine.series().len());
}

#[test]
fn rebuilding_an_unchanged_series_produces_an_identical_frame() {
    let engine = engine_with(&[2001, 2001, 2003, 2002]);

    let first = engine.build_frame().expect("first frame");
    let second = engine.build_frame().expect("second frame");
    let third = engine.build_frame().expect("third frame");

    assert_eq!(first, second);
    assert_eq!(second, third);
    // No duplicate markers accumulate across passes.
    assert_eq!(third.circles.len(), engine.series().len());
}

#[test]
fn empty_series_renders_axes_and_labels_only() {
    let engine = engine_with(&[]);
    let frame = engine.build_frame().expect("frame");

    assert_eq!(frame.lines.len(), 2);
    assert_eq!(frame.circles.len(), 0);
    assert_eq!(frame.rects.len(), 0);
    assert_eq!(frame.texts.len(), 3);
}

#[test]
fn the_three_chart_labels_are_present() {
    let engine = engine_with(&[2001, 2002]);
    let frame = engine.build_frame().expect("frame");

    let texts: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert!(texts.contains(&"Annual Aircraft Incidents"));
    assert!(texts.contains(&"Year"));
    assert!(texts.contains(&"Number of Incidents"));
}

#[test]
fn y_axis_label_is_rotated() {
    let engine = engine_with(&[2001, 2002]);
    let frame = engine.build_frame().expect("frame");

    let label = frame
        .texts
        .iter()
        .find(|text| text.text == "Number of Incidents")
        .expect("y axis label");
    assert_relative_eq!(label.angle_degrees, -90.0);
}

#[test]
fn year_tick_labels_format_as_plain_integers() {
    let engine = engine_with(&[1998, 2001, 2003]);
    let frame = engine.build_frame().expect("frame");

    let tick_labels: Vec<&str> = frame
        .texts
        .iter()
        .map(|text| text.text.as_str())
        .filter(|text| text.parse::<i64>().is_ok())
        .collect();
    assert!(!tick_labels.is_empty());
    for label in tick_labels {
        assert!(!label.contains('.'), "tick label `{label}` is not an integer");
        assert!(!label.contains(','), "tick label `{label}` is locale-formatted");
    }
}

#[test]
fn line_path_connects_points_in_ascending_year_order() {
    let engine = engine_with(&[2001, 2001, 2003, 2002]);
    let frame = engine.build_frame().expect("frame");

    let style = engine.style();
    let path_segments: Vec<_> = frame
        .lines
        .iter()
        .filter(|line| line.stroke_width == style.line_width && line.color == style.line_color)
        .collect();
    assert_eq!(path_segments.len(), engine.series().len() - 1);
    for segment in &path_segments {
        assert!(segment.x1 < segment.x2);
    }
}

#[test]
fn single_point_series_draws_one_centered_marker_and_no_path() {
    let engine = engine_with(&[1984, 1984]);
    let frame = engine.build_frame().expect("frame");

    assert_eq!(frame.circles.len(), 1);
    let marker = frame.circles[0];
    // Degenerate year domain centers the lone point in the plot interior.
    assert_relative_eq!(marker.x, 470.0);

    let style = engine.style();
    let path_segments = frame
        .lines
        .iter()
        .filter(|line| line.stroke_width == style.line_width && line.color == style.line_color)
        .count();
    assert_eq!(path_segments, 0);
}

#[test]
fn highlight_adds_exactly_one_extra_circle() {
    let mut engine = engine_with(&[2001, 2001, 2003, 2002]);
    let base = engine.build_frame().expect("frame");

    engine.select_year(2002);
    let highlighted = engine.build_frame().expect("frame");

    assert_eq!(highlighted.circles.len(), base.circles.len() + 1);
}

#[test]
fn highlight_marker_is_visually_distinct_from_point_markers() {
    let mut engine = engine_with(&[2001, 2002]);
    engine.select_year(2002);
    let frame = engine.build_frame().expect("frame");

    let style = engine.style();
    let highlight = frame
        .circles
        .iter()
        .find(|circle| circle.radius == style.highlight_radius)
        .expect("highlight circle");
    assert_ne!(highlight.fill, style.marker_color);
    assert!(highlight.outline_color.is_some());
}

#[test]
fn hover_adds_tooltip_box_and_two_text_lines() {
    let mut engine = engine_with(&[2001, 2001, 2002]);
    let base = engine.build_frame().expect("frame");

    let target = engine.placed_points()[0];
    engine.on_pointer_move(target.x, target.y);
    let hovered = engine.build_frame().expect("frame");

    assert_eq!(hovered.rects.len(), base.rects.len() + 1);
    assert_eq!(hovered.texts.len(), base.texts.len() + 2);
    let texts: Vec<&str> = hovered.texts.iter().map(|text| text.text.as_str()).collect();
    assert!(texts.contains(&"Year: 2001"));
    assert!(texts.contains(&"Incidents: 2"));
}

#[test]
fn frames_validate_through_the_null_renderer() {
    let mut engine = engine_with(&[2001, 2001, 2003, 2002]);
    engine.select_year(2003);
    engine.render().expect("render");

    let renderer = engine.renderer();
    assert_eq!(renderer.render_calls, 1);
    assert_eq!(renderer.last_circle_count, 4);
}
