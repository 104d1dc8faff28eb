use approx::assert_relative_eq;

use trendline_rs::api::{ChartEngine, ChartEngineConfig};
use trendline_rs::data::RawRecord;
use trendline_rs::interaction::HoverState;
use trendline_rs::render::NullRenderer;

fn engine_with(years: &[i32]) -> ChartEngine<NullRenderer> {
    let records: Vec<RawRecord> = years
        .iter()
        .map(|year| RawRecord::from_pairs([("year", year.to_string())]))
        .collect();
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("engine");
    engine.load_records(&records).expect("load");
    engine
}

#[test]
fn pointer_over_a_marker_shows_its_tooltip() {
    let mut engine = engine_with(&[2001, 2001, 2003, 2002]);
    let target = engine.placed_points()[0];

    engine.on_pointer_move(target.x + 1.0, target.y - 1.0);

    match engine.hover() {
        HoverState::Showing(payload) => {
            assert_eq!(payload.year, 2001);
            assert_eq!(payload.count, 2);
        }
        HoverState::Idle => panic!("expected tooltip for hovered marker"),
    }
}

#[test]
fn tooltip_anchor_is_offset_from_the_pointer() {
    let mut engine = engine_with(&[2001, 2002]);
    let target = engine.placed_points()[1];
    let interaction = engine.config().interaction;

    engine.on_pointer_move(target.x, target.y);

    let HoverState::Showing(payload) = engine.hover() else {
        panic!("expected tooltip");
    };
    assert_relative_eq!(payload.anchor_x, target.x + interaction.tooltip_offset_x);
    assert_relative_eq!(payload.anchor_y, target.y + interaction.tooltip_offset_y);
}

#[test]
fn pointer_away_from_all_markers_returns_to_idle() {
    let mut engine = engine_with(&[2001, 2002, 2003]);
    let target = engine.placed_points()[0];

    engine.on_pointer_move(target.x, target.y);
    assert!(matches!(engine.hover(), HoverState::Showing(_)));

    engine.on_pointer_move(target.x + 200.0, target.y + 200.0);
    assert_eq!(engine.hover(), HoverState::Idle);
}

#[test]
fn pointer_leave_always_returns_to_idle() {
    let mut engine = engine_with(&[2001, 2002]);
    let target = engine.placed_points()[0];

    engine.on_pointer_move(target.x, target.y);
    engine.on_pointer_leave();

    assert_eq!(engine.hover(), HoverState::Idle);
}

#[test]
fn last_pointer_event_wins() {
    let mut engine = engine_with(&[2001, 2002, 2003]);
    let first = engine.placed_points()[0];
    let last = engine.placed_points()[2];

    engine.on_pointer_move(first.x, first.y);
    engine.on_pointer_move(last.x, last.y);

    let HoverState::Showing(payload) = engine.hover() else {
        panic!("expected tooltip");
    };
    assert_eq!(payload.year, 2003);
}

#[test]
fn nearest_marker_wins_when_two_are_in_reach() {
    let mut engine = engine_with(&[2001, 2002, 2003]);
    let placed = engine.placed_points().to_vec();

    // Probe just beside the middle marker, closer to it than to its neighbors.
    engine.on_pointer_move(placed[1].x + 2.0, placed[1].y);

    let HoverState::Showing(payload) = engine.hover() else {
        panic!("expected tooltip");
    };
    assert_eq!(payload.year, 2002);
}

#[test]
fn non_finite_pointer_coordinates_are_ignored() {
    let mut engine = engine_with(&[2001, 2002]);
    let target = engine.placed_points()[0];

    engine.on_pointer_move(target.x, target.y);
    let before = engine.hover();

    engine.on_pointer_move(f64::NAN, target.y);
    engine.on_pointer_move(target.x, f64::INFINITY);

    assert_eq!(engine.hover(), before);
}

#[test]
fn hover_resets_after_a_data_reload() {
    let mut engine = engine_with(&[2001, 2002]);
    let target = engine.placed_points()[0];
    engine.on_pointer_move(target.x, target.y);
    assert!(matches!(engine.hover(), HoverState::Showing(_)));

    let records: Vec<RawRecord> = [2010, 2011]
        .iter()
        .map(|year| RawRecord::from_pairs([("year", year.to_string())]))
        .collect();
    engine.load_records(&records).expect("reload");

    assert_eq!(engine.hover(), HoverState::Idle);
}

#[test]
fn empty_series_never_shows_a_tooltip() {
    let mut engine = engine_with(&[]);
    engine.on_pointer_move(470.0, 195.0);
    assert_eq!(engine.hover(), HoverState::Idle);
}
