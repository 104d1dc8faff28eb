use approx::assert_relative_eq;
use proptest::prelude::*;

use trendline_rs::core::{CountScale, LinearScale, YearScale};
use trendline_rs::data::{IncidentSeries, NormalizedRecord};

fn series_of(years: &[i32]) -> IncidentSeries {
    let records: Vec<NormalizedRecord> =
        years.iter().map(|&year| NormalizedRecord { year }).collect();
    IncidentSeries::from_records(&records)
}

#[test]
fn affine_mapping_hits_range_endpoints_at_domain_extremes() {
    let scale = LinearScale::new(2001.0, 2003.0, 70.0, 870.0).expect("valid scale");

    assert_relative_eq!(scale.map(2001.0), 70.0);
    assert_relative_eq!(scale.map(2003.0), 870.0);
    assert_relative_eq!(scale.map(2002.0), 470.0);
}

#[test]
fn inverted_range_maps_larger_values_to_smaller_pixels() {
    let scale = LinearScale::new(0.0, 2.0, 280.0, 50.0).expect("valid scale");

    assert_relative_eq!(scale.map(0.0), 280.0);
    assert_relative_eq!(scale.map(2.0), 50.0);
    assert!(scale.map(2.0) < scale.map(0.0));
}

#[test]
fn map_and_invert_round_trip_within_tolerance() {
    let scale = LinearScale::new(10.0, 110.0, 0.0, 1000.0).expect("valid scale");

    let original = 42.5;
    let px = scale.map(original);
    let recovered = scale.invert(px);
    assert_relative_eq!(recovered, original, epsilon = 1e-9);
}

#[test]
fn degenerate_domain_maps_to_range_midpoint() {
    let scale = LinearScale::new(2001.0, 2001.0, 70.0, 870.0).expect("valid scale");

    assert!(scale.is_degenerate());
    assert_relative_eq!(scale.map(2001.0), 470.0);
    // Any value lands at the same defined location; nothing divides by zero.
    assert_relative_eq!(scale.map(1900.0), 470.0);
}

#[test]
fn degenerate_domain_invert_returns_domain_value() {
    let scale = LinearScale::new(7.0, 7.0, 0.0, 800.0).expect("valid scale");
    assert_relative_eq!(scale.invert(400.0), 7.0);
}

#[test]
fn unordered_domain_is_rejected() {
    assert!(LinearScale::new(5.0, 1.0, 0.0, 100.0).is_err());
}

#[test]
fn non_finite_bounds_are_rejected() {
    assert!(LinearScale::new(f64::NAN, 1.0, 0.0, 100.0).is_err());
    assert!(LinearScale::new(0.0, f64::INFINITY, 0.0, 100.0).is_err());
    assert!(LinearScale::new(0.0, 1.0, f64::NAN, 100.0).is_err());
}

#[test]
fn year_scale_domain_covers_series_extent() {
    let series = series_of(&[2001, 2001, 2003, 2002]);
    let scale = YearScale::fit(&series, (70.0, 870.0)).expect("year fit");

    assert_eq!(scale.linear().domain(), (2001.0, 2003.0));
    assert_relative_eq!(scale.year_to_pixel(2001), 70.0);
    assert_relative_eq!(scale.year_to_pixel(2003), 870.0);
}

#[test]
fn single_year_series_places_point_at_range_midpoint() {
    let series = series_of(&[1984, 1984]);
    let scale = YearScale::fit(&series, (70.0, 870.0)).expect("year fit");

    assert!(scale.linear().is_degenerate());
    assert_relative_eq!(scale.year_to_pixel(1984), 470.0);
}

#[test]
fn count_scale_is_zero_anchored_and_inverted() {
    let series = series_of(&[2001, 2001, 2003, 2002]);
    let scale = CountScale::fit(&series, (340.0, 50.0)).expect("count fit");

    assert_eq!(scale.linear().domain(), (0.0, 2.0));
    assert_relative_eq!(scale.count_to_pixel(0), 340.0);
    assert_relative_eq!(scale.count_to_pixel(2), 50.0);
}

#[test]
fn empty_series_fits_degenerate_scales_without_error() {
    let series = series_of(&[]);
    let year_scale = YearScale::fit(&series, (0.0, 800.0)).expect("year fit");
    let count_scale = CountScale::fit(&series, (290.0, 0.0)).expect("count fit");

    assert!(year_scale.linear().is_degenerate());
    assert!(count_scale.linear().is_degenerate());
    assert!(year_scale.year_to_pixel(0).is_finite());
    assert!(count_scale.count_to_pixel(0).is_finite());
}

#[test]
fn year_ticks_fall_on_plain_integers_inside_the_domain() {
    let series = series_of(&[2001, 2002, 2003]);
    let scale = YearScale::fit(&series, (0.0, 800.0)).expect("year fit");

    let ticks = scale.ticks(10);
    assert_eq!(ticks, vec![2001, 2002, 2003]);
}

proptest! {
    #[test]
    fn every_aggregated_point_maps_inside_the_pixel_range(
        years in proptest::collection::vec(1900i32..2100, 1..128)
    ) {
        let series = series_of(&years);
        let year_scale = YearScale::fit(&series, (70.0, 870.0)).expect("year fit");
        let count_scale = CountScale::fit(&series, (340.0, 50.0)).expect("count fit");

        for point in series.points() {
            let x = year_scale.year_to_pixel(point.year);
            let y = count_scale.count_to_pixel(point.count);
            prop_assert!((70.0..=870.0).contains(&x));
            prop_assert!((50.0..=340.0).contains(&y));
        }
    }
}
