//! Hover and selection state machines.
//!
//! Two independent machines share one tooltip surface. Updates are serialized
//! by the host's single-threaded event queue, so "last write wins" is the
//! whole locking discipline.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::PlacedPoint;
use crate::data::IncidentSeries;

/// Tooltip content and anchor for the hovered point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverPayload {
    pub year: i32,
    pub count: u32,
    /// Tooltip anchor in surface pixels, already offset from the pointer.
    pub anchor_x: f64,
    pub anchor_y: f64,
}

/// Hover machine: `Idle` or `Showing` the tooltip for one point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum HoverState {
    #[default]
    Idle,
    Showing(HoverPayload),
}

/// Selection machine: no highlight, or exactly one highlighted year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionState {
    #[default]
    None,
    Highlighted(i32),
}

/// Interaction tuning owned by the engine config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionConfig {
    /// Pointer-to-marker distance within which a marker counts as hovered.
    pub hover_hit_radius_px: f64,
    /// Tooltip anchor offset from the pointer position.
    pub tooltip_offset_x: f64,
    pub tooltip_offset_y: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            hover_hit_radius_px: 12.0,
            tooltip_offset_x: 10.0,
            tooltip_offset_y: -28.0,
        }
    }
}

/// Owns the tooltip surface and the single highlight-marker slot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InteractionController {
    config: InteractionConfig,
    hover: HoverState,
    selection: SelectionState,
}

impl InteractionController {
    #[must_use]
    pub fn new(config: InteractionConfig) -> Self {
        Self {
            config,
            hover: HoverState::Idle,
            selection: SelectionState::None,
        }
    }

    #[must_use]
    pub fn hover(&self) -> HoverState {
        self.hover
    }

    #[must_use]
    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    /// Resolves a pointer position against the placed markers.
    ///
    /// Inside a marker's hit radius the machine moves to `Showing` with that
    /// point's data; outside it moves to `Idle`. No timers, no queued
    /// transitions. Non-finite coordinates are ignored so NaN never reaches
    /// the overlay.
    pub fn pointer_move(&mut self, x: f64, y: f64, placed: &[PlacedPoint]) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }

        self.hover = match nearest_marker(x, y, placed, self.config.hover_hit_radius_px) {
            Some(point) => {
                trace!(year = point.year, count = point.count, "hover enter");
                HoverState::Showing(HoverPayload {
                    year: point.year,
                    count: point.count,
                    anchor_x: x + self.config.tooltip_offset_x,
                    anchor_y: y + self.config.tooltip_offset_y,
                })
            }
            None => HoverState::Idle,
        };
    }

    pub fn pointer_leave(&mut self) {
        self.hover = HoverState::Idle;
    }

    /// Applies a selection signal carrying an integer year.
    ///
    /// A year present in the series replaces the highlight slot; re-selecting
    /// the current year lands in the identical state. A year absent from the
    /// series clears the slot instead of erroring.
    pub fn select_year(&mut self, year: i32, series: &IncidentSeries) -> SelectionState {
        self.selection = match series.find_year(year) {
            Some(point) => SelectionState::Highlighted(point.year),
            None => {
                debug!(year, "selected year absent from series, clearing highlight");
                SelectionState::None
            }
        };
        self.selection
    }

    /// Applies a string-typed selection signal, e.g. a dropdown change value.
    ///
    /// The value is coerced by trim + integer parse; an unparseable value
    /// clears the highlight like an absent year.
    pub fn select_year_value(&mut self, value: &str, series: &IncidentSeries) -> SelectionState {
        match value.trim().parse::<i32>() {
            Ok(year) => self.select_year(year, series),
            Err(_) => {
                debug!(value, "unparseable selection value, clearing highlight");
                self.selection = SelectionState::None;
                self.selection
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection = SelectionState::None;
    }

    /// Reconciles interaction state after a data reload.
    ///
    /// Placed coordinates changed under the pointer, so the hover machine
    /// resets to `Idle` until the next pointer event. The selection is
    /// re-resolved against the new series; a stale year clears the slot.
    pub fn reconcile_after_load(&mut self, series: &IncidentSeries) {
        self.hover = HoverState::Idle;
        if let SelectionState::Highlighted(year) = self.selection {
            self.select_year(year, series);
        }
    }
}

/// Nearest placed marker within `hit_radius_px` of the pointer, if any.
fn nearest_marker(
    x: f64,
    y: f64,
    placed: &[PlacedPoint],
    hit_radius_px: f64,
) -> Option<PlacedPoint> {
    let mut candidates: SmallVec<[(OrderedFloat<f64>, PlacedPoint); 4]> = SmallVec::new();
    for point in placed {
        let distance = ((point.x - x).powi(2) + (point.y - y).powi(2)).sqrt();
        if distance <= hit_radius_px {
            candidates.push((OrderedFloat(distance), *point));
        }
    }

    candidates
        .into_iter()
        .min_by_key(|item| item.0)
        .map(|(_, point)| point)
}

#[cfg(test)]
mod tests {
    use super::nearest_marker;
    use crate::core::PlacedPoint;

    fn placed(year: i32, x: f64, y: f64) -> PlacedPoint {
        PlacedPoint {
            year,
            count: 1,
            x,
            y,
        }
    }

    #[test]
    fn nearest_marker_prefers_closest_candidate() {
        let markers = [placed(2001, 100.0, 100.0), placed(2002, 104.0, 100.0)];
        let hit = nearest_marker(103.0, 100.0, &markers, 12.0).expect("hit");
        assert_eq!(hit.year, 2002);
    }

    #[test]
    fn nearest_marker_misses_outside_radius() {
        let markers = [placed(2001, 100.0, 100.0)];
        assert!(nearest_marker(200.0, 200.0, &markers, 12.0).is_none());
    }
}
