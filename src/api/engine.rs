use std::path::Path;

use tracing::debug;

use crate::core::{CountScale, PlacedPoint, YearScale, project_series};
use crate::data::{IncidentSeries, RawRecord, normalize_records, read_records_from_path};
use crate::error::ChartResult;
use crate::interaction::{HoverState, InteractionController, SelectionState};
use crate::render::{RenderFrame, Renderer};

use super::frame_builder::{FrameInputs, build_render_frame};
use super::{ChartEngineConfig, ChartStyle};

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` runs the one-way pipeline: raw records are normalized,
/// aggregated into the per-year series, fitted onto the two linear scales,
/// projected into pixel space, and materialized as render frames. Pointer and
/// selection events feed the interaction overlay between draw passes.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartEngineConfig,
    style: ChartStyle,
    series: IncidentSeries,
    year_scale: YearScale,
    count_scale: CountScale,
    placed: Vec<PlacedPoint>,
    interaction: InteractionController,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;
        let style = ChartStyle::default();
        style.validate()?;

        let series = IncidentSeries::default();
        let (year_scale, count_scale) = fit_scales(&config, &series)?;
        let interaction = InteractionController::new(config.interaction);

        Ok(Self {
            renderer,
            config,
            style,
            series,
            year_scale,
            count_scale,
            placed: Vec::new(),
            interaction,
        })
    }

    /// Replaces the series from raw records: normalize, aggregate, refit
    /// scales, reproject, and reconcile interaction state.
    ///
    /// Unusable records are skipped, never an error. The hover machine resets
    /// and a now-stale selection clears per the selection contract.
    pub fn load_records(&mut self, records: &[RawRecord]) -> ChartResult<()> {
        let normalized = normalize_records(records);
        self.series = IncidentSeries::from_records(&normalized);
        self.refit()?;
        self.interaction.reconcile_after_load(&self.series);
        debug!(
            records = records.len(),
            normalized = normalized.len(),
            distinct_years = self.series.len(),
            "loaded records"
        );
        Ok(())
    }

    /// Loads the series from a delimited-text file.
    ///
    /// A missing or unreadable file is the one unrecoverable load failure;
    /// the engine keeps its previous state and the chart stays unrendered
    /// past this step.
    pub fn load_csv_path(&mut self, path: impl AsRef<Path>) -> ChartResult<()> {
        let records = read_records_from_path(path)?;
        self.load_records(&records)
    }

    fn refit(&mut self) -> ChartResult<()> {
        let (year_scale, count_scale) = fit_scales(&self.config, &self.series)?;
        self.year_scale = year_scale;
        self.count_scale = count_scale;
        self.placed = project_series(&self.series, year_scale, count_scale);
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn style(&self) -> ChartStyle {
        self.style
    }

    pub fn set_style(&mut self, style: ChartStyle) -> ChartResult<()> {
        style.validate()?;
        self.style = style;
        Ok(())
    }

    #[must_use]
    pub fn series(&self) -> &IncidentSeries {
        &self.series
    }

    /// Ascending distinct years, the option list for the selection control.
    #[must_use]
    pub fn year_options(&self) -> Vec<i32> {
        self.series.years()
    }

    #[must_use]
    pub fn placed_points(&self) -> &[PlacedPoint] {
        &self.placed
    }

    #[must_use]
    pub fn year_scale(&self) -> YearScale {
        self.year_scale
    }

    #[must_use]
    pub fn count_scale(&self) -> CountScale {
        self.count_scale
    }

    #[must_use]
    pub fn hover(&self) -> HoverState {
        self.interaction.hover()
    }

    #[must_use]
    pub fn selection(&self) -> SelectionState {
        self.interaction.selection()
    }

    /// Placed point for the current highlight, if a selection is active.
    #[must_use]
    pub fn highlighted_point(&self) -> Option<PlacedPoint> {
        match self.interaction.selection() {
            SelectionState::Highlighted(year) => {
                self.placed.iter().copied().find(|point| point.year == year)
            }
            SelectionState::None => None,
        }
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.interaction.pointer_move(x, y, &self.placed);
    }

    pub fn on_pointer_leave(&mut self) {
        self.interaction.pointer_leave();
    }

    /// Applies an integer selection signal.
    pub fn select_year(&mut self, year: i32) -> SelectionState {
        self.interaction.select_year(year, &self.series)
    }

    /// Applies a string-typed selection signal, e.g. a dropdown change value.
    pub fn select_year_value(&mut self, value: &str) -> SelectionState {
        self.interaction.select_year_value(value, &self.series)
    }

    pub fn clear_selection(&mut self) {
        self.interaction.clear_selection();
    }

    /// Materializes the scene for the current engine state.
    pub fn build_frame(&self) -> ChartResult<RenderFrame> {
        build_render_frame(FrameInputs {
            config: &self.config,
            style: &self.style,
            placed: &self.placed,
            year_scale: self.year_scale,
            count_scale: self.count_scale,
            hover: self.interaction.hover(),
            highlight: self.highlighted_point(),
        })
    }

    /// Builds the frame and hands it to the backend.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

fn fit_scales(
    config: &ChartEngineConfig,
    series: &IncidentSeries,
) -> ChartResult<(YearScale, CountScale)> {
    let plot = config.plot_area()?;
    let year_scale = YearScale::fit(series, (plot.left, plot.right()))?;
    let count_scale = CountScale::fit(series, (plot.bottom(), plot.top))?;
    Ok((year_scale, count_scale))
}
