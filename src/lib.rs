//! trendline-rs: headless engine for an annual-incident trend chart.
//!
//! The crate turns tabular incident records into a deterministic,
//! backend-agnostic render frame: records are normalized, aggregated into
//! per-year counts, mapped through linear scales, and materialized as pixel
//! primitives together with an interaction overlay (hover tooltip and
//! dropdown-driven highlight). Host surfaces only execute the frame.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, ChartStyle};
pub use error::{ChartError, ChartResult};
