mod chart_style;
mod engine;
mod engine_config;
mod frame_builder;
mod snapshot;

pub use chart_style::ChartStyle;
pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use snapshot::EngineSnapshot;
