use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("record source error: {0}")]
    Source(#[from] csv::Error),

    #[error("snapshot serialization error: {0}")]
    Snapshot(#[from] serde_json::Error),
}
