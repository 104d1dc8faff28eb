mod count_scale;
mod project;
mod scale;
mod types;
mod year_scale;

pub use count_scale::CountScale;
pub use project::{LineSegment, PlacedPoint, line_segments_between, project_series};
pub use scale::LinearScale;
pub use types::{Margin, PlotArea, Viewport};
pub use year_scale::YearScale;
