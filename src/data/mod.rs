mod csv_source;
mod record;
mod series;

pub use csv_source::{read_records, read_records_from_path};
pub use record::{NormalizedRecord, RawRecord, YEAR_FIELD_ALIASES, normalize_record, normalize_records};
pub use series::{AggregatedPoint, IncidentSeries};
