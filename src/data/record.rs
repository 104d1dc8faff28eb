use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Accepted year column names, consulted in order.
///
/// The first alias whose value parses as an integer year wins; a parsed `0`
/// from an earlier alias does not fall through to a later one.
pub const YEAR_FIELD_ALIASES: [&str; 2] = ["year", "Year"];

/// One row of the source table, exactly as read.
///
/// Field order is preserved so snapshots of raw data stay stable across runs.
/// Field names are not case-normalized; alias resolution happens during
/// normalization instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    fields: IndexMap<String, String>,
}

impl RawRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from `(field, value)` pairs, keeping insertion order.
    #[must_use]
    pub fn from_pairs<F, V, I>(pairs: I) -> Self
    where
        F: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (F, V)>,
    {
        let mut record = Self::new();
        for (field, value) in pairs {
            record.insert(field, value);
        }
        record
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(field, value)| (field.as_str(), value.as_str()))
    }
}

/// Incident record reduced to the one field the pipeline consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub year: i32,
}

/// Resolves a raw record to its canonical year, or signals "unusable".
///
/// `None` is a skip, not an error: records without a parseable year field are
/// excluded from aggregation and never crash the pipeline.
#[must_use]
pub fn normalize_record(record: &RawRecord) -> Option<NormalizedRecord> {
    for alias in YEAR_FIELD_ALIASES {
        if let Some(year) = record.get(alias).and_then(parse_year) {
            return Some(NormalizedRecord { year });
        }
    }
    None
}

/// Normalizes a batch, dropping unusable records.
#[must_use]
pub fn normalize_records(records: &[RawRecord]) -> Vec<NormalizedRecord> {
    let normalized: Vec<NormalizedRecord> =
        records.iter().filter_map(normalize_record).collect();
    let excluded = records.len() - normalized.len();
    if excluded > 0 {
        debug!(excluded, total = records.len(), "excluded records without a usable year");
    }
    normalized
}

/// Parses a year value: finite, integer-valued, and representable as `i32`.
///
/// Scientific notation like `2e3` is accepted; fractional years like `2001.5`
/// are not. Truncating a fractional year would invent data.
fn parse_year(value: &str) -> Option<i32> {
    let parsed: f64 = value.trim().parse().ok()?;
    if !parsed.is_finite() || parsed.fract() != 0.0 {
        return None;
    }
    if parsed < f64::from(i32::MIN) || parsed > f64::from(i32::MAX) {
        return None;
    }
    Some(parsed as i32)
}
