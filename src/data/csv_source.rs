use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::ChartResult;

use super::RawRecord;

/// Reads all rows of a delimited-text file into raw records.
///
/// Every column is kept; the pipeline decides later which fields it consumes.
/// A missing or unreadable file is the one unrecoverable load failure and
/// surfaces as `ChartError::Source`.
pub fn read_records_from_path(path: impl AsRef<Path>) -> ChartResult<Vec<RawRecord>> {
    let reader = csv::Reader::from_path(path.as_ref())?;
    collect_records(reader)
}

/// Reads raw records from any `Read` source, e.g. an in-memory buffer.
pub fn read_records<R: Read>(input: R) -> ChartResult<Vec<RawRecord>> {
    collect_records(csv::Reader::from_reader(input))
}

fn collect_records<R: Read>(mut reader: csv::Reader<R>) -> ChartResult<Vec<RawRecord>> {
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_owned).collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut record = RawRecord::new();
        for (index, value) in row.iter().enumerate() {
            if let Some(field) = headers.get(index) {
                record.insert(field.clone(), value);
            }
        }
        records.push(record);
    }

    debug!(count = records.len(), columns = headers.len(), "read raw records");
    Ok(records)
}
