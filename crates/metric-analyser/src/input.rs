use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{AnalyserError, AnalyserResult};
use crate::series::Sample;

/// Read a fully materialized series from a JSON file.
///
/// An empty array is rejected here so the engine never sees a series it
/// cannot seed min/max from. Individual sample values are not validated;
/// the wire contract promises finite numbers and comparable timestamps.
pub fn read_series(path: &Path) -> AnalyserResult<Vec<Sample>> {
    let bytes = fs::read(path)?;
    let samples: Vec<Sample> = serde_json::from_slice(&bytes)?;
    if samples.is_empty() {
        return Err(AnalyserError::EmptyInput);
    }
    debug!(count = samples.len(), path = %path.display(), "read input series");
    Ok(samples)
}
