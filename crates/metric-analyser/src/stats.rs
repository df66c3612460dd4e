use serde::Serialize;

use crate::error::{AnalyserError, AnalyserResult};
use crate::series::Sample;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesStats {
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub average: f64,
}

/// Summarize a non-empty series: min, max, median, average.
///
/// Min, max, and the sum behind the average come from a single pass seeded
/// with the first sample. The median comes from a second, value-sorted copy
/// and is the only statistic rounded here; the rest stay unrounded until
/// presentation.
pub fn compute_stats(samples: &[Sample]) -> AnalyserResult<SeriesStats> {
    let Some(first) = samples.first() else {
        return Err(AnalyserError::EmptyInput);
    };

    let mut sum = 0.0;
    let mut min = first.metric_value;
    let mut max = first.metric_value;
    for sample in samples {
        sum += sample.metric_value;
        if sample.metric_value < min {
            min = sample.metric_value;
        }
        if sample.metric_value > max {
            max = sample.metric_value;
        }
    }
    let average = sum / samples.len() as f64;

    let mut values: Vec<f64> = samples.iter().map(|s| s.metric_value).collect();
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = values.len();
    let median = if n % 2 == 0 {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    } else {
        values[n / 2]
    };

    Ok(SeriesStats {
        min,
        max,
        median: round2(median),
        average,
    })
}

/// Round to 2 decimal places, ties away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
