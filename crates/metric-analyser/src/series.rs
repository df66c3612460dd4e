use serde::{Deserialize, Serialize};

/// One (value, timestamp) observation from the input series.
///
/// The serde names are the external JSON contract (`metricValue`, `dtime`)
/// and must not change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    #[serde(rename = "metricValue")]
    pub metric_value: f64,
    pub dtime: String,
}

/// Stable ascending sort on the timestamp field.
///
/// ISO 8601 strings with a consistent timezone representation order
/// lexicographically the same as chronologically, so a plain string compare
/// is enough. Samples with equal timestamps keep their input order.
pub fn sort_by_time(samples: &mut [Sample]) {
    samples.sort_by(|a, b| a.dtime.cmp(&b.dtime));
}
