use chrono::{DateTime, Utc};

use crate::series::Sample;
use crate::stats::SeriesStats;
use crate::units::UnitConversion;

/// Render the plain-text report for a time-sorted series.
///
/// `samples` must already be sorted by time; the first and last entries
/// bound the reported period. `stats` is expected in the unit named by
/// `unit.label` (whether to convert is the caller's choice).
pub fn render_report(
    samples: &[Sample],
    stats: &SeriesStats,
    unit: &UnitConversion,
    generated_at: DateTime<Utc>,
) -> String {
    let from = samples.first().map(|s| s.dtime.as_str()).unwrap_or("n/a");
    let to = samples.last().map(|s| s.dtime.as_str()).unwrap_or("n/a");

    let mut out = String::new();
    out.push_str(&format!(
        "Metric Analyser v{}\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("=========================\n\n");
    out.push_str(&format!(
        "Generated: {}\n\n",
        generated_at.format("%Y-%m-%dT%H:%M:%SZ")
    ));
    out.push_str("Period checked:\n\n");
    out.push_str(&format!("\tFrom: {from}\n"));
    out.push_str(&format!("\tTo: {to}\n\n"));
    out.push_str("Statistics:\n\n");
    out.push_str(&format!("\tUnit: {}\n\n", unit.label));
    out.push_str(&format!("\tAverage: {:.2}\n", stats.average));
    out.push_str(&format!("\tMin: {:.2}\n", stats.min));
    out.push_str(&format!("\tMax: {:.2}\n", stats.max));
    out.push_str(&format!("\tMedian: {:.2}\n", stats.median));
    out
}
