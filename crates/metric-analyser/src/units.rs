use crate::stats::SeriesStats;

/// A linear unit transform (`value * multiplier / divisor`) applied at
/// presentation time. The engine never hard-codes a conversion; callers pick
/// one of the presets or build their own.
#[derive(Clone, Debug, PartialEq)]
pub struct UnitConversion {
    pub multiplier: f64,
    pub divisor: f64,
    pub label: String,
}

impl UnitConversion {
    /// Bytes per second to megabits per second.
    pub fn megabits_per_second() -> Self {
        Self {
            multiplier: 8.0,
            divisor: 1_000_000.0,
            label: "Megabits per second".to_string(),
        }
    }

    /// Pass-through, for reports in the source unit.
    pub fn raw() -> Self {
        Self {
            multiplier: 1.0,
            divisor: 1.0,
            label: "Bytes per second".to_string(),
        }
    }

    pub fn custom(multiplier: f64, divisor: f64) -> Self {
        Self {
            multiplier,
            divisor,
            label: format!("Custom (x{multiplier} / {divisor})"),
        }
    }

    pub fn convert(&self, value: f64) -> f64 {
        value * self.multiplier / self.divisor
    }

    /// Apply the transform to all four statistics.
    pub fn convert_stats(&self, stats: &SeriesStats) -> SeriesStats {
        SeriesStats {
            min: self.convert(stats.min),
            max: self.convert(stats.max),
            median: self.convert(stats.median),
            average: self.convert(stats.average),
        }
    }
}
