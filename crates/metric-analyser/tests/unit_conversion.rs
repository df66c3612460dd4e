use metric_analyser::stats::SeriesStats;
use metric_analyser::units::UnitConversion;

#[test]
fn megabits_preset_matches_the_documented_formula() {
    let unit = UnitConversion::megabits_per_second();
    assert_eq!(unit.convert(1_000_000.0), 8.0);
    assert_eq!(unit.convert(2_000_000.0), 16.0);
    assert_eq!(unit.convert(3_000_000.0), 24.0);
}

#[test]
fn raw_preset_is_identity() {
    let unit = UnitConversion::raw();
    assert_eq!(unit.convert(123.456), 123.456);
}

#[test]
fn conversion_preserves_ordering_for_positive_factors() {
    let unit = UnitConversion::megabits_per_second();
    let pairs = [(1.0, 2.0), (0.0, 0.001), (999_999.0, 1_000_000.0)];
    for (a, b) in pairs {
        assert!(unit.convert(a) < unit.convert(b), "order broken for ({a}, {b})");
    }
}

#[test]
fn convert_stats_applies_to_all_four_fields() {
    let unit = UnitConversion::custom(2.0, 1.0);
    let stats = SeriesStats {
        min: 1.0,
        max: 4.0,
        median: 2.0,
        average: 2.5,
    };
    let converted = unit.convert_stats(&stats);
    assert_eq!(converted.min, 2.0);
    assert_eq!(converted.max, 8.0);
    assert_eq!(converted.median, 4.0);
    assert_eq!(converted.average, 5.0);
}
