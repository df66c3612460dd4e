use clap::Parser;

use metric_analyser::cli::{parse_unit_factor, Args, ReportUnit};

#[test]
fn defaults_to_megabits_and_bundled_input_path() {
    let args = Args::try_parse_from(["metric-analyser"]).expect("defaults should parse");
    assert_eq!(args.unit, ReportUnit::Megabits);
    assert_eq!(args.input, std::path::PathBuf::from("inputs/1.json"));
    assert!(args.output.is_none());
    assert!(args.unit_factor.is_none());
}

#[test]
fn accepts_raw_unit() {
    let args =
        Args::try_parse_from(["metric-analyser", "--unit", "raw"]).expect("raw should parse");
    assert_eq!(args.unit, ReportUnit::Raw);
}

#[test]
fn rejects_unknown_unit() {
    Args::try_parse_from(["metric-analyser", "--unit", "gigabits"])
        .expect_err("unknown unit should be rejected");
}

#[test]
fn parses_custom_unit_factor() {
    let unit = parse_unit_factor("8/1000000").expect("factor should parse");
    assert_eq!(unit.multiplier, 8.0);
    assert_eq!(unit.divisor, 1_000_000.0);
    assert_eq!(unit.convert(1_000_000.0), 8.0);
}

#[test]
fn rejects_malformed_unit_factors() {
    for entry in ["", "8", "a/b", "8/", "8/0", "inf/1"] {
        let err = parse_unit_factor(entry).expect_err("factor should be rejected");
        assert!(
            err.to_string().contains("unit factor"),
            "unexpected error for '{entry}': {err}"
        );
    }
}
