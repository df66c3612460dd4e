use std::fs;

use chrono::Utc;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use metric_analyser::cli::{parse_unit_factor, Args};
use metric_analyser::error::AnalyserResult;
use metric_analyser::input::read_series;
use metric_analyser::report::render_report;
use metric_analyser::series::sort_by_time;
use metric_analyser::stats::compute_stats;

fn main() -> AnalyserResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let unit = match &args.unit_factor {
        Some(entry) => parse_unit_factor(entry)?,
        None => args.unit.conversion(),
    };

    let mut samples = read_series(&args.input)?;
    sort_by_time(&mut samples);
    let stats = compute_stats(&samples)?;
    let converted = unit.convert_stats(&stats);
    debug!(?converted, unit = %unit.label, "computed series statistics");

    let report = render_report(&samples, &converted, &unit, Utc::now());
    match &args.output {
        Some(path) => {
            fs::write(path, &report)?;
            println!("wrote report: {}", path.display());
        }
        None => print!("{report}"),
    }

    Ok(())
}
