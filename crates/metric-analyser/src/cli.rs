use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::error::{AnalyserError, AnalyserResult};
use crate::units::UnitConversion;

#[derive(Debug, Parser)]
#[command(name = "metric-analyser", about = "time-stamped metric series statistics report")]
pub struct Args {
    #[arg(long, env = "METRIC_ANALYSER_INPUT", default_value = "inputs/1.json")]
    pub input: PathBuf,
    /// Write the report to this file instead of printing it.
    #[arg(long, env = "METRIC_ANALYSER_OUTPUT")]
    pub output: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = ReportUnit::Megabits)]
    pub unit: ReportUnit,
    /// Override the unit transform with MULTIPLIER/DIVISOR, e.g. `8/1000000`.
    #[arg(long)]
    pub unit_factor: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportUnit {
    Raw,
    Megabits,
}

impl ReportUnit {
    pub fn conversion(self) -> UnitConversion {
        match self {
            ReportUnit::Raw => UnitConversion::raw(),
            ReportUnit::Megabits => UnitConversion::megabits_per_second(),
        }
    }
}

pub fn parse_unit_factor(entry: &str) -> AnalyserResult<UnitConversion> {
    let Some((mult, div)) = entry.split_once('/') else {
        return Err(AnalyserError::InvalidArgument(format!(
            "invalid unit factor '{entry}'; expected MULTIPLIER/DIVISOR"
        )));
    };
    let multiplier: f64 = mult.trim().parse().map_err(|_| {
        AnalyserError::InvalidArgument(format!(
            "invalid unit factor '{entry}'; multiplier is not a number"
        ))
    })?;
    let divisor: f64 = div.trim().parse().map_err(|_| {
        AnalyserError::InvalidArgument(format!(
            "invalid unit factor '{entry}'; divisor is not a number"
        ))
    })?;
    if !multiplier.is_finite() || !divisor.is_finite() || divisor == 0.0 {
        return Err(AnalyserError::InvalidArgument(format!(
            "invalid unit factor '{entry}'; multiplier and divisor must be finite and divisor non-zero"
        )));
    }
    Ok(UnitConversion::custom(multiplier, divisor))
}
