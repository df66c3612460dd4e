pub mod cli;
pub mod error;
pub mod input;
pub mod report;
pub mod series;
pub mod stats;
pub mod units;
