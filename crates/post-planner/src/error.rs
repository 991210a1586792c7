//! Error types for planner construction.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Hours range ({start}, {end}) too tight for min interval {min_seconds}")]
    IntervalTooTight {
        start: u32,
        end: u32,
        min_seconds: i64,
    },
}

pub type Result<T> = std::result::Result<T, PlanError>;
