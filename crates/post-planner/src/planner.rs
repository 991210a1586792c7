//! The planner itself -- eager schedule construction over validated
//! configuration.

use chrono::{NaiveDate, NaiveDateTime};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::config::PlannerConfig;
use crate::error::Result;
use crate::slots;

/// The post times generated for one candidate date, in window order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub times: Vec<NaiveDateTime>,
}

/// Computes a full schedule of post times at construction and exposes it as
/// read-only data.
///
/// Construction validates the configuration fail-fast, resolves the period
/// into `[start, end)`, enumerates the candidate dates at the configured
/// frequency, and draws the per-date times. Once built, a planner is
/// immutable and no further errors can occur.
#[derive(Debug, Clone)]
pub struct Planner {
    config: PlannerConfig,
    period_end: NaiveDateTime,
    schedule: Vec<DaySchedule>,
}

impl Planner {
    /// Build a planner using the thread-local random number generator.
    ///
    /// # Errors
    /// Any validation failure from [`PlannerConfig::validate`] aborts
    /// construction; no partial planner is returned.
    pub fn new(config: PlannerConfig) -> Result<Self> {
        Self::with_rng(config, &mut rand::thread_rng())
    }

    /// Build a planner with an injected random number generator.
    ///
    /// Two planners built from the same configuration and generators seeded
    /// identically (for example `StdRng::seed_from_u64`) produce identical
    /// schedules.
    ///
    /// # Errors
    /// Same contract as [`Planner::new`].
    pub fn with_rng<R: Rng>(config: PlannerConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let period_end = config.period.end_of(config.start_date)?;
        let dates = calendar::candidate_dates(config.start_date, period_end, config.frequency)?;
        let min_seconds = config.min_max_interval.min_seconds;

        let schedule = dates
            .into_iter()
            .map(|date| DaySchedule {
                date,
                times: slots::plan_day(date, &config.timerange, min_seconds, rng),
            })
            .collect();

        Ok(Self {
            config,
            period_end,
            schedule,
        })
    }

    /// The computed schedule: one entry per candidate date, ordered by date,
    /// times ordered by window.
    pub fn schedule(&self) -> &[DaySchedule] {
        &self.schedule
    }

    /// The configuration the planner was built from.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// The exclusive end of the planning period (`start_date` plus the
    /// configured period length).
    pub fn period_end(&self) -> NaiveDateTime {
        self.period_end
    }
}
