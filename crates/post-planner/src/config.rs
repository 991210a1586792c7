//! Planner configuration -- periods, frequencies, hour windows, and the
//! fail-fast validation that runs before any schedule is generated.

use std::str::FromStr;

use chrono::{Duration, Local, Months, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Seconds in 23:59:59 -- the clamp applied to a window edge of 24 so the
/// tightness check measures to the end of the day instead of wrapping to 0.
const END_OF_DAY_SECONDS: i64 = 23 * 3600 + 59 * 60 + 59;

const SECONDS_PER_DAY: i64 = 86_400;

/// Calendar length of the planning horizon, measured from the start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanPeriod {
    Day,
    Week,
    Month,
    Year,
}

impl PlanPeriod {
    /// Resolve the period end as `start + <calendar offset>`.
    ///
    /// Month and year offsets are calendar-aware (Jan 31 + 1 month lands on
    /// the last day of February), not fixed durations.
    ///
    /// # Errors
    /// Returns `PlanError::InvalidConfiguration` if the offset leaves the
    /// representable date range.
    pub fn end_of(self, start: NaiveDateTime) -> Result<NaiveDateTime> {
        let end = match self {
            PlanPeriod::Day => start.checked_add_signed(Duration::days(1)),
            PlanPeriod::Week => start.checked_add_signed(Duration::weeks(1)),
            PlanPeriod::Month => start.checked_add_months(Months::new(1)),
            PlanPeriod::Year => start.checked_add_months(Months::new(12)),
        };
        end.ok_or_else(|| {
            PlanError::InvalidConfiguration(format!(
                "period end out of range for start date {start}"
            ))
        })
    }
}

impl FromStr for PlanPeriod {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "day" => Ok(PlanPeriod::Day),
            "week" => Ok(PlanPeriod::Week),
            "month" => Ok(PlanPeriod::Month),
            "year" => Ok(PlanPeriod::Year),
            other => Err(PlanError::InvalidConfiguration(format!(
                "period key should be day, week, month, year only, got {other:?}"
            ))),
        }
    }
}

/// How often a candidate date is produced inside the period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Yearly,
}

impl Frequency {
    /// The recurrence granularity behind each frequency name.
    // TODO: weekday/workday filtering on top of the plain granularities.
    pub(crate) fn recurrence(self) -> rrule::Frequency {
        match self {
            Frequency::Daily => rrule::Frequency::Daily,
            Frequency::Weekly => rrule::Frequency::Weekly,
            Frequency::Yearly => rrule::Frequency::Yearly,
        }
    }
}

impl FromStr for Frequency {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "yearly" => Ok(Frequency::Yearly),
            other => Err(PlanError::InvalidConfiguration(format!(
                "frequency key should be daily, weekly, yearly only, got {other:?}"
            ))),
        }
    }
}

/// An allowed band of clock hours within a day. One post time is drawn per
/// window per candidate date, in window order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourWindow {
    /// First allowed hour, `0..=24`.
    pub start: u32,
    /// Last allowed hour boundary, `start..=24`. Draws stay below this hour.
    pub end: u32,
}

impl HourWindow {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

impl From<(u32, u32)> for HourWindow {
    fn from((start, end): (u32, u32)) -> Self {
        Self { start, end }
    }
}

/// Minimum and maximum allowed spacing between two post times on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalBounds {
    /// Smallest permitted gap in seconds. Enforced during generation.
    pub min_seconds: i64,
    /// Largest permitted gap in seconds. Stored but not enforced.
    // TODO: enforce the upper bound once a shift-or-resample policy for it
    // is decided; callers may rely on the current pass-through behavior.
    pub max_seconds: i64,
}

impl IntervalBounds {
    pub fn new(min_seconds: i64, max_seconds: i64) -> Self {
        Self {
            min_seconds,
            max_seconds,
        }
    }
}

/// Construction-time configuration for a [`Planner`](crate::Planner).
///
/// All fields are validated fail-fast when the planner is built; no partial
/// planner is ever returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Horizon length from the start date.
    pub period: PlanPeriod,
    /// Allowed hour windows per day, in generation order.
    pub timerange: Vec<HourWindow>,
    /// Anchor for period resolution and date enumeration.
    pub start_date: NaiveDateTime,
    /// Calendar recurrence granularity inside the period.
    pub frequency: Frequency,
    /// Minimum (enforced) and maximum (unenforced) spacing between times.
    pub min_max_interval: IntervalBounds,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            period: PlanPeriod::Week,
            timerange: Vec::new(),
            start_date: Local::now().naive_local(),
            frequency: Frequency::Daily,
            min_max_interval: IntervalBounds::new(3600, 7200),
        }
    }
}

impl PlannerConfig {
    /// Check every configured value before generation starts.
    ///
    /// # Errors
    /// `PlanError::InvalidConfiguration` for an out-of-range or inverted
    /// hour window; `PlanError::IntervalTooTight` when a window-edge segment
    /// cannot hold the minimum interval.
    pub fn validate(&self) -> Result<()> {
        self.check_timerange()?;
        self.check_interval_bounds()
    }

    fn check_timerange(&self) -> Result<()> {
        for window in &self.timerange {
            if window.start > window.end {
                return Err(PlanError::InvalidConfiguration(format!(
                    "start hour should be less than end hour, got ({}, {})",
                    window.start, window.end
                )));
            }
            if window.start > 24 || window.end > 24 {
                return Err(PlanError::InvalidConfiguration(format!(
                    "hour should be between 0 and 24, got ({}, {})",
                    window.start, window.end
                )));
            }
        }
        Ok(())
    }

    /// Treat the windows as one concatenated timeline of hour edges and make
    /// sure every consecutive segment (inside a window as well as the gap
    /// between two windows) can hold the minimum interval. A segment that is
    /// too short could never produce a conforming time, so it is rejected
    /// here instead of failing silently during generation.
    fn check_interval_bounds(&self) -> Result<()> {
        let min_seconds = self.min_max_interval.min_seconds;
        let edges: Vec<u32> = self
            .timerange
            .iter()
            .flat_map(|w| [w.start, w.end])
            .collect();

        for pair in edges.windows(2) {
            let from = i64::from(pair[0]) * 3600;
            // An end edge of 24 measures to 23:59:59 of the same day, not to
            // midnight of the next, so the segment does not wrap to zero.
            let to = if pair[1] == 24 {
                END_OF_DAY_SECONDS
            } else {
                i64::from(pair[1]) * 3600
            };
            let elapsed = (to - from).rem_euclid(SECONDS_PER_DAY);
            if elapsed < min_seconds {
                return Err(PlanError::IntervalTooTight {
                    start: pair[0],
                    end: pair[1],
                    min_seconds,
                });
            }
        }
        Ok(())
    }
}
