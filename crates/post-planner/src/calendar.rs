//! Candidate-date enumeration -- expands the configured frequency into the
//! ordered list of calendar dates inside the planning period.
//!
//! Wraps the `rrule` crate (v0.13): occurrences start at midnight of the
//! start date's calendar day and step at the recurrence granularity (daily
//! every day, weekly every 7 days aligned to the start weekday, yearly on
//! the same month and day).

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use rrule::{RRule, RRuleSet, Tz};

use crate::config::Frequency;
use crate::error::{PlanError, Result};

/// Upper bound on expanded occurrences. The longest possible enumeration is
/// a daily frequency across a one-year period (367 dates with leap days),
/// so this cap is never the limiting factor for a valid configuration.
const MAX_OCCURRENCES: u16 = 800;

/// Enumerate the candidate dates strictly after `start` and strictly before
/// `period_end`, at the granularity of `frequency`.
///
/// The first occurrence is always the start date itself and is dropped: the
/// schedule only contains future recurrences. The result is fully
/// materialized and deterministic given its inputs.
///
/// # Errors
/// Returns `PlanError::InvalidConfiguration` if the recurrence rule cannot
/// be built for the given start date.
pub fn candidate_dates(
    start: NaiveDateTime,
    period_end: NaiveDateTime,
    frequency: Frequency,
) -> Result<Vec<NaiveDate>> {
    let dtstart = Tz::UTC.from_utc_datetime(&start.date().and_time(NaiveTime::MIN));
    // rrule treats UNTIL as inclusive; back off one second so the period end
    // itself stays out of the schedule.
    let until = Tz::UTC.from_utc_datetime(&(period_end - Duration::seconds(1)));

    let rule = RRule::new(frequency.recurrence()).until(until);
    let set: RRuleSet = rule
        .build(dtstart)
        .map_err(|e| PlanError::InvalidConfiguration(format!("recurrence rule: {e}")))?;

    let dates = set
        .all(MAX_OCCURRENCES)
        .dates
        .into_iter()
        .skip(1)
        .map(|occurrence| occurrence.date_naive())
        .collect();

    Ok(dates)
}
