//! # post-planner
//!
//! Randomized post-time scheduling inside calendar periods and hour
//! windows.
//!
//! A [`Planner`] takes a start date, a period length (day/week/month/year),
//! a recurrence frequency (daily/weekly/yearly), and a list of allowed
//! hour-of-day windows, then eagerly computes one random post time per
//! window for every candidate date inside the period. Times on the same
//! date are kept at least a configured minimum interval apart by shifting
//! late draws earlier.
//!
//! ## Modules
//!
//! - [`config`] — configuration types and fail-fast validation
//! - [`calendar`] — candidate-date enumeration at the configured frequency
//! - [`slots`] — per-date time draws and minimum-interval correction
//! - [`planner`] — the `Planner` and its computed schedule
//! - [`error`] — error types
//!
//! ```no_run
//! use post_planner::{HourWindow, Planner, PlannerConfig};
//!
//! let config = PlannerConfig {
//!     timerange: vec![HourWindow::new(10, 12), HourWindow::new(15, 19)],
//!     ..PlannerConfig::default()
//! };
//! let planner = Planner::new(config)?;
//! for day in planner.schedule() {
//!     println!("{}: {:?}", day.date, day.times);
//! }
//! # Ok::<(), post_planner::PlanError>(())
//! ```

pub mod calendar;
pub mod config;
pub mod error;
pub mod planner;
pub mod slots;

pub use calendar::candidate_dates;
pub use config::{Frequency, HourWindow, IntervalBounds, PlanPeriod, PlannerConfig};
pub use error::{PlanError, Result};
pub use planner::{DaySchedule, Planner};
