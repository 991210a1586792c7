//! Per-date time-slot generation and minimum-interval conflict resolution.
//!
//! One random time is drawn per hour window. Whenever a draw lands closer
//! than the minimum interval to any time already accepted for the same
//! date, it is shifted earlier by just enough to clear the tightest
//! violated constraint. Single pass, no resampling.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;

use crate::config::HourWindow;

const SECONDS_PER_DAY: i64 = 86_400;

/// Day-wrapped elapsed seconds from `from` to `to`: a negative difference
/// wraps around midnight into `[0, 86400)` instead of going negative.
fn elapsed_seconds(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_seconds().rem_euclid(SECONDS_PER_DAY)
}

/// Generate the post times for one candidate date, one per window in
/// configuration order.
///
/// For each window `(a, b)` the hour is drawn uniformly from `[a, b-1]`
/// and minute and second from `[0, 59]`. If the draw sits closer than
/// `min_seconds` to a previously accepted time, it is moved earlier by
/// `elapsed_to_last - worst_deficit` seconds, where the worst deficit is
/// the most negative `elapsed - min_seconds` across all accepted times.
/// The shift can leave the original window for tightly packed
/// configurations; that drift is accepted rather than re-drawn.
pub fn plan_day<R: Rng>(
    date: NaiveDate,
    windows: &[HourWindow],
    min_seconds: i64,
    rng: &mut R,
) -> Vec<NaiveDateTime> {
    let midnight = date.and_time(NaiveTime::MIN);
    let mut accepted: Vec<NaiveDateTime> = Vec::with_capacity(windows.len());

    for window in windows {
        // A zero-width window (only valid when min_seconds is 0) pins the
        // hour instead of drawing from an empty range.
        let hour = if window.end > window.start {
            rng.gen_range(window.start..window.end)
        } else {
            window.start
        };
        let minute = rng.gen_range(0u32..60);
        let second = rng.gen_range(0u32..60);

        let mut post_time = midnight
            + Duration::hours(i64::from(hour))
            + Duration::minutes(i64::from(minute))
            + Duration::seconds(i64::from(second));

        if let Some(&last) = accepted.last() {
            let since_last = elapsed_seconds(last, post_time);
            let worst_deficit = accepted
                .iter()
                .map(|&earlier| elapsed_seconds(earlier, post_time) - min_seconds)
                .filter(|&deficit| deficit < 0)
                .min();
            if let Some(deficit) = worst_deficit {
                post_time = post_time - Duration::seconds(since_last - deficit);
            }
        }

        accepted.push(post_time);
    }

    accepted
}
