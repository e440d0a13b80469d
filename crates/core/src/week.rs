//! Week window arithmetic.
//!
//! A week runs from the most recent Monday 00:00 *local* time through the
//! following Monday. The start bound is inclusive and the end exclusive: a
//! win at exactly Monday midnight opens the new week, one at Sunday
//! 23:59:59 closes the old one.

use chrono::{DateTime, Datelike, Duration, Local, LocalResult, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::Serialize;

use crate::types::Timestamp;

/// The current week's bounds, normalized to UTC for store queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekWindow {
    pub week_start: Timestamp,
    pub week_end: Timestamp,
}

impl WeekWindow {
    /// Whether a timestamp falls inside the window (start inclusive, end
    /// exclusive).
    pub fn contains(&self, at: Timestamp) -> bool {
        self.week_start <= at && at < self.week_end
    }
}

/// Week window containing the server's current local time.
pub fn current_week_window() -> WeekWindow {
    week_window_at(Local::now())
}

/// Week window containing `now`, with Monday midnight resolved in `now`'s
/// time zone.
pub fn week_window_at<Tz: TimeZone>(now: DateTime<Tz>) -> WeekWindow {
    let days_into_week = now.weekday().num_days_from_monday() as i64;
    let monday = now.date_naive() - Duration::days(days_into_week);
    let start_naive = monday.and_time(NaiveTime::MIN);

    let tz = now.timezone();
    let start = resolve_local(&tz, start_naive);
    let end = resolve_local(&tz, start_naive + Duration::days(7));

    WeekWindow {
        week_start: start.with_timezone(&Utc),
        week_end: end.with_timezone(&Utc),
    }
}

/// Map a naive local datetime onto the timeline.
///
/// Midnight can be ambiguous or nonexistent around DST transitions; an
/// ambiguous midnight takes the earlier instant, a skipped one lands where
/// the clock resumes.
fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(at) => at,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .unwrap_or_else(|| tz.from_utc_datetime(&naive)),
    }
}
